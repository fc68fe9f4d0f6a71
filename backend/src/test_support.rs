//! Test utilities shared by unit tests and the integration suites.
//!
//! Compiled only with the `test-support` feature, which the crate's own
//! dev-dependency enables.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tempfile::TempDir;

use crate::domain::ports::{PasswordHasher, SessionTokens};
use crate::domain::{
    AccountService, AllocationPolicy, AllocationService, AttendanceService, ComplaintService,
    DashboardService, LeaveService, NoticeService, PaymentService, ResidentService,
    RoomChangeService, ViolationService,
};
use crate::inbound::http::session::SessionCookies;
use crate::inbound::http::state::{HttpSession, HttpState, HttpStatePorts};
use crate::outbound::persistence::{
    DbPool, DieselAttendanceRepository, DieselComplaintRepository, DieselLeaveRepository,
    DieselNoticeRepository, DieselPaymentRepository, DieselRoomChangeRepository,
    DieselRoomRepository, DieselStatsRepository, DieselUserRepository,
    DieselViolationRepository, MigrationError, PoolConfig, PoolError, run_pending_migrations,
};
use crate::outbound::security::{BcryptPasswordHasher, JwtSessionTokens};

/// Cheapest cost bcrypt accepts.
pub const TEST_HASH_COST: u32 = 4;

/// Signing key used by [`TestDatabase::http_state`].
pub const TEST_SIGNING_SECRET: &[u8] = b"integration-test-secret-integration-test";

/// Failure while preparing a throwaway database.
#[derive(Debug, thiserror::Error)]
pub enum TestDatabaseError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[from] std::io::Error),
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Migrated SQLite file in a private temporary directory.
///
/// The directory, and the database with it, is removed on drop.
pub struct TestDatabase {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDatabase {
    /// Create the file, apply every migration and open a small pool.
    pub async fn new() -> Result<Self, TestDatabaseError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hostel.db");
        let url = path.to_string_lossy().into_owned();
        run_pending_migrations(&url).await?;
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(4)).await?;
        Ok(Self {
            _dir: dir,
            path,
            pool,
        })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Database URL accepted by [`PoolConfig::new`].
    pub fn url(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Hasher with the cheapest bcrypt cost.
    pub fn hasher() -> Arc<dyn PasswordHasher> {
        Arc::new(BcryptPasswordHasher::with_cost(TEST_HASH_COST))
    }

    /// Token codec keyed with [`TEST_SIGNING_SECRET`].
    pub fn tokens() -> Arc<dyn SessionTokens> {
        Arc::new(JwtSessionTokens::new(
            TEST_SIGNING_SECRET,
            Arc::new(DefaultClock),
        ))
    }

    /// Handler state wired to the Diesel repositories over this database.
    pub fn http_state(&self, policy: AllocationPolicy) -> web::Data<HttpState> {
        let pool = &self.pool;
        let users = Arc::new(DieselUserRepository::new(pool.clone()));
        let tokens = Self::tokens();

        let accounts = Arc::new(AccountService::new(
            users.clone(),
            Self::hasher(),
            tokens.clone(),
        ));
        let complaints = Arc::new(ComplaintService::new(
            Arc::new(DieselComplaintRepository::new(pool.clone())),
            users.clone(),
        ));
        let leaves = Arc::new(LeaveService::new(Arc::new(DieselLeaveRepository::new(
            pool.clone(),
        ))));
        let room_changes = Arc::new(RoomChangeService::new(
            Arc::new(DieselRoomChangeRepository::new(pool.clone())),
            users.clone(),
        ));
        let payments = Arc::new(PaymentService::new(
            Arc::new(DieselPaymentRepository::new(pool.clone())),
            Arc::new(DefaultClock),
        ));
        let allocation = Arc::new(AllocationService::new(
            Arc::new(DieselRoomRepository::new(pool.clone())),
            policy,
        ));
        let notices = Arc::new(NoticeService::new(Arc::new(DieselNoticeRepository::new(
            pool.clone(),
        ))));
        let attendance = Arc::new(AttendanceService::new(Arc::new(
            DieselAttendanceRepository::new(pool.clone()),
        )));
        let violations = Arc::new(ViolationService::new(Arc::new(
            DieselViolationRepository::new(pool.clone()),
        )));

        let ports = HttpStatePorts {
            accounts: accounts.clone(),
            profiles: accounts,
            residents: Arc::new(ResidentService::new(users)),
            complaints: complaints.clone(),
            complaints_query: complaints,
            leaves: leaves.clone(),
            leaves_query: leaves,
            room_changes: room_changes.clone(),
            room_changes_query: room_changes,
            payments: payments.clone(),
            payments_query: payments,
            allocation: allocation.clone(),
            rooms: allocation,
            dashboard: Arc::new(DashboardService::new(Arc::new(DieselStatsRepository::new(
                pool.clone(),
            )))),
            notices: notices.clone(),
            notices_query: notices,
            attendance: attendance.clone(),
            attendance_query: attendance,
            violations: violations.clone(),
            violations_query: violations,
        };
        let session = HttpSession {
            tokens,
            cookies: SessionCookies::new(false),
        };
        web::Data::new(HttpState::new(ports, session))
    }
}
