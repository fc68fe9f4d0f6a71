//! Builders wiring Diesel repositories and credential adapters into the
//! services behind [`HttpState`].

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use hostel::domain::ports::{PasswordHasher, SessionTokens};
use hostel::domain::{
    AccountService, AllocationService, AttendanceService, ComplaintService, DashboardService,
    LeaveService, NoticeService, PaymentService, ResidentService, RoomChangeService,
    ViolationService,
};
use hostel::inbound::http::session::SessionCookies;
use hostel::inbound::http::state::{HttpSession, HttpState, HttpStatePorts};
use hostel::outbound::persistence::{
    DbPool, DieselAttendanceRepository, DieselComplaintRepository, DieselLeaveRepository,
    DieselNoticeRepository, DieselPaymentRepository, DieselRoomChangeRepository,
    DieselRoomRepository, DieselStatsRepository, DieselUserRepository,
    DieselViolationRepository,
};
use hostel::outbound::security::{BcryptPasswordHasher, JwtSessionTokens};

use super::ServerConfig;

/// Credential adapters shared by the account service and the middleware.
#[derive(Clone)]
pub(crate) struct Credentials {
    pub(crate) hasher: Arc<dyn PasswordHasher>,
    pub(crate) tokens: Arc<dyn SessionTokens>,
}

impl Credentials {
    pub(crate) fn from_config(config: &ServerConfig) -> Self {
        Self {
            hasher: Arc::new(BcryptPasswordHasher::new()),
            tokens: Arc::new(JwtSessionTokens::new(
                &config.signing_secret,
                Arc::new(DefaultClock),
            )),
        }
    }
}

fn build_ports(pool: &DbPool, config: &ServerConfig, credentials: &Credentials) -> HttpStatePorts {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));

    // Services implement both halves of their command/query pair, so each
    // one is shared between two fields.
    let accounts = Arc::new(AccountService::new(
        users.clone(),
        credentials.hasher.clone(),
        credentials.tokens.clone(),
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
        config.allocation_policy,
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

    HttpStatePorts {
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
    }
}

/// Build the shared handler state from the server configuration.
pub(crate) fn build_http_state(
    config: &ServerConfig,
    credentials: &Credentials,
) -> web::Data<HttpState> {
    let ports = build_ports(&config.db_pool, config, credentials);
    let session = HttpSession {
        tokens: credentials.tokens.clone(),
        cookies: SessionCookies::new(config.cookie_secure),
    };
    web::Data::new(HttpState::new(ports, session))
}
