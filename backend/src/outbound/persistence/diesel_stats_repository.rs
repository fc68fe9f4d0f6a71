//! SQLite-backed `StatsRepository` implementation using Diesel ORM.
//!
//! Every figure is a separate aggregate query; nothing is cached between
//! requests.

use async_trait::async_trait;
use diesel::dsl::{count_star, sum};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StatsRepository, StatsRepositoryError};
use crate::domain::{
    AdminCounts, ComplaintStatus, PaymentStatus, RecentComplaint, ReviewStatus, Role, RoomStatus,
    WardenStats,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::{DbPool, PoolError, SqliteConn};
use super::schema::{complaints, leaves, payments, rooms, users};

/// Diesel-backed implementation of the stats repository port.
#[derive(Clone)]
pub struct DieselStatsRepository {
    pool: DbPool,
}

impl DieselStatsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> StatsRepositoryError {
    map_basic_pool_error(error, StatsRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> StatsRepositoryError {
    map_basic_diesel_error(
        error,
        StatsRepositoryError::query,
        StatsRepositoryError::connection,
    )
}

async fn count_students(conn: &mut SqliteConn) -> QueryResult<i64> {
    users::table
        .filter(users::role.eq(Role::Student.as_str()))
        .select(count_star())
        .first(conn)
        .await
}

async fn count_open_complaints(conn: &mut SqliteConn) -> QueryResult<i64> {
    complaints::table
        .filter(complaints::status.ne(ComplaintStatus::Resolved.as_str()))
        .select(count_star())
        .first(conn)
        .await
}

async fn count_rooms_with_status(conn: &mut SqliteConn, status: RoomStatus) -> QueryResult<i64> {
    rooms::table
        .filter(rooms::status.eq(status.as_str()))
        .select(count_star())
        .first(conn)
        .await
}

#[async_trait]
impl StatsRepository for DieselStatsRepository {
    async fn warden_stats(&self) -> Result<WardenStats, StatsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total_students = count_students(&mut conn).await.map_err(map_diesel_error)?;
        let open_complaints = count_open_complaints(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let pending_leaves: i64 = leaves::table
            .filter(leaves::status.eq(ReviewStatus::Pending.as_str()))
            .select(count_star())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(WardenStats {
            total_students,
            open_complaints,
            pending_leaves,
        })
    }

    async fn admin_counts(&self) -> Result<AdminCounts, StatsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total_students = count_students(&mut conn).await.map_err(map_diesel_error)?;
        let total_rooms: i64 = rooms::table
            .select(count_star())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let occupied_rooms = count_rooms_with_status(&mut conn, RoomStatus::Occupied)
            .await
            .map_err(map_diesel_error)?;
        let maintenance_rooms = count_rooms_with_status(&mut conn, RoomStatus::Maintenance)
            .await
            .map_err(map_diesel_error)?;
        let vacant_rooms: i64 = rooms::table
            .filter(rooms::current_occupancy.eq(0))
            .filter(rooms::status.ne(RoomStatus::Maintenance.as_str()))
            .select(count_star())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let pending_fees: Option<f64> = payments::table
            .filter(payments::status.eq(PaymentStatus::Pending.as_str()))
            .select(sum(payments::amount))
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let open_complaints = count_open_complaints(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(AdminCounts {
            total_students,
            total_rooms,
            occupied_rooms,
            vacant_rooms,
            maintenance_rooms,
            pending_fees: pending_fees.unwrap_or(0.0),
            open_complaints,
        })
    }

    async fn recent_complaints(
        &self,
        limit: i64,
    ) -> Result<Vec<RecentComplaint>, StatsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(String, String, chrono::NaiveDateTime)> = complaints::table
            .order((complaints::created_at.desc(), complaints::id.desc()))
            .select((
                complaints::category,
                complaints::description,
                complaints::created_at,
            ))
            .limit(limit)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows
            .into_iter()
            .map(|(category, description, created_at)| RecentComplaint {
                category,
                description,
                created_at,
            })
            .collect())
    }
}
