//! SQLite-backed `LeaveRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LeaveRepository, LeaveRepositoryError};
use crate::domain::{Leave, LeaveDraft, StatusUpdate, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{LeaveRow, NewLeaveRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::leave_from_row;
use super::schema::{leaves, users};

/// Diesel-backed implementation of the leave repository port.
#[derive(Clone)]
pub struct DieselLeaveRepository {
    pool: DbPool,
}

impl DieselLeaveRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> LeaveRepositoryError {
    map_basic_pool_error(error, LeaveRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> LeaveRepositoryError {
    map_basic_diesel_error(
        error,
        LeaveRepositoryError::query,
        LeaveRepositoryError::connection,
    )
}

fn decode(row: LeaveRow, student_name: Option<String>) -> Result<Leave, LeaveRepositoryError> {
    leave_from_row(row, student_name).map_err(|err| LeaveRepositoryError::query(err.to_string()))
}

#[async_trait]
impl LeaveRepository for DieselLeaveRepository {
    async fn create(
        &self,
        student_id: UserId,
        draft: &LeaveDraft,
    ) -> Result<Leave, LeaveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewLeaveRow {
            student_id: student_id.get(),
            from_date: draft.from_date(),
            to_date: draft.to_date(),
            reason: draft.reason(),
        };
        let stored = diesel::insert_into(leaves::table)
            .values(&row)
            .returning(LeaveRow::as_returning())
            .get_result::<LeaveRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode(stored, None)
    }

    async fn list_for_student(
        &self,
        student_id: UserId,
    ) -> Result<Vec<Leave>, LeaveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<LeaveRow> = leaves::table
            .filter(leaves::student_id.eq(student_id.get()))
            .order((leaves::applied_at.desc(), leaves::id.desc()))
            .select(LeaveRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(|row| decode(row, None)).collect()
    }

    async fn list_all(&self) -> Result<Vec<Leave>, LeaveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(LeaveRow, String)> = leaves::table
            .inner_join(users::table)
            .order((leaves::applied_at.desc(), leaves::id.desc()))
            .select((LeaveRow::as_select(), users::name))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter()
            .map(|(row, name)| decode(row, Some(name)))
            .collect()
    }

    async fn update_status(&self, update: &StatusUpdate) -> Result<bool, LeaveRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changed = diesel::update(leaves::table.find(update.record_id))
            .set((
                leaves::status.eq(update.status.as_str()),
                leaves::approved_by.eq(Some(update.reviewer.get())),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(changed > 0)
    }
}
