//! SQLite-backed `ComplaintRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ComplaintRepository, ComplaintRepositoryError};
use crate::domain::{Complaint, NewComplaint, StatusUpdate, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ComplaintRow, NewComplaintRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::complaint_from_row;
use super::schema::{complaints, users};

/// Diesel-backed implementation of the complaint repository port.
#[derive(Clone)]
pub struct DieselComplaintRepository {
    pool: DbPool,
}

impl DieselComplaintRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ComplaintRepositoryError {
    map_basic_pool_error(error, ComplaintRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ComplaintRepositoryError {
    map_basic_diesel_error(
        error,
        ComplaintRepositoryError::query,
        ComplaintRepositoryError::connection,
    )
}

fn decode(
    row: ComplaintRow,
    student_name: Option<String>,
) -> Result<Complaint, ComplaintRepositoryError> {
    complaint_from_row(row, student_name)
        .map_err(|err| ComplaintRepositoryError::query(err.to_string()))
}

#[async_trait]
impl ComplaintRepository for DieselComplaintRepository {
    async fn create(&self, complaint: &NewComplaint) -> Result<Complaint, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewComplaintRow {
            student_id: complaint.student_id.get(),
            room_number: complaint.room_number.as_str(),
            category: complaint.draft.category(),
            description: complaint.draft.description(),
        };
        let stored = diesel::insert_into(complaints::table)
            .values(&row)
            .returning(ComplaintRow::as_returning())
            .get_result::<ComplaintRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode(stored, None)
    }

    async fn list_for_student(
        &self,
        student_id: UserId,
    ) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ComplaintRow> = complaints::table
            .filter(complaints::student_id.eq(student_id.get()))
            .order((complaints::created_at.desc(), complaints::id.desc()))
            .select(ComplaintRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(|row| decode(row, None)).collect()
    }

    async fn list_all(&self) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(ComplaintRow, String)> = complaints::table
            .inner_join(users::table)
            .order((complaints::created_at.desc(), complaints::id.desc()))
            .select((ComplaintRow::as_select(), users::name))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter()
            .map(|(row, name)| decode(row, Some(name)))
            .collect()
    }

    async fn update_status(&self, update: &StatusUpdate) -> Result<bool, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changed = diesel::update(complaints::table.find(update.record_id))
            .set(complaints::status.eq(update.status.as_str()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(changed > 0)
    }
}
