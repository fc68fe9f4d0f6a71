//! SQLite-backed `AttendanceRepository` implementation using Diesel ORM.
//!
//! Each roll call is one row; the per-student marks are stored as a JSON
//! array in the `records` column.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AttendanceRepository, AttendanceRepositoryError};
use crate::domain::{AttendanceSheet, NewAttendanceSheet};

use super::diesel_basic_error_mapping::{
    is_foreign_key_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{AttendanceRow, NewAttendanceRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::attendance_from_row;
use super::schema::attendance;

/// Diesel-backed implementation of the attendance repository port.
#[derive(Clone)]
pub struct DieselAttendanceRepository {
    pool: DbPool,
}

impl DieselAttendanceRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AttendanceRepositoryError {
    map_basic_pool_error(error, AttendanceRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AttendanceRepositoryError {
    map_basic_diesel_error(
        error,
        AttendanceRepositoryError::query,
        AttendanceRepositoryError::connection,
    )
}

fn decode(row: AttendanceRow) -> Result<AttendanceSheet, AttendanceRepositoryError> {
    attendance_from_row(row).map_err(|err| AttendanceRepositoryError::query(err.to_string()))
}

#[async_trait]
impl AttendanceRepository for DieselAttendanceRepository {
    async fn create(
        &self,
        sheet: &NewAttendanceSheet,
    ) -> Result<AttendanceSheet, AttendanceRepositoryError> {
        let records = serde_json::to_string(sheet.records())
            .map_err(|err| AttendanceRepositoryError::query(err.to_string()))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewAttendanceRow {
            date: sheet.date(),
            hostel_id: sheet.hostel_id(),
            marked_by: sheet.marked_by().get(),
            records: records.as_str(),
        };
        let stored = diesel::insert_into(attendance::table)
            .values(&row)
            .returning(AttendanceRow::as_returning())
            .get_result::<AttendanceRow>(&mut conn)
            .await
            .map_err(|err| match sheet.hostel_id() {
                Some(hostel_id) if is_foreign_key_violation(&err) => {
                    AttendanceRepositoryError::unknown_hostel(format!("hostel {hostel_id}"))
                }
                _ => map_diesel_error(err),
            })?;
        decode(stored)
    }

    async fn list_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceSheet>, AttendanceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<AttendanceRow> = attendance::table
            .filter(attendance::date.eq(date))
            .order(attendance::id.asc())
            .select(AttendanceRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(decode).collect()
    }
}
