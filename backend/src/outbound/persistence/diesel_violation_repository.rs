//! SQLite-backed `ViolationRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ViolationRepository, ViolationRepositoryError};
use crate::domain::{NewViolation, UserId, Violation};

use super::diesel_basic_error_mapping::{
    is_foreign_key_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewViolationRow, ViolationRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::violation_from_row;
use super::schema::{users, violations};

/// Diesel-backed implementation of the violation repository port.
#[derive(Clone)]
pub struct DieselViolationRepository {
    pool: DbPool,
}

impl DieselViolationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ViolationRepositoryError {
    map_basic_pool_error(error, ViolationRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ViolationRepositoryError {
    map_basic_diesel_error(
        error,
        ViolationRepositoryError::query,
        ViolationRepositoryError::connection,
    )
}

fn decode(
    row: ViolationRow,
    student_name: Option<String>,
) -> Result<Violation, ViolationRepositoryError> {
    violation_from_row(row, student_name)
        .map_err(|err| ViolationRepositoryError::query(err.to_string()))
}

#[async_trait]
impl ViolationRepository for DieselViolationRepository {
    async fn create(
        &self,
        violation: &NewViolation,
    ) -> Result<Violation, ViolationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewViolationRow {
            student_id: violation.student_id().get(),
            violation_type: violation.violation_type(),
            severity: violation.severity().as_str(),
            description: violation.description(),
            issued_by: violation.issued_by().get(),
        };
        let stored = diesel::insert_into(violations::table)
            .values(&row)
            .returning(ViolationRow::as_returning())
            .get_result::<ViolationRow>(&mut conn)
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    ViolationRepositoryError::unknown_student(violation.student_id().get())
                } else {
                    map_diesel_error(err)
                }
            })?;
        decode(stored, None)
    }

    async fn list_for_student(
        &self,
        student_id: UserId,
    ) -> Result<Vec<Violation>, ViolationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ViolationRow> = violations::table
            .filter(violations::student_id.eq(student_id.get()))
            .order((violations::issued_at.desc(), violations::id.desc()))
            .select(ViolationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(|row| decode(row, None)).collect()
    }

    async fn list_all(&self) -> Result<Vec<Violation>, ViolationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(ViolationRow, String)> = violations::table
            .inner_join(users::table)
            .order((violations::issued_at.desc(), violations::id.desc()))
            .select((ViolationRow::as_select(), users::name))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter()
            .map(|(row, name)| decode(row, Some(name)))
            .collect()
    }
}
