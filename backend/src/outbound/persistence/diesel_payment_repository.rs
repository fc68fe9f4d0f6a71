//! SQLite-backed `PaymentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PaymentRepository, PaymentRepositoryError, PaymentTotals};
use crate::domain::{NewPayment, Payment, PaymentStatus, StatusUpdate, UserId};

use super::diesel_basic_error_mapping::{
    is_foreign_key_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewPaymentRow, PaymentRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::payment_from_row;
use super::schema::{payments, users};

/// Diesel-backed implementation of the payment repository port.
#[derive(Clone)]
pub struct DieselPaymentRepository {
    pool: DbPool,
}

impl DieselPaymentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PaymentRepositoryError {
    map_basic_pool_error(error, PaymentRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PaymentRepositoryError {
    map_basic_diesel_error(
        error,
        PaymentRepositoryError::query,
        PaymentRepositoryError::connection,
    )
}

fn decode(row: PaymentRow, student_name: Option<String>) -> Result<Payment, PaymentRepositoryError> {
    payment_from_row(row, student_name)
        .map_err(|err| PaymentRepositoryError::query(err.to_string()))
}

#[async_trait]
impl PaymentRepository for DieselPaymentRepository {
    async fn create(&self, payment: &NewPayment) -> Result<Payment, PaymentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewPaymentRow {
            student_id: payment.student_id().get(),
            amount: payment.amount(),
            due_date: payment.due_date(),
            status: payment.status().as_str(),
            transaction_id: payment.transaction_id(),
        };
        let stored = diesel::insert_into(payments::table)
            .values(&row)
            .returning(PaymentRow::as_returning())
            .get_result::<PaymentRow>(&mut conn)
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    PaymentRepositoryError::unknown_student(payment.student_id().get())
                } else {
                    map_diesel_error(err)
                }
            })?;
        decode(stored, None)
    }

    async fn list_for_student(
        &self,
        student_id: UserId,
    ) -> Result<Vec<Payment>, PaymentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PaymentRow> = payments::table
            .filter(payments::student_id.eq(student_id.get()))
            .order((payments::due_date.desc(), payments::id.desc()))
            .select(PaymentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(|row| decode(row, None)).collect()
    }

    async fn list_all(&self) -> Result<Vec<Payment>, PaymentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(PaymentRow, String)> = payments::table
            .inner_join(users::table)
            .order((payments::due_date.desc(), payments::id.desc()))
            .select((PaymentRow::as_select(), users::name))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter()
            .map(|(row, name)| decode(row, Some(name)))
            .collect()
    }

    async fn update_status(
        &self,
        update: &StatusUpdate,
        paid_at: Option<NaiveDateTime>,
    ) -> Result<bool, PaymentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let target = payments::table.find(update.record_id);
        let changed = match paid_at {
            Some(paid_at) => diesel::update(target)
                .set((
                    payments::status.eq(update.status.as_str()),
                    payments::paid_date.eq(Some(paid_at)),
                ))
                .execute(&mut conn)
                .await,
            None => diesel::update(target)
                .set(payments::status.eq(update.status.as_str()))
                .execute(&mut conn)
                .await,
        }
        .map_err(map_diesel_error)?;
        Ok(changed > 0)
    }

    async fn totals(&self) -> Result<PaymentTotals, PaymentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let revenue: Option<f64> = payments::table
            .filter(payments::status.eq(PaymentStatus::Paid.as_str()))
            .select(sum(payments::amount))
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let pending: Option<f64> = payments::table
            .filter(payments::status.eq(PaymentStatus::Pending.as_str()))
            .select(sum(payments::amount))
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(PaymentTotals {
            revenue: revenue.unwrap_or(0.0),
            pending: pending.unwrap_or(0.0),
        })
    }
}
