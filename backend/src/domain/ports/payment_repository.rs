//! Driven port for payment storage and finance totals.
use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::{NewPayment, Payment, StatusUpdate, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by payment repository adapters.
    pub enum PaymentRepositoryError {
        Connection { message: String } => "payment repository connection failed: {message}",
        Query { message: String } => "payment repository query failed: {message}",
        /// The referenced student does not exist.
        UnknownStudent { student_id: i32 } => "student {student_id} does not exist",
    }
}

/// Revenue and outstanding sums across all payments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaymentTotals {
    /// Sum of `Paid` amounts.
    pub revenue: f64,
    /// Sum of `Pending` amounts.
    pub pending: f64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &NewPayment) -> Result<Payment, PaymentRepositoryError>;

    /// Payments owed by one student, latest due date first.
    async fn list_for_student(
        &self,
        student_id: UserId,
    ) -> Result<Vec<Payment>, PaymentRepositoryError>;

    /// Every payment with the student's name, latest due date first.
    async fn list_all(&self) -> Result<Vec<Payment>, PaymentRepositoryError>;

    /// Write the raw status label, setting `paid_date` when `paid_at` is
    /// present. Returns `false` when the id is unknown.
    async fn update_status(
        &self,
        update: &StatusUpdate,
        paid_at: Option<NaiveDateTime>,
    ) -> Result<bool, PaymentRepositoryError>;

    async fn totals(&self) -> Result<PaymentTotals, PaymentRepositoryError>;
}
