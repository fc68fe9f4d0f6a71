//! Driving ports for payments and the finance view.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Error, FinanceSummary, NewPayment, Payment, StatusUpdate};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentCommand: Send + Sync {
    /// Record a payment owed by a student.
    async fn create(&self, payment: NewPayment) -> Result<Payment, Error>;

    /// Set a payment's status. Moving to `Paid` stamps the paid date.
    async fn update_status(&self, update: StatusUpdate) -> Result<(), Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentQuery: Send + Sync {
    /// Payments visible to the caller.
    async fn list(&self, viewer: &AuthenticatedUser) -> Result<Vec<Payment>, Error>;

    /// Every payment plus revenue and pending totals.
    async fn finance(&self) -> Result<FinanceSummary, Error>;
}
