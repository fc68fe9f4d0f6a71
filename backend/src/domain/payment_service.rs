//! Payment services and the admin finance view.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    PaymentCommand, PaymentQuery, PaymentRepository, PaymentRepositoryError,
};
use crate::domain::{
    AuthenticatedUser, Error, FinanceSummary, NewPayment, Payment, PaymentStatus, Role,
    StatusUpdate,
};

fn map_repository_error(error: PaymentRepositoryError) -> Error {
    match error {
        PaymentRepositoryError::UnknownStudent { student_id } => {
            Error::invalid_request(format!("student {student_id} does not exist"))
        }
        PaymentRepositoryError::Connection { message } => {
            Error::internal(format!("payment repository unavailable: {message}"))
        }
        PaymentRepositoryError::Query { message } => {
            Error::internal(format!("payment repository error: {message}"))
        }
    }
}

/// Payment service implementing [`PaymentCommand`] and [`PaymentQuery`].
#[derive(Clone)]
pub struct PaymentService<R> {
    payments: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> PaymentService<R> {
    /// Create a service; `clock` stamps the paid date.
    pub fn new(payments: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { payments, clock }
    }
}

#[async_trait]
impl<R> PaymentCommand for PaymentService<R>
where
    R: PaymentRepository,
{
    async fn create(&self, payment: NewPayment) -> Result<Payment, Error> {
        let payment = self
            .payments
            .create(&payment)
            .await
            .map_err(map_repository_error)?;
        info!(payment_id = payment.id, student_id = %payment.student_id, "payment recorded");
        Ok(payment)
    }

    async fn update_status(&self, update: StatusUpdate) -> Result<(), Error> {
        let paid_at = (update.status == PaymentStatus::Paid.as_str())
            .then(|| self.clock.utc().naive_utc());
        let found = self
            .payments
            .update_status(&update, paid_at)
            .await
            .map_err(map_repository_error)?;
        if !found {
            return Err(Error::not_found("Payment not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> PaymentQuery for PaymentService<R>
where
    R: PaymentRepository,
{
    async fn list(&self, viewer: &AuthenticatedUser) -> Result<Vec<Payment>, Error> {
        let listing = match viewer.role {
            Role::Student => self.payments.list_for_student(viewer.id).await,
            Role::Warden | Role::Admin => self.payments.list_all().await,
        };
        listing.map_err(map_repository_error)
    }

    async fn finance(&self) -> Result<FinanceSummary, Error> {
        let payments = self
            .payments
            .list_all()
            .await
            .map_err(map_repository_error)?;
        let totals = self
            .payments
            .totals()
            .await
            .map_err(map_repository_error)?;
        Ok(FinanceSummary {
            payments,
            total_revenue: totals.revenue,
            pending_dues: totals.pending,
        })
    }
}
