//! Fee payments and the finance summary.
//!
//! Gateway fields are stored but no gateway is called; status changes are
//! recorded by an admin.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::labels::define_label_enum;
use super::validation::FieldError;
use super::UserId;

define_label_enum! {
    /// Payment state. There is no enforced transition order.
    pub enum PaymentStatus as "payment status" {
        Paid => "Paid",
        Pending => "Pending",
        Overdue => "Overdue",
        Partial => "Partial",
    }
}

/// Stored payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i32,
    pub student_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDateTime>,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
}

/// Validated payment record created by an admin.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    student_id: UserId,
    amount: f64,
    due_date: Option<NaiveDate>,
    status: PaymentStatus,
    transaction_id: Option<String>,
}

impl NewPayment {
    /// Validate the amount; status defaults to [`PaymentStatus::Pending`].
    pub fn try_new(
        student_id: UserId,
        amount: f64,
        due_date: Option<NaiveDate>,
        status: Option<PaymentStatus>,
        transaction_id: Option<String>,
    ) -> Result<Self, FieldError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(FieldError::invalid("amount", "must be a positive number"));
        }
        Ok(Self {
            student_id,
            amount,
            due_date,
            status: status.unwrap_or(PaymentStatus::Pending),
            transaction_id: super::validation::optional_text(transaction_id.as_deref()),
        })
    }

    pub fn student_id(&self) -> UserId {
        self.student_id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }
}

/// Admin finance view: every payment plus revenue and outstanding totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub payments: Vec<Payment>,
    /// Sum of `Paid` amounts.
    pub total_revenue: f64,
    /// Sum of `Pending` amounts.
    pub pending_dues: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(f64::INFINITY)]
    fn rejects_non_positive_amounts(#[case] amount: f64) {
        let err = NewPayment::try_new(UserId::new(1), amount, None, None, None)
            .expect_err("invalid amount");
        assert_eq!(err.field(), "amount");
    }

    #[rstest]
    fn defaults_to_pending() {
        let payment = NewPayment::try_new(UserId::new(1), 1500.0, None, None, Some(" ".to_owned()))
            .expect("valid payment");
        assert_eq!(payment.status(), PaymentStatus::Pending);
        assert!(payment.transaction_id().is_none());
    }
}
