//! Leave-of-absence requests.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::review::ReviewStatus;
use super::validation::{FieldError, required_text};
use super::UserId;

/// Stored leave request. `approved_by` records the last reviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: i32,
    pub student_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: ReviewStatus,
    pub approved_by: Option<UserId>,
    pub applied_at: NaiveDateTime,
}

/// Validated leave application.
///
/// ## Invariants
/// - `from_date <= to_date`.
/// - `reason` is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveDraft {
    from_date: NaiveDate,
    to_date: NaiveDate,
    reason: String,
}

impl LeaveDraft {
    pub fn try_new(
        from_date: NaiveDate,
        to_date: NaiveDate,
        reason: &str,
    ) -> Result<Self, FieldError> {
        if to_date < from_date {
            return Err(FieldError::invalid("toDate", "must not be before fromDate"));
        }
        Ok(Self {
            from_date,
            to_date,
            reason: required_text("reason", reason)?,
        })
    }

    pub fn from_date(&self) -> NaiveDate {
        self.from_date
    }

    pub fn to_date(&self) -> NaiveDate {
        self.to_date
    }

    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }
}
