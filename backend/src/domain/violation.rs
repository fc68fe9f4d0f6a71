//! Disciplinary violations issued by staff.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::labels::define_label_enum;
use super::validation::{FieldError, optional_text, required_text};
use super::UserId;

define_label_enum! {
    /// Card colour of a violation, from warning to most serious.
    pub enum Severity as "severity" {
        Yellow => "Yellow",
        Orange => "Orange",
        Red => "Red",
    }
}

/// Stored violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub id: i32,
    pub student_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(rename = "type")]
    pub violation_type: String,
    pub severity: Severity,
    pub description: Option<String>,
    pub issued_by: UserId,
    pub issued_at: NaiveDateTime,
}

/// Validated violation to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewViolation {
    student_id: UserId,
    violation_type: String,
    severity: Severity,
    description: Option<String>,
    issued_by: UserId,
}

impl NewViolation {
    pub fn try_new(
        student_id: UserId,
        violation_type: &str,
        severity: Severity,
        description: Option<&str>,
        issued_by: UserId,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            student_id,
            violation_type: required_text("type", violation_type)?,
            severity,
            description: optional_text(description),
            issued_by,
        })
    }

    pub fn student_id(&self) -> UserId {
        self.student_id
    }

    pub fn violation_type(&self) -> &str {
        self.violation_type.as_str()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn issued_by(&self) -> UserId {
        self.issued_by
    }
}
