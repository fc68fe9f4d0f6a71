//! Maintenance and conduct complaints raised by students.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::labels::define_label_enum;
use super::validation::{FieldError, required_text};
use super::UserId;

define_label_enum! {
    /// Complaint lifecycle. Staff may set any value in any order.
    pub enum ComplaintStatus as "complaint status" {
        Submitted => "Submitted",
        Assigned => "Assigned",
        InProgress => "InProgress",
        Resolved => "Resolved",
    }
}

/// Stored complaint. `student_name` is filled for staff listings only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: i32,
    pub student_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    /// Room label captured when the complaint was filed.
    pub room_number: Option<String>,
    #[schema(example = "Plumbing")]
    pub category: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: NaiveDateTime,
}

/// Validated complaint contents from a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintDraft {
    category: String,
    description: String,
}

impl ComplaintDraft {
    /// Validate category and description, trimming both.
    pub fn try_new(category: &str, description: &str) -> Result<Self, FieldError> {
        Ok(Self {
            category: required_text("category", category)?,
            description: required_text("description", description)?,
        })
    }

    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// Row to insert, with the submitter's room snapshot resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComplaint {
    pub student_id: UserId,
    pub room_number: String,
    pub draft: ComplaintDraft,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "leak", "category")]
    #[case("Plumbing", "  ", "description")]
    fn draft_requires_both_fields(
        #[case] category: &str,
        #[case] description: &str,
        #[case] field: &str,
    ) {
        let err = ComplaintDraft::try_new(category, description).expect_err("invalid draft");
        assert_eq!(err.field(), field);
    }

    #[rstest]
    fn staff_listing_includes_student_name_only_when_present() {
        let complaint = Complaint {
            id: 1,
            student_id: UserId::new(4),
            student_name: None,
            room_number: Some("101".to_owned()),
            category: "Electrical".to_owned(),
            description: "Fan broken".to_owned(),
            status: ComplaintStatus::Submitted,
            created_at: NaiveDateTime::default(),
        };
        let value = serde_json::to_value(&complaint).expect("serialise");
        assert!(value.get("studentName").is_none());
        assert_eq!(value["status"], "Submitted");

        let named = Complaint {
            student_name: Some("Ravi".to_owned()),
            ..complaint
        };
        let value = serde_json::to_value(&named).expect("serialise");
        assert_eq!(value["studentName"], "Ravi");
    }
}
