//! Reviewer decisions shared by complaints, leaves, room changes and payments.
//!
//! Status labels from reviewers are passed to storage verbatim. The table
//! CHECK constraints are the only gate, so an unknown label fails the write
//! and leaves the row untouched.

use super::labels::define_label_enum;
use super::UserId;

define_label_enum! {
    /// Outcome of a leave or room change review.
    pub enum ReviewStatus as "review status" {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

/// Request to move a record to a new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Row id of the record being reviewed.
    pub record_id: i32,
    /// Raw status label as submitted.
    pub status: String,
    /// Staff member making the change.
    pub reviewer: UserId,
}

impl StatusUpdate {
    pub fn new(record_id: i32, status: impl Into<String>, reviewer: UserId) -> Self {
        Self {
            record_id,
            status: status.into(),
            reviewer,
        }
    }
}
