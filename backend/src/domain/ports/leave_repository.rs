//! Driven port for leave request storage.
use async_trait::async_trait;

use crate::domain::{Leave, LeaveDraft, StatusUpdate, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by leave repository adapters.
    pub enum LeaveRepositoryError {
        Connection { message: String } => "leave repository connection failed: {message}",
        Query { message: String } => "leave repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveRepository: Send + Sync {
    /// Store a leave request with status `Pending`.
    async fn create(
        &self,
        student_id: UserId,
        draft: &LeaveDraft,
    ) -> Result<Leave, LeaveRepositoryError>;

    /// Requests from one student, most recently applied first.
    async fn list_for_student(&self, student_id: UserId)
    -> Result<Vec<Leave>, LeaveRepositoryError>;

    /// Every request with the applicant's name, most recently applied first.
    async fn list_all(&self) -> Result<Vec<Leave>, LeaveRepositoryError>;

    /// Write the raw status label and record the reviewer as approver.
    /// Returns `false` when the id is unknown.
    async fn update_status(&self, update: &StatusUpdate) -> Result<bool, LeaveRepositoryError>;
}
