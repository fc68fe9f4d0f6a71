//! Driven port for complaint storage.
use async_trait::async_trait;

use crate::domain::{Complaint, NewComplaint, StatusUpdate, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by complaint repository adapters.
    pub enum ComplaintRepositoryError {
        Connection { message: String } => "complaint repository connection failed: {message}",
        Query { message: String } => "complaint repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Store a complaint with status `Submitted`.
    async fn create(&self, complaint: &NewComplaint) -> Result<Complaint, ComplaintRepositoryError>;

    /// Complaints filed by one student, newest first.
    async fn list_for_student(
        &self,
        student_id: UserId,
    ) -> Result<Vec<Complaint>, ComplaintRepositoryError>;

    /// Every complaint with the submitter's name, newest first.
    async fn list_all(&self) -> Result<Vec<Complaint>, ComplaintRepositoryError>;

    /// Write the raw status label. Returns `false` when the id is unknown.
    async fn update_status(&self, update: &StatusUpdate) -> Result<bool, ComplaintRepositoryError>;
}
