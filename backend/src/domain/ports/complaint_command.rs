//! Driving ports for complaints.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Complaint, ComplaintDraft, Error, StatusUpdate};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintCommand: Send + Sync {
    /// File a complaint for the calling student.
    async fn submit(
        &self,
        viewer: &AuthenticatedUser,
        draft: ComplaintDraft,
    ) -> Result<Complaint, Error>;

    /// Move a complaint to a new status.
    async fn update_status(&self, update: StatusUpdate) -> Result<(), Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintQuery: Send + Sync {
    /// Complaints visible to the caller.
    async fn list(&self, viewer: &AuthenticatedUser) -> Result<Vec<Complaint>, Error>;
}
