//! Driving ports for leave requests.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Error, Leave, LeaveDraft, StatusUpdate};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveCommand: Send + Sync {
    /// Apply for leave as the calling student.
    async fn apply(&self, viewer: &AuthenticatedUser, draft: LeaveDraft) -> Result<Leave, Error>;

    /// Review a leave request.
    async fn update_status(&self, update: StatusUpdate) -> Result<(), Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveQuery: Send + Sync {
    /// Leave requests visible to the caller.
    async fn list(&self, viewer: &AuthenticatedUser) -> Result<Vec<Leave>, Error>;
}
