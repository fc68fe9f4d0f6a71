//! Driving ports for room change requests.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Error, RoomChangeDraft, RoomChangeRequest, StatusUpdate};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomChangeCommand: Send + Sync {
    /// Ask to move the calling student to another room.
    async fn request(
        &self,
        viewer: &AuthenticatedUser,
        draft: RoomChangeDraft,
    ) -> Result<RoomChangeRequest, Error>;

    /// Review a request. Approval does not move the student.
    async fn update_status(&self, update: StatusUpdate) -> Result<(), Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomChangeQuery: Send + Sync {
    /// Requests visible to the caller.
    async fn list(&self, viewer: &AuthenticatedUser) -> Result<Vec<RoomChangeRequest>, Error>;
}
