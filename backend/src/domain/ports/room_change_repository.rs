//! Driven port for room change request storage.
use async_trait::async_trait;

use crate::domain::{NewRoomChangeRequest, RoomChangeRequest, StatusUpdate, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by room change repository adapters.
    pub enum RoomChangeRepositoryError {
        Connection { message: String } => "room change repository connection failed: {message}",
        Query { message: String } => "room change repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomChangeRepository: Send + Sync {
    /// Store a request with status `Pending`.
    async fn create(
        &self,
        request: &NewRoomChangeRequest,
    ) -> Result<RoomChangeRequest, RoomChangeRepositoryError>;

    /// Requests from one student, most recently applied first.
    async fn list_for_student(
        &self,
        student_id: UserId,
    ) -> Result<Vec<RoomChangeRequest>, RoomChangeRepositoryError>;

    /// Every request with the applicant's name, most recently applied first.
    async fn list_all(&self) -> Result<Vec<RoomChangeRequest>, RoomChangeRepositoryError>;

    /// Write the raw status label. Returns `false` when the id is unknown.
    async fn update_status(&self, update: &StatusUpdate)
    -> Result<bool, RoomChangeRepositoryError>;
}
