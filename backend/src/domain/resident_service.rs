//! Student directory reads.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{ResidentQuery, UserRepository, UserRepositoryError};
use crate::domain::{AuthenticatedUser, Error, Roommate, User};

fn map_repository_error(error: UserRepositoryError) -> Error {
    Error::internal(format!("resident lookup failed: {error}"))
}

/// Resident service implementing [`ResidentQuery`].
#[derive(Clone)]
pub struct ResidentService<U> {
    users: Arc<U>,
}

impl<U> ResidentService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> ResidentQuery for ResidentService<U>
where
    U: UserRepository,
{
    async fn students(&self) -> Result<Vec<User>, Error> {
        self.users
            .list_students()
            .await
            .map_err(map_repository_error)
    }

    async fn roommates(&self, viewer: &AuthenticatedUser) -> Result<Vec<Roommate>, Error> {
        let room = self
            .users
            .find_by_id(viewer.id)
            .await
            .map_err(map_repository_error)?
            .and_then(|user| user.room_number)
            .filter(|room| !room.trim().is_empty());

        let Some(room) = room else {
            return Ok(Vec::new());
        };
        self.users
            .list_roommates(&room, viewer.id)
            .await
            .map_err(map_repository_error)
    }
}
