//! Driving port for student directory reads.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Error, Roommate, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResidentQuery: Send + Sync {
    /// Every student profile.
    async fn students(&self) -> Result<Vec<User>, Error>;

    /// Other residents sharing the caller's room. Empty when the caller has
    /// no room.
    async fn roommates(&self, viewer: &AuthenticatedUser) -> Result<Vec<Roommate>, Error>;
}
