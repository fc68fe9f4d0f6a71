//! Driven port for account storage and profile lookups.
use async_trait::async_trait;

use crate::domain::{NewAccount, Roommate, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another account already uses the email address.
        DuplicateEmail { email: String } => "email {email} is already registered",
    }
}

/// Profile together with the stored password digest, used only for login.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCredentials {
    pub user: User,
    pub password_hash: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account with an already hashed password.
    async fn create(
        &self,
        account: &NewAccount,
        password_hash: &str,
    ) -> Result<User, UserRepositoryError>;

    /// Fetch a profile by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a profile and its password digest by email.
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredentials>, UserRepositoryError>;

    /// Replace the avatar URL. Returns `false` when no row matched.
    async fn update_avatar(&self, id: UserId, avatar: &str) -> Result<bool, UserRepositoryError>;

    /// Every account with the student role, in id order.
    async fn list_students(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Other users whose room label equals `room_number`.
    async fn list_roommates(
        &self,
        room_number: &str,
        exclude: UserId,
    ) -> Result<Vec<Roommate>, UserRepositoryError>;
}
