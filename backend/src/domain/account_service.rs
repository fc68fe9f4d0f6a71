//! Account services: signup, login and the caller's own profile.
//!
//! Login failures never reveal whether the email exists: unknown emails,
//! wrong passwords and role mismatches all yield the same 401.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    AccountCommand, AccountQuery, PasswordHashError, PasswordHasher, SessionGrant,
    SessionTokenError, SessionTokens, UserRepository, UserRepositoryError,
};
use crate::domain::validation::required_text;
use crate::domain::{AuthenticatedUser, Error, LoginCredentials, NewAccount, User};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const USER_EXISTS: &str = "User already exists";

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::DuplicateEmail { .. } => Error::invalid_request(USER_EXISTS),
        UserRepositoryError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

fn map_token_error(error: SessionTokenError) -> Error {
    Error::internal(error.to_string())
}

/// Account service implementing [`AccountCommand`] and [`AccountQuery`].
#[derive(Clone)]
pub struct AccountService<U> {
    users: Arc<U>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn SessionTokens>,
}

impl<U> AccountService<U> {
    /// Create a service from the user repository and credential adapters.
    pub fn new(
        users: Arc<U>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn SessionTokens>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    fn grant(&self, user: User) -> Result<SessionGrant, Error> {
        let identity = AuthenticatedUser::new(user.id, user.role, user.name.clone());
        let token = self.tokens.issue(&identity).map_err(map_token_error)?;
        Ok(SessionGrant { user, token })
    }
}

#[async_trait]
impl<U> AccountCommand for AccountService<U>
where
    U: UserRepository,
{
    async fn signup(&self, account: NewAccount) -> Result<SessionGrant, Error> {
        let existing = self
            .users
            .find_credentials_by_email(account.email())
            .await
            .map_err(map_repository_error)?;
        if existing.is_some() {
            return Err(Error::invalid_request(USER_EXISTS));
        }

        let digest = self
            .hasher
            .hash(account.password())
            .await
            .map_err(map_hash_error)?;
        let user = self
            .users
            .create(&account, &digest)
            .await
            .map_err(map_repository_error)?;
        info!(user_id = %user.id, role = %user.role, "account created");
        self.grant(user)
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<SessionGrant, Error> {
        let stored = self
            .users
            .find_credentials_by_email(credentials.email())
            .await
            .map_err(map_repository_error)?
            .filter(|stored| stored.user.role == credentials.role())
            .ok_or_else(|| Error::unauthorized(INVALID_CREDENTIALS))?;

        let matches = self
            .hasher
            .verify(credentials.password(), &stored.password_hash)
            .await
            .map_err(map_hash_error)?;
        if !matches {
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
        self.grant(stored.user)
    }

    async fn update_avatar(
        &self,
        viewer: &AuthenticatedUser,
        avatar: String,
    ) -> Result<String, Error> {
        let avatar = required_text("avatar", &avatar)?;
        let updated = self
            .users
            .update_avatar(viewer.id, &avatar)
            .await
            .map_err(map_repository_error)?;
        if !updated {
            return Err(Error::not_found("User not found"));
        }
        Ok(avatar)
    }
}

#[async_trait]
impl<U> AccountQuery for AccountService<U>
where
    U: UserRepository,
{
    async fn profile(&self, viewer: &AuthenticatedUser) -> Result<User, Error> {
        self.users
            .find_by_id(viewer.id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("User not found"))
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
