//! Driving ports for signup, login and the caller's own profile.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Error, LoginCredentials, NewAccount, SessionToken, User};

/// Profile plus the token to place in the session cookie.
#[derive(Debug, Clone)]
pub struct SessionGrant {
    pub user: User,
    pub token: SessionToken,
}

/// Account mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Register an account and start a session for it.
    async fn signup(&self, account: NewAccount) -> Result<SessionGrant, Error>;

    /// Check credentials and start a session.
    async fn login(&self, credentials: LoginCredentials) -> Result<SessionGrant, Error>;

    /// Replace the caller's avatar and return the stored value.
    async fn update_avatar(
        &self,
        viewer: &AuthenticatedUser,
        avatar: String,
    ) -> Result<String, Error>;
}

/// Account reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Current profile of the caller.
    async fn profile(&self, viewer: &AuthenticatedUser) -> Result<User, Error>;
}
