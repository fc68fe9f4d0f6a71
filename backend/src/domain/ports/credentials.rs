//! Driven ports for password digests and signed session tokens.
//!
//! Both are kept behind traits so account services can be tested without
//! paying for real hashing or signing.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, SessionToken};

use super::define_port_error;

define_port_error! {
    /// Failures raised while hashing or checking a password.
    pub enum PasswordHashError {
        /// The hashing backend failed or the stored digest is malformed.
        Backend { message: String } => "password hashing failed: {message}",
    }
}

define_port_error! {
    /// Failures raised by token issuers.
    pub enum SessionTokenError {
        /// The token is malformed, tampered with or expired.
        Invalid { message: String } => "invalid session token: {message}",
        /// A token could not be produced.
        Signing { message: String } => "session token signing failed: {message}",
    }
}

/// One-way password digests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted digest for `password`.
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check `password` against a digest produced by [`PasswordHasher::hash`].
    async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordHashError>;
}

/// Issues and checks the token carried in the session cookie.
#[cfg_attr(test, mockall::automock)]
pub trait SessionTokens: Send + Sync {
    /// Sign a token for `user`.
    fn issue(&self, user: &AuthenticatedUser) -> Result<SessionToken, SessionTokenError>;

    /// Decode and check a token, returning the identity it carries.
    fn verify(&self, token: &str) -> Result<AuthenticatedUser, SessionTokenError>;
}
