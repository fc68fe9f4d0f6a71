//! bcrypt-backed `PasswordHasher`.
//!
//! bcrypt is deliberately slow, so both hashing and verification run on the
//! blocking thread pool and never on an actix worker.

use async_trait::async_trait;

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Work factor used outside tests.
pub const PRODUCTION_COST: u32 = 12;

/// Password hasher using bcrypt with a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Hasher with the production work factor.
    pub fn new() -> Self {
        Self {
            cost: PRODUCTION_COST,
        }
    }

    /// Hasher with a custom work factor. Tests use the minimum cost of 4.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn join_error(err: tokio::task::JoinError) -> PasswordHashError {
    PasswordHashError::backend(format!("hashing task failed: {err}"))
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let password = zeroize::Zeroizing::new(password.to_owned());
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password.as_str(), cost))
            .await
            .map_err(join_error)?
            .map_err(|err| PasswordHashError::backend(err.to_string()))
    }

    async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordHashError> {
        let password = zeroize::Zeroizing::new(password.to_owned());
        let digest = digest.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(password.as_str(), &digest))
            .await
            .map_err(join_error)?
            .map_err(|err| PasswordHashError::backend(err.to_string()))
    }
}
