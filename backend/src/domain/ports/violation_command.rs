//! Driving ports for disciplinary violations.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Error, NewViolation, Violation};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViolationCommand: Send + Sync {
    async fn issue(&self, violation: NewViolation) -> Result<Violation, Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViolationQuery: Send + Sync {
    /// Violations visible to the caller.
    async fn list(&self, viewer: &AuthenticatedUser) -> Result<Vec<Violation>, Error>;
}
