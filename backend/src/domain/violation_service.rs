//! Disciplinary violation services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    ViolationCommand, ViolationQuery, ViolationRepository, ViolationRepositoryError,
};
use crate::domain::{AuthenticatedUser, Error, NewViolation, Role, Violation};

fn map_repository_error(error: ViolationRepositoryError) -> Error {
    match error {
        ViolationRepositoryError::UnknownStudent { student_id } => {
            Error::invalid_request(format!("student {student_id} does not exist"))
        }
        ViolationRepositoryError::Connection { message } => {
            Error::internal(format!("violation repository unavailable: {message}"))
        }
        ViolationRepositoryError::Query { message } => {
            Error::internal(format!("violation repository error: {message}"))
        }
    }
}

/// Violation service implementing [`ViolationCommand`] and [`ViolationQuery`].
#[derive(Clone)]
pub struct ViolationService<R> {
    violations: Arc<R>,
}

impl<R> ViolationService<R> {
    pub fn new(violations: Arc<R>) -> Self {
        Self { violations }
    }
}

#[async_trait]
impl<R> ViolationCommand for ViolationService<R>
where
    R: ViolationRepository,
{
    async fn issue(&self, violation: NewViolation) -> Result<Violation, Error> {
        let violation = self
            .violations
            .create(&violation)
            .await
            .map_err(map_repository_error)?;
        info!(
            violation_id = violation.id,
            student_id = %violation.student_id,
            severity = %violation.severity,
            "violation issued"
        );
        Ok(violation)
    }
}

#[async_trait]
impl<R> ViolationQuery for ViolationService<R>
where
    R: ViolationRepository,
{
    async fn list(&self, viewer: &AuthenticatedUser) -> Result<Vec<Violation>, Error> {
        let listing = match viewer.role {
            Role::Student => self.violations.list_for_student(viewer.id).await,
            Role::Warden | Role::Admin => self.violations.list_all().await,
        };
        listing.map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockViolationRepository;
    use crate::domain::UserId;

    #[tokio::test]
    async fn staff_list_everything() {
        let mut violations = MockViolationRepository::new();
        violations.expect_list_for_student().times(0);
        violations.expect_list_all().return_once(|| Ok(Vec::new()));

        let viewer = AuthenticatedUser::new(UserId::new(1), Role::Warden, "Warden");
        ViolationService::new(Arc::new(violations))
            .list(&viewer)
            .await
            .expect("list succeeds");
    }
}
