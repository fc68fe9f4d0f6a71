//! Leave request services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{LeaveCommand, LeaveQuery, LeaveRepository, LeaveRepositoryError};
use crate::domain::{AuthenticatedUser, Error, Leave, LeaveDraft, Role, StatusUpdate};

fn map_repository_error(error: LeaveRepositoryError) -> Error {
    match error {
        LeaveRepositoryError::Connection { message } => {
            Error::internal(format!("leave repository unavailable: {message}"))
        }
        LeaveRepositoryError::Query { message } => {
            Error::internal(format!("leave repository error: {message}"))
        }
    }
}

/// Leave service implementing [`LeaveCommand`] and [`LeaveQuery`].
#[derive(Clone)]
pub struct LeaveService<R> {
    leaves: Arc<R>,
}

impl<R> LeaveService<R> {
    pub fn new(leaves: Arc<R>) -> Self {
        Self { leaves }
    }
}

#[async_trait]
impl<R> LeaveCommand for LeaveService<R>
where
    R: LeaveRepository,
{
    async fn apply(&self, viewer: &AuthenticatedUser, draft: LeaveDraft) -> Result<Leave, Error> {
        let leave = self
            .leaves
            .create(viewer.id, &draft)
            .await
            .map_err(map_repository_error)?;
        info!(leave_id = leave.id, student_id = %viewer.id, "leave requested");
        Ok(leave)
    }

    async fn update_status(&self, update: StatusUpdate) -> Result<(), Error> {
        let found = self
            .leaves
            .update_status(&update)
            .await
            .map_err(map_repository_error)?;
        if !found {
            return Err(Error::not_found("Leave request not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> LeaveQuery for LeaveService<R>
where
    R: LeaveRepository,
{
    async fn list(&self, viewer: &AuthenticatedUser) -> Result<Vec<Leave>, Error> {
        let listing = match viewer.role {
            Role::Student => self.leaves.list_for_student(viewer.id).await,
            Role::Warden | Role::Admin => self.leaves.list_all().await,
        };
        listing.map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockLeaveRepository;
    use crate::domain::{ErrorCode, UserId};

    #[tokio::test]
    async fn review_passes_reviewer_through() {
        let mut leaves = MockLeaveRepository::new();
        leaves
            .expect_update_status()
            .withf(|update| update.reviewer == UserId::new(2) && update.status == "Approved")
            .return_once(|_| Ok(true));

        LeaveService::new(Arc::new(leaves))
            .update_status(StatusUpdate::new(9, "Approved", UserId::new(2)))
            .await
            .expect("review succeeds");
    }

    #[tokio::test]
    async fn review_of_unknown_id_is_not_found() {
        let mut leaves = MockLeaveRepository::new();
        leaves.expect_update_status().return_once(|_| Ok(false));

        let err = LeaveService::new(Arc::new(leaves))
            .update_status(StatusUpdate::new(9, "Approved", UserId::new(2)))
            .await
            .expect_err("unknown id");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn students_only_see_their_own_requests() {
        let mut leaves = MockLeaveRepository::new();
        leaves
            .expect_list_for_student()
            .withf(|id| *id == UserId::new(4))
            .return_once(|_| Ok(Vec::new()));
        leaves.expect_list_all().times(0);

        let viewer = AuthenticatedUser::new(UserId::new(4), Role::Student, "Ira");
        LeaveService::new(Arc::new(leaves))
            .list(&viewer)
            .await
            .expect("list succeeds");
    }
}
