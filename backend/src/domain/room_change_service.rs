//! Room change request services. Approval is a status change only; moving
//! the student is a separate allocation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::complaint_service::room_snapshot;
use crate::domain::ports::{
    RoomChangeCommand, RoomChangeQuery, RoomChangeRepository, RoomChangeRepositoryError,
    UserRepository,
};
use crate::domain::{
    AuthenticatedUser, Error, NewRoomChangeRequest, Role, RoomChangeDraft, RoomChangeRequest,
    StatusUpdate,
};

fn map_repository_error(error: RoomChangeRepositoryError) -> Error {
    match error {
        RoomChangeRepositoryError::Connection { message } => {
            Error::internal(format!("room change repository unavailable: {message}"))
        }
        RoomChangeRepositoryError::Query { message } => {
            Error::internal(format!("room change repository error: {message}"))
        }
    }
}

/// Room change service implementing [`RoomChangeCommand`] and
/// [`RoomChangeQuery`].
#[derive(Clone)]
pub struct RoomChangeService<R, U> {
    requests: Arc<R>,
    users: Arc<U>,
}

impl<R, U> RoomChangeService<R, U> {
    pub fn new(requests: Arc<R>, users: Arc<U>) -> Self {
        Self { requests, users }
    }
}

#[async_trait]
impl<R, U> RoomChangeCommand for RoomChangeService<R, U>
where
    R: RoomChangeRepository,
    U: UserRepository,
{
    async fn request(
        &self,
        viewer: &AuthenticatedUser,
        draft: RoomChangeDraft,
    ) -> Result<RoomChangeRequest, Error> {
        let current_room = room_snapshot(self.users.as_ref(), viewer).await?;
        let request = self
            .requests
            .create(&NewRoomChangeRequest {
                student_id: viewer.id,
                current_room,
                draft,
            })
            .await
            .map_err(map_repository_error)?;
        info!(request_id = request.id, student_id = %viewer.id, "room change requested");
        Ok(request)
    }

    async fn update_status(&self, update: StatusUpdate) -> Result<(), Error> {
        let found = self
            .requests
            .update_status(&update)
            .await
            .map_err(map_repository_error)?;
        if !found {
            return Err(Error::not_found("Room change request not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl<R, U> RoomChangeQuery for RoomChangeService<R, U>
where
    R: RoomChangeRepository,
    U: UserRepository,
{
    async fn list(&self, viewer: &AuthenticatedUser) -> Result<Vec<RoomChangeRequest>, Error> {
        let listing = match viewer.role {
            Role::Student => self.requests.list_for_student(viewer.id).await,
            Role::Warden | Role::Admin => self.requests.list_all().await,
        };
        listing.map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::ports::{MockRoomChangeRepository, MockUserRepository};
    use crate::domain::{ErrorCode, NO_ROOM, ReviewStatus, UserId};

    #[tokio::test]
    async fn request_uses_placeholder_when_unassigned() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().return_once(|id| {
            Ok(Some(crate::domain::User {
                id,
                name: "Noor".to_owned(),
                email: "noor@example.com".to_owned(),
                role: Role::Student,
                avatar: None,
                phone: None,
                room_number: None,
                fees_paid: 0.0,
                gender: None,
                is_verified: false,
            }))
        });
        let mut requests = MockRoomChangeRepository::new();
        requests
            .expect_create()
            .withf(|request| request.current_room == NO_ROOM)
            .returning(|request| {
                Ok(RoomChangeRequest {
                    id: 1,
                    student_id: request.student_id,
                    student_name: None,
                    current_room: request.current_room.clone(),
                    requested_room: request.draft.requested_room().to_owned(),
                    reason: request.draft.reason().to_owned(),
                    status: ReviewStatus::Pending,
                    applied_at: NaiveDateTime::default(),
                })
            });

        let viewer = AuthenticatedUser::new(UserId::new(8), Role::Student, "Noor");
        let draft = RoomChangeDraft::try_new("202", "Closer to lab").expect("valid draft");
        let request = RoomChangeService::new(Arc::new(requests), Arc::new(users))
            .request(&viewer, draft)
            .await
            .expect("request succeeds");
        assert_eq!(request.requested_room, "202");
    }

    #[tokio::test]
    async fn request_for_deleted_account_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().return_once(|_| Ok(None));
        let mut requests = MockRoomChangeRepository::new();
        requests.expect_create().times(0);

        let viewer = AuthenticatedUser::new(UserId::new(8), Role::Student, "Noor");
        let draft = RoomChangeDraft::try_new("202", "Closer to lab").expect("valid draft");
        let err = RoomChangeService::new(Arc::new(requests), Arc::new(users))
            .request(&viewer, draft)
            .await
            .expect_err("missing account");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
