//! Complaint services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    ComplaintCommand, ComplaintQuery, ComplaintRepository, ComplaintRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    AuthenticatedUser, Complaint, ComplaintDraft, Error, NewComplaint, Role, StatusUpdate,
};

fn map_repository_error(error: ComplaintRepositoryError) -> Error {
    match error {
        ComplaintRepositoryError::Connection { message } => {
            Error::internal(format!("complaint repository unavailable: {message}"))
        }
        ComplaintRepositoryError::Query { message } => {
            Error::internal(format!("complaint repository error: {message}"))
        }
    }
}

pub(crate) fn map_user_lookup_error(error: UserRepositoryError) -> Error {
    Error::internal(format!("user lookup failed: {error}"))
}

/// Resolve the caller's current room label for a request snapshot.
pub(crate) async fn room_snapshot<U>(users: &U, viewer: &AuthenticatedUser) -> Result<String, Error>
where
    U: UserRepository + ?Sized,
{
    users
        .find_by_id(viewer.id)
        .await
        .map_err(map_user_lookup_error)?
        .map(|user| user.room_or_placeholder())
        .ok_or_else(|| Error::not_found("User not found"))
}

/// Complaint service implementing [`ComplaintCommand`] and [`ComplaintQuery`].
#[derive(Clone)]
pub struct ComplaintService<C, U> {
    complaints: Arc<C>,
    users: Arc<U>,
}

impl<C, U> ComplaintService<C, U> {
    pub fn new(complaints: Arc<C>, users: Arc<U>) -> Self {
        Self { complaints, users }
    }
}

#[async_trait]
impl<C, U> ComplaintCommand for ComplaintService<C, U>
where
    C: ComplaintRepository,
    U: UserRepository,
{
    async fn submit(
        &self,
        viewer: &AuthenticatedUser,
        draft: ComplaintDraft,
    ) -> Result<Complaint, Error> {
        let room_number = room_snapshot(self.users.as_ref(), viewer).await?;
        let complaint = self
            .complaints
            .create(&NewComplaint {
                student_id: viewer.id,
                room_number,
                draft,
            })
            .await
            .map_err(map_repository_error)?;
        info!(complaint_id = complaint.id, student_id = %viewer.id, "complaint submitted");
        Ok(complaint)
    }

    async fn update_status(&self, update: StatusUpdate) -> Result<(), Error> {
        let found = self
            .complaints
            .update_status(&update)
            .await
            .map_err(map_repository_error)?;
        if !found {
            return Err(Error::not_found("Complaint not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl<C, U> ComplaintQuery for ComplaintService<C, U>
where
    C: ComplaintRepository,
    U: UserRepository,
{
    async fn list(&self, viewer: &AuthenticatedUser) -> Result<Vec<Complaint>, Error> {
        let listing = match viewer.role {
            Role::Student => self.complaints.list_for_student(viewer.id).await,
            Role::Warden | Role::Admin => self.complaints.list_all().await,
        };
        listing.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "complaint_service_tests.rs"]
mod tests;
