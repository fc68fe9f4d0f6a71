//! Room allocation and the room inventory.
//!
//! The permissive policy only overwrites the student's room label. The
//! capacity-enforcing policy delegates to one repository transaction that
//! keeps occupancy counters, room status and allocation history consistent.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    AllocationCommand, AllocationOutcome, RoomQuery, RoomRepository, RoomRepositoryError,
};
use crate::domain::{Allocation, AllocationPolicy, Error, Room};

fn map_repository_error(error: RoomRepositoryError) -> Error {
    match error {
        RoomRepositoryError::StudentNotFound { .. } => Error::not_found("Student not found"),
        RoomRepositoryError::NotAStudent { .. } => {
            Error::invalid_request("Only students can be allocated to rooms")
        }
        RoomRepositoryError::RoomNotFound { .. } => Error::not_found("Room not found"),
        RoomRepositoryError::UnderMaintenance { .. } => {
            Error::invalid_request("Room is under maintenance")
        }
        RoomRepositoryError::RoomFull { .. } => Error::conflict("Room is full"),
        RoomRepositoryError::Connection { message } => {
            Error::internal(format!("room repository unavailable: {message}"))
        }
        RoomRepositoryError::Query { message } => {
            Error::internal(format!("room repository error: {message}"))
        }
    }
}

/// Allocation service implementing [`AllocationCommand`] and [`RoomQuery`].
#[derive(Clone)]
pub struct AllocationService<R> {
    rooms: Arc<R>,
    policy: AllocationPolicy,
}

impl<R> AllocationService<R> {
    pub fn new(rooms: Arc<R>, policy: AllocationPolicy) -> Self {
        Self { rooms, policy }
    }
}

#[async_trait]
impl<R> AllocationCommand for AllocationService<R>
where
    R: RoomRepository,
{
    async fn allocate(&self, allocation: Allocation) -> Result<(), Error> {
        let student_id = allocation.student_id();
        let room_number = allocation.room_number();
        match self.policy {
            AllocationPolicy::Permissive => {
                let changed = self
                    .rooms
                    .assign_room_label(student_id, room_number)
                    .await
                    .map_err(map_repository_error)?;
                if changed == 0 {
                    warn!(%student_id, room_number, "allocation matched no student");
                }
            }
            AllocationPolicy::EnforceCapacity => {
                let outcome = self
                    .rooms
                    .allocate_with_capacity(&allocation)
                    .await
                    .map_err(map_repository_error)?;
                match outcome {
                    AllocationOutcome::Moved { previous_room } => info!(
                        %student_id,
                        room_number,
                        previous_room = previous_room.as_deref().unwrap_or("none"),
                        "student allocated"
                    ),
                    AllocationOutcome::Unchanged => {
                        info!(%student_id, room_number, "student already in room");
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<R> RoomQuery for AllocationService<R>
where
    R: RoomRepository,
{
    async fn rooms(&self) -> Result<Vec<Room>, Error> {
        self.rooms.list().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "allocation_service_tests.rs"]
mod tests;
