//! Driven port for the room inventory and student allocation.
use async_trait::async_trait;

use crate::domain::{Allocation, Room, RoomSeed, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence and consistency errors raised by room repository adapters.
    pub enum RoomRepositoryError {
        Connection { message: String } => "room repository connection failed: {message}",
        Query { message: String } => "room repository query failed: {message}",
        StudentNotFound { student_id: i32 } => "student {student_id} not found",
        NotAStudent { user_id: i32 } => "user {user_id} is not a student",
        RoomNotFound { room_number: String } => "room {room_number} not found",
        UnderMaintenance { room_number: String } => "room {room_number} is under maintenance",
        RoomFull { room_number: String } => "room {room_number} is full",
    }
}

/// Result of a capacity-checked allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// The student moved; `previous_room` is the room they left, if any.
    Moved { previous_room: Option<String> },
    /// The student was already in the requested room.
    Unchanged,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Every room ordered by room number.
    async fn list(&self) -> Result<Vec<Room>, RoomRepositoryError>;

    /// Insert `seeds` when the inventory is empty. Returns the number of rooms
    /// inserted.
    async fn seed_if_empty(&self, seeds: &[RoomSeed]) -> Result<usize, RoomRepositoryError>;

    /// Overwrite the student's room label without any inventory checks.
    /// Returns the number of rows changed, which is zero for unknown ids and
    /// non-students.
    async fn assign_room_label(
        &self,
        student_id: UserId,
        room_number: &str,
    ) -> Result<usize, RoomRepositoryError>;

    /// Move a student in one transaction: validate the student and room,
    /// check capacity, adjust occupancy and status on both rooms, and record
    /// allocation history plus an activity log entry.
    async fn allocate_with_capacity(
        &self,
        allocation: &Allocation,
    ) -> Result<AllocationOutcome, RoomRepositoryError>;
}
