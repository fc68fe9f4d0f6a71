//! Driving ports for room allocation and the room inventory.

use async_trait::async_trait;

use crate::domain::{Allocation, Error, Room};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AllocationCommand: Send + Sync {
    /// Place a student in a room according to the configured policy.
    async fn allocate(&self, allocation: Allocation) -> Result<(), Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomQuery: Send + Sync {
    /// Every room.
    async fn rooms(&self) -> Result<Vec<Room>, Error>;
}
