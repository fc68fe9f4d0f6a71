//! Room inventory, allocation commands and the allocation policy.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::labels::define_label_enum;
use super::validation::{FieldError, required_text};
use super::UserId;

define_label_enum! {
    /// Room layout.
    pub enum RoomType as "room type" {
        Single => "Single",
        Double => "Double",
        Triple => "Triple",
    }
}

define_label_enum! {
    /// Room availability. `Occupied` means no free place is left.
    pub enum RoomStatus as "room status" {
        Vacant => "Vacant",
        Occupied => "Occupied",
        Maintenance => "Maintenance",
    }
}

impl RoomStatus {
    /// Status after an occupancy change. Maintenance is sticky.
    ///
    /// # Examples
    /// ```
    /// use hostel::domain::RoomStatus;
    ///
    /// assert_eq!(RoomStatus::Vacant.after_occupancy(2, 2), RoomStatus::Occupied);
    /// assert_eq!(RoomStatus::Occupied.after_occupancy(1, 2), RoomStatus::Vacant);
    /// assert_eq!(RoomStatus::Maintenance.after_occupancy(0, 2), RoomStatus::Maintenance);
    /// ```
    pub const fn after_occupancy(self, occupancy: i32, capacity: i32) -> Self {
        match self {
            Self::Maintenance => Self::Maintenance,
            Self::Vacant | Self::Occupied => {
                if occupancy >= capacity {
                    Self::Occupied
                } else {
                    Self::Vacant
                }
            }
        }
    }
}

/// Stored room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i32,
    #[schema(example = "101")]
    pub room_number: String,
    pub floor: i32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub status: RoomStatus,
}

/// Room definition used when seeding an empty inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSeed {
    pub room_number: &'static str,
    pub floor: i32,
    pub room_type: RoomType,
    pub capacity: i32,
    pub status: RoomStatus,
}

/// Inventory installed on first start.
pub const DEFAULT_ROOMS: &[RoomSeed] = &[
    RoomSeed {
        room_number: "101",
        floor: 1,
        room_type: RoomType::Single,
        capacity: 1,
        status: RoomStatus::Vacant,
    },
    RoomSeed {
        room_number: "102",
        floor: 1,
        room_type: RoomType::Double,
        capacity: 2,
        status: RoomStatus::Vacant,
    },
    RoomSeed {
        room_number: "103",
        floor: 1,
        room_type: RoomType::Triple,
        capacity: 3,
        status: RoomStatus::Vacant,
    },
    RoomSeed {
        room_number: "201",
        floor: 2,
        room_type: RoomType::Single,
        capacity: 1,
        status: RoomStatus::Vacant,
    },
    RoomSeed {
        room_number: "202",
        floor: 2,
        room_type: RoomType::Double,
        capacity: 2,
        status: RoomStatus::Vacant,
    },
    RoomSeed {
        room_number: "203",
        floor: 2,
        room_type: RoomType::Triple,
        capacity: 3,
        status: RoomStatus::Maintenance,
    },
];

/// How allocation treats room capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocationPolicy {
    /// Overwrite the student's room label only. No capacity check, no
    /// occupancy bookkeeping, and unknown students are not reported.
    #[default]
    Permissive,
    /// Validate the room and keep occupancy counters and history in one
    /// transaction.
    EnforceCapacity,
}

/// Validated request to place a student in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    student_id: UserId,
    room_number: String,
    allocated_by: UserId,
}

impl Allocation {
    pub fn try_new(
        student_id: UserId,
        room_number: &str,
        allocated_by: UserId,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            student_id,
            room_number: required_text("roomNumber", room_number)?,
            allocated_by,
        })
    }

    pub fn student_id(&self) -> UserId {
        self.student_id
    }

    pub fn room_number(&self) -> &str {
        self.room_number.as_str()
    }

    pub fn allocated_by(&self) -> UserId {
        self.allocated_by
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RoomStatus::Vacant, 0, 1, RoomStatus::Vacant)]
    #[case(RoomStatus::Vacant, 1, 1, RoomStatus::Occupied)]
    #[case(RoomStatus::Occupied, 1, 3, RoomStatus::Vacant)]
    #[case(RoomStatus::Occupied, 4, 3, RoomStatus::Occupied)]
    #[case(RoomStatus::Maintenance, 3, 3, RoomStatus::Maintenance)]
    fn status_follows_occupancy(
        #[case] current: RoomStatus,
        #[case] occupancy: i32,
        #[case] capacity: i32,
        #[case] expected: RoomStatus,
    ) {
        assert_eq!(current.after_occupancy(occupancy, capacity), expected);
    }

    #[rstest]
    fn default_inventory_has_one_room_under_maintenance() {
        let maintenance: Vec<_> = DEFAULT_ROOMS
            .iter()
            .filter(|room| room.status == RoomStatus::Maintenance)
            .map(|room| room.room_number)
            .collect();
        assert_eq!(maintenance, vec!["203"]);
    }

    #[rstest]
    fn allocation_requires_room_number() {
        let err =
            Allocation::try_new(UserId::new(2), "  ", UserId::new(1)).expect_err("blank room");
        assert_eq!(err.field(), "roomNumber");
    }

    #[rstest]
    fn policy_defaults_to_permissive() {
        assert_eq!(AllocationPolicy::default(), AllocationPolicy::Permissive);
    }
}
