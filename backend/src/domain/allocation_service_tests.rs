//! Tests for the allocation service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::MockRoomRepository;
use crate::domain::{ErrorCode, UserId};

fn allocation() -> Allocation {
    Allocation::try_new(UserId::new(5), "102", UserId::new(1)).expect("valid allocation")
}

#[rstest]
#[case(1)]
#[case(0)]
#[tokio::test]
async fn permissive_policy_succeeds_even_without_a_match(#[case] changed: usize) {
    let mut rooms = MockRoomRepository::new();
    rooms
        .expect_assign_room_label()
        .withf(|id, room| *id == UserId::new(5) && room == "102")
        .return_once(move |_, _| Ok(changed));
    rooms.expect_allocate_with_capacity().times(0);

    AllocationService::new(Arc::new(rooms), AllocationPolicy::Permissive)
        .allocate(allocation())
        .await
        .expect("permissive allocation succeeds");
}

#[rstest]
#[case::full(RoomRepositoryError::room_full("102"), ErrorCode::Conflict)]
#[case::missing_room(RoomRepositoryError::room_not_found("999"), ErrorCode::NotFound)]
#[case::missing_student(RoomRepositoryError::student_not_found(5), ErrorCode::NotFound)]
#[case::not_student(RoomRepositoryError::not_a_student(5), ErrorCode::InvalidRequest)]
#[case::maintenance(RoomRepositoryError::under_maintenance("203"), ErrorCode::InvalidRequest)]
#[case::storage(RoomRepositoryError::query("disk I/O error"), ErrorCode::InternalError)]
#[tokio::test]
async fn enforced_policy_maps_failures(
    #[case] failure: RoomRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut rooms = MockRoomRepository::new();
    rooms.expect_assign_room_label().times(0);
    rooms
        .expect_allocate_with_capacity()
        .return_once(move |_| Err(failure));

    let err = AllocationService::new(Arc::new(rooms), AllocationPolicy::EnforceCapacity)
        .allocate(allocation())
        .await
        .expect_err("allocation fails");
    assert_eq!(err.code(), expected);
}

#[tokio::test]
async fn enforced_policy_accepts_reallocation_to_same_room() {
    let mut rooms = MockRoomRepository::new();
    rooms
        .expect_allocate_with_capacity()
        .return_once(|_| Ok(AllocationOutcome::Unchanged));

    AllocationService::new(Arc::new(rooms), AllocationPolicy::EnforceCapacity)
        .allocate(allocation())
        .await
        .expect("no-op allocation succeeds");
}
