//! Tests for the complaint service.

use std::sync::Arc;

use chrono::NaiveDateTime;
use rstest::rstest;

use super::*;
use crate::domain::ports::{MockComplaintRepository, MockUserRepository};
use crate::domain::{ComplaintStatus, ErrorCode, NO_ROOM, User, UserId};

fn student(room_number: Option<&str>) -> User {
    User {
        id: UserId::new(3),
        name: "Ravi".to_owned(),
        email: "ravi@example.com".to_owned(),
        role: Role::Student,
        avatar: None,
        phone: None,
        room_number: room_number.map(str::to_owned),
        fees_paid: 0.0,
        gender: None,
        is_verified: false,
    }
}

fn stored(complaint: &NewComplaint) -> Complaint {
    Complaint {
        id: 11,
        student_id: complaint.student_id,
        student_name: None,
        room_number: Some(complaint.room_number.clone()),
        category: complaint.draft.category().to_owned(),
        description: complaint.draft.description().to_owned(),
        status: ComplaintStatus::Submitted,
        created_at: NaiveDateTime::default(),
    }
}

fn viewer(role: Role) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(3), role, "Ravi")
}

#[rstest]
#[case(Some("101"), "101")]
#[case(None, NO_ROOM)]
#[tokio::test]
async fn submit_snapshots_room(#[case] room: Option<&'static str>, #[case] expected: &str) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(student(room))));
    let mut complaints = MockComplaintRepository::new();
    complaints
        .expect_create()
        .times(1)
        .returning(|complaint| Ok(stored(complaint)));

    let draft = ComplaintDraft::try_new("Plumbing", "Leaking tap").expect("valid draft");
    let complaint = ComplaintService::new(Arc::new(complaints), Arc::new(users))
        .submit(&viewer(Role::Student), draft)
        .await
        .expect("submit succeeds");

    assert_eq!(complaint.room_number.as_deref(), Some(expected));
    assert_eq!(complaint.status, ComplaintStatus::Submitted);
}

#[rstest]
#[case(Role::Student, true)]
#[case(Role::Warden, false)]
#[case(Role::Admin, false)]
#[tokio::test]
async fn list_is_scoped_by_role(#[case] role: Role, #[case] own_only: bool) {
    let mut complaints = MockComplaintRepository::new();
    complaints
        .expect_list_for_student()
        .withf(|id| *id == UserId::new(3))
        .times(usize::from(own_only))
        .returning(|_| Ok(Vec::new()));
    complaints
        .expect_list_all()
        .times(usize::from(!own_only))
        .returning(|| Ok(Vec::new()));

    ComplaintService::new(Arc::new(complaints), Arc::new(MockUserRepository::new()))
        .list(&viewer(role))
        .await
        .expect("list succeeds");
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let mut complaints = MockComplaintRepository::new();
    complaints.expect_update_status().return_once(|_| Ok(false));

    let err = ComplaintService::new(Arc::new(complaints), Arc::new(MockUserRepository::new()))
        .update_status(StatusUpdate::new(404, "Resolved", UserId::new(1)))
        .await
        .expect_err("unknown id");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn rejected_status_surfaces_as_internal_error() {
    let mut complaints = MockComplaintRepository::new();
    complaints.expect_update_status().return_once(|_| {
        Err(ComplaintRepositoryError::query(
            "CHECK constraint failed: status",
        ))
    });

    let err = ComplaintService::new(Arc::new(complaints), Arc::new(MockUserRepository::new()))
        .update_status(StatusUpdate::new(1, "Bogus", UserId::new(1)))
        .await
        .expect_err("check violation");

    assert_eq!(err.code(), ErrorCode::InternalError);
}
