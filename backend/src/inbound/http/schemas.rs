//! Response envelopes shared by the handlers.
//!
//! Lists are wrapped in an object keyed by the resource name and writes answer
//! with a human-readable `message`, so existing dashboard clients keep working.
//! Creation responses also echo the stored record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    AttendanceSheet, Complaint, Leave, Notice, Payment, Room, RoomChangeRequest, Roommate, User,
    Violation,
};

/// Plain acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Logged out")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Single profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

/// Stored avatar after an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AvatarResponse {
    #[schema(example = "Avatar updated successfully")]
    pub message: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoommatesResponse {
    pub roommates: Vec<Roommate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentsResponse {
    pub students: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComplaintsResponse {
    pub complaints: Vec<Complaint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComplaintCreated {
    #[schema(example = "Complaint submitted")]
    pub message: String,
    pub complaint: Complaint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeavesResponse {
    pub leaves: Vec<Leave>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaveCreated {
    #[schema(example = "Leave request submitted")]
    pub message: String,
    pub leave: Leave,
}

/// Room change requests are listed under `requests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomChangesResponse {
    pub requests: Vec<RoomChangeRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomChangeCreated {
    #[schema(example = "Room change request submitted")]
    pub message: String,
    pub request: RoomChangeRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentsResponse {
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentCreated {
    #[schema(example = "Payment recorded")]
    pub message: String,
    pub payment: Payment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoomsResponse {
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoticesResponse {
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoticeCreated {
    #[schema(example = "Notice posted")]
    pub message: String,
    pub notice: Notice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceResponse {
    pub attendance: Vec<AttendanceSheet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceCreated {
    #[schema(example = "Attendance recorded")]
    pub message: String,
    pub attendance: AttendanceSheet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ViolationsResponse {
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ViolationCreated {
    #[schema(example = "Violation recorded")]
    pub message: String,
    pub violation: Violation,
}

/// Body of every `PUT .../{id}/status` endpoint.
///
/// The label is forwarded verbatim; storage rejects values outside the
/// table's allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusRequest {
    #[schema(example = "Resolved")]
    pub status: String,
}
