//! Requests from students to move to a different room.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::review::ReviewStatus;
use super::validation::{FieldError, required_text};
use super::UserId;

/// Stored room change request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomChangeRequest {
    pub id: i32,
    pub student_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    /// Room label at the time of the request, or `N/A`.
    pub current_room: String,
    pub requested_room: String,
    pub reason: String,
    pub status: ReviewStatus,
    pub applied_at: NaiveDateTime,
}

/// Validated request contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomChangeDraft {
    requested_room: String,
    reason: String,
}

impl RoomChangeDraft {
    pub fn try_new(requested_room: &str, reason: &str) -> Result<Self, FieldError> {
        Ok(Self {
            requested_room: required_text("requestedRoom", requested_room)?,
            reason: required_text("reason", reason)?,
        })
    }

    pub fn requested_room(&self) -> &str {
        self.requested_room.as_str()
    }

    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }
}

/// Row to insert, with the current room snapshot resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoomChangeRequest {
    pub student_id: UserId,
    pub current_room: String,
    pub draft: RoomChangeDraft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_requested_room() {
        let err = RoomChangeDraft::try_new(" ", "noise").expect_err("blank room");
        assert_eq!(err.field(), "requestedRoom");
    }
}
