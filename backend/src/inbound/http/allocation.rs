//! Room allocation and the room inventory.
//!
//! ```text
//! POST /api/warden/allocate {"studentId":3,"roomNumber":"102"}
//! GET  /api/admin/rooms
//! ```
//!
//! Whether allocation checks capacity depends on the configured
//! [`AllocationPolicy`](crate::domain::AllocationPolicy); the handler only
//! validates the payload.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Allocation, Error, Role, STAFF, UserId};

use super::ApiResult;
use super::authorize::Authorize;
use super::schemas::{MessageResponse, RoomsResponse};
use super::session::SessionContext;
use super::state::HttpState;

/// Allocation body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocateRequest {
    pub student_id: UserId,
    #[schema(example = "102")]
    pub room_number: String,
}

/// Place a student in a room.
#[utoipa::path(
    post,
    path = "/api/warden/allocate",
    request_body = AllocateRequest,
    responses(
        (status = 200, description = "Student allocated", body = MessageResponse),
        (status = 400, description = "Blank room, non-student target or room under maintenance", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown student or room", body = Error),
        (status = 409, description = "Room is full", body = Error)
    ),
    tags = ["allocation"],
    operation_id = "allocateRoom"
)]
#[post("/warden/allocate", wrap = "Authorize::roles(STAFF)")]
pub async fn allocate(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AllocateRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let AllocateRequest {
        student_id,
        room_number,
    } = payload.into_inner();
    let allocation = Allocation::try_new(student_id, &room_number, session.id())?;
    state.allocation.allocate(allocation).await?;
    Ok(web::Json(MessageResponse::new(
        "Student allocated successfully",
    )))
}

/// Every room with occupancy and status.
#[utoipa::path(
    get,
    path = "/api/admin/rooms",
    responses(
        (status = 200, description = "Rooms", body = RoomsResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["allocation"],
    operation_id = "listRooms"
)]
#[get("/admin/rooms", wrap = "Authorize::roles(&[Role::Admin])")]
pub async fn list_rooms(state: web::Data<HttpState>) -> ApiResult<web::Json<RoomsResponse>> {
    let rooms = state.rooms.rooms().await?;
    Ok(web::Json(RoomsResponse { rooms }))
}
