//! Room change request handlers.
//!
//! ```text
//! POST /api/room-change {"requestedRoom":"202","reason":"Closer to the lab"}
//! GET  /api/room-change
//! PUT  /api/room-change/{id}/status {"status":"Approved"}
//! ```
//!
//! Approving a request does not move the student; wardens follow up with an
//! allocation.

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Role, RoomChangeDraft, STAFF, StatusUpdate};

use super::ApiResult;
use super::authorize::Authorize;
use super::schemas::{MessageResponse, RoomChangeCreated, RoomChangesResponse, StatusRequest};
use super::session::SessionContext;
use super::state::HttpState;

/// Room change request body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomChangeRequestBody {
    #[schema(example = "202")]
    pub requested_room: String,
    #[schema(example = "Closer to the lab")]
    pub reason: String,
}

/// Ask to move to another room.
#[utoipa::path(
    post,
    path = "/api/room-change",
    request_body = RoomChangeRequestBody,
    responses(
        (status = 201, description = "Room change request submitted", body = RoomChangeCreated),
        (status = 400, description = "Missing requested room or reason", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["room-change"],
    operation_id = "requestRoomChange"
)]
#[post("/room-change", wrap = "Authorize::roles(&[Role::Student])")]
pub async fn request_room_change(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RoomChangeRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let draft = RoomChangeDraft::try_new(&body.requested_room, &body.reason)?;
    let request = state.room_changes.request(session.user(), draft).await?;
    Ok(HttpResponse::Created().json(RoomChangeCreated {
        message: "Room change request submitted".to_owned(),
        request,
    }))
}

/// Requests visible to the caller.
#[utoipa::path(
    get,
    path = "/api/room-change",
    responses(
        (status = 200, description = "Own requests for students, all for staff", body = RoomChangesResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["room-change"],
    operation_id = "listRoomChanges"
)]
#[get("/room-change", wrap = "Authorize::authenticated()")]
pub async fn list_room_changes(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<RoomChangesResponse>> {
    let requests = state.room_changes_query.list(session.user()).await?;
    Ok(web::Json(RoomChangesResponse { requests }))
}

/// Review a room change request.
#[utoipa::path(
    put,
    path = "/api/room-change/{id}/status",
    params(("id" = i32, Path, description = "Room change request id")),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown request", body = Error),
        (status = 500, description = "Status rejected by storage", body = Error)
    ),
    tags = ["room-change"],
    operation_id = "updateRoomChangeStatus"
)]
#[put("/room-change/{id}/status", wrap = "Authorize::roles(STAFF)")]
pub async fn update_room_change_status(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    payload: web::Json<StatusRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let update = StatusUpdate::new(path.into_inner(), payload.into_inner().status, session.id());
    state.room_changes.update_status(update).await?;
    Ok(web::Json(MessageResponse::new(
        "Room change request status updated successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockRoomChangeCommand, MockRoomChangeQuery};
    use crate::domain::{ReviewStatus, RoomChangeRequest, UserId};
    use crate::inbound::http::test_utils::{call_api, role_cookie, unused_ports};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::NaiveDate;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn register(cfg: &mut web::ServiceConfig) {
        cfg.service(request_room_change)
            .service(list_room_changes)
            .service(update_room_change_status);
    }

    fn stored(student_name: Option<&str>) -> RoomChangeRequest {
        RoomChangeRequest {
            id: 7,
            student_id: UserId::new(3),
            student_name: student_name.map(str::to_owned),
            current_room: "101".to_owned(),
            requested_room: "202".to_owned(),
            reason: "Closer to the lab".to_owned(),
            status: ReviewStatus::Pending,
            applied_at: NaiveDate::from_ymd_opt(2024, 6, 2)
                .and_then(|date| date.and_hms_opt(10, 0, 0))
                .expect("valid timestamp"),
        }
    }

    #[actix_web::test]
    async fn student_requests_room_change() {
        let mut commands = MockRoomChangeCommand::new();
        commands
            .expect_request()
            .withf(|_, draft| draft.requested_room() == "202")
            .returning(|_, _| Ok(stored(None)));
        let mut ports = unused_ports();
        ports.room_changes = Arc::new(commands);

        let res = call_api(
            ports,
            register,
            test::TestRequest::post()
                .uri("/api/room-change")
                .cookie(role_cookie(Role::Student))
                .set_json(json!({ "requestedRoom": "202", "reason": "Closer to the lab" })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Room change request submitted");
        assert_eq!(body["request"]["currentRoom"], "101");
    }

    #[actix_web::test]
    async fn staff_listing_uses_requests_key() {
        let mut query = MockRoomChangeQuery::new();
        query
            .expect_list()
            .returning(|_| Ok(vec![stored(Some("Asha Rao"))]));
        let mut ports = unused_ports();
        ports.room_changes_query = Arc::new(query);

        let res = call_api(
            ports,
            register,
            test::TestRequest::get()
                .uri("/api/room-change")
                .cookie(role_cookie(Role::Warden)),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["requests"][0]["studentName"], "Asha Rao");
    }

    #[rstest]
    #[case(Role::Warden, StatusCode::OK)]
    #[case(Role::Admin, StatusCode::OK)]
    #[case(Role::Student, StatusCode::FORBIDDEN)]
    #[actix_web::test]
    async fn review_is_staff_only(#[case] role: Role, #[case] expected: StatusCode) {
        let mut ports = unused_ports();
        if expected == StatusCode::OK {
            let mut commands = MockRoomChangeCommand::new();
            commands.expect_update_status().returning(|_| Ok(()));
            ports.room_changes = Arc::new(commands);
        }

        let res = call_api(
            ports,
            register,
            test::TestRequest::put()
                .uri("/api/room-change/7/status")
                .cookie(role_cookie(role))
                .set_json(json!({ "status": "Rejected" })),
        )
        .await;

        assert_eq!(res.status(), expected);
    }
}
