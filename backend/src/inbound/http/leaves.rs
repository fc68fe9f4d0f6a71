//! Leave request handlers.
//!
//! ```text
//! POST /api/leaves {"fromDate":"2024-06-01","toDate":"2024-06-03","reason":"Family visit"}
//! GET  /api/leaves
//! PUT  /api/leaves/{id}/status {"status":"Approved"}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, LeaveDraft, Role, STAFF, StatusUpdate};

use super::ApiResult;
use super::authorize::Authorize;
use super::schemas::{LeaveCreated, LeavesResponse, MessageResponse, StatusRequest};
use super::session::SessionContext;
use super::state::HttpState;

/// Leave application body. Dates are inclusive calendar days.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[schema(example = "Family visit")]
    pub reason: String,
}

/// Apply for leave.
#[utoipa::path(
    post,
    path = "/api/leaves",
    request_body = LeaveRequest,
    responses(
        (status = 201, description = "Leave request submitted", body = LeaveCreated),
        (status = 400, description = "Blank reason or inverted dates", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["leaves"],
    operation_id = "applyLeave"
)]
#[post("/leaves", wrap = "Authorize::roles(&[Role::Student])")]
pub async fn apply_leave(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LeaveRequest>,
) -> ApiResult<HttpResponse> {
    let LeaveRequest {
        from_date,
        to_date,
        reason,
    } = payload.into_inner();
    let draft = LeaveDraft::try_new(from_date, to_date, &reason)?;
    let leave = state.leaves.apply(session.user(), draft).await?;
    Ok(HttpResponse::Created().json(LeaveCreated {
        message: "Leave request submitted".to_owned(),
        leave,
    }))
}

/// Leave requests visible to the caller.
#[utoipa::path(
    get,
    path = "/api/leaves",
    responses(
        (status = 200, description = "Own requests for students, all for staff", body = LeavesResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["leaves"],
    operation_id = "listLeaves"
)]
#[get("/leaves", wrap = "Authorize::authenticated()")]
pub async fn list_leaves(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<LeavesResponse>> {
    let leaves = state.leaves_query.list(session.user()).await?;
    Ok(web::Json(LeavesResponse { leaves }))
}

/// Review a leave request, recording the caller as approver.
#[utoipa::path(
    put,
    path = "/api/leaves/{id}/status",
    params(("id" = i32, Path, description = "Leave request id")),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown leave request", body = Error),
        (status = 500, description = "Status rejected by storage", body = Error)
    ),
    tags = ["leaves"],
    operation_id = "updateLeaveStatus"
)]
#[put("/leaves/{id}/status", wrap = "Authorize::roles(STAFF)")]
pub async fn update_leave_status(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    payload: web::Json<StatusRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let update = StatusUpdate::new(path.into_inner(), payload.into_inner().status, session.id());
    state.leaves.update_status(update).await?;
    Ok(web::Json(MessageResponse::new(
        "Leave request status updated successfully",
    )))
}
