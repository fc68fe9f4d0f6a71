//! Complaint handlers.
//!
//! ```text
//! POST /api/complaints {"category":"Plumbing","description":"Tap leaks"}
//! GET  /api/complaints
//! PUT  /api/complaints/{id}/status {"status":"Resolved"}
//! ```
//!
//! Students file and list their own complaints. Staff list every complaint
//! with the submitter's name and move them through the workflow.

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ComplaintDraft, Error, Role, STAFF, StatusUpdate};

use super::ApiResult;
use super::authorize::Authorize;
use super::schemas::{ComplaintCreated, ComplaintsResponse, MessageResponse, StatusRequest};
use super::session::SessionContext;
use super::state::HttpState;

/// New complaint body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ComplaintRequest {
    #[schema(example = "Plumbing")]
    pub category: String,
    #[schema(example = "Bathroom tap has been leaking since Monday")]
    pub description: String,
}

/// File a complaint against the caller's current room.
#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = ComplaintRequest,
    responses(
        (status = 201, description = "Complaint submitted", body = ComplaintCreated),
        (status = 400, description = "Missing category or description", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["complaints"],
    operation_id = "submitComplaint"
)]
#[post("/complaints", wrap = "Authorize::roles(&[Role::Student])")]
pub async fn submit_complaint(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ComplaintRequest>,
) -> ApiResult<HttpResponse> {
    let ComplaintRequest {
        category,
        description,
    } = payload.into_inner();
    let draft = ComplaintDraft::try_new(&category, &description)?;
    let complaint = state.complaints.submit(session.user(), draft).await?;
    Ok(HttpResponse::Created().json(ComplaintCreated {
        message: "Complaint submitted".to_owned(),
        complaint,
    }))
}

/// Complaints visible to the caller.
#[utoipa::path(
    get,
    path = "/api/complaints",
    responses(
        (status = 200, description = "Own complaints for students, all for staff", body = ComplaintsResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["complaints"],
    operation_id = "listComplaints"
)]
#[get("/complaints", wrap = "Authorize::authenticated()")]
pub async fn list_complaints(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ComplaintsResponse>> {
    let complaints = state.complaints_query.list(session.user()).await?;
    Ok(web::Json(ComplaintsResponse { complaints }))
}

/// Move a complaint to a new status.
#[utoipa::path(
    put,
    path = "/api/complaints/{id}/status",
    params(("id" = i32, Path, description = "Complaint id")),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown complaint", body = Error),
        (status = 500, description = "Status rejected by storage", body = Error)
    ),
    tags = ["complaints"],
    operation_id = "updateComplaintStatus"
)]
#[put("/complaints/{id}/status", wrap = "Authorize::roles(STAFF)")]
pub async fn update_complaint_status(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    payload: web::Json<StatusRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let update = StatusUpdate::new(path.into_inner(), payload.into_inner().status, session.id());
    state.complaints.update_status(update).await?;
    Ok(web::Json(MessageResponse::new(
        "Complaint status updated successfully",
    )))
}
