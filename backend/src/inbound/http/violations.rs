//! Disciplinary violation handlers.
//!
//! ```text
//! POST /api/violations {"studentId":3,"type":"Curfew","severity":"Yellow"}
//! GET  /api/violations
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewViolation, STAFF, Severity, UserId};

use super::ApiResult;
use super::authorize::Authorize;
use super::schemas::{ViolationCreated, ViolationsResponse};
use super::session::SessionContext;
use super::state::HttpState;

/// Violation body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViolationRequest {
    pub student_id: UserId,
    #[serde(rename = "type")]
    #[schema(example = "Curfew")]
    pub violation_type: String,
    pub severity: Severity,
    #[serde(default)]
    pub description: Option<String>,
}

/// Issue a violation against a student.
#[utoipa::path(
    post,
    path = "/api/violations",
    request_body = ViolationRequest,
    responses(
        (status = 201, description = "Violation recorded", body = ViolationCreated),
        (status = 400, description = "Missing type or unknown student", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["violations"],
    operation_id = "issueViolation"
)]
#[post("/violations", wrap = "Authorize::roles(STAFF)")]
pub async fn issue_violation(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ViolationRequest>,
) -> ApiResult<HttpResponse> {
    let ViolationRequest {
        student_id,
        violation_type,
        severity,
        description,
    } = payload.into_inner();
    let violation = NewViolation::try_new(
        student_id,
        &violation_type,
        severity,
        description.as_deref(),
        session.id(),
    )?;
    let violation = state.violations.issue(violation).await?;
    Ok(HttpResponse::Created().json(ViolationCreated {
        message: "Violation recorded".to_owned(),
        violation,
    }))
}

/// Violations visible to the caller.
#[utoipa::path(
    get,
    path = "/api/violations",
    responses(
        (status = 200, description = "Own violations for students, all for staff", body = ViolationsResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["violations"],
    operation_id = "listViolations"
)]
#[get("/violations", wrap = "Authorize::authenticated()")]
pub async fn list_violations(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ViolationsResponse>> {
    let violations = state.violations_query.list(session.user()).await?;
    Ok(web::Json(ViolationsResponse { violations }))
}
