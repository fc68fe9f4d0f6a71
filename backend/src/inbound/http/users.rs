//! Profile updates and resident directories.
//!
//! ```text
//! PUT /api/users/avatar {"avatar":"https://..."}
//! GET /api/student/roommates
//! GET /api/warden/students
//! GET /api/admin/students
//! ```

use actix_web::{get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Role};

use super::ApiResult;
use super::authorize::Authorize;
use super::schemas::{AvatarResponse, RoommatesResponse, StudentsResponse};
use super::session::SessionContext;
use super::state::HttpState;

/// Avatar update body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AvatarRequest {
    #[schema(example = "https://example.com/avatar.png")]
    pub avatar: String,
}

/// Replace the caller's avatar.
#[utoipa::path(
    put,
    path = "/api/users/avatar",
    request_body = AvatarRequest,
    responses(
        (status = 200, description = "Avatar stored", body = AvatarResponse),
        (status = 400, description = "Blank avatar", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Account no longer exists", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateAvatar"
)]
#[put("/users/avatar", wrap = "Authorize::authenticated()")]
pub async fn update_avatar(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AvatarRequest>,
) -> ApiResult<web::Json<AvatarResponse>> {
    let avatar = state
        .accounts
        .update_avatar(session.user(), payload.into_inner().avatar)
        .await?;
    Ok(web::Json(AvatarResponse {
        message: "Avatar updated successfully".to_owned(),
        avatar,
    }))
}

/// Other residents sharing the caller's room.
#[utoipa::path(
    get,
    path = "/api/student/roommates",
    responses(
        (status = 200, description = "Roommates, empty without a room", body = RoommatesResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["users"],
    operation_id = "listRoommates"
)]
#[get("/student/roommates", wrap = "Authorize::roles(&[Role::Student])")]
pub async fn roommates(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<RoommatesResponse>> {
    let roommates = state.residents.roommates(session.user()).await?;
    Ok(web::Json(RoommatesResponse { roommates }))
}

async fn students(state: &HttpState) -> ApiResult<web::Json<StudentsResponse>> {
    let students = state.residents.students().await?;
    Ok(web::Json(StudentsResponse { students }))
}

/// Every student profile, for wardens.
#[utoipa::path(
    get,
    path = "/api/warden/students",
    responses(
        (status = 200, description = "Students", body = StudentsResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["users"],
    operation_id = "listStudentsForWarden"
)]
#[get("/warden/students", wrap = "Authorize::roles(&[Role::Warden])")]
pub async fn warden_students(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<StudentsResponse>> {
    students(&state).await
}

/// Every student profile, for admins.
#[utoipa::path(
    get,
    path = "/api/admin/students",
    responses(
        (status = 200, description = "Students", body = StudentsResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["users"],
    operation_id = "listStudentsForAdmin"
)]
#[get("/admin/students", wrap = "Authorize::roles(&[Role::Admin])")]
pub async fn admin_students(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<StudentsResponse>> {
    students(&state).await
}
