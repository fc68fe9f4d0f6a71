//! Notice board handlers.
//!
//! ```text
//! POST /api/notices {"title":"Water cut","content":"Tuesday 9-11","type":"Emergency"}
//! GET  /api/notices
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewNotice, NoticeType, STAFF};

use super::ApiResult;
use super::authorize::Authorize;
use super::schemas::{NoticeCreated, NoticesResponse};
use super::session::SessionContext;
use super::state::HttpState;

/// Notice body. Type defaults to `General`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeRequest {
    #[schema(example = "Water cut")]
    pub title: String,
    pub content: String,
    #[serde(default, rename = "type")]
    pub notice_type: Option<NoticeType>,
    #[serde(default)]
    pub is_pinned: bool,
}

/// Post a notice as the caller.
#[utoipa::path(
    post,
    path = "/api/notices",
    request_body = NoticeRequest,
    responses(
        (status = 201, description = "Notice posted", body = NoticeCreated),
        (status = 400, description = "Missing title or content", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["notices"],
    operation_id = "postNotice"
)]
#[post("/notices", wrap = "Authorize::roles(STAFF)")]
pub async fn post_notice(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<NoticeRequest>,
) -> ApiResult<HttpResponse> {
    let NoticeRequest {
        title,
        content,
        notice_type,
        is_pinned,
    } = payload.into_inner();
    let notice = NewNotice::try_new(&title, &content, notice_type, is_pinned, session.id())?;
    let notice = state.notices.post(notice).await?;
    Ok(HttpResponse::Created().json(NoticeCreated {
        message: "Notice posted".to_owned(),
        notice,
    }))
}

/// Every notice, pinned first then newest first.
#[utoipa::path(
    get,
    path = "/api/notices",
    responses(
        (status = 200, description = "Notices", body = NoticesResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["notices"],
    operation_id = "listNotices"
)]
#[get("/notices", wrap = "Authorize::authenticated()")]
pub async fn list_notices(state: web::Data<HttpState>) -> ApiResult<web::Json<NoticesResponse>> {
    let notices = state.notices_query.list().await?;
    Ok(web::Json(NoticesResponse { notices }))
}
