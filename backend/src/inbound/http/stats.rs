//! Dashboard aggregates for wardens and admins.

use actix_web::{get, web};

use crate::domain::{AdminStats, Error, Role, WardenStats};

use super::ApiResult;
use super::authorize::Authorize;
use super::state::HttpState;

/// Student, open complaint and pending leave counts.
#[utoipa::path(
    get,
    path = "/api/warden/stats",
    responses(
        (status = 200, description = "Warden dashboard", body = WardenStats),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["stats"],
    operation_id = "wardenStats"
)]
#[get("/warden/stats", wrap = "Authorize::roles(&[Role::Warden])")]
pub async fn warden_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<WardenStats>> {
    Ok(web::Json(state.dashboard.warden_stats().await?))
}

/// Occupancy, fees, complaints and the recent activity feed.
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Admin dashboard", body = AdminStats),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["stats"],
    operation_id = "adminStats"
)]
#[get("/admin/stats", wrap = "Authorize::roles(&[Role::Admin])")]
pub async fn admin_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<AdminStats>> {
    Ok(web::Json(state.dashboard.admin_stats().await?))
}
