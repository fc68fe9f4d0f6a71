//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api` handler, the health checks, the shared
//! response envelopes and the cookie security scheme. The document backs
//! Swagger UI in debug builds and is printed by the `openapi-dump` binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    AdminStats, Error, ErrorCode, FinanceSummary, Role, User, WardenStats,
};
use crate::inbound::http::schemas::{MessageResponse, StatusRequest, UserResponse};
use crate::inbound::http::session::TOKEN_COOKIE;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                TOKEN_COOKIE,
                "Signed session token issued by POST /api/auth/login or /api/auth/signup.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Hostel management API",
        description = "Role-based HTTP interface for students, wardens and admins."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::me,
        crate::inbound::http::users::update_avatar,
        crate::inbound::http::users::roommates,
        crate::inbound::http::users::warden_students,
        crate::inbound::http::users::admin_students,
        crate::inbound::http::complaints::submit_complaint,
        crate::inbound::http::complaints::list_complaints,
        crate::inbound::http::complaints::update_complaint_status,
        crate::inbound::http::leaves::apply_leave,
        crate::inbound::http::leaves::list_leaves,
        crate::inbound::http::leaves::update_leave_status,
        crate::inbound::http::room_change::request_room_change,
        crate::inbound::http::room_change::list_room_changes,
        crate::inbound::http::room_change::update_room_change_status,
        crate::inbound::http::payments::create_payment,
        crate::inbound::http::payments::list_payments,
        crate::inbound::http::payments::student_payments,
        crate::inbound::http::payments::update_payment_status,
        crate::inbound::http::payments::finance,
        crate::inbound::http::allocation::allocate,
        crate::inbound::http::allocation::list_rooms,
        crate::inbound::http::stats::warden_stats,
        crate::inbound::http::stats::admin_stats,
        crate::inbound::http::notices::post_notice,
        crate::inbound::http::notices::list_notices,
        crate::inbound::http::attendance::record_attendance,
        crate::inbound::http::attendance::attendance_for_date,
        crate::inbound::http::violations::issue_violation,
        crate::inbound::http::violations::list_violations,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Role,
        User,
        UserResponse,
        MessageResponse,
        StatusRequest,
        WardenStats,
        AdminStats,
        FinanceSummary,
    )),
    tags(
        (name = "auth", description = "Signup, login and the current session"),
        (name = "users", description = "Profiles, roommates and student rosters"),
        (name = "complaints", description = "Maintenance and conduct complaints"),
        (name = "leaves", description = "Leave applications"),
        (name = "room-change", description = "Room change requests"),
        (name = "payments", description = "Fees and the finance view"),
        (name = "allocation", description = "Room inventory and allocation"),
        (name = "stats", description = "Dashboard aggregates"),
        (name = "notices", description = "Notice board"),
        (name = "attendance", description = "Roll-call sheets"),
        (name = "violations", description = "Disciplinary violations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
