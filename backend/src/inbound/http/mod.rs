//! HTTP inbound adapter exposing REST endpoints.
//!
//! Every API handler lives under `/api` and declares its own role allow-list
//! through [`authorize::Authorize`]. Health checks sit outside that scope.

pub mod allocation;
pub mod attendance;
pub mod auth;
pub mod authorize;
pub mod complaints;
pub mod error;
pub mod health;
pub mod leaves;
pub mod notices;
pub mod payments;
pub mod room_change;
pub mod schemas;
pub mod session;
pub mod state;
pub mod stats;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod violations;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api` handler on `cfg`.
///
/// The caller mounts this inside `web::scope("/api")`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::signup)
        .service(auth::login)
        .service(auth::logout)
        .service(auth::me)
        .service(users::update_avatar)
        .service(users::roommates)
        .service(users::warden_students)
        .service(users::admin_students)
        .service(complaints::submit_complaint)
        .service(complaints::list_complaints)
        .service(complaints::update_complaint_status)
        .service(leaves::apply_leave)
        .service(leaves::list_leaves)
        .service(leaves::update_leave_status)
        .service(room_change::request_room_change)
        .service(room_change::list_room_changes)
        .service(room_change::update_room_change_status)
        .service(payments::create_payment)
        .service(payments::list_payments)
        .service(payments::student_payments)
        .service(payments::update_payment_status)
        .service(payments::finance)
        .service(allocation::allocate)
        .service(allocation::list_rooms)
        .service(stats::warden_stats)
        .service(stats::admin_stats)
        .service(notices::post_notice)
        .service(notices::list_notices)
        .service(attendance::record_attendance)
        .service(attendance::attendance_for_date)
        .service(violations::issue_violation)
        .service(violations::list_violations);
}
