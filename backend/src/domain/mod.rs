//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed hostel entities used by the API and
//! persistence layers, and the services that implement the driving ports.
//! Types document their invariants and serialisation contracts (serde) in
//! their own Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Role (alias to `role::Role`): closed set of account roles.
//! - Request records (complaints, leaves, room changes, payments) and their
//!   validated drafts.
//! - Services implementing the ports in [`ports`].

pub(crate) mod labels;
pub mod ports;
pub mod validation;

mod account_service;
mod allocation_service;
mod attendance;
mod attendance_service;
mod auth;
mod bootstrap;
mod complaint;
mod complaint_service;
mod dashboard_service;
pub mod error;
mod leave;
mod leave_service;
mod notice;
mod notice_service;
mod payment;
mod payment_service;
mod resident_service;
mod review;
mod role;
mod room;
mod room_change;
mod room_change_service;
mod stats;
pub mod trace_id;
mod user;
mod violation;
mod violation_service;

pub use self::account_service::AccountService;
pub use self::allocation_service::AllocationService;
pub use self::attendance::{
    AttendanceMark, AttendanceRecord, AttendanceSheet, NewAttendanceSheet,
};
pub use self::attendance_service::AttendanceService;
pub use self::auth::{
    AuthenticatedUser, CredentialsValidationError, LoginCredentials, NewAccount, SessionToken,
    SignupDraft,
};
pub use self::bootstrap::{ADMIN_NAME, AdminSeed, BootstrapReport, BootstrapService};
pub use self::complaint::{Complaint, ComplaintDraft, ComplaintStatus, NewComplaint};
pub use self::complaint_service::ComplaintService;
pub use self::dashboard_service::DashboardService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::labels::UnknownLabel;
pub use self::leave::{Leave, LeaveDraft};
pub use self::leave_service::LeaveService;
pub use self::notice::{NewNotice, Notice, NoticeType};
pub use self::notice_service::NoticeService;
pub use self::payment::{FinanceSummary, NewPayment, Payment, PaymentStatus};
pub use self::payment_service::PaymentService;
pub use self::resident_service::ResidentService;
pub use self::review::{ReviewStatus, StatusUpdate};
pub use self::role::{Role, STAFF};
pub use self::room::{
    Allocation, AllocationPolicy, DEFAULT_ROOMS, Room, RoomSeed, RoomStatus, RoomType,
};
pub use self::room_change::{NewRoomChangeRequest, RoomChangeDraft, RoomChangeRequest};
pub use self::room_change_service::RoomChangeService;
pub use self::stats::{
    ActivityItem, AdminCounts, AdminStats, RECENT_ACTIVITY_LIMIT, RecentComplaint, WardenStats,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NO_ROOM, Roommate, User, UserId};
pub use self::violation::{NewViolation, Severity, Violation};
pub use self::violation_service::ViolationService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use hostel::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::forbidden("Forbidden"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
