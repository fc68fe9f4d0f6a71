//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountCommand, AccountQuery, AllocationCommand, AttendanceCommand, AttendanceQuery,
    ComplaintCommand, ComplaintQuery, DashboardQuery, LeaveCommand, LeaveQuery, NoticeCommand,
    NoticeQuery, PaymentCommand, PaymentQuery, ResidentQuery, RoomChangeCommand,
    RoomChangeQuery, RoomQuery, SessionTokens, ViolationCommand, ViolationQuery,
};

use super::session::SessionCookies;

/// Parameter object bundling the use-case ports behind the handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub accounts: Arc<dyn AccountCommand>,
    pub profiles: Arc<dyn AccountQuery>,
    pub residents: Arc<dyn ResidentQuery>,
    pub complaints: Arc<dyn ComplaintCommand>,
    pub complaints_query: Arc<dyn ComplaintQuery>,
    pub leaves: Arc<dyn LeaveCommand>,
    pub leaves_query: Arc<dyn LeaveQuery>,
    pub room_changes: Arc<dyn RoomChangeCommand>,
    pub room_changes_query: Arc<dyn RoomChangeQuery>,
    pub payments: Arc<dyn PaymentCommand>,
    pub payments_query: Arc<dyn PaymentQuery>,
    pub allocation: Arc<dyn AllocationCommand>,
    pub rooms: Arc<dyn RoomQuery>,
    pub dashboard: Arc<dyn DashboardQuery>,
    pub notices: Arc<dyn NoticeCommand>,
    pub notices_query: Arc<dyn NoticeQuery>,
    pub attendance: Arc<dyn AttendanceCommand>,
    pub attendance_query: Arc<dyn AttendanceQuery>,
    pub violations: Arc<dyn ViolationCommand>,
    pub violations_query: Arc<dyn ViolationQuery>,
}

/// Session plumbing shared by the middleware and the auth handlers.
#[derive(Clone)]
pub struct HttpSession {
    pub tokens: Arc<dyn SessionTokens>,
    pub cookies: SessionCookies,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub profiles: Arc<dyn AccountQuery>,
    pub residents: Arc<dyn ResidentQuery>,
    pub complaints: Arc<dyn ComplaintCommand>,
    pub complaints_query: Arc<dyn ComplaintQuery>,
    pub leaves: Arc<dyn LeaveCommand>,
    pub leaves_query: Arc<dyn LeaveQuery>,
    pub room_changes: Arc<dyn RoomChangeCommand>,
    pub room_changes_query: Arc<dyn RoomChangeQuery>,
    pub payments: Arc<dyn PaymentCommand>,
    pub payments_query: Arc<dyn PaymentQuery>,
    pub allocation: Arc<dyn AllocationCommand>,
    pub rooms: Arc<dyn RoomQuery>,
    pub dashboard: Arc<dyn DashboardQuery>,
    pub notices: Arc<dyn NoticeCommand>,
    pub notices_query: Arc<dyn NoticeQuery>,
    pub attendance: Arc<dyn AttendanceCommand>,
    pub attendance_query: Arc<dyn AttendanceQuery>,
    pub violations: Arc<dyn ViolationCommand>,
    pub violations_query: Arc<dyn ViolationQuery>,
    pub tokens: Arc<dyn SessionTokens>,
    pub cookies: SessionCookies,
}

impl HttpState {
    /// Construct state from the use-case ports and the session plumbing.
    ///
    /// # Examples
    /// ```ignore
    /// let state = HttpState::new(ports, HttpSession { tokens, cookies });
    /// let data = actix_web::web::Data::new(state);
    /// ```
    pub fn new(ports: HttpStatePorts, session: HttpSession) -> Self {
        let HttpStatePorts {
            accounts,
            profiles,
            residents,
            complaints,
            complaints_query,
            leaves,
            leaves_query,
            room_changes,
            room_changes_query,
            payments,
            payments_query,
            allocation,
            rooms,
            dashboard,
            notices,
            notices_query,
            attendance,
            attendance_query,
            violations,
            violations_query,
        } = ports;
        let HttpSession { tokens, cookies } = session;
        Self {
            accounts,
            profiles,
            residents,
            complaints,
            complaints_query,
            leaves,
            leaves_query,
            room_changes,
            room_changes_query,
            payments,
            payments_query,
            allocation,
            rooms,
            dashboard,
            notices,
            notices_query,
            attendance,
            attendance_query,
            violations,
            violations_query,
            tokens,
            cookies,
        }
    }
}
