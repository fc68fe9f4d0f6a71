//! Test helpers for inbound HTTP components.
//!
//! Handler tests mount one module's services over [`HttpState`] built from
//! mockall port doubles. Session cookies are resolved by [`RoleTokens`]: the
//! cookie value is simply the caller's role label.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test::{TestRequest, call_service, init_service};
use actix_web::{App, web};

use crate::domain::ports::{
    MockAccountCommand, MockAccountQuery, MockAllocationCommand, MockAttendanceCommand,
    MockAttendanceQuery, MockComplaintCommand, MockComplaintQuery, MockDashboardQuery,
    MockLeaveCommand, MockLeaveQuery, MockNoticeCommand, MockNoticeQuery, MockPaymentCommand,
    MockPaymentQuery, MockResidentQuery, MockRoomChangeCommand, MockRoomChangeQuery,
    MockRoomQuery, MockViolationCommand, MockViolationQuery, SessionTokenError, SessionTokens,
};
use crate::domain::{AuthenticatedUser, Role, SessionToken, User, UserId};

use crate::middleware::Trace;

use super::session::{SessionCookies, TOKEN_COOKIE};
use super::state::{HttpSession, HttpState, HttpStatePorts};

/// Canonical caller for each role.
pub(crate) fn caller(role: Role) -> AuthenticatedUser {
    match role {
        Role::Admin => AuthenticatedUser::new(UserId::new(1), Role::Admin, "System Admin"),
        Role::Warden => AuthenticatedUser::new(UserId::new(2), Role::Warden, "Kiran Warden"),
        Role::Student => AuthenticatedUser::new(UserId::new(3), Role::Student, "Asha Rao"),
    }
}

/// Stored profile matching [`caller`] for `role`.
pub(crate) fn sample_user(role: Role) -> User {
    let identity = caller(role);
    let email = match role {
        Role::Admin => "admin@hostelos.com",
        Role::Warden => "warden@example.com",
        Role::Student => "asha@example.com",
    };
    User {
        id: identity.id,
        name: identity.name,
        email: email.to_owned(),
        role,
        avatar: None,
        phone: None,
        room_number: matches!(role, Role::Student).then(|| "101".to_owned()),
        fees_paid: 0.0,
        gender: None,
        is_verified: role.is_staff(),
    }
}

/// Session cookie that [`RoleTokens`] resolves to [`caller`] for `role`.
pub(crate) fn role_cookie(role: Role) -> Cookie<'static> {
    Cookie::new(TOKEN_COOKIE, role.as_str())
}

/// Token double whose tokens are role labels.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RoleTokens;

impl SessionTokens for RoleTokens {
    fn issue(&self, user: &AuthenticatedUser) -> Result<SessionToken, SessionTokenError> {
        Ok(SessionToken::new(user.role.as_str(), 3600))
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, SessionTokenError> {
        token
            .parse::<Role>()
            .map(caller)
            .map_err(|err| SessionTokenError::invalid(err.to_string()))
    }
}

/// Session settings for handler tests.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TestSession {
    pub secure_cookies: bool,
}

impl From<TestSession> for HttpSession {
    fn from(value: TestSession) -> Self {
        Self {
            tokens: Arc::new(RoleTokens),
            cookies: SessionCookies::new(value.secure_cookies),
        }
    }
}

/// Ports whose mocks carry no expectations; any call fails the test.
pub(crate) fn unused_ports() -> HttpStatePorts {
    HttpStatePorts {
        accounts: Arc::new(MockAccountCommand::new()),
        profiles: Arc::new(MockAccountQuery::new()),
        residents: Arc::new(MockResidentQuery::new()),
        complaints: Arc::new(MockComplaintCommand::new()),
        complaints_query: Arc::new(MockComplaintQuery::new()),
        leaves: Arc::new(MockLeaveCommand::new()),
        leaves_query: Arc::new(MockLeaveQuery::new()),
        room_changes: Arc::new(MockRoomChangeCommand::new()),
        room_changes_query: Arc::new(MockRoomChangeQuery::new()),
        payments: Arc::new(MockPaymentCommand::new()),
        payments_query: Arc::new(MockPaymentQuery::new()),
        allocation: Arc::new(MockAllocationCommand::new()),
        rooms: Arc::new(MockRoomQuery::new()),
        dashboard: Arc::new(MockDashboardQuery::new()),
        notices: Arc::new(MockNoticeCommand::new()),
        notices_query: Arc::new(MockNoticeQuery::new()),
        attendance: Arc::new(MockAttendanceCommand::new()),
        attendance_query: Arc::new(MockAttendanceQuery::new()),
        violations: Arc::new(MockViolationCommand::new()),
        violations_query: Arc::new(MockViolationQuery::new()),
    }
}

/// Wrap ports into shared handler state.
pub(crate) fn test_state(ports: HttpStatePorts, session: TestSession) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(ports, session.into()))
}

/// Mount `register` under `/api` over `ports` and send one request.
pub(crate) async fn call_api<F>(
    ports: HttpStatePorts,
    register: F,
    req: TestRequest,
) -> ServiceResponse
where
    F: FnOnce(&mut web::ServiceConfig),
{
    let app = init_service(
        App::new()
            .app_data(test_state(ports, TestSession::default()))
            .wrap(Trace)
            .service(web::scope("/api").configure(register)),
    )
    .await;
    call_service(&app, req.to_request()).await
}

mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Role::Admin)]
    #[case(Role::Warden)]
    #[case(Role::Student)]
    fn role_tokens_round_trip(#[case] role: Role) {
        let token = RoleTokens.issue(&caller(role)).expect("issue");
        let user = RoleTokens.verify(token.as_str()).expect("verify");
        assert_eq!(user, caller(role));
    }

    #[rstest]
    fn role_tokens_reject_other_values() {
        assert!(RoleTokens.verify("forged").is_err());
    }
}
