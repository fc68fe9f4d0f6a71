//! Cookie authentication and per-route role allow-lists.
//!
//! [`Authorize`] wraps individual resources:
//!
//! ```text
//! #[get("/complaints", wrap = "Authorize::authenticated()")]
//! #[put("/complaints/{id}/status", wrap = "Authorize::roles(STAFF)")]
//! ```
//!
//! The `token` cookie is verified before the wrapped handler runs, so body
//! extractors never see unauthenticated requests. Rejections are rendered
//! through the domain [`Error`] and therefore carry the request trace id.
//!
//! | Condition | Status | Message |
//! | --- | --- | --- |
//! | no `token` cookie | 401 | `Unauthorized` |
//! | malformed, tampered or expired token | 401 | `Invalid token` |
//! | role outside the allow-list | 403 | `Forbidden` |

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpMessage, ResponseError, web};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

use crate::domain::{AuthenticatedUser, Error, Role};

use super::session::TOKEN_COOKIE;
use super::state::HttpState;

/// Middleware factory requiring a verified session and, optionally, a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authorize {
    allowed: Option<&'static [Role]>,
}

impl Authorize {
    /// Accept any verified caller.
    pub const fn authenticated() -> Self {
        Self { allowed: None }
    }

    /// Accept verified callers whose role is listed.
    pub const fn roles(allowed: &'static [Role]) -> Self {
        Self {
            allowed: Some(allowed),
        }
    }

    fn permits(&self, role: Role) -> bool {
        self.allowed.is_none_or(|allowed| allowed.contains(&role))
    }

    fn check(&self, req: &ServiceRequest) -> Result<AuthenticatedUser, Error> {
        let state = req
            .app_data::<web::Data<HttpState>>()
            .ok_or_else(|| Error::internal("HTTP state is not registered"))?;
        let cookie = req
            .cookie(TOKEN_COOKIE)
            .filter(|cookie| !cookie.value().is_empty())
            .ok_or_else(|| Error::unauthorized("Unauthorized"))?;
        let user = state.tokens.verify(cookie.value()).map_err(|error| {
            debug!(%error, "rejected session token");
            Error::unauthorized("Invalid token")
        })?;
        if !self.permits(user.role) {
            debug!(user_id = %user.id, role = %user.role, path = req.path(), "role not permitted");
            return Err(Error::forbidden("Forbidden"));
        }
        Ok(user)
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authorize
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthorizeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorizeMiddleware {
            service: Rc::new(service),
            policy: *self,
        }))
    }
}

/// Service wrapper produced by [`Authorize`].
pub struct AuthorizeMiddleware<S> {
    service: Rc<S>,
    policy: Authorize,
}

impl<S, B> Service<ServiceRequest> for AuthorizeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let policy = self.policy;
        // Checked inside the future so rejections see the request trace id.
        Box::pin(async move {
            match policy.check(&req) {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    let response = error.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{STAFF, TRACE_ID_HEADER};
    use crate::inbound::http::session::SessionContext;
    use crate::inbound::http::test_utils::{TestSession, test_state, unused_ports};
    use crate::middleware::Trace;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_service, init_service, read_body, read_body_json};
    use actix_web::{App, HttpResponse, get};
    use rstest::rstest;
    use serde_json::Value;

    #[get("/staff", wrap = "Authorize::roles(STAFF)")]
    async fn staff_only(session: SessionContext) -> HttpResponse {
        HttpResponse::Ok().body(session.id().to_string())
    }

    #[get("/any", wrap = "Authorize::authenticated()")]
    async fn any_caller(session: SessionContext) -> HttpResponse {
        HttpResponse::Ok().body(session.role().to_string())
    }

    async fn call(path: &str, cookie: Option<&str>) -> ServiceResponse {
        let app = init_service(
            App::new()
                .app_data(test_state(unused_ports(), TestSession::default()))
                .wrap(Trace)
                .service(staff_only)
                .service(any_caller),
        )
        .await;
        let mut req = TestRequest::get().uri(path);
        if let Some(value) = cookie {
            req = req.cookie(Cookie::new(TOKEN_COOKIE, value.to_owned()));
        }
        call_service(&app, req.to_request()).await
    }

    #[rstest]
    #[case(Role::Student, false)]
    #[case(Role::Warden, true)]
    #[case(Role::Admin, true)]
    fn allow_list_matches_roles(#[case] role: Role, #[case] expected: bool) {
        assert_eq!(Authorize::roles(STAFF).permits(role), expected);
        assert!(Authorize::authenticated().permits(role));
    }

    #[rstest]
    #[case("/staff", None, StatusCode::UNAUTHORIZED, "Unauthorized")]
    #[case("/staff", Some(""), StatusCode::UNAUTHORIZED, "Unauthorized")]
    #[case("/staff", Some("forged"), StatusCode::UNAUTHORIZED, "Invalid token")]
    #[case("/staff", Some("student"), StatusCode::FORBIDDEN, "Forbidden")]
    #[case("/any", None, StatusCode::UNAUTHORIZED, "Unauthorized")]
    #[actix_web::test]
    async fn rejections_use_error_envelope_with_trace_id(
        #[case] path: &str,
        #[case] cookie: Option<&str>,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let res = call(path, cookie).await;
        assert_eq!(res.status(), status);
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("trace id header");
        let body: Value = read_body_json(res).await;
        assert_eq!(body["message"], message);
        assert_eq!(body["traceId"], header.as_str());
    }

    #[rstest]
    #[case("/staff", "warden", "2")]
    #[case("/staff", "admin", "1")]
    #[case("/any", "student", "student")]
    #[actix_web::test]
    async fn verified_callers_reach_the_handler(
        #[case] path: &str,
        #[case] cookie: &str,
        #[case] expected: &str,
    ) {
        let res = call(path, Some(cookie)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = read_body(res).await;
        assert_eq!(body.as_ref(), expected.as_bytes());
    }

    #[actix_web::test]
    async fn missing_state_is_an_internal_error() {
        let app = init_service(App::new().service(staff_only)).await;
        let req = TestRequest::get()
            .uri("/staff")
            .cookie(Cookie::new(TOKEN_COOKIE, "admin"))
            .to_request();
        let res = call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
