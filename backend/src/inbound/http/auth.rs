//! Signup, login, logout and the caller's profile.
//!
//! ```text
//! POST /api/auth/signup {"name":"Asha","email":"asha@example.com","password":"pw"}
//! POST /api/auth/login  {"email":"asha@example.com","password":"pw","role":"student"}
//! POST /api/auth/logout
//! GET  /api/auth/me
//! ```
//!
//! Signup and login set the `token` session cookie; logout expires it.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::SessionGrant;
use crate::domain::{Error, LoginCredentials, NewAccount, Role, SignupDraft};

use super::ApiResult;
use super::authorize::Authorize;
use super::schemas::{MessageResponse, UserResponse};
use super::session::SessionContext;
use super::state::HttpState;

/// Signup request body. Role defaults to `student`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[schema(example = "Asha Rao")]
    pub name: String,
    #[schema(example = "asha@example.com")]
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub fees_paid: Option<f64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<SignupRequest> for SignupDraft {
    fn from(value: SignupRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            password: value.password,
            role: value.role,
            room_number: value.room_number,
            fees_paid: value.fees_paid,
            gender: value.gender,
            avatar: value.avatar,
            phone: value.phone,
        }
    }
}

/// Login request body. The role must match the stored account.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "admin@hostelos.com")]
    pub email: String,
    pub password: String,
    pub role: Role,
}

fn session_response(
    state: &HttpState,
    mut builder: actix_web::HttpResponseBuilder,
    grant: SessionGrant,
) -> HttpResponse {
    builder
        .cookie(state.cookies.issue(&grant.token))
        .json(UserResponse { user: grant.user })
}

/// Create an account and start a session for it.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid fields or email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "signup",
    security([])
)]
#[post("/auth/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let account = NewAccount::try_new(payload.into_inner().into())?;
    let grant = state.accounts.signup(account).await?;
    Ok(session_response(&state, HttpResponse::Created(), grant))
}

/// Check email, password and role, then start a session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let LoginRequest {
        email,
        password,
        role,
    } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&email, &password, role)?;
    let grant = state.accounts.login(credentials).await?;
    Ok(session_response(&state, HttpResponse::Ok(), grant))
}

/// Expire the session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Logged out", body = MessageResponse)),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/auth/logout")]
pub async fn logout(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(state.cookies.clear())
        .json(MessageResponse::new("Logged out"))
}

/// Current profile of the caller.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Caller profile", body = UserResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Account no longer exists", body = Error)
    ),
    tags = ["auth"],
    operation_id = "me"
)]
#[get("/auth/me", wrap = "Authorize::authenticated()")]
pub async fn me(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.profiles.profile(session.user()).await?;
    Ok(web::Json(UserResponse { user }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockAccountCommand, MockAccountQuery};
    use crate::domain::{SessionToken, UserId};
    use crate::inbound::http::session::TOKEN_COOKIE;
    use crate::inbound::http::test_utils::{
        TestSession, caller, role_cookie, sample_user, test_state, unused_ports,
    };
    use crate::middleware::Trace;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn call(
        accounts: MockAccountCommand,
        profiles: MockAccountQuery,
        req: test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let mut ports = unused_ports();
        ports.accounts = std::sync::Arc::new(accounts);
        ports.profiles = std::sync::Arc::new(profiles);
        let app = test::init_service(
            App::new()
                .app_data(test_state(ports, TestSession::default()))
                .wrap(Trace)
                .service(
                    web::scope("/api")
                        .service(signup)
                        .service(login)
                        .service(logout)
                        .service(me),
                ),
        )
        .await;
        test::call_service(&app, req.to_request()).await
    }

    fn grant(role: Role) -> SessionGrant {
        SessionGrant {
            user: sample_user(role),
            token: SessionToken::new("signed.jwt.value", 3600),
        }
    }

    #[actix_web::test]
    async fn signup_sets_cookie_and_returns_created_user() {
        let mut accounts = MockAccountCommand::new();
        accounts
            .expect_signup()
            .withf(|account| account.email() == "asha@example.com" && account.role() == Role::Student)
            .times(1)
            .returning(|_| Ok(grant(Role::Student)));

        let res = call(
            accounts,
            MockAccountQuery::new(),
            test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
                "name": "Asha Rao",
                "email": " asha@example.com ",
                "password": "pw",
            })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let cookie = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == TOKEN_COOKIE)
            .expect("session cookie set");
        assert_eq!(cookie.value(), "signed.jwt.value");
        assert_eq!(cookie.http_only(), Some(true));
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["user"]["email"], "asha@example.com");
        assert_eq!(body["user"]["role"], "student");
    }

    #[actix_web::test]
    async fn signup_rejects_blank_name_before_calling_the_service() {
        let res = call(
            MockAccountCommand::new(),
            MockAccountQuery::new(),
            test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
                "name": "  ",
                "email": "asha@example.com",
                "password": "pw",
            })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], "name");
    }

    #[actix_web::test]
    async fn signup_duplicate_email_is_bad_request() {
        let mut accounts = MockAccountCommand::new();
        accounts
            .expect_signup()
            .returning(|_| Err(Error::invalid_request("User already exists")));

        let res = call(
            accounts,
            MockAccountQuery::new(),
            test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
                "name": "Asha Rao",
                "email": "asha@example.com",
                "password": "pw",
            })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "User already exists");
    }

    #[rstest]
    #[case(Role::Admin)]
    #[case(Role::Warden)]
    #[case(Role::Student)]
    #[actix_web::test]
    async fn login_passes_the_claimed_role(#[case] role: Role) {
        let mut accounts = MockAccountCommand::new();
        accounts
            .expect_login()
            .withf(move |creds| creds.role() == role && creds.password() == "secret")
            .times(1)
            .returning(move |_| Ok(grant(role)));

        let res = call(
            accounts,
            MockAccountQuery::new(),
            test::TestRequest::post().uri("/api/auth/login").set_json(json!({
                "email": "someone@example.com",
                "password": "secret",
                "role": role,
            })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(
            res.response()
                .cookies()
                .any(|cookie| cookie.name() == TOKEN_COOKIE)
        );
    }

    #[actix_web::test]
    async fn login_failure_sets_no_cookie() {
        let mut accounts = MockAccountCommand::new();
        accounts
            .expect_login()
            .returning(|_| Err(Error::unauthorized("Invalid credentials")));

        let res = call(
            accounts,
            MockAccountQuery::new(),
            test::TestRequest::post().uri("/api/auth/login").set_json(json!({
                "email": "someone@example.com",
                "password": "wrong",
                "role": "warden",
            })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.response().cookies().count(), 0);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Invalid credentials");
        assert!(body["traceId"].is_string());
    }

    #[actix_web::test]
    async fn logout_expires_the_cookie() {
        let res = call(
            MockAccountCommand::new(),
            MockAccountQuery::new(),
            test::TestRequest::post().uri("/api/auth/logout"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let cookie = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == TOKEN_COOKIE)
            .expect("removal cookie set");
        assert_eq!(cookie.value(), "");
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "message": "Logged out" }));
    }

    #[actix_web::test]
    async fn me_returns_the_callers_profile() {
        let mut profiles = MockAccountQuery::new();
        profiles
            .expect_profile()
            .withf(|viewer| *viewer == caller(Role::Warden))
            .returning(|_| Ok(sample_user(Role::Warden)));

        let res = call(
            MockAccountCommand::new(),
            profiles,
            test::TestRequest::get()
                .uri("/api/auth/me")
                .cookie(role_cookie(Role::Warden)),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["user"]["id"], json!(UserId::new(2)));
    }

    #[actix_web::test]
    async fn me_requires_a_cookie() {
        let res = call(
            MockAccountCommand::new(),
            MockAccountQuery::new(),
            test::TestRequest::get().uri("/api/auth/me"),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
