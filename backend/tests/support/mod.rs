//! Shared helpers for the backend integration suites.
//!
//! Integration tests compile as separate crates, so the app factory and the
//! signup/login shortcuts live here and each suite pulls them in with
//! `mod support;`.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use hostel::Trace;
use hostel::inbound::http::{self, state::HttpState};

/// App with the full API scope mounted over `state`.
pub fn app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .service(web::scope("/api").configure(http::configure))
}

/// Session cookie set on `res`.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "token")
        .expect("session cookie")
        .into_owned()
}

/// Register an account and return its id with the session cookie.
pub async fn signup<S, B>(app: &S, name: &str, email: &str, role: &str) -> (i64, Cookie<'static>)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({
                "name": name,
                "email": email,
                "password": "pass-word",
                "role": role,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status().as_u16(), 201, "signup for {email}");
    let cookie = session_cookie(&res);
    let body: Value = test::read_body_json(res).await;
    let id = body["user"]["id"].as_i64().expect("user id");
    (id, cookie)
}

/// Send `req` and decode the JSON body alongside the status code.
pub async fn send<S, B>(app: &S, req: test::TestRequest) -> (u16, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status().as_u16();
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}
