//! Session helpers to keep HTTP handlers free of cookie plumbing.
//!
//! The session is a signed token carried in the `token` cookie. The
//! [`Authorize`](super::authorize::Authorize) middleware verifies it and
//! stores the caller in the request extensions; handlers read it back with
//! the [`SessionContext`] extractor.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::{AuthenticatedUser, Error, Role, SessionToken, UserId};

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Attributes applied to every session cookie the API sets.
///
/// Cookies are `HttpOnly`, `SameSite=None` and scoped to `/`. The `Secure`
/// flag is configurable so plain-HTTP development setups keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCookies {
    secure: bool,
}

impl Default for SessionCookies {
    fn default() -> Self {
        Self { secure: true }
    }
}

impl SessionCookies {
    pub const fn new(secure: bool) -> Self {
        Self { secure }
    }

    pub const fn secure(self) -> bool {
        self.secure
    }

    /// Cookie carrying a freshly issued token.
    pub fn issue(self, token: &SessionToken) -> Cookie<'static> {
        self.base(token.as_str().to_owned())
            .max_age(Duration::seconds(token.max_age_secs()))
            .finish()
    }

    /// Expired cookie that makes clients drop the session.
    pub fn clear(self) -> Cookie<'static> {
        let mut cookie = self.base(String::new()).finish();
        cookie.make_removal();
        cookie
    }

    fn base(self, value: String) -> actix_web::cookie::CookieBuilder<'static> {
        Cookie::build(TOKEN_COOKIE, value)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::None)
    }
}

/// Authenticated caller attached by the authorisation middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext(AuthenticatedUser);

impl SessionContext {
    pub fn new(user: AuthenticatedUser) -> Self {
        Self(user)
    }

    /// The verified caller.
    pub fn user(&self) -> &AuthenticatedUser {
        &self.0
    }

    pub fn id(&self) -> UserId {
        self.0.id
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Routes mounted without `Authorize` never carry a caller.
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(
            user.map(SessionContext::new)
                .ok_or_else(|| Error::unauthorized("Unauthorized")),
        )
    }
}
