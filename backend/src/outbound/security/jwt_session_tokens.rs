//! HS256 JSON Web Tokens carried in the `token` cookie.
//!
//! Expiry is checked against the injected clock rather than the system time
//! so tests can move time without sleeping.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{SessionTokenError, SessionTokens};
use crate::domain::{AuthenticatedUser, Role, SessionToken, UserId};

/// Token lifetime in seconds.
pub const SESSION_TTL_SECS: i64 = 60 * 60;

/// Shortest signing secret accepted in release builds.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: i32,
    role: Role,
    name: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies HS256 session tokens.
pub struct JwtSessionTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl JwtSessionTokens {
    /// Build a token service signing with `secret`.
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            clock,
        }
    }
}

impl SessionTokens for JwtSessionTokens {
    fn issue(&self, user: &AuthenticatedUser) -> Result<SessionToken, SessionTokenError> {
        let iat = self.clock.utc().timestamp();
        let claims = Claims {
            id: user.id.get(),
            role: user.role,
            name: user.name.clone(),
            iat,
            exp: iat + SESSION_TTL_SECS,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| SessionTokenError::signing(err.to_string()))?;
        Ok(SessionToken::new(token, SESSION_TTL_SECS))
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, SessionTokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|err| SessionTokenError::invalid(err.to_string()))?;
        let claims = data.claims;
        if claims.exp <= self.clock.utc().timestamp() {
            return Err(SessionTokenError::invalid("token expired"));
        }
        Ok(AuthenticatedUser::new(
            UserId::new(claims.id),
            claims.role,
            claims.name,
        ))
    }
}
