//! Credential adapters: bcrypt password digests and HS256 session tokens.

mod bcrypt_password_hasher;
mod jwt_session_tokens;

pub use bcrypt_password_hasher::BcryptPasswordHasher;
pub use jwt_session_tokens::{JwtSessionTokens, MIN_SECRET_LEN, SESSION_TTL_SECS};
