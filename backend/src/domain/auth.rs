//! Authentication primitives: login credentials, signup details and the
//! identity carried by a verified session token.
//!
//! Inbound adapters parse raw strings through these constructors before any
//! port is called, so services only ever see validated values.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

use super::{Role, UserId};

/// Validation failures for login and signup payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Name was missing or blank once trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email lacks an `@` separating local part and domain.
    #[error("email must contain '@'")]
    MalformedEmail,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Fees paid must be a finite, non-negative amount.
    #[error("fees paid must be a non-negative number")]
    InvalidFeesPaid,
}

impl CredentialsValidationError {
    /// Name of the offending payload field, in wire casing.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail | Self::MalformedEmail => "email",
            Self::EmptyPassword => "password",
            Self::InvalidFeesPaid => "feesPaid",
        }
    }
}

fn normalise_email(raw: &str) -> Result<String, CredentialsValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(CredentialsValidationError::EmptyEmail);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email.to_owned()),
        _ => Err(CredentialsValidationError::MalformedEmail),
    }
}

fn require_password(raw: &str) -> Result<Zeroizing<String>, CredentialsValidationError> {
    if raw.is_empty() {
        return Err(CredentialsValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(raw.to_owned()))
}

fn trimmed_optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and contains `@`.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use hostel::domain::{LoginCredentials, Role};
///
/// let creds = LoginCredentials::try_from_parts(" admin@hostelos.com ", "admin123", Role::Admin)
///     .unwrap();
/// assert_eq!(creds.email(), "admin@hostelos.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
    role: Role,
}

impl LoginCredentials {
    /// Construct credentials from raw inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Self, CredentialsValidationError> {
        Ok(Self {
            email: normalise_email(email)?,
            password: require_password(password)?,
            role,
        })
    }

    /// Email used for the account lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as typed by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Role the caller claims to log in as.
    pub fn role(&self) -> Role {
        self.role
    }
}

/// Raw signup fields before validation.
#[derive(Debug, Clone, Default)]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub room_number: Option<String>,
    pub fees_paid: Option<f64>,
    pub gender: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
}

/// Validated signup details. Roles default to student when omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    name: String,
    email: String,
    password: Zeroizing<String>,
    role: Role,
    room_number: Option<String>,
    fees_paid: f64,
    gender: Option<String>,
    avatar: Option<String>,
    phone: Option<String>,
    is_verified: bool,
}

impl NewAccount {
    /// Validate a signup draft.
    pub fn try_new(draft: SignupDraft) -> Result<Self, CredentialsValidationError> {
        let SignupDraft {
            name,
            email,
            password,
            role,
            room_number,
            fees_paid,
            gender,
            avatar,
            phone,
        } = draft;

        let name = name.trim();
        if name.is_empty() {
            return Err(CredentialsValidationError::EmptyName);
        }
        let email = normalise_email(&email)?;
        let password = require_password(&password)?;
        let fees_paid = fees_paid.unwrap_or(0.0);
        if !fees_paid.is_finite() || fees_paid < 0.0 {
            return Err(CredentialsValidationError::InvalidFeesPaid);
        }

        Ok(Self {
            name: name.to_owned(),
            email,
            password,
            role: role.unwrap_or(Role::Student),
            room_number: trimmed_optional(room_number),
            fees_paid,
            gender: trimmed_optional(gender),
            avatar: trimmed_optional(avatar),
            phone: trimmed_optional(phone),
            is_verified: false,
        })
    }

    /// Mark the account as verified on creation. Used for seeded staff.
    pub fn verified(self) -> Self {
        Self {
            is_verified: true,
            ..self
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn room_number(&self) -> Option<&str> {
        self.room_number.as_deref()
    }

    pub fn fees_paid(&self) -> f64 {
        self.fees_paid
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }
}

/// Identity decoded from a verified session token and attached to requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub role: Role,
    pub name: String,
}

impl AuthenticatedUser {
    /// Build an identity from its parts.
    pub fn new(id: UserId, role: Role, name: impl Into<String>) -> Self {
        Self {
            id,
            role,
            name: name.into(),
        }
    }
}

/// Signed token issued at login or signup.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    value: Zeroizing<String>,
    max_age_secs: i64,
}

impl SessionToken {
    /// Wrap an encoded token together with its lifetime.
    pub fn new(value: impl Into<String>, max_age_secs: i64) -> Self {
        Self {
            value: Zeroizing::new(value.into()),
            max_age_secs,
        }
    }

    /// Encoded token for the cookie value.
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Seconds until the token expires.
    pub fn max_age_secs(&self) -> i64 {
        self.max_age_secs
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &"<redacted>")
            .field("max_age_secs", &self.max_age_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn draft() -> SignupDraft {
        SignupDraft {
            name: "  Meera  ".to_owned(),
            email: " meera@example.com ".to_owned(),
            password: "pw".to_owned(),
            ..SignupDraft::default()
        }
    }

    #[rstest]
    #[case("", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("   ", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("nobody", "pw", CredentialsValidationError::MalformedEmail)]
    #[case("@example.com", "pw", CredentialsValidationError::MalformedEmail)]
    #[case("a@example.com", "", CredentialsValidationError::EmptyPassword)]
    fn invalid_login_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password, Role::Student)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn login_keeps_password_whitespace() {
        let creds = LoginCredentials::try_from_parts("a@b.c", " secret ", Role::Warden)
            .expect("valid credentials");
        assert_eq!(creds.password(), " secret ");
        assert_eq!(creds.role(), Role::Warden);
    }

    #[rstest]
    fn signup_defaults_role_and_fees() {
        let account = NewAccount::try_new(draft()).expect("valid signup");
        assert_eq!(account.name(), "Meera");
        assert_eq!(account.email(), "meera@example.com");
        assert_eq!(account.role(), Role::Student);
        assert_eq!(account.fees_paid(), 0.0);
        assert!(account.room_number().is_none());
        assert!(!account.is_verified());
        assert!(account.verified().is_verified());
    }

    #[rstest]
    fn signup_drops_blank_optional_fields() {
        let account = NewAccount::try_new(SignupDraft {
            room_number: Some(" 101 ".to_owned()),
            gender: Some("  ".to_owned()),
            ..draft()
        })
        .expect("valid signup");
        assert_eq!(account.room_number(), Some("101"));
        assert!(account.gender().is_none());
    }

    #[rstest]
    #[case(SignupDraft { name: " ".to_owned(), ..draft() }, "name")]
    #[case(SignupDraft { email: "x".to_owned(), ..draft() }, "email")]
    #[case(SignupDraft { password: String::new(), ..draft() }, "password")]
    #[case(SignupDraft { fees_paid: Some(-1.0), ..draft() }, "feesPaid")]
    #[case(SignupDraft { fees_paid: Some(f64::NAN), ..draft() }, "feesPaid")]
    fn signup_rejects_invalid_fields(#[case] input: SignupDraft, #[case] field: &str) {
        let err = NewAccount::try_new(input).expect_err("invalid signup");
        assert_eq!(err.field(), field);
    }

    #[rstest]
    fn session_token_debug_is_redacted() {
        let token = SessionToken::new("header.payload.signature", 3600);
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("payload"));
        assert_eq!(token.max_age_secs(), 3600);
    }
}
