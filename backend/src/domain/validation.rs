//! Field-level validation shared by request payloads.
//!
//! Failures convert into [`Error::invalid_request`] with a `details` object
//! naming the field, so clients can highlight the offending input.

use serde_json::json;

use super::auth::CredentialsValidationError;
use super::Error;

/// Validation failure for a single payload field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Required text was missing or blank.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    /// Value was present but unacceptable.
    #[error("{field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl FieldError {
    /// Build an [`FieldError::Empty`] for `field`.
    pub const fn empty(field: &'static str) -> Self {
        Self::Empty { field }
    }

    /// Build an [`FieldError::Invalid`] for `field`.
    pub const fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }

    /// Name of the offending field in wire casing.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::Invalid { field, .. } => field,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "empty",
            Self::Invalid { .. } => "invalid",
        }
    }
}

/// Trim `raw` and reject it when nothing remains.
///
/// # Examples
/// ```
/// use hostel::domain::validation::required_text;
///
/// assert_eq!(required_text("category", "  Plumbing ").unwrap(), "Plumbing");
/// assert!(required_text("category", "   ").is_err());
/// ```
pub fn required_text(field: &'static str, raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::empty(field));
    }
    Ok(trimmed.to_owned())
}

/// Trim an optional value, treating blank input as absent.
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

impl From<FieldError> for Error {
    fn from(value: FieldError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": value.code(),
        }))
    }
}

impl From<CredentialsValidationError> for Error {
    fn from(value: CredentialsValidationError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": "invalid",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(FieldError::empty("reason"), "reason must not be empty", "empty")]
    #[case(
        FieldError::invalid("toDate", "must not be before fromDate"),
        "toDate must not be before fromDate",
        "invalid"
    )]
    fn converts_into_invalid_request(
        #[case] error: FieldError,
        #[case] message: &str,
        #[case] code: &str,
    ) {
        let field = error.field();
        let converted = Error::from(error);
        assert_eq!(converted.code(), ErrorCode::InvalidRequest);
        assert_eq!(converted.message(), message);
        let details = converted.details().expect("details attached");
        assert_eq!(details["field"], field);
        assert_eq!(details["code"], code);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("  "), None)]
    #[case(Some(" x "), Some("x"))]
    fn optional_text_trims(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(optional_text(raw).as_deref(), expected);
    }
}
