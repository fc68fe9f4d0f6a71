//! User identity and profile read models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Role;

/// Placeholder recorded when a student has no room assigned.
pub const NO_ROOM: &str = "N/A";

/// Database identifier of a user row.
///
/// # Examples
/// ```
/// use hostel::domain::UserId;
///
/// let id = UserId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i32, example = 1)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw row id.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw row id.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile returned by the auth and directory endpoints.
///
/// `room_number` is a denormalised copy written by allocation; it is not
/// checked against the room inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[schema(example = "Asha Rao")]
    pub name: String,
    #[schema(example = "asha@example.com")]
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    #[schema(example = "101")]
    pub room_number: Option<String>,
    pub fees_paid: f64,
    pub gender: Option<String>,
    pub is_verified: bool,
}

impl User {
    /// Room label for snapshots, falling back to [`NO_ROOM`].
    pub fn room_or_placeholder(&self) -> String {
        self.room_number
            .as_deref()
            .filter(|room| !room.trim().is_empty())
            .unwrap_or(NO_ROOM)
            .to_owned()
    }
}

/// Minimal view of another resident sharing the caller's room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Roommate {
    pub id: UserId,
    pub name: String,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn student(room_number: Option<&str>) -> User {
        User {
            id: UserId::new(3),
            name: "Ravi".to_owned(),
            email: "ravi@example.com".to_owned(),
            role: Role::Student,
            avatar: None,
            phone: None,
            room_number: room_number.map(str::to_owned),
            fees_paid: 0.0,
            gender: None,
            is_verified: false,
        }
    }

    #[rstest]
    #[case(Some("101"), "101")]
    #[case(None, NO_ROOM)]
    #[case(Some("  "), NO_ROOM)]
    fn room_snapshot_falls_back(#[case] room: Option<&str>, #[case] expected: &str) {
        assert_eq!(student(room).room_or_placeholder(), expected);
    }

    #[rstest]
    fn serialises_with_camel_case_keys() {
        let value = serde_json::to_value(student(Some("102"))).expect("serialise");
        assert_eq!(value["roomNumber"], "102");
        assert_eq!(value["feesPaid"], 0.0);
        assert_eq!(value["isVerified"], false);
        assert_eq!(value["role"], "student");
        assert_eq!(value["id"], 3);
    }
}
