//! Account roles and the staff/student split used by every access check.

use super::labels::define_label_enum;

define_label_enum! {
    /// Closed set of account roles.
    ///
    /// The role decides which endpoints a caller can reach and which rows a
    /// list endpoint returns. Access checks match on it exhaustively.
    pub enum Role as "role" {
        /// Full access including finance and room inventory.
        Admin => "admin",
        /// Day-to-day operations: requests, allocation, attendance.
        Warden => "warden",
        /// Self-service access to the caller's own records.
        Student => "student",
    }
}

/// Roles allowed to review student requests.
pub const STAFF: &[Role] = &[Role::Warden, Role::Admin];

impl Role {
    /// True for wardens and admins.
    pub const fn is_staff(self) -> bool {
        match self {
            Self::Admin | Self::Warden => true,
            Self::Student => false,
        }
    }
}
