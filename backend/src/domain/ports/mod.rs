//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`PasswordHasher`], [`SessionTokens`]) are
//! implemented by outbound adapters. Driving ports (`*Command`, `*Query`) are
//! implemented by domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod allocation_command;
mod attendance_command;
mod attendance_repository;
mod complaint_command;
mod complaint_repository;
mod credentials;
mod dashboard_query;
mod leave_command;
mod leave_repository;
mod notice_command;
mod notice_repository;
mod payment_command;
mod payment_repository;
mod resident_query;
mod room_change_command;
mod room_change_repository;
mod room_repository;
mod stats_repository;
mod user_repository;
mod violation_command;
mod violation_repository;

pub use account_command::{AccountCommand, AccountQuery, SessionGrant};
#[cfg(test)]
pub use account_command::{MockAccountCommand, MockAccountQuery};
#[cfg(test)]
pub use allocation_command::{MockAllocationCommand, MockRoomQuery};
pub use allocation_command::{AllocationCommand, RoomQuery};
pub use attendance_command::{AttendanceCommand, AttendanceQuery};
#[cfg(test)]
pub use attendance_command::{MockAttendanceCommand, MockAttendanceQuery};
#[cfg(test)]
pub use attendance_repository::MockAttendanceRepository;
pub use attendance_repository::{AttendanceRepository, AttendanceRepositoryError};
pub use complaint_command::{ComplaintCommand, ComplaintQuery};
#[cfg(test)]
pub use complaint_command::{MockComplaintCommand, MockComplaintQuery};
#[cfg(test)]
pub use complaint_repository::MockComplaintRepository;
pub use complaint_repository::{ComplaintRepository, ComplaintRepositoryError};
pub use credentials::{PasswordHashError, PasswordHasher, SessionTokenError, SessionTokens};
#[cfg(test)]
pub use credentials::{MockPasswordHasher, MockSessionTokens};
pub use dashboard_query::DashboardQuery;
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
pub use leave_command::{LeaveCommand, LeaveQuery};
#[cfg(test)]
pub use leave_command::{MockLeaveCommand, MockLeaveQuery};
#[cfg(test)]
pub use leave_repository::MockLeaveRepository;
pub use leave_repository::{LeaveRepository, LeaveRepositoryError};
#[cfg(test)]
pub use notice_command::{MockNoticeCommand, MockNoticeQuery};
pub use notice_command::{NoticeCommand, NoticeQuery};
#[cfg(test)]
pub use notice_repository::MockNoticeRepository;
pub use notice_repository::{NoticeRepository, NoticeRepositoryError};
#[cfg(test)]
pub use payment_command::{MockPaymentCommand, MockPaymentQuery};
pub use payment_command::{PaymentCommand, PaymentQuery};
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
pub use payment_repository::{PaymentRepository, PaymentRepositoryError, PaymentTotals};
#[cfg(test)]
pub use resident_query::MockResidentQuery;
pub use resident_query::ResidentQuery;
#[cfg(test)]
pub use room_change_command::{MockRoomChangeCommand, MockRoomChangeQuery};
pub use room_change_command::{RoomChangeCommand, RoomChangeQuery};
#[cfg(test)]
pub use room_change_repository::MockRoomChangeRepository;
pub use room_change_repository::{RoomChangeRepository, RoomChangeRepositoryError};
#[cfg(test)]
pub use room_repository::MockRoomRepository;
pub use room_repository::{AllocationOutcome, RoomRepository, RoomRepositoryError};
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
pub use stats_repository::{StatsRepository, StatsRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{StoredCredentials, UserRepository, UserRepositoryError};
#[cfg(test)]
pub use violation_command::{MockViolationCommand, MockViolationQuery};
pub use violation_command::{ViolationCommand, ViolationQuery};
#[cfg(test)]
pub use violation_repository::MockViolationRepository;
pub use violation_repository::{ViolationRepository, ViolationRepositoryError};
