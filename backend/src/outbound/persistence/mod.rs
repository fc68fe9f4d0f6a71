//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by an embedded SQLite file via Diesel, with async support through
//! `diesel-async`'s `SyncConnectionWrapper` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel rows and domain types. Capacity bookkeeping for enforced
//!   allocation is the one multi-table workflow and runs in a transaction.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) never leave this module.
//! - **Versioned schema**: `migrations` applies the embedded SQL steps once
//!   each, in order, before the server binds.
//! - **Strongly typed errors**: database errors map onto each port's error
//!   enum; constraint messages survive for server logs only.
//!
//! # Example
//!
//! ```ignore
//! use hostel::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("hostel.db")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_attendance_repository;
mod diesel_basic_error_mapping;
mod diesel_complaint_repository;
mod diesel_leave_repository;
mod diesel_notice_repository;
mod diesel_payment_repository;
mod diesel_room_change_repository;
mod diesel_room_repository;
mod diesel_stats_repository;
mod diesel_user_repository;
mod diesel_violation_repository;
mod migrations;
mod models;
mod pool;
mod row_mapping;
mod schema;

pub use diesel_attendance_repository::DieselAttendanceRepository;
pub use diesel_complaint_repository::DieselComplaintRepository;
pub use diesel_leave_repository::DieselLeaveRepository;
pub use diesel_notice_repository::DieselNoticeRepository;
pub use diesel_payment_repository::DieselPaymentRepository;
pub use diesel_room_change_repository::DieselRoomChangeRepository;
pub use diesel_room_repository::DieselRoomRepository;
pub use diesel_stats_repository::DieselStatsRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use diesel_violation_repository::DieselViolationRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError, SqliteConn};
