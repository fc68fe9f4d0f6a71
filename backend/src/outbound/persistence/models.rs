//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Labels (roles, statuses, types) travel as
//! plain strings here and are parsed by each repository.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use super::schema::{
    activity_log, allocations, attendance, complaints, leaves, notices, payments,
    room_change_requests, rooms, users, violations,
};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub is_verified: bool,
    pub room_number: Option<String>,
    pub fees_paid: f64,
    pub gender: Option<String>,
}

/// Insertable struct for creating accounts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub phone: Option<&'a str>,
    pub avatar: Option<&'a str>,
    pub is_verified: bool,
    pub room_number: Option<&'a str>,
    pub fees_paid: f64,
    pub gender: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Rooms and allocation history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct RoomRow {
    pub id: i32,
    pub room_number: String,
    pub floor: i32,
    pub room_type: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub status: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = rooms)]
pub(crate) struct NewRoomRow<'a> {
    pub room_number: &'a str,
    pub floor: i32,
    pub room_type: &'a str,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub status: &'a str,
}

/// Occupancy bookkeeping applied to a room inside an allocation.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = rooms)]
pub(crate) struct RoomOccupancyUpdate<'a> {
    pub current_occupancy: i32,
    pub status: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = allocations)]
pub(crate) struct NewAllocationRow {
    pub student_id: i32,
    pub room_id: i32,
    pub allocated_by: Option<i32>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activity_log)]
pub(crate) struct NewActivityRow<'a> {
    pub action: &'a str,
    pub performed_by: Option<i32>,
    pub target_model: &'a str,
    pub target_id: Option<i32>,
    pub details: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Student requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = complaints)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ComplaintRow {
    pub id: i32,
    pub student_id: i32,
    pub room_number: Option<String>,
    pub category: String,
    pub description: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = complaints)]
pub(crate) struct NewComplaintRow<'a> {
    pub student_id: i32,
    pub room_number: &'a str,
    pub category: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = leaves)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct LeaveRow {
    pub id: i32,
    pub student_id: i32,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: String,
    pub approved_by: Option<i32>,
    pub applied_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = leaves)]
pub(crate) struct NewLeaveRow<'a> {
    pub student_id: i32,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = room_change_requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct RoomChangeRow {
    pub id: i32,
    pub student_id: i32,
    pub current_room: String,
    pub requested_room: String,
    pub reason: String,
    pub status: String,
    pub applied_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = room_change_requests)]
pub(crate) struct NewRoomChangeRow<'a> {
    pub student_id: i32,
    pub current_room: &'a str,
    pub requested_room: &'a str,
    pub reason: &'a str,
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PaymentRow {
    pub id: i32,
    pub student_id: i32,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDateTime>,
    pub status: String,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payments)]
pub(crate) struct NewPaymentRow<'a> {
    pub student_id: i32,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub status: &'a str,
    pub transaction_id: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Operations: attendance, notices, violations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = attendance)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct AttendanceRow {
    pub id: i32,
    pub date: NaiveDate,
    pub hostel_id: Option<i32>,
    pub marked_by: i32,
    /// JSON array of attendance records.
    pub records: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = attendance)]
pub(crate) struct NewAttendanceRow<'a> {
    pub date: NaiveDate,
    pub hostel_id: Option<i32>,
    pub marked_by: i32,
    pub records: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = notices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct NoticeRow {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub notice_type: String,
    pub is_pinned: bool,
    pub posted_by: i32,
    pub read_by: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notices)]
pub(crate) struct NewNoticeRow<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub notice_type: &'a str,
    pub is_pinned: bool,
    pub posted_by: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = violations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ViolationRow {
    pub id: i32,
    pub student_id: i32,
    pub violation_type: String,
    pub severity: String,
    pub description: Option<String>,
    pub issued_by: i32,
    pub issued_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = violations)]
pub(crate) struct NewViolationRow<'a> {
    pub student_id: i32,
    pub violation_type: &'a str,
    pub severity: &'a str,
    pub description: Option<&'a str>,
    pub issued_by: i32,
}
