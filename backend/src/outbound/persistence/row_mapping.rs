//! Conversions from Diesel rows to domain records.
//!
//! Stored labels are parsed with the domain's `FromStr` impls. A label that
//! fails to parse means the table holds a value outside its CHECK list and is
//! reported as a query error by the calling repository.

use std::str::FromStr;

use crate::domain::{
    AttendanceRecord, AttendanceSheet, Complaint, Leave, Notice, Payment, Room,
    RoomChangeRequest, UnknownLabel, User, UserId, Violation,
};

use super::models::{
    AttendanceRow, ComplaintRow, LeaveRow, NoticeRow, PaymentRow, RoomChangeRow, RoomRow,
    UserRow, ViolationRow,
};

/// Row decoding failure carried back to the repository as a message.
#[derive(Debug, thiserror::Error)]
pub(crate) enum RowError {
    #[error(transparent)]
    Label(#[from] UnknownLabel),
    #[error("malformed {column} column: {message}")]
    Json {
        column: &'static str,
        message: String,
    },
}

fn label<T>(raw: &str) -> Result<T, UnknownLabel>
where
    T: FromStr<Err = UnknownLabel>,
{
    raw.parse()
}

pub(crate) fn user_from_row(row: UserRow) -> Result<User, RowError> {
    Ok(User {
        id: UserId::new(row.id),
        name: row.name,
        email: row.email,
        role: label(&row.role)?,
        avatar: row.avatar,
        phone: row.phone,
        room_number: row.room_number,
        fees_paid: row.fees_paid,
        gender: row.gender,
        is_verified: row.is_verified,
    })
}

pub(crate) fn room_from_row(row: RoomRow) -> Result<Room, RowError> {
    Ok(Room {
        id: row.id,
        room_number: row.room_number,
        floor: row.floor,
        room_type: label(&row.room_type)?,
        capacity: row.capacity,
        current_occupancy: row.current_occupancy,
        status: label(&row.status)?,
    })
}

pub(crate) fn complaint_from_row(
    row: ComplaintRow,
    student_name: Option<String>,
) -> Result<Complaint, RowError> {
    Ok(Complaint {
        id: row.id,
        student_id: UserId::new(row.student_id),
        student_name,
        room_number: row.room_number,
        category: row.category,
        description: row.description,
        status: label(&row.status)?,
        created_at: row.created_at,
    })
}

pub(crate) fn leave_from_row(row: LeaveRow, student_name: Option<String>) -> Result<Leave, RowError> {
    Ok(Leave {
        id: row.id,
        student_id: UserId::new(row.student_id),
        student_name,
        from_date: row.from_date,
        to_date: row.to_date,
        reason: row.reason,
        status: label(&row.status)?,
        approved_by: row.approved_by.map(UserId::new),
        applied_at: row.applied_at,
    })
}

pub(crate) fn room_change_from_row(
    row: RoomChangeRow,
    student_name: Option<String>,
) -> Result<RoomChangeRequest, RowError> {
    Ok(RoomChangeRequest {
        id: row.id,
        student_id: UserId::new(row.student_id),
        student_name,
        current_room: row.current_room,
        requested_room: row.requested_room,
        reason: row.reason,
        status: label(&row.status)?,
        applied_at: row.applied_at,
    })
}

pub(crate) fn payment_from_row(
    row: PaymentRow,
    student_name: Option<String>,
) -> Result<Payment, RowError> {
    Ok(Payment {
        id: row.id,
        student_id: UserId::new(row.student_id),
        student_name,
        amount: row.amount,
        due_date: row.due_date,
        paid_date: row.paid_date,
        status: label(&row.status)?,
        transaction_id: row.transaction_id,
    })
}

pub(crate) fn attendance_from_row(row: AttendanceRow) -> Result<AttendanceSheet, RowError> {
    let records: Vec<AttendanceRecord> =
        serde_json::from_str(&row.records).map_err(|err| RowError::Json {
            column: "records",
            message: err.to_string(),
        })?;
    Ok(AttendanceSheet {
        id: row.id,
        date: row.date,
        hostel_id: row.hostel_id,
        marked_by: UserId::new(row.marked_by),
        records,
    })
}

pub(crate) fn notice_from_row(row: NoticeRow) -> Result<Notice, RowError> {
    let read_by: Vec<UserId> = serde_json::from_str(&row.read_by).map_err(|err| RowError::Json {
        column: "read_by",
        message: err.to_string(),
    })?;
    Ok(Notice {
        id: row.id,
        title: row.title,
        content: row.content,
        notice_type: label(&row.notice_type)?,
        is_pinned: row.is_pinned,
        posted_by: UserId::new(row.posted_by),
        read_by,
        created_at: row.created_at,
    })
}

pub(crate) fn violation_from_row(
    row: ViolationRow,
    student_name: Option<String>,
) -> Result<Violation, RowError> {
    Ok(Violation {
        id: row.id,
        student_id: UserId::new(row.student_id),
        student_name,
        violation_type: row.violation_type,
        severity: label(&row.severity)?,
        description: row.description,
        issued_by: UserId::new(row.issued_by),
        issued_at: row.issued_at,
    })
}
