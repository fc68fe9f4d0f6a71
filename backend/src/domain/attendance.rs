//! Roll-call sheets recorded by wardens.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::labels::define_label_enum;
use super::validation::FieldError;
use super::UserId;

define_label_enum! {
    /// Mark recorded for one student.
    pub enum AttendanceMark as "attendance mark" {
        Present => "Present",
        Absent => "Absent",
        Late => "Late",
        OnLeave => "Leave",
    }
}

/// One student's entry on a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub student_id: UserId,
    pub status: AttendanceMark,
    /// Free-form check-in time as entered, e.g. `21:05`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Stored sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSheet {
    pub id: i32,
    pub date: NaiveDate,
    pub hostel_id: Option<i32>,
    pub marked_by: UserId,
    pub records: Vec<AttendanceRecord>,
}

/// Validated sheet to store.
///
/// ## Invariants
/// - At least one record.
/// - Each student appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendanceSheet {
    date: NaiveDate,
    hostel_id: Option<i32>,
    marked_by: UserId,
    records: Vec<AttendanceRecord>,
}

impl NewAttendanceSheet {
    pub fn try_new(
        date: NaiveDate,
        hostel_id: Option<i32>,
        marked_by: UserId,
        records: Vec<AttendanceRecord>,
    ) -> Result<Self, FieldError> {
        if records.is_empty() {
            return Err(FieldError::empty("records"));
        }
        let mut seen = HashSet::with_capacity(records.len());
        if !records.iter().all(|record| seen.insert(record.student_id)) {
            return Err(FieldError::invalid("records", "must list each student once"));
        }
        Ok(Self {
            date,
            hostel_id,
            marked_by,
            records,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hostel_id(&self) -> Option<i32> {
        self.hostel_id
    }

    pub fn marked_by(&self) -> UserId {
        self.marked_by
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(id: i32) -> AttendanceRecord {
        AttendanceRecord {
            student_id: UserId::new(id),
            status: AttendanceMark::Present,
            time: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    #[rstest]
    fn rejects_empty_sheet() {
        let err = NewAttendanceSheet::try_new(today(), None, UserId::new(1), Vec::new())
            .expect_err("empty sheet");
        assert_eq!(err, FieldError::empty("records"));
    }

    #[rstest]
    fn rejects_duplicate_students() {
        let err =
            NewAttendanceSheet::try_new(today(), None, UserId::new(1), vec![record(2), record(2)])
                .expect_err("duplicate student");
        assert_eq!(err.field(), "records");
    }

    #[rstest]
    fn leave_mark_uses_short_label() {
        assert_eq!(AttendanceMark::OnLeave.as_str(), "Leave");
    }
}
