//! Attendance services.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::domain::ports::{
    AttendanceCommand, AttendanceQuery, AttendanceRepository, AttendanceRepositoryError,
};
use crate::domain::{AttendanceSheet, Error, NewAttendanceSheet};

fn map_repository_error(error: AttendanceRepositoryError) -> Error {
    match error {
        AttendanceRepositoryError::UnknownHostel { .. } => {
            Error::invalid_request("Hostel does not exist")
        }
        AttendanceRepositoryError::Connection { message } => {
            Error::internal(format!("attendance repository unavailable: {message}"))
        }
        AttendanceRepositoryError::Query { message } => {
            Error::internal(format!("attendance repository error: {message}"))
        }
    }
}

/// Attendance service implementing [`AttendanceCommand`] and
/// [`AttendanceQuery`].
#[derive(Clone)]
pub struct AttendanceService<R> {
    sheets: Arc<R>,
}

impl<R> AttendanceService<R> {
    pub fn new(sheets: Arc<R>) -> Self {
        Self { sheets }
    }
}

#[async_trait]
impl<R> AttendanceCommand for AttendanceService<R>
where
    R: AttendanceRepository,
{
    async fn record(&self, sheet: NewAttendanceSheet) -> Result<AttendanceSheet, Error> {
        let sheet = self
            .sheets
            .create(&sheet)
            .await
            .map_err(map_repository_error)?;
        info!(
            sheet_id = sheet.id,
            date = %sheet.date,
            records = sheet.records.len(),
            "attendance recorded"
        );
        Ok(sheet)
    }
}

#[async_trait]
impl<R> AttendanceQuery for AttendanceService<R>
where
    R: AttendanceRepository,
{
    async fn for_date(&self, date: NaiveDate) -> Result<Vec<AttendanceSheet>, Error> {
        self.sheets
            .list_for_date(date)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockAttendanceRepository;
    use crate::domain::{AttendanceMark, AttendanceRecord, ErrorCode, UserId};

    #[tokio::test]
    async fn unknown_hostel_is_invalid_request() {
        let mut sheets = MockAttendanceRepository::new();
        sheets
            .expect_create()
            .return_once(|_| Err(AttendanceRepositoryError::unknown_hostel("FOREIGN KEY")));

        let sheet = NewAttendanceSheet::try_new(
            NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            Some(99),
            UserId::new(2),
            vec![AttendanceRecord {
                student_id: UserId::new(5),
                status: AttendanceMark::Late,
                time: Some("22:10".to_owned()),
            }],
        )
        .expect("valid sheet");
        let err = AttendanceService::new(Arc::new(sheets))
            .record(sheet)
            .await
            .expect_err("unknown hostel");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
