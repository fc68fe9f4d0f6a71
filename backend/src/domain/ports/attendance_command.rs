//! Driving ports for attendance.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{AttendanceSheet, Error, NewAttendanceSheet};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceCommand: Send + Sync {
    async fn record(&self, sheet: NewAttendanceSheet) -> Result<AttendanceSheet, Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceQuery: Send + Sync {
    async fn for_date(&self, date: NaiveDate) -> Result<Vec<AttendanceSheet>, Error>;
}
