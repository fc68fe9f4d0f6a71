//! Driven port for roll-call storage.
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{AttendanceSheet, NewAttendanceSheet};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by attendance repository adapters.
    pub enum AttendanceRepositoryError {
        Connection { message: String } => "attendance repository connection failed: {message}",
        Query { message: String } => "attendance repository query failed: {message}",
        /// The sheet references a hostel that does not exist.
        UnknownHostel { message: String } => "attendance references unknown hostel: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn create(
        &self,
        sheet: &NewAttendanceSheet,
    ) -> Result<AttendanceSheet, AttendanceRepositoryError>;

    /// Sheets recorded for `date`, in insertion order.
    async fn list_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceSheet>, AttendanceRepositoryError>;
}
