//! Driven port for violation storage.
use async_trait::async_trait;

use crate::domain::{NewViolation, UserId, Violation};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by violation repository adapters.
    pub enum ViolationRepositoryError {
        Connection { message: String } => "violation repository connection failed: {message}",
        Query { message: String } => "violation repository query failed: {message}",
        UnknownStudent { student_id: i32 } => "student {student_id} does not exist",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViolationRepository: Send + Sync {
    async fn create(&self, violation: &NewViolation)
    -> Result<Violation, ViolationRepositoryError>;

    /// Violations issued to one student, newest first.
    async fn list_for_student(
        &self,
        student_id: UserId,
    ) -> Result<Vec<Violation>, ViolationRepositoryError>;

    /// Every violation with the student's name, newest first.
    async fn list_all(&self) -> Result<Vec<Violation>, ViolationRepositoryError>;
}
