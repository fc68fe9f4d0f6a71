//! Driven port for notice board storage.
use async_trait::async_trait;

use crate::domain::{NewNotice, Notice};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by notice repository adapters.
    pub enum NoticeRepositoryError {
        Connection { message: String } => "notice repository connection failed: {message}",
        Query { message: String } => "notice repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeRepository: Send + Sync {
    async fn create(&self, notice: &NewNotice) -> Result<Notice, NoticeRepositoryError>;

    /// Pinned notices first, then newest first.
    async fn list(&self) -> Result<Vec<Notice>, NoticeRepositoryError>;
}
