//! Driving ports for the notice board.

use async_trait::async_trait;

use crate::domain::{Error, NewNotice, Notice};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeCommand: Send + Sync {
    async fn post(&self, notice: NewNotice) -> Result<Notice, Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<Notice>, Error>;
}
