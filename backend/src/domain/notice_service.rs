//! Notice board services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{NoticeCommand, NoticeQuery, NoticeRepository, NoticeRepositoryError};
use crate::domain::{Error, NewNotice, Notice};

fn map_repository_error(error: NoticeRepositoryError) -> Error {
    Error::internal(format!("notice repository error: {error}"))
}

/// Notice service implementing [`NoticeCommand`] and [`NoticeQuery`].
#[derive(Clone)]
pub struct NoticeService<R> {
    notices: Arc<R>,
}

impl<R> NoticeService<R> {
    pub fn new(notices: Arc<R>) -> Self {
        Self { notices }
    }
}

#[async_trait]
impl<R> NoticeCommand for NoticeService<R>
where
    R: NoticeRepository,
{
    async fn post(&self, notice: NewNotice) -> Result<Notice, Error> {
        let notice = self
            .notices
            .create(&notice)
            .await
            .map_err(map_repository_error)?;
        info!(notice_id = notice.id, notice_type = %notice.notice_type, "notice posted");
        Ok(notice)
    }
}

#[async_trait]
impl<R> NoticeQuery for NoticeService<R>
where
    R: NoticeRepository,
{
    async fn list(&self) -> Result<Vec<Notice>, Error> {
        self.notices.list().await.map_err(map_repository_error)
    }
}
