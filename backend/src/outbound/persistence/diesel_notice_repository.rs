//! SQLite-backed `NoticeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{NoticeRepository, NoticeRepositoryError};
use crate::domain::{NewNotice, Notice};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewNoticeRow, NoticeRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::notice_from_row;
use super::schema::notices;

/// Diesel-backed implementation of the notice repository port.
#[derive(Clone)]
pub struct DieselNoticeRepository {
    pool: DbPool,
}

impl DieselNoticeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> NoticeRepositoryError {
    map_basic_pool_error(error, NoticeRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> NoticeRepositoryError {
    map_basic_diesel_error(
        error,
        NoticeRepositoryError::query,
        NoticeRepositoryError::connection,
    )
}

fn decode(row: NoticeRow) -> Result<Notice, NoticeRepositoryError> {
    notice_from_row(row).map_err(|err| NoticeRepositoryError::query(err.to_string()))
}

#[async_trait]
impl NoticeRepository for DieselNoticeRepository {
    async fn create(&self, notice: &NewNotice) -> Result<Notice, NoticeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewNoticeRow {
            title: notice.title(),
            content: notice.content(),
            notice_type: notice.notice_type().as_str(),
            is_pinned: notice.is_pinned(),
            posted_by: notice.posted_by().get(),
        };
        let stored = diesel::insert_into(notices::table)
            .values(&row)
            .returning(NoticeRow::as_returning())
            .get_result::<NoticeRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode(stored)
    }

    async fn list(&self) -> Result<Vec<Notice>, NoticeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<NoticeRow> = notices::table
            .order((
                notices::is_pinned.desc(),
                notices::created_at.desc(),
                notices::id.desc(),
            ))
            .select(NoticeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(decode).collect()
    }
}
