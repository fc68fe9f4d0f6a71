//! SQLite-backed `RoomChangeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RoomChangeRepository, RoomChangeRepositoryError};
use crate::domain::{NewRoomChangeRequest, RoomChangeRequest, StatusUpdate, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewRoomChangeRow, RoomChangeRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::room_change_from_row;
use super::schema::{room_change_requests, users};

/// Diesel-backed implementation of the room change repository port.
#[derive(Clone)]
pub struct DieselRoomChangeRepository {
    pool: DbPool,
}

impl DieselRoomChangeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RoomChangeRepositoryError {
    map_basic_pool_error(error, RoomChangeRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RoomChangeRepositoryError {
    map_basic_diesel_error(
        error,
        RoomChangeRepositoryError::query,
        RoomChangeRepositoryError::connection,
    )
}

fn decode(
    row: RoomChangeRow,
    student_name: Option<String>,
) -> Result<RoomChangeRequest, RoomChangeRepositoryError> {
    room_change_from_row(row, student_name)
        .map_err(|err| RoomChangeRepositoryError::query(err.to_string()))
}

#[async_trait]
impl RoomChangeRepository for DieselRoomChangeRepository {
    async fn create(
        &self,
        request: &NewRoomChangeRequest,
    ) -> Result<RoomChangeRequest, RoomChangeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewRoomChangeRow {
            student_id: request.student_id.get(),
            current_room: request.current_room.as_str(),
            requested_room: request.draft.requested_room(),
            reason: request.draft.reason(),
        };
        let stored = diesel::insert_into(room_change_requests::table)
            .values(&row)
            .returning(RoomChangeRow::as_returning())
            .get_result::<RoomChangeRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode(stored, None)
    }

    async fn list_for_student(
        &self,
        student_id: UserId,
    ) -> Result<Vec<RoomChangeRequest>, RoomChangeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<RoomChangeRow> = room_change_requests::table
            .filter(room_change_requests::student_id.eq(student_id.get()))
            .order((
                room_change_requests::applied_at.desc(),
                room_change_requests::id.desc(),
            ))
            .select(RoomChangeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(|row| decode(row, None)).collect()
    }

    async fn list_all(&self) -> Result<Vec<RoomChangeRequest>, RoomChangeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(RoomChangeRow, String)> = room_change_requests::table
            .inner_join(users::table)
            .order((
                room_change_requests::applied_at.desc(),
                room_change_requests::id.desc(),
            ))
            .select((RoomChangeRow::as_select(), users::name))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter()
            .map(|(row, name)| decode(row, Some(name)))
            .collect()
    }

    async fn update_status(
        &self,
        update: &StatusUpdate,
    ) -> Result<bool, RoomChangeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changed = diesel::update(room_change_requests::table.find(update.record_id))
            .set(room_change_requests::status.eq(update.status.as_str()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(changed > 0)
    }
}
