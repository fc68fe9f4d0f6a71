//! SQLite-backed `RoomRepository` implementation using Diesel ORM.
//!
//! Two allocation paths live here. `assign_room_label` is the permissive
//! overwrite of a student's room label. `allocate_with_capacity` moves a
//! student inside one transaction, keeping occupancy counters, allocation
//! history and the activity log consistent with the label.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{AllocationOutcome, RoomRepository, RoomRepositoryError};
use crate::domain::{Allocation, Role, Room, RoomSeed, RoomStatus, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewRoomRow, RoomRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::room_from_row;
use super::schema::{rooms, users};

/// Activity log action written for every capacity-checked move.
const ALLOCATE_ACTION: &str = "ALLOCATE_ROOM";

/// Diesel-backed implementation of the room repository port.
#[derive(Clone)]
pub struct DieselRoomRepository {
    pool: DbPool,
}

impl DieselRoomRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RoomRepositoryError {
    map_basic_pool_error(error, RoomRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RoomRepositoryError {
    map_basic_diesel_error(
        error,
        RoomRepositoryError::query,
        RoomRepositoryError::connection,
    )
}

/// Failure inside the allocation transaction. Either branch rolls back.
#[derive(Debug)]
enum AllocationFailure {
    Rejected(RoomRepositoryError),
    Storage(diesel::result::Error),
}

impl From<diesel::result::Error> for AllocationFailure {
    fn from(value: diesel::result::Error) -> Self {
        Self::Storage(value)
    }
}

impl From<RoomRepositoryError> for AllocationFailure {
    fn from(value: RoomRepositoryError) -> Self {
        Self::Rejected(value)
    }
}

impl From<AllocationFailure> for RoomRepositoryError {
    fn from(value: AllocationFailure) -> Self {
        match value {
            AllocationFailure::Rejected(error) => error,
            AllocationFailure::Storage(error) => map_diesel_error(error),
        }
    }
}

fn parse_status(row: &RoomRow) -> Result<RoomStatus, RoomRepositoryError> {
    row.status
        .parse::<RoomStatus>()
        .map_err(|err| RoomRepositoryError::query(err.to_string()))
}

/// Occupancy and status for `row` after adding `delta` residents.
fn adjusted(row: &RoomRow, delta: i32) -> Result<(i32, RoomStatus), RoomRepositoryError> {
    let occupancy = (row.current_occupancy + delta).max(0);
    let status = parse_status(row)?.after_occupancy(occupancy, row.capacity);
    Ok((occupancy, status))
}

#[async_trait]
impl RoomRepository for DieselRoomRepository {
    async fn list(&self) -> Result<Vec<Room>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<RoomRow> = rooms::table
            .order(rooms::room_number.asc())
            .select(RoomRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter()
            .map(|row| room_from_row(row).map_err(|err| RoomRepositoryError::query(err.to_string())))
            .collect()
    }

    async fn seed_if_empty(&self, seeds: &[RoomSeed]) -> Result<usize, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let existing: i64 = rooms::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if existing > 0 || seeds.is_empty() {
            return Ok(0);
        }

        let rows: Vec<NewRoomRow<'_>> = seeds
            .iter()
            .map(|seed| NewRoomRow {
                room_number: seed.room_number,
                floor: seed.floor,
                room_type: seed.room_type.as_str(),
                capacity: seed.capacity,
                current_occupancy: 0,
                status: seed.status.as_str(),
            })
            .collect();
        // Diesel only executes SQLite batch inserts on a synchronous
        // connection, so seed rows go in one statement at a time.
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                let mut inserted = 0;
                for row in &rows {
                    inserted += diesel::insert_into(rooms::table)
                        .values(row)
                        .execute(conn)
                        .await?;
                }
                Ok(inserted)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn assign_room_label(
        &self,
        student_id: UserId,
        room_number: &str,
    ) -> Result<usize, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(
            users::table
                .filter(users::id.eq(student_id.get()))
                .filter(users::role.eq(Role::Student.as_str())),
        )
        .set(users::room_number.eq(Some(room_number)))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn allocate_with_capacity(
        &self,
        allocation: &Allocation,
    ) -> Result<AllocationOutcome, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let student_id = allocation.student_id().get();
        let target_room = allocation.room_number().to_owned();
        let allocated_by = allocation.allocated_by().get();

        // `BEGIN IMMEDIATE` takes the write lock up front, so concurrent
        // allocations queue on the busy timeout instead of failing on a lock
        // upgrade.
        let outcome = conn
            .spawn_blocking(move |conn| {
                Ok(conn.immediate_transaction::<_, AllocationFailure, _>(|conn| {
                    capacity::allocate(conn, student_id, &target_room, allocated_by)
                }))
            })
            .await
            .map_err(map_diesel_error)??;

        Ok(outcome)
    }
}

/// Synchronous allocation body run on the blocking pool.
mod capacity {
    use diesel::prelude::*;
    use diesel::sqlite::SqliteConnection;
    use tracing::debug;

    use crate::domain::ports::{AllocationOutcome, RoomRepositoryError};
    use crate::domain::{Role, RoomStatus};

    use super::super::models::{NewActivityRow, NewAllocationRow, RoomOccupancyUpdate, RoomRow};
    use super::super::schema::{activity_log, allocations, rooms, users};
    use super::{ALLOCATE_ACTION, AllocationFailure, adjusted, parse_status};

    fn set_occupancy(
        conn: &mut SqliteConnection,
        room: &RoomRow,
        delta: i32,
    ) -> Result<(), AllocationFailure> {
        let (occupancy, status) = adjusted(room, delta)?;
        diesel::update(rooms::table.find(room.id))
            .set(&RoomOccupancyUpdate {
                current_occupancy: occupancy,
                status: status.as_str(),
            })
            .execute(conn)?;
        Ok(())
    }

    pub(super) fn allocate(
        conn: &mut SqliteConnection,
        student_id: i32,
        target_room: &str,
        allocated_by: i32,
    ) -> Result<AllocationOutcome, AllocationFailure> {
        let student: Option<(String, Option<String>)> = users::table
            .find(student_id)
            .select((users::role, users::room_number))
            .first(conn)
            .optional()?;
        let Some((role, previous_label)) = student else {
            return Err(RoomRepositoryError::student_not_found(student_id).into());
        };
        if role != Role::Student.as_str() {
            return Err(RoomRepositoryError::not_a_student(student_id).into());
        }

        let room: Option<RoomRow> = rooms::table
            .filter(rooms::room_number.eq(target_room))
            .select(RoomRow::as_select())
            .first(conn)
            .optional()?;
        let Some(room) = room else {
            return Err(RoomRepositoryError::room_not_found(target_room).into());
        };
        // A student already labelled with the room stays put, even when the
        // room has since gone into maintenance.
        if previous_label.as_deref() == Some(target_room) {
            return Ok(AllocationOutcome::Unchanged);
        }
        if parse_status(&room)? == RoomStatus::Maintenance {
            return Err(RoomRepositoryError::under_maintenance(target_room).into());
        }
        if room.current_occupancy >= room.capacity {
            return Err(RoomRepositoryError::room_full(target_room).into());
        }

        if let Some(previous) = previous_label.as_deref() {
            let old_room: Option<RoomRow> = rooms::table
                .filter(rooms::room_number.eq(previous))
                .select(RoomRow::as_select())
                .first(conn)
                .optional()?;
            match old_room {
                Some(old_room) => set_occupancy(conn, &old_room, -1)?,
                None => debug!(room = previous, "previous room label has no inventory row"),
            }
        }
        set_occupancy(conn, &room, 1)?;

        diesel::update(users::table.find(student_id))
            .set(users::room_number.eq(Some(target_room)))
            .execute(conn)?;

        diesel::update(
            allocations::table
                .filter(allocations::student_id.eq(student_id))
                .filter(allocations::is_active.eq(true)),
        )
        .set(allocations::is_active.eq(false))
        .execute(conn)?;

        diesel::insert_into(allocations::table)
            .values(&NewAllocationRow {
                student_id,
                room_id: room.id,
                allocated_by: Some(allocated_by),
                is_active: true,
            })
            .execute(conn)?;

        let details = format!("Allocated room {target_room}");
        diesel::insert_into(activity_log::table)
            .values(&NewActivityRow {
                action: ALLOCATE_ACTION,
                performed_by: Some(allocated_by),
                target_model: "User",
                target_id: Some(student_id),
                details: Some(details.as_str()),
            })
            .execute(conn)?;

        Ok(AllocationOutcome::Moved {
            previous_room: previous_label,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for allocation bookkeeping helpers.
    use super::*;
    use rstest::rstest;

    fn room(occupancy: i32, capacity: i32, status: &str) -> RoomRow {
        RoomRow {
            id: 1,
            room_number: "102".to_owned(),
            floor: 1,
            room_type: "Double".to_owned(),
            capacity,
            current_occupancy: occupancy,
            status: status.to_owned(),
        }
    }

    #[rstest]
    #[case(room(1, 2, "Vacant"), 1, 2, RoomStatus::Occupied)]
    #[case(room(2, 2, "Occupied"), -1, 1, RoomStatus::Vacant)]
    #[case(room(0, 2, "Vacant"), -1, 0, RoomStatus::Vacant)]
    #[case(room(1, 3, "Maintenance"), -1, 0, RoomStatus::Maintenance)]
    fn adjusts_occupancy_and_status(
        #[case] row: RoomRow,
        #[case] delta: i32,
        #[case] occupancy: i32,
        #[case] status: RoomStatus,
    ) {
        assert_eq!(adjusted(&row, delta).expect("known status"), (occupancy, status));
    }

    #[rstest]
    fn unknown_stored_status_is_a_query_error() {
        let err = adjusted(&room(0, 1, "Closed"), 1).expect_err("unknown status");
        assert!(matches!(err, RoomRepositoryError::Query { .. }));
    }

    #[rstest]
    fn rejections_survive_the_transaction_wrapper() {
        let failure = AllocationFailure::from(RoomRepositoryError::room_full("102"));
        assert_eq!(
            RoomRepositoryError::from(failure),
            RoomRepositoryError::room_full("102")
        );
    }

    #[rstest]
    fn storage_failures_map_to_query_errors() {
        let failure = AllocationFailure::from(diesel::result::Error::NotFound);
        assert!(matches!(
            RoomRepositoryError::from(failure),
            RoomRepositoryError::Query { .. }
        ));
    }
}
