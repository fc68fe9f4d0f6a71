//! SQLite-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StoredCredentials, UserRepository, UserRepositoryError};
use crate::domain::{NewAccount, Role, Roommate, User, UserId};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::{RowError, user_from_row};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    map_basic_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    map_basic_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn map_row_error(error: RowError) -> UserRepositoryError {
    UserRepositoryError::query(error.to_string())
}

fn credentials_from_row(row: UserRow) -> Result<StoredCredentials, UserRepositoryError> {
    let password_hash = row.password_hash.clone();
    let user = user_from_row(row).map_err(map_row_error)?;
    Ok(StoredCredentials {
        user,
        password_hash,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(
        &self,
        account: &NewAccount,
        password_hash: &str,
    ) -> Result<User, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            name: account.name(),
            email: account.email(),
            password_hash,
            role: account.role().as_str(),
            phone: account.phone(),
            avatar: account.avatar(),
            is_verified: account.is_verified(),
            room_number: account.room_number(),
            fees_paid: account.fees_paid(),
            gender: account.gender(),
        };

        let stored = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    UserRepositoryError::duplicate_email(account.email())
                } else {
                    map_diesel_error(err)
                }
            })?;
        user_from_row(stored).map_err(map_row_error)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(user_from_row).transpose().map_err(map_row_error)
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredentials>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(credentials_from_row).transpose()
    }

    async fn update_avatar(&self, id: UserId, avatar: &str) -> Result<bool, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changed = diesel::update(users::table.find(id.get()))
            .set(users::avatar.eq(avatar))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(changed > 0)
    }

    async fn list_students(&self) -> Result<Vec<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .filter(users::role.eq(Role::Student.as_str()))
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter()
            .map(user_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_row_error)
    }

    async fn list_roommates(
        &self,
        room_number: &str,
        exclude: UserId,
    ) -> Result<Vec<Roommate>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(i32, String, Option<String>)> = users::table
            .filter(
                users::room_number
                    .eq(room_number)
                    .and(users::id.ne(exclude.get())),
            )
            .order(users::id.asc())
            .select((users::id, users::name, users::avatar))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows
            .into_iter()
            .map(|(id, name, avatar)| Roommate {
                id: UserId::new(id),
                name,
                avatar,
            })
            .collect())
    }
}
