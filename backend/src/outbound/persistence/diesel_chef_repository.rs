//! PostgreSQL-backed `ChefRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ChefPersistenceError, ChefRepository};
use crate::domain::{Chef, ChefEmail, PasswordHash};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ChefRow, NewChefRow};
use super::pool::{DbPool, PoolError};
use super::schema::chefs;

/// Diesel-backed implementation of the chef repository port.
#[derive(Clone)]
pub struct DieselChefRepository {
    pool: DbPool,
}

impl DieselChefRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ChefPersistenceError {
    map_basic_pool_error(error, ChefPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ChefPersistenceError {
    map_basic_diesel_error(
        error,
        ChefPersistenceError::query,
        ChefPersistenceError::connection,
    )
}

/// Convert a database row into a validated domain chef.
fn row_to_chef(row: ChefRow) -> Result<Chef, ChefPersistenceError> {
    let email = ChefEmail::new(row.email)
        .map_err(|err| ChefPersistenceError::query(format!("invalid stored email: {err}")))?;
    Ok(Chef::new(email, PasswordHash::new(row.password)))
}

#[async_trait]
impl ChefRepository for DieselChefRepository {
    async fn find_by_email(
        &self,
        email: &ChefEmail,
    ) -> Result<Option<Chef>, ChefPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = chefs::table
            .find(email.as_ref())
            .select(ChefRow::as_select())
            .first::<ChefRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_chef).transpose()
    }

    async fn save(&self, chef: &Chef) -> Result<(), ChefPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewChefRow {
            email: chef.email().as_ref(),
            password: chef.password().as_str(),
        };

        // Single upsert statement keeps the write atomic; a half-written
        // chef record is never observable.
        diesel::insert_into(chefs::table)
            .values(&row)
            .on_conflict(chefs::email)
            .do_update()
            .set(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
