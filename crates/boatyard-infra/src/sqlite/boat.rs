//! SQLite boat repository implementation.
//!
//! Implements `BoatRepository` from `boatyard-core` using sqlx with split read/write pools.

use boatyard_core::repository::boat::BoatRepository;
use boatyard_types::boat::{Boat, BoatChanges, BoatId, NewBoat};
use boatyard_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `BoatRepository`.
#[derive(Clone)]
pub struct SqliteBoatRepository {
    pool: DatabasePool,
}

impl SqliteBoatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn boat_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Boat, RepositoryError> {
    let read = || -> Result<Boat, sqlx::Error> {
        Ok(Boat {
            id: BoatId(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
        })
    };
    read().map_err(query_error)
}

fn query_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Connection
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

impl BoatRepository for SqliteBoatRepository {
    async fn create(&self, boat: &NewBoat) -> Result<Boat, RepositoryError> {
        let row = sqlx::query(
            "INSERT INTO boats (name, description) VALUES (?, ?)
             RETURNING id, name, description",
        )
        .bind(&boat.name)
        .bind(&boat.description)
        .fetch_one(&self.pool.writer)
        .await
        .map_err(query_error)?;

        boat_from_row(&row)
    }

    async fn get_by_id(&self, id: &BoatId) -> Result<Option<Boat>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, description FROM boats WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(boat_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Boat>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, description FROM boats ORDER BY id ASC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        rows.iter().map(boat_from_row).collect()
    }

    async fn update(
        &self,
        id: &BoatId,
        changes: &BoatChanges,
    ) -> Result<Option<Boat>, RepositoryError> {
        // Single statement: a concurrent writer can never interleave between
        // reading the old values and writing the merged ones.
        let row = sqlx::query(
            "UPDATE boats
             SET name = COALESCE(?, name), description = COALESCE(?, description)
             WHERE id = ?
             RETURNING id, name, description",
        )
        .bind(changes.name.as_deref())
        .bind(changes.description.as_deref())
        .bind(id.0)
        .fetch_optional(&self.pool.writer)
        .await
        .map_err(query_error)?;

        row.as_ref().map(boat_from_row).transpose()
    }

    async fn delete(&self, id: &BoatId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM boats WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
