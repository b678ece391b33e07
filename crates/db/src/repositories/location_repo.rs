//! Repository for the `locations` table.

use catalog_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::location::{CreateLocation, Location};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, notes, telephone, email, created_at, updated_at";

/// Provides CRUD operations for stock locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (id, name, address, notes, telephone, email)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(DbId::new_v4())
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.notes)
            .bind(&input.telephone)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a location by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a location with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM locations WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Take a share lock on the location row so it cannot be deleted before the
    /// transaction ends. Returns `false` if the row does not exist.
    pub async fn lock_shared(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM locations WHERE id = $1 FOR SHARE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(row.is_some())
    }

    /// Find a location by ID and lock its row for the rest of the transaction.
    pub async fn find_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// List all locations ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations ORDER BY name, created_at");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// Write every mutable column of `location` back to its row.
    pub async fn save(
        tx: &mut Transaction<'_, Postgres>,
        location: &Location,
    ) -> Result<Location, sqlx::Error> {
        let query = format!(
            "UPDATE locations SET
                name = $2,
                address = $3,
                notes = $4,
                telephone = $5,
                email = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(location.id)
            .bind(&location.name)
            .bind(&location.address)
            .bind(&location.notes)
            .bind(&location.telephone)
            .bind(&location.email)
            .fetch_one(&mut **tx)
            .await
    }

    /// Delete a location by ID. Stock levels held there cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
