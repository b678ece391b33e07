//! Repository for the `vehicles` table.

use catalog_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::vehicle::{CreateVehicle, Vehicle};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "\
    id, make, model, from_year, to_year, power_type, variant, body_style, \
    drive_type, trim_level, created_at, updated_at";

/// Provides CRUD operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (id, make, model, from_year, to_year, power_type, variant, \
                body_style, drive_type, trim_level)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(DbId::new_v4())
            .bind(&input.make)
            .bind(&input.model)
            .bind(input.from_year)
            .bind(input.to_year)
            .bind(&input.power_type)
            .bind(&input.variant)
            .bind(&input.body_style)
            .bind(&input.drive_type)
            .bind(&input.trim_level)
            .fetch_one(pool)
            .await
    }

    /// Find a vehicle by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a vehicle with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Take a share lock on the vehicle row so it cannot be deleted before the
    /// transaction ends. Returns `false` if the row does not exist.
    pub async fn lock_shared(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM vehicles WHERE id = $1 FOR SHARE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(row.is_some())
    }

    /// Find a vehicle by ID and lock its row for the rest of the transaction.
    pub async fn find_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// List all vehicles, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles ORDER BY created_at DESC");
        sqlx::query_as::<_, Vehicle>(&query).fetch_all(pool).await
    }

    /// Write every mutable column of `vehicle` back to its row.
    pub async fn save(
        tx: &mut Transaction<'_, Postgres>,
        vehicle: &Vehicle,
    ) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                make = $2,
                model = $3,
                from_year = $4,
                to_year = $5,
                power_type = $6,
                variant = $7,
                body_style = $8,
                drive_type = $9,
                trim_level = $10,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(vehicle.id)
            .bind(&vehicle.make)
            .bind(&vehicle.model)
            .bind(vehicle.from_year)
            .bind(vehicle.to_year)
            .bind(&vehicle.power_type)
            .bind(&vehicle.variant)
            .bind(&vehicle.body_style)
            .bind(&vehicle.drive_type)
            .bind(&vehicle.trim_level)
            .fetch_one(&mut **tx)
            .await
    }

    /// Delete a vehicle by ID. Part links cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
