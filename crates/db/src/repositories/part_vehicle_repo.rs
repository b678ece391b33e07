//! Repository for the `part_vehicle_links` join table.
//!
//! Links are only created and removed from the part side; the vehicle side
//! reads through [`PartVehicleRepo::parts_for_vehicle`]. Writes run inside a
//! caller transaction that already holds share locks on both ends.

use catalog_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::part::Part;
use crate::models::vehicle::Vehicle;
use crate::repositories::{part_repo, vehicle_repo};

/// Provides link management and traversal between parts and vehicles.
pub struct PartVehicleRepo;

impl PartVehicleRepo {
    /// Link a part to a vehicle. Idempotent: does nothing if already linked.
    ///
    /// Returns `true` when a new link row was created.
    pub async fn link(
        tx: &mut Transaction<'_, Postgres>,
        part_id: DbId,
        vehicle_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO part_vehicle_links (part_id, vehicle_id) \
             VALUES ($1, $2) \
             ON CONFLICT (part_id, vehicle_id) DO NOTHING",
        )
        .bind(part_id)
        .bind(vehicle_id)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a link. Returns `true` if a link row existed.
    pub async fn unlink(
        tx: &mut Transaction<'_, Postgres>,
        part_id: DbId,
        vehicle_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM part_vehicle_links WHERE part_id = $1 AND vehicle_id = $2")
                .bind(part_id)
                .bind(vehicle_id)
                .execute(&mut **tx)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All vehicles linked to a part.
    pub async fn vehicles_for_part(pool: &PgPool, part_id: DbId) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM vehicles
             WHERE id IN (SELECT vehicle_id FROM part_vehicle_links WHERE part_id = $1)
             ORDER BY make, model, from_year",
            vehicle_repo::COLUMNS
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(part_id)
            .fetch_all(pool)
            .await
    }

    /// All parts linked to a vehicle.
    pub async fn parts_for_vehicle(pool: &PgPool, vehicle_id: DbId) -> Result<Vec<Part>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM parts
             WHERE id IN (SELECT part_id FROM part_vehicle_links WHERE vehicle_id = $1)
             ORDER BY internal_part_code",
            part_repo::COLUMNS
        );
        sqlx::query_as::<_, Part>(&query)
            .bind(vehicle_id)
            .fetch_all(pool)
            .await
    }
}
