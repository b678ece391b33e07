//! Repository for the `stock_levels` table.

use catalog_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::stock::StockLevel;

const COLUMNS: &str = "id, part_id, location_id, quantity";

/// Provides per-(part, location) stock quantities.
pub struct StockRepo;

impl StockRepo {
    /// Set the quantity of a part held at a location.
    ///
    /// Uses `ON CONFLICT (part_id, location_id) DO UPDATE` so there is never
    /// more than one row per pair; an existing row keeps its id.
    pub async fn upsert(
        tx: &mut Transaction<'_, Postgres>,
        part_id: DbId,
        location_id: DbId,
        quantity: i32,
    ) -> Result<StockLevel, sqlx::Error> {
        let query = format!(
            "INSERT INTO stock_levels (id, part_id, location_id, quantity) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (part_id, location_id) DO UPDATE SET quantity = EXCLUDED.quantity \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StockLevel>(&query)
            .bind(DbId::new_v4())
            .bind(part_id)
            .bind(location_id)
            .bind(quantity)
            .fetch_one(&mut **tx)
            .await
    }

    /// All stock rows for a part.
    pub async fn list_for_part(pool: &PgPool, part_id: DbId) -> Result<Vec<StockLevel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stock_levels WHERE part_id = $1 ORDER BY location_id");
        sqlx::query_as::<_, StockLevel>(&query)
            .bind(part_id)
            .fetch_all(pool)
            .await
    }

    /// All stock rows held at a location.
    pub async fn list_for_location(
        pool: &PgPool,
        location_id: DbId,
    ) -> Result<Vec<StockLevel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stock_levels WHERE location_id = $1 ORDER BY part_id");
        sqlx::query_as::<_, StockLevel>(&query)
            .bind(location_id)
            .fetch_all(pool)
            .await
    }
}
