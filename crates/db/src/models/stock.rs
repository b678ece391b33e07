//! Stock level model and DTOs.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `stock_levels` table: how many of a part sit at a location.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StockLevel {
    pub id: DbId,
    pub part_id: DbId,
    pub location_id: DbId,
    pub quantity: i32,
}

/// Request body for setting a part's stock at a location.
#[derive(Debug, Clone, Deserialize)]
pub struct SetStockLevel {
    pub location_id: DbId,
    #[serde(default)]
    pub quantity: i32,
}
