//! Substring search across the `parts` and `vehicles` tables.

use catalog_core::search::{
    contains_pattern, is_searchable, match_any_clause, PART_SEARCH_COLUMNS,
    VEHICLE_SEARCH_COLUMNS,
};
use sqlx::PgPool;

use crate::models::part::Part;
use crate::models::search::SearchResults;
use crate::models::vehicle::Vehicle;
use crate::repositories::{part_repo, vehicle_repo};

/// Runs catalog-wide searches.
pub struct SearchRepo;

impl SearchRepo {
    /// Case-insensitive substring search. Parts and vehicles are scanned
    /// independently; an empty query returns every row and a query no stored
    /// text can contain returns nothing.
    pub async fn search(pool: &PgPool, query_str: &str) -> Result<SearchResults, sqlx::Error> {
        if !is_searchable(query_str) {
            return Ok(SearchResults::default());
        }
        let pattern = contains_pattern(query_str);
        let parts = Self::search_parts(pool, &pattern).await?;
        let vehicles = Self::search_vehicles(pool, &pattern).await?;
        Ok(SearchResults { parts, vehicles })
    }

    async fn search_parts(pool: &PgPool, pattern: &str) -> Result<Vec<Part>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM parts WHERE {}",
            part_repo::COLUMNS,
            match_any_clause(PART_SEARCH_COLUMNS, 1)
        );
        sqlx::query_as::<_, Part>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    async fn search_vehicles(pool: &PgPool, pattern: &str) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM vehicles WHERE {}",
            vehicle_repo::COLUMNS,
            match_any_clause(VEHICLE_SEARCH_COLUMNS, 1)
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }
}
