//! Search result payload.

use serde::Serialize;

use crate::models::part::Part;
use crate::models::vehicle::Vehicle;

/// Matches from one search, split by entity. Neither list is ranked.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub parts: Vec<Part>,
    pub vehicles: Vec<Vehicle>,
}
