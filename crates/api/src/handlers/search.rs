//! Free-text search across parts and vehicles.

use axum::extract::State;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::models::search::SearchResults;
use catalog_db::repositories::SearchRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::state::AppState;

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/v1/search?q=term
///
/// Case-insensitive substring match. An empty `q` matches everything;
/// a missing `q` is rejected.
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<Json<SearchResults>> {
    let q = params.q.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "query parameter 'q' is required".into(),
        ))
    })?;

    let results = SearchRepo::search(&state.pool, &q).await?;

    tracing::debug!(
        query = %q,
        parts = results.parts.len(),
        vehicles = results.vehicles.len(),
        "Search completed",
    );

    Ok(Json(results))
}
