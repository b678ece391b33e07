//! Route definitions for search, mounted at `/search`.

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// ```text
/// GET /?q=term    -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search::search))
}
