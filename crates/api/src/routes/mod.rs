pub mod health;
pub mod location;
pub mod part;
pub mod search;
pub mod vehicle;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /parts                                  list, create
/// /parts/{id}                             get, update, delete
/// /parts/{id}/vehicles                    list linked vehicles
/// /parts/{id}/vehicles/{vehicle_id}       link (POST), unlink (DELETE)
/// /parts/{id}/stock                       list, set (POST, no auth)
///
/// /vehicles                               list, create
/// /vehicles/{id}                          get, update, delete
/// /vehicles/{id}/parts                    list linked parts
///
/// /locations                              list, create
/// /locations/{id}                         get, update, delete
/// /locations/{id}/stock                   list stock held here
///
/// /search?q=term                          parts and vehicles matching q
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/parts", part::router())
        .nest("/vehicles", vehicle::router())
        .nest("/locations", location::router())
        .nest("/search", search::router())
}
