//! Route definitions for vehicles, mounted at `/vehicles`.

use axum::routing::get;
use axum::Router;

use crate::handlers::vehicle;
use crate::state::AppState;

/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/parts    -> list_parts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vehicle::list).post(vehicle::create))
        .route(
            "/{id}",
            get(vehicle::get_by_id)
                .patch(vehicle::update)
                .delete(vehicle::delete),
        )
        .route("/{id}/parts", get(vehicle::list_parts))
}
