//! Route definitions for stock locations, mounted at `/locations`.

use axum::routing::get;
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/stock    -> list_stock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(location::list).post(location::create))
        .route(
            "/{id}",
            get(location::get_by_id)
                .patch(location::update)
                .delete(location::delete),
        )
        .route("/{id}/stock", get(location::list_stock))
}
