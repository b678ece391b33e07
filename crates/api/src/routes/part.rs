//! Route definitions for parts, mounted at `/parts`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::part;
use crate::state::AppState;

/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PATCH  /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /{id}/vehicles                 -> list_vehicles
/// POST   /{id}/vehicles/{vehicle_id}    -> link_vehicle
/// DELETE /{id}/vehicles/{vehicle_id}    -> unlink_vehicle
/// GET    /{id}/stock                    -> list_stock
/// POST   /{id}/stock                    -> set_stock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(part::list).post(part::create))
        .route(
            "/{id}",
            get(part::get_by_id)
                .patch(part::update)
                .delete(part::delete),
        )
        .route("/{id}/vehicles", get(part::list_vehicles))
        .route(
            "/{id}/vehicles/{vehicle_id}",
            post(part::link_vehicle).delete(part::unlink_vehicle),
        )
        .route("/{id}/stock", get(part::list_stock).post(part::set_stock))
}
