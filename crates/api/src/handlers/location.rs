//! Handlers for stock locations.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::location::{CreateLocation, Location, UpdateLocation};
use catalog_db::models::stock::StockLevel;
use catalog_db::repositories::{LocationRepo, StockRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/locations
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    input.validate()?;

    let location = LocationRepo::create(&state.pool, &input).await?;

    tracing::info!(location_id = %location.id, subject = %auth.subject, "Location created");

    Ok((StatusCode::CREATED, Json(location)))
}

/// GET /api/v1/locations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    let locations = LocationRepo::list(&state.pool).await?;
    Ok(Json(locations))
}

/// GET /api/v1/locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Location>> {
    let location = LocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Location", id)))?;
    Ok(Json(location))
}

/// PATCH /api/v1/locations/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateLocation>,
) -> AppResult<Json<Location>> {
    input.validate()?;

    let mut tx = state.pool.begin().await?;
    let mut location = LocationRepo::find_for_update(&mut tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Location", id)))?;

    input.apply_to(&mut location);
    let location = LocationRepo::save(&mut tx, &location).await?;
    tx.commit().await?;

    tracing::info!(location_id = %id, subject = %auth.subject, "Location updated");

    Ok(Json(location))
}

/// DELETE /api/v1/locations/{id}
///
/// Stock levels held at the location are removed with it.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LocationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Location", id)));
    }

    tracing::info!(location_id = %id, subject = %auth.subject, "Location deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/locations/{id}/stock
pub async fn list_stock(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<StockLevel>>> {
    if !LocationRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Location", id)));
    }
    let levels = StockRepo::list_for_location(&state.pool, id).await?;
    Ok(Json(levels))
}
