//! Handlers for vehicles and the parts fitted to them.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_core::validation::validate_year_range;
use catalog_db::models::part::Part;
use catalog_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use catalog_db::repositories::{PartVehicleRepo, VehicleRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/vehicles
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    input.validate()?;

    let vehicle = VehicleRepo::create(&state.pool, &input).await?;

    tracing::info!(vehicle_id = %vehicle.id, subject = %auth.subject, "Vehicle created");

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /api/v1/vehicles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = VehicleRepo::list(&state.pool).await?;
    Ok(Json(vehicles))
}

/// GET /api/v1/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Vehicle", id)))?;
    Ok(Json(vehicle))
}

/// PATCH /api/v1/vehicles/{id}
///
/// The merged record must still have `to_year >= from_year`.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    input.validate()?;

    let mut tx = state.pool.begin().await?;
    let mut vehicle = VehicleRepo::find_for_update(&mut tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Vehicle", id)))?;

    input.apply_to(&mut vehicle);
    validate_year_range(vehicle.from_year, vehicle.to_year)?;

    let vehicle = VehicleRepo::save(&mut tx, &vehicle).await?;
    tx.commit().await?;

    tracing::info!(vehicle_id = %id, subject = %auth.subject, "Vehicle updated");

    Ok(Json(vehicle))
}

/// DELETE /api/v1/vehicles/{id}
///
/// Links to parts are removed with the vehicle; the parts themselves stay.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VehicleRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Vehicle", id)));
    }

    tracing::info!(vehicle_id = %id, subject = %auth.subject, "Vehicle deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/vehicles/{id}/parts
pub async fn list_parts(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<Part>>> {
    if !VehicleRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Vehicle", id)));
    }
    let parts = PartVehicleRepo::parts_for_vehicle(&state.pool, id).await?;
    Ok(Json(parts))
}
