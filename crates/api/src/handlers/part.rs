//! Handlers for parts, their vehicle fitments, and their stock levels.
//!
//! Mutating endpoints require [`AuthUser`], except `set_stock`, which has
//! always been open to unauthenticated callers. Link and stock writes hold
//! share locks on the rows they reference until they commit.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_core::validation::validate_quantity;
use catalog_db::models::part::{CreatePart, Part, UpdatePart};
use catalog_db::models::stock::{SetStockLevel, StockLevel};
use catalog_db::models::vehicle::Vehicle;
use catalog_db::repositories::{LocationRepo, PartRepo, PartVehicleRepo, StockRepo, VehicleRepo};
use sqlx::{Postgres, Transaction};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Verify that a part exists, returning 404 otherwise.
async fn ensure_part_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if PartRepo::exists(&state.pool, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::not_found("Part", id)))
    }
}

/// Share-lock both ends of a link so neither can be deleted mid-write.
async fn lock_part_and_vehicle(
    tx: &mut Transaction<'_, Postgres>,
    part_id: DbId,
    vehicle_id: DbId,
) -> AppResult<()> {
    if !PartRepo::lock_shared(tx, part_id).await? {
        return Err(AppError::Core(CoreError::not_found("Part", part_id)));
    }
    if !VehicleRepo::lock_shared(tx, vehicle_id).await? {
        return Err(AppError::Core(CoreError::not_found("Vehicle", vehicle_id)));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/parts
///
/// Create a part. The internal part code is generated server-side.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePart>,
) -> AppResult<(StatusCode, Json<Part>)> {
    input.validate()?;

    let part = PartRepo::create(&state.pool, &input).await?;

    tracing::info!(
        part_id = %part.id,
        code = %part.internal_part_code,
        subject = %auth.subject,
        "Part created",
    );

    Ok((StatusCode::CREATED, Json(part)))
}

/// GET /api/v1/parts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Part>>> {
    let parts = PartRepo::list(&state.pool).await?;
    Ok(Json(parts))
}

/// GET /api/v1/parts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Part>> {
    let part = PartRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Part", id)))?;
    Ok(Json(part))
}

/// PATCH /api/v1/parts/{id}
///
/// Apply only the supplied fields. `internal_part_code` cannot be changed.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdatePart>,
) -> AppResult<Json<Part>> {
    input.validate()?;

    let mut tx = state.pool.begin().await?;
    let mut part = PartRepo::find_for_update(&mut tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Part", id)))?;

    input.apply_to(&mut part);
    let part = PartRepo::save(&mut tx, &part).await?;
    tx.commit().await?;

    tracing::info!(part_id = %id, subject = %auth.subject, "Part updated");

    Ok(Json(part))
}

/// DELETE /api/v1/parts/{id}
///
/// Removes the part together with its stock levels and vehicle links.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PartRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Part", id)));
    }

    tracing::info!(part_id = %id, subject = %auth.subject, "Part deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Vehicle fitment
// ---------------------------------------------------------------------------

/// POST /api/v1/parts/{id}/vehicles/{vehicle_id}
///
/// Link a part to a vehicle. Returns 201 for a new link and 200 when the
/// link already existed.
pub async fn link_vehicle(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((part_id, vehicle_id)): AppPath<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let mut tx = state.pool.begin().await?;
    lock_part_and_vehicle(&mut tx, part_id, vehicle_id).await?;
    let created = PartVehicleRepo::link(&mut tx, part_id, vehicle_id).await?;
    tx.commit().await?;

    if !created {
        return Ok((StatusCode::OK, Json(MessageResponse::new("Already linked"))));
    }

    tracing::info!(%part_id, %vehicle_id, subject = %auth.subject, "Part linked to vehicle");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Linked successfully")),
    ))
}

/// DELETE /api/v1/parts/{id}/vehicles/{vehicle_id}
pub async fn unlink_vehicle(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((part_id, vehicle_id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    lock_part_and_vehicle(&mut tx, part_id, vehicle_id).await?;
    let removed = PartVehicleRepo::unlink(&mut tx, part_id, vehicle_id).await?;
    tx.commit().await?;

    if !removed {
        return Err(AppError::Core(CoreError::LinkNotFound {
            part_id,
            vehicle_id,
        }));
    }

    tracing::info!(%part_id, %vehicle_id, subject = %auth.subject, "Part unlinked from vehicle");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/parts/{id}/vehicles
pub async fn list_vehicles(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<Vehicle>>> {
    ensure_part_exists(&state, id).await?;
    let vehicles = PartVehicleRepo::vehicles_for_part(&state.pool, id).await?;
    Ok(Json(vehicles))
}

// ---------------------------------------------------------------------------
// Stock
// ---------------------------------------------------------------------------

/// GET /api/v1/parts/{id}/stock
pub async fn list_stock(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<StockLevel>>> {
    ensure_part_exists(&state, id).await?;
    let levels = StockRepo::list_for_part(&state.pool, id).await?;
    Ok(Json(levels))
}

/// POST /api/v1/parts/{id}/stock
///
/// Create or overwrite the quantity held at one location. Repeated calls
/// for the same location update a single row.
pub async fn set_stock(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<SetStockLevel>,
) -> AppResult<Json<StockLevel>> {
    validate_quantity(input.quantity)?;

    let mut tx = state.pool.begin().await?;
    if !PartRepo::lock_shared(&mut tx, id).await? {
        return Err(AppError::Core(CoreError::not_found("Part", id)));
    }
    if !LocationRepo::lock_shared(&mut tx, input.location_id).await? {
        return Err(AppError::Core(CoreError::not_found(
            "Location",
            input.location_id,
        )));
    }
    let level = StockRepo::upsert(&mut tx, id, input.location_id, input.quantity).await?;
    tx.commit().await?;

    tracing::info!(
        part_id = %id,
        location_id = %input.location_id,
        quantity = input.quantity,
        "Stock level set",
    );

    Ok(Json(level))
}
