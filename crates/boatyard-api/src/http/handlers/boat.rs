//! Boat CRUD handlers for the REST API.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use boatyard_core::service::auth::Principal;
use boatyard_types::boat::{Boat, BoatId, CreateBoatRequest, PatchBoatRequest, ReplaceBoatRequest};
use boatyard_types::error::BoatError;

use crate::http::error::AppError;
use crate::http::extractors::json::JsonBody;
use crate::state::AppState;

/// A path segment that is not an integer cannot name any boat.
fn parse_id(raw: &str) -> Result<BoatId, AppError> {
    raw.parse().map_err(|_| AppError::Boat(BoatError::NotFound))
}

/// GET /boats - List all boats.
pub async fn list_boats(State(state): State<AppState>) -> Result<Json<Vec<Boat>>, AppError> {
    let boats = state.boat_service.list_boats().await?;
    Ok(Json(boats))
}

/// POST /boats - Create a boat.
pub async fn create_boat(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    JsonBody(body): JsonBody<CreateBoatRequest>,
) -> Result<impl IntoResponse, AppError> {
    let boat = state.boat_service.create_boat(body).await?;
    tracing::debug!(boat_id = %boat.id, principal = %principal.username, "create handled");

    let location = format!("/boats/{}", boat.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(boat)))
}

/// GET /boats/{id} - Get a boat.
pub async fn get_boat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Boat>, AppError> {
    let id = parse_id(&id)?;
    let boat = state.boat_service.get_boat(&id).await?;
    Ok(Json(boat))
}

/// PUT /boats/{id} - Replace a boat's name and description.
pub async fn replace_boat(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<ReplaceBoatRequest>,
) -> Result<Json<Boat>, AppError> {
    let id = parse_id(&id)?;
    let boat = state.boat_service.replace_boat(&id, body).await?;
    tracing::debug!(boat_id = %boat.id, principal = %principal.username, "replace handled");
    Ok(Json(boat))
}

/// PATCH /boats/{id} - Update the fields present in the body.
pub async fn patch_boat(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<PatchBoatRequest>,
) -> Result<Json<Boat>, AppError> {
    let id = parse_id(&id)?;
    let boat = state.boat_service.patch_boat(&id, body).await?;
    tracing::debug!(boat_id = %boat.id, principal = %principal.username, "patch handled");
    Ok(Json(boat))
}

/// DELETE /boats/{id} - Delete a boat permanently.
pub async fn delete_boat(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.boat_service.delete_boat(&id).await?;
    tracing::debug!(boat_id = %id, principal = %principal.username, "delete handled");
    Ok(StatusCode::NO_CONTENT)
}
