//! Bin listing, filtering, and admin updates.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use ecodrop_core::{Bin, BinPatch};

use crate::state::AppState;

use super::{not_found, ErrorResponse};

/// List every drop-off bin.
#[utoipa::path(
    get,
    path = "/api/bins",
    tag = "Bins",
    responses(
        (status = 200, description = "All bins", body = Vec<Object>)
    )
)]
pub async fn bins_list(State(state): State<Arc<AppState>>) -> Json<Vec<Bin>> {
    Json(state.bins.list())
}

/// Bins that accept a waste type and still have room.
#[utoipa::path(
    get,
    path = "/api/bins/by-type/{wasteType}",
    tag = "Bins",
    params(
        ("wasteType" = String, Path, description = "Waste category id")
    ),
    responses(
        (status = 200, description = "Matching bins", body = Vec<Object>)
    )
)]
pub async fn bins_by_type(
    State(state): State<Arc<AppState>>,
    Path(waste_type): Path<String>,
) -> Json<Vec<Bin>> {
    Json(state.bins.accepting(&waste_type))
}

/// Single bin by id.
#[utoipa::path(
    get,
    path = "/api/bins/{id}",
    tag = "Bins",
    params(
        ("id" = String, Path, description = "Bin id")
    ),
    responses(
        (status = 200, description = "Bin details", body = Object),
        (status = 404, description = "Bin not found", body = ErrorResponse)
    )
)]
pub async fn bins_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Bin>, (StatusCode, Json<ErrorResponse>)> {
    state
        .bins
        .get(&id)
        .map(Json)
        .ok_or_else(|| not_found("Bin not found"))
}

/// Merge a partial update into a bin (admin).
#[utoipa::path(
    put,
    path = "/api/bins/{id}",
    tag = "Bins",
    params(
        ("id" = String, Path, description = "Bin id")
    ),
    request_body(content = Object, description = "Any subset of bin fields to overwrite"),
    responses(
        (status = 200, description = "Updated bin", body = Object),
        (status = 404, description = "Bin not found", body = ErrorResponse)
    )
)]
pub async fn bins_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<BinPatch>,
) -> Result<Json<Bin>, (StatusCode, Json<ErrorResponse>)> {
    state
        .bins
        .update(&id, patch)
        .map(Json)
        .map_err(|_| not_found("Bin not found"))
}
