//! User profile and recycling history endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use ecodrop_core::{Transaction, User};

use crate::state::AppState;

use super::{not_found, ErrorResponse};

/// User profile with reward totals.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User profile", body = Object),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn users_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    state
        .users
        .get(&id)
        .map(Json)
        .ok_or_else(|| not_found("User not found"))
}

/// A user's recycling history.
#[utoipa::path(
    get,
    path = "/api/users/{id}/transactions",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Transactions recorded for this user", body = Vec<Object>)
    )
)]
pub async fn user_transactions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<Vec<Transaction>> {
    Json(state.transactions.for_user(&id))
}
