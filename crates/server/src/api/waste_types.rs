//! Read-only waste-type catalog listing.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use ecodrop_engine::WasteCategory;

use crate::state::AppState;

/// The waste-type catalog in display order.
#[utoipa::path(
    get,
    path = "/api/waste-types",
    tag = "Catalog",
    responses(
        (status = 200, description = "Known waste types", body = Vec<Object>)
    )
)]
pub async fn waste_types(State(state): State<Arc<AppState>>) -> Json<Vec<WasteCategory>> {
    Json(state.engine.catalog().list())
}
