//! Detection boundary: measurements in, priced appraisal out.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::debug;

use ecodrop_engine::{Appraisal, DetectionInput};

use crate::state::AppState;

/// Classify and price a single item from its measurements, honoring an
/// optional recognizer hint. Malformed or missing measurements never fail
/// the request; they fall through to the low-confidence fallback.
#[utoipa::path(
    post,
    path = "/api/detect",
    tag = "Detection",
    request_body(
        content = Object,
        description = "weight (g), width/height/depth (cm) as numbers or numeric strings, \
                       plus optional externalCategory/externalConfidence/externalExplanation"
    ),
    responses(
        (status = 200, description = "Appraisal of the item", body = Object)
    )
)]
pub async fn detect(
    State(state): State<Arc<AppState>>,
    Json(input): Json<DetectionInput>,
) -> Json<Appraisal> {
    let appraisal = state.engine.appraise(&input);
    debug!(
        category = %appraisal.category,
        confidence = appraisal.confidence,
        value = appraisal.value,
        "item appraised"
    );
    Json(appraisal)
}
