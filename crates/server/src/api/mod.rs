//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area; shared response
//! types live here in mod.rs.

mod analytics;
mod bins;
mod detect;
pub mod doc;
mod health;
mod transactions;
mod users;
mod waste_types;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

// ── Shared types ─────────────────────────────────────────────────

/// JSON error body, e.g. `{"error": "Bin not found"}`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// 404 with a `{"error": …}` body.
pub(crate) fn not_found(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// ── Re-exports ───────────────────────────────────────────────────
// Preserves flat `api::foo` import paths used by router.rs.

pub use analytics::analytics;
pub use bins::{bins_by_type, bins_get, bins_list, bins_update};
pub use detect::detect;
pub use health::health;
pub use transactions::{transactions_create, transactions_list};
pub use users::{user_transactions, users_get};
pub use waste_types::waste_types;
