//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single spec, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ecodrop API",
        version = "0.1.0",
        description = "E-waste recycling demo: bin directory, rule-based item detection and valuation, drop-off tracking, and dashboard analytics.",
    ),
    tags(
        (name = "Health", description = "Server liveness"),
        (name = "Bins", description = "Drop-off bin directory and admin updates"),
        (name = "Catalog", description = "Known waste types with base values and CO2 impact"),
        (name = "Detection", description = "Rule-based item classification and valuation"),
        (name = "Transactions", description = "Drop-off recording and the admin transaction log"),
        (name = "Users", description = "User profiles and recycling history"),
        (name = "Analytics", description = "Admin dashboard rollup"),
    ),
    paths(
        crate::api::health::health,
        crate::api::bins::bins_list,
        crate::api::bins::bins_by_type,
        crate::api::bins::bins_get,
        crate::api::bins::bins_update,
        crate::api::waste_types::waste_types,
        crate::api::detect::detect,
        crate::api::transactions::transactions_create,
        crate::api::transactions::transactions_list,
        crate::api::users::users_get,
        crate::api::users::user_transactions,
        crate::api::analytics::analytics,
    ),
    components(schemas(
        crate::api::ErrorResponse,
        crate::api::health::HealthResponse,
        crate::api::transactions::TransactionRequest,
        crate::api::transactions::TransactionReceipt,
        crate::api::analytics::AnalyticsResponse,
    ))
)]
pub struct ApiDoc;
