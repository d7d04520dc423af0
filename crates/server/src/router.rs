//! HTTP router construction.
//!
//! Assembles all Axum routes, middleware, and OpenAPI docs into a single
//! `Router`.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api;
use crate::state::AppState;

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/bins", get(api::bins_list))
        .route("/api/bins/by-type/{waste_type}", get(api::bins_by_type))
        .route(
            "/api/bins/{id}",
            get(api::bins_get).put(api::bins_update),
        )
        .route("/api/waste-types", get(api::waste_types))
        .route("/api/detect", post(api::detect))
        .route(
            "/api/transactions",
            get(api::transactions_list).post(api::transactions_create),
        )
        .route("/api/users/{id}", get(api::users_get))
        .route("/api/users/{id}/transactions", get(api::user_transactions))
        .route("/api/analytics", get(api::analytics))
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(Scalar::with_url("/docs", api::doc::ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::build_router;
    use crate::startup::build_app_state;

    fn test_app() -> Router {
        build_router(build_app_state())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(payload) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn bins_list_returns_seed_data() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/bins", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0]["name"], "Downtown E-Waste Hub");
        assert_eq!(body[0]["fillLevel"], 45);
    }

    #[tokio::test]
    async fn bins_by_type_excludes_nearly_full_bins() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/bins/by-type/phone", None).await;
        assert_eq!(status, StatusCode::OK);
        let bins = body.as_array().unwrap();
        // Bin 4 accepts phones but sits at 95% fill.
        assert_eq!(bins.len(), 4);
        assert!(bins.iter().all(|b| b["id"] != "4"));
    }

    #[tokio::test]
    async fn missing_bin_is_404() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/bins/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Bin not found");
    }

    #[tokio::test]
    async fn bin_update_merges_partial_body() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/bins/1",
            Some(json!({"fillLevel": 10, "status": "almost_full"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fillLevel"], 10);
        assert_eq!(body["status"], "almost_full");
        // Untouched fields survive the merge.
        assert_eq!(body["name"], "Downtown E-Waste Hub");
        assert_eq!(body["capacity"], 500);
    }

    #[tokio::test]
    async fn waste_types_lists_full_catalog() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/waste-types", None).await;
        assert_eq!(status, StatusCode::OK);
        let types = body.as_array().unwrap();
        assert_eq!(types.len(), 9);
        assert_eq!(types[0]["id"], "phone");
        assert_eq!(types[0]["baseValue"], 150);
        assert_eq!(types[0]["co2Impact"], 2.5);
    }

    #[tokio::test]
    async fn detect_heavy_compact_item_is_battery() {
        // Weight clears the laptop bar but volume (6000) does not, so the
        // request falls through to the battery fallback.
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/detect",
            Some(json!({"weight": 1200, "width": 40, "height": 30, "depth": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "battery");
        assert_eq!(body["confidence"], 0.68);
        assert_eq!(body["condition"], "fair");
        assert_eq!(body["value"], 21);
        assert_eq!(body["co2Impact"], 0.8);
    }

    #[tokio::test]
    async fn detect_accepts_string_measurements() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/detect",
            Some(json!({"weight": "200", "width": "10", "height": "5", "depth": "1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "phone");
        assert_eq!(body["name"], "Mobile Phone");
        assert_eq!(body["value"], 105);
        assert_eq!(body["co2Impact"], 2.5);
    }

    #[tokio::test]
    async fn detect_honors_recognizer_hint() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/detect",
            Some(json!({
                "weight": 10, "width": 2, "height": 2, "depth": 2,
                "externalCategory": "laptop",
                "externalConfidence": "0.95",
                "externalExplanation": "Recognized a laptop lid"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "laptop");
        assert_eq!(body["confidence"], 0.95);
        assert_eq!(body["condition"], "good");
        assert_eq!(body["value"], 500);
        assert_eq!(body["explanation"], "Recognized a laptop lid");
    }

    #[tokio::test]
    async fn detect_tolerates_missing_measurements() {
        let app = test_app();
        let (status, body) = send(&app, Method::POST, "/api/detect", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "battery");
    }

    #[tokio::test]
    async fn transaction_flow_updates_user_bin_and_analytics() {
        let app = test_app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/transactions",
            Some(json!({
                "userId": "1", "binId": "2", "detectedItem": "phone",
                "value": 105, "co2Saved": 2.5
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transaction"]["detectedItem"], "phone");
        assert_eq!(body["user"]["points"], 2555);
        assert_eq!(body["user"]["recycledItems"], 19);

        let (_, bin) = send(&app, Method::GET, "/api/bins/2", None).await;
        assert_eq!(bin["fillLevel"], 80);

        let (_, history) = send(&app, Method::GET, "/api/users/1/transactions", None).await;
        assert_eq!(history.as_array().unwrap().len(), 1);

        let (_, analytics) = send(&app, Method::GET, "/api/analytics", None).await;
        assert_eq!(analytics["totalTransactions"], 1);
        assert_eq!(analytics["totalValue"], 105);
        assert_eq!(analytics["totalCO2Saved"], 2.5);
        assert_eq!(analytics["topBins"][0]["id"], "2");
        assert_eq!(analytics["topBins"][0]["transactionCount"], 1);
    }

    #[tokio::test]
    async fn transaction_for_unknown_user_still_records() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/transactions",
            Some(json!({
                "userId": "999", "binId": "1", "detectedItem": "cable",
                "value": 10, "co2Saved": 0.3
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["user"].is_null());

        let (_, log) = send(&app, Method::GET, "/api/transactions", None).await;
        assert_eq!(log.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn analytics_reflects_seed_state() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/analytics", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalBins"], 5);
        assert_eq!(body["operationalBins"], 4);
        assert_eq!(body["totalTransactions"], 0);
        assert_eq!(body["binsNeedingCollection"], 1);
        // (45 + 78 + 32 + 95 + 18) / 5
        assert_eq!(body["averageFillLevel"], 53.6);
        assert_eq!(body["topBins"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn missing_user_is_404() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/users/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");

        let (status, user) = send(&app, Method::GET, "/api/users/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["name"], "Demo User");
        assert_eq!(user["points"], 2450);
    }
}
