//! Admin dashboard rollup over the live tables.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use ecodrop_core::{Bin, STATUS_OPERATIONAL};

use crate::state::AppState;

/// Fill percentage above which a bin counts as needing collection.
const COLLECTION_THRESHOLD: u32 = 80;

/// How many bins the `topBins` leaderboard shows.
const TOP_BIN_COUNT: usize = 5;

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_bins: usize,
    pub operational_bins: usize,
    pub total_transactions: usize,
    pub total_value: i64,
    #[serde(rename = "totalCO2Saved")]
    pub total_co2_saved: f64,
    pub bins_needing_collection: usize,
    pub average_fill_level: f64,
    #[schema(value_type = Vec<Object>)]
    pub top_bins: Vec<TopBin>,
}

/// A bin decorated with its recorded drop-off count.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopBin {
    #[serde(flatten)]
    pub bin: Bin,
    pub transaction_count: usize,
}

/// Aggregate statistics for the admin dashboard.
#[utoipa::path(
    get,
    path = "/api/analytics",
    tag = "Analytics",
    responses(
        (status = 200, description = "Dashboard rollup", body = AnalyticsResponse)
    )
)]
pub async fn analytics(State(state): State<Arc<AppState>>) -> Json<AnalyticsResponse> {
    let bins = state.bins.list();
    let transactions = state.transactions.list();

    let average_fill_level = if bins.is_empty() {
        0.0
    } else {
        bins.iter().map(|b| b.fill_level as f64).sum::<f64>() / bins.len() as f64
    };

    let mut top_bins: Vec<TopBin> = bins
        .iter()
        .map(|bin| TopBin {
            transaction_count: transactions.iter().filter(|t| t.bin_id == bin.id).count(),
            bin: bin.clone(),
        })
        .collect();
    top_bins.sort_by(|a, b| b.transaction_count.cmp(&a.transaction_count));
    top_bins.truncate(TOP_BIN_COUNT);

    Json(AnalyticsResponse {
        total_bins: bins.len(),
        operational_bins: bins.iter().filter(|b| b.status == STATUS_OPERATIONAL).count(),
        total_transactions: transactions.len(),
        total_value: transactions.iter().map(|t| t.value).sum(),
        total_co2_saved: transactions.iter().map(|t| t.co2_saved).sum(),
        bins_needing_collection: bins
            .iter()
            .filter(|b| b.fill_level > COLLECTION_THRESHOLD)
            .count(),
        average_fill_level,
        top_bins,
    })
}
