//! Drop-off transaction recording and the admin transaction log.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use ecodrop_core::{Transaction, User};

use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub user_id: String,
    pub bin_id: String,
    /// Category id of the recycled item.
    pub detected_item: String,
    pub value: i64,
    pub co2_saved: f64,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TransactionReceipt {
    #[schema(value_type = Object)]
    pub transaction: Transaction,
    /// Updated user, or null when the user id is unknown.
    #[schema(value_type = Object)]
    pub user: Option<User>,
}

/// Record a drop-off: append the transaction, credit the user, and bump
/// the bin's fill level. Unknown user or bin ids skip that side effect
/// but the transaction is still recorded.
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "Transactions",
    request_body = TransactionRequest,
    responses(
        (status = 200, description = "Recorded transaction and updated user", body = TransactionReceipt)
    )
)]
pub async fn transactions_create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransactionRequest>,
) -> Json<TransactionReceipt> {
    let transaction = Transaction::record(
        req.user_id.clone(),
        req.bin_id.clone(),
        req.detected_item,
        req.value,
        req.co2_saved,
    );
    state.transactions.append(transaction.clone());

    let user = state.users.credit_drop(&req.user_id, req.value, req.co2_saved);
    if user.is_none() {
        warn!(user_id = %req.user_id, "transaction recorded for unknown user");
    }
    state.bins.record_drop(&req.bin_id);

    Json(TransactionReceipt { transaction, user })
}

/// Full transaction log (admin).
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Transactions",
    responses(
        (status = 200, description = "All recorded transactions", body = Vec<Object>)
    )
)]
pub async fn transactions_list(State(state): State<Arc<AppState>>) -> Json<Vec<Transaction>> {
    Json(state.transactions.list())
}
