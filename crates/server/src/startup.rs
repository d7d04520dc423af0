//! Server startup: shared state construction and demo seed data.

use std::sync::Arc;

use tracing::info;

use ecodrop_engine::DetectionEngine;

use crate::state::AppState;
use crate::store::{BinStore, TransactionStore, UserStore};

/// Build `AppState` with the built-in catalog and the demo data set.
pub fn build_app_state() -> Arc<AppState> {
    let engine = DetectionEngine::with_builtin_catalog();
    info!(
        "Detection engine ready ({} waste types)",
        engine.catalog().len()
    );

    let bins = BinStore::with_demo_data();
    let users = UserStore::with_demo_data();
    info!("Tables seeded: {} bins, {} users", bins.len(), users.len());

    Arc::new(AppState {
        engine,
        bins,
        users,
        transactions: TransactionStore::new(),
    })
}
