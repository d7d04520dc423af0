use ecodrop_engine::DetectionEngine;

use crate::store::{BinStore, TransactionStore, UserStore};

/// Shared application state: the immutable engine plus the in-memory
/// tables. Wrapped in `Arc` by the router.
pub struct AppState {
    pub engine: DetectionEngine,
    pub bins: BinStore,
    pub users: UserStore,
    pub transactions: TransactionStore,
}
