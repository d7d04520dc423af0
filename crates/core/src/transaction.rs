use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded drop-off: who recycled what, where, and for how many points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: String,
    pub bin_id: String,
    /// Category id of the recycled item.
    pub detected_item: String,
    pub value: i64,
    pub co2_saved: f64,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Stamp a new transaction with a fresh id and the current time.
    pub fn record(
        user_id: String,
        bin_id: String,
        detected_item: String,
        value: i64,
        co2_saved: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            bin_id,
            detected_item,
            value,
            co2_saved,
            timestamp: Utc::now(),
        }
    }
}
