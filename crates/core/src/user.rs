use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recycler with running reward totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub points: i64,
    pub recycled_items: u32,
    /// Cumulative CO2 savings in kg.
    pub co2_saved: f64,
    pub achievements: Vec<String>,
    pub join_date: DateTime<Utc>,
}

impl User {
    /// Credit a completed drop-off against this user's running totals.
    pub fn credit_drop(&mut self, value: i64, co2_saved: f64) {
        self.points += value;
        self.recycled_items += 1;
        self.co2_saved += co2_saved;
    }
}
