use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bin status values used by the demo data and the dashboard rollup.
pub const STATUS_OPERATIONAL: &str = "operational";
pub const STATUS_ALMOST_FULL: &str = "almost_full";

/// A public e-waste drop-off point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Category ids this bin accepts (e.g. "phone", "battery").
    pub accepted_items: Vec<String>,
    /// Fill percentage. Not clamped; drop-offs can push it past 100.
    pub fill_level: u32,
    pub status: String,
    pub address: String,
    pub capacity: u32,
    pub last_collection: DateTime<Utc>,
}

impl Bin {
    /// Whether this bin accepts the given waste category.
    pub fn accepts(&self, category: &str) -> bool {
        self.accepted_items.iter().any(|c| c == category)
    }

    /// Merge a partial update into this bin, field by field.
    pub fn apply(&mut self, patch: BinPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(lat) = patch.lat {
            self.lat = lat;
        }
        if let Some(lng) = patch.lng {
            self.lng = lng;
        }
        if let Some(accepted_items) = patch.accepted_items {
            self.accepted_items = accepted_items;
        }
        if let Some(fill_level) = patch.fill_level {
            self.fill_level = fill_level;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        if let Some(last_collection) = patch.last_collection {
            self.last_collection = last_collection;
        }
    }
}

/// Partial bin update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinPatch {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub accepted_items: Option<Vec<String>>,
    pub fill_level: Option<u32>,
    pub status: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<u32>,
    pub last_collection: Option<DateTime<Utc>>,
}
