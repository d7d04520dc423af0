//! Bin repository and demo seed data.

use std::sync::RwLock;

use chrono::{DateTime, Utc};

use ecodrop_core::{Bin, BinPatch, EcodropError, STATUS_ALMOST_FULL, STATUS_OPERATIONAL};

/// Fill percentage at or above which a bin stops being suggested.
const FULL_THRESHOLD: u32 = 90;

/// How much one drop-off raises a bin's fill level.
const DROP_FILL_INCREMENT: u32 = 2;

pub struct BinStore {
    inner: RwLock<Vec<Bin>>,
}

impl BinStore {
    pub fn new(bins: Vec<Bin>) -> Self {
        Self {
            inner: RwLock::new(bins),
        }
    }

    /// The demo data set: five Delhi drop-off points.
    pub fn with_demo_data() -> Self {
        Self::new(demo_bins())
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("bin table lock poisoned").len()
    }

    pub fn list(&self) -> Vec<Bin> {
        self.inner.read().expect("bin table lock poisoned").clone()
    }

    /// Bins that accept the given category and still have room.
    pub fn accepting(&self, category: &str) -> Vec<Bin> {
        self.inner
            .read()
            .expect("bin table lock poisoned")
            .iter()
            .filter(|b| b.accepts(category) && b.fill_level < FULL_THRESHOLD)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Bin> {
        self.inner
            .read()
            .expect("bin table lock poisoned")
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// Merge a partial update into a bin.
    pub fn update(&self, id: &str, patch: BinPatch) -> Result<Bin, EcodropError> {
        let mut guard = self.inner.write().expect("bin table lock poisoned");
        let bin = guard
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| EcodropError::BinNotFound(id.to_string()))?;
        bin.apply(patch);
        Ok(bin.clone())
    }

    /// Bump the fill level after a recorded drop-off. Unknown ids are
    /// ignored; the fill level is not clamped.
    pub fn record_drop(&self, id: &str) {
        let mut guard = self.inner.write().expect("bin table lock poisoned");
        if let Some(bin) = guard.iter_mut().find(|b| b.id == id) {
            bin.fill_level += DROP_FILL_INCREMENT;
        }
    }
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("demo timestamp")
}

fn items(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn demo_bins() -> Vec<Bin> {
    vec![
        Bin {
            id: "1".to_string(),
            name: "Downtown E-Waste Hub".to_string(),
            lat: 28.6139,
            lng: 77.2090,
            accepted_items: items(&["phone", "laptop", "tablet", "battery", "charger", "cable"]),
            fill_level: 45,
            status: STATUS_OPERATIONAL.to_string(),
            address: "Connaught Place, New Delhi".to_string(),
            capacity: 500,
            last_collection: ts("2024-02-05T10:30:00Z"),
        },
        Bin {
            id: "2".to_string(),
            name: "North Campus Recycling Point".to_string(),
            lat: 28.6885,
            lng: 77.2104,
            accepted_items: items(&["phone", "battery", "charger", "cable", "earphones"]),
            fill_level: 78,
            status: STATUS_OPERATIONAL.to_string(),
            address: "Delhi University, North Campus".to_string(),
            capacity: 300,
            last_collection: ts("2024-02-04T14:20:00Z"),
        },
        Bin {
            id: "3".to_string(),
            name: "South Delhi Tech Recycler".to_string(),
            lat: 28.5355,
            lng: 77.2490,
            accepted_items: items(&["laptop", "tablet", "phone", "printer", "monitor"]),
            fill_level: 32,
            status: STATUS_OPERATIONAL.to_string(),
            address: "Hauz Khas Village".to_string(),
            capacity: 600,
            last_collection: ts("2024-02-06T09:15:00Z"),
        },
        Bin {
            id: "4".to_string(),
            name: "East Delhi Green Point".to_string(),
            lat: 28.6692,
            lng: 77.4538,
            accepted_items: items(&["phone", "battery", "cable", "charger"]),
            fill_level: 95,
            status: STATUS_ALMOST_FULL.to_string(),
            address: "Mayur Vihar Phase 1".to_string(),
            capacity: 250,
            last_collection: ts("2024-02-03T11:00:00Z"),
        },
        Bin {
            id: "5".to_string(),
            name: "West Delhi Electronics Hub".to_string(),
            lat: 28.6517,
            lng: 77.1015,
            accepted_items: items(&[
                "laptop", "phone", "tablet", "battery", "charger", "cable", "monitor",
            ]),
            fill_level: 18,
            status: STATUS_OPERATIONAL.to_string(),
            address: "Rajouri Garden".to_string(),
            capacity: 700,
            last_collection: ts("2024-02-06T16:45:00Z"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepting_filters_category_and_fill_level() {
        let store = BinStore::with_demo_data();
        let bins = store.accepting("phone");
        // Bin 4 accepts phones but sits at 95% fill.
        assert_eq!(bins.len(), 4);
        assert!(bins.iter().all(|b| b.id != "4"));
        assert!(bins.iter().all(|b| b.accepts("phone")));
    }

    #[test]
    fn accepting_unknown_category_is_empty() {
        let store = BinStore::with_demo_data();
        assert!(store.accepting("gramophone").is_empty());
    }

    #[test]
    fn update_merges_patch() {
        let store = BinStore::with_demo_data();
        let updated = store
            .update(
                "1",
                BinPatch {
                    fill_level: Some(0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.fill_level, 0);
        assert_eq!(store.get("1").unwrap().fill_level, 0);
    }

    #[test]
    fn update_unknown_bin_errors() {
        let store = BinStore::with_demo_data();
        assert!(store.update("999", BinPatch::default()).is_err());
    }

    #[test]
    fn record_drop_bumps_fill_level() {
        let store = BinStore::with_demo_data();
        store.record_drop("1");
        assert_eq!(store.get("1").unwrap().fill_level, 47);
        // Unknown ids are a no-op.
        store.record_drop("999");
    }
}
