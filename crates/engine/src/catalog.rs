//! Static waste-type catalog.
//!
//! Built once at startup and shared read-only. Lookups degrade instead of
//! failing: an unknown category resolves to the cable entry, and a catalog
//! missing even that entry yields a zero-valued placeholder.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category id used when a lookup misses.
pub const FALLBACK_CATEGORY: &str = "cable";

/// A known e-waste category with display metadata and pricing basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Nominal point value before condition adjustment.
    pub base_value: i64,
    /// Estimated CO2 savings in kg when recycled.
    pub co2_impact: f64,
}

impl WasteCategory {
    /// Zero-valued stand-in used when even the fallback entry is missing.
    pub fn placeholder() -> Self {
        Self {
            id: "unknown".to_string(),
            name: "Unknown Item".to_string(),
            icon: "❓".to_string(),
            base_value: 0,
            co2_impact: 0.0,
        }
    }
}

/// Immutable catalog of known waste types, kept in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: IndexMap<String, WasteCategory>,
}

impl Catalog {
    pub fn new(entries: Vec<WasteCategory>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    /// The built-in waste-type set.
    pub fn builtin() -> Self {
        Self::new(vec![
            entry("phone", "Mobile Phone", "📱", 150, 2.5),
            entry("laptop", "Laptop", "💻", 500, 8.0),
            entry("tablet", "Tablet", "📱", 250, 3.5),
            entry("battery", "Battery", "🔋", 30, 0.8),
            entry("charger", "Charger", "🔌", 20, 0.5),
            entry("cable", "Cable", "🔌", 10, 0.3),
            entry("earphones", "Earphones", "🎧", 40, 0.6),
            entry("printer", "Printer", "🖨️", 300, 5.0),
            entry("monitor", "Monitor", "🖥️", 400, 6.5),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup, no fallback.
    pub fn get(&self, id: &str) -> Option<&WasteCategory> {
        self.entries.get(id)
    }

    /// Resolve a category id for pricing. Misses degrade to the cable
    /// entry, then to the placeholder; resolution never fails.
    pub fn resolve(&self, id: &str) -> WasteCategory {
        self.entries
            .get(id)
            .or_else(|| self.entries.get(FALLBACK_CATEGORY))
            .cloned()
            .unwrap_or_else(WasteCategory::placeholder)
    }

    /// All entries in insertion order.
    pub fn list(&self) -> Vec<WasteCategory> {
        self.entries.values().cloned().collect()
    }
}

fn entry(id: &str, name: &str, icon: &str, base_value: i64, co2_impact: f64) -> WasteCategory {
    WasteCategory {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        base_value,
        co2_impact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_category() {
        let catalog = Catalog::builtin();
        let phone = catalog.resolve("phone");
        assert_eq!(phone.name, "Mobile Phone");
        assert_eq!(phone.base_value, 150);
        assert!((phone.co2_impact - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn resolve_unknown_falls_back_to_cable() {
        let catalog = Catalog::builtin();
        let resolved = catalog.resolve("nonexistent-id");
        assert_eq!(resolved.id, "cable");
        assert_eq!(resolved.name, "Cable");
        assert_eq!(resolved.base_value, 10);
        assert!((resolved.co2_impact - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn resolve_without_fallback_entry_yields_placeholder() {
        let catalog = Catalog::new(vec![]);
        let resolved = catalog.resolve("phone");
        assert_eq!(resolved.name, "Unknown Item");
        assert_eq!(resolved.base_value, 0);
        assert_eq!(resolved.co2_impact, 0.0);
    }

    #[test]
    fn list_preserves_seed_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<String> = catalog.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids[0], "phone");
        assert_eq!(ids[1], "laptop");
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(Catalog::builtin().resolve("cable")).unwrap();
        assert!(json.get("baseValue").is_some());
        assert!(json.get("co2Impact").is_some());
    }
}
