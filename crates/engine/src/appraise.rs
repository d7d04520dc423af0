//! Engine boundary: classify, resolve, and price a single item.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::classifier::{classify, Condition};
use crate::request::DetectionInput;
use crate::valuator::compute_value;

/// Full engine output for one detection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appraisal {
    /// Classified category id.
    #[serde(rename = "type")]
    pub category: String,
    pub name: String,
    pub icon: String,
    pub confidence: f64,
    /// Condition-adjusted point value.
    pub value: i64,
    pub condition: Condition,
    pub co2_impact: f64,
    pub explanation: String,
}

/// The classification & valuation engine: a static catalog plus pure
/// per-request computation. Safe to share across request handlers without
/// locking.
#[derive(Debug, Clone)]
pub struct DetectionEngine {
    catalog: Catalog,
}

impl DetectionEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Engine backed by the built-in waste-type catalog.
    pub fn with_builtin_catalog() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the full pipeline: normalize, classify, resolve, price.
    /// Catalog misses degrade to the fallback entry (or the zero-valued
    /// placeholder); they never fail the request.
    pub fn appraise(&self, input: &DetectionInput) -> Appraisal {
        let request = input.normalize();
        let classified = classify(&request);
        let entry = self.catalog.resolve(&classified.category);
        let value = compute_value(entry.base_value, classified.condition.as_str());

        Appraisal {
            category: classified.category,
            name: entry.name,
            icon: entry.icon,
            confidence: classified.confidence,
            value,
            condition: classified.condition,
            co2_impact: entry.co2_impact,
            explanation: classified.explanation,
        }
    }
}
