//! Item classification: external hint first, geometric heuristics otherwise.
//!
//! The heuristic path is an ordered table of (predicate, outcome) pairs
//! evaluated first-match-wins, closed by a fixed battery fallback so
//! classification is total. All comparisons are strict: a weight of exactly
//! 20 with no hint falls through every rule and lands on the fallback, and
//! NaN measurements (from absent or garbage input) do the same.

use serde::{Deserialize, Serialize};

use crate::request::NormalizedRequest;

/// Coarse quality tier affecting computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub category: String,
    /// Certainty in [0, 1]; display only, never feeds valuation.
    pub confidence: f64,
    pub condition: Condition,
    pub explanation: String,
}

/// One geometric/mass heuristic: a predicate over (weight in grams, volume
/// in cm³) and the fixed outcome it produces.
struct HeuristicRule {
    category: &'static str,
    confidence: f64,
    condition: Condition,
    explanation: &'static str,
    applies: fn(weight: f64, volume: f64) -> bool,
}

impl HeuristicRule {
    fn outcome(&self) -> ClassificationResult {
        ClassificationResult {
            category: self.category.to_string(),
            confidence: self.confidence,
            condition: self.condition,
            explanation: self.explanation.to_string(),
        }
    }
}

/// Ordered heuristic table; the first matching rule wins.
const HEURISTIC_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        category: "laptop",
        confidence: 0.92,
        condition: Condition::Good,
        explanation: "Detected as Laptop based on weight (>1kg) and dimensions",
        applies: |weight, volume| weight > 1000.0 && volume > 100_000.0,
    },
    HeuristicRule {
        category: "phone",
        confidence: 0.88,
        condition: Condition::Fair,
        explanation: "Detected as Mobile Phone based on weight and compact size",
        applies: |weight, volume| weight > 150.0 && weight < 300.0 && volume < 50_000.0,
    },
    HeuristicRule {
        category: "charger",
        confidence: 0.85,
        condition: Condition::Good,
        explanation: "Detected as Charger based on lightweight and small dimensions",
        applies: |weight, volume| weight < 50.0 && volume < 5_000.0,
    },
    HeuristicRule {
        category: "tablet",
        confidence: 0.79,
        condition: Condition::Fair,
        explanation: "Detected as Tablet based on moderate weight and flat shape",
        applies: |weight, volume| weight < 100.0 && volume > 50_000.0,
    },
    HeuristicRule {
        category: "cable",
        confidence: 0.75,
        condition: Condition::Good,
        explanation: "Detected as Cable based on very light weight",
        applies: |weight, _| weight < 20.0,
    },
];

/// Fallback when no heuristic matches, including NaN measurements.
const FALLBACK_RULE: HeuristicRule = HeuristicRule {
    category: "battery",
    confidence: 0.68,
    condition: Condition::Fair,
    explanation: "Detected as Battery (low confidence - please verify)",
    applies: |_, _| true,
};

/// Classify a request. A present external hint always wins; the heuristic
/// table is only consulted without one. Total: always returns a result.
pub fn classify(request: &NormalizedRequest) -> ClassificationResult {
    if let Some(hint) = &request.hint {
        return ClassificationResult {
            category: hint.category.clone(),
            confidence: hint.confidence,
            // The external signal carries no condition information.
            condition: Condition::Good,
            explanation: hint.explanation.clone().unwrap_or_default(),
        };
    }

    let weight = request.measurements.weight;
    let volume = request.measurements.volume();
    HEURISTIC_RULES
        .iter()
        .find(|rule| (rule.applies)(weight, volume))
        .unwrap_or(&FALLBACK_RULE)
        .outcome()
}
