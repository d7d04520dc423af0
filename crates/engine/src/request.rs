//! Raw input normalization.
//!
//! The boundary accepts measurement fields as JSON numbers or numeric
//! strings and must not reject garbage: anything unparseable coerces to
//! NaN, which fails every strict heuristic comparison downstream and lands
//! the request on the low-confidence fallback.

use serde::Deserialize;
use serde_json::Value;

/// Sentinel category meaning "no usable external signal".
const UNKNOWN_CATEGORY: &str = "unknown";

/// Raw detection request as it arrives on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionInput {
    /// Weight in grams.
    #[serde(default)]
    pub weight: Option<Value>,
    /// Width in centimeters.
    #[serde(default)]
    pub width: Option<Value>,
    /// Height in centimeters.
    #[serde(default)]
    pub height: Option<Value>,
    /// Depth in centimeters.
    #[serde(default)]
    pub depth: Option<Value>,
    /// Category id from an out-of-process image recognizer.
    #[serde(default)]
    pub external_category: Option<String>,
    #[serde(default)]
    pub external_confidence: Option<Value>,
    #[serde(default)]
    pub external_explanation: Option<String>,
}

impl DetectionInput {
    /// Build an input from plain numeric measurements.
    pub fn from_measurements(weight: f64, width: f64, height: f64, depth: f64) -> Self {
        Self {
            weight: Some(weight.into()),
            width: Some(width.into()),
            height: Some(height.into()),
            depth: Some(depth.into()),
            ..Default::default()
        }
    }

    /// Attach an external recognizer hint.
    pub fn with_hint(mut self, category: &str, confidence: f64, explanation: Option<&str>) -> Self {
        self.external_category = Some(category.to_string());
        self.external_confidence = Some(confidence.into());
        self.external_explanation = explanation.map(|e| e.to_string());
        self
    }

    /// Coerce raw fields into the canonical request. Never fails: garbage
    /// numerics become NaN and absent or sentinel hints become `None`.
    pub fn normalize(&self) -> NormalizedRequest {
        let measurements = Measurements {
            weight: lenient_f64(self.weight.as_ref()),
            width: lenient_f64(self.width.as_ref()),
            height: lenient_f64(self.height.as_ref()),
            depth: lenient_f64(self.depth.as_ref()),
        };

        let hint = match self.external_category.as_deref() {
            Some(category) if !category.is_empty() && category != UNKNOWN_CATEGORY => {
                Some(ExternalHint {
                    category: category.to_string(),
                    confidence: lenient_f64(self.external_confidence.as_ref()),
                    explanation: self.external_explanation.clone(),
                })
            }
            _ => None,
        };

        NormalizedRequest { measurements, hint }
    }
}

/// Canonical measurements in grams and centimeters.
#[derive(Debug, Clone, Copy)]
pub struct Measurements {
    pub weight: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Measurements {
    /// Bounding-box volume in cubic centimeters.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }
}

/// A classification signal from an out-of-process image recognizer.
#[derive(Debug, Clone)]
pub struct ExternalHint {
    pub category: String,
    pub confidence: f64,
    pub explanation: Option<String>,
}

/// Canonical request: measurements plus an optional external hint.
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    pub measurements: Measurements,
    pub hint: Option<ExternalHint>,
}

/// JSON number or numeric string to f64; anything else is NaN.
fn lenient_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}
