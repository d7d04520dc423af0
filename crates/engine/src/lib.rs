//! Rule-based e-waste classification and valuation.
//!
//! The engine is a pure function of its inputs plus a static waste-type
//! catalog: normalize raw measurements, classify (external recognizer hint
//! first, geometric heuristics otherwise), resolve the category against the
//! catalog, and price the item by condition. No cross-call state.

pub mod appraise;
pub mod catalog;
pub mod classifier;
pub mod request;
pub mod valuator;

pub use appraise::{Appraisal, DetectionEngine};
pub use catalog::{Catalog, WasteCategory, FALLBACK_CATEGORY};
pub use classifier::{classify, ClassificationResult, Condition};
pub use request::{DetectionInput, ExternalHint, Measurements, NormalizedRequest};
pub use valuator::{compute_value, condition_multiplier};
