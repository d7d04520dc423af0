//! Condition-based valuation.

/// Multiplier applied to a category's base value for a given condition.
/// Conditions outside the table price at face value.
pub fn condition_multiplier(condition: &str) -> f64 {
    match condition {
        "excellent" => 1.2,
        "good" => 1.0,
        "fair" => 0.7,
        "poor" => 0.4,
        _ => 1.0,
    }
}

/// Final point value: base value scaled by condition, rounded half away
/// from zero.
pub fn compute_value(base_value: i64, condition: &str) -> i64 {
    (base_value as f64 * condition_multiplier(condition)).round() as i64
}
