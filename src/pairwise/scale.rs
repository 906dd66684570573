//! The discrete AHP comparison scale.

/// The fundamental 1–9 comparison scale and its reciprocals, ascending.
///
/// A ratio above 1 means the row criterion is more important than the
/// column criterion; a reciprocal means the opposite. The scale is a fixed
/// system parameter, exported so input layers can build pickers against it.
///
/// # References
///
/// Saaty (1980), *The Analytic Hierarchy Process*
pub const COMPARISON_SCALE: [f64; 17] = [
    1.0 / 9.0,
    1.0 / 8.0,
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
];

/// Coerces an invalid judgment ratio to the neutral value 1.
///
/// Non-positive and non-finite inputs become 1 (indifference) rather than
/// being rejected, so a bad entry can never poison the matrix.
pub fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Returns true when `ratio` matches a value on the comparison scale.
pub fn is_scale_ratio(ratio: f64) -> bool {
    COMPARISON_SCALE.iter().any(|&s| (s - ratio).abs() < 1e-9)
}
