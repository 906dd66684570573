//! Error-function approximation and the standard normal CDF.
//!
//! Uses the Abramowitz–Stegun rational approximation 7.1.26 with fixed
//! coefficients, accurate to about 1.5e-7 absolute error. Downstream
//! interpretation ("top 2.5%" for z ≥ 2, etc.) relies on that bound, so
//! the coefficients are not tunable.
//!
//! # References
//!
//! Abramowitz & Stegun (1964), *Handbook of Mathematical Functions*, §7.1.26

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// The error function, approximated to ~1.5e-7 absolute error.
///
/// Odd by construction: `erf(-x) == -erf(x)` exactly.
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard normal cumulative distribution function Φ(z).
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}
