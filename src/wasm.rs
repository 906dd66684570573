//! JS bindings for browser-hosted input layers.
//!
//! Exposes snapshot evaluation over `wasm-bindgen`, exchanging plain JS
//! objects via `serde-wasm-bindgen`. The input shape mirrors the sparse
//! exchange form of [`DecisionSnapshot::from_parts`].

use crate::decision::{evaluate, DecisionSnapshot};
use crate::ranking::Alternative;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Sparse snapshot exchange form.
#[derive(Deserialize)]
struct SnapshotInput {
    criteria: Vec<String>,
    /// Sparse `[row, col, ratio]` triples; unspecified pairs default to 1.
    #[serde(default)]
    ratios: Vec<(usize, usize, f64)>,
    #[serde(default)]
    alternatives: Vec<Alternative>,
    #[serde(default = "default_sample")]
    sample_std_dev: bool,
}

fn default_sample() -> bool {
    true
}

/// Evaluates a decision snapshot supplied as a plain JS object and returns
/// the full outcome (weights, consistency, ranking, stats).
#[wasm_bindgen]
pub fn evaluate_snapshot(input: JsValue) -> Result<JsValue, JsValue> {
    let input: SnapshotInput =
        serde_wasm_bindgen::from_value(input).map_err(JsValue::from)?;

    let snapshot = DecisionSnapshot::from_parts(
        input.criteria,
        &input.ratios,
        input.alternatives,
        input.sample_std_dev,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let outcome = evaluate(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&outcome).map_err(JsValue::from)
}
