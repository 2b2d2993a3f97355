//! WASM bindings for shamir-recover
//!
//! This module provides JavaScript-friendly bindings for reconstruction and decoding.

use wasm_bindgen::prelude::*;

use crate::commands;
use crate::domain::{DivisionMode, Radix, ReconstructConfig, Selection};

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Reconstruct the secret of a JSON share document
///
/// # Arguments
/// * `document` - The share document (`keys` plus one record per share)
/// * `exact` - Use exact rational arithmetic instead of truncating division
///
/// # Returns
/// JSON summary with `n`, `k`, `m`, the indices used and the secret as a
/// decimal string, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const summary = JSON.parse(wasm_reconstruct(JSON.stringify({
///     keys: { n: 4, k: 3 },
///     "1": { base: "10", value: "4" },
///     "2": { base: "2", value: "111" },
///     "3": { base: "10", value: "12" },
///     "6": { base: "4", value: "213" },
/// }), false));
/// console.log(`Secret: ${summary.secret}`);
/// ```
#[wasm_bindgen]
pub fn wasm_reconstruct(document: &str, exact: bool) -> Result<String, JsValue> {
    let division = if exact {
        DivisionMode::Exact
    } else {
        DivisionMode::Truncating
    };
    let config = ReconstructConfig::new(division, Selection::LowestIndices);

    let result = commands::reconstruct_str(document, "document", &config)
        .map_err(|e| JsValue::from_str(&format!("Reconstruction failed: {e:#}")))?;

    serde_json::to_string(&result.summary())
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Decode a value written in the given base, returning it in decimal
///
/// # Example (JavaScript)
/// ```javascript
/// console.log(wasm_decode("213", "4")); // "39"
/// ```
#[wasm_bindgen]
pub fn wasm_decode(digits: &str, base: &str) -> Result<String, JsValue> {
    let radix =
        Radix::parse(base).map_err(|e| JsValue::from_str(&format!("Invalid base: {e}")))?;

    commands::decode_value(digits, &radix)
        .map_err(|e| JsValue::from_str(&format!("Decode failed: {e:#}")))
}
