//! WebAssembly bindings for vtofp
//!
//! This module provides JavaScript-friendly bindings for the browser planner.

use crate::decoder::{Decoder, FormulaConstants};
use crate::grammar;
use crate::plan::{FlightPlan, MissionDocuments};
use wasm_bindgen::prelude::*;

fn decoder(formula_a: i64, formula_b: i64) -> Result<Decoder, JsValue> {
    FormulaConstants::new(formula_a, formula_b)
        .map(Decoder::new)
        .map_err(|e| JsValue::from_str(&format!("Invalid formula: {}", e)))
}

/// Decode a mission or map file to text
///
/// # Arguments
/// * `data` - The `.vts`/`.vtsb`/`.vtm`/`.vtmb` file as bytes
/// * `formula_a` - Decode offset
/// * `formula_b` - Decode modulus
#[wasm_bindgen(js_name = decodeText)]
pub fn decode_text(data: &[u8], formula_a: i64, formula_b: i64) -> Result<String, JsValue> {
    Ok(decoder(formula_a, formula_b)?.decode(data).into_string())
}

/// Decode an obfuscated image asset (`.pngb`) to raw bytes
#[wasm_bindgen(js_name = decodeImage)]
pub fn decode_image(data: &[u8], formula_a: i64, formula_b: i64) -> Result<Vec<u8>, JsValue> {
    Ok(decoder(formula_a, formula_b)?.decode_raw(data))
}

/// Build a flight plan from a mission/map pair
///
/// # Returns
/// The flight plan as a JSON string
#[wasm_bindgen(js_name = generateFlightPlan)]
pub fn generate_flight_plan(
    mission: &[u8],
    map: &[u8],
    formula_a: i64,
    formula_b: i64,
) -> Result<String, JsValue> {
    let decoder = decoder(formula_a, formula_b)?;
    let docs = MissionDocuments::load(&decoder, Some(mission), Some(map))
        .map_err(|e| JsValue::from_str(&format!("Load failed: {}", e)))?;
    serde_json::to_string(&FlightPlan::generate(&docs))
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Waypoints of a mission file as an array of `[x, y]` pairs
#[wasm_bindgen(js_name = missionWaypoints)]
pub fn mission_waypoints(
    mission: &[u8],
    formula_a: i64,
    formula_b: i64,
) -> Result<js_sys::Array, JsValue> {
    let text = decoder(formula_a, formula_b)?.decode(mission);
    let arr = js_sys::Array::new();
    for (x, y) in grammar::waypoints(text.as_str()) {
        arr.push(&js_sys::Array::of2(&JsValue::from_f64(x), &JsValue::from_f64(y)));
    }
    Ok(arr)
}
