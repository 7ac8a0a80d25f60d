//! JavaScript bindings (`wasm` feature).
//!
//! All bindings use [`PackerConfig::default`]. Errors surface as JS
//! strings holding the error message.

use wasm_bindgen::prelude::*;

use crate::error::PackError;
use crate::packer::{pack_lines, select_indices_with, PackerConfig};
use crate::parser::parse_line;

fn to_js(err: PackError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Packs one line and returns the chosen positions, or `-`.
#[wasm_bindgen(js_name = selectIndices)]
pub fn select_indices_js(line: &str) -> Result<String, JsValue> {
    select_indices_with(line, &PackerConfig::default()).map_err(to_js)
}

/// Packs a newline-separated batch.
#[wasm_bindgen(js_name = packLines)]
pub fn pack_lines_js(input: &str) -> Result<String, JsValue> {
    pack_lines(input, &PackerConfig::default()).map_err(to_js)
}

/// Parses one line into `{ capacity, items }` without selecting.
#[wasm_bindgen(js_name = parseLine)]
pub fn parse_line_js(line: &str) -> Result<JsValue, JsValue> {
    let config = PackerConfig::default();
    let parsed = parse_line(line, config.currency, &config).map_err(to_js)?;
    serde_wasm_bindgen::to_value(&parsed).map_err(Into::into)
}
