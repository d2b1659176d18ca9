//! JavaScript bindings. The page viewer passes the raw `.lines` bytes and
//! gets the SVG markup back.

use wasm_bindgen::prelude::*;

use crate::converters::{svg::lines_to_svg, RenderOptions};

/// Sets up console logging and, when enabled, readable panic messages.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second call finds the logger already installed; that is fine.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Converts a `.lines` buffer to SVG at the given output size.
#[wasm_bindgen]
pub fn lines_to_svg_js(
    bytes: &[u8],
    width: f64,
    height: f64,
    coloured_annotations: bool,
) -> Result<String, JsValue> {
    let options = RenderOptions::builder()
        .set_width(width)
        .set_height(height)
        .set_coloured_annotations(coloured_annotations)
        .build()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    lines_to_svg(bytes, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}
