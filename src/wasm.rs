use wasm_bindgen::prelude::*;

use crate::{FormatParams, SpiralMatrix, format as format_matrix, generate as generate_matrix};

fn generate_checked(n: u32) -> Result<SpiralMatrix, JsError> {
    generate_matrix(n as usize).map_err(|e| JsError::new(&e.to_string()))
}

/// Generate the spiral matrix of order n.
/// Returns a 2D array directly usable in JavaScript.
#[wasm_bindgen]
pub fn generate(n: u32) -> Result<JsValue, JsError> {
    let matrix = generate_checked(n)?;
    serde_wasm_bindgen::to_value(&matrix.to_rows()).map_err(|e| JsError::new(&e.to_string()))
}

/// Generate the spiral matrix of order n and render it as aligned text.
///
/// A `width` of 0 selects the digit count of n².
#[wasm_bindgen]
pub fn format(n: u32, width: u32) -> Result<String, JsError> {
    let matrix = generate_checked(n)?;
    let field_width = match width {
        0 => None,
        w => Some(u16::try_from(w).map_err(|_| JsError::new("width must be at most 65535"))?),
    };
    let params = FormatParams { field_width };
    Ok(format_matrix(&matrix, &params))
}
