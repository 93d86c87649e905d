#![doc = include_str!("../README.md")]

mod error;
mod matrix;
mod printer;
mod walk;

pub mod logging;
#[cfg(feature = "wasm")]
mod wasm;

pub use error::{SpiralError, SpiralResult};
pub use matrix::{MAX_DIMENSION, SpiralMatrix, generate, validate_dimension};
pub use printer::{FormatParams, field_width, format};
pub use walk::SpiralWalk;
