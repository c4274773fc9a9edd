//! Parser and normalizer for SI quantity expressions.
//!
//! `"50 kPa"`, `"50*10^3 kg/(m*s^2)"` and `"5.0*10^4 kg*m^-1*s^-2"` all reduce
//! to a significand, a power of ten and a product of powers over
//! `g, m, s, A, K, cd, mol` and the per-units `%, ppm, ppb, ppt, ppq`.
//!
//! ```text
//! input
//!   |
//! strip whitespace
//!   |
//! match_expression -> magnitude / term / factor / base / lexical
//!   |
//! NormalizedQuantity -> "50*10^6 g*m^-1*s^-2"
//! ```

#![forbid(unsafe_code)]

pub mod ast;
pub mod db;
#[cfg(feature = "display")]
pub mod display;
mod error;
pub mod lexical;
pub mod outcome;
pub mod parser;
mod quantity;
pub mod unit;

pub use ast::{Expression, Magnitude, UnitTerm};
pub use error::{Error, Result};
pub use outcome::ParseOutcome;
pub use parser::match_expression;
pub use quantity::{
    equivalent, normalize, normalize_bytes, normalize_quantity, normalize_quantity_with,
    normalize_with, validate, NormalizeOptions, NormalizedQuantity,
};
pub use unit::{Conversion, DimensionVector, UnitKey};
