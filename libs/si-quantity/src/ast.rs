use crate::unit::{Conversion, DimensionVector};

/// A unit factor or term: its exponents plus the conversion to apply to the
/// significand.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct UnitTerm {
    pub exponents: DimensionVector,
    pub conversion: Conversion,
}

/// Significand with its optional power-of-ten suffix (`5*10^4`, `5e4`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnitude {
    pub significand: f64,
    pub exponent: i32,
}

/// A fully parsed quantity, before rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expression {
    /// NaN when the input carried no numeric part.
    pub significand: f64,
    /// Exponents including the accumulated power of ten.
    pub exponents: DimensionVector,
}
