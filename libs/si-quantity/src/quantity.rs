use crate::ast::Expression;
use crate::error::{Error, Result};
use crate::parser::match_expression;
use crate::unit::{DimensionVector, UnitKey};
use std::fmt;

/// Relative tolerance used by [`equivalent`] when comparing magnitudes.
const EQUIVALENCE_TOLERANCE: f64 = 1e-12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizeOptions {
    /// Reject input left over after the expression instead of ignoring it.
    pub strict: bool,
}

impl NormalizeOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// A quantity reduced to `significand * 10^exponent` times base-unit powers.
///
/// `units` never carries the power-of-ten key; it is folded into `exponent`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedQuantity {
    pub significand: f64,
    pub exponent: i32,
    pub units: DimensionVector,
}

impl NormalizedQuantity {
    pub fn significand(&self) -> f64 {
        self.significand
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Numeric value with the power of ten applied. Exponents outside the
    /// `f64` range give zero or infinity.
    pub fn value(&self) -> f64 {
        self.significand * 10f64.powi(self.exponent)
    }

    pub fn units(&self) -> String {
        self.units.to_string()
    }

    pub fn unit_exponent(&self, key: UnitKey) -> i32 {
        self.units.get(key)
    }

    fn magnitude(&self) -> String {
        if self.exponent == 0 {
            self.significand.to_string()
        } else {
            format!("{}*10^{}", self.significand, self.exponent)
        }
    }
}

impl From<Expression> for NormalizedQuantity {
    fn from(expr: Expression) -> Self {
        Self {
            significand: expr.significand,
            exponent: expr.exponents.ten(),
            units: expr.exponents.without_ten(),
        }
    }
}

/// Canonical form: magnitude, a space, then the units. The space is dropped
/// when there are no units or the units are exactly `%`.
impl fmt::Display for NormalizedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.units();
        if units.is_empty() || units == "%" {
            write!(f, "{}{}", self.magnitude(), units)
        } else {
            write!(f, "{} {}", self.magnitude(), units)
        }
    }
}

/// Normalizes `input` to its canonical string; empty input yields `""`.
pub fn normalize(input: &str) -> Result<String> {
    normalize_with(input, NormalizeOptions::default())
}

pub fn normalize_with(input: &str, options: NormalizeOptions) -> Result<String> {
    Ok(normalize_quantity_with(input, options)?
        .map(|q| q.to_string())
        .unwrap_or_default())
}

/// Like [`normalize`] for raw bytes, rejecting anything that is not UTF-8.
pub fn normalize_bytes(input: &[u8]) -> Result<String> {
    normalize(std::str::from_utf8(input)?)
}

/// Parses `input` into its structured form. `None` means the input was empty
/// once whitespace is stripped.
pub fn normalize_quantity(input: &str) -> Result<Option<NormalizedQuantity>> {
    normalize_quantity_with(input, NormalizeOptions::default())
}

pub fn normalize_quantity_with(
    input: &str,
    options: NormalizeOptions,
) -> Result<Option<NormalizedQuantity>> {
    let compact: String = input.chars().filter(|c| *c != ' ').collect();
    if compact.is_empty() {
        return Ok(None);
    }

    let outcome = match_expression(&compact);
    let Some(expr) = outcome.result else {
        return Err(Error::Syntax {
            input: input.into(),
            consumed: outcome.consumed.into(),
        });
    };

    if !outcome.rest.is_empty() {
        if options.strict {
            return Err(Error::TrailingInput {
                input: input.into(),
                consumed: outcome.consumed.into(),
                rest: outcome.rest.into(),
            });
        }
        tracing::debug!(input, rest = outcome.rest, "ignoring trailing input");
    }

    let quantity = NormalizedQuantity::from(expr);
    tracing::debug!(input, canonical = %quantity, "normalized quantity");
    Ok(Some(quantity))
}

/// Checks that `input` parses, without rendering it.
pub fn validate(input: &str) -> Result<()> {
    normalize_quantity(input).map(|_| ())
}

/// True when both inputs reduce to the same base units and the same value.
///
/// Magnitudes are compared as decimal scientific parts rather than as `f64`
/// values, so exponents beyond the `f64` range still compare. Two empty inputs
/// are equivalent; NaN magnitudes compare by units only.
pub fn equivalent(lhs: &str, rhs: &str) -> Result<bool> {
    let (l, r) = match (normalize_quantity(lhs)?, normalize_quantity(rhs)?) {
        (None, None) => return Ok(true),
        (Some(l), Some(r)) => (l, r),
        _ => return Ok(false),
    };
    if l.units != r.units {
        return Ok(false);
    }
    if l.significand.is_nan() || r.significand.is_nan() {
        return Ok(l.significand.is_nan() && r.significand.is_nan());
    }

    let (a, a_exp) = scientific_parts(&l);
    let (b, b_exp) = scientific_parts(&r);
    if a == 0.0 || b == 0.0 {
        return Ok(a == b);
    }
    // mantissas lie in [1, 10), so values within tolerance differ by at most one power
    let shift = b_exp - a_exp;
    if shift.abs() > 1 {
        return Ok(false);
    }
    let b = b * 10f64.powi(shift as i32);
    let scale = a.abs().max(b.abs());
    Ok(a == b || (a - b).abs() <= scale * EQUIVALENCE_TOLERANCE)
}

/// Splits a quantity into a mantissa with `1 <= |m| < 10` and a power of ten.
fn scientific_parts(q: &NormalizedQuantity) -> (f64, i64) {
    let significand = q.significand;
    if significand == 0.0 || !significand.is_finite() {
        return (significand, i64::from(q.exponent));
    }
    let shift = significand.abs().log10().floor() as i32;
    let mut mantissa = significand / 10f64.powi(shift);
    let mut exponent = i64::from(q.exponent) + i64::from(shift);
    // log10 can land one step off near exact powers of ten
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    } else if mantissa.abs() < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }
    (mantissa, exponent)
}
