//! Rounding and significant-figure helpers for presenting magnitudes.
//!
//! These work on the raw parts exposed by [`NormalizedQuantity`] and never
//! re-parse the canonical string.
//!
//! [`NormalizedQuantity`]: crate::NormalizedQuantity

use rust_decimal::{Decimal, RoundingStrategy};

/// Largest scale a [`Decimal`] can hold.
const MAX_SCALE: u32 = 28;

/// Rounds `value` half away from zero to the nearest multiple of `10^power`.
///
/// A negative `power` keeps `-power` decimal places.
pub fn round_to_power(value: Decimal, power: i32) -> Decimal {
    if power <= 0 {
        let places = power.unsigned_abs().min(MAX_SCALE);
        return value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    }

    let Some(factor) = pow10(power.unsigned_abs()) else {
        // 10^power exceeds every representable magnitude
        return Decimal::ZERO;
    };
    let steps = (value / factor).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    steps.checked_mul(factor).unwrap_or(value)
}

/// Number of significant figures in a decimal literal such as `"0.0120"` or
/// `"1.20e3"`; `None` when `literal` is not a decimal number.
///
/// Trailing zeros of an integer without a decimal point are not counted
/// (`"1200"` has 2). A literal made only of zeros counts its fractional zeros,
/// at least 1.
pub fn significant_figures(literal: &str) -> Option<u32> {
    let body = literal.trim();
    let body = body.strip_prefix(['+', '-']).unwrap_or(body);
    let mantissa = match body.find(['e', 'E']) {
        Some(pos) => {
            let exp = &body[pos + 1..];
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            &body[..pos]
        }
        None => body,
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (mantissa, None),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return None;
    }
    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return None;
    }

    let digits: String = int_part.chars().chain(frac_part.unwrap_or("").chars()).collect();
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        let zeros = frac_part.map_or(0, str::len) as u32;
        return Some(zeros.max(1));
    }

    let counted = if frac_part.is_some() {
        significant
    } else {
        significant.trim_end_matches('0')
    };
    Some(counted.len() as u32)
}

/// Renders `value` rounded to `figures` significant figures, keeping trailing
/// zeros that are significant (`format_significant(1.5, 3)` is `"1.50"`).
///
/// Output is positional at any magnitude. `None` for non-finite values, zero
/// figures or more than 28 figures.
pub fn format_significant(value: f64, figures: u32) -> Option<String> {
    format_significant_parts(value, 0, figures)
}

/// Like [`format_significant`] for `significand * 10^exponent`, the raw parts
/// of a [`NormalizedQuantity`], without forming the product as an `f64`.
///
/// [`NormalizedQuantity`]: crate::NormalizedQuantity
pub fn format_significant_parts(significand: f64, exponent: i32, figures: u32) -> Option<String> {
    if !significand.is_finite() || figures == 0 || figures > MAX_SCALE {
        return None;
    }
    let places = figures - 1;
    if significand == 0.0 {
        return Some(place_digits(&"0".repeat(figures as usize), 0));
    }

    // shortest round-trip digits, e.g. "6.626e-34"
    let text = format!("{:e}", significand.abs());
    let (mantissa, power) = text.split_once('e')?;
    let mantissa: Decimal = mantissa.parse().ok()?;
    let mut power = i64::from(power.parse::<i32>().ok()?) + i64::from(exponent);

    let mut rounded = mantissa.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    // rounding may carry into a new leading digit (9.996 -> 10.00)
    if rounded >= Decimal::TEN {
        rounded /= Decimal::TEN;
        power += 1;
    }
    rounded.rescale(places);

    let digits = rounded.mantissa().to_string();
    let body = place_digits(&digits, power);
    Some(if significand < 0.0 {
        format!("-{body}")
    } else {
        body
    })
}

/// Writes `digits` (`d.ddd` scaled by `10^power`) in positional notation.
fn place_digits(digits: &str, power: i64) -> String {
    let whole = power + 1;
    if whole <= 0 {
        format!("0.{}{digits}", "0".repeat(whole.unsigned_abs() as usize))
    } else if whole as usize >= digits.len() {
        format!("{digits}{}", "0".repeat(whole as usize - digits.len()))
    } else {
        let (int, frac) = digits.split_at(whole as usize);
        format!("{int}.{frac}")
    }
}

fn pow10(exp: u32) -> Option<Decimal> {
    (0..exp).try_fold(Decimal::ONE, |acc, _| acc.checked_mul(Decimal::TEN))
}
