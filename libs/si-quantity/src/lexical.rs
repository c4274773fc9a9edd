//! Lexical primitives - the atomic consumers of the input cursor
//!
//! Each function inspects the start of `input` and returns a [`ParseOutcome`].
//! They never fail loudly: a miss is an ordinary outcome with `result: None`.

use crate::outcome::ParseOutcome;

/// Matches exactly one `c` at the start of `input`.
pub fn match_char(input: &str, c: char) -> ParseOutcome<'_, char> {
    if input.starts_with(c) {
        ParseOutcome::matched(input, c.len_utf8(), c)
    } else {
        ParseOutcome::failed(input, 0)
    }
}

/// Matches the maximal run of leading ASCII digits.
///
/// A run too large for `u32` is a failure that still consumes the run.
pub fn match_digits(input: &str) -> ParseOutcome<'_, u32> {
    let len = digit_run(input);
    if len == 0 {
        return ParseOutcome::failed(input, 0);
    }
    match input[..len].parse::<u32>() {
        Ok(value) => ParseOutcome::matched(input, len, value),
        Err(_) => ParseOutcome::failed(input, len),
    }
}

/// Matches an optionally signed integer.
///
/// Signs are handled by re-entering the rule, so `"+-3"` reads as `-3`. The
/// sign is applied before the range check, so `i32::MIN` is accepted.
pub fn match_integer(input: &str) -> ParseOutcome<'_, i32> {
    signed_integer(input, false)
}

fn signed_integer(input: &str, negative: bool) -> ParseOutcome<'_, i32> {
    if let Some(sign) = leading_sign(input) {
        return signed_integer(&input[1..], negative ^ (sign == '-')).rebase(input, 1);
    }

    let digits = match_digits(input);
    let len = digits.consumed.len();
    let value = digits
        .result
        .map(|n| if negative { -i64::from(n) } else { i64::from(n) })
        .and_then(|n| i32::try_from(n).ok());
    match value {
        Some(value) => ParseOutcome::matched(input, len, value),
        None => ParseOutcome::failed(input, len),
    }
}

/// Matches an optionally signed decimal: `digits.digits`, `digits` or `.digits`.
///
/// The unsigned body is converted as one token so the fractional part is not
/// rounded separately from the integer part.
pub fn match_decimal(input: &str) -> ParseOutcome<'_, f64> {
    if let Some(sign) = leading_sign(input) {
        let inner = match_decimal(&input[1..]).rebase(input, 1);
        return match sign {
            '-' => inner.map(|v| -v),
            _ => inner,
        };
    }

    let int_len = digit_run(input);
    let len = match input[int_len..].strip_prefix('.') {
        Some(after_point) => {
            let frac_len = digit_run(after_point);
            if frac_len > 0 {
                int_len + 1 + frac_len
            } else if int_len > 0 {
                // "5." keeps the point for the caller
                int_len
            } else {
                return ParseOutcome::failed(input, 1);
            }
        }
        None if int_len > 0 => int_len,
        None => return ParseOutcome::failed(input, 0),
    };

    match input[..len].parse::<f64>() {
        Ok(value) => ParseOutcome::matched(input, len, value),
        Err(_) => ParseOutcome::failed(input, len),
    }
}

fn leading_sign(input: &str) -> Option<char> {
    input.chars().next().filter(|c| matches!(c, '+' | '-'))
}

fn digit_run(input: &str) -> usize {
    input.bytes().take_while(u8::is_ascii_digit).count()
}
