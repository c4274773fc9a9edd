//! Recursive descent grammar for quantity expressions
//!
//! ```text
//! expression := magnitude [('*' | '/')] term | magnitude | term
//! magnitude  := (decimal | 'NaN') [('*10^' | 'E' | 'e') integer]
//! term       := '(' term ')' | factor ('*' | '/') term | factor
//! factor     := base ['^' integer]
//! base       := [prefix] unit          (longest match)
//! ```
//!
//! Every rule is a pure function from the remaining input to a
//! [`ParseOutcome`]. Alternatives are committed once their leading token
//! matched: a failure inside a parenthesised group is never retried as a
//! factor. Term chains associate to the right, so `a/b*c` reads as `a/(b*c)`.

use crate::ast::{Expression, Magnitude, UnitTerm};
use crate::db;
use crate::lexical::{match_char, match_decimal, match_integer};
use crate::outcome::ParseOutcome;
use crate::unit::{DimensionVector, UnitKey};

/// Maximum nesting of parenthesised groups.
const MAX_GROUP_DEPTH: usize = 256;

/// Literal the canonical form uses for a quantity without a number.
const NAN_LITERAL: &str = "NaN";

/// Markers introducing the power-of-ten suffix of a magnitude.
const EXPONENT_MARKERS: [&str; 3] = ["*10^", "E", "e"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Multiply,
    Divide,
}

/// Matches `*` or `/`.
pub fn match_operator(input: &str) -> ParseOutcome<'_, Operator> {
    if match_char(input, '*').success() {
        ParseOutcome::matched(input, 1, Operator::Multiply)
    } else if match_char(input, '/').success() {
        ParseOutcome::matched(input, 1, Operator::Divide)
    } else {
        ParseOutcome::failed(input, 0)
    }
}

/// Resolves the longest `prefix + unit` symbol at the start of `input`.
///
/// The unprefixed reading is tried first; a prefixed reading only wins when
/// it is strictly longer. Per-units and `°C` never take a prefix.
pub fn match_base(input: &str) -> ParseOutcome<'_, UnitTerm> {
    let mut best: Option<(usize, UnitTerm)> = None;

    for (prefix_len, ten) in prefix_candidates(input) {
        let Some((unit_len, def)) = longest_unit(&input[prefix_len..], prefix_len > 0) else {
            continue;
        };
        let total = prefix_len + unit_len;
        if best.is_some_and(|(len, _)| len >= total) {
            continue;
        }
        let Some(exponents) = def.exponents.checked_shift(UnitKey::Ten, ten) else {
            continue;
        };
        best = Some((
            total,
            UnitTerm {
                exponents,
                conversion: def.conversion,
            },
        ));
    }

    match best {
        Some((len, term)) => ParseOutcome::matched(input, len, term),
        None => ParseOutcome::failed(input, 0),
    }
}

/// The empty prefix followed by every table prefix `input` starts with.
fn prefix_candidates(input: &str) -> impl Iterator<Item = (usize, i32)> + '_ {
    let prefixed = (1..=db::MAX_SYMBOL_LEN).filter_map(move |len| {
        let symbol = input.get(..len)?;
        db::prefix(symbol).map(|ten| (len, ten))
    });
    std::iter::once((0, 0)).chain(prefixed)
}

fn longest_unit(input: &str, prefixed: bool) -> Option<(usize, &'static db::UnitDef)> {
    (1..=db::MAX_SYMBOL_LEN.min(input.len()))
        .rev()
        .filter_map(|len| Some((len, db::unit(input.get(..len)?)?)))
        .find(|(_, def)| !prefixed || def.prefixable)
}

/// `base ['^' integer]`. The exponent scales every entry, the power of ten
/// included; the conversion is carried through unchanged.
pub fn match_factor(input: &str) -> ParseOutcome<'_, UnitTerm> {
    let base = match_base(input);
    let Some(term) = base.result else {
        return base;
    };
    let caret = match_char(base.rest, '^');
    if !caret.success() {
        return base;
    }

    let offset = base.consumed.len() + caret.consumed.len();
    let power = match_integer(caret.rest).rebase(input, offset);
    let len = power.consumed.len();
    match power.result.and_then(|n| term.exponents.checked_scale(n)) {
        Some(exponents) => ParseOutcome::matched(
            input,
            len,
            UnitTerm {
                exponents,
                conversion: term.conversion,
            },
        ),
        None => ParseOutcome::failed(input, len),
    }
}

/// `'(' term ')'`, `factor ('*' | '/') term` or `factor`.
pub fn match_term(input: &str) -> ParseOutcome<'_, UnitTerm> {
    term(input, 0)
}

/// Reads a chain of factors iteratively and folds it from the right. Only
/// parenthesised groups recurse, so `depth` counts open groups.
fn term(input: &str, depth: usize) -> ParseOutcome<'_, UnitTerm> {
    if depth >= MAX_GROUP_DEPTH {
        return ParseOutcome::failed(input, 0);
    }

    let mut links: Vec<(UnitTerm, Operator)> = Vec::new();
    let mut offset = 0;
    let last = loop {
        let rest = &input[offset..];
        let is_group = match_char(rest, '(').success();
        let element = if is_group {
            group(rest, depth)
        } else {
            match_factor(rest)
        }
        .rebase(input, offset);
        let Some(unit) = element.result else {
            return element;
        };
        offset = element.consumed.len();

        // a group ends the chain
        if is_group {
            break unit;
        }
        let op = match_operator(element.rest);
        let Some(operator) = op.result else {
            break unit;
        };
        links.push((unit, operator));
        offset += op.consumed.len();
    };

    let folded = links
        .into_iter()
        .rev()
        .try_fold(last, |rhs, (lhs, operator)| combine(lhs, operator, rhs));
    match folded {
        Some(unit) => ParseOutcome::matched(input, offset, unit),
        None => ParseOutcome::failed(input, offset),
    }
}

fn combine(lhs: UnitTerm, operator: Operator, rhs: UnitTerm) -> Option<UnitTerm> {
    let exponents = match operator {
        Operator::Multiply => lhs.exponents.checked_add(rhs.exponents),
        Operator::Divide => lhs.exponents.checked_sub(rhs.exponents),
    }?;
    Some(UnitTerm {
        exponents,
        conversion: lhs.conversion.compose(rhs.conversion),
    })
}

fn group(input: &str, depth: usize) -> ParseOutcome<'_, UnitTerm> {
    let inner = term(&input[1..], depth + 1).rebase(input, 1);
    let Some(unit) = inner.result else {
        return inner;
    };
    let len = inner.consumed.len();
    if match_char(inner.rest, ')').success() {
        ParseOutcome::matched(input, len + 1, unit)
    } else {
        ParseOutcome::failed(input, len)
    }
}

/// A decimal significand with an optional power-of-ten suffix.
///
/// A marker not followed by an integer is left in the input, so `5EPa` is a
/// significand of 5 followed by the unit `EPa`. The literal `NaN` stands for
/// a missing number, which lets canonical output parse back.
pub fn match_magnitude(input: &str) -> ParseOutcome<'_, Magnitude> {
    let decimal = match_significand(input);
    let Some(significand) = decimal.result else {
        return decimal.into_failure();
    };
    let len = decimal.consumed.len();

    for marker in EXPONENT_MARKERS {
        let Some(after) = decimal.rest.strip_prefix(marker) else {
            continue;
        };
        let power = match_integer(after);
        if let Some(exponent) = power.result {
            let total = len + marker.len() + power.consumed.len();
            return ParseOutcome::matched(
                input,
                total,
                Magnitude {
                    significand,
                    exponent,
                },
            );
        }
        break;
    }

    ParseOutcome::matched(
        input,
        len,
        Magnitude {
            significand,
            exponent: 0,
        },
    )
}

fn match_significand(input: &str) -> ParseOutcome<'_, f64> {
    if input.starts_with(NAN_LITERAL) {
        ParseOutcome::matched(input, NAN_LITERAL.len(), f64::NAN)
    } else {
        match_decimal(input)
    }
}

/// Top-level rule: a magnitude, a unit term, or a magnitude followed by an
/// optional operator and a unit term.
///
/// Without a numeric part the significand is NaN and the exponents come from
/// the term alone. Whenever input remains after the magnitude a term must
/// parse there. The outcome need not consume all of `input`.
pub fn match_expression(input: &str) -> ParseOutcome<'_, Expression> {
    let magnitude = match_magnitude(input);
    let Some(Magnitude {
        significand,
        exponent,
    }) = magnitude.result
    else {
        let unit = match_term(input);
        if !unit.success() && magnitude.consumed.len() > unit.consumed.len() {
            return magnitude.into_failure();
        }
        return unit.map(|u| Expression {
            significand: f64::NAN,
            exponents: u.exponents,
        });
    };

    if magnitude.rest.is_empty() {
        return ParseOutcome::matched(
            input,
            magnitude.consumed.len(),
            Expression {
                significand,
                exponents: DimensionVector::of(UnitKey::Ten, exponent),
            },
        );
    }

    let op = match_operator(magnitude.rest);
    let offset = magnitude.consumed.len() + op.consumed.len();
    let operator = op.result.unwrap_or(Operator::Multiply);
    let unit = match_term(op.rest).rebase(input, offset);
    let Some(term) = unit.result else {
        return unit.into_failure();
    };

    let len = unit.consumed.len();
    let exponents = match operator {
        Operator::Multiply => Some(term.exponents),
        Operator::Divide => term.exponents.checked_neg(),
    }
    .and_then(|e| e.checked_shift(UnitKey::Ten, exponent));

    match exponents {
        Some(exponents) => ParseOutcome::matched(
            input,
            len,
            Expression {
                significand: term.conversion.apply(significand),
                exponents,
            },
        ),
        None => ParseOutcome::failed(input, len),
    }
}
