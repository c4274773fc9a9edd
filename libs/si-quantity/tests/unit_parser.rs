//! Unit tests for the grammar rules

use sinorm_quantity::parser::{
    match_base, match_expression, match_factor, match_magnitude, match_operator, match_term,
    Operator,
};
use sinorm_quantity::{Conversion, DimensionVector, UnitKey};

fn dims(pairs: &[(UnitKey, i32)]) -> DimensionVector {
    pairs
        .iter()
        .fold(DimensionVector::new(), |v, (k, e)| v.with(*k, *e))
}

fn pascal(ten: i32) -> DimensionVector {
    dims(&[
        (UnitKey::Ten, ten),
        (UnitKey::Gram, 1),
        (UnitKey::Metre, -1),
        (UnitKey::Second, -2),
    ])
}

#[test]
fn test_base_prefixed_derived_unit() {
    let out = match_base("kPa");
    assert_eq!(out.consumed, "kPa");
    assert_eq!(out.result.unwrap().exponents, pascal(6));
}

#[test]
fn test_base_prefers_longest_match() {
    // mol, not m + ol
    let out = match_base("mol");
    assert_eq!(out.consumed, "mol");
    assert_eq!(out.result.unwrap().exponents, dims(&[(UnitKey::Mole, 1)]));

    // kat, not k + at
    let out = match_base("kat");
    assert_eq!(out.consumed, "kat");
    assert_eq!(
        out.result.unwrap().exponents,
        dims(&[(UnitKey::Mole, 1), (UnitKey::Second, -1)])
    );

    // Sv, not S
    let out = match_base("Sv");
    assert_eq!(out.consumed, "Sv");
    assert_eq!(
        out.result.unwrap().exponents,
        dims(&[(UnitKey::Metre, 2), (UnitKey::Second, -2)])
    );

    // m + s beats the bare metre
    let out = match_base("ms");
    assert_eq!(out.consumed, "ms");
    assert_eq!(
        out.result.unwrap().exponents,
        dims(&[(UnitKey::Ten, -3), (UnitKey::Second, 1)])
    );
}

#[test]
fn test_base_two_letter_and_greek_prefixes() {
    let out = match_base("dam");
    assert_eq!(out.consumed, "dam");
    assert_eq!(
        out.result.unwrap().exponents,
        dims(&[(UnitKey::Ten, 1), (UnitKey::Metre, 1)])
    );

    for micro in ["μm", "µm", "um"] {
        let out = match_base(micro);
        assert_eq!(out.consumed, micro);
        assert_eq!(
            out.result.unwrap().exponents,
            dims(&[(UnitKey::Ten, -6), (UnitKey::Metre, 1)])
        );
    }

    let out = match_base("mmol");
    assert_eq!(
        out.result.unwrap().exponents,
        dims(&[(UnitKey::Ten, -3), (UnitKey::Mole, 1)])
    );
}

#[test]
fn test_base_per_units_and_celsius_take_no_prefix() {
    let out = match_base("ppm");
    assert_eq!(out.result.unwrap().exponents, dims(&[(UnitKey::Ppm, 1)]));

    let out = match_base("kppm");
    assert!(!out.success());
    assert_eq!(out.consumed, "");

    // Falls back to the metre, leaving °C unmatched
    let out = match_base("m°C");
    assert_eq!(out.consumed, "m");
    assert_eq!(out.rest, "°C");

    let out = match_base("°C");
    let term = out.result.unwrap();
    assert_eq!(term.exponents, dims(&[(UnitKey::Kelvin, 1)]));
    assert_eq!(term.conversion, Conversion::Affine { offset: 273.15 });
}

#[test]
fn test_base_unknown_symbol() {
    let out = match_base("qPa");
    assert!(!out.success());
    assert_eq!(out.consumed, "");
    assert_eq!(out.rest, "qPa");

    assert!(!match_base("").success());
    assert!(!match_base("5m").success());
}

#[test]
fn test_factor_exponent() {
    let out = match_factor("m^2");
    assert_eq!(out.consumed, "m^2");
    assert_eq!(out.result.unwrap().exponents, dims(&[(UnitKey::Metre, 2)]));

    let out = match_factor("m^-2");
    assert_eq!(out.result.unwrap().exponents, dims(&[(UnitKey::Metre, -2)]));

    // The prefix is raised too
    let out = match_factor("km^2");
    assert_eq!(
        out.result.unwrap().exponents,
        dims(&[(UnitKey::Ten, 6), (UnitKey::Metre, 2)])
    );
}

#[test]
fn test_factor_without_exponent() {
    let out = match_factor("m*s");
    assert_eq!(out.consumed, "m");
    assert_eq!(out.rest, "*s");
}

#[test]
fn test_factor_dangling_caret() {
    let out = match_factor("m^");
    assert!(!out.success());
    assert_eq!(out.consumed, "m^");

    let out = match_factor("m^x");
    assert!(!out.success());
    assert_eq!(out.consumed, "m^");
    assert_eq!(out.rest, "x");
}

#[test]
fn test_factor_exponent_overflow() {
    let out = match_factor("km^2000000000");
    assert!(!out.success());
    assert_eq!(out.consumed, "km^2000000000");
}

#[test]
fn test_operator() {
    assert_eq!(match_operator("*m").result, Some(Operator::Multiply));
    assert_eq!(match_operator("/m").result, Some(Operator::Divide));
    assert!(!match_operator("m").success());
}

#[test]
fn test_term_division_with_group() {
    let out = match_term("kg/(m*s^2)");
    assert_eq!(out.consumed, "kg/(m*s^2)");
    assert_eq!(out.result.unwrap().exponents, pascal(3));
}

#[test]
fn test_term_product_chain() {
    let out = match_term("kg*m^-1*s^-2");
    assert_eq!(out.consumed, "kg*m^-1*s^-2");
    assert_eq!(out.result.unwrap().exponents, pascal(3));
}

#[test]
fn test_term_chains_are_right_recursive() {
    // m/(s/s)
    let out = match_term("m/s/s");
    assert_eq!(out.consumed, "m/s/s");
    assert_eq!(out.result.unwrap().exponents, dims(&[(UnitKey::Metre, 1)]));

    // m/(s*s)
    let out = match_term("m/s*s");
    assert_eq!(
        out.result.unwrap().exponents,
        dims(&[(UnitKey::Metre, 1), (UnitKey::Second, -2)])
    );
}

#[test]
fn test_term_group_does_not_continue() {
    let out = match_term("(m*s)*K");
    assert_eq!(out.consumed, "(m*s)");
    assert_eq!(out.rest, "*K");
}

#[test]
fn test_term_failures_report_attempted_prefix() {
    let out = match_term("(m*s");
    assert!(!out.success());
    assert_eq!(out.consumed, "(m*s");

    let out = match_term("m*");
    assert!(!out.success());
    assert_eq!(out.consumed, "m*");

    let out = match_term("kg/(m*q)");
    assert!(!out.success());
    assert_eq!(out.consumed, "kg/(m*");

    // No fallback from the group production to a factor
    let out = match_term("(q)");
    assert!(!out.success());
    assert_eq!(out.consumed, "(");
}

#[test]
fn test_term_conversion_composes() {
    let out = match_term("°C");
    assert_eq!(
        out.result.unwrap().conversion,
        Conversion::Affine { offset: 273.15 }
    );

    let out = match_term("°C*m");
    assert_eq!(
        out.result.unwrap().conversion,
        Conversion::Affine { offset: 273.15 }
    );

    let out = match_term("m^2");
    assert_eq!(out.result.unwrap().conversion, Conversion::Identity);
}

#[test]
fn test_term_nesting_limit() {
    let deep = format!("{}m{}", "(".repeat(300), ")".repeat(300));
    assert!(!match_term(&deep).success());

    let shallow = format!("{}m{}", "(".repeat(20), ")".repeat(20));
    let out = match_term(&shallow);
    assert_eq!(out.consumed, shallow);
    assert_eq!(out.result.unwrap().exponents, dims(&[(UnitKey::Metre, 1)]));
}

#[test]
fn test_term_long_flat_chain() {
    let chain = vec!["m"; 300].join("*");
    let out = match_term(&chain);
    assert_eq!(out.consumed, chain);
    assert_eq!(out.result.unwrap().exponents, dims(&[(UnitKey::Metre, 300)]));

    let chain = format!("m/{}", vec!["s"; 300].join("/"));
    let out = match_term(&chain);
    assert_eq!(out.consumed, chain);
    // m/(s/(s/(...)))
    assert_eq!(out.result.unwrap().exponents, dims(&[(UnitKey::Metre, 1)]));
}

#[test]
fn test_term_chain_inside_groups() {
    let out = match_term("kg*(m/(s*s))");
    assert_eq!(out.consumed, "kg*(m/(s*s))");
    assert_eq!(
        out.result.unwrap().exponents,
        dims(&[
            (UnitKey::Ten, 3),
            (UnitKey::Gram, 1),
            (UnitKey::Metre, 1),
            (UnitKey::Second, -2)
        ])
    );
}

#[test]
fn test_term_chain_overflow_fails() {
    let out = match_term("m^2000000000*m^2000000000");
    assert!(!out.success());
    assert_eq!(out.consumed, "m^2000000000*m^2000000000");
}

#[test]
fn test_magnitude_suffixes() {
    let out = match_magnitude("5*10^4");
    let m = out.result.unwrap();
    assert_eq!((m.significand, m.exponent), (5.0, 4));
    assert_eq!(out.rest, "");

    let m = match_magnitude("5e-3").result.unwrap();
    assert_eq!((m.significand, m.exponent), (5.0, -3));

    let m = match_magnitude("2.5E+2").result.unwrap();
    assert_eq!((m.significand, m.exponent), (2.5, 2));

    let out = match_magnitude("50kPa");
    assert_eq!(out.result.unwrap().exponent, 0);
    assert_eq!(out.rest, "kPa");
}

#[test]
fn test_magnitude_marker_without_integer_is_left() {
    let out = match_magnitude("5EPa");
    let m = out.result.unwrap();
    assert_eq!((m.significand, m.exponent), (5.0, 0));
    assert_eq!(out.rest, "EPa");

    let out = match_magnitude("5*10^x");
    assert_eq!(out.consumed, "5");
    assert_eq!(out.rest, "*10^x");
}

#[test]
fn test_magnitude_nan_literal() {
    let out = match_magnitude("NaN*10^6g");
    let m = out.result.unwrap();
    assert!(m.significand.is_nan());
    assert_eq!(m.exponent, 6);
    assert_eq!(out.rest, "g");

    let expr = match_expression("NaN*10^6g*m^-1*s^-2").result.unwrap();
    assert!(expr.significand.is_nan());
    assert_eq!(expr.exponents, pascal(6));

    // newton, not a missing number
    let out = match_magnitude("N");
    assert!(!out.success());
}

#[test]
fn test_magnitude_extreme_exponent() {
    let m = match_magnitude("1e-2147483648").result.unwrap();
    assert_eq!(m.exponent, i32::MIN);
}

#[test]
fn test_expression_magnitude_only() {
    let out = match_expression("4.2e3");
    let expr = out.result.unwrap();
    assert_eq!(expr.significand, 4.2);
    assert_eq!(expr.exponents, dims(&[(UnitKey::Ten, 3)]));
}

#[test]
fn test_expression_implicit_multiplication() {
    let out = match_expression("50kPa");
    let expr = out.result.unwrap();
    assert_eq!(expr.significand, 50.0);
    assert_eq!(expr.exponents, pascal(6));
}

#[test]
fn test_expression_division() {
    let out = match_expression("2*10^3/ms");
    let expr = out.result.unwrap();
    assert_eq!(expr.significand, 2.0);
    assert_eq!(
        expr.exponents,
        dims(&[(UnitKey::Ten, 6), (UnitKey::Second, -1)])
    );
}

#[test]
fn test_expression_without_magnitude() {
    let out = match_expression("kPa");
    let expr = out.result.unwrap();
    assert!(expr.significand.is_nan());
    assert_eq!(expr.exponents, pascal(6));
}

#[test]
fn test_expression_applies_conversion() {
    let expr = match_expression("20°C").result.unwrap();
    assert_eq!(expr.significand, 20.0 + 273.15);
    assert_eq!(expr.exponents, dims(&[(UnitKey::Kelvin, 1)]));
}

#[test]
fn test_expression_failure_position() {
    let out = match_expression("50qPa");
    assert!(!out.success());
    assert_eq!(out.consumed, "50");

    let out = match_expression("50*");
    assert!(!out.success());
    assert_eq!(out.consumed, "50*");

    let out = match_expression("-m");
    assert!(!out.success());
    assert_eq!(out.consumed, "-");
}

#[test]
fn test_expression_leaves_trailing_input() {
    let out = match_expression("5m)");
    assert!(out.success());
    assert_eq!(out.consumed, "5m");
    assert_eq!(out.rest, ")");
}
