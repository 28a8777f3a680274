//! Compound-unit expressions end to end: parse, render, convert.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use unitr_core::{convert_expr, convert_speed, parse_expr, Error, UnitExpr, UnitRegistry};

fn registry() -> UnitRegistry {
    UnitRegistry::standard()
}

fn parse(input: &str) -> UnitExpr {
    parse_expr(&registry(), input).unwrap()
}

#[test]
fn speed_one_meter_per_second_is_3_6_kmh() {
    let from = parse("m/s");
    let to = parse("km/h");
    assert_eq!(convert_expr(dec!(1), &from, &to).unwrap(), dec!(3.6));
}

#[test]
fn speed_composite_matches_expression_form() {
    let reg = registry();
    let composite = convert_speed(
        dec!(90),
        reg.find("km").unwrap(),
        reg.find("h").unwrap(),
        reg.find("m").unwrap(),
        reg.find("s").unwrap(),
    )
    .unwrap();
    let via_exprs = convert_expr(dec!(90), &parse("km/h"), &parse("m/s")).unwrap();
    assert_eq!(composite, via_exprs);
    assert_eq!(composite, dec!(25));
}

#[test]
fn acceleration_uses_the_exponent() {
    // 1 m/s² in km/h²: 3600² hours-squared factor over 1000
    let result = convert_expr(dec!(1), &parse("m/s²"), &parse("km/h²")).unwrap();
    assert_eq!(result, dec!(12960));
}

#[test]
fn area_via_squared_length() {
    let result = convert_expr(dec!(1), &parse("km²"), &parse("m²")).unwrap();
    assert_eq!(result, dec!(1000000));
}

#[test]
fn prefixed_units_inside_expressions() {
    let result = convert_expr(dec!(1), &parse("km/ms"), &parse("m/s")).unwrap();
    assert_eq!(result, dec!(1000000));
}

#[test]
fn incompatible_shapes_are_rejected() {
    let err = convert_expr(dec!(1), &parse("m/s"), &parse("m⋅s")).unwrap_err();
    assert!(matches!(err, Error::MismatchingDimensions { .. }));

    let err = convert_expr(dec!(1), &parse("m/s"), &parse("kg/s")).unwrap_err();
    assert!(matches!(err, Error::MismatchingDimensions { .. }));
}

#[test]
fn unknown_symbol_inside_expression() {
    assert_eq!(
        parse_expr(&registry(), "m/banana"),
        Err(Error::UnknownUnit("banana".into()))
    );
}

#[test]
fn rendering_matches_the_input_notation() {
    for (input, rendered) in [
        ("m/s^2", "m/s²"),
        ("kg*K", "kg⋅K"),
        ("kg K", "kg⋅K"),
        ("s^-1", "s⁻¹"),
        ("m^1", "m"),
    ] {
        assert_eq!(parse(input).to_string(), rendered);
    }
}
