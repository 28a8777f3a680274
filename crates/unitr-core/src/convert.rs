//! Conversion operations over the catalog and the operator algebra.
//!
//! Dimension checks always run before any arithmetic: a mismatch is
//! rejected outright rather than producing a meaningless cross-dimension
//! ratio.

use num_rational::BigRational;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::exact;
use crate::expr::UnitExpr;
use crate::types::{temperature, ResolvedUnit, TemperatureUnit};

/// Exact ratio between two units sharing a dimension tag. Because both
/// magnitudes are expressed in the same base unit, the ratio is exact no
/// matter how far apart the magnitudes are.
pub fn ratio(from: ResolvedUnit, to: ResolvedUnit) -> Result<BigRational> {
    if !from.same_dimension(&to) {
        return Err(Error::MismatchingDimensions {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    exact::checked_div(&from.value(), &to.value())
}

/// Convert an amount between two ratio-scaled units of the same
/// dimension. Temperature scales are affine and go through
/// [`convert_temperature`] instead.
pub fn convert_ratio(amount: Decimal, from: ResolvedUnit, to: ResolvedUnit) -> Result<Decimal> {
    let ratio = ratio(from, to)?;
    exact::to_decimal(&(exact::to_rational(amount) * ratio))
}

/// Convert between temperature scales, routed through kelvin.
pub fn convert_temperature(
    amount: Decimal,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<Decimal> {
    temperature::convert(amount, from, to)
}

/// Convert between two compound-unit expressions of compatible shape.
pub fn convert_expr(amount: Decimal, from: &UnitExpr, to: &UnitExpr) -> Result<Decimal> {
    if !from.compatible(to) {
        return Err(Error::MismatchingDimensions {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    let ratio = exact::checked_div(&from.value()?, &to.value()?)?;
    exact::to_decimal(&(exact::to_rational(amount) * ratio))
}

/// Speed composite: length over time on both sides. Speed is not a
/// first-class dimension; this is the quotient-of-quotients shape of the
/// operator algebra exercised directly.
pub fn convert_speed(
    amount: Decimal,
    from_length: ResolvedUnit,
    from_time: ResolvedUnit,
    to_length: ResolvedUnit,
    to_time: ResolvedUnit,
) -> Result<Decimal> {
    let length_ratio = ratio(from_length, to_length)?;
    let time_ratio = ratio(from_time, to_time)?;
    let ratio = exact::checked_div(&length_ratio, &time_ratio)?;
    exact::to_decimal(&(exact::to_rational(amount) * ratio))
}

/// A single conversion request. A missing amount means "what is one X in
/// Y" and defaults to one.
#[derive(Debug, Clone, Copy)]
pub struct ConversionRequest {
    pub amount: Option<Decimal>,
    pub from: ResolvedUnit,
    pub to: ResolvedUnit,
}

impl ConversionRequest {
    pub fn run(&self) -> Result<Decimal> {
        convert_ratio(self.amount.unwrap_or(Decimal::ONE), self.from, self.to)
    }
}
