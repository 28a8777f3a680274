//! Compound-unit operator algebra.
//!
//! A closed sum type over the four node shapes (single unit, product,
//! quotient, integer power). Every node resolves to an exact magnitude,
//! compares structurally, checks dimensional compatibility, and renders
//! infix notation with Unicode exponents.

use num_rational::BigRational;
use std::fmt;

use crate::error::Result;
use crate::exact;
use crate::types::ResolvedUnit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitExpr {
    Single(ResolvedUnit),
    Mul(Box<UnitExpr>, Box<UnitExpr>),
    Div(Box<UnitExpr>, Box<UnitExpr>),
    Exp(Box<UnitExpr>, i32),
}

impl UnitExpr {
    pub fn single(unit: ResolvedUnit) -> Self {
        UnitExpr::Single(unit)
    }

    pub fn mul(left: UnitExpr, right: UnitExpr) -> Self {
        UnitExpr::Mul(Box::new(left), Box::new(right))
    }

    pub fn div(top: UnitExpr, bottom: UnitExpr) -> Self {
        UnitExpr::Div(Box::new(top), Box::new(bottom))
    }

    pub fn exp(base: UnitExpr, exponent: i32) -> Self {
        UnitExpr::Exp(Box::new(base), exponent)
    }

    /// Resolved exact magnitude, applying each node's operator to its
    /// children. `Exp` raises the base magnitude to the exponent, so km²
    /// resolves to 10⁶ square meters.
    pub fn value(&self) -> Result<BigRational> {
        match self {
            UnitExpr::Single(unit) => Ok(unit.value()),
            UnitExpr::Mul(left, right) => Ok(left.value()? * right.value()?),
            UnitExpr::Div(top, bottom) => exact::checked_div(&top.value()?, &bottom.value()?),
            UnitExpr::Exp(base, exponent) => exact::pow_i32(&base.value()?, *exponent),
        }
    }

    /// Dimensional compatibility: same node shape recursively, with
    /// dimension-tag overlap at the leaves. Looser than equality, so m/s
    /// is compatible with km/h without the units being identical.
    pub fn compatible(&self, other: &UnitExpr) -> bool {
        match (self, other) {
            (UnitExpr::Single(a), UnitExpr::Single(b)) => a.same_dimension(b),
            (UnitExpr::Mul(a, b), UnitExpr::Mul(c, d)) => a.compatible(c) && b.compatible(d),
            (UnitExpr::Div(a, b), UnitExpr::Div(c, d)) => a.compatible(c) && b.compatible(d),
            (UnitExpr::Exp(a, n), UnitExpr::Exp(b, m)) => n == m && a.compatible(b),
            _ => false,
        }
    }
}

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Render an exponent with Unicode superscripts, `⁻` for negative.
pub(crate) fn superscript(exponent: i32) -> String {
    let mut out = String::new();
    if exponent < 0 {
        out.push('⁻');
    }
    for digit in exponent.unsigned_abs().to_string().chars() {
        out.push(SUPERSCRIPT_DIGITS[digit as usize - '0' as usize]);
    }
    out
}

impl fmt::Display for UnitExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitExpr::Single(unit) => write!(f, "{unit}"),
            UnitExpr::Mul(left, right) => write!(f, "{left}⋅{right}"),
            UnitExpr::Div(top, bottom) => write!(f, "{top}/{bottom}"),
            // exponent one elides the marker entirely
            UnitExpr::Exp(base, 1) => write!(f, "{base}"),
            UnitExpr::Exp(base, exponent) => write!(f, "{base}{}", superscript(*exponent)),
        }
    }
}
