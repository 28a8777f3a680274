//! Exact arithmetic at the decimal/rational boundary.
//!
//! Catalog magnitudes and user amounts enter as [`Decimal`]; every
//! intermediate computation runs on [`BigRational`] so that
//! non-terminating ratios (1000/3, foot/yard) never round until the final
//! result is rendered back to a decimal for display.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Highest fractional scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

fn ten_pow(exp: u32) -> BigInt {
    Pow::pow(BigInt::from(10u32), exp)
}

/// Exact rational with the given numerator and denominator.
///
/// Panics on a zero denominator; only used with literal constants.
pub fn frac(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Exact power of ten, `10^exp`, for any sign of `exp`.
pub fn pow10(exp: i32) -> BigRational {
    if exp >= 0 {
        BigRational::from_integer(ten_pow(exp as u32))
    } else {
        BigRational::new(BigInt::one(), ten_pow(exp.unsigned_abs()))
    }
}

/// Convert a decimal to an exact rational. Never loses information.
pub fn to_rational(value: Decimal) -> BigRational {
    BigRational::new(BigInt::from(value.mantissa()), ten_pow(value.scale()))
}

/// Render a rational back to a decimal at the highest scale that fits,
/// rounding half away from zero when the value does not terminate within
/// 28 fractional digits. A magnitude beyond the decimal range is
/// [`Error::Overflow`]; a magnitude too small for the lowest representable
/// place rounds to zero.
pub fn to_decimal(value: &BigRational) -> Result<Decimal> {
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    let negative = value.is_negative();
    let numer = value.numer().abs();
    let denom = value.denom().clone();
    let max_mantissa: BigInt = (BigInt::one() << 96u32) - BigInt::one();
    let two = BigInt::from(2u32);

    for scale in (0..=MAX_SCALE).rev() {
        // round half-up: (2n*10^s + d) / 2d
        let scaled = &numer * ten_pow(scale);
        let mantissa = (scaled * &two + &denom) / (&denom * &two);
        if mantissa <= max_mantissa {
            let mantissa = mantissa.to_i128().ok_or(Error::Overflow)?;
            let mantissa = if negative { -mantissa } else { mantissa };
            let out = Decimal::try_from_i128_with_scale(mantissa, scale)
                .map_err(|_| Error::Overflow)?;
            return Ok(out.normalize());
        }
    }
    Err(Error::Overflow)
}

/// Division with a typed zero-divisor error.
pub fn checked_div(lhs: &BigRational, rhs: &BigRational) -> Result<BigRational> {
    if rhs.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(lhs / rhs)
}

/// Integer power of a rational. A negative exponent inverts the result;
/// zero to a negative power is [`Error::DivisionByZero`].
pub fn pow_i32(base: &BigRational, exponent: i32) -> Result<BigRational> {
    if exponent == 0 {
        return Ok(BigRational::one());
    }
    if base.is_zero() && exponent < 0 {
        return Err(Error::DivisionByZero);
    }
    let mut acc = BigRational::one();
    for _ in 0..exponent.unsigned_abs() {
        acc = acc * base;
    }
    Ok(if exponent < 0 { acc.recip() } else { acc })
}
