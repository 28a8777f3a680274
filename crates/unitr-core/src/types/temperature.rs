//! Affine temperature scales.
//!
//! Temperature stays out of the ratio catalog: the map to kelvin carries a
//! nonzero offset, so a cross-multiplied ratio would be meaningless. Each
//! scale defines the affine pair to/from kelvin and every conversion
//! routes through kelvin, keeping the table linear in the number of
//! scales. All constants are exact rationals, so `from(to(x)) == x` holds
//! exactly for every scale.

use num_rational::BigRational;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::exact::{self, frac};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Delisle,
    Fahrenheit,
    GasMark,
    Kelvin,
    Newton,
    Rankine,
    Reaumur,
    Romer,
}

impl TemperatureUnit {
    pub const ALL: &'static [TemperatureUnit] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Delisle,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::GasMark,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Newton,
        TemperatureUnit::Rankine,
        TemperatureUnit::Reaumur,
        TemperatureUnit::Romer,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Delisle => "°De",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::GasMark => "GM",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Newton => "°N",
            TemperatureUnit::Rankine => "°Ra",
            TemperatureUnit::Reaumur => "°Ré",
            TemperatureUnit::Romer => "°Rø",
        }
    }

    /// Parse a scale symbol or name; a leading degree sign is accepted.
    pub fn parse(s: &str) -> Option<TemperatureUnit> {
        let stripped = s.trim().trim_start_matches('°');
        match stripped.to_lowercase().as_str() {
            "c" | "celsius" => Some(TemperatureUnit::Celsius),
            "de" | "delisle" => Some(TemperatureUnit::Delisle),
            "f" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "gm" | "gas mark" | "gasmark" => Some(TemperatureUnit::GasMark),
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            "n" | "newton" => Some(TemperatureUnit::Newton),
            "ra" | "rankine" => Some(TemperatureUnit::Rankine),
            "re" | "ré" | "reaumur" | "réaumur" => Some(TemperatureUnit::Reaumur),
            "ro" | "rø" | "romer" | "rømer" => Some(TemperatureUnit::Romer),
            _ => None,
        }
    }

    /// Map a value on this scale to kelvin.
    pub fn to_kelvin(&self, value: &BigRational) -> BigRational {
        match self {
            TemperatureUnit::Celsius => value + frac(5463, 20),
            TemperatureUnit::Delisle => frac(7463, 20) - value * frac(2, 3),
            TemperatureUnit::Fahrenheit => (value + frac(45967, 100)) * frac(5, 9),
            TemperatureUnit::GasMark => (value * frac(25, 1) + frac(70967, 100)) * frac(5, 9),
            // literal identity, not an algebraically-collapsed formula
            TemperatureUnit::Kelvin => value.clone(),
            TemperatureUnit::Newton => value * frac(100, 33) + frac(5463, 20),
            TemperatureUnit::Rankine => value * frac(5, 9),
            TemperatureUnit::Reaumur => value * frac(5, 4) + frac(5463, 20),
            TemperatureUnit::Romer => (value - frac(15, 2)) * frac(40, 21) + frac(5463, 20),
        }
    }

    /// Map kelvin back to a value on this scale.
    pub fn from_kelvin(&self, kelvin: &BigRational) -> BigRational {
        match self {
            TemperatureUnit::Celsius => kelvin - frac(5463, 20),
            TemperatureUnit::Delisle => (frac(7463, 20) - kelvin) * frac(3, 2),
            TemperatureUnit::Fahrenheit => kelvin * frac(9, 5) - frac(45967, 100),
            TemperatureUnit::GasMark => (kelvin * frac(9, 5) - frac(70967, 100)) * frac(1, 25),
            TemperatureUnit::Kelvin => kelvin.clone(),
            TemperatureUnit::Newton => (kelvin - frac(5463, 20)) * frac(33, 100),
            TemperatureUnit::Rankine => kelvin * frac(9, 5),
            TemperatureUnit::Reaumur => (kelvin - frac(5463, 20)) * frac(4, 5),
            TemperatureUnit::Romer => (kelvin - frac(5463, 20)) * frac(21, 40) + frac(15, 2),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert between two temperature scales, always via kelvin.
pub fn convert(amount: Decimal, from: TemperatureUnit, to: TemperatureUnit) -> Result<Decimal> {
    let kelvin = from.to_kelvin(&exact::to_rational(amount));
    exact::to_decimal(&to.from_kelvin(&kelvin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_celsius_fahrenheit_boundaries() {
        assert_eq!(
            convert(dec!(0), TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit).unwrap(),
            dec!(32)
        );
        assert_eq!(
            convert(dec!(100), TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit).unwrap(),
            dec!(212)
        );
        assert_eq!(
            convert(dec!(-40), TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius).unwrap(),
            dec!(-40)
        );
    }

    #[test]
    fn test_celsius_kelvin() {
        assert_eq!(
            convert(dec!(100), TemperatureUnit::Celsius, TemperatureUnit::Kelvin).unwrap(),
            dec!(373.15)
        );
        assert_eq!(
            convert(dec!(0), TemperatureUnit::Kelvin, TemperatureUnit::Celsius).unwrap(),
            dec!(-273.15)
        );
    }

    #[test]
    fn test_gas_mark() {
        // gas mark 4 is a 350 °F oven
        assert_eq!(
            convert(dec!(4), TemperatureUnit::GasMark, TemperatureUnit::Fahrenheit).unwrap(),
            dec!(350)
        );
    }

    #[test]
    fn test_delisle_is_inverted() {
        // boiling water is 0 °De, melting ice 150 °De
        assert_eq!(
            convert(dec!(0), TemperatureUnit::Delisle, TemperatureUnit::Celsius).unwrap(),
            dec!(100)
        );
        assert_eq!(
            convert(dec!(150), TemperatureUnit::Delisle, TemperatureUnit::Celsius).unwrap(),
            dec!(0)
        );
    }

    #[test]
    fn test_rankine_romer_newton_reaumur() {
        assert_eq!(
            convert(dec!(0), TemperatureUnit::Kelvin, TemperatureUnit::Rankine).unwrap(),
            dec!(0)
        );
        assert_eq!(
            convert(dec!(0), TemperatureUnit::Celsius, TemperatureUnit::Romer).unwrap(),
            dec!(7.5)
        );
        assert_eq!(
            convert(dec!(100), TemperatureUnit::Celsius, TemperatureUnit::Newton).unwrap(),
            dec!(33)
        );
        assert_eq!(
            convert(dec!(100), TemperatureUnit::Celsius, TemperatureUnit::Reaumur).unwrap(),
            dec!(80)
        );
    }

    #[test]
    fn test_round_trip_is_exact_for_every_scale() {
        // exactness checked at the rational layer, where even the
        // non-terminating factors (5/9, 2/3, 40/21) cancel
        let probes = [frac(7, 3), frac(-123, 7), frac(36615, 100)];
        for unit in TemperatureUnit::ALL {
            for probe in &probes {
                let rt = unit.from_kelvin(&unit.to_kelvin(probe));
                assert_eq!(&rt, probe, "{unit} did not round-trip");
            }
        }
    }

    #[test]
    fn test_kelvin_identity_is_literal() {
        let v = frac(1, 3);
        assert_eq!(TemperatureUnit::Kelvin.to_kelvin(&v), v);
        assert_eq!(TemperatureUnit::Kelvin.from_kelvin(&v), v);
    }

    #[test]
    fn test_parse() {
        assert_eq!(TemperatureUnit::parse("°C"), Some(TemperatureUnit::Celsius));
        assert_eq!(TemperatureUnit::parse("fahrenheit"), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(TemperatureUnit::parse("Rø"), Some(TemperatureUnit::Romer));
        assert_eq!(TemperatureUnit::parse("meter"), None);
    }
}
