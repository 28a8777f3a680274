//! Data model: unit catalog, SI prefixes, temperature scales.

pub mod temperature;
pub mod unit;

pub use temperature::TemperatureUnit;
pub use unit::{Prefix, ResolvedUnit, UnitDef, UnitRegistry, UnitType, PREFIXES, UNITS};
