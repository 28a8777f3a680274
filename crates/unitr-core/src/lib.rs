//! unitr-core: exact-decimal unit conversion engine.
//!
//! Pure logic for resolving unit symbols, parsing compound-unit
//! expressions (`m/s²`, `kg⋅K`) and converting amounts between units
//! without binary floating point: amounts enter and leave as
//! [`rust_decimal::Decimal`] and everything in between runs on exact
//! rational arithmetic. No I/O and no shared state, so the engine drops
//! into CLI, bot, or WASM contexts alike.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use unitr_core::{convert_ratio, UnitRegistry};
//!
//! let registry = UnitRegistry::standard();
//! let km = registry.find("km").unwrap();
//! let m = registry.find("m").unwrap();
//!
//! let result = convert_ratio(Decimal::ONE, km, m).unwrap();
//! assert_eq!(result, Decimal::from(1000));
//! ```

pub mod convert;
pub mod error;
pub mod exact;
pub mod expr;
pub mod parser;
pub mod types;

pub use convert::{
    convert_expr, convert_ratio, convert_speed, convert_temperature, ratio, ConversionRequest,
};
pub use error::{Error, Result};
pub use expr::UnitExpr;
pub use parser::parse_expr;
pub use types::{
    Prefix, ResolvedUnit, TemperatureUnit, UnitDef, UnitRegistry, UnitType, PREFIXES, UNITS,
};
