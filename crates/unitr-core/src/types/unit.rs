//! Unit catalog and SI prefixes.
//!
//! To add a new unit, add an entry to the UNITS table. Lookup, compound
//! expression parsing, and the CLI listing all pick it up automatically.
//! Every `value` is the exact decimal magnitude of one unit in the
//! dimension's base unit (meter, kilogram, second, ...).

use num_rational::BigRational;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::exact;

/// Physical dimension a unit can participate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Length,
    Time,
    Mass,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
    Area,
    Volume,
}

impl UnitType {
    pub const ALL: &'static [UnitType] = &[
        UnitType::Length,
        UnitType::Time,
        UnitType::Mass,
        UnitType::ElectricCurrent,
        UnitType::Temperature,
        UnitType::AmountOfSubstance,
        UnitType::LuminousIntensity,
        UnitType::Area,
        UnitType::Volume,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UnitType::Length => "length",
            UnitType::Time => "time",
            UnitType::Mass => "mass",
            UnitType::ElectricCurrent => "current",
            UnitType::Temperature => "temperature",
            UnitType::AmountOfSubstance => "substance",
            UnitType::LuminousIntensity => "intensity",
            UnitType::Area => "area",
            UnitType::Volume => "volume",
        }
    }

    /// Parse a dimension name as typed on the command line.
    pub fn parse(s: &str) -> Option<UnitType> {
        let lower = s.to_lowercase();
        UnitType::ALL.iter().copied().find(|t| t.label() == lower)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit metadata - single source of truth for each unit.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct UnitDef {
    /// Localizable identifier, opaque to the engine
    pub name: &'static str,
    /// Canonical symbol used for lookup and rendering
    pub symbol: &'static str,
    /// Exact magnitude of one unit in the dimension's base unit
    pub value: Decimal,
    /// Dimension tags this unit can convert within (usually exactly one)
    pub types: &'static [UnitType],
    /// Whether SI prefixes may be prepended (km, µs, ...)
    pub prefixable: bool,
}

/// Built-in catalog. Symbols are unique within a dimension tag; values in
/// the dimension's base unit and always positive.
pub static UNITS: &[UnitDef] = &[
    // Length (base: meter)
    UnitDef {
        name: "meter",
        symbol: "m",
        value: dec!(1),
        types: &[UnitType::Length],
        prefixable: true,
    },
    UnitDef {
        name: "inch",
        symbol: "in",
        value: dec!(0.0254),
        types: &[UnitType::Length],
        prefixable: false,
    },
    UnitDef {
        name: "foot",
        symbol: "ft",
        value: dec!(0.3048),
        types: &[UnitType::Length],
        prefixable: false,
    },
    UnitDef {
        name: "yard",
        symbol: "yd",
        value: dec!(0.9144),
        types: &[UnitType::Length],
        prefixable: false,
    },
    UnitDef {
        name: "mile",
        symbol: "mi",
        value: dec!(1609.344),
        types: &[UnitType::Length],
        prefixable: false,
    },
    UnitDef {
        name: "nautical mile",
        symbol: "nmi",
        value: dec!(1852),
        types: &[UnitType::Length],
        prefixable: false,
    },
    UnitDef {
        name: "astronomical unit",
        symbol: "au",
        value: dec!(149597870700),
        types: &[UnitType::Length],
        prefixable: false,
    },
    UnitDef {
        name: "light-year",
        symbol: "ly",
        value: dec!(9460730472580800),
        types: &[UnitType::Length],
        prefixable: false,
    },
    // Mass (base: kilogram)
    UnitDef {
        name: "gram",
        symbol: "g",
        value: dec!(0.001),
        types: &[UnitType::Mass],
        prefixable: true,
    },
    UnitDef {
        name: "tonne",
        symbol: "t",
        value: dec!(1000),
        types: &[UnitType::Mass],
        prefixable: true,
    },
    UnitDef {
        name: "pound",
        symbol: "lb",
        value: dec!(0.45359237),
        types: &[UnitType::Mass],
        prefixable: false,
    },
    UnitDef {
        name: "ounce",
        symbol: "oz",
        value: dec!(0.028349523125),
        types: &[UnitType::Mass],
        prefixable: false,
    },
    UnitDef {
        name: "stone",
        symbol: "st",
        value: dec!(6.35029318),
        types: &[UnitType::Mass],
        prefixable: false,
    },
    UnitDef {
        name: "long ton",
        symbol: "ton",
        value: dec!(1016.0469088),
        types: &[UnitType::Mass],
        prefixable: false,
    },
    // Tagged for both mass and current contexts so it can participate in
    // either kind of conversion request.
    UnitDef {
        name: "electronvolt",
        symbol: "eV",
        value: dec!(0.0000000000000000001602176634),
        types: &[UnitType::Mass, UnitType::ElectricCurrent],
        prefixable: true,
    },
    // Time (base: second)
    UnitDef {
        name: "second",
        symbol: "s",
        value: dec!(1),
        types: &[UnitType::Time],
        prefixable: true,
    },
    UnitDef {
        name: "minute",
        symbol: "min",
        value: dec!(60),
        types: &[UnitType::Time],
        prefixable: false,
    },
    UnitDef {
        name: "hour",
        symbol: "h",
        value: dec!(3600),
        types: &[UnitType::Time],
        prefixable: false,
    },
    UnitDef {
        name: "day",
        symbol: "d",
        value: dec!(86400),
        types: &[UnitType::Time],
        prefixable: false,
    },
    UnitDef {
        name: "week",
        symbol: "wk",
        value: dec!(604800),
        types: &[UnitType::Time],
        prefixable: false,
    },
    // Julian year; light-year above is the product of this and c
    UnitDef {
        name: "year",
        symbol: "yr",
        value: dec!(31557600),
        types: &[UnitType::Time],
        prefixable: false,
    },
    // Electric current (base: ampere)
    UnitDef {
        name: "ampere",
        symbol: "A",
        value: dec!(1),
        types: &[UnitType::ElectricCurrent],
        prefixable: true,
    },
    // Temperature (base: kelvin) - only the ratio-scaled unit lives here;
    // the affine scales are in the temperature module
    UnitDef {
        name: "kelvin",
        symbol: "K",
        value: dec!(1),
        types: &[UnitType::Temperature],
        prefixable: true,
    },
    // Amount of substance (base: mole)
    UnitDef {
        name: "mole",
        symbol: "mol",
        value: dec!(1),
        types: &[UnitType::AmountOfSubstance],
        prefixable: true,
    },
    // Luminous intensity (base: candela)
    UnitDef {
        name: "candela",
        symbol: "cd",
        value: dec!(1),
        types: &[UnitType::LuminousIntensity],
        prefixable: true,
    },
    // Area (base: square meter)
    UnitDef {
        name: "are",
        symbol: "a",
        value: dec!(100),
        types: &[UnitType::Area],
        prefixable: true,
    },
    UnitDef {
        name: "hectare",
        symbol: "ha",
        value: dec!(10000),
        types: &[UnitType::Area],
        prefixable: false,
    },
    UnitDef {
        name: "acre",
        symbol: "ac",
        value: dec!(4046.8564224),
        types: &[UnitType::Area],
        prefixable: false,
    },
    // Volume (base: cubic meter)
    UnitDef {
        name: "liter",
        symbol: "l",
        value: dec!(0.001),
        types: &[UnitType::Volume],
        prefixable: true,
    },
    UnitDef {
        name: "liter",
        symbol: "L",
        value: dec!(0.001),
        types: &[UnitType::Volume],
        prefixable: true,
    },
    UnitDef {
        name: "US gallon",
        symbol: "gal",
        value: dec!(0.003785411784),
        types: &[UnitType::Volume],
        prefixable: false,
    },
    UnitDef {
        name: "US pint",
        symbol: "pt",
        value: dec!(0.000473176473),
        types: &[UnitType::Volume],
        prefixable: false,
    },
];

/// SI prefix, quetta down to quecto.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Prefix {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Power of ten
    pub exponent: i32,
    /// Alternate spellings accepted on input ("u" for µ)
    pub aliases: &'static [&'static str],
}

impl Prefix {
    /// Exact multiplier, `10^exponent`.
    pub fn factor(&self) -> BigRational {
        exact::pow10(self.exponent)
    }
}

/// Full SI prefix table, descending by exponent so that two-character
/// symbols ("da") win over their one-character prefixes ("d") on lookup.
pub static PREFIXES: &[Prefix] = &[
    Prefix { name: "quetta", symbol: "Q", exponent: 30, aliases: &[] },
    Prefix { name: "ronna", symbol: "R", exponent: 27, aliases: &[] },
    Prefix { name: "yotta", symbol: "Y", exponent: 24, aliases: &[] },
    Prefix { name: "zetta", symbol: "Z", exponent: 21, aliases: &[] },
    Prefix { name: "exa", symbol: "E", exponent: 18, aliases: &[] },
    Prefix { name: "peta", symbol: "P", exponent: 15, aliases: &[] },
    Prefix { name: "tera", symbol: "T", exponent: 12, aliases: &[] },
    Prefix { name: "giga", symbol: "G", exponent: 9, aliases: &[] },
    Prefix { name: "mega", symbol: "M", exponent: 6, aliases: &[] },
    Prefix { name: "kilo", symbol: "k", exponent: 3, aliases: &[] },
    Prefix { name: "hecto", symbol: "h", exponent: 2, aliases: &[] },
    Prefix { name: "deca", symbol: "da", exponent: 1, aliases: &[] },
    Prefix { name: "deci", symbol: "d", exponent: -1, aliases: &[] },
    Prefix { name: "centi", symbol: "c", exponent: -2, aliases: &[] },
    Prefix { name: "milli", symbol: "m", exponent: -3, aliases: &[] },
    Prefix { name: "micro", symbol: "µ", exponent: -6, aliases: &["u"] },
    Prefix { name: "nano", symbol: "n", exponent: -9, aliases: &[] },
    Prefix { name: "pico", symbol: "p", exponent: -12, aliases: &[] },
    Prefix { name: "femto", symbol: "f", exponent: -15, aliases: &[] },
    Prefix { name: "atto", symbol: "a", exponent: -18, aliases: &[] },
    Prefix { name: "zepto", symbol: "z", exponent: -21, aliases: &[] },
    Prefix { name: "yocto", symbol: "y", exponent: -24, aliases: &[] },
    Prefix { name: "ronto", symbol: "r", exponent: -27, aliases: &[] },
    Prefix { name: "quecto", symbol: "q", exponent: -30, aliases: &[] },
];

/// A catalog unit together with an optional SI prefix, as produced by
/// registry lookup. Cheap to copy; the referenced definitions are static.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedUnit {
    pub def: &'static UnitDef,
    pub prefix: Option<&'static Prefix>,
}

impl ResolvedUnit {
    pub fn plain(def: &'static UnitDef) -> Self {
        Self { def, prefix: None }
    }

    /// Exact magnitude in the base unit, prefix applied.
    pub fn value(&self) -> BigRational {
        let base = exact::to_rational(self.def.value);
        match self.prefix {
            Some(p) => base * p.factor(),
            None => base,
        }
    }

    /// True when the two units share at least one dimension tag.
    pub fn same_dimension(&self, other: &ResolvedUnit) -> bool {
        self.def.types.iter().any(|t| other.def.types.contains(t))
    }
}

impl fmt::Display for ResolvedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) = self.prefix {
            write!(f, "{}", p.symbol)?;
        }
        f.write_str(self.def.symbol)
    }
}

/// Immutable unit registry. Constructed explicitly so the engine never
/// leans on import-time globals; [`UnitRegistry::standard`] wires up the
/// built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct UnitRegistry {
    units: &'static [UnitDef],
    prefixes: &'static [Prefix],
}

impl UnitRegistry {
    pub const fn new(units: &'static [UnitDef], prefixes: &'static [Prefix]) -> Self {
        Self { units, prefixes }
    }

    pub fn standard() -> Self {
        Self::new(UNITS, PREFIXES)
    }

    /// Iterate over every unit definition.
    pub fn iter(&self) -> impl Iterator<Item = &'static UnitDef> {
        self.units.iter()
    }

    /// Iterate over the definitions carrying the given dimension tag.
    pub fn by_type(&self, ty: UnitType) -> impl Iterator<Item = &'static UnitDef> {
        self.units.iter().filter(move |d| d.types.contains(&ty))
    }

    /// Resolve a symbol, trying the bare catalog first and prefixed forms
    /// second, so "min" is a minute rather than a milli-inch.
    pub fn find(&self, symbol: &str) -> Result<ResolvedUnit> {
        self.resolve(symbol, None)
    }

    /// Resolve a symbol within one dimension. Disambiguates symbols reused
    /// across dimensions by the context of the conversion request.
    pub fn find_in(&self, symbol: &str, ty: UnitType) -> Result<ResolvedUnit> {
        self.resolve(symbol, Some(ty))
    }

    fn resolve(&self, symbol: &str, ty: Option<UnitType>) -> Result<ResolvedUnit> {
        let matches_ty = |def: &UnitDef| ty.map_or(true, |t| def.types.contains(&t));

        if let Some(def) = self
            .units
            .iter()
            .find(|d| d.symbol == symbol && matches_ty(d))
        {
            return Ok(ResolvedUnit::plain(def));
        }

        for prefix in self.prefixes {
            let spellings = std::iter::once(prefix.symbol).chain(prefix.aliases.iter().copied());
            for spelling in spellings {
                let Some(rest) = symbol.strip_prefix(spelling) else {
                    continue;
                };
                if rest.is_empty() {
                    continue;
                }
                if let Some(def) = self.units.iter().find(|d| d.symbol == rest && matches_ty(d)) {
                    if !def.prefixable {
                        return Err(Error::NotPrefixable(symbol.to_string()));
                    }
                    return Ok(ResolvedUnit { def, prefix: Some(prefix) });
                }
            }
        }

        Err(Error::UnknownUnit(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    fn registry() -> UnitRegistry {
        UnitRegistry::standard()
    }

    #[test]
    fn test_catalog_invariants() {
        for def in UNITS {
            assert!(!def.name.is_empty());
            assert!(!def.symbol.is_empty());
            assert!(def.value > Decimal::ZERO, "{} has no magnitude", def.symbol);
            assert!(!def.types.is_empty(), "{} has no dimension", def.symbol);
        }
        // symbols unique within each dimension tag
        for ty in UnitType::ALL {
            let mut seen = std::collections::HashSet::new();
            for def in UNITS.iter().filter(|d| d.types.contains(ty)) {
                assert!(seen.insert(def.symbol), "duplicate {} in {ty}", def.symbol);
            }
        }
    }

    #[test]
    fn test_find_bare_symbol() {
        let m = registry().find("m").unwrap();
        assert_eq!(m.def.name, "meter");
        assert!(m.prefix.is_none());
    }

    #[test]
    fn test_find_prefixed_symbol() {
        let km = registry().find("km").unwrap();
        assert_eq!(km.def.name, "meter");
        assert_eq!(km.prefix.unwrap().name, "kilo");
        assert_eq!(km.value(), exact::frac(1000, 1));
        assert_eq!(km.to_string(), "km");
    }

    #[test]
    fn test_exact_match_beats_prefix_split() {
        // "min" must be the minute, never milli-inch
        assert_eq!(registry().find("min").unwrap().def.name, "minute");
        // "h" is the hour even though it is also the hecto prefix
        assert_eq!(registry().find("h").unwrap().def.name, "hour");
        // "yd" is the yard, not a yocto-day
        assert_eq!(registry().find("yd").unwrap().def.name, "yard");
    }

    #[test]
    fn test_two_character_prefix_wins() {
        let dam = registry().find("dam").unwrap();
        assert_eq!(dam.prefix.unwrap().name, "deca");
        assert_eq!(dam.value(), exact::frac(10, 1));
    }

    #[test]
    fn test_micro_alias() {
        let mu = registry().find("µs").unwrap();
        let u = registry().find("us").unwrap();
        assert_eq!(mu.value(), u.value());
        assert_eq!(mu.value(), exact::frac(1, 1_000_000));
    }

    #[test]
    fn test_unknown_and_not_prefixable() {
        assert_eq!(
            registry().find("xyz"),
            Err(Error::UnknownUnit("xyz".into()))
        );
        assert_eq!(
            registry().find("kmi"),
            Err(Error::NotPrefixable("kmi".into()))
        );
    }

    #[test]
    fn test_find_in_dimension() {
        assert!(registry().find_in("m", UnitType::Length).is_ok());
        assert_eq!(
            registry().find_in("m", UnitType::Mass),
            Err(Error::UnknownUnit("m".into()))
        );
    }

    #[test]
    fn test_multi_dimension_unit() {
        let ev = registry().find("eV").unwrap();
        let g = registry().find_in("g", UnitType::Mass).unwrap();
        let amp = registry().find_in("A", UnitType::ElectricCurrent).unwrap();
        assert!(ev.same_dimension(&g));
        assert!(ev.same_dimension(&amp));
        assert!(!g.same_dimension(&amp));
    }

    #[test]
    fn test_extreme_prefixes_stay_exact() {
        // quetta and quecto exceed Decimal's range but the rational
        // magnitude itself never rounds
        let qm = registry().find("Qm").unwrap();
        let tiny = registry().find("qm").unwrap();
        assert!(!qm.value().is_zero());
        assert_eq!(qm.value() * tiny.value(), exact::frac(1, 1));
    }
}
