//! unitr-cli - command-line front end for the conversion engine.
//!
//! Usage:
//!   unitr-cli convert 2 km mi
//!   unitr-cli convert 100 C F          # temperature scales
//!   unitr-cli convert 1 "m/s" "km/h"   # compound units
//!   unitr-cli units --dimension length
//!   unitr-cli parse "m/s²"

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use unitr_core::{
    convert_expr, convert_temperature, parse_expr, TemperatureUnit, UnitDef, UnitRegistry,
    UnitType,
};

#[derive(Parser, Debug)]
#[command(name = "unitr-cli")]
#[command(about = "Exact unit conversions", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an amount between two units or temperature scales
    Convert {
        amount: Decimal,
        from: String,
        to: String,
    },
    /// Convert between temperature scales only
    Temp {
        amount: Decimal,
        from: String,
        to: String,
    },
    /// List the unit catalog
    Units {
        /// Restrict to one dimension (length, mass, time, ...)
        #[arg(short, long)]
        dimension: Option<String>,
    },
    /// Parse a compound-unit expression and print its normalized form
    Parse { expression: String },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let registry = UnitRegistry::standard();

    match args.command {
        Command::Convert { amount, from, to } => {
            let scales = (TemperatureUnit::parse(&from), TemperatureUnit::parse(&to));
            if let (Some(f), Some(t)) = scales {
                let result = convert_temperature(amount, f, t)?;
                println!("{amount} {f} = {result} {t}");
            } else {
                let from_expr = parse_expr(&registry, &from)?;
                let to_expr = parse_expr(&registry, &to)?;
                let result = convert_expr(amount, &from_expr, &to_expr)?;
                println!("{amount} {from_expr} = {result} {to_expr}");
            }
        }
        Command::Temp { amount, from, to } => {
            let Some(f) = TemperatureUnit::parse(&from) else {
                bail!("unknown temperature scale '{from}'");
            };
            let Some(t) = TemperatureUnit::parse(&to) else {
                bail!("unknown temperature scale '{to}'");
            };
            let result = convert_temperature(amount, f, t)?;
            println!("{amount} {f} = {result} {t}");
        }
        Command::Units { dimension } => match dimension {
            Some(d) => {
                let Some(ty) = UnitType::parse(&d) else {
                    bail!("unknown dimension '{d}'");
                };
                for def in registry.by_type(ty) {
                    print_unit(def);
                }
            }
            None => {
                for def in registry.iter() {
                    print_unit(def);
                }
            }
        },
        Command::Parse { expression } => {
            let expr = parse_expr(&registry, &expression)?;
            println!("{expr}");
        }
    }

    Ok(())
}

fn print_unit(def: &UnitDef) {
    let prefixes = if def.prefixable { "  (SI prefixes)" } else { "" };
    println!("{:<6} {:<18} {}{prefixes}", def.symbol, def.name, def.value);
}
