//! Error taxonomy for the conversion engine.
//!
//! Every operation returns these as values; nothing panics and nothing is
//! retried - each error is a deterministic function of its inputs.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown unit symbol '{0}'")]
    UnknownUnit(String),

    #[error("unit '{0}' does not allow SI prefixes")]
    NotPrefixable(String),

    #[error("mismatching dimensions: '{from}' vs '{to}'")]
    MismatchingDimensions { from: String, to: String },

    #[error("invalid unit expression at byte {pos}")]
    Syntax { pos: usize },

    #[error("result out of range for a decimal value")]
    Overflow,
}
