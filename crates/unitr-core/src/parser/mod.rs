//! Compound-unit expression parsing.
//!
//! A hand-rolled scanner plus a left-to-right precedence parser for
//! strings like `m/s²`, `kg⋅K`, `kg*K`, `kg K` (implicit multiply) and
//! ASCII exponents `m^2` / `s^-1`. Exponents bind tighter than `*` and
//! `/` and attach to the unit immediately before them; `*` and `/` are
//! left-associative.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{Error, Result};
use crate::expr::UnitExpr;
use crate::types::UnitRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Symbol { text: String, pos: usize },
    Mul { pos: usize },
    Div { pos: usize },
    Exponent { value: i32, pos: usize },
}

/// Parse a compound-unit expression against the given registry.
pub fn parse_expr(registry: &UnitRegistry, input: &str) -> Result<UnitExpr> {
    let tokens = scan(input)?;
    let end = input.len();
    let mut iter = tokens.iter().peekable();

    let mut node = parse_term(registry, &mut iter, end)?;
    loop {
        let divide = match iter.peek() {
            None => break,
            Some(Token::Mul { .. }) => {
                iter.next();
                false
            }
            Some(Token::Div { .. }) => {
                iter.next();
                true
            }
            // adjacent symbols multiply: "kg K"
            Some(Token::Symbol { .. }) => false,
            Some(Token::Exponent { pos, .. }) => return Err(Error::Syntax { pos: *pos }),
        };
        let rhs = parse_term(registry, &mut iter, end)?;
        node = if divide {
            UnitExpr::div(node, rhs)
        } else {
            UnitExpr::mul(node, rhs)
        };
    }
    Ok(node)
}

/// One unit symbol with an optional exponent bound to it.
fn parse_term<'a, I>(
    registry: &UnitRegistry,
    iter: &mut Peekable<I>,
    end: usize,
) -> Result<UnitExpr>
where
    I: Iterator<Item = &'a Token>,
{
    let mut node = match iter.next() {
        Some(Token::Symbol { text, .. }) => UnitExpr::single(registry.find(text)?),
        Some(Token::Mul { pos } | Token::Div { pos } | Token::Exponent { pos, .. }) => {
            return Err(Error::Syntax { pos: *pos })
        }
        None => return Err(Error::Syntax { pos: end }),
    };
    if let Some(Token::Exponent { value, .. }) = iter.peek() {
        let exponent = *value;
        iter.next();
        node = UnitExpr::exp(node, exponent);
    }
    Ok(node)
}

fn scan(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '*' | '⋅' | '·' => {
                chars.next();
                tokens.push(Token::Mul { pos });
            }
            '/' => {
                chars.next();
                tokens.push(Token::Div { pos });
            }
            '^' => {
                chars.next();
                tokens.push(scan_ascii_exponent(&mut chars, pos)?);
            }
            c if is_superscript(c) => {
                tokens.push(scan_superscript_exponent(&mut chars, pos)?);
            }
            _ => {
                let mut text = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    let boundary = c.is_whitespace()
                        || matches!(c, '*' | '⋅' | '·' | '/' | '^')
                        || is_superscript(c);
                    if boundary {
                        break;
                    }
                    text.push(c);
                    chars.next();
                }
                tokens.push(Token::Symbol { text, pos });
            }
        }
    }
    Ok(tokens)
}

/// `^` form: optional minus sign, then ASCII digits.
fn scan_ascii_exponent(chars: &mut Peekable<CharIndices<'_>>, pos: usize) -> Result<Token> {
    let mut text = String::new();
    if let Some(&(_, '-')) = chars.peek() {
        text.push('-');
        chars.next();
    }
    while let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_digit() {
            text.push(c);
            chars.next();
        } else {
            break;
        }
    }
    if text.is_empty() || text == "-" {
        return Err(Error::Syntax { pos });
    }
    let value = text.parse().map_err(|_| Error::Syntax { pos })?;
    Ok(Token::Exponent { value, pos })
}

/// Unicode superscript run: optional `⁻`, then superscript digits.
fn scan_superscript_exponent(
    chars: &mut Peekable<CharIndices<'_>>,
    pos: usize,
) -> Result<Token> {
    let mut negative = false;
    if let Some(&(_, '⁻')) = chars.peek() {
        negative = true;
        chars.next();
    }
    let mut value: i64 = 0;
    let mut any = false;
    while let Some(&(_, c)) = chars.peek() {
        let Some(digit) = superscript_digit(c) else {
            break;
        };
        value = value * 10 + i64::from(digit);
        if value > i64::from(i32::MAX) {
            return Err(Error::Syntax { pos });
        }
        any = true;
        chars.next();
    }
    if !any {
        return Err(Error::Syntax { pos });
    }
    let value = if negative { -value } else { value };
    Ok(Token::Exponent { value: value as i32, pos })
}

fn is_superscript(c: char) -> bool {
    c == '⁻' || superscript_digit(c).is_some()
}

fn superscript_digit(c: char) -> Option<u32> {
    match c {
        '⁰' => Some(0),
        '¹' => Some(1),
        '²' => Some(2),
        '³' => Some(3),
        '⁴' => Some(4),
        '⁵' => Some(5),
        '⁶' => Some(6),
        '⁷' => Some(7),
        '⁸' => Some(8),
        '⁹' => Some(9),
        _ => None,
    }
}
