//! Low-level nom parser functions for description values.
//!
//! This module provides composable parser functions for lengths, percentages,
//! hex colors and numbers, plus the high-level `parse_*` wrappers that turn
//! a whole string into a value or a [`StyleParseError`].

use crate::symbol::Symbolic;
use folio_types::{Color, Length};
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{char, digit1, one_of, space0};
use nom::combinator::{map, map_res, opt, recognize};
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};
use thiserror::Error;

pub const MM_PER_INCH: f32 = 25.4;
/// TeX point: 1/72.27 inch.
pub const MM_PER_POINT: f32 = MM_PER_INCH / 72.27;

/// Errors that can occur during value parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Value {value} is outside [{min}, {max}]")]
    OutOfRange { value: f32, min: f32, max: f32 },

    #[error("Unknown name '{value}', expected one of {expected}")]
    UnknownSymbol { value: String, expected: String },
}

// --- Number Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Length Parsers ---

/// Parses a unit suffix into its size in mm.
fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        map(tag_no_case("mm"), |_| 1.0_f32),
        map(tag_no_case("cm"), |_| 10.0),
        map(tag_no_case("dm"), |_| 100.0),
        map(tag_no_case("in"), |_| MM_PER_INCH),
        map(tag_no_case("pt"), |_| MM_PER_POINT),
    ))
    .parse(input)
}

fn parse_percentage(input: &str) -> IResult<&str, f32> {
    map(terminated(parse_f32, (space0, char('%'))), |value| {
        value / 100.0
    })
    .parse(input)
}

/// Parses a length: `"50%"`, `"12mm"`, `"1.5in"` or a bare number of mm.
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    alt((
        map(parse_percentage, Length::Proportional),
        map((parse_f32, space0, opt(parse_unit)), |(value, _, unit)| {
            Length::Absolute(value * unit.unwrap_or(1.0))
        }),
    ))
    .parse(input)
}

/// Parses a ratio given either as `"25%"` or as a bare fraction.
pub fn parse_ratio(input: &str) -> IResult<&str, f32> {
    alt((parse_percentage, parse_f32)).parse(input)
}

// --- Color Parsers ---

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |s: &str| u8::from_str_radix(s, 16),
    )
    .parse(input)
}

/// Parses a `#RRGGBB` hex color.
pub fn parse_hex_color(input: &str) -> IResult<&str, Color> {
    map(
        preceded(char('#'), (hex_primary, hex_primary, hex_primary)),
        |(r, g, b)| Color::rgb(r, g, b),
    )
    .parse(input)
}

/// Helper to run a nom parser over a whole string and convert its result to a
/// `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// Rejects values outside `[0, 1]`.
pub fn check_unit_interval(value: f32) -> Result<f32, StyleParseError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(StyleParseError::OutOfRange {
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

// --- High-level Parse Functions ---

pub fn parse_float(s: &str) -> Result<f32, StyleParseError> {
    run_parser(parse_f32, s)
}

/// Parses a length; proportional lengths must lie in `[0%, 100%]`.
pub fn parse_length_value(s: &str) -> Result<Length, StyleParseError> {
    match run_parser(parse_length, s)? {
        Length::Proportional(fraction) => check_unit_interval(fraction).map(Length::Proportional),
        absolute => Ok(absolute),
    }
}

/// Parses a ratio constrained to `[0, 1]`.
pub fn parse_percent(s: &str) -> Result<f32, StyleParseError> {
    check_unit_interval(run_parser(parse_ratio, s)?)
}

pub fn parse_color(s: &str) -> Result<Color, StyleParseError> {
    run_parser(parse_hex_color, s)
}

/// Accepts only `true` and `false` (in any letter case).
pub fn parse_bool(s: &str) -> Result<bool, StyleParseError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(StyleParseError::InvalidValue(s.to_string())),
    }
}

pub fn parse_symbol<T: Symbolic>(s: &str) -> Result<T, StyleParseError> {
    T::from_name(s).ok_or_else(|| StyleParseError::UnknownSymbol {
        value: s.to_string(),
        expected: T::expected(),
    })
}
