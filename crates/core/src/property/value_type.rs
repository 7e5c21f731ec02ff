//! Value grammars: turn a raw description value into a typed [`Value`].

use crate::value::{RawValue, Resource, Value, scalar_text};
use folio_style::parsers::{
    check_unit_interval, parse_bool, parse_color, parse_float, parse_length_value, parse_percent,
    parse_symbol,
};
use folio_style::{
    BorderStyle, BorderWidth, FitMode, FontSize, LineWidth, Orientation, PageFormat, Shadow,
    Symbolic, lookup_named_color, normalize_color_name,
};
use folio_traits::{FontRegistry, PathResolver, normalize_font_name};
use folio_types::{Anchor, Color, Length};
use itertools::Itertools;
use std::collections::HashMap;

/// The closed symbolic sets a property can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolSet {
    Fit,
    Anchor,
    FontSize,
    BorderStyle,
    BorderWidth,
    Shadow,
    Orientation,
}

impl SymbolSet {
    fn parse(self, text: &str) -> Option<Value> {
        match self {
            SymbolSet::Fit => parse_symbol::<FitMode>(text).ok().map(Value::Fit),
            SymbolSet::Anchor => parse_symbol::<Anchor>(text).ok().map(Value::Anchor),
            SymbolSet::FontSize => parse_symbol::<FontSize>(text).ok().map(Value::FontSize),
            SymbolSet::BorderStyle => parse_symbol::<BorderStyle>(text)
                .ok()
                .map(Value::BorderStyle),
            SymbolSet::BorderWidth => parse_symbol::<BorderWidth>(text)
                .ok()
                .map(|w| Value::LineWidth(LineWidth::Named(w))),
            SymbolSet::Shadow => parse_symbol::<Shadow>(text).ok().map(Value::Shadow),
            SymbolSet::Orientation => parse_symbol::<Orientation>(text)
                .ok()
                .map(Value::Orientation),
        }
    }

    fn names(self) -> String {
        match self {
            SymbolSet::Fit => FitMode::expected(),
            SymbolSet::Anchor => Anchor::expected(),
            SymbolSet::FontSize => FontSize::expected(),
            SymbolSet::BorderStyle => BorderStyle::expected(),
            SymbolSet::BorderWidth => BorderWidth::expected(),
            SymbolSet::Shadow => Shadow::expected(),
            SymbolSet::Orientation => Orientation::expected(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueType {
    String,
    Bool,
    Float,
    Length,
    /// A fraction in `[0, 1]`, written as `0.3` or `30%`.
    Percent,
    Color,
    Resource,
    Font,
    Format,
    Symbol(SymbolSet),
    /// Tries each branch in order; the first success wins.
    Union(&'static [ValueType]),
}

/// Lookup tables a value may be checked against.
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    pub colors: &'a HashMap<String, Color>,
    pub paths: &'a dyn PathResolver,
    pub fonts: &'a dyn FontRegistry,
}

/// Why a raw value was rejected by a [`ValueType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    Invalid { expected: String },
    NotFound,
    UnknownFont,
}

impl ValueType {
    /// Description of the accepted grammar, used in error messages.
    pub fn expected(&self) -> String {
        match self {
            ValueType::String => "a string".to_string(),
            ValueType::Bool => "true or false".to_string(),
            ValueType::Float => "a number".to_string(),
            ValueType::Length => "a length (mm, cm, dm, in, pt or a percentage)".to_string(),
            ValueType::Percent => "a percentage between 0% and 100%".to_string(),
            ValueType::Color => "a color name or #rrggbb".to_string(),
            ValueType::Resource => "a path".to_string(),
            ValueType::Font => "a font family name".to_string(),
            ValueType::Format => format!("one of {}", PageFormat::names().join(", ")),
            ValueType::Symbol(set) => format!("one of {}", set.names()),
            ValueType::Union(branches) => format!(
                "one of: {}",
                branches.iter().map(|branch| branch.expected()).join(" | ")
            ),
        }
    }

    pub fn parse(&self, raw: &RawValue, ctx: &ParseContext<'_>) -> Result<Value, Mismatch> {
        let invalid = || Mismatch::Invalid {
            expected: self.expected(),
        };
        match self {
            ValueType::Union(branches) => {
                let mut failures = Vec::with_capacity(branches.len());
                for branch in branches.iter() {
                    match branch.parse(raw, ctx) {
                        Ok(value) => return Ok(value),
                        Err(mismatch) => failures.push(mismatch),
                    }
                }
                log::debug!("all {} union branches failed: {:?}", branches.len(), failures);
                Err(invalid())
            }
            ValueType::Bool => match raw {
                RawValue::Bool(b) => Ok(Value::Bool(*b)),
                _ => text_of(raw)
                    .and_then(|text| parse_bool(&text).ok())
                    .map(Value::Bool)
                    .ok_or_else(invalid),
            },
            ValueType::Float => match raw.as_f64() {
                Some(number) => Ok(Value::Float(number as f32)),
                None => text_of(raw)
                    .and_then(|text| parse_float(&text).ok())
                    .map(Value::Float)
                    .ok_or_else(invalid),
            },
            ValueType::String => text_of(raw).map(Value::Str).ok_or_else(invalid),
            ValueType::Length => match raw.as_f64() {
                Some(number) => Ok(Value::Length(Length::Absolute(number as f32))),
                None => text_of(raw)
                    .and_then(|text| parse_length_value(&text).ok())
                    .map(Value::Length)
                    .ok_or_else(invalid),
            },
            ValueType::Percent => match raw.as_f64() {
                Some(number) => check_unit_interval(number as f32)
                    .map(Value::Ratio)
                    .map_err(|_| invalid()),
                None => text_of(raw)
                    .and_then(|text| parse_percent(&text).ok())
                    .map(Value::Ratio)
                    .ok_or_else(invalid),
            },
            ValueType::Color => text_of(raw)
                .and_then(|text| lookup_color(&text, ctx.colors))
                .map(Value::Color)
                .ok_or_else(invalid),
            ValueType::Format => text_of(raw)
                .and_then(|text| PageFormat::lookup(&text))
                .map(Value::Format)
                .ok_or_else(invalid),
            ValueType::Symbol(set) => text_of(raw)
                .and_then(|text| set.parse(&text))
                .ok_or_else(invalid),
            ValueType::Resource => {
                let text = text_of(raw).ok_or_else(invalid)?;
                ctx.paths
                    .find(&text)
                    .map(|path| Value::Resource(Resource::Found(path)))
                    .ok_or(Mismatch::NotFound)
            }
            ValueType::Font => {
                let text = text_of(raw).ok_or_else(invalid)?;
                ctx.fonts
                    .lookup(&normalize_font_name(&text))
                    .map(Value::Font)
                    .ok_or(Mismatch::UnknownFont)
            }
        }
    }
}

fn text_of(raw: &RawValue) -> Option<String> {
    scalar_text(raw).map(|text| text.trim().to_string())
}

/// Hex literal, then the document's own colors, then the static table.
pub fn lookup_color(text: &str, user_colors: &HashMap<String, Color>) -> Option<Color> {
    if text.starts_with('#') {
        return parse_color(text).ok();
    }
    user_colors
        .get(&normalize_color_name(text))
        .copied()
        .or_else(|| lookup_named_color(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::{FontHandle, InMemoryPathResolver};
    use serde_json::json;
    use std::path::PathBuf;

    #[derive(Debug)]
    struct OneFont;

    impl FontRegistry for OneFont {
        fn lookup(&self, normalized: &str) -> Option<FontHandle> {
            (normalized == "palatino").then(|| FontHandle::new("ppl", "Palatino"))
        }

        fn name(&self) -> &'static str {
            "OneFont"
        }
    }

    fn parse(ty: ValueType, raw: RawValue) -> Result<Value, Mismatch> {
        let mut colors = HashMap::new();
        colors.insert("paper".to_string(), Color::rgb(0xf0, 0xea, 0xd6));
        let paths = InMemoryPathResolver::with_paths(["beach.jpg"]);
        let ctx = ParseContext {
            colors: &colors,
            paths: &paths,
            fonts: &OneFont,
        };
        ty.parse(&raw, &ctx)
    }

    const WIDTH: ValueType = ValueType::Union(&[
        ValueType::Symbol(SymbolSet::BorderWidth),
        ValueType::Length,
    ]);

    #[test]
    fn test_numbers_and_text() {
        assert_eq!(parse(ValueType::Float, json!(1.5)), Ok(Value::Float(1.5)));
        assert_eq!(parse(ValueType::Float, json!("0.5")), Ok(Value::Float(0.5)));
        assert_eq!(
            parse(ValueType::Length, json!(12)),
            Ok(Value::Length(Length::Absolute(12.0)))
        );
        assert_eq!(parse(ValueType::Percent, json!("30%")), Ok(Value::Ratio(0.3)));
        assert!(parse(ValueType::Percent, json!(2)).is_err());
        assert_eq!(parse(ValueType::Bool, json!(true)), Ok(Value::Bool(true)));
        assert_eq!(parse(ValueType::Bool, json!("False")), Ok(Value::Bool(false)));
        assert_eq!(
            parse(ValueType::String, json!(2024)),
            Ok(Value::Str("2024".to_string()))
        );
        assert!(parse(ValueType::String, json!(["a"])).is_err());
    }

    #[test]
    fn test_exponent_numbers() {
        assert_eq!(
            parse(ValueType::Length, json!(1e-7)),
            Ok(Value::Length(Length::Absolute(1e-7)))
        );
        assert_eq!(parse(ValueType::Percent, json!(1e-7)), Ok(Value::Ratio(1e-7)));
        assert_eq!(parse(ValueType::Percent, json!(0.25)), Ok(Value::Ratio(0.25)));
        assert!(parse(ValueType::Percent, json!(-1e-7)).is_err());
        assert_eq!(
            parse(WIDTH, json!(2.5e1)),
            Ok(Value::Length(Length::Absolute(25.0)))
        );
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            parse(ValueType::Color, json!("Black")),
            Ok(Value::Color(Color::BLACK))
        );
        assert_eq!(
            parse(ValueType::Color, json!("paper")),
            Ok(Value::Color(Color::rgb(0xf0, 0xea, 0xd6)))
        );
        assert_eq!(
            parse(ValueType::Color, json!("#FF0000")),
            Ok(Value::Color(Color::rgb(255, 0, 0)))
        );
        assert!(matches!(
            parse(ValueType::Color, json!("#12")),
            Err(Mismatch::Invalid { .. })
        ));
    }

    #[test]
    fn test_symbols_are_normalized() {
        assert_eq!(
            parse(ValueType::Symbol(SymbolSet::Anchor), json!("Top Right")),
            Ok(Value::Anchor(Anchor::TopRight))
        );
        let err = parse(ValueType::Symbol(SymbolSet::Fit), json!("zoom")).unwrap_err();
        assert_eq!(
            err,
            Mismatch::Invalid {
                expected: "one of fit, stretch, fill, tile".to_string()
            }
        );
    }

    #[test]
    fn test_union_first_success_wins() {
        assert_eq!(
            parse(WIDTH, json!("thick")),
            Ok(Value::LineWidth(LineWidth::Named(BorderWidth::Thick)))
        );
        assert_eq!(
            parse(WIDTH, json!("2mm")),
            Ok(Value::Length(Length::Absolute(2.0)))
        );
    }

    #[test]
    fn test_union_lists_every_branch() {
        let Err(Mismatch::Invalid { expected }) = parse(WIDTH, json!("huge")) else {
            panic!("union should reject 'huge'");
        };
        assert!(expected.starts_with("one of: one of thin, medium, thick | a length"));
    }

    #[test]
    fn test_resources_and_fonts() {
        assert_eq!(
            parse(ValueType::Resource, json!("beach.jpg")),
            Ok(Value::Resource(Resource::Found(PathBuf::from("beach.jpg"))))
        );
        assert_eq!(
            parse(ValueType::Resource, json!("missing.jpg")),
            Err(Mismatch::NotFound)
        );
        assert!(matches!(
            parse(ValueType::Font, json!("Pala tino")),
            Ok(Value::Font(_))
        ));
        assert_eq!(
            parse(ValueType::Font, json!("Comic Sans")),
            Err(Mismatch::UnknownFont)
        );
    }

    #[test]
    fn test_formats() {
        let Ok(Value::Format(format)) = parse(ValueType::Format, json!("a5-landscape")) else {
            panic!("a5-landscape should be a format");
        };
        assert_eq!((format.width, format.height), (210.0, 148.0));
        assert!(parse(ValueType::Format, json!("letter")).is_err());
    }
}
