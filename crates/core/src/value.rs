//! Validated property values.

use folio_style::{BorderStyle, BorderWidth, FitMode, FontSize, LineWidth, Orientation, PageFormat, Shadow};
use folio_traits::FontHandle;
use folio_types::{Anchor, Color, Length};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Raw description value as handed over by the ingestion layer.
pub type RawValue = serde_json::Value;

/// Textual form of a scalar raw value; `None` for sequences, maps and null.
pub fn scalar_text(raw: &RawValue) -> Option<Cow<'_, str>> {
    match raw {
        RawValue::String(s) => Some(Cow::Borrowed(s)),
        RawValue::Number(n) => Some(Cow::Owned(n.to_string())),
        RawValue::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// Human-readable form of any raw value, for diagnostics.
pub fn display_raw(raw: &RawValue) -> String {
    scalar_text(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|| raw.to_string())
}

/// A resource reference after lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Found(PathBuf),
    /// Unresolved reference kept as a placeholder so the document still renders.
    Missing(String),
}

impl Resource {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Resource::Found(path) => Some(path),
            Resource::Missing(_) => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Found(path) => write!(f, "{}", path.display()),
            Resource::Missing(name) => write!(f, "<missing {}>", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Float(f32),
    /// A fraction in `[0, 1]`.
    Ratio(f32),
    Length(Length),
    LineWidth(LineWidth),
    Color(Color),
    Fit(FitMode),
    Anchor(Anchor),
    FontSize(FontSize),
    BorderStyle(BorderStyle),
    Shadow(Shadow),
    Orientation(Orientation),
    Font(FontHandle),
    Resource(Resource),
    Format(PageFormat),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use folio_style::Symbolic;
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Float(v) => write!(f, "{}", v),
            Value::Ratio(v) => write!(f, "{}%", v * 100.0),
            Value::Length(l) => write!(f, "{}", l),
            Value::LineWidth(LineWidth::Named(w)) => f.write_str(w.name()),
            Value::LineWidth(LineWidth::Length(l)) => write!(f, "{}", l),
            Value::Color(c) => write!(f, "{}", c),
            Value::Fit(m) => f.write_str(m.name()),
            Value::Anchor(a) => f.write_str(a.name()),
            Value::FontSize(s) => f.write_str(s.name()),
            Value::BorderStyle(s) => f.write_str(s.name()),
            Value::Shadow(s) => f.write_str(s.name()),
            Value::Orientation(o) => f.write_str(o.name()),
            Value::Font(font) => write!(f, "{}", font),
            Value::Resource(r) => write!(f, "{}", r),
            Value::Format(format) => f.write_str(&format.name),
        }
    }
}

/// Typed extraction of a [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! from_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner.clone()),
                        _ => None,
                    }
                }
            }
        )+
    };
}

from_value! {
    String => Str,
    bool => Bool,
    Length => Length,
    Color => Color,
    FitMode => Fit,
    Anchor => Anchor,
    FontSize => FontSize,
    BorderStyle => BorderStyle,
    Shadow => Shadow,
    Orientation => Orientation,
    FontHandle => Font,
    Resource => Resource,
    PageFormat => Format,
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) | Value::Ratio(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for LineWidth {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::LineWidth(width) => Some(*width),
            Value::Length(length) => Some(LineWidth::Length(*length)),
            _ => None,
        }
    }
}

impl From<BorderWidth> for Value {
    fn from(width: BorderWidth) -> Self {
        Value::LineWidth(LineWidth::Named(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("a")).as_deref(), Some("a"));
        assert_eq!(scalar_text(&json!(12)).as_deref(), Some("12"));
        assert_eq!(scalar_text(&json!(true)).as_deref(), Some("true"));
        assert!(scalar_text(&json!([1, 2])).is_none());
        assert_eq!(display_raw(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_line_width_accepts_lengths() {
        let value = Value::Length(Length::mm(2.0));
        assert_eq!(
            LineWidth::from_value(&value),
            Some(LineWidth::Length(Length::mm(2.0)))
        );
        assert_eq!(
            LineWidth::from_value(&BorderWidth::Thick.into()),
            Some(LineWidth::Named(BorderWidth::Thick))
        );
        assert_eq!(Color::from_value(&value), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Color(Color::BLACK).to_string(), "#000000");
        assert_eq!(Value::Anchor(Anchor::TopLeft).to_string(), "top-left");
        assert_eq!(Value::Ratio(0.25).to_string(), "25%");
    }
}
