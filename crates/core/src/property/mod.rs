//! Property descriptors.
//!
//! A [`Property`] is a static record shared by every node kind that declares
//! it: the description key, the grammar of its values, how it resolves when
//! a node leaves it unset, and an optional implication fired after a
//! successful set.

pub mod catalog;
pub mod value_type;

pub use value_type::{Mismatch, ParseContext, SymbolSet, ValueType, lookup_color};

use crate::value::Value;
use std::fmt;

/// Resolution mode of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Only the node's own value counts; otherwise the default.
    Plain,
    /// Like `Plain`, but an unset value without default is an error.
    Required,
    /// Unset values are taken from the closest ancestor that sets one.
    Inherited,
}

/// Identity of a property, used to key node values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyId {
    Name,
    Title,
    Author,
    Date,
    Format,
    Draft,
    BackgroundColor,
    BackgroundImage,
    BackgroundMode,
    Orientation,
    CaptionHeight,
    Image,
    Mode,
    Scale,
    Align,
    HorizontalShift,
    VerticalShift,
    BorderStyle,
    BorderWidth,
    BorderColor,
    Shadow,
    ShadowXOffset,
    ShadowYOffset,
    ShadowColor,
    ShadowOpacity,
    Text,
    TextAlign,
    TextColor,
    FontSize,
    Font,
}

/// After `self` is set on a node: if `target` resolves on that node to
/// `when`, set `target` to `value` there as well.
#[derive(Debug)]
pub struct Implication {
    pub target: &'static Property,
    pub when: Value,
    pub value: Value,
}

#[derive(Debug)]
pub struct Property {
    pub id: PropertyId,
    pub key: &'static str,
    pub description: &'static str,
    pub value_type: ValueType,
    pub mode: Mode,
    pub default: Option<Value>,
    pub implies: Option<Implication>,
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)
    }
}
