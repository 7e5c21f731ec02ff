//! The property catalog and the groups node kinds declare.

use super::{Implication, Mode, Property, PropertyId, SymbolSet, ValueType};
use crate::value::Value;
use folio_style::{BorderStyle, BorderWidth, FitMode, FontSize, LineWidth, Orientation, Shadow};
use folio_types::{Anchor, Color, Length};

const LINE_WIDTH: ValueType = ValueType::Union(&[
    ValueType::Symbol(SymbolSet::BorderWidth),
    ValueType::Length,
]);

// --- Album ---

pub static NAME: Property = Property {
    id: PropertyId::Name,
    key: "name",
    description: "name used in messages",
    value_type: ValueType::String,
    mode: Mode::Plain,
    default: None,
    implies: None,
};

pub static TITLE: Property = Property {
    id: PropertyId::Title,
    key: "title",
    description: "album title",
    value_type: ValueType::String,
    mode: Mode::Plain,
    default: None,
    implies: None,
};

pub static AUTHOR: Property = Property {
    id: PropertyId::Author,
    key: "author",
    description: "album author",
    value_type: ValueType::String,
    mode: Mode::Plain,
    default: None,
    implies: None,
};

pub static DATE: Property = Property {
    id: PropertyId::Date,
    key: "date",
    description: "album date",
    value_type: ValueType::String,
    mode: Mode::Plain,
    default: None,
    implies: None,
};

pub static FORMAT: Property = Property {
    id: PropertyId::Format,
    key: "format",
    description: "page format, e.g. a4 or octavo-landscape",
    value_type: ValueType::Format,
    mode: Mode::Plain,
    default: None,
    implies: None,
};

pub static DRAFT: Property = Property {
    id: PropertyId::Draft,
    key: "draft",
    description: "mark the output as a draft",
    value_type: ValueType::Bool,
    mode: Mode::Plain,
    default: Some(Value::Bool(false)),
    implies: None,
};

// --- Page ---

pub static BACKGROUND_COLOR: Property = Property {
    id: PropertyId::BackgroundColor,
    key: "background-color",
    description: "page background color",
    value_type: ValueType::Color,
    mode: Mode::Inherited,
    default: None,
    implies: None,
};

pub static BACKGROUND_IMAGE: Property = Property {
    id: PropertyId::BackgroundImage,
    key: "background-image",
    description: "image covering the page",
    value_type: ValueType::Resource,
    mode: Mode::Inherited,
    default: None,
    implies: None,
};

pub static BACKGROUND_MODE: Property = Property {
    id: PropertyId::BackgroundMode,
    key: "background-mode",
    description: "how the background image covers the page",
    value_type: ValueType::Symbol(SymbolSet::Fit),
    mode: Mode::Inherited,
    default: Some(Value::Fit(FitMode::Stretch)),
    implies: None,
};

pub static ORIENTATION: Property = Property {
    id: PropertyId::Orientation,
    key: "orientation",
    description: "split direction of a two image page",
    value_type: ValueType::Symbol(SymbolSet::Orientation),
    mode: Mode::Plain,
    default: Some(Value::Orientation(Orientation::Vertical)),
    implies: None,
};

pub static CAPTION_HEIGHT: Property = Property {
    id: PropertyId::CaptionHeight,
    key: "caption-height",
    description: "height of the caption band",
    value_type: ValueType::Length,
    mode: Mode::Plain,
    default: Some(Value::Length(Length::Proportional(0.15))),
    implies: None,
};

// --- Image frame ---

pub static IMAGE: Property = Property {
    id: PropertyId::Image,
    key: "image",
    description: "image file",
    value_type: ValueType::Resource,
    mode: Mode::Required,
    default: None,
    implies: None,
};

pub static MODE: Property = Property {
    id: PropertyId::Mode,
    key: "mode",
    description: "how the image fills its frame",
    value_type: ValueType::Symbol(SymbolSet::Fit),
    mode: Mode::Inherited,
    default: Some(Value::Fit(FitMode::Fit)),
    implies: None,
};

pub static SCALE: Property = Property {
    id: PropertyId::Scale,
    key: "scale",
    description: "scale factor applied to the frame",
    value_type: ValueType::Float,
    mode: Mode::Inherited,
    default: Some(Value::Float(1.0)),
    implies: None,
};

pub static ALIGN: Property = Property {
    id: PropertyId::Align,
    key: "align",
    description: "anchor of the image in its frame",
    value_type: ValueType::Symbol(SymbolSet::Anchor),
    mode: Mode::Inherited,
    default: Some(Value::Anchor(Anchor::Center)),
    implies: None,
};

pub static HORIZONTAL_SHIFT: Property = Property {
    id: PropertyId::HorizontalShift,
    key: "horizontal-shift",
    description: "horizontal offset, relative to the image width when a percentage",
    value_type: ValueType::Length,
    mode: Mode::Plain,
    default: None,
    implies: None,
};

pub static VERTICAL_SHIFT: Property = Property {
    id: PropertyId::VerticalShift,
    key: "vertical-shift",
    description: "vertical offset, relative to the image height when a percentage",
    value_type: ValueType::Length,
    mode: Mode::Plain,
    default: None,
    implies: None,
};

pub static BORDER_STYLE: Property = Property {
    id: PropertyId::BorderStyle,
    key: "border-style",
    description: "frame border line style",
    value_type: ValueType::Symbol(SymbolSet::BorderStyle),
    mode: Mode::Inherited,
    default: Some(Value::BorderStyle(BorderStyle::None)),
    implies: None,
};

pub static BORDER_WIDTH: Property = Property {
    id: PropertyId::BorderWidth,
    key: "border-width",
    description: "frame border line width",
    value_type: LINE_WIDTH,
    mode: Mode::Inherited,
    default: Some(Value::LineWidth(LineWidth::Named(BorderWidth::Medium))),
    implies: Some(Implication {
        target: &BORDER_STYLE,
        when: Value::BorderStyle(BorderStyle::None),
        value: Value::BorderStyle(BorderStyle::Solid),
    }),
};

pub static BORDER_COLOR: Property = Property {
    id: PropertyId::BorderColor,
    key: "border-color",
    description: "frame border color",
    value_type: ValueType::Color,
    mode: Mode::Inherited,
    default: Some(Value::Color(Color::BLACK)),
    implies: Some(Implication {
        target: &BORDER_STYLE,
        when: Value::BorderStyle(BorderStyle::None),
        value: Value::BorderStyle(BorderStyle::Solid),
    }),
};

pub static SHADOW: Property = Property {
    id: PropertyId::Shadow,
    key: "shadow",
    description: "drop shadow kind",
    value_type: ValueType::Symbol(SymbolSet::Shadow),
    mode: Mode::Inherited,
    default: Some(Value::Shadow(Shadow::None)),
    implies: None,
};

pub static SHADOW_X_OFFSET: Property = Property {
    id: PropertyId::ShadowXOffset,
    key: "shadow-xoffset",
    description: "horizontal shadow offset",
    value_type: ValueType::Length,
    mode: Mode::Inherited,
    default: Some(Value::Length(Length::Absolute(1.5))),
    implies: None,
};

pub static SHADOW_Y_OFFSET: Property = Property {
    id: PropertyId::ShadowYOffset,
    key: "shadow-yoffset",
    description: "vertical shadow offset",
    value_type: ValueType::Length,
    mode: Mode::Inherited,
    default: Some(Value::Length(Length::Absolute(1.5))),
    implies: None,
};

pub static SHADOW_COLOR: Property = Property {
    id: PropertyId::ShadowColor,
    key: "shadow-color",
    description: "shadow color",
    value_type: ValueType::Color,
    mode: Mode::Inherited,
    default: Some(Value::Color(Color::BLACK)),
    implies: None,
};

pub static SHADOW_OPACITY: Property = Property {
    id: PropertyId::ShadowOpacity,
    key: "shadow-opacity",
    description: "shadow opacity; depends on the shadow kind when unset",
    value_type: ValueType::Percent,
    mode: Mode::Inherited,
    default: None,
    implies: None,
};

// --- Text frame ---

pub static TEXT: Property = Property {
    id: PropertyId::Text,
    key: "text",
    description: "text content",
    value_type: ValueType::String,
    mode: Mode::Plain,
    default: None,
    implies: None,
};

pub static TEXT_ALIGN: Property = Property {
    id: PropertyId::TextAlign,
    key: "text-align",
    description: "anchor of the text in its frame",
    value_type: ValueType::Symbol(SymbolSet::Anchor),
    mode: Mode::Inherited,
    default: Some(Value::Anchor(Anchor::Center)),
    implies: None,
};

pub static TEXT_COLOR: Property = Property {
    id: PropertyId::TextColor,
    key: "text-color",
    description: "text color",
    value_type: ValueType::Color,
    mode: Mode::Inherited,
    default: None,
    implies: None,
};

pub static FONT_SIZE: Property = Property {
    id: PropertyId::FontSize,
    key: "font-size",
    description: "relative font size",
    value_type: ValueType::Symbol(SymbolSet::FontSize),
    mode: Mode::Inherited,
    default: Some(Value::FontSize(FontSize::Medium)),
    implies: None,
};

pub static FONT: Property = Property {
    id: PropertyId::Font,
    key: "font",
    description: "font family",
    value_type: ValueType::Font,
    mode: Mode::Inherited,
    default: None,
    implies: None,
};

// --- Groups ---

pub static ALBUM_PROPERTIES: &[&Property] = &[&TITLE, &AUTHOR, &DATE, &FORMAT, &DRAFT];

pub static PAGE_PROPERTIES: &[&Property] = &[&NAME];

pub static BACKGROUND_PROPERTIES: &[&Property] =
    &[&BACKGROUND_COLOR, &BACKGROUND_IMAGE, &BACKGROUND_MODE];

pub static DUO_PROPERTIES: &[&Property] = &[&ORIENTATION];

pub static CAPTIONED_PROPERTIES: &[&Property] = &[&CAPTION_HEIGHT];

/// Image properties a style or container may carry.
pub static IMAGE_STYLE_PROPERTIES: &[&Property] = &[
    &MODE,
    &SCALE,
    &ALIGN,
    &HORIZONTAL_SHIFT,
    &VERTICAL_SHIFT,
    &BORDER_STYLE,
    &BORDER_WIDTH,
    &BORDER_COLOR,
    &SHADOW,
    &SHADOW_X_OFFSET,
    &SHADOW_Y_OFFSET,
    &SHADOW_COLOR,
    &SHADOW_OPACITY,
];

pub static IMAGE_CONTENT_PROPERTIES: &[&Property] = &[&IMAGE];

pub static TEXT_STYLE_PROPERTIES: &[&Property] = &[&TEXT_ALIGN, &TEXT_COLOR, &FONT_SIZE, &FONT];

pub static TEXT_CONTENT_PROPERTIES: &[&Property] = &[&TEXT];

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn all_groups() -> impl Iterator<Item = &'static &'static Property> {
        [
            ALBUM_PROPERTIES,
            PAGE_PROPERTIES,
            BACKGROUND_PROPERTIES,
            DUO_PROPERTIES,
            CAPTIONED_PROPERTIES,
            IMAGE_STYLE_PROPERTIES,
            IMAGE_CONTENT_PROPERTIES,
            TEXT_STYLE_PROPERTIES,
            TEXT_CONTENT_PROPERTIES,
        ]
        .into_iter()
        .flatten()
    }

    #[test]
    fn test_keys_and_ids_are_unique() {
        assert!(all_groups().map(|p| p.key).all_unique());
        assert!(all_groups().map(|p| p.id).all_unique());
    }

    #[test]
    fn test_keys_are_normalized() {
        for property in all_groups() {
            assert_eq!(property.key, folio_style::normalize_symbol(property.key));
        }
    }

    #[test]
    fn test_required_properties_have_no_default() {
        for property in all_groups().filter(|p| p.mode == Mode::Required) {
            assert!(property.default.is_none(), "{}", property.key);
        }
    }

    #[test]
    fn test_border_implications_target_border_style() {
        for property in [&BORDER_COLOR, &BORDER_WIDTH] {
            let implication = property.implies.as_ref().unwrap();
            assert_eq!(implication.target.id, PropertyId::BorderStyle);
            assert_eq!(implication.when, Value::BorderStyle(BorderStyle::None));
        }
    }
}
