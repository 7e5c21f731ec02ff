//! Resolved style snapshots.
//!
//! Renderers never walk the cascade themselves: each page and frame gets a
//! flat record of its fully resolved values, computed once on first request
//! and cached on the node.

use crate::document::{Document, NodeId};
use crate::error::ResolutionError;
use crate::kinds::NodeKind;
use crate::property::catalog::{
    ALIGN, BACKGROUND_COLOR, BACKGROUND_IMAGE, BACKGROUND_MODE, BORDER_COLOR, BORDER_STYLE,
    BORDER_WIDTH, FONT, FONT_SIZE, HORIZONTAL_SHIFT, IMAGE, MODE, SCALE, SHADOW, SHADOW_COLOR,
    SHADOW_OPACITY, SHADOW_X_OFFSET, SHADOW_Y_OFFSET, TEXT, TEXT_ALIGN, TEXT_COLOR,
    VERTICAL_SHIFT,
};
use crate::value::{FromValue, Resource};
use folio_style::{BorderStyle, FitMode, FontSize, LineWidth, Shadow};
use folio_traits::FontHandle;
use folio_types::{Anchor, Color, Length, Rect};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageStyle {
    pub background_color: Option<Color>,
    pub background_image: Option<Resource>,
    pub background_mode: FitMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Border {
    pub style: BorderStyle,
    pub width: LineWidth,
    pub color: Color,
}

impl Border {
    pub fn is_visible(&self) -> bool {
        self.style != BorderStyle::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowStyle {
    pub kind: Shadow,
    pub x_offset: Length,
    pub y_offset: Length,
    pub color: Color,
    /// Explicit opacity, else the kind's own.
    pub opacity: f32,
}

impl ShadowStyle {
    pub fn is_visible(&self) -> bool {
        self.kind != Shadow::None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageStyle {
    pub image: Option<Resource>,
    pub mode: FitMode,
    pub scale: f32,
    pub align: Anchor,
    pub horizontal_shift: Length,
    pub vertical_shift: Length,
    pub border: Border,
    pub shadow: ShadowStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub text: Option<String>,
    pub align: Anchor,
    pub color: Option<Color>,
    pub size: FontSize,
    pub font: Option<FontHandle>,
}

/// Where content is drawn: the anchor point `(x, y)`, which point of the
/// content sits on it (a compass tag such as `"north west"`), and the size
/// of the content box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub anchor: &'static str,
    pub width: f32,
    pub height: f32,
}

fn anchored(content: Rect, align: Anchor) -> Placement {
    let offset = align.offset(content.width, content.height);
    let (cx, cy) = content.center();
    Placement {
        x: cx + offset.dx,
        y: cy + offset.dy,
        anchor: offset.tag,
        width: content.width,
        height: content.height,
    }
}

impl ImageStyle {
    /// Scales the frame about its center, pins the content at the
    /// alignment anchor, then applies the shifts (percentages resolve
    /// against the content size).
    pub fn placement(&self, frame: Rect) -> Placement {
        let mut content = frame;
        content.scale_about_center(self.scale);
        let mut placement = anchored(content, self.align);
        placement.x += self.horizontal_shift.resolve(content.width);
        placement.y += self.vertical_shift.resolve(content.height);
        placement
    }
}

impl TextStyle {
    pub fn placement(&self, frame: Rect) -> Placement {
        anchored(frame, self.align)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Page(PageStyle),
    Image(ImageStyle),
    Text(TextStyle),
}

impl Document {
    /// The snapshot of a node, built on first call.
    ///
    /// Frames give image or text snapshots; every other kind gives a page
    /// snapshot.
    pub fn snapshot(&self, id: NodeId) -> Result<&Snapshot, ResolutionError> {
        let cell = self.snapshot_cell(id);
        if let Some(snapshot) = cell.get() {
            return Ok(snapshot);
        }
        let snapshot = match self.kind(id) {
            NodeKind::Image => Snapshot::Image(self.build_image_style(id)?),
            NodeKind::Text => Snapshot::Text(self.build_text_style(id)?),
            _ => Snapshot::Page(self.build_page_style(id)?),
        };
        Ok(cell.get_or_init(|| snapshot))
    }

    pub fn page_style(&self, id: NodeId) -> Result<Option<&PageStyle>, ResolutionError> {
        match self.snapshot(id)? {
            Snapshot::Page(style) => Ok(Some(style)),
            _ => Ok(None),
        }
    }

    pub fn image_style(&self, id: NodeId) -> Result<Option<&ImageStyle>, ResolutionError> {
        match self.snapshot(id)? {
            Snapshot::Image(style) => Ok(Some(style)),
            _ => Ok(None),
        }
    }

    pub fn text_style(&self, id: NodeId) -> Result<Option<&TextStyle>, ResolutionError> {
        match self.snapshot(id)? {
            Snapshot::Text(style) => Ok(Some(style)),
            _ => Ok(None),
        }
    }

    fn build_page_style(&self, id: NodeId) -> Result<PageStyle, ResolutionError> {
        Ok(PageStyle {
            background_color: self.get(id, &BACKGROUND_COLOR)?,
            background_image: self.get(id, &BACKGROUND_IMAGE)?,
            background_mode: self.get_or_default(id, &BACKGROUND_MODE)?,
        })
    }

    fn build_image_style(&self, id: NodeId) -> Result<ImageStyle, ResolutionError> {
        let shadow: Shadow = self.get_or_default(id, &SHADOW)?;
        let opacity = self
            .get::<f32>(id, &SHADOW_OPACITY)?
            .unwrap_or_else(|| shadow.default_opacity());
        Ok(ImageStyle {
            image: self
                .frame_content(id, &IMAGE)?
                .and_then(Resource::from_value),
            mode: self.get_or_default(id, &MODE)?,
            scale: self.get::<f32>(id, &SCALE)?.unwrap_or(1.0),
            align: self.get_or_default(id, &ALIGN)?,
            horizontal_shift: self.get_or_default(id, &HORIZONTAL_SHIFT)?,
            vertical_shift: self.get_or_default(id, &VERTICAL_SHIFT)?,
            border: Border {
                style: self.get_or_default(id, &BORDER_STYLE)?,
                width: self.get_or_default(id, &BORDER_WIDTH)?,
                color: self.get_or_default(id, &BORDER_COLOR)?,
            },
            shadow: ShadowStyle {
                kind: shadow,
                x_offset: self.get_or_default(id, &SHADOW_X_OFFSET)?,
                y_offset: self.get_or_default(id, &SHADOW_Y_OFFSET)?,
                color: self.get_or_default(id, &SHADOW_COLOR)?,
                opacity,
            },
        })
    }

    fn build_text_style(&self, id: NodeId) -> Result<TextStyle, ResolutionError> {
        Ok(TextStyle {
            text: self.frame_content(id, &TEXT)?.and_then(String::from_value),
            align: self.get_or_default(id, &TEXT_ALIGN)?,
            color: self.get(id, &TEXT_COLOR)?,
            size: self.get_or_default(id, &FONT_SIZE)?,
            font: self.get(id, &FONT)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;
    use crate::layout::PageLayout;
    use crate::value::Value;
    use folio_traits::InMemoryPathResolver;
    use serde_json::json;
    use std::path::PathBuf;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn style(align: Anchor, scale: f32) -> ImageStyle {
        ImageStyle {
            image: None,
            mode: FitMode::Fit,
            scale,
            align,
            horizontal_shift: Length::ZERO,
            vertical_shift: Length::ZERO,
            border: Border {
                style: BorderStyle::None,
                width: LineWidth::default(),
                color: Color::BLACK,
            },
            shadow: ShadowStyle {
                kind: Shadow::None,
                x_offset: Length::ZERO,
                y_offset: Length::ZERO,
                color: Color::BLACK,
                opacity: 0.25,
            },
        }
    }

    #[test]
    fn test_centered_placement() {
        let placement = style(Anchor::Center, 1.0).placement(Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!((placement.x, placement.y), (60.0, 45.0));
        assert_eq!(placement.anchor, "center");
    }

    #[test]
    fn test_top_left_placement_with_scale() {
        let placement = style(Anchor::TopLeft, 0.5).placement(Rect::new(0.0, 0.0, 100.0, 60.0));
        assert!(close(placement.x, 25.0));
        assert!(close(placement.y, 15.0));
        assert_eq!(placement.anchor, "north west");
        assert!(close(placement.width, 50.0));
    }

    #[test]
    fn test_shifts_resolve_against_content() {
        let mut image = style(Anchor::Center, 0.5);
        image.horizontal_shift = Length::Proportional(0.1);
        image.vertical_shift = Length::Absolute(3.0);
        let placement = image.placement(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert!(close(placement.x, 110.0));
        assert!(close(placement.y, 53.0));
    }

    #[test]
    fn test_snapshot_resolves_cascade_once() {
        let env = Environment::with_paths(InMemoryPathResolver::with_paths(["a.jpg"]));
        let mut doc = Document::new("album.json");
        let page = doc.add_page(PageLayout::Center, "p");
        let frame = doc.item(page, 0).unwrap();
        let root = doc.root();
        doc.set_explicit(root, &BORDER_COLOR, &json!("red"), &env).unwrap();
        doc.set_explicit(page, &IMAGE, &json!("a.jpg"), &env).unwrap();
        doc.set_explicit(page, &SHADOW, &json!("fuzzy"), &env).unwrap();

        let first = doc.image_style(frame).unwrap().unwrap();
        assert_eq!(first.border.color, Color::rgb(255, 0, 0));
        assert_eq!(first.border.style, BorderStyle::Solid);
        assert_eq!(first.image, Some(Resource::Found(PathBuf::from("a.jpg"))));
        assert_eq!(first.shadow.opacity, 1.0);
        assert!(std::ptr::eq(first, doc.image_style(frame).unwrap().unwrap()));
    }

    #[test]
    fn test_mutation_invalidates_snapshots() {
        let env = Environment::with_paths(InMemoryPathResolver::with_paths(["a.jpg"]));
        let mut doc = Document::new("album.json");
        let page = doc.add_page(PageLayout::Center, "p");
        let frame = doc.item(page, 0).unwrap();
        doc.set_explicit(frame, &IMAGE, &json!("a.jpg"), &env).unwrap();
        assert_eq!(doc.image_style(frame).unwrap().unwrap().scale, 1.0);
        doc.set_explicit(page, &SCALE, &json!(0.5), &env).unwrap();
        assert_eq!(doc.image_style(frame).unwrap().unwrap().scale, 0.5);
        assert!(doc.text_style(frame).unwrap().is_none());
    }

    #[test]
    fn test_text_snapshot() {
        let env = Environment::default();
        let mut doc = Document::new("album.json");
        let page = doc.add_page(PageLayout::Captioned, "p");
        let caption = doc.item(page, 1).unwrap();
        doc.set_explicit(caption, &TEXT, &json!("Sunset"), &env).unwrap();
        doc.set_explicit(page, &FONT, &json!("Palatino"), &env).unwrap();
        let text = doc.text_style(caption).unwrap().unwrap();
        assert_eq!(text.text.as_deref(), Some("Sunset"));
        assert_eq!(text.font.as_ref().map(|f| &*f.key), Some("ppl"));
        assert_eq!(text.size, FontSize::Medium);
        assert_eq!(doc.explicit(caption, &TEXT), Some(&Value::Str("Sunset".into())));
    }
}
