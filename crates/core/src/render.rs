//! Two-pass rendering driver.
//!
//! The first pass declares every color and font the visible frames use, the
//! second emits the pages. Backends implement [`Renderer`]; [`DisplayList`]
//! records the calls and is what the CLI prints.

use crate::document::{Document, NodeId};
use crate::error::ResolutionError;
use crate::kinds::NodeKind;
use crate::layout::LayoutParams;
use crate::property::catalog::{AUTHOR, CAPTION_HEIGHT, DATE, DRAFT, FORMAT, ORIENTATION, TITLE};
use crate::snapshot::{ImageStyle, PageStyle, Placement, Snapshot, TextStyle};
use folio_style::{FontSize, PageFormat};
use folio_traits::FontHandle;
use folio_types::{Anchor, Color, Rect};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Album-wide information handed to the backend before any page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub draft: bool,
    pub format: PageFormat,
}

pub trait Renderer {
    fn begin_document(&mut self, info: &AlbumInfo) -> Result<(), RenderError>;

    /// Called once per distinct color, before any page.
    fn declare_color(&mut self, color: Color) -> Result<(), RenderError>;

    /// Called once per distinct font, before any page.
    fn declare_font(&mut self, font: &FontHandle) -> Result<(), RenderError>;

    fn begin_page(&mut self, number: usize, sheet: Rect) -> Result<(), RenderError>;

    fn draw_background(&mut self, sheet: Rect, style: &PageStyle) -> Result<(), RenderError>;

    fn draw_image(&mut self, frame: Rect, style: &ImageStyle) -> Result<(), RenderError>;

    fn draw_text(&mut self, frame: Rect, text: &str, style: &TextStyle) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;
}

/// A page ready to draw: its snapshot and those of its visible frames.
struct PagePlan<'d> {
    number: usize,
    style: &'d PageStyle,
    frames: Vec<(Rect, &'d Snapshot)>,
}

fn album_info(doc: &Document) -> Result<AlbumInfo, ResolutionError> {
    let album = doc.album();
    Ok(AlbumInfo {
        title: doc.get(album, &TITLE)?,
        author: doc.get(album, &AUTHOR)?,
        date: doc.get(album, &DATE)?,
        draft: doc.get_or_default(album, &DRAFT)?,
        format: doc.get_or_default(album, &FORMAT)?,
    })
}

/// Boxes of the frames of `page` that were not dropped.
pub fn frame_boxes(
    doc: &Document,
    page: NodeId,
    format: &PageFormat,
) -> Result<Vec<(NodeId, Rect)>, ResolutionError> {
    let NodeKind::Page(layout) = doc.kind(page) else {
        return Ok(Vec::new());
    };
    let params = LayoutParams {
        orientation: doc.get_or_default(page, &ORIENTATION)?,
        caption_height: doc.get_or_default(page, &CAPTION_HEIGHT)?,
        column_sep: format.column_sep,
    };
    let body = format.body(doc.page_number(page));
    Ok(doc
        .children(page)
        .iter()
        .copied()
        .zip(layout.frames(body, &params))
        .filter(|(frame, _)| !doc.is_dropped(*frame))
        .collect())
}

fn plan<'d>(doc: &'d Document, format: &PageFormat) -> Result<Vec<PagePlan<'d>>, ResolutionError> {
    let mut plans = Vec::new();
    for &page in doc.pages().iter().filter(|page| !doc.is_dropped(**page)) {
        let Some(style) = doc.page_style(page)? else {
            continue;
        };
        let mut frames = Vec::new();
        for (frame, rect) in frame_boxes(doc, page, format)? {
            frames.push((rect, doc.snapshot(frame)?));
        }
        plans.push(PagePlan {
            number: doc.page_number(page),
            style,
            frames,
        });
    }
    Ok(plans)
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Renders every page of `doc` that was not dropped.
pub fn render_document(doc: &Document, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
    let info = album_info(doc)?;
    let pages = plan(doc, &info.format)?;
    renderer.begin_document(&info)?;

    let mut colors = Vec::new();
    let mut fonts = Vec::new();
    for page in &pages {
        if let Some(color) = page.style.background_color {
            push_unique(&mut colors, color);
        }
        for (_, snapshot) in &page.frames {
            match snapshot {
                Snapshot::Image(image) => {
                    if image.border.is_visible() {
                        push_unique(&mut colors, image.border.color);
                    }
                    if image.shadow.is_visible() {
                        push_unique(&mut colors, image.shadow.color);
                    }
                }
                Snapshot::Text(text) => {
                    if let Some(color) = text.color {
                        push_unique(&mut colors, color);
                    }
                    if let Some(font) = &text.font {
                        push_unique(&mut fonts, font);
                    }
                }
                Snapshot::Page(_) => {}
            }
        }
    }
    log::debug!("declaring {} color(s), {} font(s)", colors.len(), fonts.len());
    for color in colors {
        renderer.declare_color(color)?;
    }
    for font in fonts {
        renderer.declare_font(font)?;
    }

    let sheet = info.format.sheet();
    for page in &pages {
        renderer.begin_page(page.number, sheet)?;
        if page.style.background_color.is_some() || page.style.background_image.is_some() {
            renderer.draw_background(sheet, page.style)?;
        }
        for (rect, snapshot) in &page.frames {
            match snapshot {
                Snapshot::Image(image) => renderer.draw_image(*rect, image)?,
                Snapshot::Text(text) => {
                    if let Some(content) = &text.text {
                        renderer.draw_text(*rect, content, text)?;
                    }
                }
                Snapshot::Page(_) => {}
            }
        }
        renderer.end_page()?;
    }
    log::info!("rendered {} page(s)", pages.len());
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum DrawCommand {
    BeginDocument {
        info: AlbumInfo,
    },
    DeclareColor {
        color: Color,
    },
    DeclareFont {
        key: String,
        name: String,
    },
    BeginPage {
        number: usize,
        sheet: Rect,
    },
    Background {
        sheet: Rect,
        style: PageStyle,
    },
    Image {
        frame: Rect,
        placement: Placement,
        style: ImageStyle,
    },
    Text {
        frame: Rect,
        placement: Placement,
        text: String,
        align: Anchor,
        color: Option<Color>,
        size: FontSize,
        font: Option<String>,
    },
    EndPage,
}

/// A renderer recording every call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::BeginPage { .. }))
            .count()
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageStyle> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Image { style, .. } => Some(style),
            _ => None,
        })
    }

    pub fn declared_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::DeclareColor { color } => Some(*color),
            _ => None,
        })
    }
}

impl Renderer for DisplayList {
    fn begin_document(&mut self, info: &AlbumInfo) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::BeginDocument { info: info.clone() });
        Ok(())
    }

    fn declare_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::DeclareColor { color });
        Ok(())
    }

    fn declare_font(&mut self, font: &FontHandle) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::DeclareFont {
            key: font.key.to_string(),
            name: font.name.to_string(),
        });
        Ok(())
    }

    fn begin_page(&mut self, number: usize, sheet: Rect) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::BeginPage { number, sheet });
        Ok(())
    }

    fn draw_background(&mut self, sheet: Rect, style: &PageStyle) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Background {
            sheet,
            style: style.clone(),
        });
        Ok(())
    }

    fn draw_image(&mut self, frame: Rect, style: &ImageStyle) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Image {
            frame,
            placement: style.placement(frame),
            style: style.clone(),
        });
        Ok(())
    }

    fn draw_text(&mut self, frame: Rect, text: &str, style: &TextStyle) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Text {
            frame,
            placement: style.placement(frame),
            text: text.to_string(),
            align: style.align,
            color: style.color,
            size: style.size,
            font: style.font.as_ref().map(|font| font.name.to_string()),
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::EndPage);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;
    use crate::layout::PageLayout;
    use crate::property::catalog::{BACKGROUND_COLOR, BORDER_COLOR, IMAGE, TEXT, TEXT_COLOR};
    use folio_traits::InMemoryPathResolver;
    use serde_json::json;

    fn env() -> Environment {
        Environment::with_paths(InMemoryPathResolver::with_paths(["a.jpg", "b.jpg"]))
    }

    #[test]
    fn test_declarations_precede_pages() {
        let env = env();
        let mut doc = Document::new("album.json");
        let root = doc.root();
        doc.set_explicit(root, &BORDER_COLOR, &json!("red"), &env).unwrap();
        doc.set_explicit(root, &BACKGROUND_COLOR, &json!("ivory"), &env)
            .unwrap();
        for name in ["one", "two"] {
            let page = doc.add_page(PageLayout::Center, name);
            doc.set_explicit(page, &IMAGE, &json!("a.jpg"), &env).unwrap();
        }

        let mut list = DisplayList::new();
        render_document(&doc, &mut list).unwrap();
        assert_eq!(list.page_count(), 2);
        assert_eq!(list.images().count(), 2);
        assert_eq!(list.declared_colors().count(), 2);

        let first_page = list
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::BeginPage { .. }))
            .unwrap();
        let last_declaration = list
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::DeclareColor { .. }))
            .unwrap();
        assert!(last_declaration < first_page);
    }

    #[test]
    fn test_dropped_frames_are_skipped() {
        let env = env();
        let mut doc = Document::new("album.json");
        let page = doc.add_page(PageLayout::Duo, "pair");
        let first = doc.item(page, 0).unwrap();
        let second = doc.item(page, 1).unwrap();
        doc.set_explicit(first, &IMAGE, &json!("a.jpg"), &env).unwrap();
        doc.drop_node(second);

        let mut list = DisplayList::new();
        render_document(&doc, &mut list).unwrap();
        assert_eq!(list.images().count(), 1);
    }

    #[test]
    fn test_caption_text_and_font() {
        let env = env();
        let mut doc = Document::new("album.json");
        let page = doc.add_page(PageLayout::Captioned, "c");
        doc.set_explicit(page, &IMAGE, &json!("b.jpg"), &env).unwrap();
        let caption = doc.item(page, 1).unwrap();
        doc.set_explicit(caption, &TEXT, &json!("Lake"), &env).unwrap();
        doc.set_explicit(caption, &TEXT_COLOR, &json!("navy"), &env)
            .unwrap();

        let mut list = DisplayList::new();
        render_document(&doc, &mut list).unwrap();
        let texts: Vec<_> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Lake"]);
        assert_eq!(list.declared_colors().collect::<Vec<_>>(), vec![Color::rgb(0, 0, 0x80)]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["commands"][0]["op"], "begin-document");
    }
}
