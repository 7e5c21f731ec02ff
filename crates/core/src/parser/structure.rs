//! Structural keys: the keys that shape the tree instead of setting values.

use super::DescriptionParser;
use crate::document::{Document, NodeId};
use crate::error::{StructureError, ValidationError};
use crate::kinds::Structural;
use crate::layout::PageLayout;
use crate::property::{ParseContext, ValueType};
use crate::value::{RawValue, Value, display_raw, scalar_text};
use folio_style::Symbolic;

const DEFAULT_PAGE_NAME: &str = "page";

impl DescriptionParser<'_> {
    pub(super) fn parse_structural(
        &mut self,
        doc: &mut Document,
        id: NodeId,
        structural: Structural,
        raw: &RawValue,
    ) {
        match structural {
            Structural::Pages => self.parse_pages(doc, raw),
            Structural::Paths => self.parse_paths(doc, raw),
            Structural::Colors => self.parse_colors(doc, raw),
            Structural::Defaults => match raw.as_object() {
                Some(map) => {
                    let root = doc.root();
                    self.parse_node(doc, root, map);
                }
                None => self.shape(doc, id, "default", "a map of properties"),
            },
            Structural::DeclareStyles => self.parse_styles(doc, raw),
            Structural::ApplyStyle => match scalar_text(raw) {
                Some(name) => self.apply_style(doc, id, name.trim()),
                None => self.shape(doc, id, "style", "a style name"),
            },
            Structural::ApplyStyles => match names(raw) {
                Some(names) => {
                    for name in names {
                        self.apply_style(doc, id, &name);
                    }
                }
                None => self.shape(doc, id, "styles", "a list of style names"),
            },
            Structural::Consumed => {}
        }
    }

    fn parse_pages(&mut self, doc: &mut Document, raw: &RawValue) {
        let album = doc.album();
        doc.mark_pages_declared();
        let Some(pages) = raw.as_array() else {
            return self.shape(doc, album, "pages", "a list of pages");
        };
        for page in pages {
            let Some(map) = page.as_object() else {
                self.shape(doc, album, "pages", "a list of maps");
                continue;
            };
            let layout = match map.get("type") {
                None => PageLayout::default(),
                Some(raw_type) => {
                    let text = display_raw(raw_type);
                    match PageLayout::from_name(&text) {
                        Some(layout) => layout,
                        None => {
                            self.report(StructureError::UnknownPageType {
                                value: text,
                                location: doc.location(album),
                                expected: PageLayout::expected(),
                            });
                            continue;
                        }
                    }
                }
            };
            let name = map
                .get("name")
                .and_then(scalar_text)
                .map(|name| name.into_owned())
                .unwrap_or_else(|| DEFAULT_PAGE_NAME.to_string());
            let id = doc.add_page(layout, &name);
            self.parse_node(doc, id, map);
        }
    }

    fn parse_paths(&mut self, doc: &mut Document, raw: &RawValue) {
        let Some(dirs) = names(raw) else {
            let album = doc.album();
            return self.shape(doc, album, "paths", "a list of directories");
        };
        if !self.env.paths_mut().extend_search(&dirs) {
            log::debug!(
                "{} ignores search directories {:?}",
                self.env.paths().name(),
                dirs
            );
        }
    }

    fn parse_colors(&mut self, doc: &mut Document, raw: &RawValue) {
        let album = doc.album();
        let Some(map) = raw.as_object() else {
            return self.shape(doc, album, "colors", "a map of color names to colors");
        };
        for (name, value) in map {
            let parsed = {
                let ctx = ParseContext {
                    colors: doc.colors(),
                    paths: self.env.paths(),
                    fonts: self.env.fonts(),
                };
                ValueType::Color.parse(value, &ctx)
            };
            match parsed {
                Ok(Value::Color(color)) => doc.define_color(name, color),
                _ => self.sink.error(
                    ValidationError::Invalid {
                        property: "colors",
                        location: doc.location(album),
                        value: format!("{}: {}", name, display_raw(value)),
                        expected: ValueType::Color.expected(),
                    }
                    .to_string(),
                ),
            }
        }
    }

    fn parse_styles(&mut self, doc: &mut Document, raw: &RawValue) {
        let album = doc.album();
        let Some(styles) = raw.as_array() else {
            return self.shape(doc, album, "styles", "a list of styles");
        };
        for style in styles {
            let declared = style.as_object().and_then(|map| {
                let name = map.get("name").and_then(scalar_text)?;
                Some((name.trim().to_string(), map))
            });
            match declared {
                Some((name, map)) => {
                    let id = doc.add_style(&name);
                    self.parse_node(doc, id, map);
                }
                None => self.shape(doc, album, "styles", "a list of maps with a name"),
            }
        }
    }

    fn apply_style(&mut self, doc: &mut Document, id: NodeId, name: &str) {
        match doc.style(name) {
            Some(style) => doc.apply_style(id, style),
            None => self.sink.warning(
                StructureError::UnknownStyle {
                    name: name.to_string(),
                    location: doc.location(id),
                }
                .to_string(),
            ),
        }
    }

    fn shape(&mut self, doc: &Document, id: NodeId, key: &'static str, expected: &'static str) {
        self.report(StructureError::Shape {
            key,
            location: doc.location(id),
            expected,
        });
    }
}

/// A list of names, either as a sequence or as a whitespace-separated string.
fn names(raw: &RawValue) -> Option<Vec<String>> {
    match raw {
        RawValue::Array(items) => items
            .iter()
            .map(|item| scalar_text(item).map(|name| name.trim().to_string()))
            .collect(),
        RawValue::String(text) => Some(text.split_whitespace().map(str::to_string).collect()),
        _ => None,
    }
}
