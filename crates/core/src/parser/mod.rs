//! Description parser: fills a [`Document`] from a description map.
//!
//! Each key of a map is handled in description order:
//!
//! 1. a `#n` suffix redirects the key to the node's `n`-th item (1-based);
//! 2. structural keys (`pages`, `styles`, `style`, ...) are handled here;
//! 3. any other key must be a property declared by the node's kind, whose
//!    value is parsed and stored.
//!
//! Problems are reported to the [`DiagnosticSink`] and the walk continues,
//! so one pass surfaces every independent problem. Once a node's keys are
//! consumed, its post-parse check runs.

mod check;
mod structure;

use crate::document::{Document, NodeId};
use crate::env::Environment;
use crate::error::{StructureError, ValidationError};
use crate::property::Property;
use crate::value::{RawValue, Resource, Value, display_raw};
use folio_style::normalize_symbol;
use folio_traits::{DiagnosticSink, normalize_font_name};
use serde_json::Map;

/// Album keys feeding lookups used by the rest of the description; they are
/// handled first wherever they appear.
const EARLY_ALBUM_KEYS: &[&str] = &["paths", "colors", "styles", "default"];

/// Target of a description key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Address {
    Own,
    /// 0-based item index.
    Item(usize),
    Invalid,
}

/// Splits `key#n` into the normalized key and its address.
fn split_key(key: &str) -> (String, Address) {
    match key.split_once('#') {
        None => (normalize_symbol(key), Address::Own),
        Some((name, index)) => {
            let address = match index.trim().parse::<usize>() {
                Ok(n) if n >= 1 => Address::Item(n - 1),
                _ => Address::Invalid,
            };
            (normalize_symbol(name), address)
        }
    }
}

pub struct DescriptionParser<'a> {
    env: &'a mut Environment,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> DescriptionParser<'a> {
    pub fn new(env: &'a mut Environment, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self { env, sink }
    }

    /// Builds the document of an album description. `file_name` names the
    /// album in messages.
    pub fn parse(&mut self, file_name: &str, description: &RawValue) -> Document {
        let mut doc = Document::new(file_name);
        let album = doc.album();
        match description.as_object() {
            Some(map) => {
                let is_early = |key: &str| EARLY_ALBUM_KEYS.contains(&split_key(key).0.as_str());
                for early in EARLY_ALBUM_KEYS {
                    for (key, raw) in map.iter().filter(|(key, _)| split_key(key).0 == *early) {
                        self.parse_entry(&mut doc, album, key, raw);
                    }
                }
                for (key, raw) in map.iter().filter(|(key, _)| !is_early(key.as_str())) {
                    self.parse_entry(&mut doc, album, key, raw);
                }
                check::check_node(&mut doc, album, self.sink);
            }
            None => self.report(StructureError::Shape {
                key: "album",
                location: doc.location(album),
                expected: "a map",
            }),
        }
        log::info!(
            "parsed {} with {} page(s)",
            doc.location(album),
            doc.pages().len()
        );
        doc
    }

    /// Consumes every key of `map` into node `id`, then checks the node.
    pub fn parse_node(&mut self, doc: &mut Document, id: NodeId, map: &Map<String, RawValue>) {
        for (key, raw) in map {
            self.parse_entry(doc, id, key, raw);
        }
        check::check_node(doc, id, self.sink);
    }

    fn parse_entry(&mut self, doc: &mut Document, id: NodeId, key: &str, raw: &RawValue) {
        let (name, address) = split_key(key);
        let target = match address {
            Address::Own => id,
            Address::Item(index) => match doc.item(id, index) {
                Some(child) => child,
                None => return self.bad_index(doc, id, key),
            },
            Address::Invalid => return self.bad_index(doc, id, key),
        };

        let kind = doc.kind(target);
        if let Some(structural) = kind.structural(&name) {
            self.parse_structural(doc, target, structural, raw);
        } else if let Some(property) = kind.lookup(&name) {
            self.set(doc, target, property, raw);
        } else {
            self.sink.warning(
                StructureError::UnknownKey {
                    key: key.to_string(),
                    location: doc.location(target),
                }
                .to_string(),
            );
        }
    }

    fn bad_index(&mut self, doc: &Document, id: NodeId, key: &str) {
        self.sink.warning(
            StructureError::BadIndex {
                key: key.to_string(),
                location: doc.location(id),
            }
            .to_string(),
        );
    }

    /// Stores a property value, recovering from what can be recovered from.
    fn set(&mut self, doc: &mut Document, id: NodeId, property: &'static Property, raw: &RawValue) {
        match doc.set_explicit(id, property, raw, self.env) {
            Ok(()) => {}
            Err(err @ ValidationError::ResourceNotFound { .. }) => {
                self.sink.warning(err.to_string());
                let placeholder = Resource::Missing(display_raw(raw));
                doc.set_value(id, property, Value::Resource(placeholder));
            }
            Err(err @ ValidationError::UnknownFont { .. }) => {
                let font = normalize_font_name(&display_raw(raw));
                if self.sink.first_font_warning(&font) {
                    self.sink.warning(err.to_string());
                }
            }
            Err(err) => self.sink.error(err.to_string()),
        }
    }

    fn report(&mut self, err: StructureError) {
        self.sink.error(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::catalog::{BORDER_COLOR, SCALE};
    use folio_traits::{InMemoryPathResolver, Monitor};
    use folio_types::Color;
    use serde_json::json;

    fn parse(description: RawValue) -> (Document, Monitor) {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut env = Environment::with_paths(InMemoryPathResolver::with_paths(["a.jpg"]));
        let mut monitor = Monitor::quiet();
        let doc = DescriptionParser::new(&mut env, &mut monitor).parse("album.json", &description);
        (doc, monitor)
    }

    #[test]
    fn test_split_key() {
        assert_eq!(split_key("border-color"), ("border-color".to_string(), Address::Own));
        assert_eq!(split_key("Border_Color"), ("border-color".to_string(), Address::Own));
        assert_eq!(split_key("image#2"), ("image".to_string(), Address::Item(1)));
        assert_eq!(split_key("image#0"), ("image".to_string(), Address::Invalid));
        assert_eq!(split_key("image#two"), ("image".to_string(), Address::Invalid));
        assert_eq!(split_key("image#-1"), ("image".to_string(), Address::Invalid));
    }

    #[test]
    fn test_early_keys_apply_before_pages() {
        let (doc, monitor) = parse(json!({
            "pages": [{"image": "a.jpg", "style": "framed", "border-color": "sea"}],
            "colors": {"sea": "#1e90ff"},
            "styles": [{"name": "framed", "scale": 0.5}]
        }));
        assert!(monitor.diagnostics().is_empty(), "{:?}", monitor.diagnostics());
        let page = doc.pages()[0];
        assert_eq!(doc.get::<f32>(page, &SCALE).unwrap(), Some(0.5));
        assert_eq!(
            doc.get::<Color>(page, &BORDER_COLOR).unwrap(),
            Some(Color::rgb(0x1e, 0x90, 0xff))
        );
    }

    #[test]
    fn test_description_must_be_a_map() {
        let (doc, monitor) = parse(json!(["a.jpg"]));
        assert_eq!(monitor.error_count(), 1);
        assert!(doc.pages().is_empty());
    }
}
