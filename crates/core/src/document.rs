//! The document tree and cascade resolution.
//!
//! Nodes live in an arena owned by [`Document`] and refer to each other by
//! [`NodeId`]. The tree is `default -> album -> pages -> frames`; styles are
//! detached nodes that only serve as a source of values.

use crate::env::Environment;
use crate::error::{ResolutionError, ValidationError};
use crate::kinds::NodeKind;
use crate::layout::PageLayout;
use crate::property::{Mismatch, Mode, ParseContext, Property, PropertyId};
use crate::snapshot::Snapshot;
use crate::value::{FromValue, RawValue, Value, display_raw};
use folio_style::{Symbolic, normalize_color_name};
use folio_types::Color;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// 0-based page number; the owning page's for frames.
    number: usize,
    required: bool,
    dropped: bool,
    values: BTreeMap<PropertyId, Value>,
    snapshot: OnceLock<Snapshot>,
}

impl Node {
    fn new(kind: NodeKind, name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            name: name.into(),
            parent,
            children: Vec::new(),
            number: 0,
            required: false,
            dropped: false,
            values: BTreeMap::new(),
            snapshot: OnceLock::new(),
        }
    }
}

/// How a value is looked up, see [`Document::resolve`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Lookup<'a> {
    /// Only consult the node itself.
    pub direct: bool,
    /// A missing value without default is an error.
    pub required: bool,
    pub default: Option<&'a Value>,
}

impl<'a> Lookup<'a> {
    /// The lookup implied by the property's own mode and default.
    pub fn of(property: &'a Property) -> Self {
        Self {
            direct: property.mode != Mode::Inherited,
            required: property.mode == Mode::Required,
            default: property.default.as_ref(),
        }
    }

    pub fn inherited() -> Self {
        Self::default()
    }

    pub fn direct() -> Self {
        Self {
            direct: true,
            ..Self::default()
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }

    pub fn with_default(self, default: &'a Value) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }
}

#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    album: NodeId,
    styles: HashMap<String, NodeId>,
    colors: HashMap<String, Color>,
    pages_declared: bool,
    snapshots_taken: AtomicBool,
}

impl Document {
    /// An empty album named after its description file.
    pub fn new(file_name: &str) -> Self {
        let root = NodeId(0);
        let album = NodeId(1);
        let album_node = Node::new(NodeKind::Album, file_name, Some(root));
        let mut root_node = Node::new(NodeKind::Default, "default", None);
        root_node.children.push(album);
        Self {
            nodes: vec![root_node, album_node],
            root,
            album,
            styles: HashMap::new(),
            colors: HashMap::new(),
            pages_declared: false,
            snapshots_taken: AtomicBool::new(false),
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = node.parent {
            self.node_mut(parent).children.push(id);
        }
        self.nodes.push(node);
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn album(&self) -> NodeId {
        self.album
    }

    /// Appends a page with the frames of its layout.
    pub fn add_page(&mut self, layout: PageLayout, name: &str) -> NodeId {
        let number = self.node(self.album).children.len();
        let mut page = Node::new(NodeKind::Page(layout), name, Some(self.album));
        page.number = number;
        let page = self.push(page);
        for slot in layout.slots() {
            let mut frame = Node::new(NodeKind::frame(slot.kind), slot.name, Some(page));
            frame.number = number;
            frame.required = slot.required;
            self.push(frame);
        }
        log::debug!("added {} page {}", layout.name(), self.location(page));
        page
    }

    /// Declares a style; a later declaration with the same name replaces it.
    pub fn add_style(&mut self, name: &str) -> NodeId {
        let id = self.push(Node::new(NodeKind::Style, name, None));
        if self.styles.insert(name.to_string(), id).is_some() {
            log::debug!("style {} redeclared", name);
        }
        id
    }

    pub fn style(&self, name: &str) -> Option<NodeId> {
        self.styles.get(name).copied()
    }

    pub fn define_color(&mut self, name: &str, color: Color) {
        self.colors.insert(normalize_color_name(name), color);
    }

    pub fn colors(&self) -> &HashMap<String, Color> {
        &self.colors
    }

    pub(crate) fn mark_pages_declared(&mut self) {
        self.pages_declared = true;
    }

    pub fn pages_declared(&self) -> bool {
        self.pages_declared
    }

    pub fn pages(&self) -> &[NodeId] {
        &self.node(self.album).children
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    /// 0-based number of the page `id` belongs to.
    pub fn page_number(&self, id: NodeId) -> usize {
        self.node(id).number
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Child at 0-based `index`.
    pub fn item(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id).children.get(index).copied()
    }

    /// The node itself followed by its ancestors.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), |current| self.node(*current).parent)
    }

    pub fn is_required(&self, id: NodeId) -> bool {
        self.node(id).required
    }

    pub fn is_dropped(&self, id: NodeId) -> bool {
        self.node(id).dropped
    }

    /// Excludes a node from rendering.
    pub fn drop_node(&mut self, id: NodeId) {
        log::debug!("dropping {}", self.location(id));
        self.node_mut(id).dropped = true;
    }

    /// Human-readable position of a node, used in every diagnostic.
    pub fn location(&self, id: NodeId) -> String {
        let node = self.node(id);
        match node.kind {
            NodeKind::Default => "default".to_string(),
            NodeKind::Album => format!("album {}", node.name),
            NodeKind::Style => format!("style {}", node.name),
            NodeKind::Page(_) => format!("{}:{}", node.name, node.number + 1),
            NodeKind::Image | NodeKind::Text => match node.parent {
                Some(page) => format!("{} in {}", node.name, self.location(page)),
                None => node.name.clone(),
            },
        }
    }

    /// The value stored on the node itself.
    pub fn explicit(&self, id: NodeId, property: &Property) -> Option<&Value> {
        self.node(id).values.get(&property.id)
    }

    /// Parses `raw` against the property's grammar and stores it.
    pub fn set_explicit(
        &mut self,
        id: NodeId,
        property: &'static Property,
        raw: &RawValue,
        env: &Environment,
    ) -> Result<(), ValidationError> {
        let parsed = {
            let ctx = ParseContext {
                colors: &self.colors,
                paths: env.paths(),
                fonts: env.fonts(),
            };
            property.value_type.parse(raw, &ctx)
        };
        match parsed {
            Ok(value) => {
                self.set_value(id, property, value);
                Ok(())
            }
            Err(mismatch) => Err(self.validation_error(id, property, raw, mismatch)),
        }
    }

    fn validation_error(
        &self,
        id: NodeId,
        property: &Property,
        raw: &RawValue,
        mismatch: Mismatch,
    ) -> ValidationError {
        let location = self.location(id);
        let value = display_raw(raw);
        match mismatch {
            Mismatch::Invalid { expected } => ValidationError::Invalid {
                property: property.key,
                location,
                value,
                expected,
            },
            Mismatch::NotFound => ValidationError::ResourceNotFound {
                property: property.key,
                location,
                value,
            },
            Mismatch::UnknownFont => ValidationError::UnknownFont {
                property: property.key,
                location,
                value,
            },
        }
    }

    /// Stores an already validated value, then fires the property's
    /// implication.
    pub fn set_value(&mut self, id: NodeId, property: &'static Property, value: Value) {
        log::trace!("{}: {} = {}", self.location(id), property.key, value);
        if self.snapshots_taken.swap(false, Ordering::Relaxed) {
            self.nodes.iter_mut().for_each(|node| {
                node.snapshot.take();
            });
        }
        self.node_mut(id).values.insert(property.id, value);

        if let Some(implication) = &property.implies {
            let target = implication.target;
            let fires = matches!(
                self.resolve(id, target, Lookup::of(target)),
                Ok(Some(current)) if *current == implication.when
            );
            if fires {
                self.set_value(id, target, implication.value.clone());
            }
        }
    }

    /// Looks a value up from `id`.
    ///
    /// With `direct`, only the node's own value counts; otherwise the
    /// closest ancestor holding a value wins. When nothing is found a
    /// required lookup fails, even with a default; otherwise the default
    /// applies.
    pub fn resolve<'a>(
        &'a self,
        id: NodeId,
        property: &Property,
        lookup: Lookup<'a>,
    ) -> Result<Option<&'a Value>, ResolutionError> {
        let found = if lookup.direct {
            self.explicit(id, property)
        } else {
            self.ancestors(id)
                .find_map(|ancestor| self.explicit(ancestor, property))
        };
        match found {
            Some(value) => Ok(Some(value)),
            None if lookup.required => Err(ResolutionError::RequiredMissing {
                property: property.key,
                location: self.location(id),
            }),
            None => Ok(lookup.default),
        }
    }

    /// Resolves with the property's own mode and converts to `T`.
    pub fn get<T: FromValue>(
        &self,
        id: NodeId,
        property: &Property,
    ) -> Result<Option<T>, ResolutionError> {
        Ok(self
            .resolve(id, property, Lookup::of(property))?
            .and_then(T::from_value))
    }

    /// Like [`Document::get`], falling back to `T::default()`.
    pub fn get_or_default<T: FromValue + Default>(
        &self,
        id: NodeId,
        property: &Property,
    ) -> Result<T, ResolutionError> {
        Ok(self.get(id, property)?.unwrap_or_default())
    }

    /// Content of a frame: its own value, else the owning page's own value.
    /// Fails when the frame requires content and neither provides it.
    pub fn frame_content(
        &self,
        frame: NodeId,
        property: &Property,
    ) -> Result<Option<&Value>, ResolutionError> {
        let page_value = || {
            self.parent(frame)
                .and_then(|page| self.explicit(page, property))
        };
        match self.explicit(frame, property).or_else(page_value) {
            Some(value) => Ok(Some(value)),
            None if self.is_required(frame) => Err(ResolutionError::RequiredMissing {
                property: property.key,
                location: self.location(frame),
            }),
            None => Ok(None),
        }
    }

    /// Copies the style's values declared by the target's kind.
    pub fn apply_style(&mut self, target: NodeId, style: NodeId) {
        let copies: Vec<(&'static Property, Value)> = self
            .kind(target)
            .properties()
            .filter_map(|property| {
                self.explicit(style, property)
                    .map(|value| (property, value.clone()))
            })
            .collect();
        log::debug!(
            "applying {} ({} values) to {}",
            self.location(style),
            copies.len(),
            self.location(target)
        );
        for (property, value) in copies {
            self.set_value(target, property, value);
        }
    }

    /// Snapshot slot of a node. Any later mutation of the document clears
    /// every slot.
    pub(crate) fn snapshot_cell(&self, id: NodeId) -> &OnceLock<Snapshot> {
        self.snapshots_taken.store(true, Ordering::Relaxed);
        &self.node(id).snapshot
    }
}
