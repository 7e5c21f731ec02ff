//! Node kinds and the keys each kind accepts.

use crate::layout::{FrameKind, PageLayout};
use crate::property::Property;
use crate::property::catalog::{
    ALBUM_PROPERTIES, BACKGROUND_PROPERTIES, IMAGE_CONTENT_PROPERTIES, IMAGE_STYLE_PROPERTIES,
    PAGE_PROPERTIES, TEXT_CONTENT_PROPERTIES, TEXT_STYLE_PROPERTIES,
};

/// Keys handled by the description parser itself rather than stored as
/// property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structural {
    Pages,
    Paths,
    Colors,
    Defaults,
    DeclareStyles,
    ApplyStyle,
    ApplyStyles,
    /// Consumed when the node is created.
    Consumed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of the tree; holds the album-wide defaults.
    Default,
    Album,
    /// A named, detached bag of values copied onto nodes that apply it.
    Style,
    Page(PageLayout),
    Image,
    Text,
}

static STYLE_GROUPS: &[&[&Property]] = &[
    BACKGROUND_PROPERTIES,
    IMAGE_STYLE_PROPERTIES,
    TEXT_STYLE_PROPERTIES,
];

static ALBUM_GROUPS: &[&[&Property]] = &[
    ALBUM_PROPERTIES,
    BACKGROUND_PROPERTIES,
    IMAGE_STYLE_PROPERTIES,
    TEXT_STYLE_PROPERTIES,
];

static PAGE_GROUPS: &[&[&Property]] = &[PAGE_PROPERTIES, BACKGROUND_PROPERTIES];

static IMAGE_GROUPS: &[&[&Property]] = &[IMAGE_CONTENT_PROPERTIES, IMAGE_STYLE_PROPERTIES];

static TEXT_GROUPS: &[&[&Property]] = &[TEXT_CONTENT_PROPERTIES, TEXT_STYLE_PROPERTIES];

impl NodeKind {
    pub fn frame(kind: FrameKind) -> NodeKind {
        match kind {
            FrameKind::Image => NodeKind::Image,
            FrameKind::Text => NodeKind::Text,
        }
    }

    fn groups(self) -> impl Iterator<Item = &'static [&'static Property]> {
        let (own, extra): (&'static [&'static [&'static Property]], _) = match self {
            NodeKind::Default | NodeKind::Style => (STYLE_GROUPS, None),
            NodeKind::Album => (ALBUM_GROUPS, None),
            NodeKind::Page(layout) => (PAGE_GROUPS, Some(layout.property_groups())),
            NodeKind::Image => (IMAGE_GROUPS, None),
            NodeKind::Text => (TEXT_GROUPS, None),
        };
        own.iter()
            .chain(extra.into_iter().flatten())
            .copied()
    }

    /// Every property this kind declares.
    pub fn properties(self) -> impl Iterator<Item = &'static Property> {
        self.groups().flatten().copied()
    }

    /// The property declared under `key`, if any.
    pub fn lookup(self, key: &str) -> Option<&'static Property> {
        self.properties().find(|property| property.key == key)
    }

    pub fn structural(self, key: &str) -> Option<Structural> {
        match (self, key) {
            (NodeKind::Album, "pages") => Some(Structural::Pages),
            (NodeKind::Album, "paths") => Some(Structural::Paths),
            (NodeKind::Album, "colors") => Some(Structural::Colors),
            (NodeKind::Album, "default") => Some(Structural::Defaults),
            (NodeKind::Album, "styles") => Some(Structural::DeclareStyles),
            (NodeKind::Page(_), "type") | (NodeKind::Style, "name") => Some(Structural::Consumed),
            (NodeKind::Page(_) | NodeKind::Image | NodeKind::Text, "style") => {
                Some(Structural::ApplyStyle)
            }
            (NodeKind::Page(_) | NodeKind::Image | NodeKind::Text, "styles") => {
                Some(Structural::ApplyStyles)
            }
            _ => None,
        }
    }
}
