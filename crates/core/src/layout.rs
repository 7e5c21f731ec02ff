//! Page layouts: which frames a page owns and where they sit in the body.

use crate::property::Property;
use crate::property::catalog::{
    CAPTIONED_PROPERTIES, DUO_PROPERTIES, IMAGE_CONTENT_PROPERTIES, IMAGE_STYLE_PROPERTIES,
    TEXT_CONTENT_PROPERTIES, TEXT_STYLE_PROPERTIES,
};
use folio_style::{Orientation, Symbolic};
use folio_types::{Length, Rect};

/// Kind of frame a layout slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Image,
    Text,
}

/// A frame slot: its kind, its name in messages and whether its content is
/// mandatory.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub kind: FrameKind,
    pub name: &'static str,
    pub required: bool,
}

const IMAGE_SLOT: Slot = Slot {
    kind: FrameKind::Image,
    name: "image",
    required: true,
};

static CENTER_GROUPS: &[&[&Property]] = &[IMAGE_CONTENT_PROPERTIES, IMAGE_STYLE_PROPERTIES];

static DUO_GROUPS: &[&[&Property]] = &[
    DUO_PROPERTIES,
    IMAGE_CONTENT_PROPERTIES,
    IMAGE_STYLE_PROPERTIES,
];

static CAPTIONED_GROUPS: &[&[&Property]] = &[
    CAPTIONED_PROPERTIES,
    IMAGE_CONTENT_PROPERTIES,
    IMAGE_STYLE_PROPERTIES,
    TEXT_CONTENT_PROPERTIES,
    TEXT_STYLE_PROPERTIES,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageLayout {
    /// One image filling the body.
    #[default]
    Center,
    /// Two images side by side or stacked.
    Duo,
    /// An image above a caption.
    Captioned,
}

impl Symbolic for PageLayout {
    const VARIANTS: &'static [Self] = &[PageLayout::Center, PageLayout::Duo, PageLayout::Captioned];

    fn name(self) -> &'static str {
        match self {
            PageLayout::Center => "center",
            PageLayout::Duo => "duo",
            PageLayout::Captioned => "captioned",
        }
    }
}

/// Page-level parameters a layout reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub orientation: Orientation,
    pub caption_height: Length,
    pub column_sep: f32,
}

impl PageLayout {
    /// Frame slots, in item order.
    pub fn slots(self) -> &'static [Slot] {
        match self {
            PageLayout::Center => &[IMAGE_SLOT],
            PageLayout::Duo => &[
                Slot {
                    name: "image 1",
                    ..IMAGE_SLOT
                },
                Slot {
                    name: "image 2",
                    ..IMAGE_SLOT
                },
            ],
            PageLayout::Captioned => &[
                IMAGE_SLOT,
                Slot {
                    kind: FrameKind::Text,
                    name: "caption",
                    required: false,
                },
            ],
        }
    }

    /// Property groups a page of this layout declares beyond the common ones.
    pub fn property_groups(self) -> &'static [&'static [&'static Property]] {
        match self {
            PageLayout::Center => CENTER_GROUPS,
            PageLayout::Duo => DUO_GROUPS,
            PageLayout::Captioned => CAPTIONED_GROUPS,
        }
    }

    /// Boxes of the frames inside `body`, one per slot.
    pub fn frames(self, body: Rect, params: &LayoutParams) -> Vec<Rect> {
        match self {
            PageLayout::Center => vec![body],
            PageLayout::Duo => {
                let (first, second) = match params.orientation {
                    Orientation::Vertical => {
                        let width = (body.width - params.column_sep) / 2.0;
                        body.split_columns(width, params.column_sep)
                    }
                    Orientation::Horizontal => {
                        let height = (body.height - params.column_sep) / 2.0;
                        body.split_rows(height, params.column_sep)
                    }
                };
                vec![first, second]
            }
            PageLayout::Captioned => {
                let caption = params
                    .caption_height
                    .resolve(body.height)
                    .clamp(0.0, body.height);
                let (image, text) = body.split_rows(body.height - caption, 0.0);
                vec![image, text]
            }
        }
    }
}
