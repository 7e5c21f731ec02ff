use crate::symbol::symbolic;
use serde::Serialize;

/// How an image is fitted into its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Keep the aspect ratio, fit inside the frame.
    #[default]
    Fit,
    /// Stretch to the frame extents.
    Stretch,
    /// Keep the aspect ratio, cover the frame and clip.
    Fill,
    /// Repeat the image (backgrounds only).
    Tile,
}

symbolic!(FitMode {
    Fit => "fit",
    Stretch => "stretch",
    Fill => "fill",
    Tile => "tile",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    #[default]
    None,
    Simple,
    Fuzzy,
}

symbolic!(Shadow {
    None => "none",
    Simple => "simple",
    Fuzzy => "fuzzy",
});

impl Shadow {
    /// Opacity used when none is given.
    pub fn default_opacity(self) -> f32 {
        match self {
            Shadow::Fuzzy => 1.0,
            Shadow::None | Shadow::Simple => 0.25,
        }
    }
}

/// Split direction of two-frame pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Frames stacked one above the other.
    #[default]
    Vertical,
    /// Frames side by side.
    Horizontal,
}

symbolic!(Orientation {
    Vertical => "vertical",
    Horizontal => "horizontal",
});
