//! Nine-way alignment anchors.
use serde::Serialize;

/// Where content is pinned inside its containing box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    Center,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

/// Offset of the drawing origin from the center of the containing box, plus
/// the compass tag naming which point of the content sits on that origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchorOffset {
    pub tag: &'static str,
    pub dx: f32,
    pub dy: f32,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::Center,
        Anchor::Top,
        Anchor::TopRight,
        Anchor::Right,
        Anchor::BottomRight,
        Anchor::Bottom,
        Anchor::BottomLeft,
        Anchor::Left,
        Anchor::TopLeft,
    ];

    /// Offset for a containing box of `width` x `height`, in page coordinates
    /// (`dy` negative means upwards).
    pub fn offset(self, width: f32, height: f32) -> AnchorOffset {
        let (w, h) = (width / 2.0, height / 2.0);
        let (tag, dx, dy) = match self {
            Anchor::Center => ("center", 0.0, 0.0),
            Anchor::Top => ("north", 0.0, -h),
            Anchor::TopRight => ("north east", w, -h),
            Anchor::Right => ("east", w, 0.0),
            Anchor::BottomRight => ("south east", w, h),
            Anchor::Bottom => ("south", 0.0, h),
            Anchor::BottomLeft => ("south west", -w, h),
            Anchor::Left => ("west", -w, 0.0),
            Anchor::TopLeft => ("north west", -w, -h),
        };
        AnchorOffset { tag, dx, dy }
    }
}
