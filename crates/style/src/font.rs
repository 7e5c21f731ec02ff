use crate::symbol::symbolic;
use serde::Serialize;

/// Relative font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    XxSmall,
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
    XxLarge,
}

symbolic!(FontSize {
    XxSmall => "xx-small",
    XSmall => "x-small",
    Small => "small",
    Medium => "medium",
    Large => "large",
    XLarge => "x-large",
    XxLarge => "xx-large",
});

impl FontSize {
    /// Nominal size in points for a 10pt body.
    pub fn points(self) -> f32 {
        match self {
            FontSize::XxSmall => 5.0,
            FontSize::XSmall => 8.0,
            FontSize::Small => 9.0,
            FontSize::Medium => 10.0,
            FontSize::Large => 14.4,
            FontSize::XLarge => 17.28,
            FontSize::XxLarge => 24.88,
        }
    }
}
