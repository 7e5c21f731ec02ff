//! Enumerations written as symbolic names in descriptions.

use folio_types::Anchor;

/// Normalizes a symbolic name: trimmed, lower-cased, with underscores and
/// spaces turned into hyphens (`"Top_Right"` and `"top right"` both become
/// `"top-right"`).
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// A closed set of values addressed by symbolic names.
pub trait Symbolic: Sized + Copy + 'static {
    const VARIANTS: &'static [Self];

    /// Canonical (normalized) name of the value.
    fn name(self) -> &'static str;

    /// Looks up a value by any spelling whose normalized form matches.
    fn from_name(raw: &str) -> Option<Self> {
        let normalized = normalize_symbol(raw);
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name() == normalized)
    }

    /// Comma-separated list of the valid names.
    fn expected() -> String {
        itertools::join(Self::VARIANTS.iter().map(|v| v.name()), ", ")
    }
}

macro_rules! symbolic {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $crate::symbol::Symbolic for $ty {
            const VARIANTS: &'static [Self] = &[$($ty::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }
    };
}

pub(crate) use symbolic;

symbolic!(Anchor {
    Center => "center",
    Top => "top",
    TopRight => "top-right",
    Right => "right",
    BottomRight => "bottom-right",
    Bottom => "bottom",
    BottomLeft => "bottom-left",
    Left => "left",
    TopLeft => "top-left",
});
