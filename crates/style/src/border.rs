use crate::symbol::symbolic;
use folio_types::Length;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dotted,
    Dashed,
    Double,
}

symbolic!(BorderStyle {
    None => "none",
    Solid => "solid",
    Dotted => "dotted",
    Dashed => "dashed",
    Double => "double",
});

/// Symbolic border widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderWidth {
    Thin,
    #[default]
    Medium,
    Thick,
}

symbolic!(BorderWidth {
    Thin => "thin",
    Medium => "medium",
    Thick => "thick",
});

impl BorderWidth {
    /// Line width in mm (0.4pt, 0.8pt and 1.6pt).
    pub fn mm(self) -> f32 {
        match self {
            BorderWidth::Thin => 0.14,
            BorderWidth::Medium => 0.28,
            BorderWidth::Thick => 0.56,
        }
    }
}

/// A line width given either symbolically or as a length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineWidth {
    Named(BorderWidth),
    Length(Length),
}

impl Default for LineWidth {
    fn default() -> Self {
        LineWidth::Named(BorderWidth::default())
    }
}

impl LineWidth {
    /// Width in mm; proportional widths resolve against `reference`.
    pub fn mm(&self, reference: f32) -> f32 {
        match self {
            LineWidth::Named(width) => width.mm(),
            LineWidth::Length(length) => length.resolve(reference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbolic;

    #[test]
    fn test_line_width() {
        assert_eq!(LineWidth::default().mm(100.0), 0.28);
        assert_eq!(LineWidth::Length(Length::mm(2.0)).mm(100.0), 2.0);
        assert_eq!(LineWidth::Length(Length::percent(1.0)).mm(100.0), 1.0);
    }

    #[test]
    fn test_border_style_names() {
        assert_eq!(BorderStyle::from_name("Dashed"), Some(BorderStyle::Dashed));
        assert_eq!(BorderStyle::expected(), "none, solid, dotted, dashed, double");
    }
}
