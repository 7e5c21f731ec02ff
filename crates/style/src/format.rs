//! Sheet formats. All dimensions are in mm.
use crate::symbol::normalize_symbol;
use folio_types::Rect;
use serde::Serialize;

const DEFAULT_MARGIN: f32 = 10.0;
const DEFAULT_COLUMN_SEP: f32 = 5.0;
const LANDSCAPE_SUFFIX: &str = "-landscape";

/// Page margins. `odd_side` is the left margin of odd pages and the right
/// margin of even pages; `even_side` the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub odd_side: f32,
    pub even_side: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            odd_side: value,
            even_side: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins::all(DEFAULT_MARGIN)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFormat {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
    pub column_sep: f32,
}

/// ISO 216 and traditional book sizes.
const SHEETS: &[(&str, f32, f32)] = &[
    ("a3", 297.0, 420.0),
    ("a4", 210.0, 297.0),
    ("a5", 148.0, 210.0),
    ("folio", 305.0, 483.0),
    ("quarto", 214.0, 305.0),
    ("imperial-octavo", 210.0, 292.0),
    ("super-octavo", 178.0, 279.0),
    ("royal-octavo", 159.0, 254.0),
    ("medium-octavo", 165.0, 235.0),
    ("octavo", 153.0, 229.0),
    ("crown-octavo", 137.0, 203.0),
    ("duodecimo", 127.0, 187.0),
    ("sextodecimo", 102.0, 171.0),
    ("octodecimo", 102.0, 165.0),
];

impl Default for PageFormat {
    fn default() -> Self {
        PageFormat::a4()
    }
}

impl PageFormat {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            margins: Margins::default(),
            column_sep: DEFAULT_COLUMN_SEP,
        }
    }

    pub fn a4() -> Self {
        PageFormat {
            margins: Margins {
                top: 19.0,
                bottom: 36.7,
                odd_side: 19.0,
                even_side: 13.2,
            },
            ..PageFormat::new("a4", 210.0, 297.0)
        }
    }

    /// Looks up a format by name; a `-landscape` suffix swaps the sheet.
    pub fn lookup(raw: &str) -> Option<PageFormat> {
        let name = normalize_symbol(raw);
        if let Some(base) = name.strip_suffix(LANDSCAPE_SUFFIX) {
            return Self::lookup(base).map(|format| format.landscape());
        }
        if name == "a4" {
            return Some(PageFormat::a4());
        }
        SHEETS
            .iter()
            .find(|(sheet, _, _)| *sheet == name)
            .map(|(sheet, width, height)| PageFormat::new(*sheet, *width, *height))
    }

    /// Names accepted by [`PageFormat::lookup`], without the landscape variants.
    pub fn names() -> impl Iterator<Item = &'static str> {
        SHEETS.iter().map(|(name, _, _)| *name)
    }

    pub fn landscape(&self) -> PageFormat {
        PageFormat {
            name: format!("{}{}", self.name, LANDSCAPE_SUFFIX),
            width: self.height,
            height: self.width,
            margins: Margins {
                top: self.margins.odd_side,
                bottom: self.margins.even_side,
                odd_side: self.margins.top,
                even_side: self.margins.bottom,
            },
            column_sep: self.column_sep,
        }
    }

    pub fn body_width(&self) -> f32 {
        (self.width - self.margins.odd_side - self.margins.even_side).max(0.0)
    }

    pub fn body_height(&self) -> f32 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }

    /// Printable area of the page with 0-based `page_number`; side margins
    /// mirror between odd and even pages.
    pub fn body(&self, page_number: usize) -> Rect {
        let left = if page_number % 2 == 0 {
            self.margins.odd_side
        } else {
            self.margins.even_side
        };
        Rect::new(left, self.margins.top, self.body_width(), self.body_height())
    }

    pub fn sheet(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let a5 = PageFormat::lookup("A5").unwrap();
        assert_eq!((a5.width, a5.height), (148.0, 210.0));
        assert_eq!(a5.margins, Margins::all(10.0));
        assert!(PageFormat::lookup("b7").is_none());
        assert_eq!(PageFormat::lookup("Royal_Octavo").unwrap().width, 159.0);
    }

    #[test]
    fn test_a4_body() {
        let a4 = PageFormat::a4();
        assert!((a4.body_width() - 177.8).abs() < 1e-3);
        assert!((a4.body_height() - 241.3).abs() < 1e-3);
        assert_eq!(a4.body(0).x, 19.0);
        assert_eq!(a4.body(1).x, 13.2);
    }

    #[test]
    fn test_landscape() {
        let format = PageFormat::lookup("a4-landscape").unwrap();
        assert_eq!(format.name, "a4-landscape");
        assert_eq!((format.width, format.height), (297.0, 210.0));
        assert_eq!(format.margins.top, 19.0);
        assert_eq!(format.margins.even_side, 36.7);
    }
}
