//! Font lookup abstraction.

use std::fmt::{self, Debug};
use std::sync::Arc;

/// Normalizes a font family name: lower-cased, spaces removed.
pub fn normalize_font_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A font family known to the typesetting backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontHandle {
    /// Backend family key (e.g. `ppl` for Palatino).
    pub key: Arc<str>,
    /// Display name.
    pub name: Arc<str>,
}

impl FontHandle {
    pub fn new(key: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    /// Writes the code selecting this family in the generated markup.
    pub fn write_activation(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "\\fontfamily{{{}}}\\selectfont", self.key)
    }

    pub fn activation(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_activation(&mut out);
        out
    }
}

impl fmt::Display for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A registry of font families.
pub trait FontRegistry: Debug {
    /// Looks up a family by normalized name (see [`normalize_font_name`]).
    fn lookup(&self, normalized: &str) -> Option<FontHandle>;

    /// Returns a human-readable name for this registry (for logging/debugging).
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_font_name() {
        assert_eq!(normalize_font_name("TeX Gyre Pagella"), "texgyrepagella");
        assert_eq!(normalize_font_name(" Times "), "times");
    }

    #[test]
    fn test_activation() {
        let font = FontHandle::new("ppl", "Palatino");
        assert_eq!(font.activation(), "\\fontfamily{ppl}\\selectfont\n");
        assert_eq!(font.to_string(), "Palatino");
    }
}
