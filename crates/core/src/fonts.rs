//! Built-in registry of the font families of a standard typesetting install.

use folio_traits::{FontHandle, FontRegistry, normalize_font_name};
use std::collections::HashMap;

/// `(backend key, display name)` of the known families.
const FAMILIES: &[(&str, &str)] = &[
    ("pag", "Avant Garde"),
    ("fvs", "Bitstream Vera Sans"),
    ("pbk", "Bookman"),
    ("bch", "Charter"),
    ("ccr", "Computer Concrete"),
    ("cmr", "Computer Modern"),
    ("pcr", "Courier"),
    ("ugm", "Garamond"),
    ("phv", "Helvetica"),
    ("zi4", "Inconsolata"),
    ("lmr", "Latin Modern"),
    ("lmss", "Latin Modern Sans"),
    ("lmtt", "Latin Modern Typewriter"),
    ("LinuxBiolinumT-OsF", "Linux Biolinum"),
    ("LinuxLibertineT-OsF", "Linux Libertine"),
    ("pnc", "New Century Schoolbook"),
    ("ppl", "Palatino"),
    ("qag", "TeX Gyre Adventor"),
    ("qbk", "TeX Gyre Bonum"),
    ("qzc", "TeX Gyre Chorus"),
    ("qcr", "TeX Gyre Cursor"),
    ("qhv", "TeX Gyre Heros"),
    ("qpl", "TeX Gyre Pagella"),
    ("qcs", "TeX Gyre Schola"),
    ("qtm", "TeX Gyre Termes"),
    ("ptm", "Times"),
    ("uncl", "Uncial"),
    ("put", "Utopia"),
    ("pzc", "Zapf Chancery"),
];

#[derive(Debug, Clone)]
struct Entry {
    handle: FontHandle,
    available: bool,
}

/// Registry of the classic typesetting families, keyed by normalized name.
///
/// Every family is assumed available until an external probe says otherwise
/// through [`TypesetFontRegistry::mark_unavailable`].
#[derive(Debug, Clone)]
pub struct TypesetFontRegistry {
    fonts: HashMap<String, Entry>,
}

impl Default for TypesetFontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypesetFontRegistry {
    pub fn new() -> Self {
        let fonts = FAMILIES
            .iter()
            .map(|(key, name)| {
                let entry = Entry {
                    handle: FontHandle::new(*key, *name),
                    available: true,
                };
                (normalize_font_name(name), entry)
            })
            .collect();
        Self { fonts }
    }

    /// Adds or replaces a family.
    pub fn register(&mut self, key: &str, name: &str) {
        let entry = Entry {
            handle: FontHandle::new(key, name),
            available: true,
        };
        self.fonts.insert(normalize_font_name(name), entry);
    }

    /// Marks the family with backend `key` as unavailable. Returns whether
    /// such a family exists.
    pub fn mark_unavailable(&mut self, key: &str) -> bool {
        let mut found = false;
        for entry in self.fonts.values_mut().filter(|e| &*e.handle.key == key) {
            entry.available = false;
            found = true;
        }
        found
    }

    /// Available families sorted by display name.
    pub fn families(&self) -> Vec<&FontHandle> {
        let mut families: Vec<_> = self
            .fonts
            .values()
            .filter(|entry| entry.available)
            .map(|entry| &entry.handle)
            .collect();
        families.sort_by(|a, b| a.name.cmp(&b.name));
        families
    }
}

impl FontRegistry for TypesetFontRegistry {
    fn lookup(&self, normalized: &str) -> Option<FontHandle> {
        self.fonts
            .get(normalized)
            .filter(|entry| entry.available)
            .map(|entry| entry.handle.clone())
    }

    fn name(&self) -> &'static str {
        "TypesetFontRegistry"
    }
}
