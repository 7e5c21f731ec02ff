//! Static named-color table, queried after the document's own color table.
use folio_types::Color;

const NAMED_COLORS: &[(&str, Color)] = &[
    ("aqua", Color::rgb(0x00, 0xff, 0xff)),
    ("beige", Color::rgb(0xf5, 0xf5, 0xdc)),
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xff)),
    ("brown", Color::rgb(0xa5, 0x2a, 0x2a)),
    ("cyan", Color::rgb(0x00, 0xff, 0xff)),
    ("darkblue", Color::rgb(0x00, 0x00, 0x8b)),
    ("darkgray", Color::rgb(0xa9, 0xa9, 0xa9)),
    ("darkgreen", Color::rgb(0x00, 0x64, 0x00)),
    ("darkred", Color::rgb(0x8b, 0x00, 0x00)),
    ("fuchsia", Color::rgb(0xff, 0x00, 0xff)),
    ("gold", Color::rgb(0xff, 0xd7, 0x00)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("grey", Color::rgb(0x80, 0x80, 0x80)),
    ("ivory", Color::rgb(0xff, 0xff, 0xf0)),
    ("lightblue", Color::rgb(0xad, 0xd8, 0xe6)),
    ("lightgray", Color::rgb(0xd3, 0xd3, 0xd3)),
    ("lime", Color::rgb(0x00, 0xff, 0x00)),
    ("magenta", Color::rgb(0xff, 0x00, 0xff)),
    ("maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("orange", Color::rgb(0xff, 0xa5, 0x00)),
    ("pink", Color::rgb(0xff, 0xc0, 0xcb)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("red", Color::rgb(0xff, 0x00, 0x00)),
    ("salmon", Color::rgb(0xfa, 0x80, 0x72)),
    ("sepia", Color::rgb(0x70, 0x42, 0x14)),
    ("silver", Color::rgb(0xc0, 0xc0, 0xc0)),
    ("tan", Color::rgb(0xd2, 0xb4, 0x8c)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("violet", Color::rgb(0xee, 0x82, 0xee)),
    ("white", Color::rgb(0xff, 0xff, 0xff)),
    ("yellow", Color::rgb(0xff, 0xff, 0x00)),
];

/// Normalizes a color name: lower-cased, spaces, hyphens and underscores removed.
pub fn normalize_color_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn lookup_named_color(name: &str) -> Option<Color> {
    let key = normalize_color_name(name);
    NAMED_COLORS
        .binary_search_by(|(candidate, _)| (*candidate).cmp(key.as_str()))
        .ok()
        .map(|index| NAMED_COLORS[index].1)
}
