use serde_json::{Value, json};

/// Images present in the default test gallery.
pub const IMAGES: &[&str] = &["beach.jpg", "dunes.jpg", "harbour.jpg", "lake.jpg"];

/// An album holding the given pages.
pub fn album_with_pages(pages: Value) -> Value {
    json!({
        "title": "Summer",
        "author": "A. Walker",
        "pages": pages
    })
}

pub fn center_page(name: &str, image: &str) -> Value {
    json!({
        "name": name,
        "image": image
    })
}

pub fn duo_page(name: &str, first: &str, second: &str) -> Value {
    json!({
        "name": name,
        "type": "duo",
        "image#1": first,
        "image#2": second
    })
}

pub fn captioned_page(name: &str, image: &str, caption: &str) -> Value {
    json!({
        "name": name,
        "type": "captioned",
        "image": image,
        "text#2": caption
    })
}

/// An album with one page of each layout.
pub fn sample_album() -> Value {
    album_with_pages(json!([
        center_page("cover", "beach.jpg"),
        duo_page("coast", "dunes.jpg", "harbour.jpg"),
        captioned_page("evening", "lake.jpg", "Lake at dusk")
    ]))
}
