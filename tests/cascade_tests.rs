mod common;

use common::fixtures::*;
use common::{Gallery, TestResult, frame, page, warnings};
use folio::{
    BorderStyle, Color, FitMode, Length, Shadow,
    property::catalog::{BACKGROUND_COLOR, BORDER_COLOR, BORDER_STYLE, SCALE},
};
use serde_json::json;

#[test]
fn test_border_color_inherited_from_album_to_image() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let gallery = Gallery::with_images(IMAGES)?;
    let description = json!({
        "border-color": "black",
        "pages": [center_page("cover", "beach.jpg")]
    });
    let album = gallery.load(&description)?;
    let image = frame(&album, 0, 0);

    let style = album.document.image_style(image)?.ok_or("not an image")?;
    assert_eq!(style.border.color, Color::BLACK);
    // Setting a border color on a borderless node turns the border on.
    assert_eq!(style.border.style, BorderStyle::Solid);
    assert!(style.border.is_visible());
    Ok(())
}

#[test]
fn test_page_value_shadows_album_value() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let gallery = Gallery::with_images(IMAGES)?;
    let description = json!({
        "background-color": "ivory",
        "pages": [
            center_page("first", "beach.jpg"),
            {"name": "second", "image": "lake.jpg", "background-color": "navy"}
        ]
    });
    let album = gallery.load(&description)?;
    let doc = &album.document;

    let first: Option<Color> = doc.get(page(&album, 0), &BACKGROUND_COLOR)?;
    let second: Option<Color> = doc.get(page(&album, 1), &BACKGROUND_COLOR)?;
    assert_eq!(first, Some(Color::rgb(0xff, 0xff, 0xf0)));
    assert_eq!(second, Some(Color::rgb(0x00, 0x00, 0x80)));
    Ok(())
}

#[test]
fn test_unset_properties_use_defaults() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let gallery = Gallery::with_images(IMAGES)?;
    let album = gallery.load(&album_with_pages(json!([center_page("p", "beach.jpg")])))?;
    let style = album
        .document
        .image_style(frame(&album, 0, 0))?
        .ok_or("not an image")?;

    assert_eq!(style.mode, FitMode::Fit);
    assert_eq!(style.scale, 1.0);
    assert_eq!(style.border.style, BorderStyle::None);
    assert_eq!(style.shadow.kind, Shadow::None);
    assert_eq!(style.horizontal_shift, Length::ZERO);
    Ok(())
}

#[test]
fn test_default_block_reaches_every_frame() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let gallery = Gallery::with_images(IMAGES)?;
    let description = json!({
        "pages": [
            duo_page("coast", "dunes.jpg", "harbour.jpg"),
            center_page("cover", "beach.jpg")
        ],
        "default": {"shadow": "fuzzy", "scale": 0.9}
    });
    let album = gallery.load(&description)?;

    for (page_index, item) in [(0, 0), (0, 1), (1, 0)] {
        let style = album
            .document
            .image_style(frame(&album, page_index, item))?
            .ok_or("not an image")?;
        assert_eq!(style.shadow.kind, Shadow::Fuzzy);
        assert_eq!(style.shadow.opacity, 1.0);
        assert_eq!(style.scale, 0.9);
    }
    Ok(())
}

#[test]
fn test_indexed_keys_address_items() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let gallery = Gallery::with_images(IMAGES)?;
    let description = json!({
        "pages": [
            {"type": "duo", "image#1": "dunes.jpg", "image#2": "harbour.jpg", "scale#2": 0.5},
            center_page("cover", "beach.jpg")
        ],
        "border-color#2": "red"
    });
    let album = gallery.load(&description)?;
    let doc = &album.document;

    let first: Option<f32> = doc.get(frame(&album, 0, 0), &SCALE)?;
    let second: Option<f32> = doc.get(frame(&album, 0, 1), &SCALE)?;
    assert_eq!(first, Some(1.0));
    assert_eq!(second, Some(0.5));

    // `#2` on the album addresses its second page.
    let red: Option<Color> = doc.get(page(&album, 1), &BORDER_COLOR)?;
    assert_eq!(red, Some(Color::rgb(0xff, 0x00, 0x00)));
    let untouched: Option<Color> = doc.get(page(&album, 0), &BORDER_COLOR)?;
    assert_eq!(untouched, Some(Color::BLACK));
    Ok(())
}

#[test]
fn test_implication_keeps_explicit_border_style() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let gallery = Gallery::with_images(IMAGES)?;
    let description = album_with_pages(json!([
        {"image": "beach.jpg", "border-style": "dashed", "border-width": "thick"},
        {"image": "lake.jpg", "border-width": "2mm"}
    ]));
    let album = gallery.load(&description)?;
    let doc = &album.document;

    let dashed: Option<BorderStyle> = doc.get(page(&album, 0), &BORDER_STYLE)?;
    let implied: Option<BorderStyle> = doc.get(page(&album, 1), &BORDER_STYLE)?;
    assert_eq!(dashed, Some(BorderStyle::Dashed));
    assert_eq!(implied, Some(BorderStyle::Solid));
    Ok(())
}

#[test]
fn test_named_styles_apply_declared_values() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let gallery = Gallery::with_images(IMAGES)?;
    let description = json!({
        "pages": [
            {"image": "beach.jpg", "style": "framed"},
            {"image": "lake.jpg", "styles": "framed faded"},
            center_page("plain", "dunes.jpg")
        ],
        "styles": [
            {"name": "framed", "border-color": "navy", "border-width": "thin"},
            {"name": "faded", "shadow": "simple", "shadow-opacity": "40%"}
        ]
    });
    let album = gallery.load(&description)?;
    let doc = &album.document;

    let framed = doc.image_style(frame(&album, 0, 0))?.ok_or("not an image")?;
    assert_eq!(framed.border.color, Color::rgb(0x00, 0x00, 0x80));
    assert_eq!(framed.border.style, BorderStyle::Solid);
    assert_eq!(framed.shadow.kind, Shadow::None);

    let both = doc.image_style(frame(&album, 1, 0))?.ok_or("not an image")?;
    assert!(both.border.is_visible());
    assert_eq!(both.shadow.kind, Shadow::Simple);
    assert!((both.shadow.opacity - 0.4).abs() < 1e-6);

    let plain = doc.image_style(frame(&album, 2, 0))?.ok_or("not an image")?;
    assert!(!plain.border.is_visible());
    assert!(warnings(&album).is_empty());
    Ok(())
}

#[test]
fn test_user_colors_are_usable_anywhere() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let gallery = Gallery::with_images(IMAGES)?;
    let description = json!({
        "pages": [{"image": "beach.jpg", "border-color": "Sea Blue", "shadow-color": "sand"}],
        "colors": {"sea blue": "#1e90ff", "sand": "#c2b280"}
    });
    let album = gallery.load(&description)?;
    let style = album
        .document
        .image_style(frame(&album, 0, 0))?
        .ok_or("not an image")?;

    assert_eq!(style.border.color, Color::rgb(0x1e, 0x90, 0xff));
    assert_eq!(style.shadow.color, Color::rgb(0xc2, 0xb2, 0x80));
    Ok(())
}

#[test]
fn test_symbolic_values_ignore_case_and_separators() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let gallery = Gallery::with_images(IMAGES)?;
    let description = album_with_pages(json!([
        {"image": "beach.jpg", "Mode": "Fill", "border_style": "DOTTED", "align": "Top Right"}
    ]));
    let album = gallery.load(&description)?;
    let style = album
        .document
        .image_style(frame(&album, 0, 0))?
        .ok_or("not an image")?;

    assert_eq!(style.mode, FitMode::Fill);
    assert_eq!(style.border.style, BorderStyle::Dotted);
    assert_eq!(style.align, folio::Anchor::TopRight);
    Ok(())
}

#[test]
fn test_snapshots_are_shared_until_mutation() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let gallery = Gallery::with_images(IMAGES)?;
    let mut album = gallery.load(&sample_album())?;
    let image = frame(&album, 0, 0);

    let first = album.document.image_style(image)?.ok_or("not an image")?;
    let again = album.document.image_style(image)?.ok_or("not an image")?;
    assert!(std::ptr::eq(first, again));
    assert_eq!(first.scale, 1.0);

    let root = album.document.root();
    album
        .document
        .set_value(root, &SCALE, folio::Value::Float(0.5));
    let updated = album.document.image_style(image)?.ok_or("not an image")?;
    assert_eq!(updated.scale, 0.5);
    Ok(())
}
