//! # Compositor Tests
//!
//! End-to-end checks of the layout compositor: canonical output dimensions,
//! capture-order slot placement, background invariants, determinism, and the
//! all-or-nothing failure contract.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use pawtobooth::capture::CapturedImage;
use pawtobooth::compose::compose;
use pawtobooth::error::PawtoboothError;
use pawtobooth::layout::{BackgroundColor, LayoutSpec, PrintFormat};

const RED: [u8; 3] = [255, 0, 0];
const GREEN: [u8; 3] = [0, 255, 0];
const BLUE: [u8; 3] = [0, 0, 255];
const YELLOW: [u8; 3] = [255, 255, 0];

/// A solid-color 100x100 PNG, like a webcam frame reduced to one hue.
fn solid_photo(color: [u8; 3]) -> CapturedImage {
    let img = RgbImage::from_pixel(100, 100, Rgb(color));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    CapturedImage::from_bytes(buf.into_inner())
}

fn four_photos() -> Vec<CapturedImage> {
    vec![
        solid_photo(RED),
        solid_photo(GREEN),
        solid_photo(BLUE),
        solid_photo(YELLOW),
    ]
}

fn decode(png: &[u8]) -> RgbImage {
    image::load_from_memory(png).expect("output decodes").to_rgb8()
}

/// Channel-wise closeness, tolerant of resampling rounding.
fn roughly(actual: Rgb<u8>, expected: [u8; 3]) -> bool {
    actual
        .0
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| a.abs_diff(*e) <= 16)
}

#[test]
fn grid_output_has_canonical_dimensions() {
    let layout = compose(&four_photos(), PrintFormat::Grid4R, BackgroundColor::White).unwrap();
    assert_eq!((layout.width, layout.height), (1200, 1800));
    let img = decode(&layout.png);
    assert_eq!((img.width(), img.height()), (1200, 1800));
}

#[test]
fn strip_output_has_canonical_dimensions() {
    let layout = compose(&four_photos(), PrintFormat::Strip, BackgroundColor::Black).unwrap();
    assert_eq!((layout.width, layout.height), (600, 1800));
    let img = decode(&layout.png);
    assert_eq!((img.width(), img.height()), (600, 1800));
}

#[test]
fn compose_is_deterministic() {
    let photos = four_photos();
    let first = compose(&photos, PrintFormat::Grid4R, BackgroundColor::White).unwrap();
    let second = compose(&photos, PrintFormat::Grid4R, BackgroundColor::White).unwrap();
    assert_eq!(first.png, second.png, "identical inputs must give identical bytes");
}

#[test]
fn grid_places_photos_row_major() {
    let layout = compose(&four_photos(), PrintFormat::Grid4R, BackgroundColor::White).unwrap();
    let img = decode(&layout.png);
    let spec = LayoutSpec::for_format(PrintFormat::Grid4R);

    let expected = [RED, GREEN, BLUE, YELLOW];
    for (slot, want) in spec.slots.iter().zip(expected.iter()) {
        let (cx, cy) = slot.center();
        let got = *img.get_pixel(cx, cy);
        assert!(
            roughly(got, *want),
            "slot at ({}, {}): got {:?}, want {:?}",
            slot.x,
            slot.y,
            got,
            want
        );
    }
}

#[test]
fn strip_places_photos_top_to_bottom() {
    let layout = compose(&four_photos(), PrintFormat::Strip, BackgroundColor::White).unwrap();
    let img = decode(&layout.png);
    let spec = LayoutSpec::for_format(PrintFormat::Strip);

    let expected = [RED, GREEN, BLUE, YELLOW];
    for (slot, want) in spec.slots.iter().zip(expected.iter()) {
        let (cx, cy) = slot.center();
        assert!(roughly(*img.get_pixel(cx, cy), *want));
    }
}

#[test]
fn canvas_corners_keep_the_background_exactly() {
    for (background, fill) in [
        (BackgroundColor::White, [255u8, 255, 255]),
        (BackgroundColor::Black, [0u8, 0, 0]),
    ] {
        for format in [PrintFormat::Grid4R, PrintFormat::Strip] {
            let layout = compose(&four_photos(), format, background).unwrap();
            let img = decode(&layout.png);
            let (w, h) = (img.width(), img.height());
            for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
                assert_eq!(
                    *img.get_pixel(x, y),
                    Rgb(fill),
                    "{:?}/{:?} corner ({}, {})",
                    format,
                    background,
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn slot_borders_match_the_background() {
    let layout = compose(&four_photos(), PrintFormat::Grid4R, BackgroundColor::White).unwrap();
    let img = decode(&layout.png);
    let spec = LayoutSpec::for_format(PrintFormat::Grid4R);

    // One pixel outside the first slot's left edge sits on the border ring
    let slot = &spec.slots[0];
    let (_, cy) = slot.center();
    assert_eq!(*img.get_pixel(slot.x - 1, cy), Rgb([0xE0, 0xE0, 0xE0]));

    let dark = compose(&four_photos(), PrintFormat::Grid4R, BackgroundColor::Black).unwrap();
    let img = decode(&dark.png);
    assert_eq!(*img.get_pixel(slot.x - 1, cy), Rgb([0x40, 0x40, 0x40]));
}

#[test]
fn three_photos_are_rejected() {
    let photos = vec![solid_photo(RED), solid_photo(GREEN), solid_photo(BLUE)];
    let err = compose(&photos, PrintFormat::Grid4R, BackgroundColor::White).unwrap_err();
    assert!(matches!(err, PawtoboothError::InvalidInputCount(3)));
}

#[test]
fn five_photos_are_rejected() {
    let mut photos = four_photos();
    photos.push(solid_photo(RED));
    let err = compose(&photos, PrintFormat::Strip, BackgroundColor::White).unwrap_err();
    assert!(matches!(err, PawtoboothError::InvalidInputCount(5)));
}

#[test]
fn an_undecodable_photo_fails_the_whole_compose() {
    let mut photos = four_photos();
    photos[2] = CapturedImage::from_bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]);
    let err = compose(&photos, PrintFormat::Grid4R, BackgroundColor::White).unwrap_err();
    match err {
        PawtoboothError::ImageDecodeFailed { index, .. } => assert_eq!(index, 2),
        other => panic!("expected ImageDecodeFailed, got {:?}", other),
    }
}

#[test]
fn photos_stretch_to_fill_their_slots() {
    // A tall 10x400 photo must still cover its whole slot after stretching
    let img = RgbImage::from_pixel(10, 400, Rgb(RED));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    let tall = CapturedImage::from_bytes(buf.into_inner());

    let photos = vec![tall, solid_photo(GREEN), solid_photo(BLUE), solid_photo(YELLOW)];
    let layout = compose(&photos, PrintFormat::Grid4R, BackgroundColor::White).unwrap();
    let img = decode(&layout.png);
    let spec = LayoutSpec::for_format(PrintFormat::Grid4R);
    let slot = &spec.slots[0];

    // Sample near all four slot corners: a letterboxed draw would leave
    // background there, a stretched draw leaves photo color
    for (x, y) in [
        (slot.x + 2, slot.y + 2),
        (slot.right() - 3, slot.y + 2),
        (slot.x + 2, slot.bottom() - 3),
        (slot.right() - 3, slot.bottom() - 3),
    ] {
        assert!(roughly(*img.get_pixel(x, y), RED), "({}, {}) not covered", x, y);
    }
}

#[test]
fn grid_title_band_carries_branding_text() {
    let layout = compose(&four_photos(), PrintFormat::Grid4R, BackgroundColor::White).unwrap();
    let img = decode(&layout.png);
    let spec = LayoutSpec::for_format(PrintFormat::Grid4R);
    let band = spec.title_band.unwrap();

    // The title band must contain brand-orange pixels (the title glyphs)
    let mut orange = 0usize;
    for y in band.y..band.bottom() {
        for x in band.x..band.right() {
            if *img.get_pixel(x, y) == Rgb([0xFF, 0x57, 0x22]) {
                orange += 1;
            }
        }
    }
    assert!(orange > 100, "expected title glyphs in the band, found {}", orange);
}

#[test]
fn strip_bottom_band_carries_the_wordmark() {
    for (background, text) in [
        (BackgroundColor::White, Rgb([0x66, 0x66, 0x66])),
        (BackgroundColor::Black, Rgb([0xCC, 0xCC, 0xCC])),
    ] {
        let layout = compose(&four_photos(), PrintFormat::Strip, background).unwrap();
        let img = decode(&layout.png);
        let spec = LayoutSpec::for_format(PrintFormat::Strip);
        let band = spec.footer_band;

        let mut glyphs = 0usize;
        for y in band.y..band.bottom() {
            for x in band.x..band.right() {
                if *img.get_pixel(x, y) == text {
                    glyphs += 1;
                }
            }
        }
        assert!(glyphs > 100, "{:?}: expected wordmark pixels, found {}", background, glyphs);
    }
}
