//! # Layout Compositor
//!
//! [`compose`] turns exactly four captured photos plus a print format and a
//! background color into one print-ready PNG. The whole pipeline is pure:
//! identical inputs produce byte-identical output, so a failed call is always
//! safe to retry with the same photos.
//!
//! Pipeline: fill canvas → decode all photos (parallel fan-in) → draw each
//! photo stretched into its slot, in capture order → border rings → branding
//! overlay → PNG encode. Both formats share this code path; only the
//! [`LayoutSpec`] constants differ.
//!
//! ## Example
//!
//! ```no_run
//! use pawtobooth::capture::CapturedImage;
//! use pawtobooth::compose::compose;
//! use pawtobooth::layout::{BackgroundColor, PrintFormat};
//!
//! # fn photos() -> Vec<CapturedImage> { unimplemented!() }
//! let layout = compose(&photos(), PrintFormat::Grid4R, BackgroundColor::White)?;
//! std::fs::write("layout.png", &layout.png)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod brand;

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgb, RgbImage};
use rayon::prelude::*;

use crate::capture::CapturedImage;
use crate::error::PawtoboothError;
use crate::layout::{BackgroundColor, LayoutSpec, PrintFormat, Rect, SLOT_COUNT};

/// A finished, immutable print layout.
///
/// `png` holds the lossless encoding of the full canvas; `width`/`height`
/// are the canonical pixel dimensions of the chosen format.
#[derive(Debug, Clone)]
pub struct ComposedImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Compose four photos into a single print-ready layout.
///
/// Photos are drawn in capture order: row-major for the grid, top-to-bottom
/// for the strip. Each photo is stretched to exactly fill its slot, so the
/// output never depends on source aspect ratios.
///
/// Any failure (wrong photo count, an undecodable buffer, encoding) aborts
/// the whole call with no partial output. The operation performs no retries;
/// callers may simply invoke it again with the same inputs.
pub fn compose(
    photos: &[CapturedImage],
    format: PrintFormat,
    background: BackgroundColor,
) -> Result<ComposedImage, PawtoboothError> {
    if photos.len() != SLOT_COUNT {
        return Err(PawtoboothError::InvalidInputCount(photos.len()));
    }

    let spec = LayoutSpec::for_format(format);
    let mut canvas = allocate_canvas(&spec, background)?;

    // Decode fan-in: all four decodes finish (or the first failure wins)
    // before any drawing starts.
    let decoded = photos
        .par_iter()
        .enumerate()
        .map(|(index, photo)| {
            image::load_from_memory(photo.data())
                .map(|img| img.to_rgb8())
                .map_err(|e| PawtoboothError::ImageDecodeFailed {
                    index,
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (photo, slot) in decoded.iter().zip(spec.slots.iter()) {
        let tile = imageops::resize(photo, slot.width, slot.height, FilterType::Lanczos3);
        imageops::replace(&mut canvas, &tile, slot.x as i64, slot.y as i64);
    }

    for slot in &spec.slots {
        draw_slot_border(&mut canvas, slot, spec.border_px, background.border());
    }

    brand::draw_branding(&mut canvas, &spec, format, background);

    let png = encode_png(&canvas)?;
    Ok(ComposedImage {
        width: spec.canvas_width,
        height: spec.canvas_height,
        png,
    })
}

/// Allocate the layout canvas pre-filled with the background color.
fn allocate_canvas(
    spec: &LayoutSpec,
    background: BackgroundColor,
) -> Result<RgbImage, PawtoboothError> {
    let failed = PawtoboothError::CanvasAllocationFailed {
        width: spec.canvas_width,
        height: spec.canvas_height,
    };
    if spec.canvas_width == 0 || spec.canvas_height == 0 {
        return Err(failed);
    }
    // Guard the byte-size computation the image crate would overflow on
    match (spec.canvas_width as u64)
        .checked_mul(spec.canvas_height as u64)
        .and_then(|px| px.checked_mul(3))
    {
        Some(bytes) if usize::try_from(bytes).is_ok() => Ok(RgbImage::from_pixel(
            spec.canvas_width,
            spec.canvas_height,
            background.fill(),
        )),
        _ => Err(failed),
    }
}

/// Draw a border ring just outside the slot rectangle.
///
/// The ring never covers slot pixels, so the photo keeps its full area.
fn draw_slot_border(canvas: &mut RgbImage, slot: &Rect, thickness: u32, color: Rgb<u8>) {
    let x0 = slot.x.saturating_sub(thickness);
    let y0 = slot.y.saturating_sub(thickness);
    let x1 = (slot.right() + thickness).min(canvas.width());
    let y1 = (slot.bottom() + thickness).min(canvas.height());

    for y in y0..y1 {
        for x in x0..x1 {
            if !slot.contains(x, y) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Encode the finished canvas as a lossless PNG.
fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, PawtoboothError> {
    let mut out = Cursor::new(Vec::new());
    canvas
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| PawtoboothError::EncodeFailed(e.to_string()))?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_ring_preserves_slot_interior() {
        let mut canvas = RgbImage::from_pixel(60, 60, Rgb([255, 255, 255]));
        let slot = Rect::new(10, 10, 20, 20);
        // Mark the slot interior so we can detect overdraw
        for y in 10..30 {
            for x in 10..30 {
                canvas.put_pixel(x, y, Rgb([1, 2, 3]));
            }
        }
        draw_slot_border(&mut canvas, &slot, 2, Rgb([0xE0, 0xE0, 0xE0]));

        assert_eq!(*canvas.get_pixel(10, 10), Rgb([1, 2, 3]));
        assert_eq!(*canvas.get_pixel(29, 29), Rgb([1, 2, 3]));
        // Ring pixels on all four sides
        assert_eq!(*canvas.get_pixel(9, 15), Rgb([0xE0, 0xE0, 0xE0]));
        assert_eq!(*canvas.get_pixel(30, 15), Rgb([0xE0, 0xE0, 0xE0]));
        assert_eq!(*canvas.get_pixel(15, 9), Rgb([0xE0, 0xE0, 0xE0]));
        assert_eq!(*canvas.get_pixel(15, 30), Rgb([0xE0, 0xE0, 0xE0]));
        // Outside the ring stays untouched
        assert_eq!(*canvas.get_pixel(5, 5), Rgb([255, 255, 255]));
    }

    #[test]
    fn canvas_allocation_fills_background() {
        let spec = LayoutSpec::for_format(PrintFormat::Strip);
        let canvas = allocate_canvas(&spec, BackgroundColor::Black).unwrap();
        assert_eq!(canvas.width(), 600);
        assert_eq!(canvas.height(), 1800);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(599, 1799), Rgb([0, 0, 0]));
    }
}
