//! Branding overlay: bitmap-font text and the wordmark badge.
//!
//! Text is rendered from the Spleen 12x24 bitmap font, scaled by integer
//! factors so glyph edges stay crisp at print resolution. The grid format
//! gets a centered title and tagline in the top band plus a rounded badge
//! bottom-right; the strip gets a single centered wordmark in the bottom
//! band, contrast-matched to the background.

use image::{Rgb, RgbImage};
use spleen_font::{FONT_12X24, PSF2Font};

use crate::layout::{BackgroundColor, LayoutSpec, PrintFormat, Rect};

/// Base glyph cell size of the Spleen 12x24 font.
pub const GLYPH_WIDTH: u32 = 12;
pub const GLYPH_HEIGHT: u32 = 24;

const TITLE: &str = "PAWTOBOOTH";
const TAGLINE: &str = "four dimensions of life";
const WORDMARK: &str = "Pawtobooth";

const BRAND_ORANGE: Rgb<u8> = Rgb([0xFF, 0x57, 0x22]);
const BADGE_TEXT: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

const BADGE_PAD_X: u32 = 12;
const BADGE_PAD_Y: u32 = 6;
const BADGE_RADIUS: u32 = 10;

/// Pixel width of `text` rendered at the given scale.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_WIDTH * scale
}

/// Draw the format-specific branding on a finished photo canvas.
pub(crate) fn draw_branding(
    canvas: &mut RgbImage,
    spec: &LayoutSpec,
    format: PrintFormat,
    background: BackgroundColor,
) {
    match format {
        PrintFormat::Grid4R => {
            if let Some(band) = &spec.title_band {
                draw_title_band(canvas, spec, band, background);
            }
            draw_badge(canvas, &spec.footer_band);
        }
        PrintFormat::Strip => {
            let band = &spec.footer_band;
            let scale = 2;
            let x = (spec.canvas_width - text_width(WORDMARK, scale)) / 2;
            let y = band.y + (band.height - GLYPH_HEIGHT * scale) / 2;
            draw_text(canvas, WORDMARK, x, y, scale, background.text());
        }
    }
}

/// Centered title with the tagline beneath it, inside the reserved band.
fn draw_title_band(canvas: &mut RgbImage, spec: &LayoutSpec, band: &Rect, background: BackgroundColor) {
    let title_scale = 2;
    let title_x = (spec.canvas_width - text_width(TITLE, title_scale)) / 2;
    let title_y = band.y + 4;
    draw_text(canvas, TITLE, title_x, title_y, title_scale, BRAND_ORANGE);

    let tagline_x = (spec.canvas_width - text_width(TAGLINE, 1)) / 2;
    let tagline_y = title_y + GLYPH_HEIGHT * title_scale + 2;
    draw_text(canvas, TAGLINE, tagline_x, tagline_y, 1, background.text());
}

/// Rounded wordmark badge, anchored to the right edge of the footer band.
fn draw_badge(canvas: &mut RgbImage, footer: &Rect) {
    let badge_w = text_width(WORDMARK, 1) + 2 * BADGE_PAD_X;
    let badge_h = GLYPH_HEIGHT + 2 * BADGE_PAD_Y;
    let badge = Rect::new(
        footer.right() - badge_w,
        footer.y + (footer.height - badge_h) / 2,
        badge_w,
        badge_h,
    );
    fill_rounded_rect(canvas, &badge, BADGE_RADIUS, BRAND_ORANGE);
    draw_text(
        canvas,
        WORDMARK,
        badge.x + BADGE_PAD_X,
        badge.y + BADGE_PAD_Y,
        1,
        BADGE_TEXT,
    );
}

/// Draw a line of text at an integer scale factor.
///
/// Characters missing from the font are skipped, leaving their cell blank.
pub fn draw_text(canvas: &mut RgbImage, text: &str, x: u32, y: u32, scale: u32, color: Rgb<u8>) {
    // Font data is embedded by the spleen-font crate and known-good.
    let mut font = PSF2Font::new(FONT_12X24).unwrap();

    for (i, ch) in text.chars().enumerate() {
        let pen_x = x + i as u32 * GLYPH_WIDTH * scale;
        let utf8 = ch.to_string();
        let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) else {
            continue;
        };
        for (row_y, row) in glyph.enumerate() {
            for (col_x, on) in row.enumerate() {
                if !on {
                    continue;
                }
                // Each font pixel becomes a scale x scale block
                let base_x = pen_x + col_x as u32 * scale;
                let base_y = y + row_y as u32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = base_x + dx;
                        let py = base_y + dy;
                        if px < canvas.width() && py < canvas.height() {
                            canvas.put_pixel(px, py, color);
                        }
                    }
                }
            }
        }
    }
}

/// Fill a rectangle with rounded corners.
fn fill_rounded_rect(canvas: &mut RgbImage, rect: &Rect, radius: u32, color: Rgb<u8>) {
    let r = radius as i64;
    let left = rect.x as i64;
    let top = rect.y as i64;
    let right = rect.right() as i64 - 1;
    let bottom = rect.bottom() as i64 - 1;

    for y in rect.y..rect.bottom().min(canvas.height()) {
        for x in rect.x..rect.right().min(canvas.width()) {
            // Clamp toward the corner circle centers; pixels in the straight
            // cross region clamp to themselves and always pass.
            let cx = (x as i64).clamp(left + r, right - r);
            let cy = (y as i64).clamp(top + r, bottom - r);
            let dx = x as i64 - cx;
            let dy = y as i64 - cy;
            if dx * dx + dy * dy <= r * r {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BG: Rgb<u8> = Rgb([0x12, 0x34, 0x56]);

    #[test]
    fn text_width_scales_linearly() {
        assert_eq!(text_width("Pawtobooth", 1), 120);
        assert_eq!(text_width("Pawtobooth", 2), 240);
        assert_eq!(text_width("", 3), 0);
    }

    #[test]
    fn draw_text_marks_pixels() {
        let mut canvas = RgbImage::from_pixel(200, 40, BG);
        draw_text(&mut canvas, "Paw", 4, 4, 1, Rgb([255, 0, 0]));
        let touched = canvas.pixels().filter(|p| **p == Rgb([255, 0, 0])).count();
        assert!(touched > 0, "glyphs should produce colored pixels");
    }

    #[test]
    fn draw_text_clips_at_canvas_edge() {
        // Must not panic when text runs off the right edge
        let mut canvas = RgbImage::from_pixel(30, 30, BG);
        draw_text(&mut canvas, "Pawtobooth", 10, 10, 2, Rgb([255, 0, 0]));
    }

    #[test]
    fn rounded_rect_skips_corners_fills_center() {
        let mut canvas = RgbImage::from_pixel(60, 40, BG);
        let rect = Rect::new(10, 5, 40, 30);
        fill_rounded_rect(&mut canvas, &rect, 8, Rgb([0, 255, 0]));
        // Extreme corner pixel is outside the corner radius
        assert_eq!(*canvas.get_pixel(10, 5), BG);
        // Center is filled
        assert_eq!(*canvas.get_pixel(30, 20), Rgb([0, 255, 0]));
        // Edge midpoints are filled
        assert_eq!(*canvas.get_pixel(30, 5), Rgb([0, 255, 0]));
        assert_eq!(*canvas.get_pixel(10, 20), Rgb([0, 255, 0]));
    }
}
