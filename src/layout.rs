//! # Print Layout Geometry
//!
//! Pure geometry for the two supported print formats. A [`LayoutSpec`] is
//! derived from a [`PrintFormat`] and describes the canvas size, the four
//! photo slots (in capture order), the border weight, and the bands reserved
//! for branding text. Both formats flow through the same drawing code in
//! [`crate::compose`]; only these constants differ.
//!
//! Canonical canvas sizes correspond to physical prints at 300 DPI:
//! 4R portrait (4" x 6") for the grid, 2" x 6" for the strip.

use image::Rgb;
use serde::{Deserialize, Serialize};

/// Number of photos in every layout (and the session photo cap).
pub const SLOT_COUNT: usize = 4;

/// Supported print formats.
///
/// Wire tags (`4r-grid`, `photo-strip`) match the session API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintFormat {
    /// 2x2 grid on a 1200x1800 canvas with a title band.
    #[serde(rename = "4r-grid")]
    Grid4R,
    /// Four stacked photos on a 600x1800 canvas with a bottom wordmark band.
    #[serde(rename = "photo-strip")]
    Strip,
}

impl Default for PrintFormat {
    fn default() -> Self {
        PrintFormat::Grid4R
    }
}

impl PrintFormat {
    /// Wire/CLI tag for this format.
    pub fn tag(&self) -> &'static str {
        match self {
            PrintFormat::Grid4R => "4r-grid",
            PrintFormat::Strip => "photo-strip",
        }
    }

    /// Parse a wire/CLI tag.
    pub fn from_tag(tag: &str) -> Option<PrintFormat> {
        match tag {
            "4r-grid" => Some(PrintFormat::Grid4R),
            "photo-strip" => Some(PrintFormat::Strip),
            _ => None,
        }
    }
}

/// Background color behind the photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundColor {
    #[serde(rename = "white")]
    White,
    #[serde(rename = "black")]
    Black,
}

impl Default for BackgroundColor {
    fn default() -> Self {
        BackgroundColor::White
    }
}

impl BackgroundColor {
    /// Wire/CLI tag for this background.
    pub fn tag(&self) -> &'static str {
        match self {
            BackgroundColor::White => "white",
            BackgroundColor::Black => "black",
        }
    }

    /// Parse a wire/CLI tag.
    pub fn from_tag(tag: &str) -> Option<BackgroundColor> {
        match tag {
            "white" => Some(BackgroundColor::White),
            "black" => Some(BackgroundColor::Black),
            _ => None,
        }
    }

    /// Solid canvas fill color.
    pub fn fill(&self) -> Rgb<u8> {
        match self {
            BackgroundColor::White => Rgb([0xFF, 0xFF, 0xFF]),
            BackgroundColor::Black => Rgb([0x00, 0x00, 0x00]),
        }
    }

    /// Slot border color, contrast-matched to the fill.
    pub fn border(&self) -> Rgb<u8> {
        match self {
            BackgroundColor::White => Rgb([0xE0, 0xE0, 0xE0]),
            BackgroundColor::Black => Rgb([0x40, 0x40, 0x40]),
        }
    }

    /// Muted text color for taglines and wordmarks drawn on the fill.
    pub fn text(&self) -> Rgb<u8> {
        match self {
            BackgroundColor::White => Rgb([0x66, 0x66, 0x66]),
            BackgroundColor::Black => Rgb([0xCC, 0xCC, 0xCC]),
        }
    }
}

/// An axis-aligned pixel rectangle on the layout canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Whether the point falls inside this rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether two rectangles share any pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Center point, for sampling in tests.
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Derived geometry for one print format.
///
/// Slots are listed in capture order: row-major for the grid (top-left,
/// top-right, bottom-left, bottom-right), top-to-bottom for the strip.
#[derive(Debug, Clone)]
pub struct LayoutSpec {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// One rectangle per photo, in capture order. Always [`SLOT_COUNT`] long.
    pub slots: Vec<Rect>,
    /// Border ring weight around each slot, in pixels.
    pub border_px: u32,
    /// Band reserved for the title and tagline (grid only).
    pub title_band: Option<Rect>,
    /// Band reserved for the badge (grid) or the centered wordmark (strip).
    pub footer_band: Rect,
}

impl LayoutSpec {
    /// Geometry for the given format.
    pub fn for_format(format: PrintFormat) -> LayoutSpec {
        match format {
            PrintFormat::Grid4R => Self::grid_4r(),
            PrintFormat::Strip => Self::strip(),
        }
    }

    /// 4R portrait: title band on top, 2x2 grid, badge row at the bottom.
    fn grid_4r() -> LayoutSpec {
        const CANVAS_W: u32 = 1200;
        const CANVAS_H: u32 = 1800;
        const MARGIN: u32 = 40;
        const SPACING: u32 = 20;
        const TITLE_BAND_H: u32 = 80;
        const FOOTER_H: u32 = 40;

        let slot_w = (CANVAS_W - 2 * MARGIN - SPACING) / 2;
        let grid_top = MARGIN + TITLE_BAND_H;
        let slot_h = (CANVAS_H - grid_top - FOOTER_H - SPACING) / 2;

        let mut slots = Vec::with_capacity(SLOT_COUNT);
        for row in 0..2u32 {
            for col in 0..2u32 {
                slots.push(Rect::new(
                    MARGIN + col * (slot_w + SPACING),
                    grid_top + row * (slot_h + SPACING),
                    slot_w,
                    slot_h,
                ));
            }
        }

        LayoutSpec {
            canvas_width: CANVAS_W,
            canvas_height: CANVAS_H,
            slots,
            border_px: 2,
            title_band: Some(Rect::new(MARGIN, MARGIN, CANVAS_W - 2 * MARGIN, TITLE_BAND_H)),
            footer_band: Rect::new(MARGIN, CANVAS_H - FOOTER_H, CANVAS_W - 2 * MARGIN, FOOTER_H),
        }
    }

    /// 2" strip: four stacked photos, wordmark band at the bottom.
    ///
    /// The integer-division remainder of the slot height pads the gap above
    /// the wordmark band.
    fn strip() -> LayoutSpec {
        const CANVAS_W: u32 = 600;
        const CANVAS_H: u32 = 1800;
        const MARGIN: u32 = 20;
        const SPACING: u32 = 10;
        const FOOTER_H: u32 = 100;

        let slot_w = CANVAS_W - 2 * MARGIN;
        let slot_h = (CANVAS_H - MARGIN - FOOTER_H - 3 * SPACING) / 4;

        let slots = (0..SLOT_COUNT as u32)
            .map(|i| Rect::new(MARGIN, MARGIN + i * (slot_h + SPACING), slot_w, slot_h))
            .collect();

        LayoutSpec {
            canvas_width: CANVAS_W,
            canvas_height: CANVAS_H,
            slots,
            border_px: 1,
            title_band: None,
            footer_band: Rect::new(MARGIN, CANVAS_H - FOOTER_H, slot_w, FOOTER_H),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grid_canonical_dimensions() {
        let spec = LayoutSpec::for_format(PrintFormat::Grid4R);
        assert_eq!(spec.canvas_width, 1200);
        assert_eq!(spec.canvas_height, 1800);
        assert_eq!(spec.slots.len(), SLOT_COUNT);
        assert_eq!(spec.border_px, 2);
    }

    #[test]
    fn strip_canonical_dimensions() {
        let spec = LayoutSpec::for_format(PrintFormat::Strip);
        assert_eq!(spec.canvas_width, 600);
        assert_eq!(spec.canvas_height, 1800);
        assert_eq!(spec.slots.len(), SLOT_COUNT);
        assert_eq!(spec.border_px, 1);
    }

    #[test]
    fn grid_slots_are_row_major() {
        let spec = LayoutSpec::for_format(PrintFormat::Grid4R);
        let s = &spec.slots;
        // Top row shares y, left column shares x
        assert_eq!(s[0].y, s[1].y);
        assert_eq!(s[2].y, s[3].y);
        assert_eq!(s[0].x, s[2].x);
        assert_eq!(s[1].x, s[3].x);
        assert!(s[0].x < s[1].x);
        assert!(s[0].y < s[2].y);
    }

    #[test]
    fn strip_slots_are_stacked_top_to_bottom() {
        let spec = LayoutSpec::for_format(PrintFormat::Strip);
        for pair in spec.slots.windows(2) {
            assert_eq!(pair[0].x, pair[1].x);
            assert!(pair[0].bottom() < pair[1].y, "slots must not touch");
        }
    }

    #[test]
    fn slots_never_overlap() {
        for format in [PrintFormat::Grid4R, PrintFormat::Strip] {
            let spec = LayoutSpec::for_format(format);
            for i in 0..spec.slots.len() {
                for j in (i + 1)..spec.slots.len() {
                    assert!(
                        !spec.slots[i].intersects(&spec.slots[j]),
                        "{:?} slots {} and {} overlap",
                        format,
                        i,
                        j
                    );
                }
            }
        }
    }

    #[test]
    fn slots_stay_clear_of_reserved_bands() {
        for format in [PrintFormat::Grid4R, PrintFormat::Strip] {
            let spec = LayoutSpec::for_format(format);
            for slot in &spec.slots {
                assert!(!slot.intersects(&spec.footer_band));
                if let Some(title) = &spec.title_band {
                    assert!(!slot.intersects(title));
                }
            }
        }
    }

    #[test]
    fn slots_fit_on_canvas_with_border_room() {
        for format in [PrintFormat::Grid4R, PrintFormat::Strip] {
            let spec = LayoutSpec::for_format(format);
            for slot in &spec.slots {
                assert!(slot.x >= spec.border_px);
                assert!(slot.y >= spec.border_px);
                assert!(slot.right() + spec.border_px <= spec.canvas_width);
                assert!(slot.bottom() + spec.border_px <= spec.canvas_height);
            }
        }
    }

    #[test]
    fn format_tags_round_trip() {
        for format in [PrintFormat::Grid4R, PrintFormat::Strip] {
            assert_eq!(PrintFormat::from_tag(format.tag()), Some(format));
        }
        for bg in [BackgroundColor::White, BackgroundColor::Black] {
            assert_eq!(BackgroundColor::from_tag(bg.tag()), Some(bg));
        }
        assert_eq!(PrintFormat::from_tag("polaroid"), None);
    }
}
