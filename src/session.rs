//! # Booth Session
//!
//! The mutable state of one photobooth run: an ordered list of captured
//! photos (at most [`SLOT_COUNT`]), the chosen print format and background,
//! and a clamped copy count. The invoking UI context owns the session and
//! mutates it synchronously; nothing here is shared across threads.

use crate::capture::CapturedImage;
use crate::compose::{self, ComposedImage};
use crate::error::PawtoboothError;
use crate::layout::{BackgroundColor, PrintFormat, SLOT_COUNT};

pub const COPY_COUNT_MIN: u32 = 1;
pub const COPY_COUNT_MAX: u32 = 10;

/// Clamp a requested copy count to the printable range.
pub fn clamp_copy_count(count: u32) -> u32 {
    count.clamp(COPY_COUNT_MIN, COPY_COUNT_MAX)
}

/// Where the booth flow currently stands, derived from session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// No photos yet: choosing format and background.
    Setup = 1,
    /// One to three photos captured.
    Capturing = 2,
    /// All four photos captured, layout can be rendered.
    Preview = 3,
    /// Print has been requested.
    Printing = 4,
}

/// One photobooth run.
#[derive(Debug)]
pub struct Session {
    photos: Vec<CapturedImage>,
    format: PrintFormat,
    background: BackgroundColor,
    copy_count: u32,
    printing: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Session {
        Session {
            photos: Vec::new(),
            format: PrintFormat::Grid4R,
            background: BackgroundColor::White,
            copy_count: COPY_COUNT_MIN,
            printing: false,
        }
    }

    pub fn photos(&self) -> &[CapturedImage] {
        &self.photos
    }

    pub fn format(&self) -> PrintFormat {
        self.format
    }

    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    pub fn copy_count(&self) -> u32 {
        self.copy_count
    }

    pub fn set_format(&mut self, format: PrintFormat) {
        self.format = format;
    }

    pub fn set_background(&mut self, background: BackgroundColor) {
        self.background = background;
    }

    /// Set the copy count, clamped to 1..=10.
    pub fn set_copy_count(&mut self, count: u32) {
        self.copy_count = clamp_copy_count(count);
    }

    /// Append a photo, keeping capture order. Returns `false` (and drops the
    /// photo) when the session already holds four.
    pub fn add_photo(&mut self, photo: CapturedImage) -> bool {
        if self.photos.len() >= SLOT_COUNT {
            return false;
        }
        self.photos.push(photo);
        self.printing = false;
        true
    }

    /// Remove the photo at `index`, re-packing the remainder in order.
    pub fn remove_photo(&mut self, index: usize) -> Option<CapturedImage> {
        if index >= self.photos.len() {
            return None;
        }
        self.printing = false;
        Some(self.photos.remove(index))
    }

    /// Mark the session as printing. Only valid from the preview step.
    pub fn begin_print(&mut self) -> Result<(), PawtoboothError> {
        if self.photos.len() != SLOT_COUNT {
            return Err(PawtoboothError::InvalidInputCount(self.photos.len()));
        }
        self.printing = true;
        Ok(())
    }

    /// Discard all photos and restore the defaults.
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    /// Current step of the booth flow.
    pub fn current_step(&self) -> SessionStep {
        match self.photos.len() {
            0 => SessionStep::Setup,
            n if n < SLOT_COUNT => SessionStep::Capturing,
            _ if self.printing => SessionStep::Printing,
            _ => SessionStep::Preview,
        }
    }

    /// Flow progress in percent, for UI progress bars.
    pub fn progress_percentage(&self) -> u32 {
        self.current_step() as u32 * 100 / 4
    }

    /// Render this session's print layout.
    ///
    /// Fails with [`PawtoboothError::InvalidInputCount`] until all four
    /// photos are captured.
    pub fn render_layout(&self) -> Result<ComposedImage, PawtoboothError> {
        compose::compose(&self.photos, self.format, self.background)
    }
}
