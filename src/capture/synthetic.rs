//! Synthetic capture source for machines without a camera.
//!
//! Frames mimic the booth's demo preview: a warm orange gradient with a
//! highlight band that moves with the frame counter, plus a light speckle so
//! consecutive captures are visibly different. The speckle is seeded from
//! the frame index, so a given frame number always renders the same image.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{CaptureSource, CapturedImage};

/// Working capture resolution, matching the booth's preview stream.
pub const FRAME_WIDTH: u32 = 1280;
pub const FRAME_HEIGHT: u32 = 720;

const GRADIENT_FROM: [u8; 3] = [0xFF, 0x57, 0x22];
const GRADIENT_TO: [u8; 3] = [0xFF, 0x8A, 0x50];
const BAND_HEIGHT: u32 = 60;
const SPECKLE_COUNT: usize = 400;

/// Placeholder camera that is always able to deliver frames.
pub struct SyntheticCamera {
    frame: u32,
    warm_up: u32,
    released: bool,
}

impl SyntheticCamera {
    pub fn new() -> SyntheticCamera {
        SyntheticCamera {
            frame: 0,
            warm_up: 0,
            released: false,
        }
    }

    /// Require `frames` capture attempts before the source reports ready,
    /// mimicking a real device stream warming up.
    pub fn with_warm_up(frames: u32) -> SyntheticCamera {
        SyntheticCamera {
            frame: 0,
            warm_up: frames,
            released: false,
        }
    }

    fn render_frame(frame: u32) -> RgbImage {
        let mut img = RgbImage::new(FRAME_WIDTH, FRAME_HEIGHT);

        // Diagonal gradient
        for y in 0..FRAME_HEIGHT {
            for x in 0..FRAME_WIDTH {
                let t = (x + y) as f32 / (FRAME_WIDTH + FRAME_HEIGHT) as f32;
                let pixel = Rgb([
                    lerp(GRADIENT_FROM[0], GRADIENT_TO[0], t),
                    lerp(GRADIENT_FROM[1], GRADIENT_TO[1], t),
                    lerp(GRADIENT_FROM[2], GRADIENT_TO[2], t),
                ]);
                img.put_pixel(x, y, pixel);
            }
        }

        // Highlight band keyed to the frame counter
        let band_y = (frame * 90) % (FRAME_HEIGHT - BAND_HEIGHT);
        for y in band_y..band_y + BAND_HEIGHT {
            for x in 0..FRAME_WIDTH {
                let Rgb([r, g, b]) = *img.get_pixel(x, y);
                img.put_pixel(
                    x,
                    y,
                    Rgb([
                        r.saturating_add(20),
                        g.saturating_add(20),
                        b.saturating_add(20),
                    ]),
                );
            }
        }

        // Speckle, deterministic per frame index
        let mut rng = StdRng::seed_from_u64(frame as u64);
        for _ in 0..SPECKLE_COUNT {
            let x = rng.random_range(0..FRAME_WIDTH);
            let y = rng.random_range(0..FRAME_HEIGHT);
            img.put_pixel(x, y, Rgb([0xFF, 0xF0, 0xE6]));
        }

        img
    }
}

impl Default for SyntheticCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureSource for SyntheticCamera {
    fn is_ready(&self) -> bool {
        !self.released && self.frame >= self.warm_up
    }

    fn capture(&mut self) -> Option<CapturedImage> {
        if self.released {
            return None;
        }
        if self.frame < self.warm_up {
            self.frame += 1;
            return None;
        }

        let img = Self::render_frame(self.frame);
        self.frame += 1;

        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).ok()?;
        Some(CapturedImage::from_bytes(buf.into_inner()))
    }

    fn release(&mut self) {
        self.released = true;
    }
}

impl Drop for SyntheticCamera {
    fn drop(&mut self) {
        self.release();
    }
}

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}
