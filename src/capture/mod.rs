//! # Capture Sources
//!
//! A capture source hands the booth encoded still frames, one per shutter
//! press. The compositor never talks to a device directly: it only sees
//! [`CapturedImage`] buffers, which must decode without further
//! conditioning.
//!
//! When no physical camera is available the booth runs on the
//! [`synthetic::SyntheticCamera`], which renders placeholder frames.

pub mod synthetic;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::PawtoboothError;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// One captured photo: an encoded raster buffer, immutable after capture.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    id: Uuid,
    data: Vec<u8>,
    captured_at: DateTime<Utc>,
}

impl CapturedImage {
    /// Wrap an encoded raster buffer (PNG, JPEG, anything the image crate
    /// decodes) captured right now.
    pub fn from_bytes(data: Vec<u8>) -> CapturedImage {
        CapturedImage {
            id: Uuid::new_v4(),
            data,
            captured_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The encoded raster bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Encode as a `data:image/png;base64,` URL for the session API.
    pub fn to_data_url(&self) -> String {
        encode_data_url(&self.data)
    }

    /// Parse a photo previously serialized with [`Self::to_data_url`].
    pub fn from_data_url(url: &str) -> Result<CapturedImage, PawtoboothError> {
        Ok(CapturedImage::from_bytes(decode_data_url(url)?))
    }
}

/// Encode raster bytes as a base64 data URL.
pub fn encode_data_url(bytes: &[u8]) -> String {
    format!("{DATA_URL_PREFIX}{}", STANDARD.encode(bytes))
}

/// Decode the payload of a base64 data URL.
///
/// The media type prefix is not validated; the compositor decodes by content
/// anyway.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, PawtoboothError> {
    let payload = url
        .split_once("base64,")
        .map(|(_, rest)| rest)
        .ok_or_else(|| PawtoboothError::InvalidPhotoData("missing base64 payload".to_string()))?;
    STANDARD
        .decode(payload)
        .map_err(|e| PawtoboothError::InvalidPhotoData(format!("bad base64: {e}")))
}

/// A device that produces captured frames.
///
/// Implementations own the underlying stream and must release it on every
/// exit path, including errors. [`release`](CaptureSource::release) is
/// expected from `Drop` so a torn-down UI never leaves a camera locked.
pub trait CaptureSource {
    /// Whether the source can deliver a frame right now.
    fn is_ready(&self) -> bool;

    /// Capture one frame, or `None` while the source is not ready.
    fn capture(&mut self) -> Option<CapturedImage>;

    /// Release the underlying device stream. Idempotent; after release the
    /// source never becomes ready again.
    fn release(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn data_url_round_trip() {
        let photo = CapturedImage::from_bytes(vec![1, 2, 3, 250]);
        let url = photo.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));
        let back = CapturedImage::from_data_url(&url).unwrap();
        assert_eq!(back.data(), photo.data());
    }

    #[test]
    fn data_url_without_payload_is_rejected() {
        let err = decode_data_url("data:image/png,rawbytes").unwrap_err();
        assert!(matches!(err, PawtoboothError::InvalidPhotoData(_)));
    }

    #[test]
    fn data_url_with_bad_base64_is_rejected() {
        let err = decode_data_url("data:image/png;base64,!!!").unwrap_err();
        assert!(matches!(err, PawtoboothError::InvalidPhotoData(_)));
    }
}
