//! # Error Types
//!
//! This module defines error types used throughout the pawtobooth library.

use thiserror::Error;

/// Main error type for pawtobooth operations
#[derive(Debug, Error)]
pub enum PawtoboothError {
    /// A layout was requested with the wrong number of photos
    #[error("a layout needs exactly 4 photos, got {0}")]
    InvalidInputCount(usize),

    /// One of the source photo buffers could not be decoded
    #[error("failed to decode photo {index}: {reason}")]
    ImageDecodeFailed { index: usize, reason: String },

    /// Photo decoding or layout rendering exceeded the allowed time
    #[error("photo decoding timed out")]
    DecodeTimeout,

    /// The layout canvas could not be allocated
    #[error("could not allocate a {width}x{height} canvas")]
    CanvasAllocationFailed { width: u32, height: u32 },

    /// The finished layout could not be serialized
    #[error("failed to encode layout: {0}")]
    EncodeFailed(String),

    /// A stored photo payload was malformed (bad data URL, bad base64)
    #[error("invalid photo data: {0}")]
    InvalidPhotoData(String),

    /// Capture device errors
    #[error("capture error: {0}")]
    Capture(String),

    /// Invalid CLI argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP server errors (bind, accept)
    #[error("server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
