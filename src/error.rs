//! Error types for layer-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in layer-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a layer (zero width or height, or mismatched data length).
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// The pixel buffer for a layer could not be allocated.
    #[error("Cannot allocate pixel buffer for {width}x{height} layer")]
    Allocation {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The file carries a different PPM format tag than the one requested.
    #[error("PPM format mismatch: expected {expected}, found {found:?}")]
    FormatMismatch {
        /// Tag the caller asked for.
        expected: &'static str,
        /// Tag found in the stream.
        found: String,
    },

    /// The PPM header could not be parsed.
    #[error("Malformed PPM header: {0}")]
    MalformedHeader(String),

    /// The pixel data ended before every sample was read.
    #[error("Unexpected end of pixel data: expected {expected} samples, found {found}")]
    UnexpectedEof {
        /// Number of samples the header promised.
        expected: usize,
        /// Number of samples actually read.
        found: usize,
    },

    /// A sample in an ASCII raster is not a valid integer.
    #[error("Invalid PPM sample: {0}")]
    InvalidSample(String),
}
