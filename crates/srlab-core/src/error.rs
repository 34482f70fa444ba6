//! Error types for srlab

use thiserror::Error;

/// Result type for srlab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in srlab operations
///
/// Numeric conversions are total and never fail; only text parsing and
/// buffer-shape checks report errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input string was empty (or only a prefix)
    #[error("Empty hex color string")]
    EmptyInput,

    /// Digit count does not match any supported hex layout
    #[error("Unsupported hex color length {len} in {input:?}")]
    HexLength { input: String, len: usize },

    /// Input contains characters that are not hexadecimal digits
    #[error("Invalid hex digit in {input:?}")]
    HexDigit { input: String },

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
