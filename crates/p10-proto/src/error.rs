//! Error types for the P10 protocol library.
//!
//! [`NumericError`] covers the base-64 numeric codec; [`ProtocolError`]
//! covers framing and decoding of inbound lines.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Failures of the numeric codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// A character outside the 64-symbol alphabet.
    #[error("invalid numeric character {ch:?} at position {pos}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset within the numeric.
        pos: usize,
    },

    /// The value needs more than `width * 6` bits.
    #[error("value {value} does not fit in {width} numeric characters")]
    WidthTooSmall {
        /// Value that was being encoded.
        value: u64,
        /// Requested width in symbols.
        width: usize,
    },

    /// The numeric encodes a value wider than 64 bits.
    #[error("numeric {numeric:?} overflows 64 bits")]
    Overflow {
        /// The numeric being decoded.
        numeric: String,
    },

    /// A typed numeric with the wrong number of symbols.
    #[error("numeric {numeric:?} must be {expected} characters")]
    WrongLength {
        /// The numeric being parsed.
        numeric: String,
        /// Expected symbol count.
        expected: usize,
    },
}

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid UTF-8 bytes in a line. The line has been consumed.
    #[error("invalid UTF-8 in line at byte {byte_pos}")]
    InvalidUtf8 {
        /// The raw line as bytes.
        raw_line: Vec<u8>,
        /// Byte position where UTF-8 validation failed.
        byte_pos: usize,
    },

    /// Line exceeded the maximum allowed length. The line has been discarded.
    #[error("line too long: {actual} bytes (limit: {limit})")]
    LineTooLong {
        /// Actual line length seen so far.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },
}

impl ProtocolError {
    /// Whether the stream is still usable after this error.
    ///
    /// Framing errors only cost the offending line; I/O errors end the link.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
