//! Codec error type.

use thiserror::Error;

/// Errors produced by `glide-codec`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A byte outside the encodable range `63..=126` (`'?'..='~'`).
    #[error("invalid polyline byte {byte:#04x} at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },

    /// The string ended in the middle of a chunk sequence, or a latitude
    /// delta had no matching longitude delta.
    #[error("truncated polyline at offset {0}")]
    Truncated(usize),

    /// A chunk sequence kept its continuation bit set past the width of a
    /// coordinate delta — no real coordinate encodes that long.
    #[error("coordinate overflow at offset {0}")]
    Overflow(usize),
}

pub type CodecResult<T> = Result<T, CodecError>;
