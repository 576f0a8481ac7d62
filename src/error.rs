//! Error types for framewire.

use thiserror::Error;

/// Main error type for all buffer and frame operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PacketError {
    /// A write needed more bytes than the region has left.
    #[error("Buffer overflow: need {needed} bytes, {remaining} remaining")]
    BufferOverflow { needed: usize, remaining: usize },

    /// A read needed more bytes than the region has left.
    #[error("Buffer underflow: need {needed} bytes, {remaining} remaining")]
    BufferUnderflow { needed: usize, remaining: usize },

    /// Frame payload length exceeds the protocol ceiling.
    #[error("Frame length {length} exceeds limit {limit}")]
    FrameTooLarge { length: usize, limit: usize },

    /// Not enough room to pack a whole frame.
    #[error("Insufficient space to pack frame: need {needed} bytes, {remaining} remaining")]
    InsufficientSpace { needed: usize, remaining: usize },

    /// Not enough bytes to unpack a whole frame.
    #[error("Insufficient data to unpack frame: need {needed} bytes, {remaining} remaining")]
    InsufficientData { needed: usize, remaining: usize },

    /// A length-prefixed field is longer than its `u16` prefix can describe.
    #[error("Field of {length} bytes exceeds maximum {max}")]
    FieldTooLong { length: usize, max: usize },

    /// The 2-byte frame length could not be read.
    #[error("Missing frame length")]
    MissingLength,

    /// A text field did not hold valid UTF-8.
    #[error("Text field is not valid UTF-8")]
    InvalidUtf8,

    /// Reposition target lies outside the region.
    #[error("Position {position} out of range for region of {length} bytes")]
    InvalidPosition { position: usize, length: usize },
}

impl PacketError {
    /// True for errors that more input could resolve.
    ///
    /// Used by stream reassembly to tell "wait for the next chunk" apart
    /// from a malformed frame.
    #[inline]
    pub fn is_incomplete(&self) -> bool {
        matches!(
            self,
            PacketError::MissingLength
                | PacketError::InsufficientData { .. }
                | PacketError::BufferUnderflow { .. }
        )
    }
}

/// Result type alias using PacketError.
pub type Result<T> = std::result::Result<T, PacketError>;
