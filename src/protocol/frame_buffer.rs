//! Frame buffer for accumulating partial reads.
//!
//! Transports deliver bytes in arbitrary chunks. `FrameBuffer` keeps the
//! unconsumed tail in a `bytes::BytesMut` and re-runs `unpack` whenever new
//! bytes arrive:
//! - fewer than 2 bytes, or a frame whose payload has not fully arrived:
//!   wait for the next push
//! - a declared length above the ceiling: error as soon as the length is seen
//!
//! # Example
//!
//! ```
//! use framewire::{Frame, FrameBuffer};
//!
//! let wire = Frame::new(&b"hello"[..]).unwrap().to_vec().unwrap();
//! let mut buffer = FrameBuffer::new();
//!
//! assert!(buffer.push(&wire[..4]).unwrap().is_empty());
//! let frames = buffer.push(&wire[4..]).unwrap();
//! assert_eq!(frames[0].payload(), b"hello");
//! ```

use bytes::{Buf, BytesMut};
use tracing::{debug, trace};

use super::wire_format::{FrameConfig, HEADER_SIZE, PACKET_LIMIT};
use super::Frame;
use crate::buffer::ByteCursor;
use crate::error::{PacketError, Result};

/// Default initial capacity: one maximum-size frame plus its header.
const DEFAULT_CAPACITY: usize = PACKET_LIMIT + HEADER_SIZE;

/// Buffer for accumulating incoming bytes and extracting complete frames.
pub struct FrameBuffer {
    /// Accumulated bytes not yet turned into frames.
    buffer: BytesMut,
    /// Limits applied to every extracted frame.
    config: FrameConfig,
}

impl FrameBuffer {
    /// Create a new frame buffer with the default protocol limits.
    pub fn new() -> Self {
        Self::with_config(FrameConfig::default())
    }

    /// Create a new frame buffer with custom limits.
    pub fn with_config(config: FrameConfig) -> Self {
        Self {
            buffer: BytesMut::with_capacity(DEFAULT_CAPACITY),
            config,
        }
    }

    /// Push data into the buffer and extract all complete frames.
    ///
    /// Partial trailing data is kept for the next push.
    ///
    /// # Errors
    ///
    /// Returns `FrameTooLarge` if a frame declares a length above the
    /// configured ceiling. Frames extracted ahead of the bad one in the same
    /// push are returned first and the error is reported by the next push.
    /// The offending bytes stay buffered; call [`clear`](Self::clear) before
    /// reusing the buffer.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<Frame>> {
        self.buffer.extend_from_slice(data);

        let mut frames = Vec::new();
        loop {
            match self.try_extract_one() {
                Ok(Some(frame)) => frames.push(frame),
                Ok(None) => break,
                Err(e) if frames.is_empty() => return Err(e),
                Err(_) => break,
            }
        }

        Ok(frames)
    }

    /// Try to extract a single frame from the front of the buffer.
    ///
    /// Returns:
    /// - `Ok(Some(frame))` if a complete frame was extracted
    /// - `Ok(None)` if more data is needed
    /// - `Err(...)` on a protocol violation
    fn try_extract_one(&mut self) -> Result<Option<Frame>> {
        let mut cursor = ByteCursor::reader(&self.buffer[..]);

        // Peek at the length so an oversized frame fails before its payload arrives.
        let length = match cursor.read_u16() {
            Ok(length) => length as usize,
            Err(_) => return Ok(None),
        };
        let limit = self.config.max_payload();
        if length > limit {
            return Err(PacketError::FrameTooLarge { length, limit });
        }
        cursor.rewind();

        let frame = match self.config.unpack(&mut cursor) {
            Ok(frame) => frame,
            Err(e) if e.is_incomplete() => return Ok(None),
            Err(e) => return Err(e),
        };
        let consumed = cursor.used();

        self.buffer.advance(consumed);
        trace!(
            length = frame.length(),
            buffered = self.buffer.len(),
            "extracted frame"
        );
        Ok(Some(frame))
    }

    /// Append data to the buffer without extracting frames.
    pub fn extend(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Get the number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drop all buffered bytes.
    pub fn clear(&mut self) {
        if !self.buffer.is_empty() {
            debug!(discarded = self.buffer.len(), "clearing frame buffer");
        }
        self.buffer.clear();
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
