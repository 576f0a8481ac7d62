//! Wire format constants and frame limits.
//!
//! Frame layout:
//! ```text
//! ┌──────────┬───────┬──────────────────┐
//! │ Length   │ Flag  │ Payload          │
//! │ 2 bytes  │ 1 byte│ Length bytes     │
//! │ uint16 BE│       │ opaque           │
//! └──────────┴───────┴──────────────────┘
//! ```
//!
//! Length-prefixed fields inside a payload use the same `uint16 BE` size
//! followed by the raw bytes.

use serde::{Deserialize, Serialize};

pub use crate::buffer::LENGTH_PREFIX_SIZE;

/// Protocol ceiling for a frame payload (32 KB).
pub const PACKET_LIMIT: usize = 32 * 1024;

/// Size of the frame length field.
pub const LENGTH_SIZE: usize = 2;

/// Size of the frame flag field.
pub const FLAG_SIZE: usize = 1;

/// Frame header size in bytes (length + flag).
pub const HEADER_SIZE: usize = LENGTH_SIZE + FLAG_SIZE;

/// Flag byte for an encrypted payload. Any other value reads as plain.
pub const FLAG_ENCRYPTED: u8 = 1;

/// Flag byte written for a plain payload.
pub const FLAG_PLAIN: u8 = 0;

/// Frame limits applied by `pack`, `unpack` and [`FrameBuffer`](super::FrameBuffer).
///
/// A deployment may lower the payload ceiling below [`PACKET_LIMIT`] but
/// never raise it; larger values are clamped.
///
/// # Example
///
/// ```
/// use framewire::protocol::{FrameConfig, PACKET_LIMIT};
///
/// assert_eq!(FrameConfig::default().max_payload(), PACKET_LIMIT);
/// assert_eq!(FrameConfig::with_max_payload(1024).max_payload(), 1024);
/// assert_eq!(FrameConfig::with_max_payload(1 << 20).max_payload(), PACKET_LIMIT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    max_payload: usize,
}

impl FrameConfig {
    /// Config with a custom payload ceiling (clamped to `PACKET_LIMIT`).
    pub fn with_max_payload(max_payload: usize) -> Self {
        Self {
            max_payload: max_payload.min(PACKET_LIMIT),
        }
    }

    /// Effective payload ceiling.
    #[inline]
    pub fn max_payload(&self) -> usize {
        self.max_payload.min(PACKET_LIMIT)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload: PACKET_LIMIT,
        }
    }
}
