//! Protocol module - frame layout, pack/unpack, and stream reassembly.
//!
//! This module implements the byte-level container every message travels in:
//! - 3-byte header (`u16` length + flag byte) and a bounded payload
//! - `pack`/`unpack` over a [`ByteCursor`](crate::ByteCursor)
//! - Frame buffer for accumulating partial reads

mod frame;
mod frame_buffer;
mod wire_format;

pub use frame::{pack, unpack, Frame};
pub use frame_buffer::FrameBuffer;
pub use wire_format::{
    FrameConfig, FLAG_ENCRYPTED, FLAG_PLAIN, FLAG_SIZE, HEADER_SIZE, LENGTH_PREFIX_SIZE,
    LENGTH_SIZE, PACKET_LIMIT,
};
