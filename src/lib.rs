//! # framewire
//!
//! Binary encoding layer: a cursor-based byte buffer plus a single
//! packet-framing format built on it.
//!
//! ## Architecture
//!
//! - **Buffer** ([`ByteCursor`]): bounds-checked big-endian readers and
//!   writers over a caller-owned byte region
//! - **Protocol** ([`Frame`], [`pack`], [`unpack`]): `[u16 length][u8 flag][payload]`
//!   frames with a 32 KB payload ceiling
//!
//! The transport that moves the bytes and the schema inside the payload
//! belong to the caller.
//!
//! ## Example
//!
//! ```
//! use framewire::{pack, unpack, ByteCursor, Frame};
//!
//! let frame = Frame::encrypted(&b"payload"[..]).unwrap();
//!
//! let mut buf = [0u8; 64];
//! let mut writer = ByteCursor::writer(&mut buf);
//! pack(&frame, &mut writer).unwrap();
//! let sent = writer.used();
//!
//! let mut reader = ByteCursor::reader(&buf[..sent]);
//! let received = unpack(&mut reader).unwrap();
//! assert_eq!(received, frame);
//! ```

pub mod buffer;
pub mod codec;
pub mod error;
pub mod protocol;

pub use buffer::ByteCursor;
pub use codec::Wire;
pub use error::{PacketError, Result};
pub use protocol::{pack, unpack, Frame, FrameBuffer, FrameConfig};
