//! Buffer module - cursor-based encoding of primitive values.
//!
//! [`ByteCursor`] wraps a fixed-size region supplied by the caller and
//! exposes bounds-checked readers and writers for:
//! - booleans, raw bytes, signed/unsigned 8/16/32/64-bit integers
//! - 32/64-bit floats (sanitized to zero on decode if NaN or infinite)
//! - length-prefixed byte strings and text (`u16` size + raw bytes)
//!
//! All multi-byte integers are Big Endian.
//!
//! # Example
//!
//! ```
//! use framewire::ByteCursor;
//!
//! let mut buf = [0u8; 16];
//! let mut writer = ByteCursor::writer(&mut buf);
//! writer.write_u32(7).unwrap();
//! writer.write_string("id").unwrap();
//! let used = writer.used();
//!
//! let mut reader = ByteCursor::reader(&buf[..used]);
//! assert_eq!(reader.read_u32().unwrap(), 7);
//! assert_eq!(reader.read_string().unwrap(), "id");
//! ```

mod cursor;
mod read;
mod write;

pub use cursor::ByteCursor;

/// Size of the `u16` prefix in front of a length-prefixed byte/text field.
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Longest value a length prefix can describe.
pub const MAX_FIELD_LEN: usize = u16::MAX as usize;
