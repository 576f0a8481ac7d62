//! Write operations.
//!
//! Every writer computes its width up front and fails with
//! `BufferOverflow` before touching the region. Multi-byte values are
//! big-endian.

use super::{ByteCursor, LENGTH_PREFIX_SIZE, MAX_FIELD_LEN};
use crate::error::{PacketError, Result};

impl<T: AsRef<[u8]> + AsMut<[u8]>> ByteCursor<T> {
    #[inline]
    fn write_array<const N: usize>(&mut self, bytes: [u8; N]) -> Result<()> {
        self.claim(N)?.copy_from_slice(&bytes);
        Ok(())
    }

    /// Write `n` zero bytes.
    pub fn write_zeros(&mut self, n: usize) -> Result<()> {
        self.claim(n)?.fill(0);
        Ok(())
    }

    /// Write a boolean as a single byte (1 or 0).
    #[inline]
    pub fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write_byte(u8::from(v))
    }

    /// Write one raw byte.
    #[inline]
    pub fn write_byte(&mut self, v: u8) -> Result<()> {
        self.write_array([v])
    }

    /// Write a length-prefixed byte string: `u16` size, then the raw bytes.
    ///
    /// The full `2 + v.len()` is checked before anything is written, so a
    /// failure never leaves a dangling size on the wire.
    ///
    /// # Errors
    ///
    /// - `FieldTooLong` if `v` is longer than `u16::MAX` bytes
    /// - `BufferOverflow` if the prefix and bytes do not fit
    ///
    /// # Example
    ///
    /// ```
    /// use framewire::ByteCursor;
    ///
    /// let mut buf = [0xFFu8; 4];
    /// let mut cursor = ByteCursor::writer(&mut buf);
    /// cursor.write_bytes(b"hi").unwrap();
    /// assert_eq!(cursor.written(), &[0x00, 0x02, b'h', b'i']);
    /// ```
    pub fn write_bytes(&mut self, v: &[u8]) -> Result<()> {
        let size = u16::try_from(v.len()).map_err(|_| PacketError::FieldTooLong {
            length: v.len(),
            max: MAX_FIELD_LEN,
        })?;
        let needed = LENGTH_PREFIX_SIZE + v.len();
        let remaining = self.remaining();
        if needed > remaining {
            return Err(PacketError::BufferOverflow { needed, remaining });
        }

        self.write_u16(size)?;
        self.claim(v.len())?.copy_from_slice(v);
        Ok(())
    }

    /// Write text as a length-prefixed byte string (UTF-8 bytes, no transcoding).
    #[inline]
    pub fn write_string(&mut self, v: &str) -> Result<()> {
        self.write_bytes(v.as_bytes())
    }

    /// Write a signed byte (two's complement).
    #[inline]
    pub fn write_s8(&mut self, v: i8) -> Result<()> {
        self.write_byte(v as u8)
    }

    /// Write a big-endian `u16`.
    #[inline]
    pub fn write_u16(&mut self, v: u16) -> Result<()> {
        self.write_array(v.to_be_bytes())
    }

    /// Write a big-endian `i16`.
    #[inline]
    pub fn write_s16(&mut self, v: i16) -> Result<()> {
        self.write_u16(v as u16)
    }

    /// Write a big-endian `u32`.
    #[inline]
    pub fn write_u32(&mut self, v: u32) -> Result<()> {
        self.write_array(v.to_be_bytes())
    }

    /// Write a big-endian `i32`.
    #[inline]
    pub fn write_s32(&mut self, v: i32) -> Result<()> {
        self.write_u32(v as u32)
    }

    /// Write a big-endian `u64`.
    #[inline]
    pub fn write_u64(&mut self, v: u64) -> Result<()> {
        self.write_array(v.to_be_bytes())
    }

    /// Write a big-endian `i64`.
    #[inline]
    pub fn write_s64(&mut self, v: i64) -> Result<()> {
        self.write_u64(v as u64)
    }

    /// Write the IEEE-754 bits of an `f32`. NaN and infinities are written as-is.
    #[inline]
    pub fn write_f32(&mut self, v: f32) -> Result<()> {
        self.write_u32(v.to_bits())
    }

    /// Write the IEEE-754 bits of an `f64`. NaN and infinities are written as-is.
    #[inline]
    pub fn write_f64(&mut self, v: f64) -> Result<()> {
        self.write_u64(v.to_bits())
    }
}
