//! Read operations.
//!
//! Readers mirror the writers: check the width, fail with `BufferUnderflow`
//! without moving, otherwise decode big-endian and advance.

use bytes::Bytes;

use super::{ByteCursor, LENGTH_PREFIX_SIZE};
use crate::error::{PacketError, Result};

impl<T: AsRef<[u8]>> ByteCursor<T> {
    /// Read a boolean. Only the byte `1` is true; any other value is false.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_byte()? == 1)
    }

    /// Read one raw byte.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8> {
        let [b] = self.take_array::<1>()?;
        Ok(b)
    }

    /// Borrow a length-prefixed field.
    ///
    /// The prefix is checked on its own first. If the payload is then short,
    /// the position stays past the prefix.
    fn read_prefixed(&mut self) -> Result<&[u8]> {
        let remaining = self.remaining();
        if remaining < LENGTH_PREFIX_SIZE {
            return Err(PacketError::BufferUnderflow {
                needed: LENGTH_PREFIX_SIZE,
                remaining,
            });
        }
        let size = self.read_u16()? as usize;
        self.take(size)
    }

    /// Read a length-prefixed byte string into an owned buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use framewire::ByteCursor;
    ///
    /// let mut cursor = ByteCursor::reader(&[0x00, 0x00]);
    /// assert!(cursor.read_bytes().unwrap().is_empty());
    /// assert_eq!(cursor.used(), 2);
    /// ```
    pub fn read_bytes(&mut self) -> Result<Bytes> {
        self.read_prefixed().map(Bytes::copy_from_slice)
    }

    /// Read a length-prefixed text field.
    ///
    /// # Errors
    ///
    /// Same as [`read_bytes`](Self::read_bytes), plus `InvalidUtf8` when the
    /// bytes are not UTF-8 (the field is still consumed).
    pub fn read_string(&mut self) -> Result<String> {
        let raw = self.read_prefixed()?;
        std::str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|_| PacketError::InvalidUtf8)
    }

    /// Read a signed byte.
    #[inline]
    pub fn read_s8(&mut self) -> Result<i8> {
        Ok(self.read_byte()? as i8)
    }

    /// Read a big-endian `u16`.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.take_array().map(u16::from_be_bytes)
    }

    /// Read a big-endian `i16`.
    #[inline]
    pub fn read_s16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Read a big-endian `u32`.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.take_array().map(u32::from_be_bytes)
    }

    /// Read a big-endian `i32`.
    #[inline]
    pub fn read_s32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Read a big-endian `u64`.
    #[inline]
    pub fn read_u64(&mut self) -> Result<u64> {
        self.take_array().map(u64::from_be_bytes)
    }

    /// Read a big-endian `i64`.
    #[inline]
    pub fn read_s64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Read an `f32`. NaN and infinities decode to `0.0`.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        let v = f32::from_bits(self.read_u32()?);
        Ok(if v.is_finite() { v } else { 0.0 })
    }

    /// Read an `f64`. NaN and infinities decode to `0.0`.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        let v = f64::from_bits(self.read_u64()?);
        Ok(if v.is_finite() { v } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_big_endian() {
        let mut cursor = ByteCursor::reader(&[0x12, 0x34]);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.used(), 2);
    }

    #[test]
    fn test_wide_integers() {
        let bytes = [
            0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF,
        ];
        let mut cursor = ByteCursor::reader(&bytes);
        assert_eq!(cursor.read_u32().unwrap(), 0xDEAD_BEEF);
        assert_eq!(cursor.read_u64().unwrap(), 0x0123_4567_89AB_CDEF);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_signed_reinterprets_bits() {
        let bytes = [
            0x80, // s8
            0xFF, 0xFE, // s16
            0xFF, 0xFF, 0xFF, 0xFD, // s32
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // s64
        ];
        let mut cursor = ByteCursor::reader(&bytes);
        assert_eq!(cursor.read_s8().unwrap(), i8::MIN);
        assert_eq!(cursor.read_s16().unwrap(), -2);
        assert_eq!(cursor.read_s32().unwrap(), -3);
        assert_eq!(cursor.read_s64().unwrap(), -1);
    }

    #[test]
    fn test_bool_is_permissive() {
        let mut cursor = ByteCursor::reader(&[1, 0, 2, 0xFF]);
        assert!(cursor.read_bool().unwrap());
        assert!(!cursor.read_bool().unwrap());
        assert!(!cursor.read_bool().unwrap());
        assert!(!cursor.read_bool().unwrap());
        assert!(cursor.read_bool().is_err());
    }

    #[test]
    fn test_underflow_leaves_position() {
        let mut cursor = ByteCursor::reader(&[0x01, 0x02, 0x03]);
        cursor.read_byte().unwrap();

        assert_eq!(
            cursor.read_u32().unwrap_err(),
            PacketError::BufferUnderflow {
                needed: 4,
                remaining: 2
            }
        );
        assert!(cursor.read_u64().is_err());
        assert!(cursor.read_f32().is_err());
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_u16().unwrap(), 0x0203);
    }

    #[test]
    fn test_float_sanitization() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&f32::NAN.to_bits().to_be_bytes());
        bytes.extend_from_slice(&f32::INFINITY.to_bits().to_be_bytes());
        bytes.extend_from_slice(&(-1.5f32).to_bits().to_be_bytes());
        bytes.extend_from_slice(&f64::NEG_INFINITY.to_bits().to_be_bytes());
        bytes.extend_from_slice(&f64::NAN.to_bits().to_be_bytes());
        bytes.extend_from_slice(&core::f64::consts::PI.to_bits().to_be_bytes());

        let mut cursor = ByteCursor::reader(&bytes);
        assert_eq!(cursor.read_f32().unwrap(), 0.0);
        assert_eq!(cursor.read_f32().unwrap(), 0.0);
        assert_eq!(cursor.read_f32().unwrap(), -1.5);
        assert_eq!(cursor.read_f64().unwrap(), 0.0);
        assert_eq!(cursor.read_f64().unwrap(), 0.0);
        assert_eq!(cursor.read_f64().unwrap(), core::f64::consts::PI);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_read_bytes() {
        let mut cursor = ByteCursor::reader(&[0x00, 0x03, 0xAA, 0xBB, 0xCC, 0x7F]);
        let bytes = cursor.read_bytes().unwrap();
        assert_eq!(&bytes[..], &[0xAA, 0xBB, 0xCC]);
        assert_eq!(cursor.used(), 5);
        assert_eq!(cursor.read_byte().unwrap(), 0x7F);
    }

    #[test]
    fn test_read_bytes_is_owned() {
        let data = vec![0x00, 0x02, 0x10, 0x20];
        let bytes = {
            let mut cursor = ByteCursor::reader(&data);
            cursor.read_bytes().unwrap()
        };
        drop(data);
        assert_eq!(&bytes[..], &[0x10, 0x20]);
    }

    #[test]
    fn test_read_bytes_missing_prefix() {
        let mut cursor = ByteCursor::reader(&[0x00]);
        assert_eq!(
            cursor.read_bytes().unwrap_err(),
            PacketError::BufferUnderflow {
                needed: 2,
                remaining: 1
            }
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_read_bytes_short_payload_keeps_prefix_consumed() {
        let mut cursor = ByteCursor::reader(&[0x00, 0x05, 0x01, 0x02]);
        assert_eq!(
            cursor.read_bytes().unwrap_err(),
            PacketError::BufferUnderflow {
                needed: 5,
                remaining: 2
            }
        );
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_read_string() {
        let mut cursor = ByteCursor::reader(&[0x00, 0x02, b'o', b'k', 0x00, 0x01, 0xFF]);
        assert_eq!(cursor.read_string().unwrap(), "ok");
        assert_eq!(cursor.read_string().unwrap_err(), PacketError::InvalidUtf8);
        assert_eq!(cursor.remaining(), 0);
    }
}
