//! Frame type and pack/unpack.
//!
//! A frame is `[length: u16 BE][flag: u8][payload: length bytes]`.
//! The payload is opaque and always owned by the frame (`bytes::Bytes`),
//! never a view into the cursor it was decoded from.
//!
//! # Example
//!
//! ```
//! use framewire::{pack, unpack, ByteCursor, Frame};
//!
//! let frame = Frame::new(vec![0x01, 0x02, 0x03]).unwrap();
//!
//! let mut buf = [0u8; 8];
//! let mut cursor = ByteCursor::writer(&mut buf);
//! pack(&frame, &mut cursor).unwrap();
//! assert_eq!(cursor.written(), &[0x00, 0x03, 0x00, 0x01, 0x02, 0x03]);
//! assert_eq!(cursor.remaining(), 2);
//!
//! let mut cursor = ByteCursor::reader(&buf[..6]);
//! let decoded = unpack(&mut cursor).unwrap();
//! assert_eq!(decoded.length(), 3);
//! assert!(!decoded.is_encrypted());
//! assert_eq!(decoded.payload(), &[0x01, 0x02, 0x03]);
//! ```

use bytes::{Bytes, BytesMut};
use tracing::trace;

use super::wire_format::{FrameConfig, FLAG_ENCRYPTED, FLAG_PLAIN, FLAG_SIZE, HEADER_SIZE};
use crate::buffer::ByteCursor;
use crate::codec::Wire;
use crate::error::{PacketError, Result};

/// A length-prefixed frame with a single flag byte.
///
/// `length() == payload().len()` always holds; it is checked when the
/// frame is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Declared payload size.
    length: u16,
    /// Raw flag byte as seen on the wire.
    flag: u8,
    /// Payload bytes.
    payload: Bytes,
}

impl Frame {
    /// Create a plain (unencrypted) frame.
    ///
    /// # Errors
    ///
    /// Returns `FrameTooLarge` if the payload does not fit the 16-bit
    /// length field. The tighter protocol ceiling is enforced by `pack`.
    pub fn new(payload: impl Into<Bytes>) -> Result<Self> {
        Self::with_flag(FLAG_PLAIN, payload)
    }

    /// Create a frame whose payload is marked encrypted.
    pub fn encrypted(payload: impl Into<Bytes>) -> Result<Self> {
        Self::with_flag(FLAG_ENCRYPTED, payload)
    }

    /// Create a frame with a raw flag byte.
    pub fn with_flag(flag: u8, payload: impl Into<Bytes>) -> Result<Self> {
        let payload = payload.into();
        let length = u16::try_from(payload.len()).map_err(|_| PacketError::FrameTooLarge {
            length: payload.len(),
            limit: u16::MAX as usize,
        })?;
        Ok(Self {
            length,
            flag,
            payload,
        })
    }

    /// Declared payload length.
    #[inline]
    pub fn length(&self) -> u16 {
        self.length
    }

    /// Raw flag byte.
    #[inline]
    pub fn flag(&self) -> u8 {
        self.flag
    }

    /// True only when the flag byte is exactly `1`.
    #[inline]
    pub fn is_encrypted(&self) -> bool {
        self.flag == FLAG_ENCRYPTED
    }

    /// Mark the payload encrypted or plain.
    #[inline]
    pub fn set_encrypted(&mut self, encrypted: bool) {
        self.flag = if encrypted { FLAG_ENCRYPTED } else { FLAG_PLAIN };
    }

    /// Payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Take the payload out of the frame.
    #[inline]
    pub fn into_payload(self) -> Bytes {
        self.payload
    }

    /// Bytes this frame occupies on the wire.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.length as usize
    }

    /// Pack into a freshly allocated buffer of exactly `encoded_len()` bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.encoded_len()];
        pack(self, &mut ByteCursor::writer(&mut buf))?;
        Ok(buf)
    }
}

impl FrameConfig {
    /// Serialize `frame` at the cursor position.
    ///
    /// # Errors
    ///
    /// - `FrameTooLarge` if the payload exceeds `max_payload()`
    /// - `InsufficientSpace` if the cursor cannot hold `3 + length` bytes
    ///
    /// Both checks run before any byte is written.
    pub fn pack<T>(&self, frame: &Frame, cursor: &mut ByteCursor<T>) -> Result<()>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
    {
        let length = frame.length as usize;
        let limit = self.max_payload();
        if length > limit {
            return Err(PacketError::FrameTooLarge { length, limit });
        }

        let needed = HEADER_SIZE + length;
        let remaining = cursor.remaining();
        if remaining < needed {
            return Err(PacketError::InsufficientSpace { needed, remaining });
        }

        cursor.write_u16(frame.length)?;
        cursor.write_byte(frame.flag)?;
        for &byte in frame.payload.iter() {
            cursor.write_byte(byte)?;
        }

        trace!(length, flag = frame.flag, "packed frame");
        Ok(())
    }

    /// Deserialize one frame from the cursor position.
    ///
    /// # Errors
    ///
    /// - `MissingLength` if fewer than 2 bytes remain
    /// - `InsufficientData` if the flag and payload are not all present;
    ///   the cursor is moved back to where the frame starts so the caller
    ///   can retry once more bytes arrive
    /// - `FrameTooLarge` if the declared length exceeds `max_payload()`
    pub fn unpack<T: AsRef<[u8]>>(&self, cursor: &mut ByteCursor<T>) -> Result<Frame> {
        let start = cursor.position();
        let length = cursor.read_u16().map_err(|_| PacketError::MissingLength)?;

        let needed = FLAG_SIZE + length as usize;
        let remaining = cursor.remaining();
        if remaining < needed {
            cursor.set_position(start)?;
            return Err(PacketError::InsufficientData { needed, remaining });
        }

        let mut payload = BytesMut::zeroed(length as usize);
        let flag = cursor.read_byte()?;

        let limit = self.max_payload();
        if length as usize > limit {
            return Err(PacketError::FrameTooLarge {
                length: length as usize,
                limit,
            });
        }

        for slot in payload.iter_mut() {
            *slot = cursor.read_byte()?;
        }

        trace!(length, flag, "unpacked frame");
        Ok(Frame {
            length,
            flag,
            payload: payload.freeze(),
        })
    }
}

/// Pack `frame` into `cursor` under the default protocol limits.
pub fn pack<T>(frame: &Frame, cursor: &mut ByteCursor<T>) -> Result<()>
where
    T: AsRef<[u8]> + AsMut<[u8]>,
{
    FrameConfig::default().pack(frame, cursor)
}

/// Unpack one frame from `cursor` under the default protocol limits.
pub fn unpack<T: AsRef<[u8]>>(cursor: &mut ByteCursor<T>) -> Result<Frame> {
    FrameConfig::default().unpack(cursor)
}

impl Wire for Frame {
    fn encode<T>(&self, cursor: &mut ByteCursor<T>) -> Result<()>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
    {
        pack(self, cursor)
    }

    fn decode<T: AsRef<[u8]>>(cursor: &mut ByteCursor<T>) -> Result<Self> {
        unpack(cursor)
    }
}
