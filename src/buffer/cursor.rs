//! Cursor over a caller-owned byte region.
//!
//! The cursor never owns more than it is handed: `ByteCursor<&mut [u8]>`
//! borrows the caller's storage for writing, `ByteCursor<&[u8]>` for reading.
//! Writes are only available when the region is mutable.

use crate::error::{PacketError, Result};

/// A fixed-size byte region with a read/write position.
///
/// Invariant: `0 <= position <= length()`. Every operation that would move
/// the position past the end fails and leaves the cursor untouched.
#[derive(Debug, Clone)]
pub struct ByteCursor<T> {
    /// Backing storage (borrowed or owned by the caller).
    inner: T,
    /// Bytes consumed or produced so far.
    pos: usize,
}

impl<T> ByteCursor<T> {
    /// Create a cursor at position 0 over `inner`.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self { inner, pos: 0 }
    }

    /// Current offset into the region.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Give back the backing storage.
    #[inline]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<'a> ByteCursor<&'a [u8]> {
    /// Cursor for decoding received bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use framewire::ByteCursor;
    ///
    /// let mut cursor = ByteCursor::reader(&[0x12, 0x34]);
    /// assert_eq!(cursor.read_u16().unwrap(), 0x1234);
    /// assert_eq!(cursor.remaining(), 0);
    /// ```
    #[inline]
    pub fn reader(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a> ByteCursor<&'a mut [u8]> {
    /// Cursor for encoding into a destination buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use framewire::ByteCursor;
    ///
    /// let mut buf = [0u8; 4];
    /// let mut cursor = ByteCursor::writer(&mut buf);
    /// cursor.write_u16(0x1234).unwrap();
    /// assert_eq!(cursor.written(), &[0x12, 0x34]);
    /// assert_eq!(cursor.remaining(), 2);
    /// ```
    #[inline]
    pub fn writer(data: &'a mut [u8]) -> Self {
        Self::new(data)
    }
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    /// Total size of the region.
    #[inline]
    pub fn length(&self) -> usize {
        self.inner.as_ref().len()
    }

    /// Bytes consumed or produced so far (same as `position`).
    #[inline]
    pub fn used(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the region.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.length() - self.pos
    }

    /// Move the position explicitly, e.g. to retry a partially consumed region.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` if `position > length()`.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        let length = self.length();
        if position > length {
            return Err(PacketError::InvalidPosition { position, length });
        }
        self.pos = position;
        Ok(())
    }

    /// Move the position back to the start.
    #[inline]
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// The whole backing region.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.inner.as_ref()
    }

    /// The region before the position (what a sender ships).
    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.inner.as_ref()[..self.pos]
    }

    /// The region after the position (what a reader has not consumed yet).
    #[inline]
    pub fn unread(&self) -> &[u8] {
        &self.inner.as_ref()[self.pos..]
    }

    /// Borrow the next `n` bytes and advance past them.
    pub(crate) fn take(&mut self, n: usize) -> Result<&[u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(PacketError::BufferUnderflow {
                needed: n,
                remaining,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.inner.as_ref()[start..start + n])
    }

    /// Copy the next `N` bytes out and advance past them.
    #[inline]
    pub(crate) fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> ByteCursor<T> {
    /// Reserve the next `n` bytes for writing and advance past them.
    pub(crate) fn claim(&mut self, n: usize) -> Result<&mut [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(PacketError::BufferOverflow {
                needed: n,
                remaining,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&mut self.inner.as_mut()[start..start + n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cursor_quantities() {
        let buf = [0u8; 8];
        let cursor = ByteCursor::reader(&buf);

        assert_eq!(cursor.length(), 8);
        assert_eq!(cursor.used(), 0);
        assert_eq!(cursor.remaining(), 8);
        assert!(cursor.written().is_empty());
        assert_eq!(cursor.unread().len(), 8);
    }

    #[test]
    fn test_take_advances_exactly() {
        let buf = [1u8, 2, 3, 4, 5];
        let mut cursor = ByteCursor::reader(&buf);

        assert_eq!(cursor.take(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.take_array::<3>().unwrap(), [3, 4, 5]);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_take_past_end_leaves_position() {
        let buf = [1u8, 2, 3];
        let mut cursor = ByteCursor::reader(&buf);
        cursor.take(2).unwrap();

        let err = cursor.take(2).unwrap_err();
        assert_eq!(
            err,
            PacketError::BufferUnderflow {
                needed: 2,
                remaining: 1
            }
        );
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_claim_past_end_leaves_region() {
        let mut buf = [0xAAu8; 3];
        let mut cursor = ByteCursor::writer(&mut buf);

        let err = cursor.claim(4).unwrap_err();
        assert_eq!(
            err,
            PacketError::BufferOverflow {
                needed: 4,
                remaining: 3
            }
        );
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.data(), &[0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn test_set_position_bounds() {
        let buf = [0u8; 4];
        let mut cursor = ByteCursor::reader(&buf);

        cursor.set_position(4).unwrap();
        assert_eq!(cursor.remaining(), 0);

        let err = cursor.set_position(5).unwrap_err();
        assert_eq!(
            err,
            PacketError::InvalidPosition {
                position: 5,
                length: 4
            }
        );
        assert_eq!(cursor.position(), 4);

        cursor.rewind();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_owned_storage_round_trip() {
        let mut cursor = ByteCursor::new(vec![0u8; 3]);
        cursor.claim(2).unwrap().copy_from_slice(&[7, 8]);
        assert_eq!(cursor.written(), &[7, 8]);
        assert_eq!(cursor.into_inner(), vec![7, 8, 0]);
    }

    #[test]
    fn test_empty_region() {
        let mut cursor = ByteCursor::reader(&[]);
        assert_eq!(cursor.length(), 0);
        assert_eq!(cursor.take(0).unwrap(), &[] as &[u8]);
        assert!(cursor.take(1).is_err());
    }
}
