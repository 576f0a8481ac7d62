use bytes::Bytes;

use super::Wire;
use crate::buffer::ByteCursor;
use crate::error::Result;

/// Implements [`Wire`] by delegating to a cursor writer/reader pair.
macro_rules! impl_wire {
    ($ty:ty, $write:ident, $read:ident) => {
        impl Wire for $ty {
            #[inline]
            fn encode<T>(&self, cursor: &mut ByteCursor<T>) -> Result<()>
            where
                T: AsRef<[u8]> + AsMut<[u8]>,
            {
                cursor.$write(*self)
            }

            #[inline]
            fn decode<T: AsRef<[u8]>>(cursor: &mut ByteCursor<T>) -> Result<Self> {
                cursor.$read()
            }
        }
    };
}

impl_wire!(bool, write_bool, read_bool);
impl_wire!(u8, write_byte, read_byte);
impl_wire!(i8, write_s8, read_s8);

// Big-endian ints:
impl_wire!(u16, write_u16, read_u16);
impl_wire!(i16, write_s16, read_s16);
impl_wire!(u32, write_u32, read_u32);
impl_wire!(i32, write_s32, read_s32);
impl_wire!(u64, write_u64, read_u64);
impl_wire!(i64, write_s64, read_s64);

// Floats decode NaN/infinity as zero.
impl_wire!(f32, write_f32, read_f32);
impl_wire!(f64, write_f64, read_f64);

impl Wire for Bytes {
    fn encode<T>(&self, cursor: &mut ByteCursor<T>) -> Result<()>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
    {
        cursor.write_bytes(self)
    }

    fn decode<T: AsRef<[u8]>>(cursor: &mut ByteCursor<T>) -> Result<Self> {
        cursor.read_bytes()
    }
}

impl Wire for Vec<u8> {
    fn encode<T>(&self, cursor: &mut ByteCursor<T>) -> Result<()>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
    {
        cursor.write_bytes(self)
    }

    fn decode<T: AsRef<[u8]>>(cursor: &mut ByteCursor<T>) -> Result<Self> {
        Ok(cursor.read_bytes()?.to_vec())
    }
}

impl Wire for String {
    fn encode<T>(&self, cursor: &mut ByteCursor<T>) -> Result<()>
    where
        T: AsRef<[u8]> + AsMut<[u8]>,
    {
        cursor.write_string(self)
    }

    fn decode<T: AsRef<[u8]>>(cursor: &mut ByteCursor<T>) -> Result<Self> {
        cursor.read_string()
    }
}
