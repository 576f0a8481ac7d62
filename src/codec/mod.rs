//! Codec module - typed encoding on top of [`ByteCursor`].
//!
//! [`Wire`] lets the layer above compose its payload records from the
//! cursor primitives without calling each `write_*`/`read_*` by hand.
//!
//! # Example
//!
//! ```
//! use framewire::{ByteCursor, Wire};
//!
//! struct Login {
//!     user: String,
//!     level: u16,
//! }
//!
//! impl Wire for Login {
//!     fn encode<T>(&self, cursor: &mut ByteCursor<T>) -> framewire::Result<()>
//!     where
//!         T: AsRef<[u8]> + AsMut<[u8]>,
//!     {
//!         cursor.put(&self.user)?;
//!         cursor.put(&self.level)
//!     }
//!
//!     fn decode<T: AsRef<[u8]>>(cursor: &mut ByteCursor<T>) -> framewire::Result<Self> {
//!         Ok(Login {
//!             user: cursor.get()?,
//!             level: cursor.get()?,
//!         })
//!     }
//! }
//!
//! let mut buf = [0u8; 16];
//! let mut cursor = ByteCursor::writer(&mut buf);
//! cursor.put(&Login { user: "ana".to_string(), level: 3 }).unwrap();
//! let used = cursor.used();
//!
//! let login: Login = ByteCursor::reader(&buf[..used]).get().unwrap();
//! assert_eq!(login.user, "ana");
//! assert_eq!(login.level, 3);
//! ```

mod primitives;

use crate::buffer::ByteCursor;
use crate::error::Result;

/// A value with a fixed binary layout on a [`ByteCursor`].
pub trait Wire: Sized {
    /// Write `self` at the cursor position.
    fn encode<T>(&self, cursor: &mut ByteCursor<T>) -> Result<()>
    where
        T: AsRef<[u8]> + AsMut<[u8]>;

    /// Read a value from the cursor position.
    fn decode<T: AsRef<[u8]>>(cursor: &mut ByteCursor<T>) -> Result<Self>;
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> ByteCursor<T> {
    /// Encode any [`Wire`] value.
    #[inline]
    pub fn put<W: Wire>(&mut self, value: &W) -> Result<()> {
        value.encode(self)
    }
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    /// Decode any [`Wire`] value.
    #[inline]
    pub fn get<W: Wire>(&mut self) -> Result<W> {
        W::decode(self)
    }
}
