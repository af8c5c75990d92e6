// -*- mode: rust; -*-
//
// This file is part of ed25519-byteloader.
// See LICENSE for licensing information.

//! A read-only cursor for loading consecutive windows from one buffer.
//!
//! Limb decoders read an encoding at a fixed sequence of offsets, e.g.
//! `0, 3, 6, 9, ...` for 24-bit windows or `0, 4, 8, ...` for 32-bit
//! ones.  [`ByteLoader`] keeps that offset for them.
//!
//! ```
//! use ed25519_byteloader::ByteLoader;
//!
//! let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
//! let mut loader = ByteLoader::new(&bytes);
//!
//! assert_eq!(loader.try_load3(), Ok(0x030201));
//! assert_eq!(loader.try_load4(), Ok(0x07060504));
//! assert!(loader.try_load3().is_err());
//! ```

use log::trace;

use crate::errors::{InternalError, LoadError};
use crate::load::{load3_at, load4_at, load8_at};

/// A cursor over a borrowed byte buffer.
///
/// The buffer is never copied or written.  Any number of cursors may
/// read the same buffer at once.
#[derive(Clone, Copy, Debug)]
pub struct ByteLoader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteLoader<'a> {
    /// Construct a cursor positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> ByteLoader<'a> {
        ByteLoader { bytes, offset: 0 }
    }

    /// The offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// The number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// The unread tail of the buffer.
    pub fn as_slice(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    /// Load three bytes at the current position and advance past them.
    ///
    /// # Panics
    ///
    /// If fewer than three bytes remain.  Use [`try_load3`](Self::try_load3)
    /// when the length is not known to be sufficient.
    #[inline]
    pub fn load3(&mut self) -> u32 {
        let value = load3_at(self.bytes, self.offset);
        self.offset += 3;
        value
    }

    /// Load four bytes at the current position and advance past them.
    ///
    /// # Panics
    ///
    /// If fewer than four bytes remain.
    #[inline]
    pub fn load4(&mut self) -> u64 {
        let value = load4_at(self.bytes, self.offset);
        self.offset += 4;
        value
    }

    /// Load eight bytes at the current position and advance past them.
    ///
    /// # Panics
    ///
    /// If fewer than eight bytes remain.
    #[inline]
    pub fn load8(&mut self) -> u64 {
        let value = load8_at(self.bytes, self.offset);
        self.offset += 8;
        value
    }

    /// Like [`load3`](Self::load3), but returns an error instead of
    /// panicking.  The cursor does not move on error.
    pub fn try_load3(&mut self) -> Result<u32, LoadError> {
        self.check_remaining(3)?;
        Ok(self.load3())
    }

    /// Like [`load4`](Self::load4), but returns an error instead of
    /// panicking.  The cursor does not move on error.
    pub fn try_load4(&mut self) -> Result<u64, LoadError> {
        self.check_remaining(4)?;
        Ok(self.load4())
    }

    /// Like [`load8`](Self::load8), but returns an error instead of
    /// panicking.  The cursor does not move on error.
    pub fn try_load8(&mut self) -> Result<u64, LoadError> {
        self.check_remaining(8)?;
        Ok(self.load8())
    }

    /// Move the cursor to `offset`.
    ///
    /// Seeking to exactly the end of the buffer is allowed; any further
    /// is an error and leaves the cursor in place.
    pub fn seek(&mut self, offset: usize) -> Result<(), LoadError> {
        if offset > self.bytes.len() {
            trace!(
                "seek to offset {} rejected, buffer holds {} bytes",
                offset,
                self.bytes.len()
            );
            return Err(LoadError(InternalError::SeekOutOfRange {
                offset,
                length: self.bytes.len(),
            }));
        }
        self.offset = offset;
        Ok(())
    }

    /// Advance the cursor by `n` bytes without reading them.
    pub fn skip(&mut self, n: usize) -> Result<(), LoadError> {
        // Saturate so that an overflowing target still reports as out of range.
        self.seek(self.offset.saturating_add(n))
    }

    fn check_remaining(&self, width: usize) -> Result<(), LoadError> {
        let available = self.remaining();
        if available < width {
            trace!(
                "short read of {} bytes at offset {}, {} available",
                width,
                self.offset,
                available
            );
            return Err(LoadError(InternalError::ShortRead {
                offset: self.offset,
                width,
                available,
            }));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::load::{load3, load4};

    /// Byte representation of a random field element, from Sage.
    static A_BYTES: [u8; 32] = [
        0x04, 0xfe, 0xdf, 0x98, 0xa7, 0xfa, 0x0a, 0x68, 0x84, 0x92, 0xbd, 0x59, 0x08, 0x07, 0xa7,
        0x03, 0x9e, 0xd1, 0xf6, 0xf2, 0xe1, 0xd9, 0xe2, 0xa4, 0xa4, 0x51, 0x47, 0x36, 0xf3, 0xc3,
        0xa9, 0x17,
    ];

    #[test]
    fn successive_reads_advance_by_width() {
        let mut loader = ByteLoader::new(&A_BYTES);
        assert_eq!(loader.load4(), 0x98dffe04);
        assert_eq!(loader.position(), 4);
        assert_eq!(loader.load3(), 0x0afaa7);
        assert_eq!(loader.position(), 7);
        assert_eq!(loader.load8(), load8_at(&A_BYTES, 7));
        assert_eq!(loader.position(), 15);
        assert_eq!(loader.remaining(), 17);
        assert_eq!(loader.as_slice(), &A_BYTES[15..]);
    }

    #[test]
    fn ref10_field_offsets() {
        // The window layout used when unpacking a field element into ten limbs.
        let offsets = [0, 4, 7, 10, 13, 16, 20, 23, 26, 29];
        let mut loader = ByteLoader::new(&A_BYTES);
        for &i in offsets.iter() {
            assert_eq!(loader.position(), i);
            if i == 0 || i == 16 {
                assert_eq!(loader.load4(), load4(&A_BYTES[i..]));
            } else {
                assert_eq!(loader.load3(), load3(&A_BYTES[i..]));
            }
        }
        assert_eq!(loader.remaining(), 0);
    }

    #[test]
    fn reading_to_the_exact_end_succeeds() {
        let mut loader = ByteLoader::new(&A_BYTES[..7]);
        assert!(loader.try_load4().is_ok());
        assert!(loader.try_load3().is_ok());
        assert_eq!(loader.remaining(), 0);
        assert!(loader.as_slice().is_empty());
    }

    #[test]
    fn short_read_reports_and_does_not_advance() {
        let mut loader = ByteLoader::new(&A_BYTES);
        loader.seek(30).unwrap();

        let e = loader.try_load4().unwrap_err();
        assert!(e.is_short_read());
        assert_eq!(e.offset(), 30);
        assert_eq!(
            e.0,
            InternalError::ShortRead {
                offset: 30,
                width: 4,
                available: 2
            }
        );
        assert_eq!(loader.position(), 30);

        assert!(loader.try_load3().is_err());
        assert!(loader.try_load8().is_err());
        assert_eq!(loader.position(), 30);
    }

    #[test]
    fn empty_buffer_rejects_every_checked_load() {
        let mut loader = ByteLoader::new(&[]);
        assert_eq!(loader.remaining(), 0);
        assert!(loader.try_load3().is_err());
        assert!(loader.try_load4().is_err());
        assert!(loader.try_load8().is_err());
    }

    #[test]
    fn seek_bounds() {
        let mut loader = ByteLoader::new(&A_BYTES);
        assert!(loader.seek(32).is_ok());
        assert_eq!(loader.remaining(), 0);

        let e = loader.seek(33).unwrap_err();
        assert_eq!(
            e.0,
            InternalError::SeekOutOfRange {
                offset: 33,
                length: 32
            }
        );
        assert_eq!(loader.position(), 32);

        loader.seek(3).unwrap();
        assert_eq!(loader.load3(), load3_at(&A_BYTES, 3));
    }

    #[test]
    fn skip_moves_forward_and_saturates() {
        let mut loader = ByteLoader::new(&A_BYTES);
        loader.skip(28).unwrap();
        assert_eq!(loader.load4(), load4_at(&A_BYTES, 28));

        loader.seek(1).unwrap();
        let e = loader.skip(usize::MAX).unwrap_err();
        assert_eq!(e.offset(), usize::MAX);
        assert_eq!(loader.position(), 1);
    }

    #[test]
    fn copies_are_independent() {
        let mut a = ByteLoader::new(&A_BYTES);
        a.load3();
        let mut b = a;
        b.load4();
        assert_eq!(a.position(), 3);
        assert_eq!(b.position(), 7);
    }

    #[test]
    #[should_panic]
    fn unchecked_short_read_panics() {
        let mut loader = ByteLoader::new(&A_BYTES[..2]);
        loader.load3();
    }
}
