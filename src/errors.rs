// -*- mode: rust; -*-
//
// This file is part of ed25519-byteloader.
// See LICENSE for licensing information.

//! Errors which may occur when reading through a [`ByteLoader`](crate::ByteLoader).
//!
//! The free `load*` functions never return these; they treat a short
//! buffer as a caller bug.

use core::fmt;
use core::fmt::Display;

/// Internal errors.  Most callers will only need the accessors on
/// [`LoadError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum InternalError {
    /// Fewer than `width` bytes were left at `offset`.
    ShortRead {
        offset: usize,
        width: usize,
        available: usize,
    },
    /// An attempt to move the cursor past the end of a `length`-byte
    /// buffer.
    SeekOutOfRange { offset: usize, length: usize },
}

impl Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InternalError::ShortRead {
                offset,
                width,
                available,
            } => write!(
                f,
                "cannot load {} bytes at offset {}: only {} available",
                width, offset, available
            ),
            InternalError::SeekOutOfRange { offset, length } => write!(
                f,
                "offset {} is past the end of a {}-byte buffer",
                offset, length
            ),
        }
    }
}

/// Errors which may occur while reading windows through a cursor.
///
/// This error may arise due to:
///
/// * A checked load running off the end of the buffer.
///
/// * A seek or skip to a position past the end of the buffer.
///
/// In both cases the cursor is left where it was.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct LoadError(pub(crate) InternalError);

impl LoadError {
    /// The offset the failed operation was aimed at.
    ///
    /// For a short read this is the cursor position; for a seek it is
    /// the requested target.
    pub fn offset(&self) -> usize {
        match self.0 {
            InternalError::ShortRead { offset, .. } => offset,
            InternalError::SeekOutOfRange { offset, .. } => offset,
        }
    }

    /// Whether this error came from a load rather than a seek.
    pub fn is_short_read(&self) -> bool {
        matches!(self.0, InternalError::ShortRead { .. })
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoadError {}
