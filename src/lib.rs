// -*- mode: rust; -*-
//
// This file is part of ed25519-byteloader.
// See LICENSE for licensing information.

#![no_std]
#![deny(missing_docs)]

//! Fixed-width little-endian loads for Ed25519 limb decoding.
//!
//! Field element and scalar decoders in the ref10 family read a 32- or
//! 64-byte encoding three or four bytes at a time, shift and mask each
//! window into a limb, and then reduce.  This crate provides the first
//! of those steps: turning a short window of bytes into an unsigned
//! integer, least-significant byte first.
//!
//! ```
//! use ed25519_byteloader::{load3, load4, ByteLoader};
//!
//! assert_eq!(load3(&[0x01, 0x02, 0x03]), 0x030201);
//! assert_eq!(load4(&[0x78, 0x56, 0x34, 0x12]), 0x12345678);
//!
//! let bytes = [0u8; 32];
//! let mut loader = ByteLoader::new(&bytes);
//! let h0 = loader.load4();
//! let h1 = loader.load3();
//! assert_eq!((h0, h1, loader.position()), (0, 0, 7));
//! ```
//!
//! The free functions have no error path: handing them a slice that is
//! too short is a caller bug and panics on the out-of-bounds index.  The
//! [`ByteLoader`] cursor additionally offers checked reads which return
//! a [`LoadError`] instead.

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(feature = "std")]
extern crate std;

//------------------------------------------------------------------------
// ed25519-byteloader public modules
//------------------------------------------------------------------------

// Little-endian loads of 3, 4 and 8 byte windows
pub mod load;

// Cursor for reading consecutive windows from one buffer
pub mod loader;

// Errors produced by the checked cursor API
pub mod errors;

//------------------------------------------------------------------------
// Re-exports
//------------------------------------------------------------------------

pub use crate::errors::LoadError;
pub use crate::load::{
    load3, load3_at, load3_bytes, load3_limbs, load4, load4_at, load4_bytes, load4_limbs, load8,
    load8_at, load8_bytes,
};
pub use crate::loader::ByteLoader;
