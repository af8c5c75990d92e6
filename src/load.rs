// -*- mode: rust; -*-
//
// This file is part of ed25519-byteloader.
// See LICENSE for licensing information.

//! Little-endian loads of fixed-width byte windows.
//!
//! Every function here reads exactly 3, 4 or 8 bytes and returns them as
//! an unsigned integer with the byte at the lowest index in the
//! least-significant position.  Bytes past the window are never read.
//!
//! The slice-taking variants require the caller to supply enough bytes.
//! A short slice is a precondition violation and panics on the
//! out-of-bounds index; no error is returned.  Decoders of fixed-size
//! encodings (32-byte field elements, 64-byte wide scalars) never form
//! such a read by construction.

/// Convert an array of exactly three bytes into a `u32`.
#[inline]
pub const fn load3_bytes(input: &[u8; 3]) -> u32 {
       (input[0] as u32)
    | ((input[1] as u32) << 8)
    | ((input[2] as u32) << 16)
}

/// Convert an array of exactly four bytes into a `u64`.
///
/// The result only has 32 significant bits.  It is returned in a `u64`
/// so that limb decoders can shift it left without truncation.
#[inline]
pub const fn load4_bytes(input: &[u8; 4]) -> u64 {
       (input[0] as u64)
    | ((input[1] as u64) << 8)
    | ((input[2] as u64) << 16)
    | ((input[3] as u64) << 24)
}

/// Convert an array of exactly eight bytes into a `u64`.
#[inline]
pub const fn load8_bytes(input: &[u8; 8]) -> u64 {
       (input[0] as u64)
    | ((input[1] as u64) << 8)
    | ((input[2] as u64) << 16)
    | ((input[3] as u64) << 24)
    | ((input[4] as u64) << 32)
    | ((input[5] as u64) << 40)
    | ((input[6] as u64) << 48)
    | ((input[7] as u64) << 56)
}

/// Convert a slice of (at least) three bytes into a `u32`.
///
/// # Panics
///
/// If `input.len() < 3`.
#[inline]
pub const fn load3(input: &[u8]) -> u32 {
    load3_at(input, 0)
}

/// Convert a slice of (at least) four bytes into a `u64`.
///
/// # Panics
///
/// If `input.len() < 4`.
#[inline]
pub const fn load4(input: &[u8]) -> u64 {
    load4_at(input, 0)
}

/// Convert a slice of (at least) eight bytes into a `u64`.
///
/// # Panics
///
/// If `input.len() < 8`.
#[inline]
pub const fn load8(input: &[u8]) -> u64 {
    load8_at(input, 0)
}

/// Load the three bytes `input[i..i + 3]` as a `u32`.
///
/// # Panics
///
/// If `i + 3 > input.len()`.
#[inline]
pub const fn load3_at(input: &[u8], i: usize) -> u32 {
    load3_bytes(&[input[i], input[i + 1], input[i + 2]])
}

/// Load the four bytes `input[i..i + 4]` as a `u64`.
///
/// # Panics
///
/// If `i + 4 > input.len()`.
#[inline]
pub const fn load4_at(input: &[u8], i: usize) -> u64 {
    load4_bytes(&[input[i], input[i + 1], input[i + 2], input[i + 3]])
}

/// Load the eight bytes `input[i..i + 8]` as a `u64`.
///
/// # Panics
///
/// If `i + 8 > input.len()`.
#[inline]
pub const fn load8_at(input: &[u8], i: usize) -> u64 {
    load8_bytes(&[
        input[i],
        input[i + 1],
        input[i + 2],
        input[i + 3],
        input[i + 4],
        input[i + 5],
        input[i + 6],
        input[i + 7],
    ])
}

/// Split `input` into `N` consecutive 24-bit limbs, so that
/// `limbs[k] = load3_at(input, 3 * k)`.
///
/// No masking or carrying is done; the limbs are the raw windows.
///
/// # Panics
///
/// If `input.len() < 3 * N`.
pub fn load3_limbs<const N: usize>(input: &[u8]) -> [u32; N] {
    let mut limbs = [0u32; N];
    for (k, limb) in limbs.iter_mut().enumerate() {
        *limb = load3_at(input, 3 * k);
    }
    limbs
}

/// Split `input` into `N` consecutive 32-bit limbs, so that
/// `limbs[k] = load4_at(input, 4 * k)`.
///
/// # Panics
///
/// If `input.len() < 4 * N`.
pub fn load4_limbs<const N: usize>(input: &[u8]) -> [u64; N] {
    let mut limbs = [0u64; N];
    for (k, limb) in limbs.iter_mut().enumerate() {
        *limb = load4_at(input, 4 * k);
    }
    limbs
}
