// src/math/bits.rs

//! Bit interleaving for nested pixel addresses.
//!
//! A nested index stores the intra-face `ix` coordinate in the even bits and
//! `iy` in the odd bits. Both directions work a byte at a time through small
//! lookup tables built at compile time.

use crate::constants::{BYTE_MASK, EVEN_BITS_MASK};

/// `UTAB[b]` is byte `b` with bit `i` moved to bit `2i`.
pub(crate) static UTAB: [u16; 256] = build_utab();

/// `CTAB[b]` gathers the even bits of `b` into bits 0-3 and the odd bits into
/// bits 8-11. This matches the layout `compress_bits` produces after folding
/// the upper half of a masked word onto the odd positions.
pub(crate) static CTAB: [u16; 256] = build_ctab();

const fn build_utab() -> [u16; 256] {
  let mut tab = [0u16; 256];
  let mut i = 0;
  while i < 256 {
    let mut out = 0u16;
    let mut bit = 0;
    while bit < 8 {
      if i & (1 << bit) != 0 {
        out |= 1 << (2 * bit);
      }
      bit += 1;
    }
    tab[i] = out;
    i += 1;
  }
  tab
}

const fn build_ctab() -> [u16; 256] {
  let mut tab = [0u16; 256];
  let mut i = 0;
  while i < 256 {
    let mut out = 0u16;
    let mut k = 0;
    while k < 4 {
      if i & (1 << (2 * k)) != 0 {
        out |= 1 << k;
      }
      if i & (1 << (2 * k + 1)) != 0 {
        out |= 1 << (k + 8);
      }
      k += 1;
    }
    tab[i] = out;
    i += 1;
  }
  tab
}

/// Spreads the 32 bits of `v` onto the even bit positions of a `u64`.
///
/// Bit `i` of the input lands on bit `2i` of the output; all odd bits are zero.
#[inline]
#[must_use]
pub fn spread_bits(v: u32) -> u64 {
  let v = v as u64;
  (UTAB[(v & BYTE_MASK) as usize] as u64)
    | ((UTAB[((v >> 8) & BYTE_MASK) as usize] as u64) << 16)
    | ((UTAB[((v >> 16) & BYTE_MASK) as usize] as u64) << 32)
    | ((UTAB[((v >> 24) & BYTE_MASK) as usize] as u64) << 48)
}

/// Gathers the even bits of `v` into a contiguous 32-bit value.
///
/// Odd bits are ignored. This is the inverse of [`spread_bits`].
#[inline]
#[must_use]
pub fn compress_bits(v: u64) -> u32 {
  let mut raw = v & EVEN_BITS_MASK;
  // Fold bits 16..32 (and 48..64) onto the odd positions of the byte pairs below them.
  raw |= raw >> 15;
  ((CTAB[(raw & BYTE_MASK) as usize] as u64)
    | ((CTAB[((raw >> 8) & BYTE_MASK) as usize] as u64) << 4)
    | ((CTAB[((raw >> 32) & BYTE_MASK) as usize] as u64) << 16)
    | ((CTAB[((raw >> 40) & BYTE_MASK) as usize] as u64) << 20)) as u32
}
