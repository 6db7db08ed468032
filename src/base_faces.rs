//! The 12 HEALPix base faces.
//!
//! Faces 0-3 touch the north pole, faces 4-7 straddle the equator and faces
//! 8-11 touch the south pole. Each face is placed in the global ring/column
//! lattice by two fixed coefficients.

use crate::constants::NUM_BASE_FACES;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ring coefficient per face: the face's southern vertex sits on ring
/// `JRLL[face] * nside`, in units of `nside` rings from the north pole.
#[rustfmt::skip]
pub(crate) static JRLL: [i64; NUM_BASE_FACES as usize] = [
    2, 2, 2, 2, // north polar faces
    3, 3, 3, 3, // equatorial faces
    4, 4, 4, 4, // south polar faces
];

/// Column coefficient per face: the face center's longitude in units of
/// `PI / 4`.
#[rustfmt::skip]
pub(crate) static JPLL: [i64; NUM_BASE_FACES as usize] = [
    1, 3, 5, 7, // north polar faces
    0, 2, 4, 6, // equatorial faces
    1, 3, 5, 7, // south polar faces
];

/// Which of the three latitude bands a base face belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FaceRegion {
  /// Faces 0-3.
  NorthPolar,
  /// Faces 4-7.
  Equatorial,
  /// Faces 8-11.
  SouthPolar,
}

/// Returns whether `face` is a valid base face number.
#[inline]
#[must_use]
pub fn is_valid_face(face: u8) -> bool {
  face < NUM_BASE_FACES
}

/// Returns the latitude band of a base face, or `None` for an invalid face.
#[inline]
#[must_use]
pub fn face_region(face: u8) -> Option<FaceRegion> {
  match face {
    0..=3 => Some(FaceRegion::NorthPolar),
    4..=7 => Some(FaceRegion::Equatorial),
    8..=11 => Some(FaceRegion::SouthPolar),
    _ => None,
  }
}

/// Ring coefficient for a valid face.
#[inline]
#[must_use]
pub(crate) fn _face_ring_coeff(face: u8) -> i64 {
  JRLL[face as usize]
}

/// Column coefficient for a valid face.
#[inline]
#[must_use]
pub(crate) fn _face_column_coeff(face: u8) -> i64 {
  JPLL[face as usize]
}
