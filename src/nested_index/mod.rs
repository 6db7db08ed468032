// src/nested_index/mod.rs

//! Nested pixel index layout.
//!
//! A nested index is `face * nside^2` plus the Morton code of the pixel's
//! `(ix, iy)` position inside the face, with `ix` on the even bits and `iy`
//! on the odd bits. Each face therefore owns a contiguous block of `nside^2`
//! indices, and within it every aligned group of four indices is one pixel of
//! the next coarser resolution.

pub mod inspection;

use crate::base_faces::is_valid_face;
use crate::math::bits::{compress_bits, spread_bits};
use crate::types::{FaceXY, HealpixError, NestedIndex};

use inspection::{_check_nside, _check_pixel};

pub use inspection::{
  checked_nside_to_npix, is_valid_nside, is_valid_pixel, npix_to_nside, nside_to_npix, nside_to_order, order_to_nside,
};

/// Encodes face coordinates as a nested index. Inputs must already be valid.
#[inline]
#[must_use]
pub(crate) fn _face_xy_to_nest(nside: u64, fxy: &FaceXY) -> NestedIndex {
  NestedIndex(u64::from(fxy.face) * nside * nside + spread_bits(fxy.ix) + (spread_bits(fxy.iy) << 1))
}

/// Decodes a nested index into face coordinates. Inputs must already be valid.
#[inline]
#[must_use]
pub(crate) fn _nest_to_face_xy(nside: u64, pix: NestedIndex) -> FaceXY {
  let np_face = nside * nside;
  let face = (pix.0 / np_face) as u8;
  let rem = pix.0 & (np_face - 1);
  FaceXY {
    face,
    ix: compress_bits(rem),
    iy: compress_bits(rem >> 1),
  }
}

/// Encodes a base face and intra-face position as a nested pixel index.
///
/// # Arguments
/// * `nside` - The resolution parameter (power of two).
/// * `fxy` - Face number in `[0, 12)` and `ix`, `iy` in `[0, nside)`.
///
/// # Returns
/// `Ok(NestedIndex)` on success, or `HealpixError::NsideDomain` /
/// `HealpixError::FaceDomain` for out-of-range input.
pub fn face_xy_to_nest(nside: u64, fxy: &FaceXY) -> Result<NestedIndex, HealpixError> {
  _check_nside(nside)?;
  if !is_valid_face(fxy.face) || u64::from(fxy.ix) >= nside || u64::from(fxy.iy) >= nside {
    tracing::debug!(nside, face = fxy.face, ix = fxy.ix, iy = fxy.iy, "rejected face coordinates");
    return Err(HealpixError::FaceDomain);
  }
  Ok(_face_xy_to_nest(nside, fxy))
}

/// Decodes a nested pixel index into its base face and intra-face position.
pub fn nest_to_face_xy(nside: u64, pix: NestedIndex) -> Result<FaceXY, HealpixError> {
  _check_pixel(nside, pix)?;
  Ok(_nest_to_face_xy(nside, pix))
}

/// Returns the base face (0-11) containing a nested pixel.
pub fn get_face(nside: u64, pix: NestedIndex) -> Result<u8, HealpixError> {
  _check_pixel(nside, pix)?;
  Ok((pix.0 / (nside * nside)) as u8)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_face_xy_to_nest() {
    let fxy = FaceXY { face: 4, ix: 1, iy: 0 };
    assert_eq!(face_xy_to_nest(2, &fxy), Ok(NestedIndex(17)));
    let fxy = FaceXY { face: 4, ix: 1, iy: 1 };
    assert_eq!(face_xy_to_nest(2, &fxy), Ok(NestedIndex(19)));
    let fxy = FaceXY { face: 0, ix: 0, iy: 0 };
    assert_eq!(face_xy_to_nest(1, &fxy), Ok(NestedIndex(0)));
    let fxy = FaceXY { face: 11, ix: 3, iy: 3 };
    assert_eq!(face_xy_to_nest(4, &fxy), Ok(NestedIndex(191)), "last pixel");
  }

  #[test]
  fn test_face_xy_to_nest_invalid() {
    let bad_face = FaceXY { face: 12, ix: 0, iy: 0 };
    assert_eq!(face_xy_to_nest(4, &bad_face), Err(HealpixError::FaceDomain));
    let bad_x = FaceXY { face: 0, ix: 4, iy: 0 };
    assert_eq!(face_xy_to_nest(4, &bad_x), Err(HealpixError::FaceDomain));
    let bad_y = FaceXY { face: 0, ix: 0, iy: 4 };
    assert_eq!(face_xy_to_nest(4, &bad_y), Err(HealpixError::FaceDomain));
    let ok = FaceXY::default();
    assert_eq!(face_xy_to_nest(6, &ok), Err(HealpixError::NsideDomain));
  }

  #[test]
  fn test_nest_to_face_xy() {
    assert_eq!(
      nest_to_face_xy(2, NestedIndex(19)),
      Ok(FaceXY { face: 4, ix: 1, iy: 1 })
    );
    assert_eq!(
      nest_to_face_xy(1024, NestedIndex(4_631_210)),
      Ok(FaceXY { face: 4, ix: 512, iy: 511 }),
      "vector (1, 0, 0) pixel at nside 1024"
    );
    assert_eq!(nest_to_face_xy(2, NestedIndex(48)), Err(HealpixError::PixelDomain));
  }

  #[test]
  fn test_morton_order_within_face() {
    // The first four indices of a face form the 2x2 block at the face origin.
    let nside = 8;
    let base = 3 * nside * nside;
    let cells: Vec<FaceXY> = (base..base + 4)
      .map(|p| _nest_to_face_xy(nside, NestedIndex(p)))
      .collect();
    assert_eq!(
      cells,
      vec![
        FaceXY { face: 3, ix: 0, iy: 0 },
        FaceXY { face: 3, ix: 1, iy: 0 },
        FaceXY { face: 3, ix: 0, iy: 1 },
        FaceXY { face: 3, ix: 1, iy: 1 },
      ]
    );
  }

  #[test]
  fn test_get_face() {
    assert_eq!(get_face(1, NestedIndex(4)), Ok(4));
    assert_eq!(get_face(256, NestedIndex(311_296)), Ok(4));
    assert_eq!(get_face(256, NestedIndex(786_431)), Ok(11));
    assert_eq!(get_face(256, NestedIndex(786_432)), Err(HealpixError::PixelDomain));
  }
}
