// src/measures.rs

use crate::constants::{M_180_PI, M_PI, SPHERE_AREA_DEGS2};
use crate::nested_index::inspection::{_check_nside, nside_to_npix};
use crate::types::HealpixError;

/// Area of one pixel at resolution `nside`, in steradians.
///
/// All pixels of a map have the same area, `4 * PI / (12 * nside^2)`.
pub fn pixel_area_rads2(nside: u64) -> Result<f64, HealpixError> {
  _check_nside(nside)?;
  Ok(4.0 * M_PI / nside_to_npix(nside) as f64)
}

/// Area of one pixel at resolution `nside`, in square degrees.
pub fn pixel_area_degs2(nside: u64) -> Result<f64, HealpixError> {
  _check_nside(nside)?;
  Ok(SPHERE_AREA_DEGS2 / nside_to_npix(nside) as f64)
}

/// Typical angular size of a pixel, the square root of its area, in radians.
pub fn pixel_resolution_rads(nside: u64) -> Result<f64, HealpixError> {
  Ok(pixel_area_rads2(nside)?.sqrt())
}

/// Typical angular size of a pixel in degrees.
pub fn pixel_resolution_degs(nside: u64) -> Result<f64, HealpixError> {
  Ok(pixel_resolution_rads(nside)? * M_180_PI)
}
