// src/indexing/from_nest.rs

use crate::coords::face_xy::_face_xy_to_zphi;
use crate::nested_index::_nest_to_face_xy;
use crate::nested_index::inspection::_check_pixel;
use crate::types::{HealpixError, NestedIndex, Pointing, Vec3d};

/// Finds the center of a nested pixel as a pointing.
///
/// # Arguments
/// * `nside` - The resolution parameter (power of two up to `2^29`).
/// * `pix` - Pixel index in `[0, 12 * nside^2)`.
///
/// # Returns
/// `Ok(Pointing)` with `theta` in `[0, PI]` and `phi` in `[0, 2PI)`, or a
/// `HealpixError` if the input is invalid.
pub fn pix_to_ang_nest(nside: u64, pix: NestedIndex) -> Result<Pointing, HealpixError> {
  _check_pixel(nside, pix)?;
  let zphi = _face_xy_to_zphi(nside, &_nest_to_face_xy(nside, pix));
  let theta = match zphi.sin_theta {
    Some(s) => s.atan2(zphi.z),
    None => zphi.z.acos(),
  };
  Ok(Pointing { theta, phi: zphi.phi })
}

/// Finds the center of a nested pixel as a unit vector.
pub fn pix_to_vec_nest(nside: u64, pix: NestedIndex) -> Result<Vec3d, HealpixError> {
  _check_pixel(nside, pix)?;
  let zphi = _face_xy_to_zphi(nside, &_nest_to_face_xy(nside, pix));
  let st = zphi.sin_theta_or_derived();
  Ok(Vec3d {
    x: st * zphi.phi.cos(),
    y: st * zphi.phi.sin(),
    z: zphi.z,
  })
}
