// src/indexing/to_nest.rs

use crate::coords::face_xy::_zphi_to_face_xy;
use crate::nested_index::_face_xy_to_nest;
use crate::nested_index::inspection::_check_nside;
use crate::pointing::{_check_pointing, _check_vec3d, _pointing_to_zphi, _vec3d_to_zphi};
use crate::types::{HealpixError, NestedIndex, Pointing, Vec3d};

/// Finds the nested index of the pixel containing the given pointing.
///
/// # Arguments
/// * `nside` - The resolution parameter (power of two up to `2^29`).
/// * `p` - Colatitude in `[0, PI]` and any finite longitude, in radians.
///
/// # Returns
/// `Ok(NestedIndex)` in `[0, 12 * nside^2)` on success, or a `HealpixError`
/// if the input is invalid.
pub fn ang_to_pix_nest(nside: u64, p: &Pointing) -> Result<NestedIndex, HealpixError> {
  _check_nside(nside)?;
  _check_pointing(p)?;
  let fxy = _zphi_to_face_xy(nside, &_pointing_to_zphi(p));
  Ok(_face_xy_to_nest(nside, &fxy))
}

/// Finds the nested index of the pixel containing the direction of `v`.
///
/// The vector does not need to be normalized but must be finite and non-zero.
pub fn vec_to_pix_nest(nside: u64, v: &Vec3d) -> Result<NestedIndex, HealpixError> {
  _check_nside(nside)?;
  let len = _check_vec3d(v)?;
  let fxy = _zphi_to_face_xy(nside, &_vec3d_to_zphi(v, len));
  Ok(_face_xy_to_nest(nside, &fxy))
}
