// src/pointing.rs

use crate::constants::{M_180_PI, M_2PI, M_PI, M_PI_180, POLAR_CAP_Z};
use crate::math::vec3d::{_point_square_dist, _v3d_mag, _v3d_xy_mag};
use crate::types::{HealpixError, Pointing, Vec3d, ZPhi};

/// Colatitude distance from either pole inside which `sin(theta)` is carried
/// explicitly instead of being rebuilt from `cos(theta)`.
const POLE_THETA_MARGIN: f64 = 0.01;

/// Checks that a pointing has a colatitude in `[0, PI]` and a finite longitude.
pub(crate) fn _check_pointing(p: &Pointing) -> Result<(), HealpixError> {
  // NaN fails both comparisons, so it is rejected here too.
  if !(p.theta >= 0.0 && p.theta <= M_PI) {
    tracing::debug!(theta = p.theta, "rejected colatitude outside [0, pi]");
    return Err(HealpixError::ThetaDomain);
  }
  if !p.phi.is_finite() {
    tracing::debug!(phi = p.phi, "rejected non-finite longitude");
    return Err(HealpixError::PhiDomain);
  }
  Ok(())
}

/// Checks that a vector is finite and has non-zero length.
pub(crate) fn _check_vec3d(v: &Vec3d) -> Result<f64, HealpixError> {
  let len = _v3d_mag(v);
  if !len.is_finite() || len == 0.0 {
    tracing::debug!(x = v.x, y = v.y, z = v.z, "rejected zero-length or non-finite vector");
    return Err(HealpixError::VectorDomain);
  }
  Ok(len)
}

/// Converts a validated pointing to its `(z, sin(theta), phi)` form.
///
/// `sin(theta)` is carried only close to the poles, where the polar-cap
/// formula needs it and `sqrt(1 - z^2)` would lose most of its digits.
#[inline]
pub(crate) fn _pointing_to_zphi(p: &Pointing) -> ZPhi {
  let near_pole = p.theta < POLE_THETA_MARGIN || p.theta > M_PI - POLE_THETA_MARGIN;
  ZPhi {
    z: p.theta.cos(),
    sin_theta: near_pole.then(|| p.theta.sin()),
    phi: p.phi,
  }
}

/// Converts a validated, non-zero vector of length `len` to its
/// `(z, sin(theta), phi)` form.
#[inline]
pub(crate) fn _vec3d_to_zphi(v: &Vec3d, len: f64) -> ZPhi {
  let z = v.z / len;
  ZPhi {
    z,
    sin_theta: (z.abs() > POLAR_CAP_Z).then(|| _v3d_xy_mag(v) / len),
    phi: v.y.atan2(v.x),
  }
}

/// Folds a longitude into `[0, 2PI)` after `atan2`.
#[inline]
#[must_use]
fn _pos_angle_rads(rads: f64) -> f64 {
  if rads < 0.0 {
    rads + M_2PI
  } else {
    rads
  }
}

/// Converts a Cartesian vector to a pointing.
///
/// The vector does not need to be normalized. Longitude is returned in
/// `[0, 2PI)`.
#[must_use]
pub fn vec_to_ang(v: &Vec3d) -> Pointing {
  Pointing {
    theta: _v3d_xy_mag(v).atan2(v.z),
    phi: _pos_angle_rads(v.y.atan2(v.x)),
  }
}

/// Converts a pointing to a unit vector.
#[must_use]
pub fn ang_to_vec(p: &Pointing) -> Vec3d {
  let sz = p.theta.sin();
  Vec3d {
    x: sz * p.phi.cos(),
    y: sz * p.phi.sin(),
    z: p.theta.cos(),
  }
}

/// The great circle distance in radians between two pointings.
///
/// Works from the chord between the two unit vectors, which stays accurate
/// for both very small and nearly antipodal separations.
pub fn ang_dist(a: &Pointing, b: &Pointing) -> f64 {
  let half_chord = _point_square_dist(&ang_to_vec(a), &ang_to_vec(b)).sqrt() * 0.5;
  2.0 * half_chord.min(1.0).asin()
}

/// Converts degrees to radians.
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}
