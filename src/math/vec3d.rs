// src/math/vec3d.rs

use crate::types::Vec3d;

/// Square of a number.
#[inline]
fn _square(x: f64) -> f64 {
  x * x
}

/// Calculate the square of the Euclidean distance between two 3D coordinates.
#[inline]
#[must_use]
pub(crate) fn _point_square_dist(v1: &Vec3d, v2: &Vec3d) -> f64 {
  _square(v1.x - v2.x) + _square(v1.y - v2.y) + _square(v1.z - v2.z)
}

/// Length of the projection onto the x/y plane.
///
/// Uses `hypot` so components near the limits of `f64` neither underflow to
/// zero nor overflow to infinity.
#[inline]
#[must_use]
pub(crate) fn _v3d_xy_mag(v: &Vec3d) -> f64 {
  v.x.hypot(v.y)
}

/// Calculates the magnitude of a 3D Cartesian vector.
#[inline]
#[must_use]
pub(crate) fn _v3d_mag(v: &Vec3d) -> f64 {
  _v3d_xy_mag(v).hypot(v.z)
}
