//! Core HEALPix data structures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Represents a pixel index in the HEALPix nested numbering scheme.
/// This is a 64-bit unsigned integer in `[0, 12 * nside^2)`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NestedIndex(pub u64);

/// Angular position on the sphere in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pointing {
  /// Colatitude in radians, measured from the north pole, in `[0, PI]`.
  pub theta: f64,
  /// Longitude in radians. Any finite value; folded into `[0, 2PI)` where needed.
  pub phi: f64,
}

impl Pointing {
  /// Creates a new pointing from colatitude and longitude in radians.
  #[inline]
  #[must_use]
  pub const fn new(theta: f64, phi: f64) -> Self {
    Self { theta, phi }
  }
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

impl Vec3d {
  /// Creates a new vector from its components.
  #[inline]
  #[must_use]
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }
}

/// Base face number and the row/column position of a pixel inside that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceXY {
  /// Base face number (0-11).
  pub face: u8,
  /// Position along the face x axis, in `[0, nside)`.
  pub ix: u32,
  /// Position along the face y axis, in `[0, nside)`.
  pub iy: u32,
}

/// Intermediate `(z, sin(theta), phi)` form of a position.
///
/// `sin_theta` is only carried where it is known to full precision; `None`
/// means it must be derived from `z` as `sqrt((1 - z) * (1 + z))`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZPhi {
  /// cos(theta).
  pub z: f64,
  /// sin(theta), when computed directly.
  pub sin_theta: Option<f64>,
  /// Longitude in radians.
  pub phi: f64,
}

impl ZPhi {
  /// Returns sin(theta), falling back to the `z` identity when it was not carried.
  #[inline]
  #[must_use]
  pub fn sin_theta_or_derived(&self) -> f64 {
    match self.sin_theta {
      Some(s) => s,
      None => ((1.0 - self.z) * (1.0 + self.z)).sqrt(),
    }
  }
}

/// Represents a HEALPix error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum HealpixError {
  /// Colatitude argument was outside of `[0, PI]` or not finite.
  #[error("colatitude argument was outside of [0, pi]")]
  ThetaDomain = 1,
  /// Longitude argument was not finite.
  #[error("longitude argument was not finite")]
  PhiDomain = 2,
  /// Resolution parameter was not a power of two in `[1, MAX_NSIDE]`.
  #[error("nside argument was not a power of two in the supported range")]
  NsideDomain = 3,
  /// Pixel index was not below `12 * nside^2`.
  #[error("pixel index was out of range for nside")]
  PixelDomain = 4,
  /// Pixel count was not of the form `12 * k^2`.
  #[error("pixel count was not of the form 12 * k^2")]
  PixelCountDomain = 5,
  /// Vector argument was zero-length or not finite.
  #[error("vector argument was zero-length or not finite")]
  VectorDomain = 6,
  /// Face number or intra-face coordinate was out of range.
  #[error("face coordinates were out of range for nside")]
  FaceDomain = 7,
  /// Order argument was above `MAX_ORDER`.
  #[error("order argument was outside of acceptable range")]
  OrderDomain = 8,
  /// Resolution arguments were incompatible for a hierarchy operation.
  #[error("nside arguments had incompatible resolutions")]
  ResMismatch = 9,
}
