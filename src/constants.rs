//! HEALPix core library constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * PI
pub const M_2PI: f64 = 2.0 * consts::PI;
/// 2.0 / pi, the scale from longitude to the [0, 4) face-column coordinate
pub const M_2_PI: f64 = consts::FRAC_2_PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// Solid angle of the full sphere in square degrees.
pub const SPHERE_AREA_DEGS2: f64 = 4.0 * consts::PI * M_180_PI * M_180_PI;

// HEALPix grid system constants

/// |z| boundary between the equatorial belt and the polar caps.
pub const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Above this |z| the polar-cap formulas switch to the sin(theta) based form,
/// since 1 - z^2 cancels catastrophically near the poles.
pub const POLAR_CAP_Z: f64 = 0.99;

/// The number of HEALPix base faces.
pub const NUM_BASE_FACES: u8 = 12;

/// Maximum HEALPix order. Nested indices at this order still fit in 64 bits
/// and intra-face coordinates fit in 32 bits.
pub const MAX_ORDER: u8 = 29;

/// Maximum supported resolution parameter, `2^MAX_ORDER`.
pub const MAX_NSIDE: u64 = 1 << MAX_ORDER;

// Nested index bit layout

/// Mask selecting the even-position bits of a 64-bit word.
pub const EVEN_BITS_MASK: u64 = 0x5555_5555_5555_5555;
/// Mask selecting the low byte.
pub const BYTE_MASK: u64 = 0xff;
