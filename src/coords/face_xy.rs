// src/coords/face_xy.rs

//! Conversion between sphere positions and base-face pixel coordinates.
//!
//! The sphere is cut at `|z| = 2/3` into an equatorial belt and two polar
//! caps. In the belt the face edges are straight lines in `(phi, z)`; in the
//! caps they are straight lines in `(phi, sqrt(1 - |z|))`, which is what
//! keeps the cells equal-area.

use std::cmp::Ordering;

use crate::base_faces::{_face_column_coeff, _face_ring_coeff};
use crate::constants::{M_2PI, M_2_PI, M_PI_2, POLAR_CAP_Z, TWO_THIRDS};
use crate::math::extensions::fmodulo;
use crate::types::{FaceXY, ZPhi};

/// Finds the base face and intra-face coordinates of the pixel containing a
/// position, at resolution `nside`.
///
/// `nside` must be a valid power of two; `zphi.z` must be in `[-1, 1]` and
/// `zphi.phi` finite.
pub(crate) fn _zphi_to_face_xy(nside: u64, zphi: &ZPhi) -> FaceXY {
  let n = nside as i64;
  let nside_f = nside as f64;
  let z = zphi.z;
  let za = z.abs();
  let tt = fmodulo(zphi.phi, M_2PI) * M_2_PI; // in [0,4)

  let (face, ix, iy) = if za <= TWO_THIRDS {
    // Equatorial belt: jp/jm index the ascending and descending edge lines.
    let temp1 = nside_f * (0.5 + tt);
    let temp2 = nside_f * (z * 0.75);
    let jp = (temp1 - temp2) as i64;
    let jm = (temp1 + temp2) as i64;
    let ifp = jp / n;
    let ifm = jm / n;
    let face = match ifp.cmp(&ifm) {
      // faces 4 to 7; ifp == 4 is face 4 seen across phi = 2PI
      Ordering::Equal => {
        if ifp == 4 {
          4
        } else {
          ifp + 4
        }
      }
      // (half-)faces 0 to 3
      Ordering::Less => ifp,
      // (half-)faces 8 to 11
      Ordering::Greater => ifm + 8,
    };
    let ix = jm & (n - 1);
    let iy = n - (jp & (n - 1)) - 1;
    (face, ix, iy)
  } else {
    // Polar caps.
    let ntt = (tt as i64).min(3);
    let tp = tt - ntt as f64;
    let tmp = if za > POLAR_CAP_Z {
      nside_f * zphi.sin_theta_or_derived() / ((1.0 + za) / 3.0).sqrt()
    } else {
      nside_f * (3.0 * (1.0 - za)).sqrt()
    };

    let jp = ((tp * tmp) as i64).min(n - 1);
    let jm = (((1.0 - tp) * tmp) as i64).min(n - 1);
    if z >= 0.0 {
      (ntt, n - jm - 1, n - jp - 1)
    } else {
      (ntt + 8, jp, jm)
    }
  };

  FaceXY {
    face: face as u8,
    ix: ix as u32,
    iy: iy as u32,
  }
}

/// Computes the `(z, sin(theta), phi)` center of the pixel at `fxy`.
///
/// `sin(theta)` is returned only in the polar caps beyond `|z| > 0.99`; the
/// caller derives it from `z` everywhere else.
pub(crate) fn _face_xy_to_zphi(nside: u64, fxy: &FaceXY) -> ZPhi {
  let n = nside as i64;
  let nl4 = 4 * n;
  let npix = 12 * n * n;
  let fact2 = 4.0 / npix as f64;
  let ix = i64::from(fxy.ix);
  let iy = i64::from(fxy.iy);

  // Ring number counted from the north pole, in [1, 4n-1].
  let jr = _face_ring_coeff(fxy.face) * n - ix - iy - 1;

  let (z, sin_theta, nr, kshift) = if jr < n {
    // North polar cap.
    let nr = jr;
    let tmp = (nr * nr) as f64 * fact2;
    let z = 1.0 - tmp;
    let s = (z > POLAR_CAP_Z).then(|| (tmp * (2.0 - tmp)).sqrt());
    (z, s, nr, 0)
  } else if jr > 3 * n {
    // South polar cap.
    let nr = nl4 - jr;
    let tmp = (nr * nr) as f64 * fact2;
    let z = tmp - 1.0;
    let s = (z < -POLAR_CAP_Z).then(|| (tmp * (2.0 - tmp)).sqrt());
    (z, s, nr, 0)
  } else {
    // Equatorial belt; alternate rings are shifted by half a pixel.
    let fact1 = (n << 1) as f64 * fact2;
    let z = (2 * n - jr) as f64 * fact1;
    (z, None, n, (jr - n) & 1)
  };

  let mut jp = (_face_column_coeff(fxy.face) * nr + ix - iy + 1 + kshift) / 2;
  if jp > nl4 {
    jp -= nl4;
  }
  if jp < 1 {
    jp += nl4;
  }

  ZPhi {
    z,
    sin_theta,
    phi: (jp as f64 - (kshift + 1) as f64 * 0.5) * (M_PI_2 / nr as f64),
  }
}
