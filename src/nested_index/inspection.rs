// src/nested_index/inspection.rs

use crate::constants::{MAX_NSIDE, MAX_ORDER};
use crate::math::extensions::isqrt;
use crate::types::{HealpixError, NestedIndex};

/// Returns whether `nside` is a power of two in `[1, MAX_NSIDE]`.
#[inline]
#[must_use]
pub fn is_valid_nside(nside: u64) -> bool {
  nside.is_power_of_two() && nside <= MAX_NSIDE
}

/// Returns whether `pix` addresses a pixel of a map at resolution `nside`.
#[inline]
#[must_use]
pub fn is_valid_pixel(nside: u64, pix: NestedIndex) -> bool {
  is_valid_nside(nside) && pix.0 < nside_to_npix(nside)
}

/// Validates a resolution parameter.
pub(crate) fn _check_nside(nside: u64) -> Result<(), HealpixError> {
  if is_valid_nside(nside) {
    Ok(())
  } else {
    tracing::debug!(nside, max_nside = MAX_NSIDE, "rejected nside: not a supported power of two");
    Err(HealpixError::NsideDomain)
  }
}

/// Validates a resolution parameter and a pixel index at that resolution.
pub(crate) fn _check_pixel(nside: u64, pix: NestedIndex) -> Result<(), HealpixError> {
  _check_nside(nside)?;
  let npix = nside_to_npix(nside);
  if pix.0 < npix {
    Ok(())
  } else {
    tracing::debug!(nside, pix = pix.0, npix, "rejected pixel index out of range");
    Err(HealpixError::PixelDomain)
  }
}

/// Number of pixels in a map at resolution `nside`: `12 * nside^2`.
///
/// The power-of-two property is not required here. Use
/// [`checked_nside_to_npix`] for untrusted input.
///
/// # Panics
/// For `nside > 2^30` the count does not fit in 64 bits: this panics when
/// overflow checks are enabled (debug builds) and wraps otherwise.
#[inline]
#[must_use]
pub const fn nside_to_npix(nside: u64) -> u64 {
  12 * nside * nside
}

/// Number of pixels in a map at resolution `nside`, or `None` if
/// `12 * nside^2` overflows a `u64`.
#[inline]
#[must_use]
pub const fn checked_nside_to_npix(nside: u64) -> Option<u64> {
  match nside.checked_mul(nside) {
    Some(sq) => sq.checked_mul(12),
    None => None,
  }
}

/// Resolution parameter of a map with `npix` pixels.
///
/// Returns `k` when `npix == 12 * k^2` for some `k >= 1`, and
/// `HealpixError::PixelCountDomain` otherwise.
pub fn npix_to_nside(npix: u64) -> Result<u64, HealpixError> {
  let k = isqrt(npix / 12);
  if k == 0 || 12 * k * k != npix {
    tracing::debug!(npix, "rejected pixel count not of the form 12 * k^2");
    return Err(HealpixError::PixelCountDomain);
  }
  Ok(k)
}

/// HEALPix order (`log2(nside)`) of a valid resolution parameter.
pub fn nside_to_order(nside: u64) -> Result<u8, HealpixError> {
  _check_nside(nside)?;
  Ok(nside.trailing_zeros() as u8)
}

/// Resolution parameter `2^order` for an order in `[0, MAX_ORDER]`.
pub fn order_to_nside(order: u8) -> Result<u64, HealpixError> {
  if order > MAX_ORDER {
    tracing::debug!(order, max_order = MAX_ORDER, "rejected order out of range");
    return Err(HealpixError::OrderDomain);
  }
  Ok(1u64 << order)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_is_valid_nside() {
    for order in 0..=MAX_ORDER {
      assert!(is_valid_nside(1 << order), "order {order}");
    }
    assert!(!is_valid_nside(0));
    assert!(!is_valid_nside(3));
    assert!(!is_valid_nside(100));
    assert!(!is_valid_nside(MAX_NSIDE << 1), "above the maximum order");
  }

  #[test]
  fn test_is_valid_pixel() {
    assert!(is_valid_pixel(1, NestedIndex(0)));
    assert!(is_valid_pixel(1, NestedIndex(11)));
    assert!(!is_valid_pixel(1, NestedIndex(12)));
    assert!(is_valid_pixel(256, NestedIndex(786_431)));
    assert!(!is_valid_pixel(256, NestedIndex(786_432)));
    assert!(!is_valid_pixel(3, NestedIndex(0)), "invalid nside");
  }

  #[test]
  fn test_check_pixel() {
    assert_eq!(_check_pixel(4, NestedIndex(191)), Ok(()));
    assert_eq!(_check_pixel(4, NestedIndex(192)), Err(HealpixError::PixelDomain));
    assert_eq!(_check_pixel(5, NestedIndex(0)), Err(HealpixError::NsideDomain));
  }

  #[test]
  fn test_nside_npix() {
    assert_eq!(nside_to_npix(1), 12);
    assert_eq!(nside_to_npix(256), 786_432);
    assert_eq!(npix_to_nside(786_432), Ok(256));
    assert_eq!(npix_to_nside(12), Ok(1));
    assert_eq!(npix_to_nside(108), Ok(3), "any 12 * k^2 is accepted");
    assert_eq!(npix_to_nside(0), Err(HealpixError::PixelCountDomain));
    assert_eq!(npix_to_nside(100), Err(HealpixError::PixelCountDomain));
    assert_eq!(npix_to_nside(786_433), Err(HealpixError::PixelCountDomain));
    assert_eq!(npix_to_nside(nside_to_npix(MAX_NSIDE)), Ok(MAX_NSIDE));
  }

  #[test]
  fn test_checked_nside_to_npix() {
    assert_eq!(checked_nside_to_npix(256), Some(786_432));
    assert_eq!(checked_nside_to_npix(1 << 30), Some(12 << 60), "largest count that fits");
    assert_eq!(nside_to_npix(1 << 30), 12 << 60);
    assert_eq!(checked_nside_to_npix(1 << 31), None);
    assert_eq!(checked_nside_to_npix(u64::MAX), None);
  }

  #[test]
  #[cfg(debug_assertions)]
  #[should_panic]
  fn test_nside_to_npix_overflow_panics_in_debug() {
    let nside = std::hint::black_box(1u64 << 31);
    let _ = nside_to_npix(nside);
  }

  #[test]
  fn test_order_conversions() {
    assert_eq!(nside_to_order(1), Ok(0));
    assert_eq!(nside_to_order(1024), Ok(10));
    assert_eq!(nside_to_order(MAX_NSIDE), Ok(MAX_ORDER));
    assert_eq!(nside_to_order(6), Err(HealpixError::NsideDomain));
    assert_eq!(order_to_nside(0), Ok(1));
    assert_eq!(order_to_nside(20), Ok(1_048_576));
    assert_eq!(order_to_nside(MAX_ORDER + 1), Err(HealpixError::OrderDomain));
  }
}
