// src/math/extensions.rs

/// Floating-point modulo whose result is always in `[0, v2)` for positive `v2`.
///
/// Unlike `%`, negative dividends wrap around to the top of the range, and a
/// result that rounds up to exactly `v2` is folded back to `0.0`.
#[inline]
#[must_use]
pub(crate) fn fmodulo(v1: f64, v2: f64) -> f64 {
  if v1 >= 0.0 {
    return if v1 < v2 { v1 } else { v1 % v2 };
  }
  let tmp = v1 % v2 + v2;
  if tmp == v2 {
    0.0
  } else {
    tmp
  }
}

/// Integer square root, rounded down.
///
/// Seeds from the `f64` square root and corrects by at most a step in either
/// direction, so the result is exact for the full `u64` range.
#[inline]
#[must_use]
pub(crate) fn isqrt(v: u64) -> u64 {
  let mut r = (v as f64 + 0.5).sqrt() as u64;
  let v_wide = u128::from(v);
  while u128::from(r) * u128::from(r) > v_wide {
    r -= 1;
  }
  while u128::from(r + 1) * u128::from(r + 1) <= v_wide {
    r += 1;
  }
  r
}
