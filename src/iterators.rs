// src/iterators.rs

use std::iter::FusedIterator;

use crate::base_faces::is_valid_face;
use crate::nested_index::inspection::{_check_nside, nside_to_npix};
use crate::types::{HealpixError, NestedIndex};

/// Iterator over a contiguous range of nested pixel indices.
///
/// In the nested scheme every face, and every pixel's set of descendants at a
/// finer resolution, occupies a contiguous index range, so a single
/// `[next, end)` pair is enough to walk any of them in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterPixels {
  /// The next index to yield.
  pub(crate) next: u64,
  /// One past the last index to yield.
  pub(crate) end: u64,
}

impl IterPixels {
  /// Creates an iterator over `[start, end)`. Callers pass a validated range.
  pub(crate) fn _new(start: u64, end: u64) -> Self {
    Self { next: start, end }
  }

  /// Number of indices not yet yielded.
  #[must_use]
  pub fn remaining(&self) -> u64 {
    self.end - self.next
  }
}

impl Iterator for IterPixels {
  type Item = NestedIndex;

  fn next(&mut self) -> Option<Self::Item> {
    if self.next >= self.end {
      return None;
    }
    let pix = NestedIndex(self.next);
    self.next += 1;
    Some(pix)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    match usize::try_from(self.remaining()) {
      Ok(n) => (n, Some(n)),
      Err(_) => (usize::MAX, None),
    }
  }

  fn nth(&mut self, n: usize) -> Option<Self::Item> {
    self.next = self.next.saturating_add(n as u64).min(self.end);
    self.next()
  }
}

impl DoubleEndedIterator for IterPixels {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.next >= self.end {
      return None;
    }
    self.end -= 1;
    Some(NestedIndex(self.end))
  }
}

impl FusedIterator for IterPixels {}

/// Iterates over every pixel of a map at resolution `nside`, in index order.
pub fn iter_pixels(nside: u64) -> Result<IterPixels, HealpixError> {
  _check_nside(nside)?;
  Ok(IterPixels::_new(0, nside_to_npix(nside)))
}

/// Iterates over the `nside^2` pixels of one base face, in index order.
pub fn iter_face_pixels(nside: u64, face: u8) -> Result<IterPixels, HealpixError> {
  _check_nside(nside)?;
  if !is_valid_face(face) {
    tracing::debug!(face, "rejected base face number");
    return Err(HealpixError::FaceDomain);
  }
  let np_face = nside * nside;
  let start = u64::from(face) * np_face;
  Ok(IterPixels::_new(start, start + np_face))
}
