/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::utils::checked_index;
use crate::utils::normalize_index;
use crate::utils::squeeze;

/// Parser for the `start:end:step` syntax.
mod parse;

/// The type of error for slice construction and normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SliceError {
    #[error("invalid slice `{input}`")]
    Parse { input: String },

    #[error("slice takes at most 3 fields, got {got}")]
    TooManyFields { got: usize },

    #[error("slice step cannot be zero")]
    ZeroStep,
}

/// A sparse `start:end:step` range descriptor. Every field may be
/// absent, in which case it takes a default that depends on the sign
/// of the step and on the length of the container the slice is
/// eventually applied to.
///
/// A `Slice` is only a description. [`Slice::normalize`] resolves it
/// against a concrete length into a [`NormalizedSlice`], following
/// half-open, sign-aware, clamped semantics:
///
/// ```
/// use seqview::Slice;
///
/// let s: Slice = "1:7:2".parse().unwrap();
/// let n = s.normalize(9).unwrap();
/// assert_eq!(n.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
///
/// // Out of range bounds are clamped, never rejected.
/// let s: Slice = "-100:100".parse().unwrap();
/// assert_eq!(s.normalize(3).unwrap().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slice {
    start: Option<isize>,
    end: Option<isize>,
    step: Option<isize>,
}

impl Slice {
    pub fn new(start: Option<isize>, end: Option<isize>, step: Option<isize>) -> Self {
        Self { start, end, step }
    }

    pub fn start(&self) -> Option<isize> {
        self.start
    }

    pub fn end(&self) -> Option<isize> {
        self.end
    }

    pub fn step(&self) -> Option<isize> {
        self.step
    }

    /// Whether `s` is a well-formed slice string. Bare numerals are
    /// positions, not slices.
    pub fn is_slice_str(s: &str) -> bool {
        parse::parse(s).is_some()
    }

    /// Resolve this slice against a container of length `len`.
    ///
    /// For a positive step the defaults are `0:len`; for a negative
    /// step they are `len-1` down to the sentinel `-1`, which stands
    /// for "through index 0 inclusive". Explicit negative bounds count
    /// from the end. Bounds are then clamped into the container, and
    /// a range running against the step collapses to empty.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ZeroStep`] if the step is zero.
    pub fn normalize(&self, len: usize) -> Result<NormalizedSlice, SliceError> {
        let step = self.step.unwrap_or(1);
        match step {
            0 => Err(SliceError::ZeroStep),
            step if step > 0 => Ok(self.normalize_forward(len, step)),
            step => Ok(self.normalize_backward(len, step)),
        }
    }

    fn normalize_forward(&self, len: usize, step: isize) -> NormalizedSlice {
        let n = len as isize;
        let mut start = normalize_index(self.start.unwrap_or(0), len);
        let mut end = normalize_index(self.end.unwrap_or(n), len);

        if start >= n {
            start = n - 1;
            end = n - 1;
        }

        start = squeeze(start, 0, n - 1);
        end = squeeze(end, 0, n);

        if end < start {
            end = start;
        }

        NormalizedSlice { start, end, step }
    }

    fn normalize_backward(&self, len: usize, step: isize) -> NormalizedSlice {
        let n = len as isize;
        let mut start = normalize_index(self.start.unwrap_or(n - 1), len);
        // The `-1` sentinel is not an index and must not be wrapped.
        let mut end = match self.end {
            Some(end) => normalize_index(end, len),
            None => -1,
        };

        // An empty container selects nothing, whatever the bounds.
        if start < 0 || n == 0 {
            start = 0;
            end = 0;
        }

        start = squeeze(start, 0, n - 1);
        end = squeeze(end, -1, n);

        if end > start {
            end = start;
        }

        NormalizedSlice { start, end, step }
    }
}

/// Canonical form: always two colons, absent fields left empty.
impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field(f: &mut fmt::Formatter<'_>, v: Option<isize>) -> fmt::Result {
            match v {
                Some(v) => write!(f, "{}", v),
                None => Ok(()),
            }
        }
        field(f, self.start)?;
        write!(f, ":")?;
        field(f, self.end)?;
        write!(f, ":")?;
        field(f, self.step)
    }
}

impl FromStr for Slice {
    type Err = SliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s).ok_or_else(|| SliceError::Parse {
            input: s.to_string(),
        })
    }
}

impl From<(Option<isize>, Option<isize>, Option<isize>)> for Slice {
    fn from((start, end, step): (Option<isize>, Option<isize>, Option<isize>)) -> Self {
        Self::new(start, end, step)
    }
}

/// Positional `[start, end, step]`; shorter tuples leave the trailing
/// fields absent.
impl TryFrom<&[Option<isize>]> for Slice {
    type Error = SliceError;

    fn try_from(fields: &[Option<isize>]) -> Result<Self, Self::Error> {
        match *fields {
            [] => Ok(Self::default()),
            [start] => Ok(Self::new(start, None, None)),
            [start, end] => Ok(Self::new(start, end, None)),
            [start, end, step] => Ok(Self::new(start, end, step)),
            _ => Err(SliceError::TooManyFields { got: fields.len() }),
        }
    }
}

impl From<std::ops::Range<isize>> for Slice {
    fn from(r: std::ops::Range<isize>) -> Self {
        Self::new(Some(r.start), Some(r.end), None)
    }
}

impl From<std::ops::RangeFrom<isize>> for Slice {
    fn from(r: std::ops::RangeFrom<isize>) -> Self {
        Self::new(Some(r.start), None, None)
    }
}

impl From<std::ops::RangeTo<isize>> for Slice {
    fn from(r: std::ops::RangeTo<isize>) -> Self {
        Self::new(None, Some(r.end), None)
    }
}

impl From<std::ops::RangeFull> for Slice {
    fn from(_: std::ops::RangeFull) -> Self {
        Self::default()
    }
}

/// A slice whose bounds have been resolved against a concrete
/// container length. The step is never zero and the range never runs
/// against the step, so [`NormalizedSlice::len`] is well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedSlice {
    start: isize,
    end: isize,
    step: isize,
}

impl NormalizedSlice {
    pub fn start(&self) -> isize {
        self.start
    }

    pub fn end(&self) -> isize {
        self.end
    }

    pub fn step(&self) -> isize {
        self.step
    }

    /// The number of positions selected: `ceil(|end - start| / |step|)`.
    pub fn len(&self) -> usize {
        (self.end - self.start)
            .unsigned_abs()
            .div_ceil(self.step.unsigned_abs())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Translate a local index (possibly negative) into the position
    /// it selects in the container. Returns `None` when `index` is
    /// outside `[-len, len)`.
    pub fn convert_index(&self, index: isize) -> Option<isize> {
        checked_index(index, self.len()).map(|i| self.start + i as isize * self.step)
    }

    /// Iterate the selected positions in order. Each call starts a
    /// fresh iteration.
    pub fn iter(&self) -> NormalizedSliceIterator {
        NormalizedSliceIterator {
            slice: *self,
            pos: 0,
        }
    }
}

impl fmt::Display for NormalizedSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.end, self.step)
    }
}

impl From<NormalizedSlice> for Slice {
    fn from(n: NormalizedSlice) -> Self {
        Self::new(Some(n.start), Some(n.end), Some(n.step))
    }
}

impl<'a> IntoIterator for &'a NormalizedSlice {
    type Item = isize;
    type IntoIter = NormalizedSliceIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`NormalizedSlice`].
#[derive(Debug, Clone)]
pub struct NormalizedSliceIterator {
    slice: NormalizedSlice,
    pos: usize,
}

impl Iterator for NormalizedSliceIterator {
    type Item = isize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.slice.len() {
            return None;
        }
        let value = self.slice.start + self.pos as isize * self.slice.step;
        self.pos += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slice.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NormalizedSliceIterator {}
