/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Index arithmetic shared by slices, views and selectors.
//!
//! Local indexes are signed: a negative index `-k` addresses the
//! `k`-th element counted from the end, so for a container of length
//! `n` the admissible range is `[-n, n)`.

/// Maps a negative `index` onto `len + index`. Non-negative indexes
/// pass through unchanged. No bounds are checked, so the result may
/// still be negative or `>= len`.
///
/// ```
/// use seqview::utils::normalize_index;
///
/// assert_eq!(normalize_index(-1, 5), 4);
/// assert_eq!(normalize_index(7, 5), 7);
/// assert_eq!(normalize_index(-7, 5), -2);
/// ```
pub fn normalize_index(index: isize, len: usize) -> isize {
    if index < 0 {
        len as isize + index
    } else {
        index
    }
}

/// Like [`normalize_index`], but returns `None` when `index` lies
/// outside `[-len, len)`.
///
/// ```
/// use seqview::utils::checked_index;
///
/// assert_eq!(checked_index(-1, 3), Some(2));
/// assert_eq!(checked_index(3, 3), None);
/// assert_eq!(checked_index(-4, 3), None);
/// assert_eq!(checked_index(0, 0), None);
/// ```
pub fn checked_index(index: isize, len: usize) -> Option<usize> {
    // Distance from the boundary the index is measured against.
    let dist = if index >= 0 {
        index.unsigned_abs()
    } else {
        index.unsigned_abs() - 1
    };
    if dist >= len {
        return None;
    }
    Some(normalize_index(index, len) as usize)
}

/// Restricts `x` to `[min, max]`. Unlike [`Ord::clamp`] this never
/// panics: when `min > max` the lower bound wins.
pub(crate) fn squeeze(x: isize, min: isize, max: isize) -> isize {
    min.max(max.min(x))
}
