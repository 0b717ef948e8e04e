/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Selectors: first-class descriptions of subsets of a view.
//!
//! A [`Selector`] is data. It can be built, printed, serialized,
//! compared and checked against a view with
//! [`Selector::compatible_with`] before it is applied with
//! [`Selector::select`], which produces a child [`View`]:
//!
//! - [`Selector::Slice`] selects the positions of a [`Slice`];
//! - [`Selector::IndexList`] selects explicit, possibly negative,
//!   indexes;
//! - [`Selector::Mask`] selects the positions where a boolean mask is
//!   `true`;
//! - [`Selector::Pipe`] applies a sequence of selectors left to right,
//!   each to the result of the previous one.
//!
//! ```
//! use seqview::Shared;
//! use seqview::View;
//! use seqview::dsl::*;
//!
//! let data = Shared::new((0..10).collect::<Vec<i32>>());
//! let view = View::new(&data, None).unwrap();
//!
//! let selector = pipe([
//!     "::2".parse().unwrap(),
//!     index_list([0, -1]),
//! ]);
//! assert_eq!(selector.to_string(), "(::2 | [0, -1])");
//! assert!(selector.compatible_with(&view));
//! assert_eq!(selector.select(&view, None).unwrap().to_vec().unwrap(), vec![0, 8]);
//! ```

use std::fmt;
use std::str::FromStr;

use enum_as_inner::EnumAsInner;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

use crate::Slice;
use crate::SliceError;
use crate::view::View;
use crate::view::ViewError;
use crate::view::indexes_in_range;

/// A description of a subset of a view's positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumAsInner)]
pub enum Selector {
    /// The positions of a slice; normalized against the view it is
    /// applied to.
    Slice(Slice),

    /// Explicit indexes, negative ones counted from the end. Each must
    /// lie in `[-len, len)`.
    IndexList(Vec<isize>),

    /// One flag per element; selects where `true`.
    Mask(Vec<bool>),

    /// Selectors applied in sequence. An empty pipe selects
    /// everything.
    Pipe(Vec<Selector>),
}

impl Selector {
    /// Apply this selector to `view`, producing a child view over it.
    ///
    /// `readonly` is forwarded to the produced view (and, for a pipe,
    /// to every intermediate view): `None` inherits the readonly flag
    /// of `view`.
    ///
    /// # Errors
    ///
    /// - [`ViewError::IndexesOutOfRange`] for an index list that does
    ///   not fit `view`;
    /// - [`ViewError::MaskSizeMismatch`] for a mask whose length
    ///   differs from `view`;
    /// - [`SliceError::ZeroStep`] for a slice with a zero step;
    /// - [`ViewError::ReadonlySource`] when a writable view is
    ///   requested over a readonly one.
    pub fn select<T: Clone + 'static>(
        &self,
        view: &View<T>,
        readonly: Option<bool>,
    ) -> Result<View<T>, ViewError> {
        tracing::trace!(selector = %self, len = view.len(), "select");
        match self {
            Selector::Slice(slice) => View::sliced(view, slice, readonly),
            Selector::IndexList(indexes) => View::index_list(view, indexes.clone(), readonly),
            Selector::Mask(mask) => View::masked(view, mask.clone(), readonly),
            Selector::Pipe(selectors) => {
                let mut current = View::to_view(view, readonly)?;
                for selector in selectors {
                    current = selector.select(&current, readonly)?;
                }
                Ok(current)
            }
        }
    }

    /// Whether [`Selector::select`] would accept `view`, readonly
    /// concerns aside. Never fails.
    pub fn compatible_with<T: Clone + 'static>(&self, view: &View<T>) -> bool {
        match self {
            Selector::Slice(slice) => slice.step() != Some(0),
            Selector::IndexList(indexes) => indexes_in_range(indexes, view.len()),
            Selector::Mask(mask) => mask.len() == view.len(),
            Selector::Pipe(selectors) => {
                let mut current = view.clone();
                for selector in selectors {
                    if !selector.compatible_with(&current) {
                        return false;
                    }
                    match selector.select(&current, None) {
                        Ok(next) => current = next,
                        Err(_) => return false,
                    }
                }
                true
            }
        }
    }
}

impl From<Slice> for Selector {
    fn from(slice: Slice) -> Self {
        Selector::Slice(slice)
    }
}

impl From<Vec<isize>> for Selector {
    fn from(indexes: Vec<isize>) -> Self {
        Selector::IndexList(indexes)
    }
}

impl From<Vec<bool>> for Selector {
    fn from(mask: Vec<bool>) -> Self {
        Selector::Mask(mask)
    }
}

/// Slices print in their canonical `start:end:step` form, lists and
/// masks in brackets, pipes as parenthesized `|`-separated stages.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Slice(slice) => write!(f, "{}", slice),
            Selector::IndexList(indexes) => write!(f, "[{}]", indexes.iter().join(", ")),
            Selector::Mask(mask) => write!(f, "[{}]", mask.iter().join(", ")),
            Selector::Pipe(selectors) => write!(f, "({})", selectors.iter().join(" | ")),
        }
    }
}

/// Only slice strings parse into selectors.
impl FromStr for Selector {
    type Err = SliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Selector::Slice)
    }
}

/// Constructors for [`Selector`]s.
pub mod dsl {
    use super::Selector;
    use crate::Slice;
    use crate::view::View;
    use crate::view::ViewError;

    pub fn slice<S: Into<Slice>>(slice: S) -> Selector {
        Selector::Slice(slice.into())
    }

    pub fn index_list(indexes: impl IntoIterator<Item = isize>) -> Selector {
        Selector::IndexList(indexes.into_iter().collect())
    }

    pub fn mask(mask: impl IntoIterator<Item = bool>) -> Selector {
        Selector::Mask(mask.into_iter().collect())
    }

    pub fn pipe(selectors: impl IntoIterator<Item = Selector>) -> Selector {
        Selector::Pipe(selectors.into_iter().collect())
    }

    /// A mask selector read from a view of flags.
    pub fn mask_from(view: &View<bool>) -> Result<Selector, ViewError> {
        view.to_vec().map(Selector::Mask)
    }

    /// An index-list selector read from a view of indexes.
    pub fn index_list_from(view: &View<isize>) -> Result<Selector, ViewError> {
        view.to_vec().map(Selector::IndexList)
    }
}
