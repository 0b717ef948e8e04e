/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Composable, write-through views over dense mutable sequences.
//!
//! A [`View`] is a logical window over a [`Shared`] backing sequence,
//! or over another view. Views never copy: reads and writes are
//! translated index by index down to the backing storage, so a write
//! through any view is visible through every other view of the same
//! data.
//!
//! Subsets are described by [`Selector`]s, built from Python-style
//! [`Slice`]s, index lists, boolean masks, and pipes of those. Views
//! can also be addressed with dynamically typed [`Key`]s: numeric
//! keys address single elements, everything selector-like addresses
//! a subset.
//!
//! ```
//! use seqview::Key;
//! use seqview::Shared;
//! use seqview::Value;
//! use seqview::View;
//!
//! let data = Shared::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//! let view = View::new(&data, None).unwrap();
//!
//! // Multiply every even element by ten.
//! view.filter(|x, _| x % 2 == 0)
//!     .unwrap()
//!     .apply(|x, _| x * 10)
//!     .unwrap();
//! assert_eq!(*data.borrow(), vec![1, 20, 3, 40, 5, 60, 7, 80, 9, 100]);
//!
//! // Address with keys.
//! assert_eq!(view.read("::-3").unwrap(), Value::Sequence(vec![100, 7, 40, 1]));
//! view.write(Key::Int(-1), Value::Scalar(0)).unwrap();
//! assert_eq!(data.borrow()[9], 0);
//! ```

mod slice;
pub use slice::NormalizedSlice;
pub use slice::NormalizedSliceIterator;
pub use slice::Slice;
pub use slice::SliceError;

/// Selectors and the selector DSL.
pub mod selector;

/// Dynamically typed keys and their resolution.
pub mod key;

/// Backing sequences and the indexable source abstraction.
pub mod sequence;

/// The selector type applied to views.
pub use selector::Selector;
/// DSL-style constructors for building `Selector`s.
pub use selector::dsl;
pub use key::Key;
pub use key::Offset;
pub use sequence::Indexable;
pub use sequence::Sequence;
pub use sequence::Shared;
pub use view::ErrorKind;
pub use view::Value;
pub use view::View;
pub use view::ViewError;
pub use view::ViewKind;
pub use view::ViewSource;

/// Property-based generators for randomized test input.
#[cfg(test)]
pub mod strategy;

/// Utilities.
pub mod utils;

/// Views, their errors and the values read and written through them.
pub mod view;
