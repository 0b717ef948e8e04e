/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Write-through views over backing sequences.
//!
//! A [`View`] exposes a fixed-cardinality window over its *source*,
//! which is either a [`Shared`] backing sequence or another view.
//! Views never copy elements. Every read and write converts a local
//! index into an index of the immediate source and delegates to it;
//! the chain bottoms out at the backing sequence, so a write through
//! any view is observed by every other view over the same storage.
//!
//! There are four kinds of view:
//!
//! - a *base* view exposes its source as is;
//! - a *slice* view exposes the positions of a [`NormalizedSlice`];
//! - an *index-list* view exposes an explicit, possibly negative,
//!   list of source indexes;
//! - a *mask* view exposes the source positions where a boolean mask
//!   is `true`. It is an index-list view over the derived positions;
//!   the mask itself is only kept for introspection.
//!
//! # Readonly propagation
//!
//! A view built over a readonly view must itself be readonly. The
//! `readonly` argument of every constructor is an `Option<bool>`:
//! `None` inherits the flag of the immediate source, `Some(true)`
//! forces a readonly view, and `Some(false)` over a readonly source
//! is rejected with [`ViewError::ReadonlySource`].
//!
//! ```
//! use seqview::Shared;
//! use seqview::Value;
//! use seqview::View;
//!
//! let data = Shared::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! let view = View::new(&data, None).unwrap();
//!
//! let odd = view.subview("1:7:2", None).unwrap();
//! assert_eq!(odd.to_vec().unwrap(), vec![2, 4, 6]);
//!
//! odd.set(Value::from(vec![22, 44, 66])).unwrap();
//! assert_eq!(*data.borrow(), vec![1, 22, 3, 44, 5, 66, 7, 8, 9]);
//! ```

use std::fmt;
use std::rc::Rc;

use enum_as_inner::EnumAsInner;
use itertools::Itertools;
use itertools::MinMaxResult;

use crate::Key;
use crate::NormalizedSlice;
use crate::Offset;
use crate::Selector;
use crate::Slice;
use crate::SliceError;
use crate::sequence::Indexable;
use crate::sequence::Sequence;
use crate::sequence::Shared;
use crate::utils::checked_index;

/// Errors raised by view construction, access and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ViewError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("index `{index}` is not an integer")]
    NonIntegralIndex { index: String },

    #[error("some indexes are out of range for length {len}")]
    IndexesOutOfRange { len: usize },

    #[error("invalid key `{key}`")]
    InvalidKey { key: String },

    #[error("mask size not equal to source length ({mask} != {len})")]
    MaskSizeMismatch { mask: usize, len: usize },

    #[error("length of values not equal to view length ({got} != {expected})")]
    SizeMismatch { got: usize, expected: usize },

    #[error("cannot modify a readonly view")]
    Readonly,

    #[error("cannot create non-readonly view for readonly source")]
    ReadonlySource,

    #[error("cannot create view for non-sequential source")]
    NonSequential,

    #[error("{operation} is not supported by views")]
    Unsupported { operation: &'static str },

    #[error(transparent)]
    SliceError(#[from] SliceError),
}

/// The broad category of a [`ViewError`]. All of them are
/// deterministic input errors; none is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IndexOutOfRange,
    InvalidKey,
    SizeMismatch,
    Readonly,
    InvalidSource,
    Unsupported,
    InvalidSlice,
}

impl ViewError {
    pub(crate) fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. }
            | Self::NonIntegralIndex { .. }
            | Self::IndexesOutOfRange { .. }
            | Self::SliceError(SliceError::ZeroStep) => ErrorKind::IndexOutOfRange,
            Self::InvalidKey { .. } => ErrorKind::InvalidKey,
            Self::MaskSizeMismatch { .. } | Self::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            Self::Readonly | Self::ReadonlySource => ErrorKind::Readonly,
            Self::NonSequential => ErrorKind::InvalidSource,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::SliceError(_) => ErrorKind::InvalidSlice,
        }
    }
}

/// A single element or an ordered run of elements: the result of
/// reading an offset, and the argument of a write.
///
/// Writing a `Scalar` through a selection broadcasts it to every
/// selected position; writing a `Sequence` requires one value per
/// position.
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner)]
pub enum Value<T> {
    Scalar(T),
    Sequence(Vec<T>),
}

impl<T> From<Vec<T>> for Value<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Value<T> {
    fn from(values: [T; N]) -> Self {
        Self::Sequence(values.into())
    }
}

impl<T: Clone> From<&[T]> for Value<T> {
    fn from(values: &[T]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

/// Materializes the elements of `view`.
impl<T: Clone + 'static> TryFrom<&View<T>> for Value<T> {
    type Error = ViewError;

    fn try_from(view: &View<T>) -> Result<Self, Self::Error> {
        view.to_vec().map(Self::Sequence)
    }
}

/// Which positions of its source a view exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Base,
    Slice,
    IndexList,
    Mask,
}

#[derive(Debug)]
enum Layout {
    Base,
    Slice(NormalizedSlice),
    IndexList(Vec<isize>),
    Mask {
        mask: Vec<bool>,
        indexes: Vec<isize>,
    },
}

/// A logical, write-through window over a backing sequence or over
/// another view. Cloning a view is cheap and yields a view over the
/// same source with the same selection.
pub struct View<T> {
    source: Rc<dyn Indexable<T>>,
    readonly: bool,
    layout: Rc<Layout>,
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            readonly: self.readonly,
            layout: Rc::clone(&self.layout),
        }
    }
}

impl<T> fmt::Debug for View<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("layout", &self.layout)
            .field("readonly", &self.readonly)
            .field("source_len", &self.source.len())
            .finish()
    }
}

/// Whether every index in `indexes` lies in `[-len, len)`.
pub(crate) fn indexes_in_range(indexes: &[isize], len: usize) -> bool {
    let n = len as isize;
    match indexes.iter().minmax() {
        MinMaxResult::NoElements => true,
        MinMaxResult::OneElement(&i) => i < n && i >= -n,
        MinMaxResult::MinMax(&lo, &hi) => hi < n && lo >= -n,
    }
}

/// Things a view can be obtained from: a shared backing sequence
/// (linked), another view (returned as is, or wrapped readonly), or
/// an owned vector (moved into a fresh backing sequence). Asking for
/// a writable view of a readonly view fails.
pub trait ViewSource<T> {
    fn into_view(self, readonly: Option<bool>) -> Result<View<T>, ViewError>;
}

impl<S> ViewSource<S::Item> for &Shared<S>
where
    S: Sequence + 'static,
    S::Item: Clone + 'static,
{
    fn into_view(self, readonly: Option<bool>) -> Result<View<S::Item>, ViewError> {
        View::new(self, readonly)
    }
}

impl<T: Clone + 'static> ViewSource<T> for &View<T> {
    fn into_view(self, readonly: Option<bool>) -> Result<View<T>, ViewError> {
        if self.readonly && readonly == Some(false) {
            tracing::debug!("rejecting writable view of readonly view");
            return Err(ViewError::ReadonlySource);
        }
        if !self.readonly && readonly == Some(true) {
            return View::layered(self.layer(), Layout::Base, readonly);
        }
        Ok(self.clone())
    }
}

impl<T: Clone + 'static> ViewSource<T> for Vec<T> {
    fn into_view(self, readonly: Option<bool>) -> Result<View<T>, ViewError> {
        View::new(&Shared::new(self), readonly)
    }
}

impl<T: Clone + 'static> View<T> {
    /// A base view over a shared backing sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NonSequential`] if the sequence has gaps.
    pub fn new<S>(source: &Shared<S>, readonly: Option<bool>) -> Result<Self, ViewError>
    where
        S: Sequence<Item = T> + 'static,
    {
        Self::layered(Rc::new(source.clone()), Layout::Base, readonly)
    }

    /// Obtain a view of `source`. An existing view is returned as is,
    /// unless a readonly view of a writable view is requested, in
    /// which case it is wrapped in a readonly base view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ReadonlySource`] when a writable view of a
    /// readonly view is requested.
    pub fn to_view(source: impl ViewSource<T>, readonly: Option<bool>) -> Result<Self, ViewError> {
        source.into_view(readonly)
    }

    /// Same as [`View::to_view`]. Despite the name, a view obtained
    /// from a shared sequence or from another view stays linked to it
    /// and writes through; only an owned `Vec` is detached, because it
    /// is moved into fresh storage.
    pub fn to_unlinked_view(
        source: impl ViewSource<T>,
        readonly: Option<bool>,
    ) -> Result<Self, ViewError> {
        Self::to_view(source, readonly)
    }

    /// A slice view over `source`. The slice is normalized against the
    /// current length of `source`; out of range bounds are clamped.
    ///
    /// # Errors
    ///
    /// Fails with a readonly violation before looking at the slice,
    /// then with [`SliceError::ZeroStep`] for a zero step.
    pub fn sliced(source: &View<T>, slice: &Slice, readonly: Option<bool>) -> Result<Self, ViewError> {
        let readonly = Self::admit(source, readonly)?;
        let slice = slice.normalize(source.len())?;
        Ok(Self::build(source.layer(), Layout::Slice(slice), readonly))
    }

    /// An index-list view over `source`. Indexes may be negative and
    /// are relative to `source`; they are validated eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IndexesOutOfRange`] unless every index lies
    /// in `[-len, len)` of `source`.
    pub fn index_list(
        source: &View<T>,
        indexes: Vec<isize>,
        readonly: Option<bool>,
    ) -> Result<Self, ViewError> {
        if !indexes_in_range(&indexes, source.len()) {
            tracing::debug!(
                len = source.len(),
                count = indexes.len(),
                "rejecting out of range index list"
            );
            return Err(ViewError::IndexesOutOfRange { len: source.len() });
        }
        Self::layered(source.layer(), Layout::IndexList(indexes), readonly)
    }

    /// A mask view over `source`: the positions where `mask` is
    /// `true`, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MaskSizeMismatch`] unless `mask` has
    /// exactly one entry per element of `source`.
    pub fn masked(source: &View<T>, mask: Vec<bool>, readonly: Option<bool>) -> Result<Self, ViewError> {
        if mask.len() != source.len() {
            tracing::debug!(
                mask = mask.len(),
                len = source.len(),
                "rejecting mask of mismatched size"
            );
            return Err(ViewError::MaskSizeMismatch {
                mask: mask.len(),
                len: source.len(),
            });
        }
        let indexes = mask.iter().positions(|&b| b).map(|i| i as isize).collect();
        Self::layered(source.layer(), Layout::Mask { mask, indexes }, readonly)
    }

    fn layered(
        source: Rc<dyn Indexable<T>>,
        layout: Layout,
        readonly: Option<bool>,
    ) -> Result<Self, ViewError> {
        let readonly = Self::admit(&*source, readonly)?;
        Ok(Self::build(source, layout, readonly))
    }

    fn build(source: Rc<dyn Indexable<T>>, layout: Layout, readonly: bool) -> Self {
        Self {
            source,
            readonly,
            layout: Rc::new(layout),
        }
    }

    fn admit(source: &dyn Indexable<T>, readonly: Option<bool>) -> Result<bool, ViewError> {
        if !source.is_sequential() {
            tracing::debug!(len = source.len(), "rejecting view over non-sequential source");
            return Err(ViewError::NonSequential);
        }
        let readonly = readonly.unwrap_or_else(|| source.is_readonly());
        if source.is_readonly() && !readonly {
            tracing::debug!("rejecting writable view over readonly source");
            return Err(ViewError::ReadonlySource);
        }
        Ok(readonly)
    }

    /// This view as the source of a child view.
    fn layer(&self) -> Rc<dyn Indexable<T>> {
        Rc::new(self.clone())
    }

    /// The number of elements visible through this view. A base view
    /// tracks the length of its source; every other kind has the
    /// cardinality fixed at construction.
    pub fn len(&self) -> usize {
        match &*self.layout {
            Layout::Base => self.source.len(),
            Layout::Slice(slice) => slice.len(),
            Layout::IndexList(indexes) | Layout::Mask { indexes, .. } => indexes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn kind(&self) -> ViewKind {
        match &*self.layout {
            Layout::Base => ViewKind::Base,
            Layout::Slice(_) => ViewKind::Slice,
            Layout::IndexList(_) => ViewKind::IndexList,
            Layout::Mask { .. } => ViewKind::Mask,
        }
    }

    /// The normalized slice of a slice view.
    pub fn slice(&self) -> Option<&NormalizedSlice> {
        match &*self.layout {
            Layout::Slice(slice) => Some(slice),
            _ => None,
        }
    }

    /// The source indexes of an index-list or mask view.
    pub fn indexes(&self) -> Option<&[isize]> {
        match &*self.layout {
            Layout::IndexList(indexes) | Layout::Mask { indexes, .. } => Some(indexes),
            _ => None,
        }
    }

    /// The mask of a mask view.
    pub fn mask(&self) -> Option<&[bool]> {
        match &*self.layout {
            Layout::Mask { mask, .. } => Some(mask),
            _ => None,
        }
    }

    /// Map a local index, possibly negative, to an index of the
    /// immediate source.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IndexOutOfRange`] if `index` is outside
    /// `[-len, len)`.
    pub fn convert_index(&self, index: isize) -> Result<usize, ViewError> {
        let source_len = self.source.len();
        let position = match &*self.layout {
            Layout::Base => checked_index(index, source_len),
            Layout::Slice(slice) => slice
                .convert_index(index)
                .and_then(|p| usize::try_from(p).ok()),
            Layout::IndexList(indexes) | Layout::Mask { indexes, .. } => {
                checked_index(index, indexes.len())
                    .and_then(|i| checked_index(indexes[i], source_len))
            }
        };
        position.ok_or_else(|| ViewError::index_out_of_range(index, self.len()))
    }

    /// Whether `index` is a valid local index whose source position
    /// exists.
    pub fn contains(&self, index: isize) -> bool {
        self.convert_index(index)
            .is_ok_and(|position| self.source.contains(position))
    }

    fn position(&self, index: isize) -> Result<usize, ViewError> {
        let position = self.convert_index(index)?;
        if !self.source.contains(position) {
            return Err(ViewError::index_out_of_range(index, self.len()));
        }
        Ok(position)
    }

    /// Read the element at local `index`.
    pub fn get(&self, index: isize) -> Result<T, ViewError> {
        self.source.get(self.position(index)?)
    }

    /// Write the element at local `index` through to the backing
    /// sequence.
    pub fn set_at(&self, index: isize, value: T) -> Result<(), ViewError> {
        if self.readonly {
            return Err(ViewError::Readonly);
        }
        self.source.set(self.position(index)?, value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            view: self,
            positions: 0..self.len(),
        }
    }

    /// Materialize the visible elements, in view order.
    pub fn to_vec(&self) -> Result<Vec<T>, ViewError> {
        self.iter().collect()
    }

    /// Read by key: an integral key reads one element, a selector key
    /// (slice string, index list, mask or [`Selector`]) reads the
    /// selection.
    ///
    /// # Errors
    ///
    /// Fails with [`ViewError::InvalidKey`] for keys that are neither,
    /// and with an index error for out of range or non-integral
    /// numeric keys.
    pub fn read(&self, key: impl Into<Key>) -> Result<Value<T>, ViewError> {
        match key.into().resolve()? {
            Offset::Index(index) => self.get(index).map(Value::Scalar),
            Offset::NonIntegral(index) => Err(ViewError::NonIntegralIndex { index }),
            Offset::Select(selector) => selector.select(self, None)?.to_vec().map(Value::Sequence),
        }
    }

    /// Write by key. A numeric key takes a scalar, or a sequence of
    /// exactly one value. A selector key takes a scalar, broadcast to
    /// every selected position, or a sequence of matching length.
    pub fn write(&self, key: impl Into<Key>, value: impl Into<Value<T>>) -> Result<(), ViewError> {
        if self.readonly {
            return Err(ViewError::Readonly);
        }
        match (key.into().resolve()?, value.into()) {
            (Offset::Index(index), Value::Scalar(value)) => self.set_at(index, value),
            (Offset::Index(index), Value::Sequence(values)) => {
                let got = values.len();
                match <[T; 1]>::try_from(values) {
                    Ok([value]) => self.set_at(index, value),
                    Err(_) => Err(ViewError::SizeMismatch { got, expected: 1 }),
                }
            }
            (Offset::NonIntegral(index), _) => Err(ViewError::NonIntegralIndex { index }),
            (Offset::Select(selector), value) => selector.select(self, None)?.set(value).map(|_| ()),
        }
    }

    /// Whether `key` addresses something in this view: an existing
    /// index, or a selector compatible with the view. Never fails.
    pub fn exists(&self, key: impl Into<Key>) -> bool {
        match key.into().resolve() {
            Ok(Offset::Index(index)) => self.contains(index),
            Ok(Offset::NonIntegral(_)) | Err(_) => false,
            Ok(Offset::Select(selector)) => selector.compatible_with(self),
        }
    }

    /// Views have fixed cardinality; removing elements is never
    /// supported.
    pub fn unset(&self, _key: impl Into<Key>) -> Result<(), ViewError> {
        Err(ViewError::Unsupported { operation: "unset" })
    }

    /// The child view selected by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidKey`] for numeric keys, and any
    /// error raised by the selection.
    pub fn subview(&self, key: impl Into<Key>, readonly: Option<bool>) -> Result<View<T>, ViewError> {
        key.into().selector()?.select(self, readonly)
    }

    /// Assign every visible element: a scalar is broadcast, a
    /// sequence must have exactly [`View::len`] values.
    pub fn set(&self, values: impl Into<Value<T>>) -> Result<&Self, ViewError> {
        if self.readonly {
            return Err(ViewError::Readonly);
        }
        for (index, value) in (0..).zip(self.broadcast(values.into())?) {
            self.set_at(index, value)?;
        }
        Ok(self)
    }

    /// Replace every visible element `x` at position `i` with
    /// `mapper(x, i)`.
    pub fn apply(&self, mut mapper: impl FnMut(T, usize) -> T) -> Result<&Self, ViewError> {
        if self.readonly {
            return Err(ViewError::Readonly);
        }
        for position in 0..self.len() {
            let index = position as isize;
            self.set_at(index, mapper(self.get(index)?, position))?;
        }
        Ok(self)
    }

    /// Replace every visible element `x` at position `i` with
    /// `mapper(x, d, i)`, where `d` is the matching element of `data`,
    /// or `data` itself if it is a scalar.
    pub fn apply_with<U: Clone>(
        &self,
        data: impl Into<Value<U>>,
        mut mapper: impl FnMut(T, U, usize) -> T,
    ) -> Result<&Self, ViewError> {
        if self.readonly {
            return Err(ViewError::Readonly);
        }
        let data = self.broadcast(data.into())?;
        for (position, datum) in data.into_iter().enumerate() {
            let index = position as isize;
            self.set_at(index, mapper(self.get(index)?, datum, position))?;
        }
        Ok(self)
    }

    /// `mapper(x, i)` for every visible element `x` at position `i`.
    pub fn map<R>(&self, mut mapper: impl FnMut(T, usize) -> R) -> Result<Vec<R>, ViewError> {
        self.iter()
            .enumerate()
            .map(|(position, value)| Ok::<_, ViewError>(mapper(value?, position)))
            .collect()
    }

    /// `mapper(x, d, i)` for every visible element `x` at position
    /// `i` and matching datum `d`.
    pub fn map_with<U: Clone, R>(
        &self,
        data: impl Into<Value<U>>,
        mut mapper: impl FnMut(T, U, usize) -> R,
    ) -> Result<Vec<R>, ViewError> {
        let data = self.broadcast(data.into())?;
        self.iter()
            .zip(data)
            .enumerate()
            .map(|(position, (value, datum))| {
                Ok::<_, ViewError>(mapper(value?, datum, position))
            })
            .collect()
    }

    /// A mask selector of the elements satisfying `predicate`. Apply
    /// it to this view with [`Selector::select`], or use
    /// [`View::filter`].
    pub fn is(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> Result<Selector, ViewError> {
        self.map(|value, position| predicate(&value, position))
            .map(Selector::Mask)
    }

    /// Same as [`View::is`].
    pub fn matches(&self, predicate: impl FnMut(&T, usize) -> bool) -> Result<Selector, ViewError> {
        self.is(predicate)
    }

    /// A mask selector of the positions where `compare` holds between
    /// the element and the matching datum.
    pub fn match_with<U: Clone>(
        &self,
        data: impl Into<Value<U>>,
        mut compare: impl FnMut(&T, &U, usize) -> bool,
    ) -> Result<Selector, ViewError> {
        self.map_with(data, |value, datum, position| compare(&value, &datum, position))
            .map(Selector::Mask)
    }

    /// The mask view of the elements satisfying `predicate`.
    pub fn filter(&self, predicate: impl FnMut(&T, usize) -> bool) -> Result<View<T>, ViewError> {
        self.is(predicate)?.select(self, None)
    }

    fn broadcast<U: Clone>(&self, data: Value<U>) -> Result<Vec<U>, ViewError> {
        match data {
            Value::Scalar(datum) => Ok(vec![datum; self.len()]),
            Value::Sequence(data) if data.len() == self.len() => Ok(data),
            Value::Sequence(data) => Err(ViewError::SizeMismatch {
                got: data.len(),
                expected: self.len(),
            }),
        }
    }
}

/// A view is itself indexable, which is what lets views nest.
impl<T: Clone + 'static> Indexable<T> for View<T> {
    fn len(&self) -> usize {
        View::len(self)
    }

    fn contains(&self, index: usize) -> bool {
        isize::try_from(index).is_ok_and(|index| View::contains(self, index))
    }

    fn get(&self, index: usize) -> Result<T, ViewError> {
        View::get(self, local_index(index, self.len())?)
    }

    fn set(&self, index: usize, value: T) -> Result<(), ViewError> {
        View::set_at(self, local_index(index, self.len())?, value)
    }

    fn is_readonly(&self) -> bool {
        self.readonly
    }
}

fn local_index(index: usize, len: usize) -> Result<isize, ViewError> {
    isize::try_from(index).map_err(|_| ViewError::index_out_of_range(isize::MAX, len))
}

/// Iterator over the elements of a [`View`], see [`View::iter`].
pub struct Iter<'a, T> {
    view: &'a View<T>,
    positions: std::ops::Range<usize>,
}

impl<T: Clone + 'static> Iterator for Iter<'_, T> {
    type Item = Result<T, ViewError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.positions
            .next()
            .map(|position| self.view.get(position as isize))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<T: Clone + 'static> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Clone + 'static> IntoIterator for &'a View<T> {
    type Item = Result<T, ViewError>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
