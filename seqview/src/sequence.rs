/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Backing sequences and the shared handle views alias.
//!
//! A view never owns or copies the elements it exposes. It reads and
//! writes through a [`Shared`] handle (an `Rc<RefCell<_>>`) to some
//! [`Sequence`], so that every view built over the same handle, at any
//! depth, observes every write immediately.
//!
//! [`Indexable`] is the object-safe seam between a view and whatever
//! it is layered on: either a [`Shared`] backing sequence or another
//! view.

use std::cell::Ref;
use std::cell::RefCell;
use std::cell::RefMut;
use std::collections::BTreeMap;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::view::ViewError;

/// A mutable container addressed by dense, zero-based positions.
///
/// Implementors that can hold gaps (keyed maps) must report them via
/// [`Sequence::is_sequential`]; views refuse to be built over a
/// non-sequential container.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, index: usize) -> bool {
        index < self.len()
    }

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Whether the positions of this container are exactly `0..len`.
    fn is_sequential(&self) -> bool {
        true
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }
}

/// A keyed container is a sequence only when its keys are exactly
/// `0..len`.
impl<T> Sequence for BTreeMap<usize, T> {
    type Item = T;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn contains(&self, index: usize) -> bool {
        self.contains_key(&index)
    }

    fn get(&self, index: usize) -> Option<&T> {
        BTreeMap::get(self, &index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        BTreeMap::get_mut(self, &index)
    }

    fn is_sequential(&self) -> bool {
        // Keys are sorted and unique, so checking the last one suffices.
        self.keys().next_back().is_none_or(|&last| last + 1 == self.len())
    }
}

/// A shared, mutable handle to a backing sequence. Cloning the handle
/// aliases the same storage.
///
/// ```
/// use seqview::Shared;
/// use seqview::View;
///
/// let data = Shared::new(vec![1, 2, 3]);
/// let view = View::new(&data, None).unwrap();
/// view.set_at(0, 10).unwrap();
/// assert_eq!(*data.borrow(), vec![10, 2, 3]);
/// ```
///
/// # Panics
///
/// Reads and writes through a view borrow the underlying `RefCell`
/// for the duration of a single element access. Holding a
/// [`Shared::borrow_mut`] guard across a view access panics.
pub struct Shared<S>(Rc<RefCell<S>>);

impl<S> Shared<S> {
    pub fn new(sequence: S) -> Self {
        Self(Rc::new(RefCell::new(sequence)))
    }

    pub fn borrow(&self) -> Ref<'_, S> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, S> {
        self.0.borrow_mut()
    }

    /// Whether `self` and `other` alias the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<S: fmt::Debug> fmt::Debug for Shared<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&*self.0.borrow()).finish()
    }
}

impl<T> From<Vec<T>> for Shared<Vec<T>> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

/// Anything a view can be layered on: a backing sequence or another
/// view. Positions are already normalized (non-negative) when they
/// reach this trait.
pub trait Indexable<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, index: usize) -> bool;

    fn get(&self, index: usize) -> Result<T, ViewError>;

    fn set(&self, index: usize, value: T) -> Result<(), ViewError>;

    fn is_readonly(&self) -> bool;

    fn is_sequential(&self) -> bool {
        true
    }
}

impl<S> Indexable<S::Item> for Shared<S>
where
    S: Sequence,
    S::Item: Clone,
{
    fn len(&self) -> usize {
        self.0.borrow().len()
    }

    fn contains(&self, index: usize) -> bool {
        self.0.borrow().contains(index)
    }

    fn get(&self, index: usize) -> Result<S::Item, ViewError> {
        let sequence = self.0.borrow();
        sequence
            .get(index)
            .cloned()
            .ok_or_else(|| ViewError::index_out_of_range(index as isize, sequence.len()))
    }

    fn set(&self, index: usize, value: S::Item) -> Result<(), ViewError> {
        let mut sequence = self.0.borrow_mut();
        let len = sequence.len();
        let slot = sequence
            .get_mut(index)
            .ok_or_else(|| ViewError::index_out_of_range(index as isize, len))?;
        *slot = value;
        Ok(())
    }

    fn is_readonly(&self) -> bool {
        false
    }

    fn is_sequential(&self) -> bool {
        self.0.borrow().is_sequential()
    }
}
