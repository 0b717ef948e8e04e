/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property-based generators for slices, selectors and views.
//!
//! [`gen_slice`] produces arbitrary (possibly zero-step) slices and
//! [`reference_positions`] is the independent model their
//! normalization is checked against. [`gen_selector`] produces
//! selectors of bounded depth; most of them are incompatible with
//! any particular view, which is the point: compatibility and
//! selection must agree either way.
//!
//! This module is only included in test builds (`#[cfg(test)]`).

use proptest::prelude::*;

use crate::Selector;
use crate::Shared;
use crate::Slice;
use crate::View;

/// A slice whose present fields lie in `[-max_abs, max_abs]`. The
/// step may be zero.
pub fn gen_slice(max_abs: isize) -> impl Strategy<Value = Slice> {
    let field = move || prop::option::of(-max_abs..=max_abs);
    (field(), field(), field()).prop_map(|(start, end, step)| Slice::new(start, end, step))
}

/// The positions `slice` selects in a container of length `len`,
/// computed by clamping each bound separately and walking from start
/// to end. `slice` must not have a zero step.
pub fn reference_positions(slice: &Slice, len: usize) -> Vec<isize> {
    let len = len as isize;
    let step = slice.step().unwrap_or(1);
    assert_ne!(step, 0, "reference_positions: zero step");
    let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
    let clamp = |bound: Option<isize>, default: isize| match bound {
        None => default,
        Some(b) if b < 0 => (b + len).max(lower),
        Some(b) => b.min(upper),
    };
    let (start, end) = if step > 0 {
        (clamp(slice.start(), lower), clamp(slice.end(), upper))
    } else {
        (clamp(slice.start(), upper), clamp(slice.end(), lower))
    };

    let mut positions = Vec::new();
    let mut i = start;
    while (step > 0 && i < end) || (step < 0 && i > end) {
        positions.push(i);
        i += step;
    }
    positions
}

/// A selector of nesting depth at most `depth`. Index lists hold
/// values in `[-8, 8)`, masks hold up to 9 flags.
pub fn gen_selector(depth: u32) -> impl Strategy<Value = Selector> {
    let leaf = prop_oneof![
        gen_slice(10).prop_map(Selector::Slice),
        prop::collection::vec(-8isize..8, 0..5).prop_map(Selector::IndexList),
        prop::collection::vec(any::<bool>(), 0..10).prop_map(Selector::Mask),
    ];
    leaf.prop_recursive(depth, 16, 3, |inner| {
        prop::collection::vec(inner, 0..3).prop_map(Selector::Pipe)
    })
}

/// A fresh backing sequence of up to `max_len` small integers,
/// together with a base view over it.
pub fn gen_view(max_len: usize) -> impl Strategy<Value = (Shared<Vec<i64>>, View<i64>)> {
    prop::collection::vec(-100i64..100, 0..=max_len).prop_map(|values| {
        let data = Shared::new(values);
        let view = View::new(&data, None).expect("vectors are sequential");
        (data, view)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_positions() {
        let s = |input: &str| input.parse::<Slice>().unwrap();
        assert_eq!(reference_positions(&s("::"), 4), vec![0, 1, 2, 3]);
        assert_eq!(reference_positions(&s("::-1"), 4), vec![3, 2, 1, 0]);
        assert_eq!(reference_positions(&s("1:-1:2"), 6), vec![1, 3]);
        assert_eq!(reference_positions(&s("-100:100"), 3), vec![0, 1, 2]);
        assert_eq!(reference_positions(&s("100:-100:-1"), 3), vec![2, 1, 0]);
        assert_eq!(reference_positions(&s("3:1"), 5), Vec::<isize>::new());
        assert_eq!(reference_positions(&s("::"), 0), Vec::<isize>::new());
    }

    proptest! {
        #[test]
        fn test_gen_view((data, view) in gen_view(8)) {
            prop_assert_eq!(view.to_vec().unwrap(), data.borrow().clone());
        }
    }
}
