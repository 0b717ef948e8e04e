/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Parser for the compact slice syntax.
//!
//! ```text
//! slice   ::= field? ":" field? ( ":" field? )?
//! field   ::= "-"? [0-9]+ | "-"
//! ```
//!
//! Notes:
//! - At least one `:` is required. A bare numeral such as `"3"` is a
//!   position, not a slice, and the empty string is neither.
//! - Missing fields stay `None` and are resolved only when the slice
//!   is normalized against a concrete length.
//! - A lone `-` reads as `0`.
//! - Whitespace is not admitted.

use nom::IResult;
use nom::Parser as _;
use nom::branch::alt;
use nom::character::complete::char;
use nom::character::complete::digit1;
use nom::combinator::all_consuming;
use nom::combinator::map_res;
use nom::combinator::opt;
use nom::combinator::recognize;
use nom::combinator::value;
use nom::sequence::pair;
use nom::sequence::preceded;

use crate::slice::Slice;

fn field(input: &str) -> IResult<&str, isize> {
    alt((
        map_res(recognize(pair(opt(char('-')), digit1)), str::parse),
        value(0, char('-')),
    ))
    .parse(input)
}

fn slice(input: &str) -> IResult<&str, Slice> {
    let (input, (start, end, step)) = (
        opt(field),
        preceded(char(':'), opt(field)),
        opt(preceded(char(':'), opt(field))),
    )
        .parse(input)?;

    Ok((input, Slice::new(start, end, step.flatten())))
}

/// Parses `input` as a slice, returning `None` unless the whole input
/// matches the grammar.
pub(crate) fn parse(input: &str) -> Option<Slice> {
    all_consuming(slice)
        .parse(input)
        .ok()
        .map(|(_, slice)| slice)
}
