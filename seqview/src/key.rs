/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Keys: the values a view can be addressed with.
//!
//! A [`Key`] is whatever a caller indexes a view with. Resolving it
//! yields an [`Offset`]: either a numeric index, which addresses one
//! element, or a [`Selector`], which addresses a subset.
//!
//! | key                                   | resolves to                 |
//! |---------------------------------------|-----------------------------|
//! | integer, integral float or string     | [`Offset::Index`]           |
//! | fractional or non-finite number       | [`Offset::NonIntegral`]     |
//! | slice string, e.g. `"1:-1:2"`         | [`Selector::Slice`]         |
//! | list of integers (or empty list)      | [`Selector::IndexList`]     |
//! | list of booleans                      | [`Selector::Mask`]          |
//! | [`Selector`]                          | itself                      |
//! | anything else                         | [`ViewError::InvalidKey`]   |

use std::fmt;

use enum_as_inner::EnumAsInner;
use itertools::Itertools;

use crate::Slice;
use crate::selector::Selector;
use crate::view::ViewError;

/// A dynamically typed key.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Key {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Key>),
    Map(Vec<(String, Key)>),
    Selector(Selector),
}

/// What a [`Key`] addresses.
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner)]
pub enum Offset {
    Index(isize),
    /// A numeric key that is not an integer. Never addresses an
    /// element.
    NonIntegral(String),
    Select(Selector),
}

impl Key {
    /// Classify this key.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidKey`] for keys that are neither
    /// numeric nor convertible to a selector.
    pub fn resolve(self) -> Result<Offset, ViewError> {
        match self {
            Key::Int(i) => Ok(Offset::Index(saturate(i))),
            Key::Float(x) => Ok(float_offset(x)),
            Key::Str(s) => string_offset(s),
            Key::List(items) => list_selector(items).map(Offset::Select),
            Key::Selector(selector) => Ok(Offset::Select(selector)),
            key @ (Key::Null | Key::Bool(_) | Key::Map(_)) => Err(invalid(&key)),
        }
    }

    /// Resolve to a selector; numeric keys are rejected.
    pub fn selector(self) -> Result<Selector, ViewError> {
        match self.resolve()? {
            Offset::Select(selector) => Ok(selector),
            Offset::Index(index) => Err(ViewError::InvalidKey {
                key: index.to_string(),
            }),
            Offset::NonIntegral(key) => Err(ViewError::InvalidKey { key }),
        }
    }
}

fn invalid(key: &Key) -> ViewError {
    ViewError::InvalidKey {
        key: key.to_string(),
    }
}

fn saturate(i: i64) -> isize {
    isize::try_from(i).unwrap_or(if i < 0 { isize::MIN } else { isize::MAX })
}

fn float_offset(x: f64) -> Offset {
    // The range check excludes NaN and the infinities.
    if x.fract() == 0.0 && x >= isize::MIN as f64 && x < isize::MAX as f64 {
        Offset::Index(x as isize)
    } else {
        Offset::NonIntegral(x.to_string())
    }
}

/// Decimal literals: an optional sign, digits with at most one point,
/// and an optional exponent. Excludes `inf`, `NaN` and friends, which
/// `f64::from_str` would accept.
fn is_numeric(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && s.bytes().any(|b| b.is_ascii_digit())
        && s.parse::<f64>().is_ok()
}

fn string_offset(s: String) -> Result<Offset, ViewError> {
    if let Ok(i) = s.parse::<i64>() {
        return Ok(Offset::Index(saturate(i)));
    }
    if is_numeric(&s) {
        if let Ok(x) = s.parse::<f64>() {
            return Ok(float_offset(x));
        }
    }
    match s.parse::<Slice>() {
        Ok(slice) => Ok(Offset::Select(Selector::Slice(slice))),
        Err(_) => Err(ViewError::InvalidKey { key: s }),
    }
}

fn list_selector(items: Vec<Key>) -> Result<Selector, ViewError> {
    if items.iter().all(|item| item.is_int()) {
        return Ok(Selector::IndexList(
            items
                .into_iter()
                .filter_map(|item| item.into_int().ok())
                .map(saturate)
                .collect(),
        ));
    }
    if items.iter().all(|item| item.is_bool()) {
        return Ok(Selector::Mask(
            items
                .into_iter()
                .filter_map(|item| item.into_bool().ok())
                .collect(),
        ));
    }
    Err(invalid(&Key::List(items)))
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => write!(f, "null"),
            Key::Bool(b) => write!(f, "{}", b),
            Key::Int(i) => write!(f, "{}", i),
            Key::Float(x) => write!(f, "{}", x),
            Key::Str(s) => write!(f, "{}", s),
            Key::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            Key::Map(entries) => write!(
                f,
                "{{{}}}",
                entries
                    .iter()
                    .format_with(", ", |(k, v), f| f(&format_args!("{}: {}", k, v)))
            ),
            Key::Selector(selector) => write!(f, "{}", selector),
        }
    }
}

macro_rules! key_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(i: $ty) -> Self {
                    Key::Int(i64::try_from(i).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

key_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<f64> for Key {
    fn from(x: f64) -> Self {
        Key::Float(x)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<Selector> for Key {
    fn from(selector: Selector) -> Self {
        Key::Selector(selector)
    }
}

impl From<Slice> for Key {
    fn from(slice: Slice) -> Self {
        Key::Selector(Selector::Slice(slice))
    }
}

impl From<Vec<Key>> for Key {
    fn from(items: Vec<Key>) -> Self {
        Key::List(items)
    }
}

impl From<Vec<bool>> for Key {
    fn from(mask: Vec<bool>) -> Self {
        Key::Selector(Selector::Mask(mask))
    }
}

impl From<Vec<isize>> for Key {
    fn from(indexes: Vec<isize>) -> Self {
        Key::Selector(Selector::IndexList(indexes))
    }
}

impl<K: Into<Key>> From<Option<K>> for Key {
    fn from(key: Option<K>) -> Self {
        key.map_or(Key::Null, Into::into)
    }
}

impl From<serde_json::Value> for Key {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Key::Null,
            Value::Bool(b) => Key::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Key::Int(i),
                None => Key::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Key::Str(s),
            Value::Array(items) => Key::List(items.into_iter().map(Key::from).collect()),
            Value::Object(entries) => Key::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Key::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn index(key: impl Into<Key>) -> isize {
        key.into().resolve().unwrap().into_index().unwrap()
    }

    fn selector(key: impl Into<Key>) -> Selector {
        key.into().selector().unwrap()
    }

    fn kind(key: impl Into<Key>) -> crate::ErrorKind {
        key.into().resolve().unwrap_err().kind()
    }

    #[test]
    fn test_numeric_keys() {
        assert_eq!(index(3i32), 3);
        assert_eq!(index(-1i64), -1);
        assert_eq!(index(2usize), 2);
        assert_eq!(index(2.0), 2);
        assert_eq!(index(-0.0), 0);
        assert_eq!(index("7"), 7);
        assert_eq!(index("-7"), -7);
        assert_eq!(index("+7"), 7);
        assert_eq!(index("2.0"), 2);
        assert_eq!(index("1e1"), 10);
    }

    #[test]
    fn test_non_integral_keys() {
        for key in [Key::Float(1.5), Key::Float(f64::NAN), Key::Float(f64::INFINITY), Key::from("1.5")] {
            assert!(key.resolve().unwrap().is_non_integral());
        }
        assert_eq!(
            Key::Float(0.5).resolve().unwrap(),
            Offset::NonIntegral("0.5".to_string())
        );
    }

    #[test]
    fn test_selector_keys() {
        assert_eq!(selector("::2"), Selector::Slice(Slice::new(None, None, Some(2))));
        assert_eq!(selector(":"), Selector::Slice(Slice::default()));
        assert_eq!(selector(vec![1isize, -1]), Selector::IndexList(vec![1, -1]));
        assert_eq!(selector(vec![true, false]), Selector::Mask(vec![true, false]));
        assert_eq!(
            selector(vec![Key::Int(0), Key::Int(2)]),
            Selector::IndexList(vec![0, 2])
        );
        assert_eq!(
            selector(vec![Key::Bool(false), Key::Bool(true)]),
            Selector::Mask(vec![false, true])
        );
        assert_eq!(selector(Vec::<Key>::new()), Selector::IndexList(vec![]));
        assert_eq!(selector(Slice::from(1..3)), Selector::Slice(Slice::new(Some(1), Some(3), None)));
    }

    #[test]
    fn test_invalid_keys() {
        use crate::ErrorKind::InvalidKey;
        assert_eq!(kind(Key::Null), InvalidKey);
        assert_eq!(kind(true), InvalidKey);
        assert_eq!(kind("abc"), InvalidKey);
        assert_eq!(kind("inf"), InvalidKey);
        assert_eq!(kind("1:2:3:4"), InvalidKey);
        assert_eq!(kind(vec![Key::Int(1), Key::Bool(true)]), InvalidKey);
        assert_eq!(kind(vec![Key::from("1")]), InvalidKey);
        assert_eq!(kind(Key::Map(vec![("0".to_string(), Key::Int(1))])), InvalidKey);
        assert_eq!(kind(None::<i64>), InvalidKey);

        assert_eq!(
            Key::Int(1).selector().unwrap_err(),
            ViewError::InvalidKey { key: "1".to_string() }
        );
        assert_eq!(
            Key::from("abc").resolve().unwrap_err().to_string(),
            "invalid key `abc`"
        );
    }

    #[test]
    fn test_json_keys() {
        assert_eq!(Key::from(json!(3)), Key::Int(3));
        assert_eq!(Key::from(json!(2.5)), Key::Float(2.5));
        assert_eq!(Key::from(json!("1:")), Key::Str("1:".to_string()));
        assert_eq!(
            selector(json!([true, false, true])),
            Selector::Mask(vec![true, false, true])
        );
        assert_eq!(selector(json!([0, -1])), Selector::IndexList(vec![0, -1]));
        assert_eq!(kind(json!({"a": 1})), crate::ErrorKind::InvalidKey);
        assert_eq!(kind(json!(null)), crate::ErrorKind::InvalidKey);
    }

    #[test]
    fn test_selector_variant_accessors() {
        let key = Key::from(Selector::Mask(vec![true]));
        assert!(key.is_selector());
        assert_eq!(key.clone().into_selector(), Ok(Selector::Mask(vec![true])));
        assert_eq!(key.selector().unwrap(), Selector::Mask(vec![true]));
        assert!(Key::Int(0).into_selector().is_err());
        assert_eq!(
            Key::from("1:").selector().unwrap(),
            Selector::Slice(Slice::new(Some(1), None, None))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Key::List(vec![Key::Int(1), Key::Str("a".into()), Key::Null]).to_string(),
            "[1, a, null]"
        );
        assert_eq!(
            Key::Map(vec![("k".to_string(), Key::Bool(true))]).to_string(),
            "{k: true}"
        );
        assert_eq!(Key::from(Selector::Mask(vec![true])).to_string(), "[true]");
    }
}
