//! Diagnostic key/value metadata attached to an [`ErrorValue`](crate::ErrorValue).
//!
//! [`ExtraInfo`] keeps keys unique with last-write-wins semantics while
//! preserving the position of the first insertion, so rendering is
//! deterministic regardless of how often a key is overwritten.
//!
//! # Examples
//!
//! ```
//! use control_core_error::{ExtraInfo, InfoValue};
//!
//! let mut info = ExtraInfo::new();
//! info.insert("udid", "A1B2");
//! info.insert("attempts", 3_u32);
//! info.insert("udid", "C3D4");
//!
//! assert_eq!(info.len(), 2);
//! assert_eq!(info.get("udid"), Some(&InfoValue::from("C3D4")));
//! ```
use core::fmt::{self, Display};
use std::collections::BTreeMap;

use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single diagnostic value.
///
/// Scalars cover the common cases; `List` and `Map` nest arbitrarily, so any
/// structured payload (paths, environment snapshots, device lists) fits.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum InfoValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<InfoValue>),
    /// Sorted by key.
    Map(BTreeMap<String, InfoValue>),
}

impl Display for InfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            },
        }
    }
}

impl From<&str> for InfoValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<&String> for InfoValue {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<String> for InfoValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<char> for InfoValue {
    #[inline]
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for InfoValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for InfoValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for InfoValue {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl<T: Into<InfoValue>> From<Vec<T>> for InfoValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<InfoValue>> From<&[T]> for InfoValue {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<InfoValue>> From<BTreeMap<K, V>> for InfoValue {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty; $($ty:ty),*) => {
        $(
            impl From<$ty> for InfoValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64; i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64; u8, u16, u32, u64, usize);

/// Ordered map of unique diagnostic keys.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraInfo {
    entries: ErrorVec<(String, InfoValue)>,
}

impl ExtraInfo {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self { entries: ErrorVec::new() }
    }

    /// Inserts `value` under `key`, returning the previous value if any.
    ///
    /// An overwritten key keeps its original position.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<InfoValue>
    where
        K: Into<String>,
        V: Into<InfoValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            },
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InfoValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a ExtraInfo {
    type Item = (&'a str, &'a InfoValue);
    type IntoIter = core::iter::Map<
        core::slice::Iter<'a, (String, InfoValue)>,
        fn(&'a (String, InfoValue)) -> (&'a str, &'a InfoValue),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn split(entry: &(String, InfoValue)) -> (&str, &InfoValue) {
            (entry.0.as_str(), &entry.1)
        }
        self.entries.iter().map(split as fn(&'a (String, InfoValue)) -> (&'a str, &'a InfoValue))
    }
}

impl<K, V> FromIterator<(K, V)> for ExtraInfo
where
    K: Into<String>,
    V: Into<InfoValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut info = Self::new();
        for (k, v) in iter {
            info.insert(k, v);
        }
        info
    }
}

impl Display for ExtraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
