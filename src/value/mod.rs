//! Dynamic values under validation.
//!
//! A [`Value`] is the closed set of shapes a validator can inspect: scalars,
//! strings, sequences, string-keyed maps, named records and optionals. Every
//! rule, matcher branch and message parameter works on this type, so the
//! engine never needs runtime reflection.
//!
//! # Examples
//!
//! ```
//! use field_rail::value::{Kind, Value};
//!
//! let tags = Value::from(vec!["rust", "validation"]);
//! assert_eq!(tags.kind(), Kind::Seq);
//! assert_eq!(tags.len(), Some(2));
//!
//! assert!(Value::from("").is_empty());
//! assert!(Value::from(None::<i32>).is_empty());
//! assert!(!Value::from(0.5).is_empty());
//! ```
use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod compare;
mod record;

pub use record::Record;

/// A dynamically shaped value bound to a validator.
///
/// Signed integers are stored as [`Value::Int`], unsigned ones as
/// [`Value::Uint`]. [`Value::Optional`] models a pointer or `Option` that a
/// validator dereferences one level before running its rules.
///
/// With the `serde` feature, serialization emits plain JSON-like data: an
/// optional as its inner value or `null`, a record as a map of its fields.
/// Deserialization reads plain data only and is not a round trip. Integers
/// come back as [`Value::Int`] unless they exceed `i64`, objects as
/// [`Value::Map`], and `null` as [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(BTreeMap<String, Value>),
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Record(Record),
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Optional(Option<Box<Value>>),
}

/// Structural category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Seq,
    Map,
    Record,
    Optional,
}

impl Kind {
    /// Stable lowercase name, used as the `kind` message parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Seq => "seq",
            Kind::Map => "map",
            Kind::Record => "record",
            Kind::Optional => "optional",
        }
    }

    /// Parses a name produced by [`Kind::as_str`].
    #[must_use]
    pub fn parse(name: &str) -> Option<Kind> {
        let kind = match name {
            "null" => Kind::Null,
            "bool" => Kind::Bool,
            "int" => Kind::Int,
            "uint" => Kind::Uint,
            "float" => Kind::Float,
            "string" => Kind::String,
            "seq" => Kind::Seq,
            "map" => Kind::Map,
            "record" => Kind::Record,
            "optional" => Kind::Optional,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns `true` for the three numeric kinds.
    #[inline]
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Kind::Int | Kind::Uint | Kind::Float)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the structural category of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::String,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Record(_) => Kind::Record,
            Value::Optional(_) => Kind::Optional,
        }
    }

    /// Zero-value test deciding between requirements and rules.
    ///
    /// `Null`, `false`, numeric zero, `""`, empty sequences and maps, records
    /// whose fields are all empty, and optionals that are absent or wrap an
    /// empty value are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::value::{Record, Value};
    ///
    /// assert!(Value::Int(0).is_empty());
    /// assert!(Value::from(Some("")).is_empty());
    /// assert!(Value::from(Record::new("User").field("name", "")).is_empty());
    /// assert!(!Value::from(Record::new("User").field("name", "ann")).is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Uint(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::Seq(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
            Value::Record(record) => record.iter().all(|(_, v)| v.is_empty()),
            Value::Optional(inner) => inner.as_deref().map_or(true, Value::is_empty),
        }
    }

    /// Dereferences one optional level.
    ///
    /// Returns `None` for an absent optional and the value itself for every
    /// non-optional shape.
    #[must_use]
    pub fn deref_optional(&self) -> Option<&Value> {
        match self {
            Value::Optional(inner) => inner.as_deref(),
            other => Some(other),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as `i64` when it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Uint(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Returns any numeric value widened to `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Uint(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Length of strings (in chars), sequences, maps and records.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::Seq(items) => Some(items.len()),
            Value::Map(map) => Some(map.len()),
            Value::Record(record) => Some(record.len()),
            Value::Optional(Some(inner)) => inner.len(),
            _ => None,
        }
    }

    /// Looks up a map key or record field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            Value::Record(record) => record.get(key),
            Value::Optional(Some(inner)) => inner.get(key),
            _ => None,
        }
    }

    /// Display form used by string rules: strings as-is, anything else
    /// through [`Display`].
    #[must_use]
    pub fn to_text(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Value::Str(s) => std::borrow::Cow::Borrowed(s),
            other => std::borrow::Cow::Owned(other.to_string()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null | Value::Optional(None) => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Uint(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Record(record) => write!(f, "{record}"),
            Value::Optional(Some(inner)) => write!(f, "{inner}"),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            #[inline]
            fn from(n: $ty) -> Self {
                Value::Int(n as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            #[inline]
            fn from(n: $ty) -> Self {
                Value::Uint(n as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<char> for Value {
    #[inline]
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<()> for Value {
    #[inline]
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<Record> for Value {
    #[inline]
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::Optional(value.map(|v| Box::new(v.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Seq(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Value::Seq(iter.into_iter().map(Into::into).collect())
    }
}
