use std::fmt::{self, Display};

use crate::value::Value;

/// A fixed-field record: a type name plus ordered `(field, value)` pairs.
///
/// Records stand in for structs when a validator iterates over "every field"
/// of an object. Build them with [`Record::field`] or the [`record!`](crate::record)
/// macro.
///
/// # Examples
///
/// ```
/// use field_rail::value::{Record, Value};
///
/// let user = Record::new("User").field("name", "ann").field("age", 31);
/// assert_eq!(user.len(), 2);
/// assert_eq!(user.get("age"), Some(&Value::Int(31)));
/// assert_eq!(user.to_string(), "User{name: ann, age: 31}");
/// ```
///
/// With the `serde` feature a record serializes as a map of its fields in
/// declaration order; the type name is not emitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    name: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new() }
    }

    /// Appends a field, replacing an earlier field with the same name in place.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(field, _)| field == name).map(|(_, value)| value)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.name)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
