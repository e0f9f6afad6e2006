use std::borrow::Cow;

use smallvec::SmallVec;

use crate::value::Value;

/// Named message parameters, e.g. `{min: 3}`.
///
/// Keys are unique: inserting an existing key overwrites its value in place.
/// Iteration order is insertion order but carries no meaning. Backed by a
/// `SmallVec` since most errors carry zero to three parameters.
///
/// # Examples
///
/// ```
/// use field_rail::types::Params;
/// use field_rail::value::Value;
///
/// let mut params = Params::new();
/// params.insert("min", 3);
/// params.insert("min", 5);
///
/// assert_eq!(params.len(), 1);
/// assert_eq!(params.get("min"), Some(&Value::Int(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Params {
    entries: SmallVec<[(Cow<'static, str>, Value); 4]>,
}

impl Params {
    #[inline]
    pub fn new() -> Self {
        Self { entries: SmallVec::new() }
    }

    /// Inserts or overwrites a parameter, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (&**k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| &**k)
    }

    /// Copies every entry of `other` into `self`, overwriting same-named keys.
    pub fn merge(&mut self, other: &Params) {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Params {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(&**key, value)?;
        }
        map.end()
    }
}
