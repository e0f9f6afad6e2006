use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt::{self, Display};

use crate::types::{BoxError, Error, ErrorVec, Failure};

/// Ordered collection of validation errors.
///
/// Adding another collection appends its elements, so collections never
/// nest. The same field may appear several times.
///
/// # Examples
///
/// ```
/// use field_rail::types::{Error, Errors};
///
/// let mut inner = Errors::new();
/// inner.add(Error::new("required").with_subject("name", "Name", ""));
/// inner.add(Error::new("min_length").with_subject("name", "Name", "a"));
///
/// let mut errors = Errors::new();
/// errors.add(Error::new("required").with_subject("age", "Age", 0));
/// errors.add(inner);
///
/// assert_eq!(errors.len(), 3);
/// assert_eq!(errors.get("name").len(), 2);
/// assert_eq!(errors.groups()[0].field(), "age");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Errors {
    errors: ErrorVec<Error>,
}

/// Errors of one field, in their original relative order.
#[derive(Debug, Clone)]
pub struct FieldGroup<'e> {
    field: &'e str,
    errors: Vec<&'e Error>,
}

impl<'e> FieldGroup<'e> {
    #[inline]
    #[must_use]
    pub fn field(&self) -> &'e str {
        self.field
    }

    #[inline]
    #[must_use]
    pub fn errors(&self) -> &[&'e Error] {
        &self.errors
    }
}

impl Errors {
    #[inline]
    pub fn new() -> Self {
        Self { errors: ErrorVec::new() }
    }

    /// Adds one error or flattens a whole collection into this one.
    pub fn add(&mut self, failure: impl Into<Failure>) {
        match failure.into() {
            Failure::Single(error) => self.errors.push(error),
            Failure::Multiple(errors) => self.errors.extend(errors.errors),
        }
    }

    /// Adds the failure of a validation result; `Ok` is a no-op.
    pub fn add_result(&mut self, result: Result<(), Failure>) {
        if let Err(failure) = result {
            self.add(failure);
        }
    }

    /// Adds an arbitrary boxed error.
    ///
    /// Engine errors are recognised and flattened, anything else becomes an
    /// [opaque](Error::opaque) error without field or label.
    pub fn add_raw(&mut self, error: BoxError) {
        match Failure::recognize(error) {
            Ok(failure) => self.add(failure),
            Err(foreign) => self.errors.push(Error::opaque(foreign)),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Error> {
        self.errors.first()
    }

    /// All errors raised for `field`, empty when there are none.
    #[must_use]
    pub fn get(&self, field: &str) -> Vec<&Error> {
        self.errors.iter().filter(|e| e.field() == field).collect()
    }

    /// All errors in insertion order.
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Error] {
        &self.errors
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Groups errors by field in first-seen field order.
    #[must_use]
    pub fn groups(&self) -> Vec<FieldGroup<'_>> {
        let mut groups: Vec<FieldGroup<'_>> = Vec::new();
        for error in &self.errors {
            match groups.iter_mut().find(|g| g.field == error.field()) {
                Some(group) => group.errors.push(error),
                None => groups.push(FieldGroup { field: error.field(), errors: vec![error] }),
            }
        }
        groups
    }

    /// Groups errors by field; bucket contents keep their relative order.
    #[must_use]
    pub fn to_map(&self) -> HashMap<&str, Vec<&Error>> {
        let mut map: HashMap<&str, Vec<&Error>> = HashMap::new();
        for error in &self.errors {
            map.entry(error.field()).or_default().push(error);
        }
        map
    }
}

impl From<Error> for Errors {
    fn from(error: Error) -> Self {
        let mut errors = Errors::new();
        errors.add(error);
        errors
    }
}

impl FromIterator<Error> for Errors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self { errors: iter.into_iter().collect() }
    }
}

impl Extend<Error> for Errors {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl Display for Errors {
    /// One paragraph per field group: errors newline-joined inside a group,
    /// groups newline-separated, in first-seen field order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for (j, error) in group.errors.iter().enumerate() {
                if j > 0 {
                    f.write_str("\n")?;
                }
                write!(f, "{error}")?;
            }
        }
        Ok(())
    }
}

impl StdError for Errors {}

#[cfg(feature = "serde")]
impl serde::Serialize for Errors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.errors.iter())
    }
}
