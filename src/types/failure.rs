use std::error::Error as StdError;
use std::fmt::{self, Display};

use crate::types::{BoxError, Error, Errors};

/// The error side of every validation: one [`Error`] or an [`Errors`]
/// collection.
///
/// A single [`Valuer`](crate::Valuer) reports at most one error;
/// [`validate`](crate::validate) aggregates independent validators into a
/// collection.
///
/// # Examples
///
/// ```
/// use field_rail::types::{Error, Errors, Failure};
///
/// let single = Failure::from(Error::new("required"));
/// assert_eq!(single.len(), 1);
///
/// let mut errors = Errors::new();
/// errors.add(Error::new("required"));
/// errors.add(Error::new("min_length"));
/// let many = Failure::from(errors);
/// assert_eq!(many.first().map(|e| e.code()), Some("required"));
/// assert_eq!(many.into_errors().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub enum Failure {
    Single(Error),
    Multiple(Errors),
}

impl Failure {
    /// Recovers an engine failure from a boxed error.
    ///
    /// Returns the original box untouched when it holds a foreign error type.
    pub fn recognize(error: BoxError) -> Result<Failure, BoxError> {
        let error = match error.downcast::<Failure>() {
            Ok(failure) => return Ok(*failure),
            Err(other) => other,
        };
        let error = match error.downcast::<Error>() {
            Ok(single) => return Ok(Failure::Single(*single)),
            Err(other) => other,
        };
        match error.downcast::<Errors>() {
            Ok(many) => Ok(Failure::Multiple(*many)),
            Err(other) => Err(other),
        }
    }

    /// Returns the single error, if this is not a collection.
    #[must_use]
    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Failure::Single(error) => Some(error),
            Failure::Multiple(_) => None,
        }
    }

    /// Returns the first error in reporting order.
    #[must_use]
    pub fn first(&self) -> Option<&Error> {
        match self {
            Failure::Single(error) => Some(error),
            Failure::Multiple(errors) => errors.first(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Failure::Single(_) => 1,
            Failure::Multiple(errors) => errors.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        match self {
            Failure::Single(error) => std::slice::from_ref(error).iter(),
            Failure::Multiple(errors) => errors.all().iter(),
        }
    }

    /// Flattens into a collection.
    #[must_use]
    pub fn into_errors(self) -> Errors {
        match self {
            Failure::Single(error) => Errors::from(error),
            Failure::Multiple(errors) => errors,
        }
    }
}

impl From<Error> for Failure {
    #[inline]
    fn from(error: Error) -> Self {
        Failure::Single(error)
    }
}

impl From<Errors> for Failure {
    #[inline]
    fn from(errors: Errors) -> Self {
        Failure::Multiple(errors)
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Single(error) => Display::fmt(error, f),
            Failure::Multiple(errors) => Display::fmt(errors, f),
        }
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Failure::Single(error) => error.source(),
            Failure::Multiple(_) => None,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Failure {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
