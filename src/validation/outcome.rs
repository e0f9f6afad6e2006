use crate::traits::Validatable;
use crate::types::{BoxError, Error, Errors, Failure};
use crate::validation::{Matcher, Valuer};

/// Result of a custom rule or element handler.
///
/// Handlers usually return something convertible into an outcome: `bool`,
/// `()`, `Option<bool>`, a `Result`, an engine error or a nested validator.
///
/// | returned                     | outcome             |
/// |------------------------------|---------------------|
/// | `true`, `()`, `None`, `Ok(_)` | [`Outcome::Pass`]   |
/// | `false`                      | [`Outcome::Fail`]   |
/// | `Err(e)`                     | [`Outcome::Error`]  |
/// | `Error`, `Errors`, `Failure` | [`Outcome::Invalid`] |
/// | `Valuer`, `Matcher`          | [`Outcome::Nested`] |
///
/// # Examples
///
/// ```
/// use field_rail::validation::Outcome;
///
/// assert!(matches!(Outcome::from(true), Outcome::Pass));
/// assert!(matches!(Outcome::from(false), Outcome::Fail));
/// assert!(matches!(Outcome::from("x".parse::<i32>()), Outcome::Error(_)));
/// ```
pub enum Outcome<'a> {
    Pass,
    Fail,
    /// A low-level error. Engine errors inside are propagated unchanged,
    /// anything else is wrapped as the cause of the rule's error.
    Error(BoxError),
    /// A finished validation failure, propagated unchanged.
    Invalid(Failure),
    /// A validator evaluated in place of the rule.
    Nested(Box<dyn Validatable + 'a>),
}

impl Outcome<'_> {
    /// Wraps any error value.
    pub fn error(error: impl Into<BoxError>) -> Self {
        Outcome::Error(error.into())
    }

    #[inline]
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

impl std::fmt::Debug for Outcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pass => f.write_str("Pass"),
            Outcome::Fail => f.write_str("Fail"),
            Outcome::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Outcome::Invalid(failure) => f.debug_tuple("Invalid").field(failure).finish(),
            Outcome::Nested(_) => f.write_str("Nested(..)"),
        }
    }
}

impl From<bool> for Outcome<'_> {
    #[inline]
    fn from(pass: bool) -> Self {
        if pass {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

impl From<()> for Outcome<'_> {
    #[inline]
    fn from(_: ()) -> Self {
        Outcome::Pass
    }
}

impl From<Option<bool>> for Outcome<'_> {
    #[inline]
    fn from(pass: Option<bool>) -> Self {
        pass.map_or(Outcome::Pass, Outcome::from)
    }
}

impl From<Error> for Outcome<'_> {
    fn from(error: Error) -> Self {
        Outcome::Invalid(error.into())
    }
}

impl From<Errors> for Outcome<'_> {
    fn from(errors: Errors) -> Self {
        Outcome::Invalid(errors.into())
    }
}

impl From<Failure> for Outcome<'_> {
    fn from(failure: Failure) -> Self {
        Outcome::Invalid(failure)
    }
}

impl<T, E: Into<BoxError>> From<Result<T, E>> for Outcome<'_> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Outcome::Pass,
            Err(error) => Outcome::Error(error.into()),
        }
    }
}

impl<'a> From<Valuer<'a>> for Outcome<'a> {
    fn from(valuer: Valuer<'a>) -> Self {
        Outcome::Nested(Box::new(valuer))
    }
}

impl<'a> From<Matcher<'a>> for Outcome<'a> {
    fn from(matcher: Matcher<'a>) -> Self {
        Outcome::Nested(Box::new(matcher))
    }
}
