use std::fmt;

use crate::traits::Validatable;
use crate::types::Failure;
use crate::validation::{Subject, Valuer};
use crate::value::Value;

type Handler<'a> = Box<dyn Fn(Valuer<'a>) -> Valuer<'a> + Send + Sync + 'a>;
type Equality<'a> = Box<dyn Fn(&Value, &Value) -> bool + Send + Sync + 'a>;

/// Branch-based validator: picks a rule set by comparing the subject value
/// against candidates.
///
/// Branches are scanned in insertion order and the first equal candidate
/// wins. Its handler configures a fresh [`Valuer`] over the same subject,
/// whose outcome becomes the matcher's outcome. Without a match the
/// fallback runs the same way; without a fallback the matcher passes.
///
/// # Examples
///
/// ```
/// use field_rail::prelude::*;
///
/// let plan = Matcher::new(2, "plan", "Plan")
///     .branch(1, |v| v.less_than(2))
///     .branch(2, |v| v.greater_than(5))
///     .fallback(|v| v.rule("unknown_plan", |_| false));
/// assert_eq!(plan.validate().unwrap_err().first().map(|e| e.code()), Some("greater_than"));
///
/// let unmatched = Matcher::new(3, "plan", "Plan").branch(1, |v| v.required());
/// assert!(unmatched.validate().is_ok());
/// ```
pub struct Matcher<'a> {
    subject: Subject,
    branches: Vec<(Value, Handler<'a>)>,
    fallback: Option<Handler<'a>>,
    equal: Equality<'a>,
}

impl<'a> Matcher<'a> {
    pub fn new(
        value: impl Into<Value>,
        field: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self::from_subject(Subject::new(value, field, label))
    }

    pub fn from_subject(subject: Subject) -> Self {
        Self {
            subject,
            branches: Vec::new(),
            fallback: None,
            equal: Box::new(|a: &Value, b: &Value| a == b),
        }
    }

    #[inline]
    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Adds a branch taken when the subject equals `candidate`.
    #[must_use]
    pub fn branch<F>(mut self, candidate: impl Into<Value>, handler: F) -> Self
    where
        F: Fn(Valuer<'a>) -> Valuer<'a> + Send + Sync + 'a,
    {
        self.branches.push((candidate.into(), Box::new(handler)));
        self
    }

    /// Sets the handler used when no branch matches.
    #[must_use]
    pub fn fallback<F>(mut self, handler: F) -> Self
    where
        F: Fn(Valuer<'a>) -> Valuer<'a> + Send + Sync + 'a,
    {
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Replaces the equality used to compare the subject with candidates.
    /// Defaults to strict `==`.
    #[must_use]
    pub fn compare<F>(mut self, equal: F) -> Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'a,
    {
        self.equal = Box::new(equal);
        self
    }

    /// Compares numbers by value regardless of their representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::prelude::*;
    ///
    /// let strict = Matcher::new(2u8, "n", "N").branch(2, |v| v.less_than(0));
    /// assert!(strict.validate().is_ok());
    ///
    /// let loose = Matcher::new(2u8, "n", "N").loose().branch(2, |v| v.less_than(0));
    /// assert!(loose.validate().is_err());
    /// ```
    #[must_use]
    pub fn loose(self) -> Self {
        self.compare(Value::loose_eq)
    }
}

impl Validatable for Matcher<'_> {
    fn validate(&self) -> Result<(), Failure> {
        let value = self.subject.value();
        let handler = self
            .branches
            .iter()
            .find(|(candidate, _)| (self.equal)(value, candidate))
            .map(|(_, handler)| handler)
            .or(self.fallback.as_ref());
        match handler {
            Some(handler) => handler(self.subject.valuer()).validate(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Matcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let candidates: Vec<&Value> =
            self.branches.iter().map(|(candidate, _)| candidate).collect();
        f.debug_struct("Matcher")
            .field("subject", &self.subject)
            .field("branches", &candidates)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
