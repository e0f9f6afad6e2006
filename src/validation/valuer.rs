use std::borrow::Cow;
use std::fmt;

use crate::codes;
use crate::macros::debug_event;
use crate::traits::Validatable;
use crate::types::{BoxError, Error, ErrorOption, Failure, Params};
use crate::validation::{Matcher, Outcome};
use crate::value::{Kind, Value};

/// The `(field, label, value)` triple a validator is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    field: String,
    label: String,
    value: Value,
}

impl Subject {
    pub fn new(
        value: impl Into<Value>,
        field: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self { field: field.into(), label: label.into(), value: value.into() }
    }

    #[inline]
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// A fresh, rule-less validator over a copy of this subject.
    #[must_use]
    pub fn valuer<'a>(&self) -> Valuer<'a> {
        Valuer::from_subject(self.clone())
    }

    /// A new error for `code` bound to this subject.
    #[must_use]
    pub fn error(&self, code: impl Into<Cow<'static, str>>) -> Error {
        Error::new(code).with_subject(self.field.as_str(), self.label.as_str(), self.value.clone())
    }
}

/// Error-building context handed to a rule while it runs.
pub(crate) struct Scope<'s> {
    subject: &'s Subject,
    code: &'s Cow<'static, str>,
    params: &'s Params,
    options: &'s [ErrorOption],
}

impl Scope<'_> {
    #[inline]
    pub(crate) fn subject(&self) -> &Subject {
        self.subject
    }

    fn error(&self) -> Error {
        self.subject.error(self.code.clone()).with_params(self.params)
    }

    /// The rule's own error with its configured options.
    pub(crate) fn reject(&self) -> Failure {
        self.error().with_options(self.options).into()
    }

    /// Like [`Scope::reject`] with one extra parameter, still overridable
    /// by the configured options.
    pub(crate) fn reject_with(&self, key: &'static str, value: impl Into<Value>) -> Failure {
        self.error().with_param(key, value).with_options(self.options).into()
    }

    /// Engine errors pass through, foreign errors become the cause of the
    /// rule's error.
    pub(crate) fn wrap(&self, error: BoxError) -> Failure {
        match Failure::recognize(error) {
            Ok(failure) => failure,
            Err(foreign) => self.error().with_options(self.options).with_cause(foreign).into(),
        }
    }

    pub(crate) fn resolve(&self, outcome: Outcome<'_>) -> Result<(), Failure> {
        match outcome {
            Outcome::Pass => Ok(()),
            Outcome::Fail => Err(self.reject()),
            Outcome::Error(error) => Err(self.wrap(error)),
            Outcome::Invalid(failure) => Err(failure),
            Outcome::Nested(validator) => validator.validate(),
        }
    }
}

type CheckFn<'a> = dyn Fn(&Value, &Scope<'_>) -> Result<(), Failure> + Send + Sync + 'a;

struct Entry<'a> {
    code: Cow<'static, str>,
    params: Params,
    options: Vec<ErrorOption>,
    check: Box<CheckFn<'a>>,
}

impl Entry<'_> {
    fn run(&self, subject: &Subject, value: &Value) -> Result<(), Failure> {
        let scope = Scope {
            subject,
            code: &self.code,
            params: &self.params,
            options: &self.options,
        };
        (self.check)(value, &scope)
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Require(usize),
    Rule(usize),
}

/// Rule-chain builder and evaluator for one field.
///
/// Requirements run only when the value [is empty](Value::is_empty), rules
/// only when it is not. Rules see the value with one optional level
/// dereferenced; an absent optional passes. Evaluation stops at the first
/// failing check, so a valuer reports at most one error.
///
/// # Examples
///
/// ```
/// use field_rail::prelude::*;
///
/// let name = Valuer::new("al", "name", "Name").required().min_length(3);
/// let err = name.validate().unwrap_err();
/// assert_eq!(err.first().map(|e| e.code()), Some("min_length"));
///
/// let missing = Valuer::new("", "name", "Name").required().min_length(3);
/// let err = missing.validate().unwrap_err();
/// assert_eq!(err.first().map(|e| e.code()), Some("required"));
///
/// let optional = Valuer::new(None::<String>, "nick", "Nickname").min_length(3);
/// assert!(optional.validate().is_ok());
/// ```
pub struct Valuer<'a> {
    subject: Subject,
    requires: Vec<Entry<'a>>,
    rules: Vec<Entry<'a>>,
    last: Option<Slot>,
}

impl<'a> Valuer<'a> {
    pub fn new(
        value: impl Into<Value>,
        field: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self::from_subject(Subject::new(value, field, label))
    }

    pub fn from_subject(subject: Subject) -> Self {
        Self { subject, requires: Vec::new(), rules: Vec::new(), last: None }
    }

    #[inline]
    #[must_use]
    pub fn field(&self) -> &str {
        self.subject.field()
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        self.subject.label()
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        self.subject.value()
    }

    #[inline]
    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    fn push_require<F>(mut self, code: &'static str, check: F) -> Self
    where
        F: Fn(&Value, &Scope<'_>) -> Result<(), Failure> + Send + Sync + 'a,
    {
        self.last = Some(Slot::Require(self.requires.len()));
        self.requires.push(Entry {
            code: Cow::Borrowed(code),
            params: Params::new(),
            options: Vec::new(),
            check: Box::new(check),
        });
        self
    }

    pub(crate) fn push_rule<F>(
        mut self,
        code: impl Into<Cow<'static, str>>,
        params: Params,
        check: F,
    ) -> Self
    where
        F: Fn(&Value, &Scope<'_>) -> Result<(), Failure> + Send + Sync + 'a,
    {
        self.last = Some(Slot::Rule(self.rules.len()));
        self.rules.push(Entry {
            code: code.into(),
            params,
            options: Vec::new(),
            check: Box::new(check),
        });
        self
    }

    /// Adds an error option to the most recently added requirement or rule.
    ///
    /// Does nothing when there is none. That is the case right after a
    /// [`when`](Valuer::when) or [`matching`](Valuer::matching): their rules
    /// report the errors of the nested validator unchanged.
    #[must_use]
    pub fn with_option(mut self, option: ErrorOption) -> Self {
        let entry = match self.last {
            Some(Slot::Require(i)) => self.requires.get_mut(i),
            Some(Slot::Rule(i)) => self.rules.get_mut(i),
            None => None,
        };
        if let Some(entry) = entry {
            entry.options.push(option);
        }
        self
    }

    /// Overrides the message template of the last requirement or rule.
    #[must_use]
    pub fn with_format(self, template: impl Into<String>) -> Self {
        self.with_option(ErrorOption::format(template))
    }

    #[must_use]
    pub fn with_param(self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.with_option(ErrorOption::param(key, value))
    }

    #[must_use]
    pub fn with_code(self, code: impl Into<Cow<'static, str>>) -> Self {
        self.with_option(ErrorOption::code(code))
    }

    /// The value must not be empty.
    #[must_use]
    pub fn required(self) -> Self {
        self.push_require(codes::REQUIRED, |_, scope| Err(scope.reject()))
    }

    /// The value must not be empty when `condition` holds.
    #[must_use]
    pub fn required_if(self, condition: bool) -> Self {
        self.push_require(codes::REQUIRED_IF, move |_, scope| {
            if condition {
                Err(scope.reject())
            } else {
                Ok(())
            }
        })
    }

    /// The value must not be empty when all of `others` are non-empty.
    ///
    /// An empty list of other values never makes the field required.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::prelude::*;
    ///
    /// let confirm = Valuer::new("", "confirm", "Confirmation").required_with(["secret"]);
    /// assert!(confirm.validate().is_err());
    ///
    /// let confirm = Valuer::new("", "confirm", "Confirmation").required_with(["secret", ""]);
    /// assert!(confirm.validate().is_ok());
    /// ```
    #[must_use]
    pub fn required_with<I>(self, others: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let others: Vec<Value> = others.into_iter().map(Into::into).collect();
        self.push_require(codes::REQUIRED_WITH, move |_, scope| {
            if !others.is_empty() && others.iter().all(|v| !v.is_empty()) {
                Err(scope.reject())
            } else {
                Ok(())
            }
        })
    }

    /// Adds a rule whose check returns anything convertible into an
    /// [`Outcome`].
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::prelude::*;
    ///
    /// let port = Valuer::new("80a", "port", "Port")
    ///     .custom("is_port", |v| v.to_text().parse::<u16>());
    ///
    /// let err = port.validate().unwrap_err();
    /// let err = err.first().unwrap();
    /// assert_eq!(err.code(), "is_port");
    /// assert_eq!(err.to_string(), "invalid digit found in string");
    /// ```
    #[must_use]
    pub fn custom<F, O>(self, code: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value) -> O + Send + Sync + 'a,
        O: Into<Outcome<'a>>,
    {
        self.push_rule(code, Params::new(), move |value, scope| scope.resolve(check(value).into()))
    }

    /// Adds a rule from a plain predicate.
    #[must_use]
    pub fn rule<F>(self, code: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'a,
    {
        self.push_rule(code, Params::new(), move |value, scope| {
            if predicate(value) {
                Ok(())
            } else {
                Err(scope.reject())
            }
        })
    }

    /// Adds a rule from a predicate over the display form of the value.
    #[must_use]
    pub fn string_rule<F>(self, code: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'a,
    {
        self.push_rule(code, Params::new(), move |value, scope| {
            if predicate(&value.to_text()) {
                Ok(())
            } else {
                Err(scope.reject())
            }
        })
    }

    /// Conditionally applies more rules.
    ///
    /// When `condition` holds, evaluation builds a fresh validator over the
    /// same subject, lets `configure` fill it and returns its outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::prelude::*;
    ///
    /// let is_admin = true;
    /// let password = Valuer::new("short", "password", "Password")
    ///     .when(is_admin, |v| v.min_length(12));
    /// assert!(password.validate().is_err());
    /// ```
    #[must_use]
    pub fn when<F>(mut self, condition: bool, configure: F) -> Self
    where
        F: Fn(Valuer<'a>) -> Valuer<'a> + Send + Sync + 'a,
    {
        if !condition {
            self.last = None;
            return self;
        }
        let mut this = self.push_rule(codes::WHEN, Params::new(), move |_, scope| {
            configure(scope.subject().valuer()).validate()
        });
        this.last = None;
        this
    }

    /// Delegates to a [`Matcher`] over the same subject.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::prelude::*;
    ///
    /// let kind = Valuer::new("phone", "kind", "Kind").matching(|m| {
    ///     m.branch("email", |v| v.contains("@"))
    ///         .branch("phone", |v| v.is_numeric())
    /// });
    /// assert_eq!(
    ///     kind.validate().unwrap_err().first().map(|e| e.code()),
    ///     Some("is_numeric"),
    /// );
    /// ```
    #[must_use]
    pub fn matching<F>(self, configure: F) -> Self
    where
        F: Fn(Matcher<'a>) -> Matcher<'a> + Send + Sync + 'a,
    {
        let mut this = self.push_rule(codes::MATCH, Params::new(), move |_, scope| {
            configure(Matcher::from_subject(scope.subject().clone())).validate()
        });
        this.last = None;
        this
    }

    /// The value must be of `kind`; the error carries the `kind` param.
    #[must_use]
    pub fn of_kind(self, kind: Kind) -> Self {
        self.kind_rule(codes::TYPEOF, kind)
    }

    pub(crate) fn kind_rule(self, code: &'static str, kind: Kind) -> Self {
        let params: Params = [("kind", kind.as_str())].into_iter().collect();
        self.push_rule(code, params, move |value, scope| {
            if value.kind() == kind {
                Ok(())
            } else {
                Err(scope.reject())
            }
        })
    }

    fn run(&self, entries: &[Entry<'a>], value: &Value) -> Result<(), Failure> {
        for entry in entries {
            entry.run(&self.subject, value).map_err(|failure| {
                debug_event!(field = %self.subject.field, code = %entry.code, "rule rejected");
                failure
            })?;
        }
        Ok(())
    }
}

impl Validatable for Valuer<'_> {
    fn validate(&self) -> Result<(), Failure> {
        let value = self.subject.value();
        if value.is_empty() {
            return self.run(&self.requires, value);
        }
        match value.deref_optional() {
            Some(inner) => self.run(&self.rules, inner),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Valuer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requires: Vec<&str> = self.requires.iter().map(|e| &*e.code).collect();
        let rules: Vec<&str> = self.rules.iter().map(|e| &*e.code).collect();
        f.debug_struct("Valuer")
            .field("subject", &self.subject)
            .field("requires", &requires)
            .field("rules", &rules)
            .finish()
    }
}
