//! Combinators over independent validators.
use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::error::Error as StdError;
use std::fmt::{self, Display};

use crate::codes;
use crate::traits::Validatable;
use crate::translate;
use crate::types::{BoxError, Error, ErrorOption, Errors, Failure, Params};
use crate::validation::Valuer;
use crate::value::{Record, Value};

/// Runs every validator and aggregates all failures.
///
/// # Examples
///
/// ```
/// use field_rail::prelude::*;
///
/// let name = Valuer::new("", "name", "Name").required();
/// let age = Valuer::new(12, "age", "Age").greater_equal_than(18);
/// let email = Valuer::new("a@b.c", "email", "Email").contains("@");
///
/// let errors = validate(&[&name, &age, &email]).unwrap_err().into_errors();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.get("age")[0].code(), "greater_equal_than");
/// ```
pub fn validate(validators: &[&dyn Validatable]) -> Result<(), Failure> {
    let mut errors = Errors::new();
    for validator in validators {
        errors.add_result(validator.validate());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into())
    }
}

/// Runs validators in order and returns the first failure.
pub fn check(validators: &[&dyn Validatable]) -> Result<(), Failure> {
    validators.iter().try_for_each(|validator| validator.validate())
}

/// Validator form of [`check`]: passes when all of its validators pass.
pub fn every<'r>(validators: &[&'r dyn Validatable]) -> AllOf<'r> {
    AllOf { validators: validators.to_vec() }
}

/// Passes when at least one validator passes.
///
/// Otherwise fails with code `any_of`; its message lists every collected
/// failure below the `any_of` header, and the collected errors are
/// reachable through [`source`](std::error::Error::source).
///
/// # Examples
///
/// ```
/// use field_rail::prelude::*;
///
/// let phone = Valuer::new("", "phone", "Phone").required();
/// let email = Valuer::new("", "email", "Email").required();
///
/// let failure = some(&[&phone, &email]).validate().unwrap_err();
/// assert_eq!(failure.first().map(|e| e.code()), Some("any_of"));
/// assert_eq!(
///     failure.to_string(),
///     "at least one of the following must pass:\n  Phone is required\n  Email is required",
/// );
/// ```
pub fn some<'r>(validators: &[&'r dyn Validatable]) -> AnyOf<'r> {
    AnyOf { validators: validators.to_vec() }
}

/// Created by [`every`].
#[derive(Clone)]
pub struct AllOf<'r> {
    validators: Vec<&'r dyn Validatable>,
}

impl Validatable for AllOf<'_> {
    fn validate(&self) -> Result<(), Failure> {
        check(&self.validators)
    }
}

impl fmt::Debug for AllOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOf").field("validators", &self.validators.len()).finish()
    }
}

/// Created by [`some`].
#[derive(Clone)]
pub struct AnyOf<'r> {
    validators: Vec<&'r dyn Validatable>,
}

impl Validatable for AnyOf<'_> {
    fn validate(&self) -> Result<(), Failure> {
        let mut errors = Errors::new();
        for validator in &self.validators {
            match validator.validate() {
                Ok(()) => return Ok(()),
                Err(failure) => errors.add(failure),
            }
        }
        if errors.is_empty() {
            return Ok(());
        }
        Err(Error::new(codes::ANY_OF).with_cause(Alternatives { errors }).into())
    }
}

impl fmt::Debug for AnyOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOf").field("validators", &self.validators.len()).finish()
    }
}

/// Cause of an `any_of` failure: the failures of every alternative.
#[derive(Debug, Clone)]
pub struct Alternatives {
    errors: Errors,
}

impl Alternatives {
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &Errors {
        &self.errors
    }
}

impl Display for Alternatives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&translate::global().render(codes::ANY_OF, None, &Params::new()))?;
        for line in self.errors.to_string().lines() {
            write!(f, "\n  {line}")?;
        }
        Ok(())
    }
}

impl StdError for Alternatives {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.errors)
    }
}

/// Selects the first fully populated group of values.
///
/// A group qualifies when it is non-empty and none of its members is
/// empty. The index of the chosen group is available through
/// [`IndexBy::selected`] after validation.
///
/// # Examples
///
/// ```
/// use field_rail::prelude::*;
///
/// let login = IndexBy::new([vec!["", ""], vec!["ann", "secret"]]);
/// assert!(login.validate().is_ok());
/// assert_eq!(login.selected(), Some(1));
///
/// let partial = IndexBy::new([vec!["ann", ""]]);
/// assert_eq!(partial.validate().unwrap_err().first().map(|e| e.code()), Some("index_by"));
/// assert_eq!(partial.selected(), None);
/// ```
#[derive(Debug, Clone)]
pub struct IndexBy {
    groups: Vec<Vec<Value>>,
    options: Vec<ErrorOption>,
    selected: Cell<Option<usize>>,
}

impl IndexBy {
    pub fn new<I, G>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator,
        G::Item: Into<Value>,
    {
        Self {
            groups: groups
                .into_iter()
                .map(|group| group.into_iter().map(Into::into).collect())
                .collect(),
            options: Vec::new(),
            selected: Cell::new(None),
        }
    }

    #[must_use]
    pub fn with_option(mut self, option: ErrorOption) -> Self {
        self.options.push(option);
        self
    }

    #[must_use]
    pub fn with_format(self, template: impl Into<String>) -> Self {
        self.with_option(ErrorOption::format(template))
    }

    #[must_use]
    pub fn with_param(
        self,
        key: impl Into<std::borrow::Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Self {
        self.with_option(ErrorOption::param(key, value))
    }

    /// Index of the group chosen by the last validation.
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected.get()
    }
}

impl Validatable for IndexBy {
    fn validate(&self) -> Result<(), Failure> {
        let selected = self
            .groups
            .iter()
            .position(|group| !group.is_empty() && group.iter().all(|v| !v.is_empty()));
        self.selected.set(selected);
        match selected {
            Some(_) => Ok(()),
            None => Err(Error::new(codes::INDEX_BY).with_options(&self.options).into()),
        }
    }
}

/// A closure acting as a validator.
///
/// Engine errors returned by the closure pass through, other errors become
/// [opaque](Error::opaque) errors.
///
/// # Examples
///
/// ```
/// use field_rail::prelude::*;
///
/// let unique = Checker::new(|| -> Result<(), std::io::Error> {
///     Err(std::io::Error::other("lookup failed"))
/// });
/// let failure = unique.validate().unwrap_err();
/// assert_eq!(failure.first().map(|e| e.code()), Some("opaque"));
/// assert_eq!(failure.to_string(), "lookup failed");
/// ```
pub struct Checker<'a> {
    check: Box<dyn Fn() -> Result<(), Failure> + 'a>,
}

impl<'a> Checker<'a> {
    pub fn new<F, E>(check: F) -> Self
    where
        F: Fn() -> Result<(), E> + 'a,
        E: Into<BoxError>,
    {
        Self {
            check: Box::new(move || {
                check().map_err(|error| {
                    Failure::recognize(error.into())
                        .unwrap_or_else(|foreign| Error::opaque(foreign).into())
                })
            }),
        }
    }

    /// Binds `value` to a check over it.
    pub fn wrap<F, E>(value: impl Into<Value>, check: F) -> Self
    where
        F: Fn(&Value) -> Result<(), E> + 'a,
        E: Into<BoxError>,
    {
        let value = value.into();
        Self::new(move || check(&value))
    }
}

impl Validatable for Checker<'_> {
    fn validate(&self) -> Result<(), Failure> {
        (self.check)()
    }
}

impl fmt::Debug for Checker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Checker(..)")
    }
}

/// Key-based source of validators, e.g. for decoded form data.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use field_rail::prelude::*;
///
/// let form = FieldMap::from(HashMap::from([("name", "ann")]));
///
/// assert!(form.field("name", "Name").required().validate().is_ok());
/// assert!(form.field("email", "Email").required().validate().is_err());
/// assert_eq!(form.field("email", "Email").value(), &Value::Null);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    data: BTreeMap<String, Value>,
}

impl FieldMap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self { data: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// A validator over the value of `name`, or over [`Value::Null`] when
    /// the key is absent.
    #[must_use]
    pub fn field<'a>(&self, name: &str, label: impl Into<String>) -> Valuer<'a> {
        let value = self.data.get(name).cloned().unwrap_or_default();
        Valuer::new(value, name, label)
    }
}

impl<K: Into<String>, V: Into<Value>, S> From<HashMap<K, V, S>> for FieldMap {
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::new(map)
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for FieldMap {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::new(map)
    }
}

impl From<Record> for FieldMap {
    fn from(record: Record) -> Self {
        Self::new(record.iter().map(|(name, value)| (name, value.clone())))
    }
}
