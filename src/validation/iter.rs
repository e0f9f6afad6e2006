//! Collection iteration: [`Valuer::every`] and [`Valuer::some`].
use crate::codes;
use crate::types::Params;
use crate::validation::{Outcome, Valuer};
use crate::value::Value;

/// One element seen by an iteration handler.
///
/// Sequence elements carry an `index`, map entries and record fields carry a
/// `key`.
#[derive(Debug, Clone, Copy)]
pub struct Item<'v> {
    key: Option<&'v str>,
    index: Option<usize>,
    value: &'v Value,
}

impl<'v> Item<'v> {
    fn indexed(index: usize, value: &'v Value) -> Self {
        Self { key: None, index: Some(index), value }
    }

    fn keyed(key: &'v str, value: &'v Value) -> Self {
        Self { key: Some(key), index: None, value }
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<&'v str> {
        self.key
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &'v Value {
        self.value
    }

    /// A validator over a copy of this element.
    #[must_use]
    pub fn valuer<'a>(&self, field: impl Into<String>, label: impl Into<String>) -> Valuer<'a> {
        Valuer::new(self.value.clone(), field, label)
    }
}

fn items<'v>(value: &'v Value, policy: &str) -> Box<dyn Iterator<Item = Item<'v>> + 'v> {
    match value {
        Value::Seq(items) => Box::new(items.iter().enumerate().map(|(i, v)| Item::indexed(i, v))),
        Value::Map(map) => Box::new(map.iter().map(|(k, v)| Item::keyed(k, v))),
        Value::Record(record) => Box::new(record.iter().map(|(k, v)| Item::keyed(k, v))),
        other => panic!(
            "`{policy}` expects a sequence, map or record, got a {} value",
            other.kind()
        ),
    }
}

impl<'a> Valuer<'a> {
    /// Every element must pass `handler`.
    ///
    /// Stops at the first element that does not pass. A plain `false` fails
    /// with code `every` and an `index` (or `key`) param naming the element;
    /// a failing nested validator or engine error propagates unchanged.
    ///
    /// # Panics
    ///
    /// Panics during validation when the value is not a sequence, map or
    /// record.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::prelude::*;
    ///
    /// let scores = Valuer::new(vec![90, 75, -1], "scores", "Scores")
    ///     .every(|item| item.value().as_i64().is_some_and(|n| n >= 0));
    ///
    /// let failure = scores.validate().unwrap_err();
    /// let err = failure.first().unwrap();
    /// assert_eq!(err.code(), "every");
    /// assert_eq!(err.params().get("index"), Some(&Value::Uint(2)));
    /// ```
    #[must_use]
    pub fn every<F, O>(self, handler: F) -> Self
    where
        F: Fn(&Item<'_>) -> O + Send + Sync + 'a,
        O: Into<Outcome<'a>>,
    {
        self.push_rule(codes::EVERY, Params::new(), move |value, scope| {
            for item in items(value, codes::EVERY) {
                match handler(&item).into() {
                    Outcome::Fail => {
                        return Err(match (item.key, item.index) {
                            (Some(key), _) => scope.reject_with("key", key),
                            (None, index) => scope.reject_with("index", index.unwrap_or_default()),
                        });
                    }
                    outcome => scope.resolve(outcome)?,
                }
            }
            Ok(())
        })
    }

    /// At least one element must pass `handler`.
    ///
    /// Stops at the first success. A `false` or a failing nested validator
    /// just moves on to the next element; an engine error or a foreign error
    /// aborts at once. Fails with code `some` when no element passed.
    ///
    /// # Panics
    ///
    /// Panics during validation when the value is not a sequence, map or
    /// record.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::prelude::*;
    ///
    /// let emails = Valuer::new(vec!["a", "b@example.com"], "emails", "Emails")
    ///     .some(|item| item.valuer("email", "Email").contains("@"));
    /// assert!(emails.validate().is_ok());
    /// ```
    #[must_use]
    pub fn some<F, O>(self, handler: F) -> Self
    where
        F: Fn(&Item<'_>) -> O + Send + Sync + 'a,
        O: Into<Outcome<'a>>,
    {
        self.push_rule(codes::SOME, Params::new(), move |value, scope| {
            for item in items(value, codes::SOME) {
                match handler(&item).into() {
                    Outcome::Pass => return Ok(()),
                    Outcome::Fail => {}
                    Outcome::Nested(validator) => {
                        if validator.validate().is_ok() {
                            return Ok(());
                        }
                    }
                    outcome => scope.resolve(outcome)?,
                }
            }
            Err(scope.reject())
        })
    }
}
