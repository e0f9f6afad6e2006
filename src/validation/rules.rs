//! Built-in structural rules.
//!
//! Every rule is expressed on [`Value`]: lengths through [`Value::len`],
//! ordering through [`Value::compare`], equality through
//! [`Value::loose_eq`] and string checks through [`Value::to_text`]. Each
//! failure carries the rule's bounds as message parameters.
use std::cmp::Ordering;

use crate::codes;
use crate::types::{Failure, Params};
use crate::validation::valuer::Scope;
use crate::validation::Valuer;
use crate::value::{Kind, Value};

fn verdict(pass: bool, scope: &Scope<'_>) -> Result<(), Failure> {
    if pass {
        Ok(())
    } else {
        Err(scope.reject())
    }
}

impl<'a> Valuer<'a> {
    fn bounded<F>(self, code: &'static str, params: Params, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'a,
    {
        self.push_rule(code, params, move |value, scope| verdict(check(value), scope))
    }

    fn text<F>(self, code: &'static str, params: Params, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'a,
    {
        self.bounded(code, params, move |value| check(&value.to_text()))
    }

    fn ordered<F>(self, code: &'static str, params: Params, bound: Value, accept: F) -> Self
    where
        F: Fn(Ordering) -> bool + Send + Sync + 'a,
    {
        self.bounded(code, params, move |value| value.compare(&bound).is_some_and(&accept))
    }

    /// The value must be a string.
    #[must_use]
    pub fn is_string(self) -> Self {
        self.kind_rule(codes::IS_STRING, Kind::String)
    }

    /// The value must be a boolean or the text `"true"` / `"false"`.
    #[must_use]
    pub fn is_bool(self) -> Self {
        self.bounded(codes::IS_BOOL, Params::new(), |value| match value {
            Value::Bool(_) => true,
            Value::Str(s) => s.parse::<bool>().is_ok(),
            _ => false,
        })
    }

    /// The value must be an integer or a float.
    #[must_use]
    pub fn is_number(self) -> Self {
        self.bounded(codes::IS_NUMBER, Params::new(), |value| value.kind().is_numeric())
    }

    /// The value must be a number or text that parses as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::prelude::*;
    ///
    /// assert!(Valuer::new("-1.5", "x", "X").is_numeric().validate().is_ok());
    /// assert!(Valuer::new("1e", "x", "X").is_numeric().validate().is_err());
    /// ```
    #[must_use]
    pub fn is_numeric(self) -> Self {
        self.bounded(codes::IS_NUMERIC, Params::new(), |value| match value {
            Value::Str(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
            other => other.kind().is_numeric(),
        })
    }

    /// The value must not be empty.
    #[must_use]
    pub fn not_empty(self) -> Self {
        self.bounded(codes::NOT_EMPTY, Params::new(), |value| !value.is_empty())
    }

    /// Strings (in chars), sequences, maps and records must have exactly
    /// `length` elements.
    #[must_use]
    pub fn length(self, length: usize) -> Self {
        let params: Params = [("length", length)].into_iter().collect();
        self.bounded(codes::LENGTH, params, move |value| value.len() == Some(length))
    }

    #[must_use]
    pub fn min_length(self, min: usize) -> Self {
        let params: Params = [("min", min)].into_iter().collect();
        self.bounded(codes::MIN_LENGTH, params, move |value| value.len().is_some_and(|n| n >= min))
    }

    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        let params: Params = [("max", max)].into_iter().collect();
        self.bounded(codes::MAX_LENGTH, params, move |value| value.len().is_some_and(|n| n <= max))
    }

    #[must_use]
    pub fn length_between(self, min: usize, max: usize) -> Self {
        let params: Params = [("min", min), ("max", max)].into_iter().collect();
        self.bounded(codes::LENGTH_BETWEEN, params, move |value| {
            value.len().is_some_and(|n| (min..=max).contains(&n))
        })
    }

    /// The value must be greater than `min`.
    ///
    /// Numbers compare with numbers and strings with strings; anything
    /// incomparable fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::prelude::*;
    /// use field_rail::translate::Registry;
    ///
    /// let err = Valuer::new(16, "age", "Age").greater_than(18).validate().unwrap_err();
    /// let err = err.first().unwrap();
    /// assert_eq!(err.render(&Registry::english()), "Age must be greater than 18");
    /// ```
    #[must_use]
    pub fn greater_than(self, min: impl Into<Value>) -> Self {
        let min = min.into();
        let params: Params = [("min", min.clone())].into_iter().collect();
        self.ordered(codes::GREATER_THAN, params, min, Ordering::is_gt)
    }

    #[must_use]
    pub fn greater_equal_than(self, min: impl Into<Value>) -> Self {
        let min = min.into();
        let params: Params = [("min", min.clone())].into_iter().collect();
        self.ordered(codes::GREATER_EQUAL_THAN, params, min, Ordering::is_ge)
    }

    #[must_use]
    pub fn less_than(self, max: impl Into<Value>) -> Self {
        let max = max.into();
        let params: Params = [("max", max.clone())].into_iter().collect();
        self.ordered(codes::LESS_THAN, params, max, Ordering::is_lt)
    }

    #[must_use]
    pub fn less_equal_than(self, max: impl Into<Value>) -> Self {
        let max = max.into();
        let params: Params = [("max", max.clone())].into_iter().collect();
        self.ordered(codes::LESS_EQUAL_THAN, params, max, Ordering::is_le)
    }

    /// Inclusive range check.
    #[must_use]
    pub fn between(self, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        let (min, max) = (min.into(), max.into());
        let params: Params = [("min", min.clone()), ("max", max.clone())].into_iter().collect();
        self.bounded(codes::BETWEEN, params, move |value| {
            value.compare(&min).is_some_and(Ordering::is_ge)
                && value.compare(&max).is_some_and(Ordering::is_le)
        })
    }

    /// The value must be below `min` or above `max`.
    #[must_use]
    pub fn not_between(self, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        let (min, max) = (min.into(), max.into());
        let params: Params = [("min", min.clone()), ("max", max.clone())].into_iter().collect();
        self.bounded(codes::NOT_BETWEEN, params, move |value| {
            value.compare(&min).is_some_and(Ordering::is_lt)
                || value.compare(&max).is_some_and(Ordering::is_gt)
        })
    }

    #[must_use]
    pub fn equal(self, another: impl Into<Value>) -> Self {
        let another = another.into();
        let params: Params = [("another", another.clone())].into_iter().collect();
        self.bounded(codes::EQUAL, params, move |value| value.loose_eq(&another))
    }

    #[must_use]
    pub fn not_equal(self, another: impl Into<Value>) -> Self {
        let another = another.into();
        let params: Params = [("another", another.clone())].into_iter().collect();
        self.bounded(codes::NOT_EQUAL, params, move |value| !value.loose_eq(&another))
    }

    /// The value must equal one of `items`.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::prelude::*;
    /// use field_rail::translate::Registry;
    ///
    /// let err = Valuer::new("xl", "size", "Size").one_of(["s", "m", "l"]).validate().unwrap_err();
    /// assert_eq!(
    ///     err.first().unwrap().render(&Registry::english()),
    ///     "Size must be one of [s, m, l]",
    /// );
    /// ```
    #[must_use]
    pub fn one_of<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        let params: Params = [("items", Value::Seq(items.clone()))].into_iter().collect();
        self.bounded(codes::ONE_OF, params, move |value| {
            items.iter().any(|item| value.loose_eq(item))
        })
    }

    #[must_use]
    pub fn contains(self, substr: impl Into<String>) -> Self {
        let substr = substr.into();
        let params: Params = [("substr", substr.as_str())].into_iter().collect();
        self.text(codes::CONTAINS, params, move |s| s.contains(substr.as_str()))
    }

    /// The text must contain at least one of the characters in `chars`.
    #[must_use]
    pub fn contains_any(self, chars: impl Into<String>) -> Self {
        let chars = chars.into();
        let params: Params = [("chars", chars.as_str())].into_iter().collect();
        self.text(codes::CONTAINS_ANY, params, move |s| s.contains(|c: char| chars.contains(c)))
    }

    #[must_use]
    pub fn contains_char(self, ch: char) -> Self {
        let params: Params = [("char", ch)].into_iter().collect();
        self.text(codes::CONTAINS_CHAR, params, move |s| s.contains(ch))
    }

    #[must_use]
    pub fn excludes(self, substr: impl Into<String>) -> Self {
        let substr = substr.into();
        let params: Params = [("substr", substr.as_str())].into_iter().collect();
        self.text(codes::EXCLUDES, params, move |s| !s.contains(substr.as_str()))
    }

    /// The text must contain none of the characters in `chars`.
    #[must_use]
    pub fn excludes_all(self, chars: impl Into<String>) -> Self {
        let chars = chars.into();
        let params: Params = [("chars", chars.as_str())].into_iter().collect();
        self.text(codes::EXCLUDES_ALL, params, move |s| !s.contains(|c: char| chars.contains(c)))
    }

    #[must_use]
    pub fn excludes_char(self, ch: char) -> Self {
        let params: Params = [("char", ch)].into_iter().collect();
        self.text(codes::EXCLUDES_CHAR, params, move |s| !s.contains(ch))
    }

    #[must_use]
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let params: Params = [("prefix", prefix.as_str())].into_iter().collect();
        self.text(codes::STARTS_WITH, params, move |s| s.starts_with(prefix.as_str()))
    }

    #[must_use]
    pub fn starts_not_with(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let params: Params = [("prefix", prefix.as_str())].into_iter().collect();
        self.text(codes::STARTS_NOT_WITH, params, move |s| !s.starts_with(prefix.as_str()))
    }

    #[must_use]
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let params: Params = [("suffix", suffix.as_str())].into_iter().collect();
        self.text(codes::ENDS_WITH, params, move |s| s.ends_with(suffix.as_str()))
    }

    #[must_use]
    pub fn ends_not_with(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let params: Params = [("suffix", suffix.as_str())].into_iter().collect();
        self.text(codes::ENDS_NOT_WITH, params, move |s| !s.ends_with(suffix.as_str()))
    }

    /// The text must have no uppercase letters.
    #[must_use]
    pub fn is_lower(self) -> Self {
        self.text(codes::IS_LOWER, Params::new(), |s| !s.chars().any(char::is_uppercase))
    }

    /// The text must have no lowercase letters.
    #[must_use]
    pub fn is_upper(self) -> Self {
        self.text(codes::IS_UPPER, Params::new(), |s| !s.chars().any(char::is_lowercase))
    }

    #[must_use]
    pub fn is_ascii(self) -> Self {
        self.text(codes::IS_ASCII, Params::new(), |s| s.is_ascii())
    }

    /// ASCII letters only.
    #[must_use]
    pub fn is_alpha(self) -> Self {
        self.text(codes::IS_ALPHA, Params::new(), |s| {
            !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
        })
    }

    /// ASCII letters and digits only.
    #[must_use]
    pub fn is_alphanumeric(self) -> Self {
        self.text(codes::IS_ALPHANUMERIC, Params::new(), |s| {
            !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
        })
    }
}
