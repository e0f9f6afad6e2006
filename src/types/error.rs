use std::borrow::{Borrow, Cow};
use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use crate::codes;
use crate::translate::{self, Registry};
use crate::types::{BoxError, Params};
use crate::value::Value;

/// One option applied while constructing an [`Error`].
///
/// Options apply in call order: scalar attributes (format, code) are
/// overwritten by later options, parameters are merged.
///
/// # Examples
///
/// ```
/// use field_rail::types::{Error, ErrorOption};
///
/// let err = Error::new("min_length").with_options([
///     ErrorOption::param("min", 3),
///     ErrorOption::format("{label} is too short"),
///     ErrorOption::code("too_short"),
/// ]);
///
/// assert_eq!(err.code(), "too_short");
/// assert_eq!(err.format(), Some("{label} is too short"));
/// assert!(err.params().contains_key("min"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorOption {
    Format(String),
    Param(Cow<'static, str>, Value),
    Code(Cow<'static, str>),
}

impl ErrorOption {
    /// Overrides the message template of the error.
    #[inline]
    pub fn format(template: impl Into<String>) -> Self {
        Self::Format(template.into())
    }

    /// Adds or overwrites one named parameter.
    #[inline]
    pub fn param(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self::Param(key.into(), value.into())
    }

    /// Overrides the error code.
    #[inline]
    pub fn code(code: impl Into<Cow<'static, str>>) -> Self {
        Self::Code(code.into())
    }

    pub fn apply(&self, error: &mut Error) {
        match self {
            Self::Format(template) => error.format = Some(template.clone()),
            Self::Param(key, value) => {
                error.params.insert(key.clone(), value.clone());
            }
            Self::Code(code) => error.code = code.clone(),
        }
    }
}

/// A single validation failure.
///
/// Carries a stable `code`, the subject it was raised for (`field`, `label`,
/// `value`), an optional template override, named parameters and an optional
/// wrapped low-level cause. The display text is produced lazily, so the same
/// error can be rendered under different registries.
///
/// # Examples
///
/// ```
/// use field_rail::translate::Registry;
/// use field_rail::types::Error;
///
/// let err = Error::new("greater_than")
///     .with_subject("age", "age", 16)
///     .with_format("{label}必须大于{min}")
///     .with_param("min", 18);
///
/// assert_eq!(err.render(&Registry::new()), "age必须大于18");
/// assert_eq!(err.to_string(), "age必须大于18");
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    code: Cow<'static, str>,
    format: Option<String>,
    params: Params,
    field: String,
    label: String,
    value: Value,
    cause: Option<Arc<dyn StdError + Send + Sync>>,
}

impl Error {
    /// Creates an error for `code` with no subject attached.
    #[inline]
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            format: None,
            params: Params::new(),
            field: String::new(),
            label: String::new(),
            value: Value::Null,
            cause: None,
        }
    }

    /// Wraps a foreign error that has no validation context.
    ///
    /// The error gets the [`codes::OPAQUE`] code and displays as its cause.
    pub fn opaque(cause: impl Into<BoxError>) -> Self {
        Self::new(codes::OPAQUE).with_cause(cause)
    }

    /// Applies options in order.
    #[must_use]
    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<ErrorOption>,
    {
        for option in options {
            option.borrow().apply(&mut self);
        }
        self
    }

    #[must_use]
    pub fn with_format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Merges a whole parameter set, overwriting same-named params.
    #[must_use]
    pub fn with_params(mut self, params: &Params) -> Self {
        self.params.merge(params);
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Attaches a low-level cause, which then wins over the templated text
    /// when the error is displayed.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(Arc::from(cause.into()));
        self
    }

    /// Binds the subject the error was raised for.
    #[must_use]
    pub fn with_subject(
        mut self,
        field: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.field = field.into();
        self.label = label.into();
        self.value = value.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The per-instance template override, if any.
    #[inline]
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
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

    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Parameters handed to translators: the error's own params plus
    /// `label` and `value`, which take precedence.
    #[must_use]
    pub fn message_params(&self) -> Params {
        let mut params = self.params.clone();
        params.insert("label", self.label.as_str());
        params.insert("value", self.value.clone());
        params
    }

    /// Renders the templated message against `registry`, ignoring any cause.
    #[must_use]
    pub fn render(&self, registry: &Registry) -> String {
        registry.render(&self.code, self.format(), &self.message_params())
    }

    /// Renders the templated message against the process-wide registry.
    #[must_use]
    pub fn message(&self) -> String {
        self.render(&translate::global())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{cause}"),
            None => f.write_str(&self.message()),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn StdError + 'static))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Error", 5)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("field", self.field())?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("message", &self.to_string())?;
        state.serialize_field("params", &self.params)?;
        state.end()
    }
}
