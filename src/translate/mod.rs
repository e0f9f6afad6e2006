//! Message templates and translators.
//!
//! A [`Registry`] maps error codes to message templates and optional
//! translator functions. Messages are produced lazily: an [`Error`] keeps
//! its code and parameters and is rendered against a registry only when it
//! is displayed.
//!
//! Resolution for one error, strictly in this order:
//!
//! 1. the code has a translator: it receives the chosen template (explicit
//!    format, else the registered template, else `""`) and the parameters;
//! 2. otherwise the registered template is used when no explicit format was
//!    set, else the explicit format;
//! 3. a configured default translator turns that template into text;
//! 4. otherwise every `{name}` token is replaced by the display form of the
//!    parameter of that name.
//!
//! [`Error`]: crate::types::Error
//!
//! # Examples
//!
//! ```
//! use field_rail::translate::Registry;
//! use field_rail::types::Params;
//!
//! let mut registry = Registry::new();
//! registry.register("required", "{label} is required");
//!
//! let params: Params = [("label", "Name")].into_iter().collect();
//! assert_eq!(registry.render("required", None, &params), "Name is required");
//! assert_eq!(registry.render("unknown", Some("{label}?"), &params), "Name?");
//! ```
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::types::Params;

pub mod catalog;
mod global;

pub use global::{clear_default_translator, configure, global, install, set_default_translator};

/// Turns a template and its parameters into display text.
pub type Translator = Arc<dyn Fn(&str, &Params) -> String + Send + Sync>;

#[derive(Clone, Default)]
struct Entry {
    template: Option<Cow<'static, str>>,
    translator: Option<Translator>,
}

/// Per-code templates and translators plus an optional default translator.
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<Cow<'static, str>, Entry>,
    default_translator: Option<Translator>,
}

impl Registry {
    /// An empty registry: every message comes from explicit formats.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the English catalog.
    pub fn english() -> Self {
        let mut registry = Self::new();
        catalog::load_english(&mut registry);
        registry
    }

    /// Registry preloaded with the Simplified Chinese catalog.
    pub fn chinese() -> Self {
        let mut registry = Self::new();
        catalog::load_chinese(&mut registry);
        registry
    }

    /// Registers or replaces the template of `code`.
    pub fn register(
        &mut self,
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        self.entries.entry(code.into()).or_default().template = Some(template.into());
        self
    }

    /// Registers or replaces the translator of `code`. An existing template
    /// is kept and handed to the translator.
    pub fn register_translator<F>(
        &mut self,
        code: impl Into<Cow<'static, str>>,
        translator: F,
    ) -> &mut Self
    where
        F: Fn(&str, &Params) -> String + Send + Sync + 'static,
    {
        self.entries.entry(code.into()).or_default().translator = Some(Arc::new(translator));
        self
    }

    pub fn set_default_translator<F>(&mut self, translator: F) -> &mut Self
    where
        F: Fn(&str, &Params) -> String + Send + Sync + 'static,
    {
        self.default_translator = Some(Arc::new(translator));
        self
    }

    pub fn clear_default_translator(&mut self) -> &mut Self {
        self.default_translator = None;
        self
    }

    #[must_use]
    pub fn template(&self, code: &str) -> Option<&str> {
        self.entries.get(code)?.template.as_deref()
    }

    #[must_use]
    pub fn has_translator(&self, code: &str) -> bool {
        self.entries.get(code).is_some_and(|e| e.translator.is_some())
    }

    #[must_use]
    pub fn default_translator(&self) -> Option<&Translator> {
        self.default_translator.as_ref()
    }

    /// Renders the message of `code`; an empty `format` counts as unset.
    #[must_use]
    pub fn render(&self, code: &str, format: Option<&str>, params: &Params) -> String {
        let format = format.filter(|f| !f.is_empty());
        let entry = self.entries.get(code);
        let registered = entry.and_then(|e| e.template.as_deref());

        if let Some(translator) = entry.and_then(|e| e.translator.as_ref()) {
            return translator(format.or(registered).unwrap_or(""), params);
        }

        let template = match (format, registered) {
            (Some(format), _) => format,
            (None, Some(template)) => template,
            (None, None) => "",
        };
        match &self.default_translator {
            Some(translator) => translator(template, params),
            None => substitute(template, params),
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes: Vec<&str> = self.entries.keys().map(|k| &**k).collect();
        codes.sort_unstable();
        f.debug_struct("Registry")
            .field("codes", &codes)
            .field("default_translator", &self.default_translator.is_some())
            .finish()
    }
}

/// Replaces each `{name}` token with the display form of `params[name]`.
///
/// Substituted text is never scanned again and unknown tokens stay as they
/// are.
///
/// # Examples
///
/// ```
/// use field_rail::translate::substitute;
/// use field_rail::types::Params;
///
/// let params: Params = [("label", "age"), ("min", "{label}")].into_iter().collect();
/// assert_eq!(substitute("{label} > {min} {max}", &params), "age > {label} {max}");
/// ```
#[must_use]
pub fn substitute(template: &str, params: &Params) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let resolved = tail[1..]
            .find('}')
            .and_then(|close| params.get(&tail[1..=close]).map(|value| (close, value)));
        match resolved {
            Some((close, value)) => {
                out.push_str(&value.to_text());
                rest = &tail[close + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
