//! Composable field validation with structured, localizable errors.
//!
//! A validator is bound to a value plus a machine field name and a
//! human-readable label. Callers chain rules onto it, evaluate it, and get
//! back errors that carry a stable code, the field they belong to and the
//! parameters needed to render a message in any language.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `field_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## A Single Field
//!
//! ```
//! use field_rail::prelude::*;
//!
//! let age = Valuer::new(16, "age", "Age").required().between(18, 130);
//!
//! let failure = age.validate().unwrap_err();
//! assert_eq!(failure.to_string(), "Age must be between 18 and 130");
//! ```
//!
//! ## Collecting Errors Across Fields
//!
//! ```
//! use field_rail::prelude::*;
//!
//! let signup = record!(Signup { name: "", email: "ann.example.com", tags: vec!["a", ""] });
//! let form = FieldMap::from(signup);
//!
//! let result = validate(&[
//!     &form.field("name", "Name").required(),
//!     &form.field("email", "Email").required().contains("@"),
//!     &form.field("tags", "Tags").every(|item| !item.value().is_empty()),
//! ]);
//!
//! let errors = result.unwrap_err().into_errors();
//! assert_eq!(errors.len(), 3);
//! assert_eq!(errors.get("email")[0].to_string(), "Email must contain '@'");
//! assert_eq!(errors.get("tags")[0].params().get("index"), Some(&Value::Uint(1)));
//! ```
//!
//! ## Localized Messages
//!
//! ```
//! use field_rail::prelude::*;
//! use field_rail::translate::Registry;
//!
//! let failure = Valuer::new("", "name", "用户名").required().validate().unwrap_err();
//! let err = failure.first().unwrap();
//!
//! assert_eq!(err.render(&Registry::chinese()), "用户名为必填字段");
//! assert_eq!(err.render(&Registry::english()), "用户名 is required");
//! ```

/// Error codes of the built-in rules and combinators
pub mod codes;
/// Ergonomic macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The `Validatable` evaluation trait
pub mod traits;
/// Message templates, translators and the process-wide registry
pub mod translate;
/// Error, Errors and their building blocks
pub mod types;
/// Validators, iteration and composition
pub mod validation;
/// Dynamic value model
pub mod value;

pub use traits::Validatable;
pub use translate::Registry;
pub use types::{BoxError, Error, ErrorOption, ErrorVec, Errors, Failure, FieldGroup, Params};
pub use validation::*;
pub use value::{Kind, Record, Value};
