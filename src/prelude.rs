//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use field_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`record!`]
//! - **Validators**: [`Valuer`], [`Matcher`], [`IndexBy`], [`Checker`], [`FieldMap`]
//! - **Combinators**: [`validate`], [`check`], [`every`], [`some`]
//! - **Types**: [`Value`], [`Error`], [`Errors`], [`Failure`], [`Outcome`], [`Item`]
//! - **Traits**: [`Validatable`]
//!
//! # Examples
//!
//! ```
//! use field_rail::prelude::*;
//!
//! fn check_username(name: &str) -> Result<(), Failure> {
//!     Valuer::new(name, "username", "Username")
//!         .required()
//!         .length_between(3, 16)
//!         .is_alphanumeric()
//!         .validate()
//! }
//!
//! assert!(check_username("ann42").is_ok());
//! assert!(check_username("a!").is_err());
//! ```

// Macros
pub use crate::record;

// Validators and combinators
pub use crate::validation::{
    check, every, some, validate, Checker, FieldMap, IndexBy, Item, Matcher, Outcome, Valuer,
};

// Core types
pub use crate::types::{Error, ErrorOption, Errors, Failure};
pub use crate::value::{Kind, Value};

// Traits
pub use crate::traits::Validatable;
