//! Validators and their composition.
//!
//! This module provides the [`Valuer`] rule chain for a single field, the
//! branch-based [`Matcher`], collection iteration through
//! [`Valuer::every`] and [`Valuer::some`], and the combinators that run
//! several validators together.
//!
//! # Key Components
//!
//! - [`Valuer`] - requirements for empty values, rules for everything else
//! - [`Matcher`] - picks a rule set by comparing the value with candidates
//! - [`Outcome`] - what custom rules and element handlers return
//! - [`validate`], [`check`], [`every`], [`some`] - combinators
//! - [`IndexBy`], [`Checker`], [`FieldMap`] - adapters
//!
//! # Examples
//!
//! ```
//! use field_rail::prelude::*;
//!
//! let form = FieldMap::new([("username", "ann"), ("password", "hunter2")]);
//!
//! let result = validate(&[
//!     &form.field("username", "Username").required().length_between(3, 16),
//!     &form.field("password", "Password").required().min_length(8),
//!     &form.field("email", "Email").required(),
//! ]);
//!
//! let errors = result.unwrap_err().into_errors();
//! let codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
//! assert_eq!(codes, ["min_length", "required"]);
//! ```
mod compose;
mod iter;
mod matcher;
mod outcome;
mod rules;
mod valuer;

pub use self::compose::{
    check, every, some, validate, AllOf, Alternatives, AnyOf, Checker, FieldMap, IndexBy,
};
pub use self::iter::Item;
pub use self::matcher::Matcher;
pub use self::outcome::Outcome;
pub use self::valuer::{Subject, Valuer};
