//! Error model of the engine.
//!
//! An [`Error`] describes one failed check of one subject. [`Errors`] is an
//! ordered, flat collection of them, and [`Failure`] is what every
//! validator returns on the error side.
//!
//! # Examples
//!
//! ```
//! use field_rail::types::{Error, Errors};
//! use field_rail::translate::Registry;
//!
//! let mut errors = Errors::new();
//! errors.add(Error::new("required").with_subject("name", "Name", ""));
//! errors.add(Error::new("required").with_subject("email", "Email", ""));
//!
//! let registry = Registry::english();
//! let rendered: Vec<String> = errors.iter().map(|e| e.render(&registry)).collect();
//! assert_eq!(rendered, ["Name is required", "Email is required"]);
//! ```
use smallvec::SmallVec;

mod error;
mod errors;
mod failure;
mod params;

pub use error::{Error, ErrorOption};
pub use errors::{Errors, FieldGroup};
pub use failure::Failure;
pub use params::Params;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, which covers the common case of a
/// single failing rule.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Type-erased error accepted from user callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
