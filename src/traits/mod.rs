//! The evaluation seam shared by every validator.
//!
//! [`Valuer`](crate::Valuer), [`Matcher`](crate::Matcher), the composition
//! primitives and user types all implement [`Validatable`], which is what
//! lets them nest inside each other.
//!
//! # Examples
//!
//! ```
//! use field_rail::traits::Validatable;
//! use field_rail::types::{Error, Failure};
//!
//! struct Port(u16);
//!
//! impl Validatable for Port {
//!     fn validate(&self) -> Result<(), Failure> {
//!         if self.0 >= 1024 {
//!             Ok(())
//!         } else {
//!             Err(Error::new("privileged_port").with_subject("port", "Port", self.0).into())
//!         }
//!     }
//! }
//!
//! assert!(Port(8080).validate().is_ok());
//! assert_eq!(Port(80).validate().unwrap_err().first().map(|e| e.code()), Some("privileged_port"));
//! ```
use crate::types::Failure;

/// Something that can be validated.
pub trait Validatable {
    /// Evaluates the validator; `Ok(())` means valid.
    fn validate(&self) -> Result<(), Failure>;
}

impl<T: Validatable + ?Sized> Validatable for &T {
    #[inline]
    fn validate(&self) -> Result<(), Failure> {
        (**self).validate()
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    #[inline]
    fn validate(&self) -> Result<(), Failure> {
        (**self).validate()
    }
}
