//! Ergonomic macros.
//!
//! - [`macro@crate::record`] - Builds a [`Record`](crate::value::Record) with
//!   struct-literal syntax, so a typed value can be handed to a validator
//!   without writing the field list twice.
//!
//! # Examples
//!
//! ```
//! use field_rail::prelude::*;
//!
//! let user = record!(User { name: "ann", email: "" });
//! let errors = Valuer::new(user, "user", "User")
//!     .every(|item| !item.value().is_empty())
//!     .validate()
//!     .unwrap_err();
//!
//! assert_eq!(errors.first().unwrap().params().get("key"), Some(&Value::from("email")));
//! ```

/// Builds a [`Record`](crate::value::Record) value.
///
/// Field order follows the literal. Values go through `Into<Value>`.
///
/// # Examples
///
/// ```
/// use field_rail::record;
/// use field_rail::value::Value;
///
/// let point = record!(Point { x: 1, y: -2 });
/// assert_eq!(point.name(), "Point");
/// assert_eq!(point.get("y"), Some(&Value::Int(-2)));
/// assert_eq!(point.to_string(), "Point{x: 1, y: -2}");
/// ```
#[macro_export]
macro_rules! record {
    ($name:ident { $($field:ident : $value:expr),* $(,)? }) => {
        $crate::value::Record::new(stringify!($name))
            $(.field(stringify!($field), $value))*
    };
}

/// Emits a `tracing` debug event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

pub(crate) use debug_event;
