//! Error codes produced by the built-in requirements, rules and combinators.
//!
//! Codes are the stable identity of a failure and the key into the
//! translation [`Registry`](crate::translate::Registry).

pub const REQUIRED: &str = "required";
pub const REQUIRED_IF: &str = "required_if";
pub const REQUIRED_WITH: &str = "required_with";

pub const TYPEOF: &str = "typeof";
pub const IS_STRING: &str = "is_string";
pub const IS_BOOL: &str = "is_bool";
pub const IS_NUMBER: &str = "is_number";
pub const IS_NUMERIC: &str = "is_numeric";

pub const NOT_EMPTY: &str = "not_empty";
pub const LENGTH: &str = "length";
pub const MIN_LENGTH: &str = "min_length";
pub const MAX_LENGTH: &str = "max_length";
pub const LENGTH_BETWEEN: &str = "length_between";

pub const GREATER_THAN: &str = "greater_than";
pub const GREATER_EQUAL_THAN: &str = "greater_equal_than";
pub const LESS_THAN: &str = "less_than";
pub const LESS_EQUAL_THAN: &str = "less_equal_than";
pub const BETWEEN: &str = "between";
pub const NOT_BETWEEN: &str = "not_between";
pub const EQUAL: &str = "equal";
pub const NOT_EQUAL: &str = "not_equal";
pub const ONE_OF: &str = "one_of";

pub const CONTAINS: &str = "contains";
pub const CONTAINS_ANY: &str = "contains_any";
pub const CONTAINS_CHAR: &str = "contains_char";
pub const EXCLUDES: &str = "excludes";
pub const EXCLUDES_ALL: &str = "excludes_all";
pub const EXCLUDES_CHAR: &str = "excludes_char";
pub const STARTS_WITH: &str = "starts_with";
pub const STARTS_NOT_WITH: &str = "starts_not_with";
pub const ENDS_WITH: &str = "ends_with";
pub const ENDS_NOT_WITH: &str = "ends_not_with";
pub const IS_LOWER: &str = "is_lower";
pub const IS_UPPER: &str = "is_upper";
pub const IS_ASCII: &str = "is_ascii";
pub const IS_ALPHA: &str = "is_alpha";
pub const IS_ALPHANUMERIC: &str = "is_alphanumeric";

/// An element handler rejected an item under [`Valuer::every`](crate::Valuer::every).
pub const EVERY: &str = "every";
/// No element passed under [`Valuer::some`](crate::Valuer::some).
pub const SOME: &str = "some";
/// None of the validators given to [`some`](crate::some) passed.
pub const ANY_OF: &str = "any_of";
/// No candidate group of [`IndexBy`](crate::IndexBy) was fully populated.
pub const INDEX_BY: &str = "index_by";
/// A foreign error added to a collection without validation context.
pub const OPAQUE: &str = "opaque";

pub(crate) const WHEN: &str = "when";
pub(crate) const MATCH: &str = "match";
