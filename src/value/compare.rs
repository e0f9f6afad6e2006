use std::cmp::Ordering;

use crate::value::Value;

impl Value {
    /// Type-insensitive numeric equality.
    ///
    /// Numbers compare by value across `Int`, `Uint` and `Float`; optionals
    /// are compared through their content; everything else falls back to `==`.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_rail::value::Value;
    ///
    /// assert!(Value::Int(2).loose_eq(&Value::Uint(2)));
    /// assert!(Value::Float(2.0).loose_eq(&Value::Int(2)));
    /// assert_ne!(Value::Int(2), Value::Uint(2));
    /// ```
    #[must_use]
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Optional(Some(a)), b) => a.loose_eq(b),
            (a, Value::Optional(Some(b))) => a.loose_eq(b),
            (Value::Optional(None), Value::Null) | (Value::Null, Value::Optional(None)) => true,
            (Value::Seq(a), Value::Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            _ if self.kind().is_numeric() && other.kind().is_numeric() => {
                self.compare(other) == Some(Ordering::Equal)
            }
            _ => self == other,
        }
    }

    /// Orders numbers against numbers and strings against strings.
    ///
    /// Integers are compared exactly, any float involvement widens both sides
    /// to `f64`. Returns `None` for incomparable shapes and NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use field_rail::value::Value;
    ///
    /// assert_eq!(Value::Int(-1).compare(&Value::Uint(1)), Some(Ordering::Less));
    /// assert_eq!(Value::from("b").compare(&Value::from("a")), Some(Ordering::Greater));
    /// assert_eq!(Value::from("1").compare(&Value::Int(1)), None);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self.deref_optional()?, other.deref_optional()?) {
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (a, b) => match (integer(a), integer(b)) {
                (Some(x), Some(y)) => Some(x.cmp(&y)),
                _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
            },
        }
    }
}

fn integer(value: &Value) -> Option<i128> {
    match value {
        Value::Int(n) => Some(i128::from(*n)),
        Value::Uint(n) => Some(i128::from(*n)),
        _ => None,
    }
}
