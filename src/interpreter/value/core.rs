use crate::interpreter::value::number::Number;

/// Represents a runtime value in the interpreter.
///
/// Every operand eventually resolves to one of these variants, and every
/// operator produces one. Variables that were never assigned resolve to
/// [`Value::Null`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value; the `null` literal or an unassigned variable.
    Null,
    /// A boolean value (`true` or `false`).
    /// Produced by the literals, by comparisons and by boolean operators.
    Boolean(bool),
    /// A signed 64-bit integer. Integer arithmetic wraps on overflow.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(i) => Self::Integer(i),
            Number::Float(x) => Self::Float(x),
        }
    }
}

impl Value {
    /// Returns the numeric view of this value, if it has one.
    ///
    /// Only `Integer` and `Float` are numbers; booleans are never coerced.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::{core::Value, number::Number};
    ///
    /// assert_eq!(Value::Integer(3).as_number(), Some(Number::Integer(3)));
    /// assert_eq!(Value::Boolean(true).as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(i) => Some(Number::Integer(*i)),
            Self::Float(x) => Some(Number::Float(*x)),
            Self::Null | Self::Boolean(_) => None,
        }
    }

    /// Returns the boolean payload, if this value is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Name of the value's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part, so `3.0` does not print as `3`.
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}
