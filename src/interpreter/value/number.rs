use crate::util::num::i64_to_f64;

/// A numeric value: the integer/float half of [`Value`].
///
/// Arithmetic, ordering comparisons and compound assignment all operate on
/// this type. Obtain one with [`Value::as_number`].
///
/// [`Value`]: crate::interpreter::value::core::Value
/// [`Value::as_number`]: crate::interpreter::value::core::Value::as_number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A double precision float.
    Float(f64),
}

/// A pair of operands after coercion.
///
/// Two integers stay integers; every other pairing is widened to floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    /// Both operands were integers.
    Integers(i64, i64),
    /// At least one operand was a float.
    Floats(f64, f64),
}

impl Number {
    /// Widens the number to `f64`.
    #[must_use]
    pub fn to_float(self) -> f64 {
        match self {
            Self::Integer(i) => i64_to_f64(i),
            Self::Float(x) => x,
        }
    }

    /// Coerces two operands to a common representation.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::number::{Coerced, Number};
    ///
    /// let ints = Number::coerce(Number::Integer(3), Number::Integer(2));
    /// assert_eq!(ints, Coerced::Integers(3, 2));
    ///
    /// let mixed = Number::coerce(Number::Integer(1), Number::Float(2.5));
    /// assert_eq!(mixed, Coerced::Floats(1.0, 2.5));
    /// ```
    #[must_use]
    pub fn coerce(left: Self, right: Self) -> Coerced {
        match (left, right) {
            (Self::Integer(a), Self::Integer(b)) => Coerced::Integers(a, b),
            (a, b) => Coerced::Floats(a.to_float(), b.to_float()),
        }
    }
}
