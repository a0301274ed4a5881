use crate::interpreter::{
    evaluator::core::Environment,
    token::operator::ComparisonOperator,
    value::{
        core::Value,
        number::{Coerced, Number},
    },
};

impl Environment {
    /// Evaluates a comparison. Always produces a boolean and never fails.
    ///
    /// - Two booleans support `==` and `!=`; ordering them is `false`.
    /// - Two numbers are equal only if they have the same kind and value, so
    ///   `1 == 1.0` is `false`. Ordering compares across kinds, promoting an
    ///   integer to a float when the other side is a float.
    /// - Any other pairing, including anything involving `null`, is `false`
    ///   for every operator, `!=` included.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{
    ///     evaluator::core::Environment, token::operator::ComparisonOperator,
    ///     value::core::Value,
    /// };
    ///
    /// let eq = Environment::eval_comparison(ComparisonOperator::Equals,
    ///                                       &Value::Integer(1),
    ///                                       &Value::Float(1.0));
    /// let lt = Environment::eval_comparison(ComparisonOperator::LessThan,
    ///                                       &Value::Integer(1),
    ///                                       &Value::Float(1.5));
    ///
    /// assert_eq!(eq, Value::Boolean(false));
    /// assert_eq!(lt, Value::Boolean(true));
    /// ```
    #[must_use]
    pub fn eval_comparison(op: ComparisonOperator, left: &Value, right: &Value) -> Value {
        let result = match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => match op {
                ComparisonOperator::Equals => a == b,
                ComparisonOperator::NotEqual => a != b,
                _ => false,
            },
            _ => match (left.as_number(), right.as_number()) {
                (Some(a), Some(b)) => compare_numbers(op, a, b),
                _ => false,
            },
        };

        Value::Boolean(result)
    }
}

fn compare_numbers(op: ComparisonOperator, a: Number, b: Number) -> bool {
    match op {
        ComparisonOperator::Equals => a == b,
        ComparisonOperator::NotEqual => a != b,
        ordering => match Number::coerce(a, b) {
            Coerced::Integers(x, y) => order(ordering, &x, &y),
            Coerced::Floats(x, y) => order(ordering, &x, &y),
        },
    }
}

fn order<T: PartialOrd>(op: ComparisonOperator, x: &T, y: &T) -> bool {
    match op {
        ComparisonOperator::Equals => x == y,
        ComparisonOperator::NotEqual => x != y,
        ComparisonOperator::LessThan => x < y,
        ComparisonOperator::LessThanOrEqual => x <= y,
        ComparisonOperator::GreaterThan => x > y,
        ComparisonOperator::GreaterThanOrEqual => x >= y,
    }
}
