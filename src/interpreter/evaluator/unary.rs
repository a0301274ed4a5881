use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        evaluator::core::Environment,
        token::operator::{Operator, UnaryArithmeticOperator, UnaryBooleanOperator},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates a unary operation on a resolved value.
    ///
    /// - `(+)` returns a number unchanged.
    /// - `(-)` negates a number; negating `i64::MIN` wraps back to itself.
    /// - `!` inverts a boolean.
    ///
    /// # Errors
    /// - [`EvalError::TypeMismatch`] if the operand has the wrong kind.
    /// - [`EvalError::MalformedExpression`] if `op` is not a unary operator.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{
    ///     evaluator::core::Environment,
    ///     token::operator::{Operator, UnaryArithmeticOperator},
    ///     value::core::Value,
    /// };
    ///
    /// let negate = Operator::UnaryArithmetic(UnaryArithmeticOperator::Negate);
    ///
    /// assert_eq!(Environment::eval_unary(negate, &Value::Float(2.5)).unwrap(),
    ///            Value::Float(-2.5));
    /// assert!(Environment::eval_unary(negate, &Value::Boolean(true)).is_err());
    /// ```
    pub fn eval_unary(op: Operator, value: &Value) -> EvalResult<Value> {
        let mismatch = || {
            EvalError::type_mismatch(format!("cannot apply '{op}' to {}", value.kind()))
        };

        match op {
            Operator::UnaryArithmetic(UnaryArithmeticOperator::Plus) => {
                value.as_number().map(Value::from).ok_or_else(mismatch)
            },
            Operator::UnaryArithmetic(UnaryArithmeticOperator::Negate) => match value {
                Value::Integer(i) => Ok(Value::Integer(i.wrapping_neg())),
                Value::Float(x) => Ok(Value::Float(-x)),
                Value::Null | Value::Boolean(_) => Err(mismatch()),
            },
            Operator::UnaryBoolean(UnaryBooleanOperator::Not) => {
                value.as_bool().map(|b| Value::Boolean(!b)).ok_or_else(mismatch)
            },
            Operator::BinaryArithmetic(_)
            | Operator::Bitwise(_)
            | Operator::Comparison(_)
            | Operator::BinaryBoolean(_)
            | Operator::Assignment(_) => {
                Err(EvalError::malformed(format!("'{op}' is not a unary operator")))
            },
        }
    }
}
