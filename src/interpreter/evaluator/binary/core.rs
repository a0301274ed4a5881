use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        evaluator::core::Environment, token::operator::Operator, value::core::Value,
    },
};

impl Environment {
    /// Evaluates a binary operation between two resolved values.
    ///
    /// Routes the operation to the handler for the operator's family.
    /// Comparisons never fail; every other family checks the kinds of its
    /// operands.
    ///
    /// # Errors
    /// - [`EvalError::TypeMismatch`] if an operand has the wrong kind.
    /// - [`EvalError::Arithmetic`] on integer division by zero.
    /// - [`EvalError::MalformedExpression`] if `op` is not a binary operator.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{
    ///     evaluator::core::Environment,
    ///     token::operator::{BinaryArithmeticOperator, Operator},
    ///     value::core::Value,
    /// };
    ///
    /// let op = Operator::BinaryArithmetic(BinaryArithmeticOperator::Plus);
    /// let result = Environment::eval_binary(op, &Value::Integer(3), &Value::Float(0.5));
    ///
    /// assert_eq!(result.unwrap(), Value::Float(3.5));
    /// ```
    pub fn eval_binary(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        match op {
            Operator::BinaryArithmetic(op) => Self::eval_arithmetic(op, left, right),
            Operator::Bitwise(op) => Self::eval_bitwise(op, left, right),
            Operator::Comparison(op) => Ok(Self::eval_comparison(op, left, right)),
            Operator::BinaryBoolean(op) => Self::eval_logic(op, left, right),
            Operator::UnaryArithmetic(_) | Operator::UnaryBoolean(_) | Operator::Assignment(_) => {
                Err(EvalError::malformed(format!("'{op}' is not a binary operator")))
            },
        }
    }
}

/// Builds the type mismatch reported when `op` cannot take these operands.
pub(crate) fn operand_mismatch(op: Operator, left: &Value, right: &Value) -> EvalError {
    EvalError::type_mismatch(format!("cannot apply '{op}' to {} and {}",
                                     left.kind(),
                                     right.kind()))
}
