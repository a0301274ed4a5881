use crate::{
    error::EvalResult,
    interpreter::{
        evaluator::{binary::core::operand_mismatch, core::Environment},
        token::operator::{BinaryBooleanOperator, Operator},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates `&&` or `||` on two booleans.
    ///
    /// Both operands have already been evaluated by the time this runs; there
    /// is no short-circuiting.
    ///
    /// # Errors
    /// Returns [`crate::error::EvalError::TypeMismatch`] unless both operands
    /// are booleans.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{
    ///     evaluator::core::Environment, token::operator::BinaryBooleanOperator,
    ///     value::core::Value,
    /// };
    ///
    /// let result = Environment::eval_logic(BinaryBooleanOperator::Or,
    ///                                      &Value::Boolean(false),
    ///                                      &Value::Boolean(true));
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_logic(op: BinaryBooleanOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let (Some(a), Some(b)) = (left.as_bool(), right.as_bool()) else {
            return Err(operand_mismatch(Operator::BinaryBoolean(op), left, right));
        };

        Ok(Value::Boolean(match op {
                              BinaryBooleanOperator::And => a && b,
                              BinaryBooleanOperator::Or => a || b,
                          }))
    }
}
