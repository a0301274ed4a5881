use crate::{
    error::EvalResult,
    interpreter::{
        evaluator::{binary::core::operand_mismatch, core::Environment},
        token::operator::{BitwiseOperator, Operator},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates `&`, `|` or `^`. Both operands must be integers.
    ///
    /// # Errors
    /// Returns [`crate::error::EvalError::TypeMismatch`] for any other kind,
    /// floats included.
    pub fn eval_bitwise(op: BitwiseOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(operand_mismatch(Operator::Bitwise(op), left, right));
        };

        Ok(Value::Integer(match op {
                              BitwiseOperator::And => a & b,
                              BitwiseOperator::Or => a | b,
                              BitwiseOperator::Xor => a ^ b,
                          }))
    }
}
