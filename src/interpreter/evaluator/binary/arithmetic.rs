use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        evaluator::{binary::core::operand_mismatch, core::Environment},
        token::operator::{BinaryArithmeticOperator, Operator},
        value::{
            core::Value,
            number::{Coerced, Number},
        },
    },
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

impl Environment {
    /// Evaluates an arithmetic operation.
    ///
    /// Both operands must be numbers. Two integers stay integers and wrap on
    /// overflow; if either side is a float, both are computed as floats.
    /// Power is always computed in floating point and truncated back to an
    /// integer when both operands were integers.
    ///
    /// # Errors
    /// - [`EvalError::TypeMismatch`] if either operand is not a number.
    /// - [`EvalError::Arithmetic`] on integer division by zero.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{
    ///     evaluator::core::Environment, token::operator::BinaryArithmeticOperator,
    ///     value::core::Value,
    /// };
    ///
    /// let pow = |l, r| Environment::eval_arithmetic(BinaryArithmeticOperator::Power, &l, &r);
    ///
    /// assert_eq!(pow(Value::Integer(2), Value::Integer(10)).unwrap(), Value::Integer(1024));
    /// assert_eq!(pow(Value::Integer(2), Value::Integer(-1)).unwrap(), Value::Integer(0));
    /// assert_eq!(pow(Value::Float(4.0), Value::Float(0.5)).unwrap(), Value::Float(2.0));
    /// ```
    pub fn eval_arithmetic(op: BinaryArithmeticOperator,
                           left: &Value,
                           right: &Value)
                           -> EvalResult<Value> {
        let (Some(l), Some(r)) = (left.as_number(), right.as_number()) else {
            return Err(operand_mismatch(Operator::BinaryArithmetic(op), left, right));
        };

        match Number::coerce(l, r) {
            Coerced::Integers(a, b) => integer_arithmetic(op, a, b).map(Value::Integer),
            Coerced::Floats(a, b) => Ok(Value::Float(float_arithmetic(op, a, b))),
        }
    }
}

fn integer_arithmetic(op: BinaryArithmeticOperator, a: i64, b: i64) -> EvalResult<i64> {
    use BinaryArithmeticOperator::{Divide, Minus, Plus, Power, Times};

    match op {
        Plus => Ok(a.wrapping_add(b)),
        Minus => Ok(a.wrapping_sub(b)),
        Times => Ok(a.wrapping_mul(b)),
        Divide if b == 0 => Err(EvalError::arithmetic(format!("division by zero in {a} / 0"))),
        Divide => Ok(a.wrapping_div(b)),
        Power => Ok(f64_to_i64_truncated(i64_to_f64(a).powf(i64_to_f64(b)))),
    }
}

fn float_arithmetic(op: BinaryArithmeticOperator, a: f64, b: f64) -> f64 {
    use BinaryArithmeticOperator::{Divide, Minus, Plus, Power, Times};

    match op {
        Plus => a + b,
        Minus => a - b,
        Times => a * b,
        Divide => a / b,
        Power => a.powf(b),
    }
}
