use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        evaluator::core::Environment,
        token::{
            core::Operand,
            operator::{AssignmentOperator, Operator},
        },
        value::core::Value,
    },
};

impl Environment {
    /// Stores a value under the identifier `target` and returns what was
    /// stored.
    ///
    /// Plain and on-the-fly assignment store `value` as is, creating the
    /// variable if needed. A compound assignment such as `x += 2` requires
    /// `x` to already hold a number and `value` to be a number; it stores the
    /// result of the matching binary operation.
    ///
    /// # Errors
    /// - [`EvalError::TypeMismatch`] if `target` is not an identifier, if a
    ///   compound assignment targets an unassigned or non-numeric variable, or
    ///   if its value is not a number.
    /// - Whatever the underlying binary operation reports, such as
    ///   [`EvalError::Arithmetic`] for `x /= 0`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{
    ///     evaluator::core::Environment,
    ///     token::{core::Operand, operator::AssignmentOperator},
    ///     value::core::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let x = || Operand::Identifier("x".to_string());
    ///
    /// env.eval_assignment(AssignmentOperator::Assignment, x(), Value::Integer(5)).unwrap();
    /// let result = env.eval_assignment(AssignmentOperator::Times, x(), Value::Integer(3));
    ///
    /// assert_eq!(result.unwrap(), Value::Integer(15));
    /// assert_eq!(env.get("x"), Some(&Value::Integer(15)));
    /// ```
    pub fn eval_assignment(&mut self,
                           op: AssignmentOperator,
                           target: Operand,
                           value: Value)
                           -> EvalResult<Value> {
        let symbol = Operator::Assignment(op);

        let name = match target {
            Operand::Identifier(name) => name,
            Operand::Literal(literal) => {
                return Err(EvalError::type_mismatch(format!("cannot assign to {} '{literal}' with '{symbol}'; the target must be a variable name",
                                                            literal.kind())));
            },
        };

        let result = match op.compound_operation() {
            None => value,
            Some(operation) => {
                let current = self.variables.get(&name).cloned().unwrap_or(Value::Null);

                if current.as_number().is_none() || value.as_number().is_none() {
                    return Err(EvalError::type_mismatch(format!("'{symbol}' needs a numeric variable and value, but '{name}' is {} and the value is {}",
                                                                current.kind(),
                                                                value.kind())));
                }

                Self::eval_binary(operation, &current, &value)?
            },
        };

        tracing::trace!(name = %name, value = %result, "assign");
        self.variables.insert(name, result.clone());

        Ok(result)
    }
}
