use std::collections::HashMap;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        token::{
            core::{Operand, Token},
            operator::{Arity, Operator},
        },
        value::core::Value,
    },
};

/// Stores the variables of one interpreter session.
///
/// The environment starts empty. Entries are created or overwritten only by
/// assignment operators and are never removed, so a value assigned on one
/// line is visible on every later line evaluated against the same
/// environment.
///
/// ## Usage
///
/// Create one `Environment` per session and pass it to every call of
/// [`Environment::eval_postfix`] (or [`crate::evaluate`]). Separate sessions
/// need separate environments; nothing is shared between them.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub(crate) variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if it has been assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Number of variables assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Resolves an operand to a value.
    ///
    /// Literals yield their embedded value. Identifiers are looked up; a name
    /// that was never assigned resolves to [`Value::Null`].
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{
    ///     evaluator::core::Environment, token::core::Operand, value::core::Value,
    /// };
    ///
    /// let env = Environment::new();
    /// let missing = Operand::Identifier("nope".to_string());
    /// assert_eq!(env.resolve(&missing), Value::Null);
    /// ```
    #[must_use]
    pub fn resolve(&self, operand: &Operand) -> Value {
        match operand {
            Operand::Literal(value) => value.clone(),
            Operand::Identifier(name) => self.variables.get(name).cloned().unwrap_or(Value::Null),
        }
    }

    /// Evaluates a postfix token sequence and returns the final value.
    ///
    /// Operands are pushed unresolved. A unary operator pops one operand; a
    /// binary operator pops its right operand first and its left operand
    /// second; an assignment pops the value and then the identifier beneath
    /// it. Each result is pushed back as a literal. Exactly one operand must
    /// remain at the end.
    ///
    /// Assignments take effect as soon as they are evaluated. If a later
    /// operator in the same sequence fails, earlier assignments are kept.
    ///
    /// # Errors
    /// - [`EvalError::MalformedExpression`] if an operator finds too few
    ///   operands, if the sequence is empty or leaves several operands, or if
    ///   a structural token is present.
    /// - [`EvalError::TypeMismatch`] if an operand has the wrong kind for its
    ///   operator, or an assignment target is not an identifier.
    /// - [`EvalError::Arithmetic`] on integer division by zero.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{
    ///     evaluator::core::Environment, lexer::lex, parser::shunting_yard::to_postfix,
    ///     value::core::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let postfix = to_postfix(&lex("x = 10 - 3 - 2").unwrap()).unwrap();
    ///
    /// assert_eq!(env.eval_postfix(&postfix).unwrap(), Value::Integer(9));
    /// assert_eq!(env.get("x"), Some(&Value::Integer(9)));
    /// ```
    pub fn eval_postfix(&mut self, postfix: &[Token]) -> EvalResult<Value> {
        let mut operands: Vec<Operand> = Vec::new();

        for token in postfix {
            let op = match token {
                Token::Operand(operand) => {
                    operands.push(operand.clone());
                    continue;
                },
                Token::Operator(op) => *op,
                Token::Structural(s) => {
                    return Err(EvalError::malformed(format!("unexpected '{s}' in postfix sequence")));
                },
            };

            let result = match op.arity() {
                Arity::Unary => {
                    let value = self.resolve(&pop(&mut operands, op)?);
                    Self::eval_unary(op, &value)?
                },
                Arity::Binary => {
                    let right = pop(&mut operands, op)?;
                    let left = pop(&mut operands, op)?;
                    Self::eval_binary(op, &self.resolve(&left), &self.resolve(&right))?
                },
                Arity::Assignment(assignment) => {
                    let value = self.resolve(&pop(&mut operands, op)?);
                    let target = pop(&mut operands, op)?;
                    self.eval_assignment(assignment, target, value)?
                },
            };

            operands.push(Operand::Literal(result));
        }

        let last = operands.pop()
                           .ok_or_else(|| EvalError::malformed("nothing to evaluate"))?;

        if !operands.is_empty() {
            return Err(EvalError::malformed(format!("{} operands are not connected by an operator",
                                                    operands.len() + 1)));
        }

        Ok(self.resolve(&last))
    }
}

/// Pops the next operand for `op`, failing if the stack has run dry.
fn pop(operands: &mut Vec<Operand>, op: Operator) -> EvalResult<Operand> {
    operands.pop()
            .ok_or_else(|| EvalError::malformed(format!("operator '{op}' is missing an operand")))
}
