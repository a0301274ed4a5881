/// Result type used by the shunting-yard converter and the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents all errors that can occur while ordering or evaluating tokens.
///
/// Evaluation is fail-fast: the first error aborts the line, but assignments
/// already performed earlier in the same line stay in the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// An operand does not have the shape an operator requires, for example a
    /// boolean in arithmetic, or an assignment whose target is not a name.
    #[error("type mismatch: {details}")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// The token stream cannot be evaluated: an operator is missing operands,
    /// a parenthesis is unmatched, or operands are left over.
    #[error("malformed expression: {details}")]
    MalformedExpression {
        /// Details about what is malformed.
        details: String,
    },
    /// An arithmetic operation has no defined result, such as integer division
    /// by zero.
    #[error("arithmetic error: {details}")]
    Arithmetic {
        /// Details about the failed operation.
        details: String,
    },
}

impl EvalError {
    /// Build an [`EvalError::TypeMismatch`] value.
    pub fn type_mismatch(details: impl Into<String>) -> Self {
        Self::TypeMismatch { details: details.into() }
    }

    /// Build an [`EvalError::MalformedExpression`] value.
    pub fn malformed(details: impl Into<String>) -> Self {
        Self::MalformedExpression { details: details.into() }
    }

    /// Build an [`EvalError::Arithmetic`] value.
    pub fn arithmetic(details: impl Into<String>) -> Self {
        Self::Arithmetic { details: details.into() }
    }
}
