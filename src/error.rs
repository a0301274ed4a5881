/// Lexing errors.
///
/// Defines the errors raised while scanning a line of text into tokens:
/// malformed numeric literals, operators cut off by the end of input, and a
/// minus sign in a position where it can be neither unary nor binary.
pub mod lex_error;
/// Evaluation errors.
///
/// Contains the errors raised while converting tokens to postfix order and
/// evaluating them: operand type mismatches, malformed token streams and
/// arithmetic failures such as integer division by zero.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
pub use lex_error::{LexError, LexResult};

/// Any error produced while evaluating one line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    /// The tokens could not be ordered or evaluated.
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}
