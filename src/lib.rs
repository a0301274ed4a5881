//! # shunt
//!
//! shunt is an interpreter for one-line arithmetic, boolean and bitwise
//! expressions with variables. A line is lexed into tokens, reordered into
//! postfix form with the shunting-yard algorithm and evaluated against an
//! environment that persists between lines.
//!
//! ```
//! use shunt::{Environment, Value, evaluate};
//!
//! let mut env = Environment::new();
//! evaluate("x = 5", &mut env).unwrap();
//!
//! assert_eq!(evaluate("x * 2 + 1", &mut env).unwrap(), Value::Integer(11));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for lexing and evaluation.
///
/// Each phase has its own error enum and result alias. The top-level `Error`
/// wraps both so a whole line can be evaluated with a single `?`.
///
/// # Responsibilities
/// - Defines `LexError` for malformed input text.
/// - Defines `EvalError` for malformed token sequences and runtime failures.
/// - Carries byte positions or details for user-facing messages.
pub mod error;
/// The lexing, reordering and evaluation pipeline.
///
/// # Responsibilities
/// - Tokenizes text (`lexer`).
/// - Converts infix tokens to postfix order (`parser`).
/// - Evaluates postfix tokens against an `Environment` (`evaluator`).
pub mod interpreter;
/// Line-oriented sessions and the read-eval-print loop.
///
/// A session owns one environment and feeds it line after line, either one
/// call at a time or from any buffered reader.
pub mod session;
/// General utilities for numeric conversion.
///
/// Conversions between `i64` and `f64` are kept here so the lossy casts are
/// reviewed in one place.
pub mod util;

pub use error::Error;
pub use interpreter::{
    evaluator::core::Environment, lexer::lex, parser::shunting_yard::to_postfix,
    value::core::Value,
};
pub use session::{Session, SessionOptions};

/// Evaluates one line of source text against `environment`.
///
/// Runs the full pipeline: lexing, conversion to postfix and evaluation.
/// Assignments made by the line are stored in `environment` and stay there
/// even if a later part of the same line fails.
///
/// # Errors
/// Returns [`Error::Lex`] if the text cannot be tokenized and [`Error::Eval`]
/// if the tokens cannot be ordered or evaluated.
///
/// # Examples
/// ```
/// use shunt::{Environment, Error, Value, evaluate};
///
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate("10 - 3 - 2", &mut env).unwrap(), Value::Integer(9));
/// assert_eq!(evaluate("1 + 2.0", &mut env).unwrap(), Value::Float(3.0));
///
/// // A type error aborts the line.
/// assert!(matches!(evaluate("true + 1", &mut env), Err(Error::Eval(_))));
/// ```
pub fn evaluate(source: &str, environment: &mut Environment) -> Result<Value, Error> {
    let tokens = lex(source)?;
    let postfix = to_postfix(&tokens)?;

    Ok(environment.eval_postfix(&postfix)?)
}
