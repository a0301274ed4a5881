/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents all errors that can occur while turning text into tokens.
///
/// Every variant records the byte offset (`position`) of the lexeme that
/// caused it. A lex error aborts the whole line; no partial token sequence is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A numeric literal contained more than one decimal point.
    #[error("too many decimal points in '{literal}' at position {position}")]
    TooManyDecimalPoints {
        /// The offending literal.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A numeric literal cannot be represented, such as an integer that does
    /// not fit in 64 bits.
    #[error("numeric literal '{literal}' is out of range at position {position}")]
    NumberOutOfRange {
        /// The offending literal.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// An operator that needs a lookahead character ended the input.
    #[error("incomplete operator '{operator}' at position {position}")]
    IncompleteOperator {
        /// The dangling operator.
        operator: String,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A `-` followed a structural token that cannot precede it.
    #[error("unexpected token '{token}' before '-' at position {position}")]
    UnexpectedTokenBeforeMinus {
        /// The structural token found before the minus.
        token:    String,
        /// Byte offset of the minus.
        position: usize,
    },
}
