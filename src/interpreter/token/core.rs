use crate::interpreter::{token::operator::Operator, value::core::Value};

/// A single lexical unit of an expression.
///
/// Produced by the lexer and read, never modified, by the shunting-yard
/// converter and the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Parentheses, line breaks and separators.
    Structural(Structural),
    /// Something that resolves to a value.
    Operand(Operand),
    /// Something that combines values.
    Operator(Operator),
}

/// Structural markers. They carry no value and are never evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structural {
    /// `\n`
    Newline,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,` (reserved for argument lists; the lexer does not emit it)
    Comma,
}

/// A token that resolves to a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A variable name, looked up in the environment when resolved.
    Identifier(String),
    /// A value embedded in the token stream: a literal from the source, or an
    /// intermediate result pushed by the evaluator.
    Literal(Value),
}

impl Token {
    /// Shorthand for an identifier token.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Operand(Operand::Identifier(name.into()))
    }

    /// Shorthand for a literal token.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Operand(Operand::Literal(value.into()))
    }

    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Operand(_))
    }

    /// Returns `true` for `(` and `)`.
    #[must_use]
    pub const fn is_paren(&self) -> bool {
        matches!(self,
                 Self::Structural(Structural::LeftParen | Structural::RightParen))
    }
}

impl From<Structural> for Token {
    fn from(s: Structural) -> Self {
        Self::Structural(s)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<Operand> for Token {
    fn from(operand: Operand) -> Self {
        Self::Operand(operand)
    }
}

impl std::fmt::Display for Structural {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Newline => write!(f, "\\n"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Literal(value) => write!(f, "{value}"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structural(s) => write!(f, "{s}"),
            Self::Operand(o) => write!(f, "{o}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Renders a token sequence separated by single spaces.
///
/// # Example
/// ```
/// use shunt::interpreter::token::core::{Token, join};
///
/// let tokens = [Token::identifier("x"), Token::literal(2.0)];
/// assert_eq!(join(&tokens), "x 2.0");
/// ```
#[must_use]
pub fn join(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
