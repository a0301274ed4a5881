use logos::Logos;

use crate::{
    error::{LexError, LexResult},
    interpreter::{
        token::{
            core::{Operand, Structural, Token},
            operator::{
                AssignmentOperator, BinaryArithmeticOperator, BinaryBooleanOperator,
                BitwiseOperator, ComparisonOperator, Operator, UnaryArithmeticOperator,
                UnaryBooleanOperator,
            },
        },
        value::core::Value,
    },
};

/// Represents a raw lexeme as recognized from the source text.
///
/// Raw lexemes know nothing about their surroundings. Whether a `-` negates or
/// subtracts, and whether an `=` assigns at all, is decided afterwards by
/// [`Lexer`] from the tokens already emitted.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\f]+")]
enum RawToken<'s> {
    /// Numeric literals: a digit followed by digits and decimal points, such
    /// as `42`, `3.14` or `1.`. The number of points is checked later.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice())]
    Number(&'s str),
    /// `true`, `false` and `null`. Longer words such as `truex` are
    /// identifiers.
    #[token("true", |_| Value::Boolean(true))]
    #[token("false", |_| Value::Boolean(false))]
    #[token("null", |_| Value::Null)]
    Keyword(Value),
    /// Identifier tokens; variable names such as `x` or `_total2`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Identifier(&'s str),
    /// `\n`
    #[token("\n")]
    Newline,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-`
    #[token("-")]
    Minus,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    StarStar,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `**=`
    #[token("**=")]
    PowAssign,
    /// `/`
    #[token("/")]
    Slash,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `&=`
    #[token("&=")]
    AndAssign,
    /// `|`
    #[token("|")]
    Pipe,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `|=`
    #[token("|=")]
    OrAssign,
    /// `^`
    #[token("^")]
    Caret,
    /// `^=`
    #[token("^=")]
    XorAssign,
}

impl RawToken<'_> {
    /// Single-character operators that must be followed by another character.
    const fn needs_lookahead(&self) -> bool {
        matches!(self,
                 Self::Equals
                 | Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::Slash
                 | Self::Bang
                 | Self::Less
                 | Self::Greater
                 | Self::Ampersand
                 | Self::Pipe
                 | Self::Caret)
    }
}

/// Turns one line of text into tokens.
///
/// The lexer scans left to right once. Each raw lexeme is interpreted against
/// the tokens emitted so far, which is how unary and binary `+`/`-` are told
/// apart and where a bare `=` is allowed to assign.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source,
               tokens: Vec::new() }
    }

    /// Consumes the lexer and returns the complete token sequence.
    ///
    /// # Errors
    /// Returns the first [`LexError`] encountered; no partial sequence is
    /// returned.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        let mut raw = RawToken::lexer(self.source);

        while let Some(lexeme) = raw.next() {
            let span = raw.span();

            let Ok(lexeme) = lexeme else {
                tracing::trace!(skipped = raw.slice(), position = span.start, "skipping character");
                continue;
            };

            if lexeme.needs_lookahead() && span.end == self.source.len() {
                return Err(LexError::IncompleteOperator { operator: raw.slice().to_string(),
                                                          position: span.start, });
            }

            if let Some(token) = self.interpret(lexeme, span.start)? {
                self.tokens.push(token);
            }
        }

        Ok(self.tokens)
    }

    /// Maps a raw lexeme to a token given what has been emitted so far.
    ///
    /// Returns `Ok(None)` for lexemes that produce no token.
    fn interpret(&self, lexeme: RawToken<'_>, position: usize) -> LexResult<Option<Token>> {
        use AssignmentOperator as Assign;
        use BinaryArithmeticOperator as Arith;
        use ComparisonOperator as Cmp;

        let operator = match lexeme {
            RawToken::Number(literal) => return Ok(Some(Token::literal(number(literal, position)?))),
            RawToken::Keyword(value) => return Ok(Some(Token::literal(value))),
            RawToken::Identifier(name) => return Ok(Some(Token::identifier(name))),
            RawToken::Newline => return Ok(Some(Structural::Newline.into())),
            RawToken::LParen => return Ok(Some(Structural::LeftParen.into())),
            RawToken::RParen => return Ok(Some(Structural::RightParen.into())),
            RawToken::Equals => return Ok(self.bare_equals().map(Token::Operator)),

            RawToken::Plus => self.plus(),
            RawToken::Minus => self.minus(position)?,

            RawToken::EqualEqual => Operator::Comparison(Cmp::Equals),
            RawToken::BangEqual => Operator::Comparison(Cmp::NotEqual),
            RawToken::Less => Operator::Comparison(Cmp::LessThan),
            RawToken::LessEqual => Operator::Comparison(Cmp::LessThanOrEqual),
            RawToken::Greater => Operator::Comparison(Cmp::GreaterThan),
            RawToken::GreaterEqual => Operator::Comparison(Cmp::GreaterThanOrEqual),

            RawToken::Star => Operator::BinaryArithmetic(Arith::Times),
            RawToken::StarStar => Operator::BinaryArithmetic(Arith::Power),
            RawToken::Slash => Operator::BinaryArithmetic(Arith::Divide),

            RawToken::Bang => Operator::UnaryBoolean(UnaryBooleanOperator::Not),
            RawToken::DoubleAmpersand => Operator::BinaryBoolean(BinaryBooleanOperator::And),
            RawToken::DoublePipe => Operator::BinaryBoolean(BinaryBooleanOperator::Or),

            RawToken::Ampersand => Operator::Bitwise(BitwiseOperator::And),
            RawToken::Pipe => Operator::Bitwise(BitwiseOperator::Or),
            RawToken::Caret => Operator::Bitwise(BitwiseOperator::Xor),

            RawToken::PlusAssign => Operator::Assignment(Assign::Plus),
            RawToken::MinusAssign => Operator::Assignment(Assign::Minus),
            RawToken::MulAssign => Operator::Assignment(Assign::Times),
            RawToken::PowAssign => Operator::Assignment(Assign::Power),
            RawToken::DivAssign => Operator::Assignment(Assign::Divide),
            RawToken::AndAssign => Operator::Assignment(Assign::BitwiseAnd),
            RawToken::OrAssign => Operator::Assignment(Assign::BitwiseOr),
            RawToken::XorAssign => Operator::Assignment(Assign::BitwiseXor),
        };

        Ok(Some(Token::Operator(operator)))
    }

    /// `+` is binary only directly after an operand.
    fn plus(&self) -> Operator {
        if self.tokens.last().is_some_and(Token::is_operand) {
            Operator::BinaryArithmetic(BinaryArithmeticOperator::Plus)
        } else {
            Operator::UnaryArithmetic(UnaryArithmeticOperator::Plus)
        }
    }

    /// `-` is binary after an operand or `)`, a negation at the start, after
    /// an operator or after `(`, and an error after any other structural
    /// token.
    fn minus(&self, position: usize) -> LexResult<Operator> {
        match self.tokens.last() {
            Some(Token::Operand(_) | Token::Structural(Structural::RightParen)) => {
                Ok(Operator::BinaryArithmetic(BinaryArithmeticOperator::Minus))
            },
            None
            | Some(Token::Operator(_) | Token::Structural(Structural::LeftParen)) => {
                Ok(Operator::UnaryArithmetic(UnaryArithmeticOperator::Negate))
            },
            Some(Token::Structural(other)) => {
                Err(LexError::UnexpectedTokenBeforeMinus { token: other.to_string(),
                                                           position })
            },
        }
    }

    /// A single `=` assigns in exactly two places: as the second token after a
    /// leading identifier (`x = ...`), or right after `(identifier`
    /// (`(x = ...)`). Anywhere else it is dropped.
    fn bare_equals(&self) -> Option<Operator> {
        match self.tokens.as_slice() {
            [Token::Operand(Operand::Identifier(_))] => {
                Some(Operator::Assignment(AssignmentOperator::Assignment))
            },
            [.., Token::Structural(Structural::LeftParen), Token::Operand(Operand::Identifier(_))] => {
                Some(Operator::Assignment(AssignmentOperator::OnTheFly))
            },
            _ => {
                tracing::trace!(preceding = self.tokens.len(), "ignoring '=' outside an assignment position");
                None
            },
        }
    }
}

/// Converts a numeric lexeme into an integer or float literal.
fn number(literal: &str, position: usize) -> LexResult<Value> {
    match literal.bytes().filter(|&b| b == b'.').count() {
        0 => literal.parse()
                    .map(Value::Integer)
                    .map_err(|_| LexError::NumberOutOfRange { literal: literal.to_string(),
                                                              position }),
        1 => literal.parse()
                    .map(Value::Float)
                    .map_err(|_| LexError::NumberOutOfRange { literal: literal.to_string(),
                                                              position }),
        _ => Err(LexError::TooManyDecimalPoints { literal: literal.to_string(),
                                                  position }),
    }
}

/// Lexes one line of text into tokens.
///
/// # Errors
/// Returns a [`LexError`] for a literal with more than one decimal point, an
/// integer literal that does not fit in 64 bits, an operator at the very end
/// of the input, or a `-` directly after a line break.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     lexer::lex,
///     token::{
///         core::Token,
///         operator::{AssignmentOperator, Operator},
///     },
/// };
///
/// let tokens = lex("x = 4").unwrap();
/// assert_eq!(tokens,
///            vec![Token::identifier("x"),
///                 Token::Operator(Operator::Assignment(AssignmentOperator::Assignment)),
///                 Token::literal(4_i64)]);
/// ```
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}
