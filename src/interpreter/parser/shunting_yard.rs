use crate::{
    error::{EvalError, EvalResult},
    interpreter::token::core::{Structural, Token},
};

/// Converts an infix token sequence to postfix order.
///
/// Operands go straight to the output. An incoming operator first pops every
/// stacked operator that binds *strictly* tighter than itself, then is pushed.
/// Because operators of equal precedence never pop each other, a chain like
/// `10 - 3 - 2` comes out as `10 3 2 - -` and evaluates right to left.
///
/// Parentheses are matched and dropped. Line breaks and commas carry no
/// meaning inside a single expression and are dropped too.
///
/// # Errors
/// Returns [`EvalError::MalformedExpression`] for a `)` without a matching `(`
/// or a `(` that is never closed.
///
/// # Example
/// ```
/// use shunt::interpreter::{lexer::lex, parser::shunting_yard::to_postfix, token::core::join};
///
/// let postfix = to_postfix(&lex("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(join(&postfix), "2 3 4 * +");
///
/// let postfix = to_postfix(&lex("(2 + 3) * 4").unwrap()).unwrap();
/// assert_eq!(join(&postfix), "2 3 + 4 *");
/// ```
pub fn to_postfix(infix: &[Token]) -> EvalResult<Vec<Token>> {
    let mut stack: Vec<&Token> = Vec::new();
    let mut postfix = Vec::with_capacity(infix.len());

    for token in infix {
        match token {
            Token::Operand(_) => postfix.push(token.clone()),

            Token::Operator(incoming) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    if !top.binds_tighter_than(*incoming) {
                        break;
                    }
                    postfix.extend(stack.pop().cloned());
                }
                stack.push(token);
            },

            Token::Structural(Structural::LeftParen) => stack.push(token),

            Token::Structural(Structural::RightParen) => loop {
                match stack.pop() {
                    Some(Token::Structural(Structural::LeftParen)) => break,
                    Some(top) => postfix.push(top.clone()),
                    None => return Err(EvalError::malformed("unmatched ')'")),
                }
            },

            Token::Structural(other @ (Structural::Newline | Structural::Comma)) => {
                tracing::trace!(token = %other, "dropping structural token");
            },
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::Structural(Structural::LeftParen)) {
            return Err(EvalError::malformed("unmatched '('"));
        }
        postfix.push(top.clone());
    }

    Ok(postfix)
}
