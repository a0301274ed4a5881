/// Infix to postfix conversion.
///
/// Reorders the lexer's infix tokens into postfix (reverse Polish) order using
/// the shunting-yard algorithm and the operator precedence table. Parentheses
/// are consumed here and never reach the evaluator.
pub mod shunting_yard;
