/// The token model shared by every stage of the pipeline.
///
/// Declares the closed set of token kinds (structural markers, operands and
/// operators) and the fixed precedence of each operator.
///
/// # Responsibilities
/// - Defines `Token`, `Structural`, `Operand` and the operator families.
/// - Assigns each operator its precedence and arity.
/// - Renders tokens the way they are echoed on the command line.
pub mod token;
/// The lexer turns one line of text into infix tokens.
///
/// Raw lexemes are recognized by a `logos` scanner. Each one is then
/// interpreted against the tokens already emitted, which decides between
/// unary and binary `+`/`-` and whether a bare `=` assigns.
///
/// # Responsibilities
/// - Recognizes numeric, boolean and null literals, identifiers and
///   operators.
/// - Skips whitespace and characters it does not recognize.
/// - Reports malformed numbers and operators cut off by the end of input.
pub mod lexer;
/// The parser reorders infix tokens into postfix order.
///
/// There is no syntax tree. The shunting-yard algorithm produces a flat
/// postfix sequence that the evaluator runs directly.
pub mod parser;
/// The evaluator runs postfix tokens against an environment.
///
/// # Responsibilities
/// - Owns the variable store (`Environment`).
/// - Applies unary, binary and assignment operators with a stack machine.
/// - Reports type mismatches, malformed sequences and division by zero.
pub mod evaluator;
/// The value module defines the runtime data types.
///
/// # Responsibilities
/// - Defines `Value`: null, boolean, integer and float.
/// - Defines the `Number` view used by arithmetic and its coercion rule.
pub mod value;
