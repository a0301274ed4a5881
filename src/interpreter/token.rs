/// Tokens shared by every phase.
///
/// Declares the closed `Token` taxonomy: structural markers, operands
/// (identifiers and literals) and operators. The lexer produces these, the
/// shunting-yard converter reorders them, and the evaluator consumes them.
pub mod core;
/// Operator kinds and their precedence.
///
/// Every operator belongs to one family (unary arithmetic, comparison,
/// assignment, ...). Each family fixes the operator's precedence and how many
/// operands it consumes during evaluation.
pub mod operator;
