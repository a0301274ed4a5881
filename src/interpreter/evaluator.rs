/// Postfix evaluation and the variable environment.
///
/// Contains the `Environment` that stores a session's variables, operand
/// resolution, and the stack machine that walks a postfix token sequence.
pub mod core;

/// Unary operator evaluation.
///
/// Handles operations that take a single operand: unary plus, negation and
/// boolean NOT.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic (with integer/float coercion), bitwise operators,
/// comparisons and boolean connectives.
pub mod binary;

/// Assignment evaluation.
///
/// Implements plain, on-the-fly and compound assignment, the only operations
/// that write to the environment.
pub mod assignment;
