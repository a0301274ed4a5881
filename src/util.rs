/// Numeric conversion helpers.
///
/// This module holds the two coercions the evaluator applies at operator
/// boundaries: widening an `i64` to `f64` for mixed arithmetic, and truncating
/// an `f64` back to `i64` after integer exponentiation. Keeping them in one
/// place makes every lossy cast in the crate easy to audit.
pub mod num;
