/// Dispatch of binary operators to their family handlers.
pub mod core;

/// `+ - * / **` with integer/float coercion.
pub mod arithmetic;

/// `& | ^` on integers.
pub mod bitwise;

/// `== != < <= > >=`.
pub mod comparison;

/// `&& ||` on booleans.
pub mod logic;
