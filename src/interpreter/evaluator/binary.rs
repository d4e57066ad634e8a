/// Operand kind checks and dispatch for binary operators.
pub mod core;

/// Floating-point arithmetic.
pub mod scalar;
