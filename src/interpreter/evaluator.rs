/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the evaluation context, and error
/// propagation.
pub mod core;

/// Binary operator evaluation logic.
///
/// Combines two evaluated operands according to their kinds and applies the
/// arithmetic operators.
pub mod binary;
