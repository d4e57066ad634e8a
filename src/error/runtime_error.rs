use crate::{ast::BinaryOperator, interpreter::value::core::ValueKind};

use super::ScopeError;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A name could not be declared or resolved.
    #[error("Error on line {line}: {source}.")]
    Scope {
        /// The underlying scope failure.
        source: ScopeError,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A numeric operand was paired with `nil`.
    #[error("Error on line {line}: Type error: cannot apply '{op}' to {left} and {right}.")]
    TypeMismatch {
        /// The operator being applied.
        op:    BinaryOperator,
        /// Kind of the left operand.
        left:  ValueKind,
        /// Kind of the right operand.
        right: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operator is part of the grammar but has no numeric meaning.
    #[error("Error on line {line}: Operator '{op}' is not supported on numbers.")]
    UnsupportedOperator {
        /// The operator being applied.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
}
