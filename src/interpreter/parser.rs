/// Core parsing entry points.
///
/// Parses whole programs, statements and expressions, and defines the shared
/// `ParseResult` type.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels with
/// left-associative folding.
pub mod binary;

/// Primary expression parsing.
///
/// Handles the atoms of the grammar: identifiers, `nil`, numbers and
/// parenthesized expressions.
pub mod primary;
