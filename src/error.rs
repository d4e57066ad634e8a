/// Lexing errors.
///
/// Raised by the tokenizer when a character matches no token rule.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens, such as unexpected tokens or a missing closing parenthesis.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, division by zero, unsupported operators and failed name
/// resolution.
pub mod runtime_error;
/// Scope errors.
///
/// Raised by the environment when a name is declared twice in one frame or
/// cannot be resolved anywhere in the scope chain.
pub mod scope_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scope_error::ScopeError;

/// Any failure raised while running a piece of source text.
///
/// Each phase reports its own error type; this enum lets [`crate::run`] thread
/// all of them through a single `Result` with `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The tokenizer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
