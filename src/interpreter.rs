/// The environment module implements lexical scoping.
///
/// Frames are stored in an arena and linked to their parents by index. Names
/// are declared in one frame and resolved by walking up the chain of parents.
///
/// # Responsibilities
/// - Declares, assigns and looks up variables.
/// - Allows shadowing in child frames while rejecting redeclaration in the
///   same frame.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, resolves identifiers through the
/// environment, and applies arithmetic operators.
///
/// # Responsibilities
/// - Evaluates programs and expressions, left operand before right operand.
/// - Enforces the operand kind rules for `Float` and `Nil`.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to numbers, identifiers, keywords, operators and
/// parentheses. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Recognizes the `let` and `nil` keywords.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the program.
///
/// # Responsibilities
/// - Converts tokens into expression nodes with correct precedence and
///   left-associativity.
/// - Validates the grammar, reporting errors with line information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum with its `Float` and `Nil` variants.
/// - Renders values as text.
pub mod value;
