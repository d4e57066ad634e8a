use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// An expression together with the height of its tree.
///
/// A single literal or identifier has height 1.
pub type Measured = (Expr, usize);

/// The tallest expression tree the parser builds.
///
/// Evaluating a tree recurses once per level, and so does dropping it, so
/// a longer chain of operators is rejected with `TooDeep`.
pub const MAX_HEIGHT: usize = 1024;

/// The deepest parenthesis nesting the parser follows.
pub const MAX_NESTING: usize = 256;

/// Parses a token sequence into a [`Program`].
///
/// Convenience wrapper around [`parse_program`] for a slice of `(Token, line)`
/// pairs as produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form a valid program.
///
/// # Example
/// ```
/// use gune::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("2+3*4").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// let expected =
///     Expr::BinaryExpression { left:  Box::new(Expr::NumericLiteral { value: 2.0,
///                                                                    line:  1, }),
///                              op:    BinaryOperator::Add,
///                              right: Box::new(Expr::BinaryExpression {
///                                  left:  Box::new(Expr::NumericLiteral { value: 3.0,
///                                                                        line:  1, }),
///                                  op:    BinaryOperator::Mul,
///                                  right: Box::new(Expr::NumericLiteral { value: 4.0,
///                                                                        line:  1, }),
///                                  line:  1,
///                              }),
///                              line:  1, };
///
/// assert_eq!(program.body, vec![expected]);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    parse_program(&mut tokens.iter().peekable())
}

/// Parses statements until the end-of-input marker.
///
/// Grammar: `program := statement* EOF`
///
/// The marker itself is left unconsumed.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// A [`Program`] whose body holds one expression per statement.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the tokens run out before [`Token::Eof`].
/// - Propagates any errors from statement parsing.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut body = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::Eof, _)) => break,
            Some(_) => body.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(Program { body })
}

/// Parses a single statement.
///
/// Only expression statements exist. The `let` keyword is reserved and
/// rejected wherever an expression is expected.
///
/// Grammar: `statement := expression`
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_expression(tokens)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Errors
/// `TooDeep` if the tree would be taller than [`MAX_HEIGHT`] or the
/// parentheses nest deeper than [`MAX_NESTING`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, 0).map(|(expr, _)| expr)
}
