use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_HEIGHT, Measured, ParseResult},
            primary::parse_primary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `8 - 3 - 2`
/// parses as `(8 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `nesting`: Number of open parentheses around this expression.
///
/// # Returns
/// An `Expr::BinaryExpression` tree representing the parsed expression, and
/// its height.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Measured>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, nesting)?;

    while let Some((token, line)) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(token)
          && op.is_additive()
    {
        tokens.next();
        let right = parse_multiplicative(tokens, nesting)?;
        left = combine(left, op, right, *line)?;
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `&`.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "&") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `nesting`: Number of open parentheses around this expression.
///
/// # Returns
/// A binary expression tree combining primary nodes, and its height.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Measured>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_primary(tokens, nesting)?;

    while let Some((token, line)) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(token)
          && op.is_multiplicative()
    {
        tokens.next();
        let right = parse_primary(tokens, nesting)?;
        left = combine(left, op, right, *line)?;
    }

    Ok(left)
}

/// Joins two operands under a binary operator node.
///
/// Fails with `TooDeep` once the new node would be taller than
/// [`MAX_HEIGHT`].
fn combine((left, left_height): Measured,
           op: BinaryOperator,
           (right, right_height): Measured,
           line: usize)
           -> ParseResult<Measured> {
    let height = left_height.max(right_height) + 1;
    if height > MAX_HEIGHT {
        return Err(ParseError::TooDeep { line });
    }

    Ok((Expr::BinaryExpression { left: Box::new(left),
                                 op,
                                 right: Box::new(right),
                                 line },
        height))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is an operator token, and
/// `None` for all other tokens.
///
/// # Example
/// ```
/// use gune::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::BinaryOperator("&".to_string())),
///            Some(BinaryOperator::Ampersand));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::BinaryOperator(symbol) => BinaryOperator::from_symbol(symbol),
        _ => None,
    }
}
