use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            core::{MAX_NESTING, Measured, ParseResult},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := Identifier
///              | "nil"
///              | Number
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedToken` for any other token, including `let`, `=`, `)` and the
///   end-of-input marker.
/// - `ExpectedClosingParen` if a grouping is not closed.
/// - `LiteralTooLarge` if a number does not fit a finite `f64`.
/// - `TooDeep` if the parentheses nest deeper than [`MAX_NESTING`].
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Measured>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, line) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match token {
        Token::Identifier(symbol) => Ok((Expr::Identifier { symbol: symbol.clone(),
                                                            line:   *line, },
                                         1)),
        Token::Nil => Ok((Expr::NilLiteral { line: *line }, 1)),
        Token::Number(digits) => Ok((parse_number(digits, *line)?, 1)),
        Token::OpenParen => parse_grouping(tokens, nesting + 1, *line),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 line:  *line, }),
    }
}

/// Converts the digits of a number token into a numeric literal.
fn parse_number(digits: &str, line: usize) -> ParseResult<Expr> {
    let value = digits.parse::<f64>()
                      .ok()
                      .filter(|value| value.is_finite())
                      .ok_or(ParseError::LiteralTooLarge { line })?;

    Ok(Expr::NumericLiteral { value, line })
}

/// Parses the rest of a parenthesized expression, after the `(`.
///
/// The grouping itself leaves no node behind; the inner expression is
/// returned as is. `line` is the line of the `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, nesting: usize, line: usize) -> ParseResult<Measured>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if nesting > MAX_NESTING {
        return Err(ParseError::TooDeep { line });
    }

    let (expr, height) = parse_additive(tokens, nesting)?;

    match tokens.next() {
        Some((Token::CloseParen, _)) => Ok((expr, height)),
        Some((tok, line)) => Err(ParseError::ExpectedClosingParen { found: tok.to_string(),
                                                                    line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: expr.line_number() }),
    }
}
