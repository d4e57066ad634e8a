use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The digits are kept verbatim and
    /// converted to a number by the parser.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `let`
    #[token("let")]
    Let,
    /// `nil`
    #[token("nil")]
    Nil,
    /// Identifier tokens such as `x` or `pi2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// One of `+`, `-`, `*`, `/` or `&`.
    #[regex(r"[-+*/&]", |lex| lex.slice().to_string())]
    BinaryOperator(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// Line breaks are skipped, but move the line counter forward.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by the lexer; [`tokenize`] appends it.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) | Self::BinaryOperator(text) => {
                write!(f, "{text}")
            },
            Self::Let => write!(f, "let"),
            Self::Nil => write!(f, "nil"),
            Self::Equals => write!(f, "="),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::NewLine => writeln!(f),
            Self::Ignored => write!(f, " "),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line begins,
/// so errors can point at a line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Converts source text into a token sequence terminated by [`Token::Eof`].
///
/// Every token is paired with the 1-based line it starts on. Scanning stops at
/// the first character that no rule accepts.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] naming the offending character
/// and its line and column.
///
/// # Examples
/// ```
/// use gune::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("3+4").unwrap()
///                                         .into_iter()
///                                         .map(|(token, _)| token)
///                                         .collect();
///
/// assert_eq!(tokens,
///            vec![Token::Number("3".to_string()),
///                 Token::BinaryOperator("+".to_string()),
///                 Token::Number("4".to_string()),
///                 Token::Eof]);
///
/// assert!(tokenize("1 # 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let start = lexer.span().start;
            let line_start = lexer.extras.line_start;
            let character = source.get(start..)
                                  .and_then(|rest| rest.chars().next())
                                  .unwrap_or(char::REPLACEMENT_CHARACTER);
            let column = source.get(line_start..start)
                               .map_or(1, |prefix| prefix.chars().count() + 1);

            return Err(LexError::UnexpectedCharacter { character,
                                                       line: lexer.extras.line,
                                                       column });
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    Ok(tokens)
}
