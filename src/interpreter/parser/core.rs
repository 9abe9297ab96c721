use std::iter::Peekable;
use std::slice;

use crate::{
    ast::Expr,
    error::{ErrorLocation, ParseError},
    interpreter::{
        lexer::{ScannedSource, Token, TokenKind},
        parser::binary::parse_equality,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The parser's view of the scanner output: the token sequence with
/// single-token lookahead, plus the line at end of input for `Error at end`
/// diagnostics.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: Peekable<slice::Iter<'a, Token>>,
    eof_line: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over a scan result.
    #[must_use]
    pub fn new(scanned: &'a ScannedSource) -> Self {
        Self {
            tokens: scanned.tokens.iter().peekable(),
            eof_line: scanned.eof_line,
        }
    }

    /// The next token without consuming it, or `None` at end of input.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    /// Consumes and returns the next token, or `None` at end of input.
    pub fn advance(&mut self) -> Option<&'a Token> {
        self.tokens.next()
    }

    /// A diagnostic location for the next token, or for end of input when
    /// the stream is exhausted.
    pub fn location(&mut self) -> ErrorLocation {
        match self.peek() {
            Some(token) => ErrorLocation::Token {
                lexeme: token.lexeme.clone(),
                line: token.line,
            },
            None => self.end_location(),
        }
    }

    /// The diagnostic location of end of input.
    #[must_use]
    pub const fn end_location(&self) -> ErrorLocation {
        ErrorLocation::End {
            line: self.eof_line,
        }
    }
}

/// Parses exactly one expression spanning the whole input.
///
/// This is the entry point behind the `parse` and `evaluate` commands.
///
/// # Errors
/// Any expression-level parse error, or `UnexpectedTrailingTokens` when
/// input remains after the expression.
///
/// # Example
/// ```
/// use loxide::interpreter::{lexer::tokenize, parser::core::parse_single_expression};
///
/// let scanned = tokenize("1 + 2 * 3");
/// assert!(parse_single_expression(&scanned).is_ok());
///
/// let scanned = tokenize("1 2");
/// assert!(parse_single_expression(&scanned).is_err());
/// ```
pub fn parse_single_expression(scanned: &ScannedSource) -> ParseResult<Expr> {
    let mut tokens = TokenStream::new(scanned);
    let expr = parse_expression(&mut tokens)?;

    if tokens.peek().is_some() {
        return Err(ParseError::UnexpectedTrailingTokens {
            location: tokens.location(),
        });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_assignment(tokens)
}

/// Parses an assignment expression.
///
/// The left-hand side is parsed as a full expression first; only afterwards,
/// when an `=` follows, is it checked to be a plain variable and rewritten
/// into an assignment node. Anything else on the left of `=` is an invalid
/// assignment target, reported at the `=` token.
///
/// Assignment is right-associative: `a = b = 1` assigns `1` to `b`, then to
/// `a`.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | equality`
fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let expr = parse_equality(tokens)?;

    if let Some(token) = tokens.peek()
        && matches!(token.kind, TokenKind::Equal)
    {
        let equals = ErrorLocation::Token {
            lexeme: token.lexeme.clone(),
            line: token.line,
        };
        tokens.advance();

        let value = parse_assignment(tokens)?;

        return match expr {
            Expr::Variable { name, line } => Ok(Expr::Assign {
                name,
                value: Box::new(value),
                line,
            }),
            _ => Err(ParseError::InvalidAssignmentTarget { location: equals }),
        };
    }

    Ok(expr)
}
