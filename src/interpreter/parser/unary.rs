use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, TokenStream, parse_expression},
        value::Value,
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (numeric negation) and `!` (logical
/// not). Unary operators are right-associative, so `!-x` parses as
/// `!(-x)`.
///
/// Grammar: `unary := ("!" | "-") unary | primary`
pub fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if let Some(token) = tokens.peek()
        && let Some(op) = token_to_unary_operator(&token.kind)
    {
        let line = token.line;
        tokens.advance();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::Unary {
            op,
            expr: Box::new(expr),
            line,
        });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar: the literal
/// keywords `true`, `false`, and `nil`, number and string literals, variable
/// references, and parenthesized expressions. Any other token cannot start
/// an expression and is reported as such.
///
/// Grammar:
/// ```text
///     primary := "true" | "false" | "nil" | NUMBER | STRING
///              | IDENTIFIER | "(" expression ")"
/// ```
pub fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Some(token) = tokens.peek() else {
        return Err(ParseError::ExpectedExpression {
            location: tokens.end_location(),
        });
    };

    let line = token.line;
    match &token.kind {
        TokenKind::False => {
            tokens.advance();
            Ok(Expr::Literal {
                value: Value::Bool(false),
                line,
            })
        },
        TokenKind::True => {
            tokens.advance();
            Ok(Expr::Literal {
                value: Value::Bool(true),
                line,
            })
        },
        TokenKind::Nil => {
            tokens.advance();
            Ok(Expr::Literal {
                value: Value::Nil,
                line,
            })
        },
        TokenKind::Number(n) => {
            let value = Value::Number(*n);
            tokens.advance();
            Ok(Expr::Literal { value, line })
        },
        TokenKind::String(s) => {
            let value = Value::String(s.clone());
            tokens.advance();
            Ok(Expr::Literal { value, line })
        },
        TokenKind::Identifier => {
            let name = token.lexeme.clone();
            tokens.advance();
            Ok(Expr::Variable { name, line })
        },
        TokenKind::LeftParen => {
            tokens.advance();
            parse_grouping(tokens, line)
        },
        _ => Err(ParseError::ExpectedExpression {
            location: tokens.location(),
        }),
    }
}

/// Parses the remainder of a parenthesized expression.
///
/// Called with the `(` already consumed; requires the matching `)`.
fn parse_grouping(tokens: &mut TokenStream<'_>, line: usize) -> ParseResult<Expr> {
    let expr = parse_expression(tokens)?;

    if let Some(token) = tokens.peek()
        && matches!(token.kind, TokenKind::RightParen)
    {
        tokens.advance();
        return Ok(Expr::Grouping {
            expr: Box::new(expr),
            line,
        });
    }

    Err(ParseError::ExpectedClosingParen {
        location: tokens.location(),
    })
}

/// Maps a token kind to its corresponding unary operator.
#[must_use]
pub const fn token_to_unary_operator(kind: &TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Minus => Some(UnaryOperator::Negate),
        TokenKind::Bang => Some(UnaryOperator::Not),
        _ => None,
    }
}
