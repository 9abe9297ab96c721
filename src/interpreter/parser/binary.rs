use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_unary,
        },
    },
};

/// Parses equality expressions.
///
/// Handles left-associative chains of `==` and `!=`.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_comparison(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
            && let Some(op) = token_to_binary_operator(&token.kind)
            && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
        {
            let line = token.line;
            tokens.advance();
            let right = parse_comparison(tokens)?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
                line,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses comparison expressions.
///
/// Handles left-associative chains of `<`, `<=`, `>`, and `>=`.
///
/// The rule is: `comparison := term (("<" | "<=" | ">" | ">=") term)*`
pub fn parse_comparison(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_term(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
            && let Some(op) = token_to_binary_operator(&token.kind)
            && matches!(
                op,
                BinaryOperator::Less
                    | BinaryOperator::LessEqual
                    | BinaryOperator::Greater
                    | BinaryOperator::GreaterEqual
            )
        {
            let line = token.line;
            tokens.advance();
            let right = parse_term(tokens)?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
                line,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `term := factor (("-" | "+") factor)*`
pub fn parse_term(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
            && let Some(op) = token_to_binary_operator(&token.kind)
            && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = token.line;
            tokens.advance();
            let right = parse_factor(tokens)?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
                line,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `factor := unary (("/" | "*") unary)*`
pub fn parse_factor(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
            && let Some(op) = token_to_binary_operator(&token.kind)
            && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = token.line;
            tokens.advance();
            let right = parse_unary(tokens)?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
                line,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use loxide::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(
///     token_to_binary_operator(&TokenKind::Plus),
///     Some(BinaryOperator::Add)
/// );
/// assert_eq!(token_to_binary_operator(&TokenKind::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
