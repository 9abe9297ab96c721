use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream},
            statement::parse_declaration,
        },
    },
};

/// Parses the body of a block, up to and including the closing brace.
///
/// Called with the opening `{` already consumed. Declarations are parsed
/// until the matching `}`; reaching end of input first is an error at end.
///
/// Grammar: `block := "{" declaration* "}"`
pub fn parse_block(tokens: &mut TokenStream<'_>) -> ParseResult<Vec<Stmt>> {
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some(token) if matches!(token.kind, TokenKind::RightBrace) => {
                tokens.advance();
                return Ok(statements);
            },
            Some(_) => statements.push(parse_declaration(tokens)?),
            None => {
                return Err(ParseError::ExpectedClosingBrace {
                    location: tokens.end_location(),
                });
            },
        }
    }
}
