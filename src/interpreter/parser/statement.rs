use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        lexer::{ScannedSource, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, TokenStream, parse_expression},
        },
    },
};

/// Parses a whole program: declarations until end of input.
///
/// On a parse error the parser synchronizes to the next statement boundary
/// and continues, so one bad statement does not hide diagnostics in the rest
/// of the file. Returns everything that parsed together with every
/// diagnostic, in source order; a non-empty diagnostic list means the
/// program must not run.
///
/// # Example
/// ```
/// use loxide::interpreter::{lexer::tokenize, parser::statement::parse_program};
///
/// let scanned = tokenize("var a = 1; print a;");
/// let (statements, errors) = parse_program(&scanned);
/// assert_eq!(statements.len(), 2);
/// assert!(errors.is_empty());
/// ```
#[must_use]
pub fn parse_program(scanned: &ScannedSource) -> (Vec<Stmt>, Vec<ParseError>) {
    let mut tokens = TokenStream::new(scanned);
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while tokens.peek().is_some() {
        match parse_declaration(&mut tokens) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                errors.push(error);
                synchronize(&mut tokens);
            },
        }
    }

    (statements, errors)
}

/// Parses a declaration: a `var` statement or any other statement.
///
/// Grammar: `declaration := varDecl | statement`
pub fn parse_declaration(tokens: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    if let Some(token) = tokens.peek()
        && matches!(token.kind, TokenKind::Var)
    {
        let line = token.line;
        tokens.advance();
        return parse_var_declaration(tokens, line);
    }

    parse_statement(tokens)
}

/// Parses the remainder of a `var` declaration.
///
/// Grammar: `varDecl := "var" IDENTIFIER ("=" expression)? ";"`
fn parse_var_declaration(tokens: &mut TokenStream<'_>, line: usize) -> ParseResult<Stmt> {
    let name = match tokens.peek() {
        Some(token) if matches!(token.kind, TokenKind::Identifier) => {
            let name = token.lexeme.clone();
            tokens.advance();
            name
        },
        _ => {
            return Err(ParseError::ExpectedVariableName {
                location: tokens.location(),
            });
        },
    };

    let initializer = if let Some(token) = tokens.peek()
        && matches!(token.kind, TokenKind::Equal)
    {
        tokens.advance();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    expect_semicolon(tokens, "variable declaration")?;

    Ok(Stmt::Var {
        name,
        initializer,
        line,
    })
}

/// Parses a non-declaration statement.
///
/// Grammar: `statement := printStmt | block | exprStmt`
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    if let Some(token) = tokens.peek() {
        match token.kind {
            TokenKind::Print => {
                let line = token.line;
                tokens.advance();
                return parse_print_statement(tokens, line);
            },
            TokenKind::LeftBrace => {
                let line = token.line;
                tokens.advance();
                let statements = parse_block(tokens)?;
                return Ok(Stmt::Block { statements, line });
            },
            _ => {},
        }
    }

    parse_expression_statement(tokens)
}

/// Parses the remainder of a `print` statement.
///
/// Grammar: `printStmt := "print" expression ";"`
fn parse_print_statement(tokens: &mut TokenStream<'_>, line: usize) -> ParseResult<Stmt> {
    let expr = parse_expression(tokens)?;
    expect_semicolon(tokens, "value")?;
    Ok(Stmt::Print { expr, line })
}

/// Parses an expression statement.
///
/// Grammar: `exprStmt := expression ";"`
fn parse_expression_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    let expr = parse_expression(tokens)?;
    expect_semicolon(tokens, "expression")?;
    let line = expr.line_number();
    Ok(Stmt::Expression { expr, line })
}

/// Consumes a `;`, or reports what it should have terminated.
fn expect_semicolon(tokens: &mut TokenStream<'_>, after: &'static str) -> ParseResult<()> {
    if let Some(token) = tokens.peek()
        && matches!(token.kind, TokenKind::Semicolon)
    {
        tokens.advance();
        return Ok(());
    }

    Err(ParseError::ExpectedSemicolon {
        after,
        location: tokens.location(),
    })
}

/// Skips tokens to the next plausible statement boundary after an error.
///
/// Advances until just past a `;` or until the next token is a keyword that
/// can start a statement, so the parser resumes on ground it can make sense
/// of.
fn synchronize(tokens: &mut TokenStream<'_>) {
    while let Some(token) = tokens.advance() {
        if matches!(token.kind, TokenKind::Semicolon) {
            return;
        }

        if let Some(next) = tokens.peek()
            && matches!(
                next.kind,
                TokenKind::Class
                    | TokenKind::Fun
                    | TokenKind::Var
                    | TokenKind::For
                    | TokenKind::If
                    | TokenKind::While
                    | TokenKind::Print
                    | TokenKind::Return
            )
        {
            return;
        }
    }
}
