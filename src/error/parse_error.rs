/// Pinpoints where in the token sequence a syntax error was detected.
///
/// Diagnostics either anchor to a concrete token (rendered as
/// `[line L] Error at '<lexeme>':`) or to the end of input (rendered as
/// `[line L] Error at end:`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    /// The error was detected at an ordinary token.
    Token {
        /// The exact source text of the offending token.
        lexeme: String,
        /// The source line of the offending token.
        line: usize,
    },
    /// The error was detected at end of input.
    End {
        /// The line at end of input.
        line: usize,
    },
}

impl std::fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token { lexeme, line } => write!(f, "[line {line}] Error at '{lexeme}':"),
            Self::End { line } => write!(f, "[line {line}] Error at end:"),
        }
    }
}

/// Represents all errors that can occur during scanning or parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The scanner met a character no lexical rule accepts.
    UnexpectedCharacter {
        /// The rejected source text.
        character: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was still open at end of input.
    UnterminatedString {
        /// The line at end of input, counting newlines inside the literal.
        line: usize,
    },
    /// An expression was required but the next token cannot start one.
    ExpectedExpression {
        /// Where the error was detected.
        location: ErrorLocation,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Where the error was detected.
        location: ErrorLocation,
    },
    /// A closing brace `}` was expected but not found.
    ExpectedClosingBrace {
        /// Where the error was detected.
        location: ErrorLocation,
    },
    /// `var` was not followed by an identifier.
    ExpectedVariableName {
        /// Where the error was detected.
        location: ErrorLocation,
    },
    /// A statement was missing its terminating semicolon.
    ExpectedSemicolon {
        /// What the semicolon should have followed, e.g. `"expression"`.
        after: &'static str,
        /// Where the error was detected.
        location: ErrorLocation,
    },
    /// The left-hand side of `=` is not assignable.
    InvalidAssignmentTarget {
        /// The location of the `=` token.
        location: ErrorLocation,
    },
    /// Input continued after a complete expression in single-expression mode.
    UnexpectedTrailingTokens {
        /// Where the error was detected.
        location: ErrorLocation,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "[line {line}] Error: Unexpected character: {character}")
            },

            Self::UnterminatedString { line } => {
                write!(f, "[line {line}] Error: Unterminated string.")
            },

            Self::ExpectedExpression { location } => {
                write!(f, "{location} Expect expression.")
            },

            Self::ExpectedClosingParen { location } => {
                write!(f, "{location} Expect ')' after expression.")
            },

            Self::ExpectedClosingBrace { location } => {
                write!(f, "{location} Expect '}}' after block.")
            },

            Self::ExpectedVariableName { location } => {
                write!(f, "{location} Expect variable name.")
            },

            Self::ExpectedSemicolon { after, location } => {
                write!(f, "{location} Expect ';' after {after}.")
            },

            Self::InvalidAssignmentTarget { location } => {
                write!(f, "{location} Invalid assignment target.")
            },

            Self::UnexpectedTrailingTokens { location } => {
                write!(f, "{location} Unexpected tokens after expression.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
