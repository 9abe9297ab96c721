use logos::{Logos, Skip};

use crate::{error::ParseError, util::num::format_number};

/// The kind of a lexical token, including any decoded literal payload.
///
/// This enum defines all recognized tokens of the language. Number and string
/// kinds carry their decoded values; keywords and punctuation carry nothing.
/// Whitespace, comments, and newlines are consumed but never surface as
/// tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexicalError)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", lex_number)]
    #[regex(r"[0-9]+", lex_number)]
    Number(f64),
    /// String literal tokens. The payload is the text between the quotes.
    #[regex(r#""[^"]*""#, lex_string)]
    #[token("\"", lex_unterminated_string)]
    String(String),
    /// Identifier tokens; variable names such as `x` or `counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Spaces, tabs, and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Whitespace,
    /// Line feeds are consumed while tracking the current line.
    #[token("\n", lex_newline)]
    Newline,
}

impl TokenKind {
    /// The upper-case name printed in the first column of the `tokenize`
    /// listing.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::String(_) => "STRING",
            Self::Identifier => "IDENTIFIER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Fun => "FUN",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Comment => "COMMENT",
            Self::Whitespace => "WHITESPACE",
            Self::Newline => "NEWLINE",
        }
    }
}

/// A scanned token: its kind, the exact source slice it came from, and the
/// 1-based line it ends on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token kind, including any decoded literal.
    pub kind: TokenKind,
    /// The exact substring of the source this token was produced from.
    pub lexeme: String,
    /// 1-based source line. For multi-line string literals this is the line
    /// the literal ends on.
    pub line: usize,
}

impl Token {
    /// The literal column of the `tokenize` listing: `null` for tokens
    /// without a literal, the decoded interior for strings, and the
    /// one-fractional-digit form for integer-valued numbers.
    #[must_use]
    pub fn literal_text(&self) -> String {
        match &self.kind {
            TokenKind::Number(value) => format_number(*value),
            TokenKind::String(text) => text.clone(),
            _ => "null".to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.kind.name(), self.lexeme, self.literal_text())
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Lexical failures surfaced through the `logos` error channel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexicalError {
    /// No lexical rule accepted the input at this position.
    #[default]
    UnexpectedCharacter,
    /// A string literal was still open at end of input.
    UnterminatedString,
}

/// Output of a full scan over one source buffer.
///
/// Scanning never stops early: `tokens` holds everything that lexed,
/// `errors` holds every diagnostic in source order, and `eof_line` is the
/// 1-based line at end of input (where the terminal `EOF` marker sits).
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedSource {
    /// The tokens, in source order.
    pub tokens: Vec<Token>,
    /// Lexical diagnostics, in source order.
    pub errors: Vec<ParseError>,
    /// The line at end of input.
    pub eof_line: usize,
}

impl ScannedSource {
    /// Whether any lexical diagnostic was reported.
    #[must_use]
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scans `source` to end of input, collecting tokens and lexical
/// diagnostics.
///
/// # Examples
/// ```
/// use loxide::interpreter::lexer::{TokenKind, tokenize};
///
/// let scanned = tokenize("1 + 2");
/// assert!(!scanned.had_error());
/// assert_eq!(scanned.tokens.len(), 3);
/// assert_eq!(scanned.tokens[1].kind, TokenKind::Plus);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> ScannedSource {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                lexeme: lexer.slice().to_string(),
                line: lexer.extras.line,
            }),
            Err(LexicalError::UnterminatedString) => {
                errors.push(ParseError::UnterminatedString {
                    line: lexer.extras.line,
                });
            },
            Err(LexicalError::UnexpectedCharacter) => {
                errors.push(ParseError::UnexpectedCharacter {
                    character: lexer.slice().to_string(),
                    line: lexer.extras.line,
                });
            },
        }
    }

    ScannedSource {
        tokens,
        errors,
        eof_line: lexer.extras.line,
    }
}

/// Decodes a numeric literal from the current token slice.
fn lex_number(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Decodes a terminated string literal, counting the newlines it spans.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    let newlines = slice.chars().filter(|&c| c == '\n').count();
    lex.extras.line += newlines;
    slice[1..slice.len() - 1].to_string()
}

/// Consumes the rest of the input after an unmatched opening quote.
///
/// The remainder is swallowed so its newlines still advance the line counter
/// before the diagnostic is reported.
fn lex_unterminated_string(lex: &mut logos::Lexer<TokenKind>) -> Result<String, LexicalError> {
    let rest = lex.remainder();
    lex.extras.line += rest.chars().filter(|&c| c == '\n').count();
    lex.bump(rest.len());
    Err(LexicalError::UnterminatedString)
}

/// Advances the line counter past a line feed without emitting a token.
fn lex_newline(lex: &mut logos::Lexer<TokenKind>) -> Skip {
    lex.extras.line += 1;
    Skip
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let scanned = tokenize(input);
        assert!(scanned.errors.is_empty(), "unexpected errors: {:?}", scanned.errors);
        scanned.tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn fixed_tokens() {
        assert_eq!(
            kinds("(){},.-+;*/ ! != = == < <= > >="),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Bang,
                TokenKind::BangEqual,
                TokenKind::Equal,
                TokenKind::EqualEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
            ]
        );
    }

    #[test]
    fn two_char_operators_win_over_one_char() {
        assert_eq!(
            kinds("===!="),
            vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::BangEqual]
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("var x andy and _y t42"),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::And,
                TokenKind::Identifier,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn numbers_keep_their_lexeme() {
        let scanned = tokenize("42.00 7 1234.5678");
        assert_eq!(scanned.tokens[0].kind, TokenKind::Number(42.0));
        assert_eq!(scanned.tokens[0].lexeme, "42.00");
        assert_eq!(scanned.tokens[1].kind, TokenKind::Number(7.0));
        assert_eq!(scanned.tokens[2].kind, TokenKind::Number(1234.5678));
    }

    #[test]
    fn trailing_dot_is_not_part_of_a_number() {
        assert_eq!(
            kinds("123."),
            vec![TokenKind::Number(123.0), TokenKind::Dot]
        );
    }

    #[test]
    fn string_literal_decodes_interior() {
        let scanned = tokenize(r#""hello""#);
        assert_eq!(scanned.tokens[0].kind, TokenKind::String("hello".to_string()));
        assert_eq!(scanned.tokens[0].lexeme, r#""hello""#);
    }

    #[test]
    fn multiline_string_tracks_lines() {
        let scanned = tokenize("\"a\nb\"\nvar");
        assert_eq!(scanned.tokens[0].kind, TokenKind::String("a\nb".to_string()));
        assert_eq!(scanned.tokens[0].line, 2);
        assert_eq!(scanned.tokens[1].line, 3);
        assert_eq!(scanned.eof_line, 3);
    }

    #[test]
    fn unterminated_string_counts_interior_newlines() {
        let scanned = tokenize("\"abc\ndef");
        assert!(scanned.tokens.is_empty());
        assert_eq!(
            scanned.errors,
            vec![ParseError::UnterminatedString { line: 2 }]
        );
    }

    #[test]
    fn unexpected_character_is_reported_and_scanning_continues() {
        let scanned = tokenize("@ + #");
        assert_eq!(scanned.tokens, vec![Token {
            kind: TokenKind::Plus,
            lexeme: "+".to_string(),
            line: 1,
        }]);
        assert_eq!(scanned.errors.len(), 2);
        assert_eq!(
            scanned.errors[0].to_string(),
            "[line 1] Error: Unexpected character: @"
        );
    }

    #[test]
    fn comments_are_ignored() {
        assert_eq!(kinds("true // false\nnil"), vec![TokenKind::True, TokenKind::Nil]);
    }

    #[test]
    fn scanner_keeps_track_of_lines() {
        let scanned = tokenize("1\n2 3\n4");
        let lines: Vec<usize> = scanned.tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 2, 3]);
        assert_eq!(scanned.eof_line, 3);
    }

    #[test]
    fn token_display_matches_the_listing_format() {
        let scanned = tokenize("(42.00 \"hi\" foo");
        let rows: Vec<String> = scanned.tokens.iter().map(ToString::to_string).collect();
        assert_eq!(rows, vec![
            "LEFT_PAREN ( null",
            "NUMBER 42.00 42.0",
            "STRING \"hi\" hi",
            "IDENTIFIER foo null",
        ]);
    }
}
