/// The environment module holds the chain of lexical scopes.
///
/// Variables live in a stack of scopes rooted at the global scope. The
/// environment resolves reads and writes by walking from the innermost
/// scope outward, and declarations always bind in the innermost scope.
///
/// # Responsibilities
/// - Defines, reads, and assigns variable bindings.
/// - Pushes and pops block scopes.
/// - Reports undefined-variable errors with source locations.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, executes
/// statements, performs arithmetic and logical operations, manages variable
/// state, and writes `print` output. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages block scopes and variable state through the environment.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (scanner) reads the raw source text and produces the sequence
/// of tokens, each with its kind, exact source slice, decoded literal, and
/// line number. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with type and source location.
/// - Handles numeric and string literals, identifiers, and keywords.
/// - Collects lexical errors for invalid or malformed input while always
///   scanning to end of input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with location info.
/// - Recovers at statement boundaries so one error does not hide the rest.
pub mod parser;
/// The printer module renders the AST in parenthesized prefix notation.
///
/// This is the output format of the `parse` command and a debugging aid for
/// tests.
///
/// # Responsibilities
/// - Renders expressions and statements as `(op child …)` text.
/// - Keeps the one-fractional-digit number form for integer-valued doubles.
pub mod printer;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the dynamically-typed `Value` produced by every
/// expression: `nil`, booleans, double-precision numbers, and strings,
/// together with the language's truthiness and equality rules and the
/// evaluator's stringification.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, equality, and `Display`.
pub mod value;
