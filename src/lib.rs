//! # loxide
//!
//! loxide is a tree-walking interpreter for the Lox scripting language,
//! written in Rust. It scans, parses, and evaluates programs with C-style
//! syntax, double-precision numbers, strings, booleans, `nil`, and
//! lexically block-scoped variables.
//!
//! The binary exposes four commands over a source file: `tokenize` (print
//! the token listing), `parse` (print one expression in prefix notation),
//! `evaluate` (evaluate one expression and print its value), and `run`
//! (execute a program).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::{
    error::ScriptError,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::tokenize,
        parser::{core::parse_single_expression, statement::parse_program},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator and the printer.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for scanning, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// code. It standardizes error reporting and carries detailed information
/// about failures, including source lines, offending lexemes, and the exact
/// diagnostic renderings the command-line surface prints.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and location info for context.
/// - Distinguishes syntax failures from runtime failures at the top level.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the environment, and the printer to provide a complete
/// runtime for source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared across phases.
///
/// # Responsibilities
/// - Renders numbers in the printer's one-fractional-digit form.
pub mod util;

/// Scans, parses, and executes a whole program, writing `print` output to
/// `out`.
///
/// Scanner and parser diagnostics abort before any statement runs; a
/// runtime error aborts at the failing statement, leaving earlier output in
/// `out`.
///
/// # Errors
/// `ScriptError::Syntax` with every scanner/parser diagnostic in source
/// order, or `ScriptError::Runtime` with the first runtime error.
///
/// # Examples
/// ```
/// use loxide::run_source;
///
/// let mut out = Vec::new();
/// run_source("var a = 1; { var a = 2; print a; } print a;", &mut out).unwrap();
/// assert_eq!(out, b"2\n1\n");
///
/// // 'x' is never defined, so execution fails at runtime.
/// let mut out = Vec::new();
/// assert!(run_source("print x;", &mut out).is_err());
/// ```
pub fn run_source<W: Write>(source: &str, out: &mut W) -> Result<(), ScriptError> {
    let scanned = tokenize(source);
    if scanned.had_error() {
        return Err(ScriptError::Syntax(scanned.errors));
    }

    let (statements, errors) = parse_program(&scanned);
    if !errors.is_empty() {
        return Err(ScriptError::Syntax(errors));
    }

    let mut interpreter = Interpreter::new(out);
    interpreter.run(&statements)?;
    Ok(())
}

/// Scans, parses, and evaluates a single expression, writing its
/// stringified value plus a newline to `out`.
///
/// # Errors
/// `ScriptError::Syntax` for scanner/parser diagnostics,
/// `ScriptError::Runtime` when evaluation fails.
///
/// # Examples
/// ```
/// use loxide::evaluate_source;
///
/// let mut out = Vec::new();
/// evaluate_source(r#""foo" + "bar""#, &mut out).unwrap();
/// assert_eq!(out, b"foobar\n");
/// ```
pub fn evaluate_source<W: Write>(source: &str, out: &mut W) -> Result<(), ScriptError> {
    let scanned = tokenize(source);
    if scanned.had_error() {
        return Err(ScriptError::Syntax(scanned.errors));
    }

    let expr =
        parse_single_expression(&scanned).map_err(|error| ScriptError::Syntax(vec![error]))?;

    let mut interpreter = Interpreter::new(io::sink());
    let value = interpreter.eval(&expr)?;
    let _ = writeln!(out, "{value}");
    Ok(())
}
