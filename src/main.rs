use std::{fs, io, process};

use clap::Parser;
use loxide::{
    error::ScriptError,
    evaluate_source,
    interpreter::{
        lexer::tokenize,
        parser::core::parse_single_expression,
        printer::print_expr,
    },
    run_source,
};

/// Exit status used when the scanner or parser rejects the input.
const EXIT_SYNTAX_ERROR: i32 = 65;
/// Exit status used when evaluation fails at runtime.
const EXIT_RUNTIME_ERROR: i32 = 70;

/// loxide is a tree-walking interpreter for the Lox scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// One of: tokenize, parse, evaluate, run.
    command: String,

    /// Path to the Lox source file.
    filename: String,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            process::exit(1);
        },
    };

    let source = fs::read_to_string(&args.filename).unwrap_or_else(|_| {
        eprintln!(
            "Failed to read the input file '{}'. Perhaps this file does not exist?",
            &args.filename
        );
        process::exit(1);
    });

    let status = match args.command.as_str() {
        "tokenize" => tokenize_command(&source),
        "parse" => parse_command(&source),
        "evaluate" => evaluate_command(&source),
        "run" => run_command(&source),
        other => {
            eprintln!("Unknown command: {other}");
            1
        },
    };

    process::exit(status);
}

/// Prints the token listing, one `<KIND> <LEXEME> <LITERAL>` row per token,
/// terminated by the `EOF` row.
fn tokenize_command(source: &str) -> i32 {
    let scanned = tokenize(source);

    for error in &scanned.errors {
        eprintln!("{error}");
    }
    for token in &scanned.tokens {
        println!("{token}");
    }
    println!("EOF  null");

    if scanned.had_error() { EXIT_SYNTAX_ERROR } else { 0 }
}

/// Parses one expression and prints it in parenthesized prefix notation.
fn parse_command(source: &str) -> i32 {
    let scanned = tokenize(source);
    if scanned.had_error() {
        for error in &scanned.errors {
            eprintln!("{error}");
        }
        return EXIT_SYNTAX_ERROR;
    }

    match parse_single_expression(&scanned) {
        Ok(expr) => {
            println!("{}", print_expr(&expr));
            0
        },
        Err(error) => {
            eprintln!("{error}");
            EXIT_SYNTAX_ERROR
        },
    }
}

/// Evaluates one expression and prints its stringified value.
fn evaluate_command(source: &str) -> i32 {
    report(evaluate_source(source, &mut io::stdout()))
}

/// Executes a whole program.
fn run_command(source: &str) -> i32 {
    report(run_source(source, &mut io::stdout()))
}

/// Prints any diagnostics to stderr and maps the outcome to an exit status.
fn report(result: Result<(), ScriptError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(ScriptError::Syntax(errors)) => {
            for error in &errors {
                eprintln!("{error}");
            }
            EXIT_SYNTAX_ERROR
        },
        Err(ScriptError::Runtime(error)) => {
            eprintln!("{error}");
            EXIT_RUNTIME_ERROR
        },
    }
}
