/// Scanning and parsing errors.
///
/// Defines all error types that can occur while turning source text into
/// tokens and tokens into an AST, together with the location information used
/// to render them.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating expressions
/// and executing statements, such as type mismatches, division by zero, and
/// undefined variables.
pub mod runtime_error;

pub use parse_error::{ErrorLocation, ParseError};
pub use runtime_error::RuntimeError;

/// Top-level failure of a whole script.
///
/// Distinguishes the two failure classes a host cares about: syntax problems
/// found before any statement ran, and runtime errors that aborted execution.
/// The CLI maps the former to exit code 65 and the latter to exit code 70.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    /// One or more scanner or parser diagnostics, in source order.
    Syntax(Vec<ParseError>),
    /// Evaluation aborted at the first runtime error.
    Runtime(RuntimeError),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(errors) => {
                let mut first = true;
                for error in errors {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                    first = false;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<RuntimeError> for ScriptError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<Vec<ParseError>> for ScriptError {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Syntax(errors)
    }
}
