/// Represents all errors that can be raised during evaluation.
///
/// The `Display` rendering is the exact two-line diagnostic the interpreter
/// writes to stderr: the message, a newline, then `[line L]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Unary `-` was applied to something other than a number.
    ExpectedNumberOperand {
        /// The source line of the operator.
        line: usize,
    },
    /// An arithmetic or comparison operator received non-number operands.
    ExpectedNumberOperands {
        /// The source line of the operator.
        line: usize,
    },
    /// `+` received operands that are neither two numbers nor two strings.
    ExpectedNumbersOrStrings {
        /// The source line of the operator.
        line: usize,
    },
    /// The right operand of `/` was zero.
    DivisionByZero {
        /// The source line of the operator.
        line: usize,
    },
    /// A variable was read or assigned without being defined.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line of the variable name.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedNumberOperand { line } => {
                write!(f, "Operand must be a number.\n[line {line}]")
            },

            Self::ExpectedNumberOperands { line } => {
                write!(f, "Operands must be numbers.\n[line {line}]")
            },

            Self::ExpectedNumbersOrStrings { line } => {
                write!(f, "Operands must be two numbers or two strings.\n[line {line}]")
            },

            Self::DivisionByZero { line } => {
                write!(f, "Division by zero.\n[line {line}]")
            },

            Self::UndefinedVariable { name, line } => {
                write!(f, "Undefined variable '{name}'.\n[line {line}]")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
