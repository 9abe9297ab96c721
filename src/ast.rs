use crate::interpreter::value::Value;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form of the language: literals, grouping,
/// unary and binary operations, variable reads, and assignments. Each variant
/// owns its children exclusively, so the tree is acyclic, and each carries the
/// source line of its defining token for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (`nil`, a boolean, a number, or a string).
    Literal {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line: usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The wrapped expression.
        expr: Box<Self>,
        /// Line number of the opening parenthesis.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    Unary {
        /// The unary operator to apply.
        op: UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number of the operator.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison, or equality).
    Binary {
        /// Left operand.
        left: Box<Self>,
        /// The operator.
        op: BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable.
    Assign {
        /// Name of the variable.
        name: String,
        /// The value being assigned.
        value: Box<Self>,
        /// Line number of the variable name.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use loxide::ast::Expr;
    ///
    /// let expr = Expr::Variable {
    ///     name: "x".to_string(),
    ///     line: 5,
    /// };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Grouping { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. } => *line,
        }
    }
}

/// An AST node representing a statement.
///
/// Statements are executed for their side effects and produce no value.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A standalone expression evaluated and discarded.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A `print` statement.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number of the `print` keyword.
        line: usize,
    },
    /// A variable declaration using `var`.
    Var {
        /// The name of the variable.
        name: String,
        /// The initializer, when one was written. Absent means `nil`.
        initializer: Option<Expr>,
        /// Line number of the `var` keyword.
        line: usize,
    },
    /// A brace-delimited block introducing a new lexical scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number of the opening brace.
        line: usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
