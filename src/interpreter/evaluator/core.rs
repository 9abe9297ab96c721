use std::io::Write;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking evaluator.
///
/// Holds the environment chain and the sink that `print` statements write
/// to. One interpreter executes one program; the first runtime error aborts
/// execution and propagates out of [`Interpreter::run`].
#[derive(Debug)]
pub struct Interpreter<W: Write> {
    environment: Environment,
    output: W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global scope writing `print`
    /// output to `output`.
    pub fn new(output: W) -> Self {
        Self {
            environment: Environment::new(),
            output,
        }
    }

    /// Executes a program: its statements in order, stopping at the first
    /// runtime error.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by any statement; later statements do
    /// not run.
    pub fn run(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(())
            },
            Stmt::Print { expr, .. } => {
                let value = self.eval(expr)?;
                let _ = writeln!(self.output, "{value}");
                Ok(())
            },
            Stmt::Var {
                name, initializer, ..
            } => {
                let value = match initializer {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(name, value);
                Ok(())
            },
            Stmt::Block { statements, .. } => self.execute_block(statements),
        }
    }

    /// Executes a block inside a fresh child scope.
    ///
    /// The scope is popped on every exit path, including the error path, so
    /// an aborted block never leaks bindings into its enclosing scope.
    fn execute_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        self.environment.push_scope();

        let mut result = Ok(());
        for statement in statements {
            result = self.execute(statement);
            if result.is_err() {
                break;
            }
        }

        self.environment.pop_scope();
        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands of binary operators evaluate left before right, and both
    /// fully, before the operator applies. Assignment evaluates its
    /// right-hand side before the store and yields the assigned value.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by an operator or a variable lookup.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.clone()),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Unary { op, expr, line } => {
                let operand = self.eval(expr)?;
                eval_unary(*op, &operand, *line)
            },
            Expr::Binary {
                left,
                op,
                right,
                line,
            } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *line)
            },
            Expr::Variable { name, line } => self.environment.get(name, *line),
            Expr::Assign { name, value, line } => {
                let value = self.eval(value)?;
                self.environment.assign(name, value.clone(), *line)?;
                Ok(value)
            },
        }
    }
}
