use crate::{
    ast::{Expr, Stmt},
    interpreter::value::Value,
    util::num::format_number,
};

/// Renders an expression in parenthesized prefix notation.
///
/// This is the `parse` command's output format. Numbers keep one fractional
/// digit when integer-valued, which deliberately differs from the
/// evaluator's stringification.
///
/// # Example
/// ```
/// use loxide::interpreter::{lexer::tokenize, parser::core::parse_single_expression};
/// use loxide::interpreter::printer::print_expr;
///
/// let scanned = tokenize("1 + 2 * 3");
/// let expr = parse_single_expression(&scanned).unwrap();
///
/// assert_eq!(print_expr(&expr), "(+ 1.0 (* 2.0 3.0))");
/// ```
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value, .. } => literal_text(value),
        Expr::Grouping { expr, .. } => parenthesize("group", &[expr.as_ref()]),
        Expr::Unary { op, expr, .. } => parenthesize(&op.to_string(), &[expr.as_ref()]),
        Expr::Binary {
            left, op, right, ..
        } => parenthesize(&op.to_string(), &[left.as_ref(), right.as_ref()]),
        Expr::Variable { name, .. } => name.clone(),
        Expr::Assign { name, value, .. } => {
            parenthesize(&format!("assign {name}"), &[value.as_ref()])
        },
    }
}

/// Renders a statement in parenthesized prefix notation.
#[must_use]
pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression { expr, .. } => parenthesize(";", &[expr]),
        Stmt::Print { expr, .. } => parenthesize("print", &[expr]),
        Stmt::Var {
            name,
            initializer: Some(init),
            ..
        } => parenthesize(&format!("var {name}"), &[init]),
        Stmt::Var {
            name,
            initializer: None,
            ..
        } => format!("(var {name})"),
        Stmt::Block { statements, .. } => {
            let mut text = String::from("(block");
            for statement in statements {
                text.push(' ');
                text.push_str(&print_stmt(statement));
            }
            text.push(')');
            text
        },
    }
}

/// The printer's rendering of a literal: `nil`, `true`/`false`, the raw
/// string content, or the one-fractional-digit number form.
fn literal_text(value: &Value) -> String {
    match value {
        Value::Number(n) => format_number(*n),
        other => other.to_string(),
    }
}

fn parenthesize(name: &str, children: &[&Expr]) -> String {
    let mut text = String::from("(");
    text.push_str(name);
    for child in children {
        text.push(' ');
        text.push_str(&print_expr(child));
    }
    text.push(')');
    text
}
