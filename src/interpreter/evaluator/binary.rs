use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies a binary operator to two already-evaluated operands.
///
/// `+` concatenates two strings or adds two numbers; `-`, `*`, `/` and the
/// orderings require numbers; `==` and `!=` never fail and compare by value
/// with cross-kind operands never equal.
///
/// # Errors
/// - `ExpectedNumbersOrStrings` for `+` on mixed operand kinds.
/// - `ExpectedNumberOperands` for arithmetic or ordering on non-numbers.
/// - `DivisionByZero` when the right operand of `/` is zero.
pub fn eval_binary(
    op: BinaryOperator,
    left: &Value,
    right: &Value,
    line: usize,
) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::String(l), Value::String(r)) => {
                let mut joined = l.clone();
                joined.push_str(r);
                Ok(Value::String(joined))
            },
            _ => Err(RuntimeError::ExpectedNumbersOrStrings { line }),
        },
        BinaryOperator::Sub => {
            let (l, r) = number_operands(left, right, line)?;
            Ok(Value::Number(l - r))
        },
        BinaryOperator::Mul => {
            let (l, r) = number_operands(left, right, line)?;
            Ok(Value::Number(l * r))
        },
        BinaryOperator::Div => {
            let (l, r) = number_operands(left, right, line)?;
            if r == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(Value::Number(l / r))
        },
        BinaryOperator::Less => {
            let (l, r) = number_operands(left, right, line)?;
            Ok(Value::Bool(l < r))
        },
        BinaryOperator::LessEqual => {
            let (l, r) = number_operands(left, right, line)?;
            Ok(Value::Bool(l <= r))
        },
        BinaryOperator::Greater => {
            let (l, r) = number_operands(left, right, line)?;
            Ok(Value::Bool(l > r))
        },
        BinaryOperator::GreaterEqual => {
            let (l, r) = number_operands(left, right, line)?;
            Ok(Value::Bool(l >= r))
        },
        BinaryOperator::Equal => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
    }
}

/// Projects both operands to numbers, or reports the operator's type error.
fn number_operands(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
        _ => Err(RuntimeError::ExpectedNumberOperands { line }),
    }
}
