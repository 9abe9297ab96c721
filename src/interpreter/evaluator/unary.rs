use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies a unary operator to an already-evaluated operand.
///
/// Negation requires a number; logical not never fails and inverts
/// truthiness.
///
/// # Errors
/// `ExpectedNumberOperand` when `-` is applied to a non-number.
pub fn eval_unary(op: UnaryOperator, operand: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(RuntimeError::ExpectedNumberOperand { line }),
        },
        UnaryOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_requires_a_number() {
        assert_eq!(
            eval_unary(UnaryOperator::Negate, &Value::Number(2.0), 1),
            Ok(Value::Number(-2.0))
        );
        assert_eq!(
            eval_unary(UnaryOperator::Negate, &"a".into(), 1),
            Err(RuntimeError::ExpectedNumberOperand { line: 1 })
        );
    }

    #[test]
    fn not_inverts_truthiness() {
        assert_eq!(eval_unary(UnaryOperator::Not, &Value::Nil, 1), Ok(Value::Bool(true)));
        assert_eq!(
            eval_unary(UnaryOperator::Not, &Value::Bool(false), 1),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            eval_unary(UnaryOperator::Not, &Value::Number(0.0), 1),
            Ok(Value::Bool(false))
        );
        assert_eq!(eval_unary(UnaryOperator::Not, &"".into(), 1), Ok(Value::Bool(false)));
    }
}
