//! Folding a term value into the running result.

use super::error::EvalError;
use super::token::{BinaryOp, Span};

/// Applies the active operator to the running result and a new term value.
///
/// Division checks the divisor against exact zero; the quotient of two finite
/// non-zero terms otherwise follows IEEE 754.
pub(super) fn apply(
    op: BinaryOp,
    result: f64,
    value: f64,
    span: &Span,
) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(result + value),
        BinaryOp::Sub => Ok(result - value),
        BinaryOp::Mul => Ok(result * value),
        BinaryOp::Div => {
            if value == 0.0 {
                Err(EvalError::DivisionByZero { span: span.clone() })
            } else {
                Ok(result / value)
            }
        }
    }
}
