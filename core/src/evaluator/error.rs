//! Evaluation errors.
//!
//! Every variant carries the span of the token that triggered it, so callers
//! can point at the offending part of the input line. All errors abort the
//! whole evaluation; there are no partial results.

use thiserror::Error;

use super::token::{Keyword, Span};
use crate::registry::ShapeKind;

/// Error returned when an expression cannot be evaluated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A token that is neither a keyword, an operator, nor a consumed
    /// operand.
    #[error("unknown command or operator '{token}'")]
    UnknownToken { token: String, span: Span },

    /// A keyword at the end of the input with too few operand tokens.
    #[error("missing shape name after '{keyword}'")]
    MissingOperand { keyword: Keyword, span: Span },

    /// An operand name not registered under any kind the keyword accepts.
    #[error("shape '{name}' not found for {keyword}")]
    ShapeNotFound {
        keyword: Keyword,
        name: String,
        span: Span,
    },

    /// An operand registered under a kind the keyword does not support,
    /// e.g. `length` of a point or `perimeter` of a circle.
    #[error("cannot take {keyword} of {kind} '{name}'")]
    UnsupportedOperation {
        keyword: Keyword,
        kind: ShapeKind,
        name: String,
        span: Span,
    },

    /// A `/` fold whose divisor term evaluated to exactly zero.
    #[error("division by zero")]
    DivisionByZero { span: Span },
}

impl EvalError {
    /// Location of the offending token within the input line.
    pub fn span(&self) -> &Span {
        match self {
            EvalError::UnknownToken { span, .. }
            | EvalError::MissingOperand { span, .. }
            | EvalError::ShapeNotFound { span, .. }
            | EvalError::UnsupportedOperation { span, .. }
            | EvalError::DivisionByZero { span } => span,
        }
    }
}
