//! Left-to-right expression evaluator over the shape registry.
//!
//! An expression is a whitespace-delimited sequence of keyword terms
//! (`length l1`, `distance p1 p2`) and arithmetic operator tokens. Terms are
//! folded into a running result strictly left to right with the most
//! recently seen operator; there is no precedence and no parenthesization.
//!
//! ## Design Principles
//!
//! - **Pure**: evaluation never mutates the registry; the same expression
//!   against the same registry always yields the same result.
//! - **All-or-nothing**: any error aborts the whole evaluation with no
//!   partial result.
//! - **Structured errors**: errors are plain values carrying the offending
//!   token's span; presentation is the caller's concern.
//!
//! ## Example
//!
//! ```ignore
//! use geocalc_core::{evaluator, geometry::Point, registry::ShapeRegistry};
//!
//! let mut registry = ShapeRegistry::new();
//! registry.register_point("p1", Point::new(0.0, 0.0))?;
//! registry.register_point("p2", Point::new(3.0, 4.0))?;
//!
//! let value = evaluator::evaluate("distance p1 p2", &registry)?;
//! assert_eq!(value, 5.0);
//! ```

mod error;
mod eval;
mod operators;
mod token;

#[cfg(test)]
mod eval_test;

pub use error::EvalError;
pub use eval::Evaluator;
pub use token::{BinaryOp, Keyword, Span, SpannedToken, TokenKind, tokenize};

use crate::registry::ShapeRegistry;

/// Evaluate an expression against a registry snapshot.
///
/// ## Arguments
///
/// - `expression`: the raw command line, already stripped of any leading
///   command word the caller interprets itself
/// - `registry`: the shapes the expression's names resolve against
///
/// ## Returns
///
/// The folded scalar, or the first error encountered. An empty expression
/// evaluates to `0`.
pub fn evaluate(expression: &str, registry: &ShapeRegistry) -> Result<f64, EvalError> {
    Evaluator::new(registry, expression).eval()
}
