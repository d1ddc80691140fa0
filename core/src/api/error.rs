//! Public error types for the geocalc API.
//!
//! Internal errors are converted to this public type at the API boundary.
//! Error values stay free of any presentation concern (no color, no
//! formatting); rendering is the caller's job, via [`Diagnostic`].

use thiserror::Error;

use crate::evaluator::{EvalError, Span};
use crate::geometry::Point;
use crate::registry::RegistryError;

/// Public error type for all calculator operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Name validation or collision failure during registration.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Expression evaluation failure.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// A point or circle was created with a non-finite coordinate.
    #[error("coordinates must be finite numbers")]
    NonFiniteCoordinates,

    /// A circle was created with a non-positive or non-finite radius.
    #[error("radius must be a positive finite number, got {radius}")]
    InvalidRadius { radius: f64 },

    /// Rectangle corners that do not describe a bottom-left/top-right pair.
    #[error(
        "invalid rectangle corners: bottom-left {bottom_left} may not exceed top-right {top_right}"
    )]
    InvalidRectangleBounds {
        bottom_left: Point,
        top_right: Point,
    },

    /// A creation command referenced a point name that is not registered.
    #[error("point '{name}' not found")]
    PointNotFound { name: String },
}

/// A renderable description of an error: the message, the offending token's
/// location within the input line (when there is one), and optional help.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Option<Span>,
    pub help: Option<String>,
}

impl Error {
    /// Convert to a [`Diagnostic`] for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = match self {
            Error::Eval(e) => Some(e.span().clone()),
            _ => None,
        };

        let help = match self {
            Error::Registry(RegistryError::InvalidName(_)) => {
                Some("names may use ASCII letters, digits, and underscores".to_owned())
            }
            Error::Eval(EvalError::UnknownToken { .. }) => Some(
                "expected a keyword (length, perimeter, area, circumference, distance) \
                 or an operator (+ - * /)"
                    .to_owned(),
            ),
            Error::Eval(EvalError::MissingOperand { keyword, .. }) => Some(format!(
                "'{}' takes {} shape name(s)",
                keyword,
                keyword.operand_count()
            )),
            Error::Eval(EvalError::UnsupportedOperation { keyword, .. }) => Some(format!(
                "'{}' applies to {}",
                keyword,
                match keyword {
                    crate::evaluator::Keyword::Length => "lines, circles, and rectangles",
                    crate::evaluator::Keyword::Perimeter => "rectangles",
                    crate::evaluator::Keyword::Area => "rectangles and circles",
                    crate::evaluator::Keyword::Circumference => "circles",
                    crate::evaluator::Keyword::Distance => "points and circles",
                }
            )),
            _ => None,
        };

        Diagnostic {
            message: self.to_string(),
            span,
            help,
        }
    }
}
