//! Geocalc - an interactive calculator for elementary 2-D geometry.
//!
//! # Overview
//!
//! Geocalc lets a user define named points, circles, lines, and rectangles,
//! then query derived quantities (`length`, `perimeter`, `area`,
//! `circumference`, `distance`) or combine them with the four arithmetic
//! operators in a strictly left-to-right expression evaluator.
//!
//! # Quick Start
//!
//! ```
//! use geocalc::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.create_point("origin", 0.0, 0.0).unwrap();
//! calc.create_point("p1", 3.0, 4.0).unwrap();
//! calc.create_circle("c1", "origin", 1.0).unwrap();
//!
//! assert_eq!(calc.evaluate("distance origin p1").unwrap(), 5.0);
//! assert_eq!(calc.evaluate("circumference c1").unwrap(), 6.28);
//! ```
//!
//! # Error rendering
//!
//! Core errors are plain values; this crate adds [`render_error`] and
//! friends to print them against the offending input line with source
//! snippets and help notes.

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export the public API from geocalc-core.
pub use geocalc_core::api::{Calculator, Diagnostic, Error};

// Re-export commonly used types.
pub use geocalc_core::evaluator::{self, EvalError};
pub use geocalc_core::geometry::{Circle, Line, PI, Point, Rectangle};
pub use geocalc_core::registry::{RegistryError, ShapeKind, ShapeRegistry};
