//! Stable public API for embedding the calculator.
//!
//! `Calculator` bundles the shape registry with the creation layer
//! (validation plus registration) and evaluation. `Error` is the single
//! error type callers see; it converts to a renderable [`Diagnostic`].

mod calculator;
mod error;

pub use calculator::Calculator;
pub use error::{Diagnostic, Error};
