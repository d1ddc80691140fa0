//! Core engine of the geocalc 2-D geometry calculator.
//!
//! The crate is split the way the data flows:
//!
//! - [`geometry`] — the shape value types and their derived quantities
//! - [`registry`] — named shapes, partitioned by kind under one name space
//! - [`evaluator`] — the left-to-right expression evaluator
//! - [`api`] — the stable surface tying them together for callers
//!
//! No I/O happens here; prompting and printing belong to the caller.

pub mod api;
pub mod evaluator;
pub mod geometry;
pub mod registry;
