//! The shape registry: four name→shape maps sharing a single name space.
//!
//! Shapes of different kinds live in separate maps, but a name claims the
//! whole name space: a name used for a point can never be reused for a
//! circle, line, or rectangle. Registration is the only mutation; shapes are
//! never updated or deleted once stored.

mod error;


pub use error::RegistryError;

use core::fmt;
use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::geometry::{Circle, Line, Point, Rectangle};

/// One of the four shape kinds a name can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Point,
    Circle,
    Line,
    Rectangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Point => write!(f, "point"),
            ShapeKind::Circle => write!(f, "circle"),
            ShapeKind::Line => write!(f, "line"),
            ShapeKind::Rectangle => write!(f, "rectangle"),
        }
    }
}

/// Returns whether `name` is usable as a shape name.
///
/// Valid names are non-empty and consist of ASCII letters, digits, and
/// underscores only.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// All named shapes, partitioned by kind.
///
/// Maps are ordered by name so listings come out sorted without extra work.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    points: BTreeMap<String, Point>,
    circles: BTreeMap<String, Circle>,
    lines: BTreeMap<String, Line>,
    rectangles: BTreeMap<String, Rectangle>,
    /// Every name in use, across all four maps.
    names: BTreeSet<String>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `name` and claims it in the unified name set.
    fn claim(&mut self, name: &str) -> Result<(), RegistryError> {
        if !is_valid_name(name) {
            return Err(RegistryError::InvalidName(name.to_owned()));
        }
        if self.names.contains(name) {
            return Err(RegistryError::NameCollision(name.to_owned()));
        }
        self.names.insert(name.to_owned());
        Ok(())
    }

    pub fn register_point(&mut self, name: &str, point: Point) -> Result<(), RegistryError> {
        self.claim(name)?;
        self.points.insert(name.to_owned(), point);
        debug!(name, "registered point");
        Ok(())
    }

    pub fn register_circle(&mut self, name: &str, circle: Circle) -> Result<(), RegistryError> {
        self.claim(name)?;
        self.circles.insert(name.to_owned(), circle);
        debug!(name, "registered circle");
        Ok(())
    }

    pub fn register_line(&mut self, name: &str, line: Line) -> Result<(), RegistryError> {
        self.claim(name)?;
        self.lines.insert(name.to_owned(), line);
        debug!(name, "registered line");
        Ok(())
    }

    pub fn register_rectangle(
        &mut self,
        name: &str,
        rectangle: Rectangle,
    ) -> Result<(), RegistryError> {
        self.claim(name)?;
        self.rectangles.insert(name.to_owned(), rectangle);
        debug!(name, "registered rectangle");
        Ok(())
    }

    pub fn point(&self, name: &str) -> Option<&Point> {
        self.points.get(name)
    }

    pub fn circle(&self, name: &str) -> Option<&Circle> {
        self.circles.get(name)
    }

    pub fn line(&self, name: &str) -> Option<&Line> {
        self.lines.get(name)
    }

    pub fn rectangle(&self, name: &str) -> Option<&Rectangle> {
        self.rectangles.get(name)
    }

    /// Whether `name` is registered under any kind.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// The kind `name` is registered under, if any.
    pub fn kind_of(&self, name: &str) -> Option<ShapeKind> {
        if self.points.contains_key(name) {
            Some(ShapeKind::Point)
        } else if self.circles.contains_key(name) {
            Some(ShapeKind::Circle)
        } else if self.lines.contains_key(name) {
            Some(ShapeKind::Line)
        } else if self.rectangles.contains_key(name) {
            Some(ShapeKind::Rectangle)
        } else {
            None
        }
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, &Point)> {
        self.points.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn circles(&self) -> impl Iterator<Item = (&str, &Circle)> {
        self.circles.iter().map(|(name, c)| (name.as_str(), c))
    }

    pub fn lines(&self) -> impl Iterator<Item = (&str, &Line)> {
        self.lines.iter().map(|(name, l)| (name.as_str(), l))
    }

    pub fn rectangles(&self) -> impl Iterator<Item = (&str, &Rectangle)> {
        self.rectangles.iter().map(|(name, r)| (name.as_str(), r))
    }
}
