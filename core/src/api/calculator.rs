//! The calculator engine: creation layer plus evaluation.

use super::Error;
use crate::evaluator;
use crate::geometry::{Circle, Line, Point, Rectangle};
use crate::registry::{self, RegistryError, ShapeKind, ShapeRegistry};

/// A calculator session: the shape registry together with the operations an
/// interactive caller needs.
///
/// Creation methods validate their parameters before touching the registry,
/// so a failed creation leaves no trace. Evaluation is read-only.
///
/// # Example
///
/// ```ignore
/// use geocalc_core::api::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.create_point("origin", 0.0, 0.0)?;
/// calc.create_point("corner", 2.0, 3.0)?;
/// calc.create_rectangle("r1", "origin", "corner")?;
///
/// assert_eq!(calc.evaluate("area r1")?, 6.0);
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    registry: ShapeRegistry,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the registry.
    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Checks that `name` could be registered, without registering anything.
    ///
    /// The interactive caller runs this before prompting for shape details,
    /// so a doomed name fails fast.
    pub fn check_name(&self, name: &str) -> Result<(), Error> {
        if !registry::is_valid_name(name) {
            return Err(RegistryError::InvalidName(name.to_owned()).into());
        }
        if self.registry.contains(name) {
            return Err(RegistryError::NameCollision(name.to_owned()).into());
        }
        Ok(())
    }

    pub fn create_point(&mut self, name: &str, x: f64, y: f64) -> Result<Point, Error> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::NonFiniteCoordinates);
        }
        let point = Point::new(x, y);
        self.registry.register_point(name, point)?;
        Ok(point)
    }

    /// Creates a circle around an already-registered point.
    ///
    /// The center is copied out of the registry; later shapes named after
    /// the same point are unaffected by it.
    pub fn create_circle(&mut self, name: &str, center: &str, radius: f64) -> Result<Circle, Error> {
        let center = *self.point_named(center)?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidRadius { radius });
        }
        let circle = Circle::new(center, radius);
        self.registry.register_circle(name, circle)?;
        Ok(circle)
    }

    pub fn create_line(&mut self, name: &str, p1: &str, p2: &str) -> Result<Line, Error> {
        let p1 = *self.point_named(p1)?;
        let p2 = *self.point_named(p2)?;
        let line = Line::new(p1, p2);
        self.registry.register_line(name, line)?;
        Ok(line)
    }

    pub fn create_rectangle(
        &mut self,
        name: &str,
        bottom_left: &str,
        top_right: &str,
    ) -> Result<Rectangle, Error> {
        let bottom_left = *self.point_named(bottom_left)?;
        let top_right = *self.point_named(top_right)?;
        if bottom_left.x > top_right.x || bottom_left.y > top_right.y {
            return Err(Error::InvalidRectangleBounds {
                bottom_left,
                top_right,
            });
        }
        let rectangle = Rectangle::new(bottom_left, top_right);
        self.registry.register_rectangle(name, rectangle)?;
        Ok(rectangle)
    }

    fn point_named(&self, name: &str) -> Result<&Point, Error> {
        self.registry.point(name).ok_or_else(|| Error::PointNotFound {
            name: name.to_owned(),
        })
    }

    /// Sorted `(name, description)` pairs for one shape kind.
    pub fn list(&self, kind: ShapeKind) -> Vec<(String, String)> {
        match kind {
            ShapeKind::Point => self
                .registry
                .points()
                .map(|(name, shape)| (name.to_owned(), shape.to_string()))
                .collect(),
            ShapeKind::Circle => self
                .registry
                .circles()
                .map(|(name, shape)| (name.to_owned(), shape.to_string()))
                .collect(),
            ShapeKind::Line => self
                .registry
                .lines()
                .map(|(name, shape)| (name.to_owned(), shape.to_string()))
                .collect(),
            ShapeKind::Rectangle => self
                .registry
                .rectangles()
                .map(|(name, shape)| (name.to_owned(), shape.to_string()))
                .collect(),
        }
    }

    /// Evaluate an expression against the current registry.
    pub fn evaluate(&self, expression: &str) -> Result<f64, Error> {
        Ok(evaluator::evaluate(expression, &self.registry)?)
    }
}
