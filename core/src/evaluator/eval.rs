//! Core evaluation logic.

use tracing::trace;

use super::error::EvalError;
use super::operators;
use super::token::{BinaryOp, Keyword, Span, SpannedToken, TokenKind, tokenize};
use crate::geometry::Point;
use crate::registry::ShapeRegistry;

/// Left-to-right expression evaluator over a registry snapshot.
///
/// Evaluation is a single pass: operator tokens set the active operator,
/// keyword tokens consume their operands and produce a scalar that is folded
/// into the running result with whatever operator is active at that moment.
/// The operator persists across keyword terms until replaced; the initial
/// operator is `+` and the initial result is `0`, so a lone leading term
/// evaluates to itself.
pub struct Evaluator<'reg, 'input> {
    registry: &'reg ShapeRegistry,
    tokens: std::vec::IntoIter<SpannedToken<'input>>,
}

impl<'reg, 'input> Evaluator<'reg, 'input> {
    pub fn new(registry: &'reg ShapeRegistry, expression: &'input str) -> Self {
        Self {
            registry,
            tokens: tokenize(expression).collect::<Vec<_>>().into_iter(),
        }
    }

    /// Evaluate the expression to a scalar.
    pub fn eval(mut self) -> Result<f64, EvalError> {
        let mut result = 0.0;
        let mut operator = BinaryOp::Add;

        while let Some(token) = self.tokens.next() {
            let (value, term_span) = match token.kind {
                TokenKind::Op(op) => {
                    // Operators are pure mode-setters: consumed immediately,
                    // never producing a value.
                    operator = op;
                    continue;
                }
                TokenKind::Keyword(keyword) => self.eval_keyword(keyword, token.span)?,
                TokenKind::Word => {
                    return Err(EvalError::UnknownToken {
                        token: token.text.to_owned(),
                        span: token.span,
                    });
                }
            };
            trace!(?operator, value, "folding term");
            result = operators::apply(operator, result, value, &term_span)?;
        }

        Ok(result)
    }

    /// Consumes the next token as a shape-name operand.
    ///
    /// Any token text is acceptable as a name here; resolution against the
    /// registry decides whether it means anything.
    fn next_name(
        &mut self,
        keyword: Keyword,
        keyword_span: &Span,
    ) -> Result<(&'input str, Span), EvalError> {
        match self.tokens.next() {
            Some(token) => Ok((token.text, token.span)),
            None => Err(EvalError::MissingOperand {
                keyword,
                span: keyword_span.clone(),
            }),
        }
    }

    /// Evaluates one keyword term, returning its value and the span covering
    /// the keyword and its operands.
    fn eval_keyword(
        &mut self,
        keyword: Keyword,
        keyword_span: Span,
    ) -> Result<(f64, Span), EvalError> {
        match keyword {
            Keyword::Length => {
                let (name, span) = self.next_name(keyword, &keyword_span)?;
                // Resolution order: line, then circle (circumference), then
                // rectangle (perimeter). A point has no length.
                let value = if let Some(line) = self.registry.line(name) {
                    line.length()
                } else if let Some(circle) = self.registry.circle(name) {
                    circle.circumference()
                } else if let Some(rectangle) = self.registry.rectangle(name) {
                    rectangle.perimeter()
                } else {
                    return Err(self.unsupported_or_missing(keyword, name, span));
                };
                Ok((value, Span(keyword_span.0.start..span.0.end)))
            }

            Keyword::Perimeter => {
                let (name, span) = self.next_name(keyword, &keyword_span)?;
                let Some(rectangle) = self.registry.rectangle(name) else {
                    return Err(self.unsupported_or_missing(keyword, name, span));
                };
                Ok((rectangle.perimeter(), Span(keyword_span.0.start..span.0.end)))
            }

            Keyword::Area => {
                let (name, span) = self.next_name(keyword, &keyword_span)?;
                let value = if let Some(rectangle) = self.registry.rectangle(name) {
                    rectangle.area()
                } else if let Some(circle) = self.registry.circle(name) {
                    circle.area()
                } else {
                    return Err(self.unsupported_or_missing(keyword, name, span));
                };
                Ok((value, Span(keyword_span.0.start..span.0.end)))
            }

            Keyword::Circumference => {
                let (name, span) = self.next_name(keyword, &keyword_span)?;
                let Some(circle) = self.registry.circle(name) else {
                    return Err(self.unsupported_or_missing(keyword, name, span));
                };
                Ok((
                    circle.circumference(),
                    Span(keyword_span.0.start..span.0.end),
                ))
            }

            Keyword::Distance => {
                let (name1, span1) = self.next_name(keyword, &keyword_span)?;
                let (name2, span2) = self.next_name(keyword, &keyword_span)?;
                let a = self.resolve_center(keyword, name1, span1)?;
                let b = self.resolve_center(keyword, name2, span2.clone())?;
                Ok((a.distance_to(&b), Span(keyword_span.0.start..span2.0.end)))
            }
        }
    }

    /// Resolves a `distance` operand to a point: a point is itself, a circle
    /// contributes its center. Lines and rectangles have no center to
    /// measure from.
    fn resolve_center(
        &self,
        keyword: Keyword,
        name: &str,
        span: Span,
    ) -> Result<Point, EvalError> {
        if let Some(point) = self.registry.point(name) {
            Ok(*point)
        } else if let Some(circle) = self.registry.circle(name) {
            Ok(circle.center)
        } else {
            Err(self.unsupported_or_missing(keyword, name, span))
        }
    }

    /// The error for an operand that did not resolve: `UnsupportedOperation`
    /// when the name exists under some other kind, `ShapeNotFound` when it
    /// does not exist at all.
    fn unsupported_or_missing(&self, keyword: Keyword, name: &str, span: Span) -> EvalError {
        match self.registry.kind_of(name) {
            Some(kind) => EvalError::UnsupportedOperation {
                keyword,
                kind,
                name: name.to_owned(),
                span,
            },
            None => EvalError::ShapeNotFound {
                keyword,
                name: name.to_owned(),
                span,
            },
        }
    }
}
