//! Unit tests for the evaluator.

use super::*;
use crate::geometry::{Circle, Line, Point, Rectangle};
use crate::registry::{ShapeKind, ShapeRegistry};
use pretty_assertions::assert_eq;

/// Registry every test runs against:
///
/// - points `origin` (0,0), `p1` (3,4), `corner` (2,3)
/// - circles `c1` (center origin, r=1), `c2` (center corner, r=2)
/// - line `l1` from origin to p1 (length 5)
/// - rectangle `r1` from origin to corner (area 6, perimeter 10)
fn fixture() -> ShapeRegistry {
    let origin = Point::new(0.0, 0.0);
    let p1 = Point::new(3.0, 4.0);
    let corner = Point::new(2.0, 3.0);

    let mut registry = ShapeRegistry::new();
    registry.register_point("origin", origin).unwrap();
    registry.register_point("p1", p1).unwrap();
    registry.register_point("corner", corner).unwrap();
    registry
        .register_circle("c1", Circle::new(origin, 1.0))
        .unwrap();
    registry
        .register_circle("c2", Circle::new(corner, 2.0))
        .unwrap();
    registry
        .register_line("l1", Line::new(origin, p1))
        .unwrap();
    registry
        .register_rectangle("r1", Rectangle::new(origin, corner))
        .unwrap();
    registry
}

fn eval(expression: &str) -> Result<f64, EvalError> {
    evaluate(expression, &fixture())
}

// ============================================================================
// Single keyword terms
// ============================================================================

#[test]
fn test_area_of_rectangle() {
    crate::test_utils::init_test_logging();
    assert_eq!(eval("area r1").unwrap(), 6.0);
}

#[test]
fn test_area_of_circle() {
    assert_eq!(eval("area c1").unwrap(), 3.14);
}

#[test]
fn test_perimeter_of_rectangle() {
    assert_eq!(eval("perimeter r1").unwrap(), 10.0);
}

#[test]
fn test_circumference_of_circle() {
    assert_eq!(eval("circumference c1").unwrap(), 6.28);
}

#[test]
fn test_length_of_line() {
    assert_eq!(eval("length l1").unwrap(), 5.0);
}

#[test]
fn test_length_of_circle_is_circumference() {
    assert_eq!(eval("length c1").unwrap(), 6.28);
}

#[test]
fn test_length_of_rectangle_is_perimeter() {
    assert_eq!(eval("length r1").unwrap(), 10.0);
}

// ============================================================================
// Distance
// ============================================================================

#[test]
fn test_distance_point_point() {
    assert_eq!(eval("distance origin p1").unwrap(), 5.0);
}

#[test]
fn test_distance_point_circle() {
    // c1 is centered on origin.
    assert_eq!(eval("distance p1 c1").unwrap(), 5.0);
}

#[test]
fn test_distance_circle_point() {
    assert_eq!(eval("distance c1 p1").unwrap(), 5.0);
}

#[test]
fn test_distance_circle_circle() {
    // Centers are origin and (2, 3); radii do not matter.
    assert_eq!(eval("distance c1 c2").unwrap(), 13.0_f64.sqrt());
}

#[test]
fn test_distance_is_symmetric() {
    assert_eq!(
        eval("distance origin corner").unwrap(),
        eval("distance corner origin").unwrap()
    );
}

#[test]
fn test_distance_to_self_is_zero() {
    assert_eq!(eval("distance p1 p1").unwrap(), 0.0);
}

// ============================================================================
// Folding
// ============================================================================

#[test]
fn test_addition() {
    assert_eq!(eval("length r1 + circumference c1").unwrap(), 16.28);
}

#[test]
fn test_subtraction() {
    assert_eq!(eval("perimeter r1 - area r1").unwrap(), 4.0);
}

#[test]
fn test_multiplication() {
    assert_eq!(eval("area r1 * perimeter r1").unwrap(), 60.0);
}

#[test]
fn test_division() {
    assert_eq!(eval("perimeter r1 / length l1").unwrap(), 2.0);
}

#[test]
fn test_left_to_right_no_precedence() {
    // (0 + 10 - 6) * 5 = 20, not 10 - 6 * 5.
    assert_eq!(eval("perimeter r1 - area r1 * length l1").unwrap(), 20.0);
}

#[test]
fn test_operator_persists_across_terms() {
    // No operator between the terms: the initial `+` stays active.
    assert_eq!(eval("perimeter r1 distance origin p1").unwrap(), 15.0);
}

#[test]
fn test_set_operator_persists_across_terms() {
    // `-` is set once and applies to both following terms: 0 - 6 - 6.
    assert_eq!(eval("- area r1 area r1").unwrap(), -12.0);
}

#[test]
fn test_leading_operator_applies_to_first_term() {
    assert_eq!(eval("- area r1").unwrap(), -6.0);
}

#[test]
fn test_trailing_operator_is_inert() {
    assert_eq!(eval("area r1 +").unwrap(), 6.0);
}

#[test]
fn test_empty_expression_is_zero() {
    assert_eq!(eval("").unwrap(), 0.0);
    assert_eq!(eval("   ").unwrap(), 0.0);
}

#[test]
fn test_evaluation_is_idempotent() {
    let registry = fixture();
    let first = evaluate("area r1 + circumference c2 / length l1", &registry).unwrap();
    let second = evaluate("area r1 + circumference c2 / length l1", &registry).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_token() {
    let err = eval("banana").unwrap_err();
    assert_eq!(
        err,
        EvalError::UnknownToken {
            token: "banana".to_owned(),
            span: Span(0..6),
        }
    );
}

#[test]
fn test_unknown_token_mid_expression() {
    let err = eval("area r1 + bogus").unwrap_err();
    assert_eq!(
        err,
        EvalError::UnknownToken {
            token: "bogus".to_owned(),
            span: Span(10..15),
        }
    );
}

#[test]
fn test_missing_operand() {
    let err = eval("area").unwrap_err();
    assert!(matches!(
        err,
        EvalError::MissingOperand {
            keyword: Keyword::Area,
            ..
        }
    ));
}

#[test]
fn test_missing_second_distance_operand() {
    let err = eval("distance p1").unwrap_err();
    assert!(matches!(
        err,
        EvalError::MissingOperand {
            keyword: Keyword::Distance,
            ..
        }
    ));
}

#[test]
fn test_length_of_point_is_unsupported() {
    let err = eval("length origin").unwrap_err();
    assert_eq!(
        err,
        EvalError::UnsupportedOperation {
            keyword: Keyword::Length,
            kind: ShapeKind::Point,
            name: "origin".to_owned(),
            span: Span(7..13),
        }
    );
}

#[test]
fn test_perimeter_of_circle_is_unsupported() {
    let err = eval("perimeter c1").unwrap_err();
    assert!(matches!(
        err,
        EvalError::UnsupportedOperation {
            keyword: Keyword::Perimeter,
            kind: ShapeKind::Circle,
            ..
        }
    ));
}

#[test]
fn test_circumference_of_rectangle_is_unsupported() {
    let err = eval("circumference r1").unwrap_err();
    assert!(matches!(
        err,
        EvalError::UnsupportedOperation {
            keyword: Keyword::Circumference,
            kind: ShapeKind::Rectangle,
            ..
        }
    ));
}

#[test]
fn test_area_of_line_is_unsupported() {
    let err = eval("area l1").unwrap_err();
    assert!(matches!(
        err,
        EvalError::UnsupportedOperation {
            keyword: Keyword::Area,
            kind: ShapeKind::Line,
            ..
        }
    ));
}

#[test]
fn test_distance_involving_line_is_unsupported() {
    let err = eval("distance l1 p1").unwrap_err();
    assert!(matches!(
        err,
        EvalError::UnsupportedOperation {
            keyword: Keyword::Distance,
            kind: ShapeKind::Line,
            ..
        }
    ));
}

#[test]
fn test_shape_not_found() {
    let err = eval("area ghost").unwrap_err();
    assert_eq!(
        err,
        EvalError::ShapeNotFound {
            keyword: Keyword::Area,
            name: "ghost".to_owned(),
            span: Span(5..10),
        }
    );
}

#[test]
fn test_distance_with_unknown_name() {
    let err = eval("distance origin ghost").unwrap_err();
    assert!(matches!(
        err,
        EvalError::ShapeNotFound {
            keyword: Keyword::Distance,
            ..
        }
    ));
}

#[test]
fn test_division_by_zero_term() {
    let err = eval("area r1 / distance origin origin").unwrap_err();
    assert!(matches!(err, EvalError::DivisionByZero { .. }));
}

#[test]
fn test_division_by_zero_span_covers_divisor_term() {
    let input = "area r1 / distance origin origin";
    let err = evaluate(input, &fixture()).unwrap_err();
    let EvalError::DivisionByZero { span } = err else {
        panic!("expected DivisionByZero, got {err:?}");
    };
    assert_eq!(&input[span.0], "distance origin origin");
}

#[test]
fn test_error_aborts_without_partial_result() {
    // The leading terms are valid, but the trailing token still fails the
    // whole evaluation.
    let err = eval("area r1 + area r1 oops").unwrap_err();
    assert!(matches!(err, EvalError::UnknownToken { .. }));
}

#[test]
fn test_operand_may_shadow_operator_text() {
    // The token after a keyword is consumed as a name, so `+` here is a
    // (missing) shape name, not an operator.
    let err = eval("area +").unwrap_err();
    assert!(matches!(
        err,
        EvalError::ShapeNotFound {
            keyword: Keyword::Area,
            ..
        }
    ));
}
