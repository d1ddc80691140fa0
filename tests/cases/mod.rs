//! Shared fixture and test-case macro for the integration suite.

use geocalc::Calculator;

/// The registry every integration test runs against:
///
/// - points `origin` (0,0), `p1` (3,4), `corner` (2,3)
/// - circles `c1` (center `origin`, radius 1), `c2` (center `corner`, radius 2)
/// - line `l1` from `origin` to `p1` (length 5)
/// - rectangle `r1` from `origin` to `corner` (area 6, perimeter 10)
pub fn fixture() -> Calculator {
    let mut calc = Calculator::new();
    calc.create_point("origin", 0.0, 0.0).unwrap();
    calc.create_point("p1", 3.0, 4.0).unwrap();
    calc.create_point("corner", 2.0, 3.0).unwrap();
    calc.create_circle("c1", "origin", 1.0).unwrap();
    calc.create_circle("c2", "corner", 2.0).unwrap();
    calc.create_line("l1", "origin", "p1").unwrap();
    calc.create_rectangle("r1", "origin", "corner").unwrap();
    calc
}

/// Declares one end-to-end evaluation test against [`fixture`].
///
/// ```ignore
/// test_case!(area_of_rectangle, input: "area r1", value: 6.0);
/// test_case!(unknown_name, input: "area ghost", error: Error::Eval(_));
/// ```
#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $expected:expr $(,)?) => {
        #[test]
        fn $name() {
            let calc = crate::cases::fixture();
            let value = calc.evaluate($input).expect("evaluation failed");
            let expected: f64 = $expected;
            assert!(
                (value - expected).abs() < 1e-9,
                "evaluate({:?}) = {}, expected {}",
                $input,
                value,
                expected
            );
        }
    };
    ($name:ident, input: $input:expr, error: $pattern:pat $(,)?) => {
        #[test]
        fn $name() {
            let calc = crate::cases::fixture();
            let err = calc
                .evaluate($input)
                .expect_err("evaluation unexpectedly succeeded");
            assert!(
                matches!(err, $pattern),
                "evaluate({:?}) failed with unexpected error: {err:?}",
                $input
            );
        }
    };
}
