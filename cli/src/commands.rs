//! Command dispatch shared by the interactive and pipe modes.
//!
//! Each input line is one command: `create`, `list`, `exit`, the `length
//! <name>` short form, or an expression handed to the evaluator. Creation
//! commands pull their follow-up answers (coordinates, point names, radius)
//! from an `ask` callback, so the REPL, pipe mode, and tests all share this
//! one path.

use std::io::{self, Write};

use geocalc::{Calculator, Error, ShapeKind, render_error_to, render_error_to_string_no_color};
use nu_ansi_term::Color;
use tracing::debug;

/// What the caller should do after a dispatched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// One calculator session and where its output goes.
pub struct Session<W: Write> {
    calculator: Calculator,
    out: W,
    color: bool,
    debug_tokens: bool,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, color: bool, debug_tokens: bool) -> Self {
        Self {
            calculator: Calculator::new(),
            out,
            color,
            debug_tokens,
        }
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.out
    }

    /// Dispatch one command line. `ask` supplies follow-up input; returning
    /// `None` (input exhausted) quietly abandons the current command.
    pub fn dispatch(
        &mut self,
        line: &str,
        ask: &mut dyn FnMut(&str) -> Option<String>,
    ) -> io::Result<Outcome> {
        let line = line.trim();
        debug!(line, "dispatching command");

        if line.is_empty() {
            self.report_plain("No command entered. Please enter a command")?;
            return Ok(Outcome::Continue);
        }

        if line == "exit" {
            let farewell = self.paint(Color::Purple, "Closing the calculator gracefully :)");
            writeln!(self.out, "{farewell}")?;
            return Ok(Outcome::Exit);
        }

        let mut words = line.split_whitespace();
        match words.next() {
            Some("create") => self.cmd_create(words.next(), words.next(), ask)?,
            Some("list") => self.cmd_list(words.next())?,
            Some("length") => self.cmd_length(words.next())?,
            _ => self.cmd_evaluate(line)?,
        }

        Ok(Outcome::Continue)
    }

    fn cmd_create(
        &mut self,
        kind: Option<&str>,
        name: Option<&str>,
        ask: &mut dyn FnMut(&str) -> Option<String>,
    ) -> io::Result<()> {
        let (Some(kind), Some(name)) = (kind, name) else {
            return self.report_plain("Shape type or name not provided or invalid");
        };

        match kind {
            "point" => self.create_point(name, ask),
            "circle" => self.create_circle(name, ask),
            "line" => self.create_line(name, ask),
            "rectangle" => self.create_rectangle(name, ask),
            _ => self.report_plain(&format!("Unknown shape type {kind}")),
        }
    }

    fn create_point(
        &mut self,
        name: &str,
        ask: &mut dyn FnMut(&str) -> Option<String>,
    ) -> io::Result<()> {
        if let Err(err) = self.calculator.check_name(name) {
            return self.report(&err, "");
        }

        let prompt = format!("Enter x and y coordinates for {name} (separated by space): ");
        let Some(reply) = ask(&prompt) else {
            return Ok(());
        };

        // Anything after the first two fields is ignored, as it always has
        // been.
        let mut parts = reply.split_whitespace();
        let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
            return writeln!(self.out, "Invalid input, please enter two valid numbers");
        };
        let (Some(x), Some(y)) = (parse_number(x), parse_number(y)) else {
            return writeln!(self.out, "Invalid input, please enter two valid numbers");
        };

        match self.calculator.create_point(name, x, y) {
            Ok(point) => writeln!(self.out, "Created Point {name} at {point}"),
            Err(err) => self.report(&err, ""),
        }
    }

    fn create_circle(
        &mut self,
        name: &str,
        ask: &mut dyn FnMut(&str) -> Option<String>,
    ) -> io::Result<()> {
        if let Err(err) = self.calculator.check_name(name) {
            return self.report(&err, "");
        }

        let Some(center) = ask(&format!("Enter the center point name for {name}: ")) else {
            return Ok(());
        };
        let center = center.trim().to_string();
        if center.is_empty() {
            return self.report_plain("Center point name not provided");
        }
        if self.calculator.registry().point(&center).is_none() {
            return self.report(
                &Error::PointNotFound {
                    name: center.clone(),
                },
                "",
            );
        }

        let Some(radius) = self.ask_radius(name, ask)? else {
            return Ok(());
        };

        match self.calculator.create_circle(name, &center, radius) {
            Ok(circle) => writeln!(
                self.out,
                "Created Circle {name} with center {center} and radius {}",
                circle.radius
            ),
            Err(err) => self.report(&err, ""),
        }
    }

    /// Prompts for a radius until the reply parses as a number, the way the
    /// calculator has always nagged for one.
    fn ask_radius(
        &mut self,
        name: &str,
        ask: &mut dyn FnMut(&str) -> Option<String>,
    ) -> io::Result<Option<f64>> {
        let prompt = format!("Enter the radius for {name}: ");
        loop {
            let Some(reply) = ask(&prompt) else {
                return Ok(None);
            };
            match parse_number(reply.trim()) {
                Some(radius) => return Ok(Some(radius)),
                None => writeln!(
                    self.out,
                    "Invalid input. Please enter a valid number for radius"
                )?,
            }
        }
    }

    fn create_line(
        &mut self,
        name: &str,
        ask: &mut dyn FnMut(&str) -> Option<String>,
    ) -> io::Result<()> {
        if let Err(err) = self.calculator.check_name(name) {
            return self.report(&err, "");
        }

        let Some(p1) = ask(&format!("Enter the first point name for {name}: ")) else {
            return Ok(());
        };
        let Some(p2) = ask(&format!("Enter the second point name for {name}: ")) else {
            return Ok(());
        };
        let (p1, p2) = (p1.trim().to_string(), p2.trim().to_string());

        match self.calculator.create_line(name, &p1, &p2) {
            Ok(line) => writeln!(
                self.out,
                "Created Line {name} from {p1} to {p2} with length: {}",
                line.length()
            ),
            Err(err) => self.report(&err, ""),
        }
    }

    fn create_rectangle(
        &mut self,
        name: &str,
        ask: &mut dyn FnMut(&str) -> Option<String>,
    ) -> io::Result<()> {
        if let Err(err) = self.calculator.check_name(name) {
            return self.report(&err, "");
        }

        let Some(bl) = ask(&format!("Enter the bottom left point name for {name}: ")) else {
            return Ok(());
        };
        let Some(tr) = ask(&format!("Enter the top right point name for {name}: ")) else {
            return Ok(());
        };
        let (bl, tr) = (bl.trim().to_string(), tr.trim().to_string());

        match self.calculator.create_rectangle(name, &bl, &tr) {
            Ok(rectangle) => writeln!(
                self.out,
                "Created Rectangle {name} with corners {} and {}, Area: {}, Perimeter: {}",
                rectangle.bottom_left,
                rectangle.top_right,
                rectangle.area(),
                rectangle.perimeter()
            ),
            Err(err) => self.report(&err, ""),
        }
    }

    fn cmd_list(&mut self, kind: Option<&str>) -> io::Result<()> {
        match kind {
            Some("points") => self.list_kind(ShapeKind::Point, "points"),
            Some("circles") => self.list_kind(ShapeKind::Circle, "circles"),
            Some("lines") => self.list_kind(ShapeKind::Line, "lines"),
            Some("rectangles") => self.list_kind(ShapeKind::Rectangle, "rectangles"),
            other => writeln!(
                self.out,
                "Unknown shape type for listing: {}.",
                other.unwrap_or_default()
            ),
        }
    }

    fn list_kind(&mut self, kind: ShapeKind, label: &str) -> io::Result<()> {
        let entries = self.calculator.list(kind);
        if entries.is_empty() {
            return writeln!(self.out, "No {label} created yet");
        }
        writeln!(self.out, "List of {label}:")?;
        for (name, description) in entries {
            writeln!(self.out, "{name}: {description}")?;
        }
        Ok(())
    }

    /// The `length <name>` short form: one name, reported with its own
    /// phrasing. Anything after the name is ignored, as it always has been.
    fn cmd_length(&mut self, name: Option<&str>) -> io::Result<()> {
        let expression = match name {
            Some(name) => format!("length {name}"),
            None => "length".to_string(),
        };
        match self.calculator.evaluate(&expression) {
            Ok(value) => {
                let name = name.unwrap_or_default();
                writeln!(self.out, "Length of {name}: {value}")
            }
            Err(err) => self.report(&err, &expression),
        }
    }

    fn cmd_evaluate(&mut self, line: &str) -> io::Result<()> {
        if self.debug_tokens {
            writeln!(self.out, "=== Tokens ===")?;
            for token in geocalc::evaluator::tokenize(line) {
                writeln!(self.out, "{:?} {:?}", token.kind, token.span)?;
            }
            writeln!(self.out)?;
        }

        match self.calculator.evaluate(line) {
            Ok(value) => writeln!(self.out, "Result: {value}"),
            Err(err) => self.report(&err, line),
        }
    }

    /// Render an API error against the line it came from.
    fn report(&mut self, error: &Error, source: &str) -> io::Result<()> {
        if self.color {
            render_error_to(error, source, &mut self.out)
        } else {
            self.out
                .write_all(render_error_to_string_no_color(error, source).as_bytes())
        }
    }

    /// A bare error message with no diagnostic behind it.
    fn report_plain(&mut self, message: &str) -> io::Result<()> {
        let message = self.paint(Color::Red, &format!("Error: {message}"));
        writeln!(self.out, "{message}")
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.color {
            color.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Accepts the number shapes the prompts accept: an optional leading minus,
/// digits, at most one decimal point, and at least one digit at the end.
/// Notably no exponent form and no `inf`/`nan`.
fn is_valid_number(input: &str) -> bool {
    let rest = input.strip_prefix('-').unwrap_or(input);
    let mut parts = rest.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match parts.next() {
        Some(frac) => !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()),
        None => !int_part.is_empty(),
    }
}

fn parse_number(input: &str) -> Option<f64> {
    if is_valid_number(input) {
        input.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Runs a scripted session: the first line is a command, creation
    /// prompts pull the following lines, then the next unconsumed line is
    /// the next command.
    fn run(script: &[&str]) -> String {
        let mut queue: VecDeque<String> = script.iter().map(|s| s.to_string()).collect();
        let mut session = Session::new(Vec::new(), false, false);

        while let Some(line) = queue.pop_front() {
            let mut ask = |_prompt: &str| queue.pop_front();
            let outcome = session.dispatch(&line, &mut ask).unwrap();
            if outcome == Outcome::Exit {
                break;
            }
        }

        String::from_utf8(session.into_writer()).unwrap()
    }

    #[test]
    fn test_create_point_and_line() {
        let output = run(&[
            "create point origin",
            "0 0",
            "create point p1",
            "3 4",
            "create line l1",
            "origin",
            "p1",
            "length l1",
        ]);
        assert!(output.contains("Created Point origin at (0, 0)"));
        assert!(output.contains("Created Point p1 at (3, 4)"));
        assert!(output.contains("Created Line l1 from origin to p1 with length: 5"));
        assert!(output.contains("Length of l1: 5"));
    }

    #[test]
    fn test_radius_reprompt_until_valid() {
        let output = run(&[
            "create point o",
            "0 0",
            "create circle c1",
            "o",
            "abc",
            "2",
            "circumference c1",
        ]);
        assert!(output.contains("Invalid input. Please enter a valid number for radius"));
        assert!(output.contains("Created Circle c1 with center o and radius 2"));
        assert!(output.contains("Result: 12.56"));
    }

    #[test]
    fn test_rectangle_and_expression() {
        let output = run(&[
            "create point origin",
            "0 0",
            "create point corner",
            "2 3",
            "create rectangle r1",
            "origin",
            "corner",
            "area r1 + area r1",
        ]);
        assert!(output.contains(
            "Created Rectangle r1 with corners (0, 0) and (2, 3), Area: 6, Perimeter: 10"
        ));
        assert!(output.contains("Result: 12"));
    }

    #[test]
    fn test_invalid_coordinates_abort_creation() {
        let output = run(&["create point p", "1 two", "list points"]);
        assert!(output.contains("Invalid input, please enter two valid numbers"));
        assert!(output.contains("No points created yet"));
    }

    #[test]
    fn test_name_collision_reported_before_prompts() {
        let output = run(&[
            "create point p",
            "0 0",
            "create circle p",
            "area p",
        ]);
        assert!(output.contains("shape with name 'p' already exists"));
        // The follow-up line was never consumed as a prompt answer, so it
        // runs as a command of its own.
        assert!(output.contains("cannot take area of point 'p'"));
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let output = run(&["flarp"]);
        assert!(output.contains("unknown command or operator 'flarp'"));
    }

    #[test]
    fn test_empty_line_is_reported() {
        let output = run(&[""]);
        assert!(output.contains("No command entered"));
    }

    #[test]
    fn test_exit_stops_the_session() {
        let output = run(&["exit", "create point p"]);
        assert!(output.contains("Closing the calculator gracefully :)"));
        assert!(!output.contains("Created"));
    }

    #[test]
    fn test_list_shapes() {
        let output = run(&[
            "create point b",
            "1 1",
            "create point a",
            "0 0",
            "list points",
            "list circles",
        ]);
        assert!(output.contains("List of points:\na: (0, 0)\nb: (1, 1)"));
        assert!(output.contains("No circles created yet"));
    }

    #[test]
    fn test_unknown_list_kind() {
        let output = run(&["list triangles"]);
        assert!(output.contains("Unknown shape type for listing: triangles."));
    }

    #[test]
    fn test_number_validation_shapes() {
        for valid in ["1", "-1", "2.5", ".5", "-0.25", "10"] {
            assert!(is_valid_number(valid), "{valid} should parse");
        }
        for invalid in ["", "-", "5.", "1.2.3", "1e5", "inf", "nan", "two"] {
            assert!(!is_valid_number(invalid), "{invalid} should not parse");
        }
    }
}
