//! Error rendering using ariadne.
//!
//! Core errors carry the offending token's span but no presentation; this
//! module turns them into annotated source snippets. Errors without a span
//! (registration and creation failures) render as a plain message line.

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

use crate::Error;

/// Render an error against the input line it came from, to stderr.
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer.
pub fn render_error_to(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for tests and embedding).
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without ANSI color codes.
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diag = error.to_diagnostic();

    let Some(span) = diag.span else {
        // No location to point at; a plain message is all there is.
        writeln!(writer, "Error: {}", diag.message)?;
        if let Some(help) = diag.help {
            writeln!(writer, "help: {}", help)?;
        }
        return Ok(());
    };

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let mut report = Report::build(ReportKind::Error, ("<input>", span.0.clone()))
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    report = report.with_label(
        Label::new(("<input>", span.0.clone()))
            .with_message(&diag.message)
            .with_color(colors.next()),
    );

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write(("<input>", Source::from(source)), &mut *writer)
}
