//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

use ariadne::{Color, Label, Report, ReportKind};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: &Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// Builds a plain error report with a message, a label over the offending span, and an optional
/// help note. Most error kinds need nothing more than this.
pub fn build_report<'a>(
    src_id: &'a str,
    span: &Range<usize>,
    message: impl ToString,
    label: impl ToString,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let mut builder = Report::build(ReportKind::Error, src_id, span.start)
        .with_message(message)
        .with_label(
            Label::new((src_id, span.clone()))
                .with_message(label)
                .with_color(EXPR),
        );

    if let Some(help) = help {
        builder = builder.with_help(help);
    }

    builder.finish()
}
