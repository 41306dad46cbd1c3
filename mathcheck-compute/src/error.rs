//! Errors raised while rewriting expressions.

use ariadne::Report;
use mathcheck_error::build_report;
use std::ops::Range;

/// An error that occurred while applying rewrite rules to an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The source range of the subtree that caused the error, if the tree still carries one.
    pub range: Option<Range<usize>>,

    /// The kind of error.
    pub kind: ErrorKind,
}

impl Error {
    pub fn new(range: Option<Range<usize>>, kind: ErrorKind) -> Self {
        Self { range, kind }
    }

    /// Builds a report to print to stderr.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        let span = self.range.clone().unwrap_or(0..0);
        mathcheck_error::ErrorKind::build_report(&self.kind, src_id, &span)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A division with an exactly zero divisor was folded.
    DivisionByZero,
}

impl mathcheck_error::ErrorKind for ErrorKind {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: &Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        match self {
            Self::DivisionByZero => build_report(
                src_id,
                span,
                "cannot divide by zero".to_string(),
                "this division has a zero divisor".to_string(),
                None,
            ),
        }
    }
}
