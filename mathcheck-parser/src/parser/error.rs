//! Parse errors. Every error carries the source span of the failure; parsing stops at the first
//! error and never silently recovers.

use ariadne::{Fmt, Report};
use mathcheck_error::{build_report, ErrorKind, EXPR};
use std::ops::Range;

/// A parsing (or arithmetic-folding) error, with the source span it originated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The region of the source code that this error originated from.
    pub span: Range<usize>,

    /// The kind of error that occurred.
    pub kind: ParseErrorKind,
}

impl Error {
    /// Creates a new error with the given span and kind.
    pub fn new(span: Range<usize>, kind: ParseErrorKind) -> Self {
        Self { span, kind }
    }

    /// Build a report from this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.span)
    }
}

/// Everything that can go wrong while turning input into an expression or equation, plus the
/// arithmetic failure shared with the rule engine ([`ParseErrorKind::DivisionByZero`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A parenthesis was opened and never closed, or closed and never opened.
    MismatchParens,

    /// An operator had too few operands.
    NotEnoughArguments,

    /// Two operands appeared with no operator between them.
    MissingOperator,

    /// A character the tokenizer could not classify.
    InvalidCharacter(char),

    /// A division with an exactly-zero divisor.
    DivisionByZero,

    /// The input contains an unresolved placeholder token.
    PlaceholderPresent,

    /// More than one relation symbol appeared in one parse.
    MultipleRelations,

    /// An equation was expected, but the input contains no relation symbol.
    EquationExpected,

    /// An expression was expected and none was found.
    MissingExpression,

    /// An operation that is not supported in this position, such as a relation inside a bare
    /// expression or `*` where an operand should start.
    UnsupportedOperation,

    /// A numeric literal that is not of the form `a.b`.
    InvalidNumber,
}

impl ErrorKind for ParseErrorKind {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: &Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        match self {
            Self::MismatchParens => build_report(
                src_id,
                span,
                "mismatched parenthesis",
                "this parenthesis is never matched",
                Some("add the matching parenthesis".to_string()),
            ),
            Self::NotEnoughArguments => build_report(
                src_id,
                span,
                "operator is missing an operand",
                format!("this operator needs another {}", "expression".fg(EXPR)),
                None,
            ),
            Self::MissingOperator => build_report(
                src_id,
                span,
                "missing an operator",
                "there is no operator between this and the previous operand",
                Some(format!("add an operator such as {} before this", "*".fg(EXPR))),
            ),
            Self::InvalidCharacter(c) => build_report(
                src_id,
                span,
                format!("invalid character `{}`", c),
                "this character cannot appear in an expression",
                None,
            ),
            Self::DivisionByZero => build_report(
                src_id,
                span,
                "division by zero",
                "the divisor here is exactly zero",
                None,
            ),
            Self::PlaceholderPresent => build_report(
                src_id,
                span,
                "unresolved placeholder",
                "fill in this placeholder before checking the input",
                None,
            ),
            Self::MultipleRelations => build_report(
                src_id,
                span,
                "more than one relation",
                "this is the second relation symbol in the input",
                Some("an equation contains exactly one relation".to_string()),
            ),
            Self::EquationExpected => build_report(
                src_id,
                span,
                "expected an equation",
                "no relation symbol was found in this input",
                Some(format!("add a relation such as {}", "=".fg(EXPR))),
            ),
            Self::MissingExpression => build_report(
                src_id,
                span,
                "missing an expression",
                format!("expected an {} here", "expression".fg(EXPR)),
                None,
            ),
            Self::UnsupportedOperation => build_report(
                src_id,
                span,
                "unsupported operation",
                "this operation is not supported here",
                None,
            ),
            Self::InvalidNumber => build_report(
                src_id,
                span,
                "invalid number",
                "this is not a valid number",
                Some(format!(
                    "numbers are digit runs with an optional decimal point, like {} or {}",
                    "12".fg(EXPR),
                    "0.5".fg(EXPR),
                )),
            ),
        }
    }
}
