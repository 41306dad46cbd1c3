use ariadne::Source;
use mathcheck_compute::error::Error as RewriteError;
use mathcheck_parser::parser::error::Error as ParseError;

/// Utility enum to package errors that can occur while parsing / canonicalizing.
pub enum Error {
    /// An error that occurred while parsing.
    ParseError(ParseError),

    /// An error that occurred while rewriting, such as folding a division by zero.
    RewriteError(RewriteError),
}

impl Error {
    /// Report the error in this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        let report = match self {
            Self::ParseError(err) => err.build_report("input"),
            Self::RewriteError(err) => err.build_report("input"),
        };
        report.eprint(("input", Source::from(input))).unwrap();
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::ParseError(err)
    }
}

impl From<RewriteError> for Error {
    fn from(err: RewriteError) -> Self {
        Self::RewriteError(err)
    }
}
