//! The typed symbols consumed by the parser.
//!
//! A [`Symbol`] is one already-classified token with its source span. The parser never sees raw
//! text; both text input (through the [`Tokenizer`](super::Tokenizer)) and pre-tokenized input
//! lists reduce to a sequence of these.

use crate::ast::Relation;
use crate::rational::Rational;
use std::ops::Range;

/// An operator glyph as it appears in the input, before the parser decides whether a `-` is
/// binary subtraction or unary minus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpToken {
    /// `+`
    Plus,

    /// `-`
    Minus,

    /// `*`
    Times,

    /// `/`
    Divide,
}

/// The kind of a [`Symbol`], with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    /// A numeric literal.
    Number(Rational),

    /// A single-letter variable.
    Variable(char),

    /// An operator glyph.
    Operator(OpToken),

    /// `(`
    OpenParen,

    /// `)`
    CloseParen,

    /// A relation glyph such as `=` or `<=`.
    Relation(Relation),

    /// An unresolved placeholder carried over from a structured input list. Always a parse
    /// error; plain text input never produces one.
    Placeholder,

    /// A character the tokenizer could not classify. The parser reports it as an invalid
    /// character; the tokenizer itself has no error channel.
    Invalid(char),

    /// A numeric literal that could not be parsed, such as `2.`.
    InvalidNumber,
}

/// A typed token with the source range it was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// The kind of symbol, with its payload.
    pub kind: SymbolKind,

    /// The region of the source this symbol originated from.
    pub span: Range<usize>,
}

impl Symbol {
    /// Creates a symbol from its parts.
    pub fn new(kind: SymbolKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}
