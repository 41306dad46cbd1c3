use logos::Logos;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("=")]
    Equals,

    #[token("<=")]
    #[token("≤")]
    LessEq,

    #[token(">=")]
    #[token("≥")]
    GreaterEq,

    #[token("<")]
    Less,

    #[token(">")]
    Greater,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[a-zA-Z]")]
    Letter,

    /// A digit run with an optional decimal tail. A malformed literal such as `2.` still lexes
    /// as one token; [`Rational::from_decimal_str`](crate::rational::Rational::from_decimal_str)
    /// rejects it when the symbol is built.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    /// Any character no other pattern matched. Surfaced to the parser, which owns the error
    /// channel.
    #[regex(r".", priority = 0)]
    Unknown,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}
