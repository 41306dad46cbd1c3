//! Single-pass tokenizer turning raw text into a sequence of typed [`Symbol`]s.
//!
//! The [`Tokenizer`] is a finite iterator; recreate it to scan again. It skips whitespace and
//! never fails: unclassifiable characters and malformed numeric literals are carried through as
//! [`SymbolKind::Invalid`] / [`SymbolKind::InvalidNumber`] symbols for the parser to report.

pub mod symbol;
pub mod token;

use crate::ast::Relation;
use crate::rational::Rational;
use logos::{Lexer, Logos};
pub use symbol::{OpToken, Symbol, SymbolKind};
pub use token::TokenKind;

/// Returns an iterator over the raw token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// An iterator over the [`Symbol`]s of an input string.
pub struct Tokenizer<'source> {
    lexer: Lexer<'source, TokenKind>,
}

impl<'source> Tokenizer<'source> {
    /// Creates a tokenizer for the given input.
    pub fn new(input: &'source str) -> Self {
        Self { lexer: tokenize(input) }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.lexer.next()?;
            let span = self.lexer.span();
            let slice = self.lexer.slice();

            let kind = match token {
                Ok(TokenKind::Whitespace) => continue,
                Ok(TokenKind::Add) => SymbolKind::Operator(OpToken::Plus),
                Ok(TokenKind::Sub) => SymbolKind::Operator(OpToken::Minus),
                Ok(TokenKind::Mul) => SymbolKind::Operator(OpToken::Times),
                Ok(TokenKind::Div) => SymbolKind::Operator(OpToken::Divide),
                Ok(TokenKind::Equals) => SymbolKind::Relation(Relation::Equals),
                Ok(TokenKind::Less) => SymbolKind::Relation(Relation::Less),
                Ok(TokenKind::Greater) => SymbolKind::Relation(Relation::Greater),
                Ok(TokenKind::LessEq) => SymbolKind::Relation(Relation::LessEq),
                Ok(TokenKind::GreaterEq) => SymbolKind::Relation(Relation::GreaterEq),
                Ok(TokenKind::OpenParen) => SymbolKind::OpenParen,
                Ok(TokenKind::CloseParen) => SymbolKind::CloseParen,
                Ok(TokenKind::Letter) => {
                    SymbolKind::Variable(slice.chars().next().unwrap_or('?'))
                }
                Ok(TokenKind::Number) => match Rational::from_decimal_str(slice) {
                    Some(value) => SymbolKind::Number(value),
                    None => SymbolKind::InvalidNumber,
                },
                Ok(TokenKind::Unknown) | Err(()) => {
                    SymbolKind::Invalid(slice.chars().next().unwrap_or('?'))
                }
            };

            return Some(Symbol::new(kind, span));
        }
    }
}
