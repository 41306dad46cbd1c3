//! Tokenizer, parser, and expression tree for elementary algebra input.
//!
//! Input is infix text over rationals, single-letter variables, the four arithmetic operators,
//! parentheses, and relation symbols. The [`tokenizer`] turns text into [`Symbol`]s, and the
//! [`parser`] turns symbols into an [`Expr`] tree or an [`Equation`]. Numbers are exact
//! [`Rational`]s over arbitrary-precision integers; no floating point is involved at any stage.
//!
//! ```
//! use mathcheck_parser::parser::Parser;
//!
//! let expr = Parser::new("2x + 3").parse_expression().unwrap();
//! assert_eq!(expr.to_string(), "2*x + 3");
//! ```
//!
//! [`Symbol`]: tokenizer::Symbol
//! [`Expr`]: ast::Expr
//! [`Equation`]: ast::Equation
//! [`Rational`]: rational::Rational

pub mod ast;
pub mod parser;
pub mod rational;
pub mod tokenizer;
