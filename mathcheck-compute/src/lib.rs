//! Exact simplification and canonical forms for elementary algebra.
//!
//! This crate takes the expression trees produced by `mathcheck_parser` and rewrites them with a
//! small set of rules over exact rational arithmetic. The [`canonicalize`] module drives the
//! rules to two canonical shapes: a normalized tree with no subtraction, no unary minus, and at
//! most one fraction per subtree, and a polynomial normal form with like terms collected and
//! ordered by degree. Equivalence of two inputs is decided by comparing normal forms, never by
//! floating-point evaluation.
//!
//! ```
//! use mathcheck_compute::entity::MathEntity;
//! use mathcheck_parser::parser::Parser;
//!
//! let worked = Parser::new("2x + 3x").parse_expression().unwrap();
//! let answer = Parser::new("5x").parse_expression().unwrap();
//! assert!(worked.is_equivalent(&answer).unwrap());
//! ```

pub mod canonicalize;
pub mod entity;
pub mod error;
pub mod simplify;
pub mod util;
