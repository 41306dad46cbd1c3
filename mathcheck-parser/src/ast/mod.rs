//! The data model shared by the parser and the symbolic engine: expressions, equations, and the
//! [`Entity`] sum of the two.

pub mod equation;
pub mod expr;
pub mod op;

pub use equation::{Equation, Relation};
pub use expr::Expr;
pub use op::{Associativity, OpKind};

use std::fmt;

/// What kind of entity a parsed input turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// A bare expression.
    Expression,

    /// An equation or inequality.
    Equation,
}

/// What kind of entity the caller expects the parser to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedKind {
    /// Accept either an expression or an equation.
    Any,

    /// Finding a relation symbol is an error.
    Expression,

    /// Not finding a relation symbol is an error.
    Equation,
}

/// Either an expression or an equation. This is what the parser produces when the caller will
/// accept both.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    /// A bare expression.
    Expression(Expr),

    /// An equation or inequality.
    Equation(Equation),
}

impl Entity {
    /// The kind of this entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Expression(_) => EntityKind::Expression,
            Self::Equation(_) => EntityKind::Equation,
        }
    }

    /// If this entity is an expression, returns it.
    pub fn as_expression(&self) -> Option<&Expr> {
        match self {
            Self::Expression(expr) => Some(expr),
            Self::Equation(_) => None,
        }
    }

    /// If this entity is an equation, returns it.
    pub fn as_equation(&self) -> Option<&Equation> {
        match self {
            Self::Expression(_) => None,
            Self::Equation(eq) => Some(eq),
        }
    }
}

impl From<Expr> for Entity {
    fn from(expr: Expr) -> Self {
        Self::Expression(expr)
    }
}

impl From<Equation> for Entity {
    fn from(eq: Equation) -> Self {
        Self::Equation(eq)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expr) => write!(f, "{}", expr),
            Self::Equation(eq) => write!(f, "{}", eq),
        }
    }
}
