//! Equations: two expressions joined by a relation.

use std::fmt;
use super::expr::Expr;

/// The relation joining the two sides of an [`Equation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// `=`
    Equals,

    /// `<`
    Less,

    /// `>`
    Greater,

    /// `<=` or `≤`
    LessEq,

    /// `>=` or `≥`
    GreaterEq,
}

impl Relation {
    /// The relation with its sides swapped: `a < b` is `b > a`.
    pub fn flipped(self) -> Self {
        match self {
            Self::Equals => Self::Equals,
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            Self::LessEq => Self::GreaterEq,
            Self::GreaterEq => Self::LessEq,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals => write!(f, "="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::LessEq => write!(f, "<="),
            Self::GreaterEq => write!(f, ">="),
        }
    }
}

/// An immutable equation (or inequality) between two expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equation {
    /// The relation joining the two sides.
    pub relation: Relation,

    /// The left-hand side.
    pub lhs: Expr,

    /// The right-hand side.
    pub rhs: Expr,
}

impl Equation {
    /// Creates an equation from its parts.
    pub fn new(relation: Relation, lhs: Expr, rhs: Expr) -> Self {
        Self { relation, lhs, rhs }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.relation, self.rhs)
    }
}
