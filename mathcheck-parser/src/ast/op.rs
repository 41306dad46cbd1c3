//! Operator kinds and their precedence.

use std::fmt;

/// The associativity of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// `op op a` is evaluated as `op (op a)`.
    Right,
}

/// The kind of an [`Operator`](crate::ast::Expr::Operator) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpKind {
    /// Unary negation, such as `-x`. Arity 1.
    UnaryMinus,

    /// Binary subtraction, such as `x - y`.
    Subtraction,

    /// Addition. N-ary after flattening.
    Addition,

    /// Multiplication (explicit or implicit). N-ary after flattening.
    Multiplication,

    /// Division, such as `x / y`.
    Division,
}

impl OpKind {
    /// The precedence of the operator. Higher binds tighter; note that division binds tighter
    /// than multiplication, so `1/2x` parses as `(1/2) * x`.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Addition | Self::Subtraction => 1,
            Self::Multiplication => 2,
            Self::Division => 3,
            Self::UnaryMinus => 4,
        }
    }

    /// The associativity of the operator. All binary operators are left-associative; unary minus
    /// is right-associative.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::UnaryMinus => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Returns true if the operator is associative, i.e. nested applications of it can be
    /// flattened into one n-ary node.
    pub fn is_associative(self) -> bool {
        matches!(self, Self::Addition | Self::Multiplication)
    }

    /// Returns true if the operator is commutative. Children of commutative operators compare as
    /// multisets in the upto-rearrangement equalities.
    pub fn is_commutative(self) -> bool {
        matches!(self, Self::Addition | Self::Multiplication)
    }

    /// Returns true if the operator takes exactly one argument.
    pub fn is_unary(self) -> bool {
        matches!(self, Self::UnaryMinus)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnaryMinus | Self::Subtraction => write!(f, "-"),
            Self::Addition => write!(f, "+"),
            Self::Multiplication => write!(f, "*"),
            Self::Division => write!(f, "/"),
        }
    }
}
