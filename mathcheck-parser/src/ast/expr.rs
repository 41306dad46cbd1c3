//! The expression tree manipulated by every other component.
//!
//! [`Expr`] is a closed set of node kinds: numbers, single-letter variables, operators with an
//! ordered child list, and the [`Expr::Null`] sentinel for an absent subexpression. Every rule
//! matches exhaustively on this set, so adding a rule cannot silently ignore a node kind.
//!
//! Nodes are immutable once built: a rewrite always produces a new node, reusing unchanged
//! children by value. The optional `range` records where in the source the parser built the node
//! from; it is not preserved across rewrites and must not be relied on after the first rewrite
//! pass.
//!
//! # Equality
//!
//! [`PartialEq`] is **positional** structural equality, ignoring ranges: children must match in
//! order. [`Expr::eq_upto_rearrangement`] relaxes this at a single level, treating the children
//! of a commutative operator as a multiset; [`Expr::eq_upto_rearrangement_recursive`] applies
//! that relaxation at every level. Rearrangement equality can never report false positives for
//! commutative operators, which is what makes it usable as the comparison of last resort after
//! canonicalization.

use crate::rational::Rational;
use std::fmt;
use std::ops::Range;
use super::op::OpKind;

/// A node in the expression tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// An exact rational constant.
    Number {
        /// The value of the constant.
        value: Rational,

        /// The source range this node was parsed from, if any.
        range: Option<Range<usize>>,
    },

    /// A single-letter variable. Case is significant: `x` and `X` are distinct.
    Variable {
        /// The name of the variable.
        name: char,

        /// The source range this node was parsed from, if any.
        range: Option<Range<usize>>,
    },

    /// An operator applied to an ordered list of children. Arity is at least 1 for unary minus
    /// and at least 2 otherwise; associative operators become n-ary after flattening.
    Operator {
        /// The kind of operator.
        kind: OpKind,

        /// The children, in order.
        args: Vec<Expr>,

        /// The source range this node was parsed from, if any.
        range: Option<Range<usize>>,
    },

    /// The sentinel for an absent or removed subexpression.
    Null,
}

impl Expr {
    /// Creates a number node with no source range.
    pub fn number(value: Rational) -> Self {
        Self::Number { value, range: None }
    }

    /// Creates a whole-number node with no source range.
    pub fn whole(n: i64) -> Self {
        Self::number(Rational::whole(n))
    }

    /// Creates a variable node with no source range.
    pub fn variable(name: char) -> Self {
        Self::Variable { name, range: None }
    }

    /// Creates a unary operator node.
    pub fn unary(kind: OpKind, arg: Expr) -> Self {
        Self::Operator { kind, args: vec![arg], range: None }
    }

    /// Creates a binary operator node.
    pub fn binary(kind: OpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Operator { kind, args: vec![lhs, rhs], range: None }
    }

    /// Creates an n-ary operator node from the given children.
    pub fn nary(kind: OpKind, args: Vec<Expr>) -> Self {
        Self::Operator { kind, args, range: None }
    }

    /// Returns a copy of this node with the given source range.
    pub fn with_range(mut self, new_range: Option<Range<usize>>) -> Self {
        match &mut self {
            Self::Number { range, .. }
            | Self::Variable { range, .. }
            | Self::Operator { range, .. } => *range = new_range,
            Self::Null => {}
        }
        self
    }

    /// The source range this node was parsed from, if any.
    pub fn range(&self) -> Option<&Range<usize>> {
        match self {
            Self::Number { range, .. }
            | Self::Variable { range, .. }
            | Self::Operator { range, .. } => range.as_ref(),
            Self::Null => None,
        }
    }

    /// The children of this node. Leaves have no children.
    pub fn children(&self) -> &[Expr] {
        match self {
            Self::Operator { args, .. } => args,
            _ => &[],
        }
    }

    /// If this node is a number, returns its value.
    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            Self::Number { value, .. } => Some(value),
            _ => None,
        }
    }

    /// If this node is a variable, returns its name.
    pub fn as_variable(&self) -> Option<char> {
        match self {
            Self::Variable { name, .. } => Some(*name),
            _ => None,
        }
    }

    /// If this node is an operator, returns its kind.
    pub fn op_kind(&self) -> Option<OpKind> {
        match self {
            Self::Operator { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns true if this node is the [`Expr::Null`] sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if this node is a number with the given whole value.
    pub fn equals_value(&self, n: i64) -> bool {
        self.as_number()
            .map(|value| value.is_equivalent(&Rational::whole(n)))
            .unwrap_or(false)
    }

    /// The polynomial degree of this subtree, or [`None`] if it has no defined degree.
    ///
    /// Numbers have degree 0 and variables degree 1. A multiplication's degree is the sum of its
    /// children's degrees and an addition's the maximum; division, subtraction, and unary minus
    /// (which a normalized tree no longer contains) have no defined degree.
    pub fn degree(&self) -> Option<u32> {
        match self {
            Self::Number { .. } => Some(0),
            Self::Variable { .. } => Some(1),
            Self::Operator { kind, args, .. } => match kind {
                OpKind::Multiplication => {
                    args.iter().map(Expr::degree).try_fold(0, |acc, d| Some(acc + d?))
                }
                OpKind::Addition => {
                    args.iter().map(Expr::degree).try_fold(0, |acc, d| Some(acc.max(d?)))
                }
                OpKind::Division | OpKind::Subtraction | OpKind::UnaryMinus => None,
            },
            Self::Null => None,
        }
    }

    /// Compares this node with another, treating the children of a commutative operator as a
    /// multiset rather than a sequence. The comparison of the children themselves remains
    /// positional; see [`Expr::eq_upto_rearrangement_recursive`] for the fully recursive
    /// variant.
    pub fn eq_upto_rearrangement(&self, other: &Expr) -> bool {
        self.eq_rearranged(other, |a, b| a == b)
    }

    /// Compares this node with another, treating the children of every commutative operator in
    /// both trees as multisets.
    pub fn eq_upto_rearrangement_recursive(&self, other: &Expr) -> bool {
        self.eq_rearranged(other, Expr::eq_upto_rearrangement_recursive)
    }

    fn eq_rearranged(&self, other: &Expr, eq: impl Fn(&Expr, &Expr) -> bool + Copy) -> bool {
        match (self, other) {
            (Self::Operator { kind: a, args: lhs, .. }, Self::Operator { kind: b, args: rhs, .. }) => {
                if a != b {
                    return false;
                }
                if a.is_commutative() {
                    multiset_eq(lhs, rhs, eq)
                } else {
                    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| eq(l, r))
                }
            }
            _ => self == other,
        }
    }
}

/// Returns true if `lhs` and `rhs` contain the same elements under `eq`, in any order, with the
/// same multiplicities.
fn multiset_eq(lhs: &[Expr], rhs: &[Expr], eq: impl Fn(&Expr, &Expr) -> bool + Copy) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut unmatched: Vec<&Expr> = rhs.iter().collect();
    for item in lhs {
        match unmatched.iter().position(|other| eq(item, other)) {
            Some(idx) => {
                unmatched.swap_remove(idx);
            }
            None => return false,
        }
    }
    true
}

/// Positional structural equality. Source ranges never participate; numbers compare by exact
/// value.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number { value: a, .. }, Self::Number { value: b, .. }) => a == b,
            (Self::Variable { name: a, .. }, Self::Variable { name: b, .. }) => a == b,
            (
                Self::Operator { kind: a, args: lhs, .. },
                Self::Operator { kind: b, args: rhs, .. },
            ) => a == b && lhs == rhs,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl Eq for Expr {}

impl Expr {
    /// The precedence of this node for printing; leaves bind tighter than any operator.
    fn print_precedence(&self) -> u8 {
        match self {
            Self::Operator { kind, .. } => kind.precedence(),
            _ => u8::MAX,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, min_precedence: u8) -> fmt::Result {
        if self.print_precedence() < min_precedence {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{}", value),
            Self::Variable { name, .. } => write!(f, "{}", name),
            Self::Null => write!(f, "null"),
            Self::Operator { kind, args, .. } => {
                let precedence = kind.precedence();
                match kind {
                    OpKind::UnaryMinus => {
                        write!(f, "-")?;
                        args[0].fmt_child(f, precedence)
                    }
                    OpKind::Addition => {
                        let mut iter = args.iter();
                        if let Some(first) = iter.next() {
                            first.fmt_child(f, precedence)?;
                            for arg in iter {
                                write!(f, " + ")?;
                                arg.fmt_child(f, precedence)?;
                            }
                        }
                        Ok(())
                    }
                    OpKind::Subtraction => {
                        let mut iter = args.iter();
                        if let Some(first) = iter.next() {
                            first.fmt_child(f, precedence)?;
                            for arg in iter {
                                write!(f, " - ")?;
                                // the right side of a subtraction binds tighter
                                arg.fmt_child(f, precedence + 1)?;
                            }
                        }
                        Ok(())
                    }
                    OpKind::Multiplication => {
                        let mut iter = args.iter();
                        if let Some(first) = iter.next() {
                            first.fmt_child(f, precedence)?;
                            for arg in iter {
                                write!(f, "*")?;
                                arg.fmt_child(f, precedence)?;
                            }
                        }
                        Ok(())
                    }
                    OpKind::Division => {
                        args[0].fmt_child(f, precedence)?;
                        write!(f, "/")?;
                        args[1].fmt_child(f, precedence + 1)
                    }
                }
            }
        }
    }
}
