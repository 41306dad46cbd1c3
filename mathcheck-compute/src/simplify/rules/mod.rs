//! Implementation of the rewrite rules.
//!
//! Each rule is a function that takes the node to rewrite as an argument, and returns
//! `Ok(Some(expr))` with the rewritten expression if the rule applies at that node, or `Ok(None)`
//! if it does not. Rules never recurse; the drivers in [`crate::simplify`] decide where in the
//! tree a rule runs.

pub mod calculate;
pub mod collect;
pub mod distribute;
pub mod flatten;
pub mod fraction;
pub mod identity;
pub mod negatives;
pub mod null;
pub mod reorder;

pub use calculate::{calculate, decimal_reduce};
pub use collect::collect_like_terms;
pub use distribute::distribute;
pub use flatten::flatten;
pub use fraction::{nested_division, rational_addition, rational_multiplication};
pub use identity::identity;
pub use negatives::remove_negatives;
pub use null::remove_null;
pub use reorder::reorder_terms;

use mathcheck_parser::ast::{Expr, OpKind};

/// If the expression is an addition node, calls the given transformation function with the terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl FnOnce(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Operator { kind: OpKind::Addition, args, .. } = expr {
        f(args)
    } else {
        None
    }
}

/// If the expression is a multiplication node, calls the given transformation function with the
/// factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl FnOnce(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Operator { kind: OpKind::Multiplication, args, .. } = expr {
        f(args)
    } else {
        None
    }
}

/// If the expression is a division node, calls the given transformation function with the
/// numerator and denominator.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_divide(
    expr: &Expr,
    f: impl FnOnce(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Operator { kind: OpKind::Division, args, .. } = expr {
        f(&args[0], &args[1])
    } else {
        None
    }
}
