//! The rewrite rule engine.
//!
//! A [`Rule`] is a function that inspects the top-level node of an expression and either rewrites
//! it or reports that it does not apply. The [`apply`] driver runs a rule over a whole tree
//! bottom-up, so a rule only ever sees already-rewritten subtrees. [`apply_inner_most`] instead
//! rewrites at the deepest applicable node(s), which simulates one step of a multi-step reduction
//! rather than running the rule to saturation.

pub mod rules;

use crate::error::Error;
use mathcheck_parser::ast::Expr;

/// A rewrite rule. Returns `Ok(Some(expr))` with the rewritten expression if the rule applies at
/// the top level of the given node, `Ok(None)` if it does not, and an error only for arithmetic
/// failures such as folding a division by zero.
pub type Rule = fn(&Expr) -> Result<Option<Expr>, Error>;

/// Applies a rule over the whole tree in post-order: every child is rewritten before the rule
/// sees its parent. Returns the rewritten tree, which is the input unchanged where the rule never
/// applied.
pub fn apply(rule: Rule, expr: &Expr) -> Result<Expr, Error> {
    let rewritten = match expr {
        Expr::Operator { kind, args, range } => {
            let args = args
                .iter()
                .map(|arg| apply(rule, arg))
                .collect::<Result<Vec<_>, _>>()?;
            Expr::nary(*kind, args).with_range(range.clone())
        }
        other => other.clone(),
    };

    Ok(rule(&rewritten)?.unwrap_or(rewritten))
}

/// Applies a rule at the deepest node(s) where it applies, leaving everything above untouched.
/// When `only_first` is set, only the first such node in depth-first order is rewritten.
///
/// Returns `Ok(None)` when the rule applies nowhere in the tree.
pub fn apply_inner_most(
    rule: Rule,
    expr: &Expr,
    only_first: bool,
) -> Result<Option<Expr>, Error> {
    if let Expr::Operator { kind, args, range } = expr {
        let mut changed = false;
        let mut new_args = Vec::with_capacity(args.len());
        for arg in args {
            if changed && only_first {
                new_args.push(arg.clone());
                continue;
            }
            match apply_inner_most(rule, arg, only_first)? {
                Some(new) => {
                    changed = true;
                    new_args.push(new);
                }
                None => new_args.push(arg.clone()),
            }
        }
        if changed {
            return Ok(Some(Expr::nary(*kind, new_args).with_range(range.clone())));
        }
    }

    rule(expr)
}
