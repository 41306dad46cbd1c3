//! Removes null placeholders left behind by structural edits.

use crate::error::Error;
use crate::util::combine_expressions;
use mathcheck_parser::ast::Expr;

/// Drops every [`Expr::Null`] child of an operator, then collapses what remains: an emptied
/// operator becomes its identity element, a singleton becomes its sole child.
pub fn remove_null(expr: &Expr) -> Result<Option<Expr>, Error> {
    let Expr::Operator { kind, args, .. } = expr else {
        return Ok(None);
    };
    if !args.iter().any(Expr::is_null) {
        return Ok(None);
    }

    let kept = args
        .iter()
        .filter(|arg| !arg.is_null())
        .cloned()
        .collect::<Vec<_>>();
    Ok(Some(combine_expressions(kept, *kind)))
}
