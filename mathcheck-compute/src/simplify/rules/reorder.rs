//! Orders the terms of a sum by descending degree.

use crate::error::Error;
use crate::util::monomial_parts;
use mathcheck_parser::ast::{Expr, OpKind};
use std::cmp::Reverse;

/// Sorts one level of addition children descending by degree, ties broken lexicographically by
/// variable signature, so `3 + x*x + 2x` becomes `x*x + 2x + 3`.
///
/// Only the immediate children are ordered; this is correct only for trees that have already
/// been flattened, which is the shape the normalization pipeline hands over.
pub fn reorder_terms(expr: &Expr) -> Result<Option<Expr>, Error> {
    let Expr::Operator { kind: OpKind::Addition, args, .. } = expr else {
        return Ok(None);
    };

    let mut sorted = args.clone();
    sorted.sort_by_key(term_key);
    if sorted == *args {
        return Ok(None);
    }
    Ok(Some(Expr::nary(OpKind::Addition, sorted)))
}

/// Highest degree first; a subtree without a polynomial degree sorts last.
fn term_key(expr: &Expr) -> (Reverse<i64>, String) {
    let degree = expr.degree().map_or(-1, i64::from);
    let signature = monomial_parts(expr)
        .map(|(_, variables)| variables.into_iter().collect())
        .unwrap_or_default();
    (Reverse(degree), signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathcheck_parser::parser::Parser;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Expr {
        Parser::new(input).parse_expression().unwrap()
    }

    fn nary_sum(terms: &[&str]) -> Expr {
        Expr::nary(OpKind::Addition, terms.iter().map(|t| parse(t)).collect())
    }

    #[test]
    fn descending_by_degree() {
        assert_eq!(
            reorder_terms(&nary_sum(&["3", "x*x", "2x"])).unwrap(),
            Some(nary_sum(&["x*x", "2x", "3"])),
        );
    }

    #[test]
    fn ties_break_by_variable_name() {
        assert_eq!(
            reorder_terms(&nary_sum(&["y", "x"])).unwrap(),
            Some(nary_sum(&["x", "y"])),
        );
    }

    #[test]
    fn ordered_sums_are_left_alone() {
        assert_eq!(reorder_terms(&nary_sum(&["x*x", "2x", "3"])).unwrap(), None);
        assert_eq!(reorder_terms(&parse("2x")).unwrap(), None);
    }
}
