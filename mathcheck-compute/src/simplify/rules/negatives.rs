//! Rewrites subtraction and unary minus into addition of negated terms.

use crate::error::Error;
use crate::util::negate;
use mathcheck_parser::ast::{Expr, OpKind};

/// `a - b` becomes `a + (-1)*b`, and `-x` folds its sign into the nearest rational factor.
/// Nested unary minuses cancel: `--x` becomes `x`.
///
/// After this rule has saturated, no subtraction or unary minus node remains in the tree.
pub fn remove_negatives(expr: &Expr) -> Result<Option<Expr>, Error> {
    match expr {
        Expr::Operator { kind: OpKind::Subtraction, args, .. } => {
            let mut terms = Vec::with_capacity(args.len());
            terms.push(args[0].clone());
            terms.extend(args[1..].iter().map(negate));
            Ok(Some(Expr::nary(OpKind::Addition, terms)))
        }
        Expr::Operator { kind: OpKind::UnaryMinus, args, .. } => Ok(Some(negate(&args[0]))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplify::apply;
    use mathcheck_parser::parser::Parser;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Expr {
        Parser::new(input).parse_expression().unwrap()
    }

    fn rewrite(input: &str) -> Expr {
        apply(remove_negatives, &parse(input)).unwrap()
    }

    #[test]
    fn subtraction_becomes_addition() {
        assert_eq!(
            rewrite("a-b"),
            Expr::binary(
                OpKind::Addition,
                Expr::variable('a'),
                Expr::binary(OpKind::Multiplication, Expr::whole(-1), Expr::variable('b')),
            ),
        );
    }

    #[test]
    fn sign_lands_on_the_coefficient() {
        assert_eq!(
            rewrite("a-2b"),
            Expr::binary(
                OpKind::Addition,
                Expr::variable('a'),
                Expr::binary(OpKind::Multiplication, Expr::whole(-2), Expr::variable('b')),
            ),
        );
    }

    #[test]
    fn nested_unary_minus_cancels() {
        assert_eq!(rewrite("--3"), Expr::whole(3));
        assert_eq!(rewrite("-3"), Expr::whole(-3));
        assert_eq!(rewrite("--x"), Expr::variable('x'));
    }

    #[test]
    fn untouched_trees_come_back_unchanged() {
        assert_eq!(rewrite("a+b"), parse("a+b"));
    }
}
