//! Rules that collapse fractions into a single division at the top of a subtree.
//!
//! After these rules saturate, any subtree contains at most one division node, sitting above
//! everything else. That shape is what like-term collection and constant folding expect.

use super::{do_add, do_divide, do_multiply};
use crate::error::Error;
use crate::util::{combine_expressions, is_division};
use mathcheck_parser::ast::{Expr, OpKind};

/// `(a/b)/c` becomes `a/(b*c)`, and `a/(b/c)` becomes `(a*c)/b`. One nesting level is removed
/// per application; iteration unnests any depth.
pub fn nested_division(expr: &Expr) -> Result<Option<Expr>, Error> {
    Ok(do_divide(expr, |numerator, denominator| {
        if let Expr::Operator { kind: OpKind::Division, args, .. } = numerator {
            return Some(Expr::binary(
                OpKind::Division,
                args[0].clone(),
                Expr::binary(OpKind::Multiplication, args[1].clone(), denominator.clone()),
            ));
        }
        if let Expr::Operator { kind: OpKind::Division, args, .. } = denominator {
            return Some(Expr::binary(
                OpKind::Division,
                Expr::binary(OpKind::Multiplication, numerator.clone(), args[1].clone()),
                args[0].clone(),
            ));
        }
        None
    }))
}

/// `(a/b)*(c/d)` becomes `(a*c)/(b*d)`. Non-fraction factors join the numerator, so
/// `x*(a/b)` becomes `(x*a)/b`.
pub fn rational_multiplication(expr: &Expr) -> Result<Option<Expr>, Error> {
    Ok(do_multiply(expr, |factors| {
        if !factors.iter().any(is_division) {
            return None;
        }

        let mut numerators = Vec::new();
        let mut denominators = Vec::new();
        for factor in factors {
            match factor {
                Expr::Operator { kind: OpKind::Division, args, .. } => {
                    numerators.push(args[0].clone());
                    denominators.push(args[1].clone());
                }
                other => numerators.push(other.clone()),
            }
        }

        Some(Expr::binary(
            OpKind::Division,
            combine_expressions(numerators, OpKind::Multiplication),
            combine_expressions(denominators, OpKind::Multiplication),
        ))
    }))
}

/// `a/b + c` becomes `(a + b*c)/b`: the remaining terms are brought over the first fraction's
/// denominator. No common factor is extracted; reduction happens when the numbers fold.
pub fn rational_addition(expr: &Expr) -> Result<Option<Expr>, Error> {
    Ok(do_add(expr, |terms| {
        let idx = terms.iter().position(is_division)?;
        let Expr::Operator { kind: OpKind::Division, args, .. } = &terms[idx] else {
            return None;
        };
        let (numerator, denominator) = (&args[0], &args[1]);

        let rest = terms
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, term)| term.clone())
            .collect::<Vec<_>>();
        let rest = combine_expressions(rest, OpKind::Addition);

        Some(Expr::binary(
            OpKind::Division,
            Expr::binary(
                OpKind::Addition,
                numerator.clone(),
                Expr::binary(OpKind::Multiplication, denominator.clone(), rest),
            ),
            denominator.clone(),
        ))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathcheck_parser::parser::Parser;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Expr {
        Parser::new(input).parse_expression().unwrap()
    }

    #[test]
    fn division_in_the_numerator() {
        assert_eq!(
            nested_division(&parse("(a/b)/c")).unwrap(),
            Some(parse("a/(b*c)")),
        );
    }

    #[test]
    fn division_in_the_denominator() {
        assert_eq!(
            nested_division(&parse("a/(b/c)")).unwrap(),
            Some(parse("(a*c)/b")),
        );
    }

    #[test]
    fn plain_division_is_left_alone() {
        assert_eq!(nested_division(&parse("a/b")).unwrap(), None);
    }

    #[test]
    fn fractions_multiply_across() {
        assert_eq!(
            rational_multiplication(&parse("(a/b)*(c/d)")).unwrap(),
            Some(parse("(a*c)/(b*d)")),
        );
    }

    #[test]
    fn loose_factors_join_the_numerator() {
        assert_eq!(
            rational_multiplication(&parse("x*(a/b)")).unwrap(),
            Some(parse("(x*a)/b")),
        );
    }

    #[test]
    fn fraction_free_products_are_left_alone() {
        assert_eq!(rational_multiplication(&parse("x*y")).unwrap(), None);
    }

    #[test]
    fn sums_move_over_the_denominator() {
        assert_eq!(
            rational_addition(&parse("a/b + c")).unwrap(),
            Some(parse("(a + b*c)/b")),
        );
    }

    #[test]
    fn fraction_free_sums_are_left_alone() {
        assert_eq!(rational_addition(&parse("a + c")).unwrap(), None);
    }
}
