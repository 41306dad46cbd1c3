//! The distributive property.

use super::do_multiply;
use crate::error::Error;
use crate::util::combine_expressions;
use mathcheck_parser::ast::{Expr, OpKind};

/// `a*(b+c)` becomes `a*b + a*c`. One additive factor is distributed per application; iteration
/// handles products with several, such as `(a+b)*(c+d)`.
pub fn distribute(expr: &Expr) -> Result<Option<Expr>, Error> {
    Ok(do_multiply(expr, |factors| {
        let idx = *distributees(factors).first()?;
        let Expr::Operator { kind: OpKind::Addition, args: terms, .. } = &factors[idx] else {
            return None;
        };

        // multiply every term by the other factors, keeping factor order
        let new_terms = terms
            .iter()
            .map(|term| {
                let product = factors
                    .iter()
                    .enumerate()
                    .map(|(i, factor)| if i == idx { term.clone() } else { factor.clone() })
                    .collect::<Vec<_>>();
                combine_expressions(product, OpKind::Multiplication)
            })
            .collect::<Vec<_>>();
        Some(Expr::nary(OpKind::Addition, new_terms))
    }))
}

/// Detects the multiplication-over-addition shape without descending into the tree.
pub fn can_distribute(expr: &Expr) -> bool {
    match expr {
        Expr::Operator { kind: OpKind::Multiplication, args, .. } => !distributees(args).is_empty(),
        _ => false,
    }
}

/// The indices of the additive factors a product can distribute over.
pub fn distributees(factors: &[Expr]) -> Vec<usize> {
    factors
        .iter()
        .enumerate()
        .filter(|(_, factor)| factor.op_kind() == Some(OpKind::Addition))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonicalize::normalize_expression;
    use mathcheck_parser::parser::Parser;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Expr {
        Parser::new(input).parse_expression().unwrap()
    }

    #[test]
    fn distributes_over_one_sum() {
        assert_eq!(
            distribute(&parse("a*(b+c)")).unwrap(),
            Some(parse("a*b + a*c")),
        );
    }

    #[test]
    fn sum_free_products_are_left_alone() {
        assert_eq!(distribute(&parse("a*b")).unwrap(), None);
        assert!(!can_distribute(&parse("a*b")));
        assert!(can_distribute(&parse("a*(b+c)")));
    }

    #[test]
    fn binomial_products_expand_fully() {
        // iteration distributes both sums
        let expanded = normalize_expression(&parse("(a+b)*(c+d)")).unwrap();
        let expected = normalize_expression(&parse("a*c + a*d + b*c + b*d")).unwrap();
        assert!(expanded.eq_upto_rearrangement_recursive(&expected));
    }
}
