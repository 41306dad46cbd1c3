//! Groups like terms of a sum and adds their coefficients.

use crate::error::Error;
use crate::util::{combine_expressions, make_monomial, monomial_parts};
use mathcheck_parser::ast::{Expr, OpKind};
use mathcheck_parser::rational::Rational;

/// `2x + 3x + y` becomes `5x + y`: the terms of a sum are grouped by their variable signature and
/// each group's coefficients are added exactly. Terms whose coefficients cancel to 0 disappear.
///
/// Applies only when every term of the sum is a recognizable monomial; a sum containing, say, an
/// unexpanded product is left alone.
pub fn collect_like_terms(expr: &Expr) -> Result<Option<Expr>, Error> {
    let Expr::Operator { kind: OpKind::Addition, args, .. } = expr else {
        return Ok(None);
    };

    // signatures in first-seen order, so collection does not also reorder
    let mut groups: Vec<(Vec<char>, Rational)> = Vec::new();
    for arg in args {
        let Some((coefficient, variables)) = monomial_parts(arg) else {
            return Ok(None);
        };
        match groups.iter_mut().find(|(signature, _)| *signature == variables) {
            Some((_, total)) => *total = total.add(&coefficient),
            None => groups.push((variables, coefficient)),
        }
    }

    let terms = groups
        .into_iter()
        .filter(|(_, total)| !total.is_zero())
        .map(|(variables, total)| make_monomial(total.reduced(), &variables))
        .collect::<Vec<_>>();
    let collected = combine_expressions(terms, OpKind::Addition);

    // rebuilding also canonicalizes terms like 2*4*x, so compare rather than count groups
    if collected == *expr {
        Ok(None)
    } else {
        Ok(Some(collected))
    }
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
    fn like_terms_combine() {
        assert_eq!(
            collect_like_terms(&nary_sum(&["2x", "3x", "y"])).unwrap(),
            Some(parse("5x + y")),
        );
    }

    #[test]
    fn plain_numbers_fold() {
        assert_eq!(
            collect_like_terms(&parse("2+3")).unwrap(),
            Some(Expr::whole(5)),
        );
    }

    #[test]
    fn repeated_variables_share_a_signature() {
        // x*x and x are different signatures; the two x*x terms combine
        let x = Expr::variable('x');
        assert_eq!(
            collect_like_terms(&nary_sum(&["x*x", "x", "x*x"])).unwrap(),
            Some(Expr::nary(
                OpKind::Addition,
                vec![
                    Expr::nary(
                        OpKind::Multiplication,
                        vec![Expr::whole(2), x.clone(), x.clone()],
                    ),
                    x,
                ],
            )),
        );
    }

    #[test]
    fn cancelling_terms_disappear() {
        let minus_two_x =
            Expr::binary(OpKind::Multiplication, Expr::whole(-2), Expr::variable('x'));
        let sum = Expr::nary(
            OpKind::Addition,
            vec![parse("2x"), minus_two_x, Expr::variable('y')],
        );
        assert_eq!(collect_like_terms(&sum).unwrap(), Some(Expr::variable('y')));
    }

    #[test]
    fn fully_cancelling_sums_become_zero() {
        let minus_x =
            Expr::binary(OpKind::Multiplication, Expr::whole(-1), Expr::variable('x'));
        let sum = Expr::nary(OpKind::Addition, vec![Expr::variable('x'), minus_x]);
        assert_eq!(collect_like_terms(&sum).unwrap(), Some(Expr::whole(0)));
    }

    #[test]
    fn unrecognized_terms_block_collection() {
        assert_eq!(collect_like_terms(&nary_sum(&["x/y", "x"])).unwrap(), None);
    }

    #[test]
    fn already_collected_sums_are_left_alone() {
        assert_eq!(collect_like_terms(&nary_sum(&["2x", "y", "3"])).unwrap(), None);
    }
}
