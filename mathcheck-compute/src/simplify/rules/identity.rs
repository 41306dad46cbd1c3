//! Drops identity elements and absorbing zeros.

use crate::error::Error;
use crate::util::combine_expressions;
use mathcheck_parser::ast::{Expr, OpKind};

/// Removes additive 0 terms and multiplicative 1 factors, collapses a product with a 0 factor to
/// 0, and rewrites `x/1` to `x`.
pub fn identity(expr: &Expr) -> Result<Option<Expr>, Error> {
    let Expr::Operator { kind, args, .. } = expr else {
        return Ok(None);
    };

    match kind {
        OpKind::Addition => {
            let kept = args
                .iter()
                .filter(|arg| !arg.equals_value(0))
                .cloned()
                .collect::<Vec<_>>();
            if kept.len() == args.len() {
                return Ok(None);
            }
            Ok(Some(combine_expressions(kept, OpKind::Addition)))
        }
        OpKind::Multiplication => {
            if args.iter().any(|arg| arg.equals_value(0)) {
                return Ok(Some(Expr::whole(0)));
            }
            let kept = args
                .iter()
                .filter(|arg| !arg.equals_value(1))
                .cloned()
                .collect::<Vec<_>>();
            if kept.len() == args.len() {
                return Ok(None);
            }
            Ok(Some(combine_expressions(kept, OpKind::Multiplication)))
        }
        OpKind::Division => {
            if args[1].equals_value(1) {
                Ok(Some(args[0].clone()))
            } else if args[0].equals_value(0) && !args[1].equals_value(0) {
                Ok(Some(Expr::whole(0)))
            } else {
                Ok(None)
            }
        }
        _ => Ok(None),
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

    #[test]
    fn zero_terms_drop() {
        assert_eq!(identity(&parse("x+0")).unwrap(), Some(Expr::variable('x')));
    }

    #[test]
    fn unit_factors_drop() {
        assert_eq!(identity(&parse("1*x")).unwrap(), Some(Expr::variable('x')));
    }

    #[test]
    fn zero_factors_absorb() {
        assert_eq!(identity(&parse("x*0")).unwrap(), Some(Expr::whole(0)));
    }

    #[test]
    fn division_by_one_unwraps() {
        assert_eq!(identity(&parse("x/1")).unwrap(), Some(Expr::variable('x')));
    }

    #[test]
    fn zero_numerator_collapses() {
        assert_eq!(identity(&parse("0/x")).unwrap(), Some(Expr::whole(0)));
        // a zero divisor is an arithmetic error, not an identity; leave it for folding
        assert_eq!(identity(&parse("0/0")).unwrap(), None);
    }

    #[test]
    fn everything_else_is_left_alone() {
        assert_eq!(identity(&parse("x+2")).unwrap(), None);
        assert_eq!(identity(&parse("2x")).unwrap(), None);
    }
}
