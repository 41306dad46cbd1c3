//! Flattens nested associative operators into n-ary nodes.

use crate::error::Error;
use mathcheck_parser::ast::Expr;

/// `(a+b)+c` becomes `a+b+c`, and likewise for multiplication. Applies only to the associative
/// operators; `(a/b)/c` is left alone. Idempotent once no child shares the parent's kind.
pub fn flatten(expr: &Expr) -> Result<Option<Expr>, Error> {
    let Expr::Operator { kind, args, .. } = expr else {
        return Ok(None);
    };
    if !kind.is_associative() || !args.iter().any(|arg| arg.op_kind() == Some(*kind)) {
        return Ok(None);
    }

    let mut flattened = Vec::with_capacity(args.len() + 1);
    for arg in args {
        if arg.op_kind() == Some(*kind) {
            flattened.extend_from_slice(arg.children());
        } else {
            flattened.push(arg.clone());
        }
    }
    Ok(Some(Expr::nary(*kind, flattened)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplify::apply;
    use mathcheck_parser::ast::OpKind;
    use mathcheck_parser::parser::Parser;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Expr {
        Parser::new(input).parse_expression().unwrap()
    }

    #[test]
    fn left_nested_sums_flatten() {
        assert_eq!(
            apply(flatten, &parse("a+b+c+d")).unwrap(),
            Expr::nary(
                OpKind::Addition,
                vec![
                    Expr::variable('a'),
                    Expr::variable('b'),
                    Expr::variable('c'),
                    Expr::variable('d'),
                ],
            ),
        );
    }

    #[test]
    fn parenthesized_products_flatten() {
        assert_eq!(
            apply(flatten, &parse("a*(b*c)")).unwrap(),
            Expr::nary(
                OpKind::Multiplication,
                vec![Expr::variable('a'), Expr::variable('b'), Expr::variable('c')],
            ),
        );
    }

    #[test]
    fn division_does_not_flatten() {
        let expr = parse("a/b/c");
        assert_eq!(flatten(&expr).unwrap(), None);
    }

    #[test]
    fn mixed_kinds_stay_nested() {
        let expr = parse("a+b*c");
        assert_eq!(apply(flatten, &expr).unwrap(), expr);
    }
}
