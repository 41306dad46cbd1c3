//! Pure structural helpers over expression trees.
//!
//! None of these mutate their input, and none of them fail except where a divisor can be zero.
//! Helpers that recognize a shape return `None` when the input is not that shape; callers fall
//! back to leaving the tree as it is.

use crate::error::Error;
use crate::simplify::rules::calculate;
use mathcheck_parser::ast::{Expr, OpKind};
use mathcheck_parser::rational::Rational;

/// Recognizes the monomial shape `N*x*y*z`: any number of rational factors multiplied by zero or
/// more distinct variable factors. Returns the combined coefficient and the variable names sorted
/// by name, or `None` for any other shape.
///
/// A lone [`Expr::Number`] is a monomial with no variables, and a lone [`Expr::Variable`] is a
/// monomial with coefficient 1. A repeated variable (`x*x`) is not recognized; higher powers are
/// not monomials in this sense.
pub fn get_coefficient_and_variables(expr: &Expr) -> Option<(Rational, Vec<char>)> {
    let (coefficient, variables) = monomial_parts(expr)?;
    let mut distinct = variables.clone();
    distinct.dedup();
    if distinct.len() != variables.len() {
        return None;
    }
    Some((coefficient, variables))
}

/// The relaxed version of [`get_coefficient_and_variables`] that allows a repeated variable, so
/// `x*x` is a monomial with signature `xx`. Like-term collection groups by this signature.
pub(crate) fn monomial_parts(expr: &Expr) -> Option<(Rational, Vec<char>)> {
    match expr {
        Expr::Number { value, .. } => Some((value.clone(), Vec::new())),
        Expr::Variable { name, .. } => Some((Rational::one(), vec![*name])),
        Expr::Operator { kind: OpKind::Multiplication, args, .. } => {
            // recursing through nested multiplication lets this accept trees the parser
            // produces before they have been flattened
            let mut coefficient = Rational::one();
            let mut variables = Vec::new();
            for arg in args {
                let (arg_coefficient, arg_variables) = monomial_parts(arg)?;
                coefficient = coefficient.mul(&arg_coefficient);
                variables.extend(arg_variables);
            }
            variables.sort_unstable();
            Some((coefficient.reduced(), variables))
        }
        _ => None,
    }
}

/// Builds a monomial term from a coefficient and sorted variable names. The coefficient is
/// omitted when it is exactly 1 and there is at least one variable.
pub(crate) fn make_monomial(coefficient: Rational, variables: &[char]) -> Expr {
    let mut factors = Vec::with_capacity(variables.len() + 1);
    if variables.is_empty() || !coefficient.is_equivalent(&Rational::one()) {
        factors.push(Expr::number(coefficient));
    }
    factors.extend(variables.iter().map(|name| Expr::variable(*name)));
    combine_expressions(factors, OpKind::Multiplication)
}

/// Strips a leading negative sign from a recognized monomial. Any other shape is returned
/// unchanged.
pub fn absolute_value(expr: &Expr) -> Expr {
    match get_coefficient_and_variables(expr) {
        Some((coefficient, variables)) if coefficient.is_negative() => {
            make_monomial(coefficient.abs(), &variables)
        }
        _ => expr.clone(),
    }
}

/// Negates an expression, pushing the sign onto the nearest rational factor where one exists.
pub fn negate(expr: &Expr) -> Expr {
    match expr {
        Expr::Number { value, .. } => Expr::number(value.neg()),
        Expr::Operator { kind: OpKind::UnaryMinus, args, .. } => args[0].clone(),
        Expr::Operator { kind: OpKind::Multiplication, args, .. } => {
            // negate the first rational factor if there is one
            if let Some(idx) = args.iter().position(|arg| arg.as_number().is_some()) {
                let mut args = args.clone();
                let negated = negate(&args[idx]);
                // a coefficient that flips to 1 disappears, so negation stays an involution
                if negated.equals_value(1) && args.len() > 1 {
                    args.remove(idx);
                    return combine_expressions(args, OpKind::Multiplication);
                }
                args[idx] = negated;
                Expr::nary(OpKind::Multiplication, args)
            } else {
                let mut args = args.clone();
                args.insert(0, Expr::whole(-1));
                Expr::nary(OpKind::Multiplication, args)
            }
        }
        other => Expr::binary(OpKind::Multiplication, Expr::whole(-1), other.clone()),
    }
}

/// The identity element of an operator: 0 for addition and subtraction, 1 for multiplication and
/// division. Unary minus has the additive identity.
pub fn get_identity(kind: OpKind) -> Expr {
    match kind {
        OpKind::Addition | OpKind::Subtraction | OpKind::UnaryMinus => Expr::whole(0),
        OpKind::Multiplication | OpKind::Division => Expr::whole(1),
    }
}

/// Combines a list of expressions under one operator: the identity for an empty list, the sole
/// element for a singleton, otherwise a flattened n-ary node.
pub fn combine_expressions(mut exprs: Vec<Expr>, kind: OpKind) -> Expr {
    match exprs.len() {
        0 => get_identity(kind),
        1 => exprs.remove(0),
        _ => Expr::nary(kind, exprs),
    }
}

/// Compares two expressions after one top-level constant fold on each side. `2+3` is equivalent
/// to `5` this way, but `(1+1)+3` is not, since only the outermost node is folded.
pub fn is_equivalent_upto_calculation(lhs: &Expr, rhs: &Expr) -> Result<bool, Error> {
    Ok(fold_top_level(lhs)? == fold_top_level(rhs)?)
}

/// Like [`is_equivalent_upto_calculation`], but treats commutative operators' children as
/// unordered multisets when comparing.
pub fn is_equivalent_upto_calculation_and_rearrangement(
    lhs: &Expr,
    rhs: &Expr,
) -> Result<bool, Error> {
    Ok(fold_top_level(lhs)?.eq_upto_rearrangement_recursive(&fold_top_level(rhs)?))
}

/// Returns the first expression in `candidates` equivalent to `expr` up to one top-level constant
/// fold and rearrangement.
pub fn get_expression_equivalent_to<'a>(
    expr: &Expr,
    candidates: &'a [Expr],
) -> Result<Option<&'a Expr>, Error> {
    for candidate in candidates {
        if is_equivalent_upto_calculation_and_rearrangement(expr, candidate)? {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

fn fold_top_level(expr: &Expr) -> Result<Expr, Error> {
    Ok(calculate(expr)?.unwrap_or_else(|| expr.clone()))
}

/// Treats two same-kind operators' children as multisets and reports their symmetric difference.
/// The first list holds children of `lhs` not found in `rhs`, the second the reverse. Returns
/// `None` when the inputs are not operators of the same kind.
pub fn diff_operator(lhs: &Expr, rhs: &Expr) -> Option<(Vec<Expr>, Vec<Expr>)> {
    let kind = lhs.op_kind()?;
    if rhs.op_kind() != Some(kind) {
        return None;
    }

    let mut removed: Vec<Expr> = lhs.children().to_vec();
    let mut added = Vec::new();
    for child in rhs.children() {
        match removed.iter().position(|other| other == child) {
            Some(idx) => {
                removed.remove(idx);
            }
            None => added.push(child.clone()),
        }
    }
    Some((removed, added))
}

/// Returns true if `lhs` and `rhs` are operators of the same kind and the children of `lhs` form
/// a proper multiset subset of the children of `rhs`.
pub fn is_subset_of(lhs: &Expr, rhs: &Expr) -> bool {
    match diff_operator(lhs, rhs) {
        Some((removed, added)) => removed.is_empty() && !added.is_empty(),
        None => false,
    }
}

/// All variable names appearing anywhere in the expression, sorted and deduplicated.
pub fn get_variables(expr: &Expr) -> Vec<char> {
    fn walk(expr: &Expr, out: &mut Vec<char>) {
        if let Some(name) = expr.as_variable() {
            out.push(name);
        }
        for child in expr.children() {
            walk(child, out);
        }
    }

    let mut names = Vec::new();
    walk(expr, &mut names);
    names.sort_unstable();
    names.dedup();
    names
}

pub fn contains_variable(expr: &Expr, name: char) -> bool {
    get_variables(expr).contains(&name)
}

pub fn is_addition(expr: &Expr) -> bool {
    expr.op_kind() == Some(OpKind::Addition)
}

pub fn is_multiplication(expr: &Expr) -> bool {
    expr.op_kind() == Some(OpKind::Multiplication)
}

pub fn is_division(expr: &Expr) -> bool {
    expr.op_kind() == Some(OpKind::Division)
}

/// The first term of a normal-form sum, which is the term of highest degree once the sum has been
/// reordered. For anything that is not an addition, the expression itself is its leading term.
pub fn get_leading_term(expr: &Expr) -> &Expr {
    match expr {
        Expr::Operator { kind: OpKind::Addition, args, .. } if !args.is_empty() => &args[0],
        other => other,
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
    fn coefficient_and_variables() {
        assert_eq!(
            get_coefficient_and_variables(&parse("2*y*x")),
            Some((Rational::whole(2), vec!['x', 'y'])),
        );
        assert_eq!(
            get_coefficient_and_variables(&parse("x")),
            Some((Rational::one(), vec!['x'])),
        );
        assert_eq!(
            get_coefficient_and_variables(&parse("7")),
            Some((Rational::whole(7), vec![])),
        );

        // repeated variables and non-monomial shapes are not recognized
        assert_eq!(get_coefficient_and_variables(&parse("x*x")), None);
        assert_eq!(get_coefficient_and_variables(&parse("x+1")), None);
        assert_eq!(get_coefficient_and_variables(&parse("x/2")), None);
    }

    #[test]
    fn absolute_value_strips_the_sign() {
        let negative = Expr::binary(OpKind::Multiplication, Expr::whole(-3), Expr::variable('x'));
        assert_eq!(absolute_value(&negative), parse("3x"));

        // non-monomials come back unchanged
        let sum = parse("x+1");
        assert_eq!(absolute_value(&sum), sum);
    }

    #[test]
    fn negate_pushes_onto_the_coefficient() {
        assert_eq!(negate(&parse("3")), Expr::whole(-3));
        assert_eq!(
            negate(&parse("2x")),
            Expr::binary(OpKind::Multiplication, Expr::whole(-2), Expr::variable('x')),
        );
        assert_eq!(
            negate(&parse("x")),
            Expr::binary(OpKind::Multiplication, Expr::whole(-1), Expr::variable('x')),
        );
        assert_eq!(negate(&parse("-x")), Expr::variable('x'));
    }

    #[test]
    fn combine_handles_degenerate_lists() {
        assert_eq!(combine_expressions(vec![], OpKind::Addition), Expr::whole(0));
        assert_eq!(combine_expressions(vec![], OpKind::Multiplication), Expr::whole(1));
        assert_eq!(
            combine_expressions(vec![Expr::variable('x')], OpKind::Addition),
            Expr::variable('x'),
        );
        assert_eq!(
            combine_expressions(
                vec![Expr::whole(1), Expr::whole(2), Expr::whole(3)],
                OpKind::Addition,
            ),
            Expr::nary(
                OpKind::Addition,
                vec![Expr::whole(1), Expr::whole(2), Expr::whole(3)],
            ),
        );
    }

    #[test]
    fn equivalence_upto_calculation() {
        assert!(is_equivalent_upto_calculation(&parse("2+3"), &parse("5")).unwrap());
        assert!(!is_equivalent_upto_calculation(&parse("2+3"), &parse("6")).unwrap());

        // only the top level is folded
        assert!(!is_equivalent_upto_calculation(&parse("(1+1)+3"), &parse("5")).unwrap());
    }

    #[test]
    fn equivalence_upto_rearrangement() {
        assert!(
            is_equivalent_upto_calculation_and_rearrangement(&parse("x+y"), &parse("y+x"))
                .unwrap()
        );
        assert!(
            !is_equivalent_upto_calculation_and_rearrangement(&parse("x-y"), &parse("y-x"))
                .unwrap()
        );
    }

    fn sum(terms: Vec<Expr>) -> Expr {
        Expr::nary(OpKind::Addition, terms)
    }

    #[test]
    fn diffing_operators() {
        let lhs = sum(vec![Expr::variable('x'), Expr::variable('y'), Expr::whole(1)]);
        let rhs = sum(vec![Expr::variable('x'), Expr::variable('z'), Expr::whole(1)]);
        let (removed, added) = diff_operator(&lhs, &rhs).unwrap();
        assert_eq!(removed, vec![Expr::variable('y')]);
        assert_eq!(added, vec![Expr::variable('z')]);

        assert_eq!(diff_operator(&parse("x+y"), &parse("x*y")), None);
        assert_eq!(diff_operator(&parse("x"), &parse("x+y")), None);
    }

    #[test]
    fn proper_subset() {
        let small = sum(vec![Expr::variable('x'), Expr::whole(1)]);
        let large = sum(vec![Expr::variable('x'), Expr::variable('y'), Expr::whole(1)]);
        assert!(is_subset_of(&small, &large));
        assert!(!is_subset_of(&large, &large));

        let other = sum(vec![Expr::variable('x'), Expr::variable('z')]);
        assert!(!is_subset_of(&other, &large));
    }

    #[test]
    fn variable_queries() {
        assert_eq!(get_variables(&parse("2x+y*x")), vec!['x', 'y']);
        assert!(contains_variable(&parse("2x+1"), 'x'));
        assert!(!contains_variable(&parse("2x+1"), 'y'));
    }

    #[test]
    fn leading_term() {
        let quadratic = sum(vec![parse("x*x"), parse("2x"), Expr::whole(1)]);
        assert_eq!(get_leading_term(&quadratic), &parse("x*x"));
        assert_eq!(get_leading_term(&parse("7")), &parse("7"));
    }
}
