//! Canonical forms for expressions and equations.
//!
//! [`normalize`](Canonicalizer::normalize) rewrites a tree into a sum of monomials over at most
//! one fraction, without reordering anything. [`normal_form`](Canonicalizer::normal_form) goes
//! further and produces the polynomial shape `a*x*x + b*x + c` with like terms collected and
//! terms ordered by descending degree; for equations, the right-hand side becomes exactly 0 and
//! the leading coefficient exactly 1. Two trees mean the same polynomial exactly when their
//! normal forms match up to rearrangement, which is what [`is_equivalent`] checks.

use crate::error::{Error, ErrorKind};
use crate::simplify::{apply, rules, Rule};
use crate::util::{combine_expressions, get_leading_term, make_monomial, monomial_parts, negate};
use mathcheck_parser::ast::{Entity, EntityKind, Equation, Expr, OpKind};
use mathcheck_parser::rational::Rational;

/// The bound on fixed-point iteration in [`normalize_expression`]. The rule set settles within a
/// handful of passes for any reasonable input; hitting this bound means two rules are undoing
/// each other, which is a bug in the rules, not in the input.
pub const MAX_ITERATIONS: usize = 100;

/// The normalization pipeline, in order. Negatives are removed first so later rules only see
/// additions, and nulls are swept last.
const NORMALIZE_RULES: &[Rule] = &[
    rules::remove_negatives,
    rules::flatten,
    rules::nested_division,
    rules::rational_multiplication,
    rules::rational_addition,
    rules::distribute,
    rules::identity,
    rules::remove_null,
];

/// Reduces trees of one entity kind to canonical form. Both implementations are stateless; use
/// [`get_canonicalizer`] to pick the right one for an entity at runtime.
pub trait Canonicalizer {
    /// Runs the normalization pipeline to a fixed point.
    fn normalize(&self, entity: &Entity) -> Result<Entity, Error>;

    /// Normalizes, then collects like terms and orders them by descending degree.
    fn normal_form(&self, entity: &Entity) -> Result<Entity, Error>;
}

pub struct ExpressionCanonicalizer;

pub struct EquationCanonicalizer;

/// Returns the canonicalizer for the given entity kind.
pub fn get_canonicalizer(kind: EntityKind) -> &'static dyn Canonicalizer {
    match kind {
        EntityKind::Expression => &ExpressionCanonicalizer,
        EntityKind::Equation => &EquationCanonicalizer,
    }
}

impl Canonicalizer for ExpressionCanonicalizer {
    fn normalize(&self, entity: &Entity) -> Result<Entity, Error> {
        match entity {
            Entity::Expression(expr) => Ok(Entity::Expression(normalize_expression(expr)?)),
            Entity::Equation(_) => EquationCanonicalizer.normalize(entity),
        }
    }

    fn normal_form(&self, entity: &Entity) -> Result<Entity, Error> {
        match entity {
            Entity::Expression(expr) => Ok(Entity::Expression(normal_form_expression(expr)?)),
            Entity::Equation(_) => EquationCanonicalizer.normal_form(entity),
        }
    }
}

impl Canonicalizer for EquationCanonicalizer {
    fn normalize(&self, entity: &Entity) -> Result<Entity, Error> {
        match entity {
            Entity::Equation(eq) => Ok(Entity::Equation(normalize_equation(eq)?)),
            Entity::Expression(_) => ExpressionCanonicalizer.normalize(entity),
        }
    }

    fn normal_form(&self, entity: &Entity) -> Result<Entity, Error> {
        match entity {
            Entity::Equation(eq) => Ok(Entity::Equation(normal_form_equation(eq)?)),
            Entity::Expression(_) => ExpressionCanonicalizer.normal_form(entity),
        }
    }
}

/// Runs the normalization pipeline over the expression until a full pass changes nothing.
///
/// # Panics
///
/// Panics if no fixed point is reached within [`MAX_ITERATIONS`] passes.
pub fn normalize_expression(expr: &Expr) -> Result<Expr, Error> {
    let mut current = expr.clone();
    for _ in 0..MAX_ITERATIONS {
        let mut next = current.clone();
        for rule in NORMALIZE_RULES {
            next = apply(*rule, &next)?;
        }
        if next == current {
            return Ok(next);
        }
        current = next;
    }
    panic!("normalization did not reach a fixed point within {MAX_ITERATIONS} passes");
}

/// Normalizes, collects like terms, and orders them by descending degree.
pub fn normal_form_expression(expr: &Expr) -> Result<Expr, Error> {
    let normalized = normalize_expression(expr)?;
    let collected = apply(rules::collect_like_terms, &normalized)?;
    apply(rules::reorder_terms, &collected)
}

/// Normalizes both sides of an equation independently. The relation is untouched.
pub fn normalize_equation(eq: &Equation) -> Result<Equation, Error> {
    Ok(Equation::new(
        eq.relation,
        normalize_expression(&eq.lhs)?,
        normalize_expression(&eq.rhs)?,
    ))
}

/// Rewrites the equation so the right-hand side is exactly 0 and the leading coefficient of the
/// left-hand side is exactly 1, flipping an inequality when both sides are divided by a negative
/// number.
pub fn normal_form_equation(eq: &Equation) -> Result<Equation, Error> {
    let mut relation = eq.relation;

    // move everything to the left
    let moved = Expr::binary(OpKind::Addition, eq.lhs.clone(), negate(&eq.rhs));
    let mut lhs = normalize_expression(&moved)?;

    // a fraction compares against zero exactly as its numerator does, up to the sign of the
    // denominator
    if let Expr::Operator { kind: OpKind::Division, args, .. } = &lhs {
        if let Some(value) = args[1].as_number() {
            if value.is_zero() {
                return Err(Error::new(lhs.range().cloned(), ErrorKind::DivisionByZero));
            }
            if value.is_negative() {
                relation = relation.flipped();
            }
        }
        lhs = args[0].clone();
    }

    let collected = apply(rules::collect_like_terms, &lhs)?;
    let mut lhs = apply(rules::reorder_terms, &collected)?;

    // divide both sides by the leading coefficient
    if let Some((coefficient, _)) = monomial_parts(get_leading_term(&lhs)) {
        if !coefficient.is_zero() && !coefficient.is_equivalent(&Rational::one()) {
            if let Some(scaled) = scale_terms(&lhs, &coefficient) {
                lhs = scaled;
                if coefficient.is_negative() {
                    relation = relation.flipped();
                }
            }
        }
    }

    Ok(Equation::new(relation, lhs, Expr::whole(0)))
}

/// Divides every term of a collected sum by `divisor`. `None` when some term is not a monomial,
/// in which case the caller leaves the tree alone.
fn scale_terms(lhs: &Expr, divisor: &Rational) -> Option<Expr> {
    let scale_term = |term: &Expr| {
        let (coefficient, variables) = monomial_parts(term)?;
        let scaled = coefficient.div_by(divisor)?;
        Some(make_monomial(scaled.reduced(), &variables))
    };

    match lhs {
        Expr::Operator { kind: OpKind::Addition, args, .. } => {
            let terms = args.iter().map(scale_term).collect::<Option<Vec<_>>>()?;
            Some(combine_expressions(terms, OpKind::Addition))
        }
        other => scale_term(other),
    }
}

/// Returns true if the two entities denote the same mathematical object: same kind, and equal
/// normal forms up to rearrangement of commutative operators.
pub fn is_equivalent(lhs: &Entity, rhs: &Entity) -> Result<bool, Error> {
    if lhs.kind() != rhs.kind() {
        return Ok(false);
    }

    let canonicalizer = get_canonicalizer(lhs.kind());
    match (canonicalizer.normal_form(lhs)?, canonicalizer.normal_form(rhs)?) {
        (Entity::Expression(a), Entity::Expression(b)) => {
            Ok(a.eq_upto_rearrangement_recursive(&b))
        }
        (Entity::Equation(a), Entity::Equation(b)) => Ok(a.relation == b.relation
            && a.lhs.eq_upto_rearrangement_recursive(&b.lhs)
            && a.rhs.eq_upto_rearrangement_recursive(&b.rhs)),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathcheck_parser::ast::Relation;
    use mathcheck_parser::parser::Parser;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Expr {
        Parser::new(input).parse_expression().unwrap()
    }

    fn parse_eq(input: &str) -> Equation {
        Parser::new(input).parse_equation().unwrap()
    }

    fn normal(input: &str) -> Expr {
        normal_form_expression(&parse(input)).unwrap()
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["2x+3", "(a-b)/2", "--3", "2(3+4)", "1/2x - 4", "x*(y+z)"] {
            let once = normalize_expression(&parse(input)).unwrap();
            let twice = normalize_expression(&once).unwrap();
            assert!(
                once.eq_upto_rearrangement_recursive(&twice),
                "{input} normalized to {once} but renormalized to {twice}",
            );
        }
    }

    #[test]
    fn like_terms_collect_in_normal_form() {
        let collected = normal("2x + 3x + y");
        let expected = normal("5x + y");
        assert!(collected.eq_upto_rearrangement_recursive(&expected));
        assert_eq!(collected.degree(), Some(1));
    }

    #[test]
    fn normal_form_orders_by_degree() {
        let quadratic = normal("3 + x*x + 2x");
        assert_eq!(get_leading_term(&quadratic), &parse("x*x"));
        assert_eq!(quadratic.degree(), Some(2));
    }

    #[test]
    fn equation_normal_form_invariant() {
        for input in ["2x+3 = 7", "x = 2y+1", "3x - 6 = 0", "(x+1)/2 = 3"] {
            let normal = normal_form_equation(&parse_eq(input)).unwrap();
            assert_eq!(normal.rhs, Expr::whole(0), "{input} kept a nonzero rhs");

            let (coefficient, _) = monomial_parts(get_leading_term(&normal.lhs)).unwrap();
            assert!(
                coefficient.is_equivalent(&Rational::one()),
                "{input} kept leading coefficient {coefficient}",
            );
        }
    }

    #[test]
    fn negative_leading_coefficient_flips_an_inequality() {
        let normal = normal_form_equation(&parse_eq("2 - x > 0")).unwrap();
        assert_eq!(normal.relation, Relation::Less);
        let expected = Expr::binary(OpKind::Addition, Expr::variable('x'), Expr::whole(-2));
        assert!(normal.lhs.eq_upto_rearrangement_recursive(&expected));
    }

    #[test]
    fn equations_equivalent_across_arrangement() {
        let a = Entity::Equation(parse_eq("x < 2"));
        let b = Entity::Equation(parse_eq("2 > x"));
        assert!(is_equivalent(&a, &b).unwrap());
    }

    #[test]
    fn expression_equivalence() {
        let cases = [
            ("x+y", "y+x", true),
            ("2x + 3x", "5x", true),
            ("2(3+4)", "14", true),
            ("(a+b)*(a+b)", "a*a + 2*a*b + b*b", true),
            ("x+1", "x+2", false),
            ("x-y", "y-x", false),
        ];
        for (lhs, rhs, expected) in cases {
            let result = is_equivalent(
                &Entity::Expression(parse(lhs)),
                &Entity::Expression(parse(rhs)),
            )
            .unwrap();
            assert_eq!(result, expected, "{lhs} vs {rhs}");
        }
    }

    #[test]
    fn kinds_never_compare_equal() {
        let expr = Entity::Expression(parse("x"));
        let eq = Entity::Equation(parse_eq("x = 0"));
        assert!(!is_equivalent(&expr, &eq).unwrap());
    }

    #[test]
    fn singleton_canonicalizers_by_kind() {
        let entity = Entity::Expression(parse("1 - 1 + x"));
        let normalized = get_canonicalizer(entity.kind()).normal_form(&entity).unwrap();
        assert_eq!(normalized, Entity::Expression(Expr::variable('x')));
    }
}
