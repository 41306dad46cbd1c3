//! Constant folding over exact rational arithmetic.

use crate::error::{Error, ErrorKind};
use mathcheck_parser::ast::{Expr, OpKind};
use mathcheck_parser::rational::{Rational, RationalFormat};

/// Folds an operator all of whose children are numbers into a single number. `2+3` becomes `5`,
/// `1/2 * 2/3` becomes `1/3`. The result is reduced. Folding a division with a zero divisor is a
/// [`ErrorKind::DivisionByZero`] error.
pub fn calculate(expr: &Expr) -> Result<Option<Expr>, Error> {
    let Some((kind, values)) = all_number_children(expr) else {
        return Ok(None);
    };

    let folded = fold(kind, &values)
        .ok_or_else(|| Error::new(expr.range().cloned(), ErrorKind::DivisionByZero))?;
    Ok(Some(Expr::number(folded.reduced())))
}

/// The same folding as [`calculate`], applied only when one of the numbers was entered in decimal
/// notation. The result keeps decimal formatting, so `0.5 + 0.25` folds to `0.75` rather than
/// `3/4`.
pub fn decimal_reduce(expr: &Expr) -> Result<Option<Expr>, Error> {
    let Some((kind, values)) = all_number_children(expr) else {
        return Ok(None);
    };
    if !values.iter().any(|value| value.format() == RationalFormat::Decimal) {
        return Ok(None);
    }

    let folded = fold(kind, &values)
        .ok_or_else(|| Error::new(expr.range().cloned(), ErrorKind::DivisionByZero))?;
    Ok(Some(Expr::number(folded.decimal_normalized())))
}

/// Returns the operator kind and child values if every child of the node is a number.
fn all_number_children(expr: &Expr) -> Option<(OpKind, Vec<Rational>)> {
    let Expr::Operator { kind, args, .. } = expr else {
        return None;
    };
    let values = args
        .iter()
        .map(|arg| arg.as_number().cloned())
        .collect::<Option<Vec<_>>>()?;
    Some((*kind, values))
}

/// Folds the values left to right. `None` means a zero divisor was hit.
fn fold(kind: OpKind, values: &[Rational]) -> Option<Rational> {
    match kind {
        OpKind::UnaryMinus => Some(values[0].neg()),
        OpKind::Addition => {
            Some(values[1..].iter().fold(values[0].clone(), |acc, v| acc.add(v)))
        }
        OpKind::Subtraction => {
            Some(values[1..].iter().fold(values[0].clone(), |acc, v| acc.sub(v)))
        }
        OpKind::Multiplication => {
            Some(values[1..].iter().fold(values[0].clone(), |acc, v| acc.mul(v)))
        }
        OpKind::Division => {
            let mut acc = values[0].clone();
            for value in &values[1..] {
                acc = acc.div_by(value)?;
            }
            Some(acc)
        }
    }
}
