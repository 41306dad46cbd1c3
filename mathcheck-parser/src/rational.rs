//! Exact rational number arithmetic.
//!
//! [`Rational`] is the only numeric type used by the expression model. All arithmetic is exact
//! over arbitrary-precision [`Integer`]s; there is no floating-point fallback anywhere in the
//! pipeline ([`Rational::float_value`] exists for display approximation only and is never used
//! for equivalence).
//!
//! Arithmetic intentionally does **not** auto-reduce its results: `1/2 + 0` stays `1/2`, but
//! `1/4 + 1/4` produces `8/16`. Reduction is an explicit, observable step ([`Rational::reduced`])
//! because "reduce the fraction" is itself a step a student can take.

use rug::{ops::Pow, Integer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// The format a [`Rational`] was entered in. This only ever affects display, never arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RationalFormat {
    /// No particular entry format; the default for computed values.
    #[default]
    None,

    /// A whole number, such as `17`.
    Whole,

    /// A number entered with a decimal point, such as `3.14`.
    Decimal,

    /// An improper fraction, such as `5/2`.
    Improper,

    /// A mixed number, such as `2 1/2`.
    Mixed,
}

/// An exact fraction of two arbitrary-precision integers.
///
/// The denominator is never zero. The sign may live in either component; [`Rational::reduced`]
/// moves it to the numerator and makes the denominator positive.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational {
    numer: Integer,
    denom: Integer,
    format: RationalFormat,
}

impl Rational {
    /// Creates a rational with the given numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero. A zero denominator is never a value in this system;
    /// division by zero is reported where the division happens.
    pub fn new(numer: impl Into<Integer>, denom: impl Into<Integer>) -> Self {
        let denom = denom.into();
        assert!(!denom.is_zero(), "rational denominator cannot be zero");
        Self {
            numer: numer.into(),
            denom,
            format: RationalFormat::None,
        }
    }

    /// Creates a whole rational with the given value.
    pub fn whole(n: impl Into<Integer>) -> Self {
        Self {
            numer: n.into(),
            denom: int(1),
            format: RationalFormat::Whole,
        }
    }

    /// The rational representing zero.
    pub fn zero() -> Self {
        Self::whole(0)
    }

    /// The rational representing one.
    pub fn one() -> Self {
        Self::whole(1)
    }

    /// Parses a string of the form `a.b` (or plain `a`), where `a` and `b` are runs of digits, to
    /// a rational. Signs are not handled. Returns [`None`] if the string is not in that format.
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        match s.split_once('.') {
            Some((whole, frac)) => {
                if whole.is_empty()
                    || frac.is_empty()
                    || !whole.bytes().all(|b| b.is_ascii_digit())
                    || !frac.bytes().all(|b| b.is_ascii_digit())
                {
                    return None;
                }

                let denom = int(10).pow(frac.len() as u32);
                let numer = Integer::from_str_radix(whole, 10).ok()? * &denom
                    + Integer::from_str_radix(frac, 10).ok()?;
                Some(Self {
                    numer,
                    denom,
                    format: RationalFormat::Decimal,
                })
            }
            None => {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                Some(Self::whole(Integer::from_str_radix(s, 10).ok()?))
            }
        }
    }

    /// The numerator, exactly as stored.
    pub fn numer(&self) -> &Integer {
        &self.numer
    }

    /// The denominator, exactly as stored. Never zero.
    pub fn denom(&self) -> &Integer {
        &self.denom
    }

    /// The format this rational was entered in.
    pub fn format(&self) -> RationalFormat {
        self.format
    }

    /// Returns a copy of this rational with the given entry format.
    pub fn with_format(mut self, format: RationalFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds two rationals: `a/b + c/d = (a*d + c*b) / (b*d)`. The result is not reduced.
    pub fn add(&self, other: &Rational) -> Rational {
        Rational {
            numer: Integer::from(&self.numer * &other.denom)
                + Integer::from(&other.numer * &self.denom),
            denom: Integer::from(&self.denom * &other.denom),
            format: RationalFormat::None,
        }
    }

    /// Subtracts `other` from this rational. The result is not reduced.
    pub fn sub(&self, other: &Rational) -> Rational {
        self.add(&other.neg())
    }

    /// Multiplies two rationals. The result is not reduced.
    pub fn mul(&self, other: &Rational) -> Rational {
        Rational {
            numer: Integer::from(&self.numer * &other.numer),
            denom: Integer::from(&self.denom * &other.denom),
            format: RationalFormat::None,
        }
    }

    /// Divides this rational by `other`. Returns [`None`] if `other` is zero; callers surface
    /// that as a division-by-zero condition.
    pub fn div_by(&self, other: &Rational) -> Option<Rational> {
        Some(self.mul(&other.reciprocal()?))
    }

    /// The negation of this rational. The entry format is preserved, so `-0.5` still displays as
    /// a decimal.
    pub fn neg(&self) -> Rational {
        Rational {
            numer: Integer::from(-&self.numer),
            denom: self.denom.clone(),
            format: self.format,
        }
    }

    /// The reciprocal of this rational. Returns [`None`] if this rational is zero.
    pub fn reciprocal(&self) -> Option<Rational> {
        if self.is_zero() {
            return None;
        }
        Some(Rational {
            numer: self.denom.clone(),
            denom: self.numer.clone(),
            format: RationalFormat::None,
        })
    }

    /// The absolute value of this rational. The entry format is preserved.
    pub fn abs(&self) -> Rational {
        Rational {
            numer: Integer::from(self.numer.abs_ref()),
            denom: Integer::from(self.denom.abs_ref()),
            format: self.format,
        }
    }

    /// Reduces this rational to its base form: `gcd(|numer|, |denom|) = 1` with a positive
    /// denominator. Idempotent.
    pub fn reduced(&self) -> Rational {
        let gcd = Integer::from(self.numer.gcd_ref(&self.denom));
        let (mut numer, mut denom) = (
            Integer::from(&self.numer / &gcd),
            Integer::from(&self.denom / &gcd),
        );
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let format = if denom == 1 {
            RationalFormat::Whole
        } else {
            RationalFormat::None
        };
        Rational { numer, denom, format }
    }

    /// Reduces, then rescales the denominator to the smallest power of ten so the value prints in
    /// decimal notation. Falls back to [`reduced`](Self::reduced) when the value has no finite
    /// decimal expansion (a denominator with a prime factor other than 2 or 5).
    pub fn decimal_normalized(&self) -> Rational {
        let reduced = self.reduced();

        let mut rest = reduced.denom.clone();
        let mut twos = 0u32;
        while rest.is_divisible(&int(2)) {
            rest /= 2;
            twos += 1;
        }
        let mut fives = 0u32;
        while rest.is_divisible(&int(5)) {
            rest /= 5;
            fives += 1;
        }
        if rest != 1 {
            return reduced;
        }

        let denom = int(10).pow(twos.max(fives));
        let scale = Integer::from(&denom / &reduced.denom);
        Rational {
            numer: reduced.numer * &scale,
            denom,
            format: RationalFormat::Decimal,
        }
    }

    /// Returns true if this rational is already in its base form.
    pub fn is_reduced(&self) -> bool {
        let reduced = self.reduced();
        self.numer == reduced.numer && self.denom == reduced.denom
    }

    /// Returns true if this rational represents zero.
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Returns true if this rational is strictly positive.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.numer.is_positive() == self.denom.is_positive()
    }

    /// Returns true if this rational is strictly negative.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.numer.is_positive() != self.denom.is_positive()
    }

    /// Returns true if this rational represents an integer.
    pub fn is_integer(&self) -> bool {
        self.numer.is_divisible(&self.denom)
    }

    /// The largest integer less than or equal to this rational.
    pub fn floor(&self) -> Integer {
        let quotient = Integer::from(&self.numer / &self.denom);
        let remainder = Integer::from(&self.numer % &self.denom);
        if remainder.is_zero() || self.is_positive() || self.numer.is_zero() {
            quotient
        } else {
            quotient - 1
        }
    }

    /// A lossy floating-point approximation of this rational. Display and approximation only;
    /// never used for equivalence.
    pub fn float_value(&self) -> f64 {
        self.numer.to_f64() / self.denom.to_f64()
    }

    /// Returns true if this rational represents the same number as `other`, regardless of the
    /// representation of either. `1/2` and `2/4` are equivalent fractions.
    pub fn is_equivalent(&self, other: &Rational) -> bool {
        Integer::from(&self.numer * &other.denom) == Integer::from(&other.numer * &self.denom)
    }
}

/// Equality compares the reduced numerator/denominator pairs; the entry format never
/// participates.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.reduced(), other.reduced());
        a.numer == b.numer && a.denom == b.denom
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduced();
        reduced.numer.hash(state);
        reduced.denom.hash(state);
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order over the exact value of the rational.
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.reduced(), other.reduced());
        Integer::from(&a.numer * &b.denom).cmp(&Integer::from(&b.numer * &a.denom))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.format == RationalFormat::Decimal {
            if let Some(s) = self.decimal_string() {
                return write!(f, "{}", s);
            }
        }

        if self.is_integer() {
            write!(f, "{}", Integer::from(&self.numer / &self.denom))
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl Rational {
    /// Renders a decimal-entered rational back with its decimal point. Only possible when the
    /// denominator is a power of ten.
    fn decimal_string(&self) -> Option<String> {
        let digits = self.denom.to_string();
        let (first, zeros) = digits.split_at(1);
        if first != "1" || !zeros.bytes().all(|b| b == b'0') || zeros.is_empty() {
            return None;
        }

        let sign = if self.is_negative() { "-" } else { "" };
        let numer = Integer::from(self.numer.abs_ref());
        let whole = Integer::from(&numer / &self.denom);
        let frac = Integer::from(&numer % &self.denom);
        Some(format!(
            "{}{}.{:0>width$}",
            sign,
            whole,
            frac.to_string(),
            width = zeros.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_addition() {
        let sum = Rational::new(1, 3).add(&Rational::new(1, 6));
        // unreduced: (1*6 + 1*3) / 18
        assert_eq!(sum.numer(), &int(9));
        assert_eq!(sum.denom(), &int(18));
        assert_eq!(sum.reduced(), Rational::new(1, 2));
    }

    #[test]
    fn reduction_is_idempotent() {
        let r = Rational::new(-6, -8);
        let reduced = r.reduced();
        assert_eq!(reduced.numer(), &int(3));
        assert_eq!(reduced.denom(), &int(4));
        assert_eq!(reduced.reduced(), reduced);
    }

    #[test]
    fn reduction_normalizes_sign() {
        let r = Rational::new(3, -4).reduced();
        assert_eq!(r.numer(), &int(-3));
        assert_eq!(r.denom(), &int(4));
        assert!(r.is_negative());
    }

    #[test]
    fn equivalence_ignores_reduction_state() {
        assert!(Rational::new(1, 2).is_equivalent(&Rational::new(2, 4)));
        assert!(!Rational::new(1, 2).is_equivalent(&Rational::new(2, 3)));
        assert_eq!(Rational::new(1, 2), Rational::new(2, 4));
    }

    #[test]
    fn division_by_zero_is_not_a_value() {
        assert_eq!(Rational::whole(5).div_by(&Rational::zero()), None);
        assert_eq!(Rational::zero().reciprocal(), None);
        assert_eq!(
            Rational::whole(5).div_by(&Rational::whole(2)),
            Some(Rational::new(5, 2)),
        );
    }

    #[test]
    fn decimal_parsing() {
        let r = Rational::from_decimal_str("3.14").unwrap();
        assert_eq!(r.numer(), &int(314));
        assert_eq!(r.denom(), &int(100));
        assert_eq!(r.format(), RationalFormat::Decimal);

        let whole = Rational::from_decimal_str("42").unwrap();
        assert_eq!(whole, Rational::whole(42));
        assert_eq!(whole.format(), RationalFormat::Whole);

        assert_eq!(Rational::from_decimal_str(""), None);
        assert_eq!(Rational::from_decimal_str("1."), None);
        assert_eq!(Rational::from_decimal_str(".5"), None);
        assert_eq!(Rational::from_decimal_str("1.2.3"), None);
        assert_eq!(Rational::from_decimal_str("-1.2"), None);
    }

    #[test]
    fn ordering() {
        assert!(Rational::new(1, 3) < Rational::new(1, 2));
        assert!(Rational::new(-1, 2) < Rational::zero());
        assert_eq!(
            Rational::new(2, 4).cmp(&Rational::new(1, 2)),
            std::cmp::Ordering::Equal,
        );
    }

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(Rational::new(7, 2).floor(), int(3));
        assert_eq!(Rational::new(-7, 2).floor(), int(-4));
        assert_eq!(Rational::whole(-3).floor(), int(-3));
    }

    #[test]
    fn decimal_normalization() {
        assert_eq!(Rational::new(3, 4).decimal_normalized().to_string(), "0.75");
        assert_eq!(Rational::new(750, 1000).decimal_normalized().to_string(), "0.75");
        assert_eq!(Rational::new(1, 5).decimal_normalized().to_string(), "0.2");
        // 1/3 has no finite decimal expansion
        assert_eq!(Rational::new(1, 3).decimal_normalized().to_string(), "1/3");
        assert_eq!(Rational::whole(5).decimal_normalized().to_string(), "5");
    }

    #[test]
    fn display_honors_entry_format() {
        assert_eq!(Rational::from_decimal_str("3.14").unwrap().to_string(), "3.14");
        assert_eq!(Rational::from_decimal_str("0.05").unwrap().to_string(), "0.05");
        assert_eq!(Rational::whole(12).to_string(), "12");
        assert_eq!(Rational::new(2, 4).to_string(), "2/4");
        assert_eq!(Rational::new(3, 2).neg().to_string(), "-3/2");
    }
}
