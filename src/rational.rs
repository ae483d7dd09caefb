use crate::error::ParseError;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Signed, Zero};
use std::{
    fmt::Display,
    ops::{Add, Div, Mul, Sub},
    str::FromStr,
};

/// Exact fraction, always kept in lowest terms with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(Ratio<i64>);

impl Rational {
    /// # Panics
    ///
    /// Panics when `denom` is zero.
    pub fn new(numer: i64, denom: i64) -> Self {
        Self(Ratio::new(numer, denom))
    }

    pub fn from_integer(value: i64) -> Self {
        Self(Ratio::from_integer(value))
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// # Panics
    ///
    /// Panics in debug builds when the numerator is `i64::MIN`.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// `None` when the numerator is `i64::MIN`.
    pub fn checked_abs(&self) -> Option<Self> {
        let numer = self.numer().checked_abs()?;
        Some(Self(Ratio::new_raw(numer, self.denom())))
    }

    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(Self)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_sub(&rhs.0).map(Self)
    }

    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_mul(&rhs.0).map(Self)
    }

    /// `None` on overflow and on a zero divisor.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_div(&rhs.0).map(Self)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "({}/{})", self.numer(), self.denom())
        }
    }
}

impl FromStr for Rational {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let invalid = || ParseError::InvalidNumber(s.to_string());
        match inner.split_once('/') {
            Some((numer, denom)) => {
                let numer = numer.trim().parse().map_err(|_| invalid())?;
                let denom: i64 = denom.trim().parse().map_err(|_| invalid())?;
                if denom == 0 {
                    return Err(ParseError::ZeroDenominator(s.to_string()));
                }
                Ok(Self::new(numer, denom))
            }
            None => inner.parse().map(Self::from_integer).map_err(|_| invalid()),
        }
    }
}
