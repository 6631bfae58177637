//! Exact number type backing coefficients and derivative multiplicities.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Exact rational number. Unlike `mathhook_core::core::Number` this crate
/// never needs a floating-point variant: every coefficient arising from a
/// linear PDE system is a rational function of the independent variables,
/// evaluated here only at the rational-constant leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Integer(i64),
    Rational(BigRational),
}

impl Number {
    pub fn integer(value: i64) -> Self {
        Number::Integer(value)
    }

    pub fn rational(value: BigRational) -> Self {
        if value.is_integer() {
            if let Some(i) = value.to_integer().to_string().parse::<i64>().ok() {
                return Number::Integer(i);
            }
        }
        Number::Rational(value)
    }

    pub fn ratio(numer: i64, denom: i64) -> Self {
        Self::rational(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    pub fn zero() -> Self {
        Number::Integer(0)
    }

    pub fn one() -> Self {
        Number::Integer(1)
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Rational(r) => r.is_zero(),
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 1,
            Number::Rational(r) => r.is_one(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(i) => *i < 0,
            Number::Rational(r) => r.is_negative(),
        }
    }

    pub fn as_rational(&self) -> BigRational {
        match self {
            Number::Integer(i) => BigRational::from(BigInt::from(*i)),
            Number::Rational(r) => r.clone(),
        }
    }

    pub fn recip(&self) -> Self {
        Self::rational(self.as_rational().recip())
    }

    pub fn pow_i32(&self, exp: i32) -> Self {
        if exp == 0 {
            return Self::one();
        }
        let base = self.as_rational();
        let mag = base.pow(exp.unsigned_abs() as i32);
        if exp < 0 {
            Self::rational(mag.recip())
        } else {
            Self::rational(mag)
        }
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.as_rational().cmp(&other.as_rational()))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_rational().cmp(&other.as_rational())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
        }
    }
}

impl Add for Number {
    type Output = Number;
    fn add(self, rhs: Number) -> Number {
        Number::rational(self.as_rational() + rhs.as_rational())
    }
}

impl Sub for Number {
    type Output = Number;
    fn sub(self, rhs: Number) -> Number {
        Number::rational(self.as_rational() - rhs.as_rational())
    }
}

impl Mul for Number {
    type Output = Number;
    fn mul(self, rhs: Number) -> Number {
        Number::rational(self.as_rational() * rhs.as_rational())
    }
}

impl Div for Number {
    type Output = Number;
    fn div(self, rhs: Number) -> Number {
        Number::rational(self.as_rational() / rhs.as_rational())
    }
}

impl Neg for Number {
    type Output = Number;
    fn neg(self) -> Number {
        match self {
            Number::Integer(i) => Number::Integer(-i),
            Number::Rational(r) => Number::Rational(-r),
        }
    }
}
