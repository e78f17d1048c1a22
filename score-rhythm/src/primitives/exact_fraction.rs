//! Exact rational numbers, always kept in lowest terms.
//!
//! Every constructor and every arithmetic operation normalizes its result:
//! numerator and denominator are divided by their gcd, zero is `0/1` and the
//! sign lives on the numerator.
//!
//! ```
//! use score_rhythm::primitives::ExactFraction;
//!
//! let a = ExactFraction::new(33, 55);
//! assert_eq!(a.to_string(), "3/5");
//! let b = ExactFraction::new(-1, 4) - ExactFraction::new(3, 8);
//! assert_eq!(b, ExactFraction::new(-5, 8));
//! assert_eq!("-5/8".parse::<ExactFraction>().unwrap(), b);
//! ```
//!
//! Products are computed in `i64` without overflow checks: debug builds
//! panic on overflow, release builds wrap.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{InputLocation, RhythmError, RhythmResult, StrictMode};

use super::fraction_tools::gcd;

static FRACTION_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([-+]?[0-9]+)/([0-9]+)$").expect("fraction literal regex is valid")
});

#[derive(Debug, Clone, Copy)]
pub struct ExactFraction {
    numerator: i64,
    denominator: i64,
}
impl ExactFraction {
    pub const ZERO: Self = Self::from_integer(0);
    pub const ONE: Self = Self::from_integer(1);

    /// Build `numerator/denominator`, checked according to the default
    /// [StrictMode].
    ///
    /// # Panics
    ///
    /// In checked mode, if denominator is not positive.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self::with_mode(numerator, denominator, StrictMode::default())
    }

    /// In `Unchecked` mode a non-positive denominator is not reported:
    /// a negative one gets its sign moved to the numerator, a zero one
    /// leaves a fraction with denominator 0 (or `0/1` for `0/0`).
    pub fn with_mode(numerator: i64, denominator: i64, mode: StrictMode) -> Self {
        if mode.is_checked() && denominator <= 0 {
            panic!(
                "denominator '{denominator}' of {numerator}/{denominator} \
                should be positive"
            );
        }
        Self::normalized(numerator, denominator)
    }

    /// Validating constructor, regardless of mode.
    pub fn try_new(numerator: i64, denominator: i64) -> RhythmResult<Self> {
        if denominator <= 0 {
            return Err(RhythmError::InvalidDenominator {
                numerator,
                denominator,
            });
        }
        Ok(Self::normalized(numerator, denominator))
    }

    pub const fn from_integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    pub(crate) fn normalized(numerator: i64, denominator: i64) -> Self {
        let mut result = Self {
            numerator,
            denominator,
        };
        result.normalize();
        result
    }

    fn normalize(&mut self) {
        let g = gcd(self.numerator, self.denominator);
        if g > 1 {
            self.numerator /= g;
            self.denominator /= g;
        }
        if self.numerator == 0 {
            self.denominator = 1;
        } else if self.denominator < 0 {
            self.numerator = -self.numerator;
            self.denominator = -self.denominator;
        }
    }

    /// Parse `"N/D"`, with an optional sign on `N`.
    ///
    /// The location is only used to report errors.
    pub fn parse(literal: &str, location: &InputLocation) -> RhythmResult<Self> {
        Self::parse_with_mode(literal, location, StrictMode::default())
    }

    pub fn parse_with_mode(
        literal: &str,
        location: &InputLocation,
        mode: StrictMode,
    ) -> RhythmResult<Self> {
        let malformed = || RhythmError::MalformedFractionLiteral {
            literal: literal.to_string(),
            location: location.clone(),
        };
        let captures = FRACTION_LITERAL.captures(literal).ok_or_else(malformed)?;
        log::trace!(
            "--> numerator = \"{}\", denominator = \"{}\"",
            &captures[1],
            &captures[2]
        );
        let numerator: i64 = captures[1].parse().map_err(|_| malformed())?;
        let denominator: i64 = captures[2].parse().map_err(|_| malformed())?;
        if mode.is_checked() && denominator == 0 {
            return Err(RhythmError::InvalidDenominator {
                numerator,
                denominator,
            });
        }
        Ok(Self::normalized(numerator, denominator))
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }
    pub fn denominator(&self) -> i64 {
        self.denominator
    }
    pub fn set(&mut self, numerator: i64, denominator: i64) -> &mut Self {
        self.numerator = numerator;
        self.denominator = denominator;
        self.normalize();
        self
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Swap numerator and denominator. The sign of a negative fraction
    /// moves back to the numerator.
    pub fn inverse(&self) -> Self {
        Self::normalized(self.denominator, self.numerator)
    }

    pub fn opposite(&self) -> Self {
        Self::normalized(-self.numerator, self.denominator)
    }

    /// 0.0 for a zero denominator.
    pub fn to_f64(&self) -> f64 {
        match self.denominator {
            0 => 0.0,
            den => self.numerator as f64 / den as f64,
        }
    }
    pub fn to_f32(&self) -> f32 {
        match self.denominator {
            0 => 0.0,
            den => self.numerator as f32 / den as f32,
        }
    }
    /// Rounds half up: 1/2 gives 1, -1/2 gives 0.
    pub fn to_int(&self) -> i64 {
        (self.to_f64() + 0.5).floor() as i64
    }

    pub fn as_fraction_string(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }

    fn cross(&self, other: &Self) -> (i128, i128) {
        (
            self.numerator as i128 * other.denominator as i128,
            other.numerator as i128 * self.denominator as i128,
        )
    }
}
impl Default for ExactFraction {
    fn default() -> Self {
        Self::ZERO
    }
}
impl fmt::Display for ExactFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
impl FromStr for ExactFraction {
    type Err = RhythmError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &InputLocation::unknown())
    }
}
impl From<i64> for ExactFraction {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl PartialEq for ExactFraction {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = self.cross(other);
        a == b
    }
}
impl Eq for ExactFraction {}
impl Hash for ExactFraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}
impl Ord for ExactFraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.cross(other);
        a.cmp(&b)
    }
}
impl PartialOrd for ExactFraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
    fn lt(&self, other: &Self) -> bool {
        let (a, b) = self.cross(other);
        a < b
    }
    fn gt(&self, other: &Self) -> bool {
        let (a, b) = self.cross(other);
        a > b
    }
    fn le(&self, other: &Self) -> bool {
        !self.gt(other)
    }
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}
impl PartialEq<f64> for ExactFraction {
    fn eq(&self, other: &f64) -> bool {
        self.to_f64() == *other
    }
}
impl PartialOrd<f64> for ExactFraction {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.to_f64().partial_cmp(other)
    }
}

impl Add for ExactFraction {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::normalized(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}
impl Sub for ExactFraction {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::normalized(
            self.numerator * rhs.denominator - rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}
impl Mul for ExactFraction {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::normalized(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}
impl Div for ExactFraction {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        Self::normalized(
            self.numerator * rhs.denominator,
            self.denominator * rhs.numerator,
        )
    }
}
impl Mul<i64> for ExactFraction {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self::Output {
        Self::normalized(self.numerator * rhs, self.denominator)
    }
}
impl Div<i64> for ExactFraction {
    type Output = Self;
    fn div(self, rhs: i64) -> Self::Output {
        Self::normalized(self.numerator, self.denominator * rhs)
    }
}
impl Neg for ExactFraction {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.opposite()
    }
}
impl AddAssign for ExactFraction {
    fn add_assign(&mut self, rhs: Self) {
        if self.denominator == rhs.denominator {
            self.numerator += rhs.numerator;
        } else {
            self.numerator =
                self.numerator * rhs.denominator + rhs.numerator * self.denominator;
            self.denominator *= rhs.denominator;
        }
        self.normalize();
    }
}
impl SubAssign for ExactFraction {
    fn sub_assign(&mut self, rhs: Self) {
        if self.denominator == rhs.denominator {
            self.numerator -= rhs.numerator;
        } else {
            self.numerator =
                self.numerator * rhs.denominator - rhs.numerator * self.denominator;
            self.denominator *= rhs.denominator;
        }
        self.normalize();
    }
}
impl MulAssign for ExactFraction {
    fn mul_assign(&mut self, rhs: Self) {
        self.numerator *= rhs.numerator;
        self.denominator *= rhs.denominator;
        self.normalize();
    }
}
impl DivAssign for ExactFraction {
    fn div_assign(&mut self, rhs: Self) {
        self.numerator *= rhs.denominator;
        self.denominator *= rhs.numerator;
        self.normalize();
    }
}
impl MulAssign<i64> for ExactFraction {
    fn mul_assign(&mut self, rhs: i64) {
        self.numerator *= rhs;
        self.normalize();
    }
}
impl DivAssign<i64> for ExactFraction {
    fn div_assign(&mut self, rhs: i64) {
        self.denominator *= rhs;
        self.normalize();
    }
}
