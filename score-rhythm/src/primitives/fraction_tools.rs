//! Tools for treating fractions as musical lengths.

use fraction::Fraction;

use crate::{InputLocation, RhythmError};

use super::ExactFraction;

/// Greatest common divisor, always non-negative.
///
/// `gcd(0, n) == |n|`, so a zero numerator reduces without dividing by zero.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}

fn power_of_two(num: u64) -> Option<u32> {
    match num.is_power_of_two() {
        true => Some(num.trailing_zeros()),
        false => None,
    }
}

/// Number of augmentation dots encoded by a numerator.
///
/// Dotted values are `(2^(n+1) - 1) / 2^(n+1)` of the double base
/// duration, so numerators 1, 3, 7, 15 ... 1023 carry 0 to 9 dots.
///
/// # Example
///
/// ```
/// # use score_rhythm::primitives::number_of_dots;
/// assert_eq!(number_of_dots(7), Some(2));
/// assert_eq!(number_of_dots(5), None);
/// ```
pub fn number_of_dots(numerator: i64) -> Option<u32> {
    if !(1..=1023).contains(&numerator) {
        return None;
    }
    power_of_two(numerator as u64 + 1).map(|bits| bits - 1)
}

/// Exponent of a denominator, if it is a power of two from 1 to 1024.
pub fn duration_binary_logarithm(denominator: i64) -> Option<i32> {
    if !(1..=1024).contains(&denominator) {
        return None;
    }
    power_of_two(denominator as u64).map(|exp| exp as i32)
}

impl From<ExactFraction> for Fraction {
    fn from(value: ExactFraction) -> Self {
        let (num, den) = (
            value.numerator().unsigned_abs(),
            value.denominator().unsigned_abs(),
        );
        match value.numerator() < 0 {
            true => Fraction::new_neg(num, den),
            false => Fraction::new(num, den),
        }
    }
}

impl TryFrom<Fraction> for ExactFraction {
    type Error = RhythmError;

    /// NaN, infinities and values beyond `i64` can not be represented.
    fn try_from(value: Fraction) -> Result<Self, Self::Error> {
        let malformed = || RhythmError::MalformedFractionLiteral {
            literal: value.to_string(),
            location: InputLocation::unknown(),
        };
        let num = i64::try_from(*value.numer().ok_or_else(malformed)?)
            .map_err(|_| malformed())?;
        let den = i64::try_from(*value.denom().ok_or_else(malformed)?)
            .map_err(|_| malformed())?;
        let num = match value.is_sign_negative() {
            true => -num,
            false => num,
        };
        ExactFraction::try_new(num, den)
    }
}
