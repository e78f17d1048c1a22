use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::{
    lilypond_render::{DurationRenderer, RendersToLilypond},
    InputLocation, RhythmError, RhythmResult, StrictMode,
};

use super::ExactFraction;

/// A duration, as an exact fraction of a whole note.
///
/// Not interchangeable with [PositionInMeasure](super::PositionInMeasure),
/// though both share the same arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WholeNotes {
    fraction: ExactFraction,
}
impl WholeNotes {
    pub const ZERO: Self = Self {
        fraction: ExactFraction::ZERO,
    };
    /// Reserved numerator marking a duration that is not known yet.
    pub const UNKNOWN_NUMERATOR: i64 = -1;
    pub const UNKNOWN: Self = Self {
        fraction: ExactFraction::from_integer(Self::UNKNOWN_NUMERATOR),
    };

    /// # Panics
    ///
    /// In checked mode, if denominator is not positive.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self::from(ExactFraction::new(numerator, denominator))
    }
    pub fn with_mode(numerator: i64, denominator: i64, mode: StrictMode) -> Self {
        Self::from(ExactFraction::with_mode(numerator, denominator, mode))
    }
    pub fn try_new(numerator: i64, denominator: i64) -> RhythmResult<Self> {
        Ok(Self::from(ExactFraction::try_new(numerator, denominator)?))
    }
    pub fn parse(literal: &str, location: &InputLocation) -> RhythmResult<Self> {
        Ok(Self::from(ExactFraction::parse(literal, location)?))
    }

    pub fn get(&self) -> ExactFraction {
        self.fraction
    }
    pub fn numerator(&self) -> i64 {
        self.fraction.numerator()
    }
    pub fn denominator(&self) -> i64 {
        self.fraction.denominator()
    }
    pub fn is_zero(&self) -> bool {
        self.fraction.is_zero()
    }
    pub fn is_unknown(&self) -> bool {
        self.fraction == Self::UNKNOWN.fraction
    }

    pub fn inverse(&self) -> Self {
        Self::from(self.fraction.inverse())
    }
    pub fn opposite(&self) -> Self {
        Self::from(self.fraction.opposite())
    }

    pub fn to_f64(&self) -> f64 {
        self.fraction.to_f64()
    }
    pub fn to_f32(&self) -> f32 {
        self.fraction.to_f32()
    }
    pub fn to_int(&self) -> i64 {
        self.fraction.to_int()
    }

    /// "3/8 whn", or a marker for [WholeNotes::UNKNOWN].
    pub fn as_short_string(&self) -> String {
        match self.is_unknown() {
            true => "UNKNOWN_WHOLE_NOTES".to_string(),
            false => format!("{} whn", self.fraction),
        }
    }
}
impl From<ExactFraction> for WholeNotes {
    fn from(fraction: ExactFraction) -> Self {
        Self { fraction }
    }
}
impl fmt::Display for WholeNotes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fraction.fmt(f)
    }
}
impl FromStr for WholeNotes {
    type Err = RhythmError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.parse::<ExactFraction>()?))
    }
}

impl PartialOrd for WholeNotes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
    fn lt(&self, other: &Self) -> bool {
        self.fraction < other.fraction
    }
    fn gt(&self, other: &Self) -> bool {
        self.fraction > other.fraction
    }
    fn le(&self, other: &Self) -> bool {
        self.fraction <= other.fraction
    }
    fn ge(&self, other: &Self) -> bool {
        self.fraction >= other.fraction
    }
}
impl Ord for WholeNotes {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fraction.cmp(&other.fraction)
    }
}
impl PartialEq<f64> for WholeNotes {
    fn eq(&self, other: &f64) -> bool {
        self.fraction == *other
    }
}
impl PartialOrd<f64> for WholeNotes {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.fraction.partial_cmp(other)
    }
}

impl Add for WholeNotes {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::from(self.fraction + rhs.fraction)
    }
}
impl Sub for WholeNotes {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from(self.fraction - rhs.fraction)
    }
}
/// Scaling by a factor, e.g. 3/2 for one dot or 7/4 for two.
impl Mul<ExactFraction> for WholeNotes {
    type Output = Self;
    fn mul(self, rhs: ExactFraction) -> Self::Output {
        Self::from(self.fraction * rhs)
    }
}
impl Div<ExactFraction> for WholeNotes {
    type Output = Self;
    fn div(self, rhs: ExactFraction) -> Self::Output {
        Self::from(self.fraction / rhs)
    }
}
impl Mul<i64> for WholeNotes {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self::Output {
        Self::from(self.fraction * rhs)
    }
}
impl Div<i64> for WholeNotes {
    type Output = Self;
    fn div(self, rhs: i64) -> Self::Output {
        Self::from(self.fraction / rhs)
    }
}
/// How many times `rhs` fits in `self`.
impl Div for WholeNotes {
    type Output = ExactFraction;
    fn div(self, rhs: Self) -> Self::Output {
        self.fraction / rhs.fraction
    }
}
impl Neg for WholeNotes {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.opposite()
    }
}
impl AddAssign for WholeNotes {
    fn add_assign(&mut self, rhs: Self) {
        self.fraction += rhs.fraction;
    }
}
impl SubAssign for WholeNotes {
    fn sub_assign(&mut self, rhs: Self) {
        self.fraction -= rhs.fraction;
    }
}
impl MulAssign<ExactFraction> for WholeNotes {
    fn mul_assign(&mut self, rhs: ExactFraction) {
        self.fraction *= rhs;
    }
}
impl DivAssign<ExactFraction> for WholeNotes {
    fn div_assign(&mut self, rhs: ExactFraction) {
        self.fraction /= rhs;
    }
}
impl MulAssign<i64> for WholeNotes {
    fn mul_assign(&mut self, rhs: i64) {
        self.fraction *= rhs;
    }
}
impl DivAssign<i64> for WholeNotes {
    fn div_assign(&mut self, rhs: i64) {
        self.fraction /= rhs;
    }
}

impl RendersToLilypond for WholeNotes {
    fn render_lilypond(&self) -> RhythmResult<String> {
        Ok(DurationRenderer::default()
            .render(self, &InputLocation::unknown())?
            .token)
    }
}
