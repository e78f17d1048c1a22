//! Positions of events inside a measure.
//!
//! A position is an offset from the start of the measure, in whole notes.
//! Moving a position by a duration gives another position, while the
//! distance between two positions is a duration.
//!
//! # Examples
//!
//! ```
//! use score_rhythm::primitives::{PositionInMeasure, WholeNotes};
//!
//! let a = PositionInMeasure::new(1, 4);
//! let b = a + WholeNotes::new(1, 8);
//! assert_eq!(b, PositionInMeasure::new(3, 8));
//! let distance: WholeNotes = b - a;
//! assert_eq!(distance, WholeNotes::new(1, 8));
//! assert_eq!(PositionInMeasure::from_whole_notes(distance).as_whole_notes(), distance);
//! ```

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use crate::{InputLocation, RhythmError, RhythmResult, StrictMode};

use super::{ExactFraction, WholeNotes};

/// Offset from the start of the measure, in whole notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionInMeasure {
    position: ExactFraction,
}
impl PositionInMeasure {
    pub const ZERO: Self = Self {
        position: ExactFraction::ZERO,
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

    /// Position reached after `whole_notes` from the measure start.
    pub fn from_whole_notes(whole_notes: WholeNotes) -> Self {
        Self::from(whole_notes.get())
    }
    /// Distance from the measure start.
    pub fn as_whole_notes(&self) -> WholeNotes {
        WholeNotes::from(self.position)
    }

    pub fn get(&self) -> ExactFraction {
        self.position
    }
    pub fn numerator(&self) -> i64 {
        self.position.numerator()
    }
    pub fn denominator(&self) -> i64 {
        self.position.denominator()
    }

    pub fn inverse(&self) -> Self {
        Self::from(self.position.inverse())
    }
    pub fn opposite(&self) -> Self {
        Self::from(self.position.opposite())
    }

    pub fn to_f64(&self) -> f64 {
        self.position.to_f64()
    }
    pub fn to_f32(&self) -> f32 {
        self.position.to_f32()
    }
    pub fn to_int(&self) -> i64 {
        self.position.to_int()
    }

    pub fn as_short_string(&self) -> String {
        format!("{} pim", self.position)
    }
}
impl From<ExactFraction> for PositionInMeasure {
    fn from(position: ExactFraction) -> Self {
        Self { position }
    }
}
impl fmt::Display for PositionInMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.position.fmt(f)
    }
}
impl FromStr for PositionInMeasure {
    type Err = RhythmError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.parse::<ExactFraction>()?))
    }
}

impl PartialOrd for PositionInMeasure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
    fn lt(&self, other: &Self) -> bool {
        self.position < other.position
    }
    fn gt(&self, other: &Self) -> bool {
        self.position > other.position
    }
    fn le(&self, other: &Self) -> bool {
        self.position <= other.position
    }
    fn ge(&self, other: &Self) -> bool {
        self.position >= other.position
    }
}
impl Ord for PositionInMeasure {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}
impl PartialEq<f64> for PositionInMeasure {
    fn eq(&self, other: &f64) -> bool {
        self.position == *other
    }
}
impl PartialOrd<f64> for PositionInMeasure {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.position.partial_cmp(other)
    }
}

impl Add<WholeNotes> for PositionInMeasure {
    type Output = Self;
    fn add(self, rhs: WholeNotes) -> Self::Output {
        Self::from(self.position + rhs.get())
    }
}
impl Sub<WholeNotes> for PositionInMeasure {
    type Output = Self;
    fn sub(self, rhs: WholeNotes) -> Self::Output {
        Self::from(self.position - rhs.get())
    }
}
impl Sub for PositionInMeasure {
    type Output = WholeNotes;
    fn sub(self, rhs: Self) -> Self::Output {
        WholeNotes::from(self.position - rhs.position)
    }
}
impl AddAssign<WholeNotes> for PositionInMeasure {
    fn add_assign(&mut self, rhs: WholeNotes) {
        self.position += rhs.get();
    }
}
impl SubAssign<WholeNotes> for PositionInMeasure {
    fn sub_assign(&mut self, rhs: WholeNotes) {
        self.position -= rhs.get();
    }
}
