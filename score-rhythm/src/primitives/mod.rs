//! Rational arithmetic of rhythm.
//!
//! Everything is built on [ExactFraction], an always-normalized `i64`
//! fraction. Durations ([WholeNotes]) and positions ([PositionInMeasure])
//! wrap it in distinct types, so a position can not be added to a position.
//! [Moment] orders events written at the same place but sounding at
//! different times, and [DurationKind] with [DottedDuration] describe
//! notated values.

pub mod dotted_duration;
pub mod duration_kind;
pub mod exact_fraction;
pub mod fraction_tools;
pub mod moment;
pub mod position;
pub mod whole_notes;

pub use dotted_duration::DottedDuration;
pub use duration_kind::{check_duration_consistency, DurationKind};
pub use exact_fraction::ExactFraction;
pub use fraction_tools::{duration_binary_logarithm, gcd, number_of_dots};
pub use moment::Moment;
pub use position::PositionInMeasure;
pub use whole_notes::WholeNotes;
