//! "When" an event happens.
//!
//! Events written at the same place can still sound at different times
//! (grace notes, for instance), so a moment pairs the written position with
//! a sounding offset relative to it.

use std::{cmp::Ordering, fmt};

use super::{PositionInMeasure, WholeNotes};

#[derive(Debug, Clone, Copy, Default, Hash)]
pub struct Moment {
    pub written_position: PositionInMeasure,
    pub sounding_offset: WholeNotes,
}
impl Moment {
    pub fn new(written_position: PositionInMeasure, sounding_offset: WholeNotes) -> Self {
        Self {
            written_position,
            sounding_offset,
        }
    }
    /// Moment without sounding offset.
    pub fn at(written_position: PositionInMeasure) -> Self {
        Self::new(written_position, WholeNotes::ZERO)
    }
}
impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.written_position, self.sounding_offset)
    }
}

impl PartialEq for Moment {
    fn eq(&self, other: &Self) -> bool {
        self.written_position == other.written_position
            && self.sounding_offset == other.sounding_offset
    }
}
impl Eq for Moment {}
impl PartialOrd for Moment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
    fn lt(&self, other: &Self) -> bool {
        if self.written_position != other.written_position {
            return self.written_position < other.written_position;
        }
        self.sounding_offset < other.sounding_offset
    }
    fn gt(&self, other: &Self) -> bool {
        !self.lt(other) && self != other
    }
    fn le(&self, other: &Self) -> bool {
        self.lt(other) || self == other
    }
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}
impl Ord for Moment {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.lt(other) {
            Ordering::Less
        } else if self == other {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Moment;
    use crate::primitives::{PositionInMeasure, WholeNotes};

    fn moment(pos: (i64, i64), offset: (i64, i64)) -> Moment {
        Moment::new(
            PositionInMeasure::new(pos.0, pos.1),
            WholeNotes::new(offset.0, offset.1),
        )
    }

    #[test]
    fn ordering() {
        let grace = moment((1, 4), (-1, 16));
        let note = Moment::at(PositionInMeasure::new(1, 4));
        let later = Moment::at(PositionInMeasure::new(1, 2));
        assert!(grace < note);
        assert!(note > grace);
        assert!(note < later);
        assert!(grace < later);
        assert!(later >= note);
        assert!(grace <= note);
        assert_ne!(grace, note);
        assert_eq!(note, moment((2, 8), (0, 1)));
        assert!(note <= moment((2, 8), (0, 1)));
        assert!(note >= moment((2, 8), (0, 1)));

        // position wins over offset
        assert!(moment((1, 8), (1, 2)) < moment((1, 4), (0, 1)));
    }

    #[test]
    fn sorting() {
        let mut moments = vec![
            moment((1, 2), (0, 1)),
            moment((1, 4), (1, 32)),
            moment((0, 1), (0, 1)),
            moment((1, 4), (-1, 32)),
        ];
        moments.sort();
        assert_eq!(
            moments,
            vec![
                moment((0, 1), (0, 1)),
                moment((1, 4), (-1, 32)),
                moment((1, 4), (1, 32)),
                moment((1, 2), (0, 1)),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(moment((3, 4), (1, 8)).to_string(), "[3/4, 1/8]");
        assert_eq!(Moment::default().to_string(), "[0/1, 0/1]");
    }
}
