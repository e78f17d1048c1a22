use std::fmt;

use crate::{lilypond_render::RendersToLilypond, RhythmResult};

use super::{DurationKind, ExactFraction, WholeNotes};

/// Notated value with augmentation dots, like a dotted quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DottedDuration {
    pub kind: DurationKind,
    pub dots: u32,
}
impl DottedDuration {
    pub fn new(kind: DurationKind, dots: u32) -> Self {
        Self { kind, dots }
    }

    pub fn increment_dots(&mut self) {
        self.dots += 1;
    }

    /// Every dot adds half of what the previous one added:
    /// quarter with 2 dots is 1/4 + 1/8 + 1/16.
    pub fn whole_notes(&self) -> WholeNotes {
        let half = ExactFraction::new(1, 2);
        let mut result = self.kind.whole_notes();
        let mut increment = result * half;
        for _ in 0..self.dots {
            result += increment;
            increment *= half;
        }
        log::trace!("{self} expands to {}", result.as_short_string());
        result
    }

    /// Multiplies by 3/2 per dot. Only used when rendering tempo marks.
    ///
    /// Agrees with [DottedDuration::whole_notes] for 0 and 1 dot only:
    /// quarter with 2 dots gives 9/16 here instead of 7/16.
    pub fn whole_notes_for_tempo(&self) -> WholeNotes {
        let factor = ExactFraction::new(3, 2);
        let mut result = self.kind.whole_notes();
        for _ in 0..self.dots {
            result *= factor;
        }
        result
    }

    fn dots_suffix(&self) -> String {
        ".".repeat(self.dots as usize)
    }
}
impl From<DurationKind> for DottedDuration {
    fn from(kind: DurationKind) -> Self {
        Self::new(kind, 0)
    }
}
impl fmt::Display for DottedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.dots_suffix())
    }
}
impl RendersToLilypond for DottedDuration {
    fn render_lilypond(&self) -> RhythmResult<String> {
        Ok(format!("{}{}", self.kind.lilypond_token(), self.dots_suffix()))
    }
}
