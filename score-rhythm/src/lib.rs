//! Exact rhythm arithmetic for score conversion.
//!
//! Durations and positions are exact fractions of a whole note, so sums of
//! tuplets and dotted values never drift. A duration can be turned back into
//! a LilyPond token with [lilypond_render::DurationRenderer].

pub mod diagnostics;
pub mod error;
pub mod lilypond_render;
pub mod primitives;
pub mod settings;

pub use diagnostics::{DiagnosticsSink, LogDiagnostics, NoDiagnostics};
pub use error::{InputLocation, RhythmError, RhythmResult, TokenFormat};
pub use settings::{RhythmSettings, StrictMode};
