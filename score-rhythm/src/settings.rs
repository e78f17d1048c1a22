use serde::{Deserialize, Serialize};

/// Whether internal consistency checks are performed.
///
/// In `Unchecked` mode a non-positive denominator passed to a raw
/// constructor, or a negative duration reaching the notation encoder,
/// is not reported and yields an unspecified (but non-panicking) result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrictMode {
    Checked,
    Unchecked,
}
impl StrictMode {
    pub fn is_checked(self) -> bool {
        self == Self::Checked
    }
}
impl Default for StrictMode {
    fn default() -> Self {
        if cfg!(any(debug_assertions, feature = "sanity-checks")) {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RhythmSettings {
    pub strict_mode: StrictMode,
    /// Emit step-by-step detail of the notation encoder.
    pub trace_durations: bool,
}
impl RhythmSettings {
    pub fn new(strict_mode: StrictMode) -> Self {
        Self {
            strict_mode,
            trace_durations: false,
        }
    }
    pub fn with_trace(mut self, trace_durations: bool) -> Self {
        self.trace_durations = trace_durations;
        self
    }
}
