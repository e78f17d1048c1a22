//! Rendering durations as LilyPond duration tokens.
//!
//! Any [WholeNotes] value can be written as a power-of-two note value,
//! some augmentation dots and a multiplying factor:
//!
//! ```
//! use score_rhythm::{lilypond_render::render_as_notated_token, primitives::WholeNotes};
//! use score_rhythm::InputLocation;
//!
//! let here = InputLocation::unknown();
//! let dotted = render_as_notated_token(&WholeNotes::new(7, 16), &here).unwrap();
//! assert_eq!((dotted.token.as_str(), dotted.dots), ("4..", 2));
//! let scaled = render_as_notated_token(&WholeNotes::new(5, 8), &here).unwrap();
//! assert_eq!(scaled.token, "8*5");
//! ```

use std::fmt;

use crate::{
    diagnostics::{DiagnosticsSink, LogDiagnostics, NO_DIAGNOSTICS},
    primitives::{duration_binary_logarithm, number_of_dots, DurationKind, WholeNotes},
    InputLocation, RhythmError, RhythmResult, RhythmSettings, StrictMode,
};

static LOG_WARNINGS: LogDiagnostics = LogDiagnostics { trace: false };
static LOG_TRACING: LogDiagnostics = LogDiagnostics { trace: true };

pub trait RendersToLilypond {
    fn render_lilypond(&self) -> RhythmResult<String>;
}

/// Token ready to be embedded in LilyPond code, with the number of dots
/// it contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotatedDuration {
    pub token: String,
    pub dots: u32,
}
impl NotatedDuration {
    fn new(token: impl Into<String>, dots: u32) -> Self {
        Self {
            token: token.into(),
            dots,
        }
    }
}
impl fmt::Display for NotatedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}

/// Encoder of [WholeNotes] into [NotatedDuration].
///
/// Advisory messages go to the sink, which defaults to
/// [NoDiagnostics](crate::diagnostics::NoDiagnostics).
#[derive(Clone, Copy)]
pub struct DurationRenderer<'a> {
    pub strict_mode: StrictMode,
    sink: &'a dyn DiagnosticsSink,
}
impl Default for DurationRenderer<'static> {
    fn default() -> Self {
        Self {
            strict_mode: StrictMode::default(),
            sink: &NO_DIAGNOSTICS,
        }
    }
}
impl DurationRenderer<'static> {
    /// Renderer reporting through the `log` facade.
    pub fn new(settings: &RhythmSettings) -> Self {
        let sink: &'static LogDiagnostics = match settings.trace_durations {
            true => &LOG_TRACING,
            false => &LOG_WARNINGS,
        };
        Self {
            strict_mode: settings.strict_mode,
            sink,
        }
    }
}
impl<'a> DurationRenderer<'a> {
    pub fn with_sink(strict_mode: StrictMode, sink: &'a dyn DiagnosticsSink) -> Self {
        Self { strict_mode, sink }
    }

    fn trace(&self, message: impl FnOnce() -> String) {
        if self.sink.trace_enabled() {
            self.sink.trace(&message());
        }
    }

    /// Split `whole_notes` into note value, dots and multiplying factor.
    ///
    /// Durations that can not be written with a power-of-two note value
    /// (1/3, 1/2048...) give a `1*N/D` token instead of an error.
    ///
    /// # Errors
    ///
    /// [RhythmError::NegativeNotatedDuration] in checked mode.
    pub fn render(
        &self,
        whole_notes: &WholeNotes,
        location: &InputLocation,
    ) -> RhythmResult<NotatedDuration> {
        let mut numerator = whole_notes.numerator();
        let denominator = whole_notes.denominator();
        self.trace(|| format!("--> rendering {}", whole_notes.as_short_string()));

        if numerator == 0 {
            return Ok(NotatedDuration::new("ZERO", 0));
        }
        if whole_notes.is_unknown() {
            return Ok(NotatedDuration::new("UNKNOWN_WHOLE_NOTES", 0));
        }
        if numerator < 0 && self.strict_mode.is_checked() {
            return Err(RhythmError::NegativeNotatedDuration {
                numerator,
                denominator,
                location: location.clone(),
            });
        }

        let integral = denominator == 1;
        let mut dots = number_of_dots(numerator);
        let mut log = match duration_binary_logarithm(denominator) {
            Some(log) => log,
            None => {
                if self.sink.trace_enabled() {
                    self.sink.warning(
                        location,
                        &format!(
                            "denominator {denominator} of {} is not a power of two \
                            between 1 and 1024, can not be written as a note value",
                            whole_notes.as_short_string()
                        ),
                    );
                }
                return Ok(NotatedDuration::new(
                    format!("1*{numerator}/{denominator}"),
                    0,
                ));
            }
        };
        self.trace(|| format!("--> dots = {dots:?}, log = {log}"));

        // 6/1 is a breve times 3, 8/1 a maxima
        if integral {
            while numerator % 2 == 0 {
                numerator /= 2;
                log -= 1;
            }
            dots = number_of_dots(numerator);
            self.trace(|| {
                format!("--> integral, numerator = {numerator}, dots = {dots:?}, log = {log}")
            });
        }

        let mut factor = 1;
        let dots = match dots {
            Some(dots) if log >= dots as i32 => {
                log -= dots as i32;
                dots
            }
            _ => {
                factor = numerator;
                0
            }
        };

        // longer than a maxima
        if log < -3 {
            factor *= 1i64 << (-3 - log);
            log = -3;
        }

        let kind = match log {
            -3 => DurationKind::Maxima,
            -2 => DurationKind::Longa,
            -1 => DurationKind::Breve,
            log => DurationKind::from_integer(1i64 << log),
        };
        let mut token = format!("{}{}", kind.lilypond_token(), ".".repeat(dots as usize));
        if factor != 1 {
            token.push_str(&format!("*{factor}"));
        }
        self.trace(|| format!("<-- {token}"));
        Ok(NotatedDuration::new(token, dots))
    }

    /// Rendering of a multi-measure rest lasting `whole_notes`:
    /// 3/4 is written `4*3`, 2/1 is `1*2`.
    pub fn render_multiple_measure_rests(
        &self,
        whole_notes: &WholeNotes,
        location: &InputLocation,
    ) -> RhythmResult<String> {
        let unit = WholeNotes::with_mode(1, whole_notes.denominator(), self.strict_mode);
        let mut token = self.render(&unit, location)?.token;
        let numerator = whole_notes.numerator();
        if numerator != 1 {
            token.push_str(&format!("*{numerator}"));
        }
        Ok(token)
    }
}

/// Render with the default renderer, without diagnostics.
pub fn render_as_notated_token(
    whole_notes: &WholeNotes,
    location: &InputLocation,
) -> RhythmResult<NotatedDuration> {
    DurationRenderer::default().render(whole_notes, location)
}

pub fn render_multiple_measure_rests(
    whole_notes: &WholeNotes,
    location: &InputLocation,
) -> RhythmResult<String> {
    DurationRenderer::default().render_multiple_measure_rests(whole_notes, location)
}
