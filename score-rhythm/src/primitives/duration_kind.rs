//! Catalogue of notated note values, from maxima down to 1024th.
//!
//! Lookups from external tokens are strict: an unknown MusicXML or MSR token
//! is an error. Lookups from numbers ([DurationKind::from_integer],
//! [DurationKind::from_whole_notes]) silently give [DurationKind::Unknown].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    diagnostics::DiagnosticsSink, error::TokenFormat, InputLocation, RhythmError,
    RhythmResult,
};

use super::WholeNotes;

/// Variants are ordered from the longest to the shortest value,
/// with `Unknown` first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum DurationKind {
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "maxima")]
    Maxima,
    #[serde(rename = "long")]
    Longa,
    #[serde(rename = "breve")]
    Breve,
    #[serde(rename = "whole")]
    Whole,
    #[serde(rename = "half")]
    Half,
    #[serde(rename = "quarter")]
    Quarter,
    #[serde(rename = "eighth")]
    Eighth,
    #[serde(rename = "16th")]
    Sixteenth,
    #[serde(rename = "32nd")]
    ThirtySecond,
    #[serde(rename = "64th")]
    SixtyFourth,
    #[serde(rename = "128th")]
    HundredTwentyEighth,
    #[serde(rename = "256th")]
    TwoHundredFiftySixth,
    #[serde(rename = "512th")]
    FiveHundredTwelfth,
    #[serde(rename = "1024th")]
    ThousandTwentyFourth,
}
impl DurationKind {
    /// Every known kind, longest first.
    pub const ALL: [Self; 14] = [
        Self::Maxima,
        Self::Longa,
        Self::Breve,
        Self::Whole,
        Self::Half,
        Self::Quarter,
        Self::Eighth,
        Self::Sixteenth,
        Self::ThirtySecond,
        Self::SixtyFourth,
        Self::HundredTwentyEighth,
        Self::TwoHundredFiftySixth,
        Self::FiveHundredTwelfth,
        Self::ThousandTwentyFourth,
    ];

    /// Read the contents of a MusicXML `<type>` element.
    pub fn from_musicxml_type(token: &str, location: &InputLocation) -> RhythmResult<Self> {
        match token {
            "maxima" => Ok(Self::Maxima),
            "long" => Ok(Self::Longa),
            "breve" => Ok(Self::Breve),
            "whole" => Ok(Self::Whole),
            "half" => Ok(Self::Half),
            "quarter" => Ok(Self::Quarter),
            "eighth" => Ok(Self::Eighth),
            "16th" => Ok(Self::Sixteenth),
            "32nd" => Ok(Self::ThirtySecond),
            "64th" => Ok(Self::SixtyFourth),
            "128th" => Ok(Self::HundredTwentyEighth),
            "256th" => Ok(Self::TwoHundredFiftySixth),
            "512th" => Ok(Self::FiveHundredTwelfth),
            "1024th" => Ok(Self::ThousandTwentyFourth),
            x => Err(RhythmError::UnrecognizedDurationToken {
                token: x.to_string(),
                format: TokenFormat::MusicXml,
                location: location.clone(),
            }),
        }
    }

    /// Read an MSR duration string: "1", "2", "4" ... "1024",
    /// or "maxima", "long", "breve".
    pub fn from_numeric_token(token: &str, location: &InputLocation) -> RhythmResult<Self> {
        match token {
            "maxima" => Ok(Self::Maxima),
            "long" => Ok(Self::Longa),
            "breve" => Ok(Self::Breve),
            "1" => Ok(Self::Whole),
            "2" => Ok(Self::Half),
            "4" => Ok(Self::Quarter),
            "8" => Ok(Self::Eighth),
            "16" => Ok(Self::Sixteenth),
            "32" => Ok(Self::ThirtySecond),
            "64" => Ok(Self::SixtyFourth),
            "128" => Ok(Self::HundredTwentyEighth),
            "256" => Ok(Self::TwoHundredFiftySixth),
            "512" => Ok(Self::FiveHundredTwelfth),
            "1024" => Ok(Self::ThousandTwentyFourth),
            x => Err(RhythmError::UnrecognizedDurationToken {
                token: x.to_string(),
                format: TokenFormat::Msr,
                location: location.clone(),
            }),
        }
    }

    /// `4` is a quarter, `16` a sixteenth. Anything else is `Unknown`.
    pub fn from_integer(value: i64) -> Self {
        match value {
            1 => Self::Whole,
            2 => Self::Half,
            4 => Self::Quarter,
            8 => Self::Eighth,
            16 => Self::Sixteenth,
            32 => Self::ThirtySecond,
            64 => Self::SixtyFourth,
            128 => Self::HundredTwentyEighth,
            256 => Self::TwoHundredFiftySixth,
            512 => Self::FiveHundredTwelfth,
            1024 => Self::ThousandTwentyFourth,
            _ => Self::Unknown,
        }
    }

    /// Exact inverse of [DurationKind::whole_notes], `Unknown` if there is
    /// no undotted kind of that length.
    pub fn from_whole_notes(whole_notes: &WholeNotes) -> Self {
        match (whole_notes.numerator(), whole_notes.denominator()) {
            (1, den) => Self::from_integer(den),
            (2, 1) => Self::Breve,
            (4, 1) => Self::Longa,
            (8, 1) => Self::Maxima,
            _ => Self::Unknown,
        }
    }

    /// Length of the undotted value. `Unknown` is 0/1.
    pub fn whole_notes(self) -> WholeNotes {
        let (num, den) = match self {
            Self::Unknown => (0, 1),
            Self::Maxima => (8, 1),
            Self::Longa => (4, 1),
            Self::Breve => (2, 1),
            Self::Whole => (1, 1),
            Self::Half => (1, 2),
            Self::Quarter => (1, 4),
            Self::Eighth => (1, 8),
            Self::Sixteenth => (1, 16),
            Self::ThirtySecond => (1, 32),
            Self::SixtyFourth => (1, 64),
            Self::HundredTwentyEighth => (1, 128),
            Self::TwoHundredFiftySixth => (1, 256),
            Self::FiveHundredTwelfth => (1, 512),
            Self::ThousandTwentyFourth => (1, 1024),
        };
        WholeNotes::new(num, den)
    }

    /// Inverse of [DurationKind::from_musicxml_type].
    pub fn musicxml_type(self) -> &'static str {
        match self {
            Self::Unknown => "noNotesDuration",
            Self::Maxima => "maxima",
            Self::Longa => "long",
            Self::Breve => "breve",
            Self::Whole => "whole",
            Self::Half => "half",
            Self::Quarter => "quarter",
            Self::Eighth => "eighth",
            Self::Sixteenth => "16th",
            Self::ThirtySecond => "32nd",
            Self::SixtyFourth => "64th",
            Self::HundredTwentyEighth => "128th",
            Self::TwoHundredFiftySixth => "256th",
            Self::FiveHundredTwelfth => "512th",
            Self::ThousandTwentyFourth => "1024th",
        }
    }

    /// Duration part of a LilyPond note: `\breve`, `4`, `16`...
    pub fn lilypond_token(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN_DURATION",
            Self::Maxima => "\\maxima",
            Self::Longa => "\\longa",
            Self::Breve => "\\breve",
            Self::Whole => "1",
            Self::Half => "2",
            Self::Quarter => "4",
            Self::Eighth => "8",
            Self::Sixteenth => "16",
            Self::ThirtySecond => "32",
            Self::SixtyFourth => "64",
            Self::HundredTwentyEighth => "128",
            Self::TwoHundredFiftySixth => "256",
            Self::FiveHundredTwelfth => "512",
            Self::ThousandTwentyFourth => "1024",
        }
    }
}
impl fmt::Display for DurationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Unknown => "UNKNOWN_DURATION",
            Self::Maxima => "Maxima",
            Self::Longa => "Longa",
            Self::Breve => "Breve",
            Self::Whole => "1",
            Self::Half => "2",
            Self::Quarter => "4",
            Self::Eighth => "8",
            Self::Sixteenth => "16",
            Self::ThirtySecond => "32",
            Self::SixtyFourth => "64",
            Self::HundredTwentyEighth => "128",
            Self::TwoHundredFiftySixth => "256",
            Self::FiveHundredTwelfth => "512",
            Self::ThousandTwentyFourth => "1024",
        };
        write!(f, "{token}")
    }
}
impl FromStr for DurationKind {
    type Err = RhythmError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_numeric_token(s, &InputLocation::unknown())
    }
}

/// Check that a note's graphic type agrees with its sounding length.
///
/// Disagreement is not fatal: it is reported to the sink and `false` is
/// returned.
pub fn check_duration_consistency(
    kind: DurationKind,
    whole_notes: &WholeNotes,
    location: &InputLocation,
    sink: &dyn DiagnosticsSink,
) -> bool {
    let consistent = kind.whole_notes() == *whole_notes;
    if !consistent {
        sink.warning(
            location,
            &format!(
                "duration kind {kind} and whole notes {} are inconsistent",
                whole_notes.as_short_string()
            ),
        );
    }
    consistent
}

#[cfg(test)]
mod tests {
    use super::{check_duration_consistency, DurationKind};
    use crate::{
        diagnostics::CollectedDiagnostics, error::TokenFormat, primitives::WholeNotes,
        InputLocation, RhythmError,
    };

    #[test]
    fn kinds_are_ordered_longest_first() {
        let mut sorted = DurationKind::ALL;
        sorted.sort();
        assert_eq!(sorted, DurationKind::ALL);
        for pair in DurationKind::ALL.windows(2) {
            assert!(pair[0].whole_notes() > pair[1].whole_notes());
        }
        assert!(DurationKind::Unknown < DurationKind::Maxima);
    }

    #[test]
    fn whole_notes_table() {
        assert_eq!(DurationKind::Quarter.whole_notes(), WholeNotes::new(1, 4));
        assert_eq!(DurationKind::Breve.whole_notes(), WholeNotes::new(2, 1));
        assert_eq!(DurationKind::Maxima.whole_notes(), WholeNotes::new(8, 1));
        assert_eq!(
            DurationKind::ThousandTwentyFourth.whole_notes(),
            WholeNotes::new(1, 1024)
        );
        assert_eq!(DurationKind::Unknown.whole_notes(), WholeNotes::ZERO);
        for kind in DurationKind::ALL {
            assert_eq!(DurationKind::from_whole_notes(&kind.whole_notes()), kind);
        }
        assert_eq!(
            DurationKind::from_whole_notes(&WholeNotes::new(3, 8)),
            DurationKind::Unknown
        );
        assert_eq!(
            DurationKind::from_whole_notes(&WholeNotes::new(1, 2048)),
            DurationKind::Unknown
        );
        assert_eq!(
            DurationKind::from_whole_notes(&WholeNotes::new(16, 1)),
            DurationKind::Unknown
        );
    }

    #[test]
    fn musicxml_tokens() {
        let location = InputLocation::new("score.xml", 10);
        for kind in DurationKind::ALL {
            assert_eq!(
                DurationKind::from_musicxml_type(kind.musicxml_type(), &location),
                Ok(kind)
            );
        }
        assert_eq!(DurationKind::Unknown.musicxml_type(), "noNotesDuration");
        assert_eq!(
            DurationKind::from_musicxml_type("4", &location),
            Err(RhythmError::UnrecognizedDurationToken {
                token: "4".to_string(),
                format: TokenFormat::MusicXml,
                location,
            })
        );
    }

    #[test]
    fn numeric_tokens() {
        let location = InputLocation::new("score.msr", 3);
        assert_eq!(
            DurationKind::from_numeric_token("4", &location),
            Ok(DurationKind::Quarter)
        );
        assert_eq!(
            DurationKind::from_numeric_token("long", &location),
            Ok(DurationKind::Longa)
        );
        assert_eq!(
            DurationKind::from_numeric_token("1024", &location),
            Ok(DurationKind::ThousandTwentyFourth)
        );
        let err = DurationKind::from_numeric_token("bogus", &location).unwrap_err();
        assert!(err.to_string().contains("\"bogus\""));
        assert!(err.to_string().contains("score.msr:3"));
        assert!("quarter".parse::<DurationKind>().is_err());
        assert_eq!("16".parse::<DurationKind>(), Ok(DurationKind::Sixteenth));
    }

    #[test]
    fn integers() {
        assert_eq!(DurationKind::from_integer(8), DurationKind::Eighth);
        assert_eq!(DurationKind::from_integer(1), DurationKind::Whole);
        for value in [0, 3, -4, 2048] {
            assert_eq!(DurationKind::from_integer(value), DurationKind::Unknown);
        }
    }

    #[test]
    fn display_tokens() {
        assert_eq!(DurationKind::Quarter.to_string(), "4");
        assert_eq!(DurationKind::Breve.to_string(), "Breve");
        assert_eq!(DurationKind::Breve.lilypond_token(), "\\breve");
        assert_eq!(DurationKind::Whole.lilypond_token(), "1");
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&DurationKind::Sixteenth).unwrap(),
            "\"16th\""
        );
        assert_eq!(
            serde_json::from_str::<DurationKind>("\"long\"").unwrap(),
            DurationKind::Longa
        );
    }

    #[test]
    fn consistency() {
        let sink = CollectedDiagnostics::default();
        let location = InputLocation::new("score.xml", 5);
        assert!(check_duration_consistency(
            DurationKind::Half,
            &WholeNotes::new(2, 4),
            &location,
            &sink
        ));
        assert!(!check_duration_consistency(
            DurationKind::Half,
            &WholeNotes::new(3, 4),
            &location,
            &sink
        ));
        assert_eq!(
            sink.warnings(),
            vec!["score.xml:5: duration kind 2 and whole notes 3/4 whn are inconsistent"
                .to_string()]
        );
    }
}
