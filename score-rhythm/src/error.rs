//! Errors raised while reading or notating durations.
//!
//! Every fatal error carries the offending text and the place in the input
//! it came from, so a user can find the malformed score data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a value was read from: input source name and line number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InputLocation {
    pub source_name: Option<String>,
    pub line: Option<usize>,
}
impl InputLocation {
    pub fn new(source_name: impl Into<String>, line: impl Into<Option<usize>>) -> Self {
        Self {
            source_name: Some(source_name.into()),
            line: line.into(),
        }
    }
    /// Location of values not coming from any input file.
    pub fn unknown() -> Self {
        Self::default()
    }
    pub fn at_line(line: usize) -> Self {
        Self {
            source_name: None,
            line: Some(line),
        }
    }
}
impl fmt::Display for InputLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.source_name.as_deref().unwrap_or("<unknown input>");
        match self.line {
            Some(line) => write!(f, "{name}:{line}"),
            None => write!(f, "{name}"),
        }
    }
}

/// External duration token families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    /// `<type>` element contents: "quarter", "16th", "long"...
    MusicXml,
    /// numeric MSR strings: "4", "16", "breve"...
    Msr,
}
impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MusicXml => write!(f, "MusicXML"),
            Self::Msr => write!(f, "MSR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RhythmError {
    #[error("{location}: fraction string '{literal}' is ill-formed")]
    MalformedFractionLiteral {
        literal: String,
        location: InputLocation,
    },
    #[error("denominator '{denominator}' of {numerator}/{denominator} should be positive")]
    InvalidDenominator { numerator: i64, denominator: i64 },
    #[error("{location}: {format} duration string \"{token}\" is unknown")]
    UnrecognizedDurationToken {
        token: String,
        format: TokenFormat,
        location: InputLocation,
    },
    #[error(
        "{location}: numerator {numerator} is not positive, \
        whole notes {numerator}/{denominator} can not be notated"
    )]
    NegativeNotatedDuration {
        numerator: i64,
        denominator: i64,
        location: InputLocation,
    },
}
pub type RhythmResult<T> = Result<T, RhythmError>;

#[cfg(test)]
mod tests {
    use super::{InputLocation, RhythmError, TokenFormat};

    #[test]
    fn location_display() {
        assert_eq!(InputLocation::new("score.xml", 12).to_string(), "score.xml:12");
        assert_eq!(InputLocation::new("score.xml", None).to_string(), "score.xml");
        assert_eq!(InputLocation::unknown().to_string(), "<unknown input>");
        assert_eq!(InputLocation::at_line(3).to_string(), "<unknown input>:3");
    }

    #[test]
    fn messages_name_the_input() {
        let err = RhythmError::UnrecognizedDurationToken {
            token: "bogus".to_string(),
            format: TokenFormat::Msr,
            location: InputLocation::new("a.msr", 7),
        };
        assert_eq!(
            err.to_string(),
            "a.msr:7: MSR duration string \"bogus\" is unknown"
        );
        let err = RhythmError::MalformedFractionLiteral {
            literal: "3-4".to_string(),
            location: InputLocation::unknown(),
        };
        assert!(err.to_string().contains("'3-4'"));
    }
}
