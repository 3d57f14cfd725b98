//! Scoring primitives: bounded scores, qualitative bands and issue severity.

use std::fmt;

use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, NumberValidation, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::PmmError;

/// A score on the 0-100 scale.
///
/// Out-of-range values are rejected both by [`Score::new`] and during
/// deserialization, so no record can hold one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    pub fn new(value: i64) -> Result<Self, PmmError> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(PmmError::ScoreOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Qualitative band this score falls into.
    pub fn level(self) -> ScoreLevel {
        ScoreLevel::for_score(self)
    }
}

impl TryFrom<i64> for Score {
    type Error = PmmError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

impl JsonSchema for Score {
    fn schema_name() -> String {
        "Score".to_owned()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::Integer.into()),
            number: Some(Box::new(NumberValidation {
                minimum: Some(0.0),
                maximum: Some(100.0),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}

/// Qualitative score bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ScoreLevel {
    /// Critical issues, needs complete rework
    Failing = 0,
    /// Major gaps, significant work needed
    Poor = 25,
    /// Foundational issues, improvements required
    NeedsWork = 50,
    /// Solid foundation, minor refinements
    Good = 75,
    /// Best-in-class, ready to ship
    Excellent = 100,
}

impl ScoreLevel {
    pub const ALL: [ScoreLevel; 5] = [
        ScoreLevel::Failing,
        ScoreLevel::Poor,
        ScoreLevel::NeedsWork,
        ScoreLevel::Good,
        ScoreLevel::Excellent,
    ];

    /// Highest band whose threshold does not exceed `score`.
    pub fn for_score(score: Score) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|level| level.threshold() <= score.value())
            .unwrap_or(ScoreLevel::Failing)
    }

    pub fn threshold(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreLevel::Failing => "Failing",
            ScoreLevel::Poor => "Poor",
            ScoreLevel::NeedsWork => "Needs Work",
            ScoreLevel::Good => "Good",
            ScoreLevel::Excellent => "Excellent",
        }
    }
}

impl TryFrom<u8> for ScoreLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.threshold() == value)
            .ok_or_else(|| format!("{value} is not a score level (expected 0, 25, 50, 75 or 100)"))
    }
}

impl From<ScoreLevel> for u8 {
    fn from(level: ScoreLevel) -> Self {
        level as u8
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Issue severity. Determines which bucket an issue belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Severity {
    /// Nice to fix, won't block
    Low = 1,
    /// Should fix, impacts effectiveness
    Medium = 2,
    /// Must fix, significantly hurting
    High = 3,
    /// Blocking, immediate attention required
    Critical = 4,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Severity::Low),
            2 => Ok(Severity::Medium),
            3 => Ok(Severity::High),
            4 => Ok(Severity::Critical),
            other => Err(format!("{other} is not a severity (expected 1-4)")),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl JsonSchema for Severity {
    fn schema_name() -> String {
        "Severity".to_owned()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::Integer.into()),
            enum_values: Some(
                Self::ALL
                    .iter()
                    .map(|s| serde_json::Value::from(u8::from(*s)))
                    .collect(),
            ),
            ..Default::default()
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_bounds() {
        assert_eq!(Score::new(0).unwrap().value(), 0);
        assert_eq!(Score::new(100).unwrap().value(), 100);
        assert_eq!(Score::new(42).unwrap(), Score::try_from(42).unwrap());
    }

    #[test]
    fn score_rejects_out_of_range() {
        assert!(matches!(Score::new(-1), Err(PmmError::ScoreOutOfRange(-1))));
        assert!(matches!(Score::new(101), Err(PmmError::ScoreOutOfRange(101))));
    }

    #[test]
    fn score_deserialization_is_range_checked() {
        let ok: Score = serde_json::from_str("75").unwrap();
        assert_eq!(ok.value(), 75);
        assert!(serde_json::from_str::<Score>("150").is_err());
        assert!(serde_json::from_str::<Score>("-5").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "75");
    }

    #[test]
    fn score_level_has_five_ordered_members() {
        assert_eq!(ScoreLevel::ALL.len(), 5);
        for pair in ScoreLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn score_level_banding() {
        assert_eq!(ScoreLevel::for_score(Score::new(0).unwrap()), ScoreLevel::Failing);
        assert_eq!(ScoreLevel::for_score(Score::new(24).unwrap()), ScoreLevel::Failing);
        assert_eq!(ScoreLevel::for_score(Score::new(25).unwrap()), ScoreLevel::Poor);
        assert_eq!(ScoreLevel::for_score(Score::new(74).unwrap()), ScoreLevel::NeedsWork);
        assert_eq!(Score::new(80).unwrap().level(), ScoreLevel::Good);
        assert_eq!(Score::MAX.level(), ScoreLevel::Excellent);
    }

    #[test]
    fn score_level_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&ScoreLevel::NeedsWork).unwrap(), "50");
        let level: ScoreLevel = serde_json::from_str("75").unwrap();
        assert_eq!(level, ScoreLevel::Good);
        assert!(serde_json::from_str::<ScoreLevel>("30").is_err());
    }

    #[test]
    fn severity_has_four_ordered_members() {
        assert_eq!(Severity::ALL.len(), 4);
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn severity_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "4");
        let severity: Severity = serde_json::from_str("2").unwrap();
        assert_eq!(severity, Severity::Medium);
        assert!(serde_json::from_str::<Severity>("0").is_err());
        assert!(serde_json::from_str::<Severity>("5").is_err());
    }
}
