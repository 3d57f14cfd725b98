//! Homepage records: five-second test, hero, social proof.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Score;

/// Tri-state judgment used by the five-second test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Clarity {
    Clear,
    Partial,
    Unclear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FiveSecondTest {
    pub what_they_do: Clarity,
    pub who_its_for: Clarity,
    pub whats_different: Clarity,
    pub what_to_do_next: Clarity,

    pub passed: bool,
    /// First impression notes
    pub notes: String,
}

impl FiveSecondTest {
    /// Number of the four questions judged `clear`.
    pub fn clear_count(&self) -> usize {
        [
            self.what_they_do,
            self.who_its_for,
            self.whats_different,
            self.what_to_do_next,
        ]
        .iter()
        .filter(|c| **c == Clarity::Clear)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HeroSection {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub cta_text: Option<String>,
    pub social_proof_present: bool,

    pub headline_clarity_score: Score,
    pub cta_clarity_score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SocialProof {
    pub logos_present: bool,
    pub logos_recognizable: bool,
    pub testimonials_present: bool,
    pub testimonials_have_names_titles: bool,
    pub metrics_present: bool,
    pub specific_results: bool,

    pub overall_score: Score,
}

/// Complete homepage assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HomepageAnalysis {
    pub five_second_test: FiveSecondTest,
    pub hero: HeroSection,
    pub social_proof: SocialProof,

    pub information_hierarchy_score: Score,
    pub scannable: bool,
    pub cta_count: u32,
    pub primary_cta_clear: bool,

    // Anti-patterns
    #[serde(default)]
    pub unclear_hero: bool,
    #[serde(default)]
    pub too_many_ctas: bool,
    #[serde(default)]
    pub missing_social_proof: bool,
    #[serde(default)]
    pub wall_of_text: bool,
    #[serde(default)]
    pub stock_photos: bool,

    pub overall_score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clarity_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Clarity::Partial).unwrap(), "\"partial\"");
        assert!(serde_json::from_str::<Clarity>("\"maybe\"").is_err());
    }

    #[test]
    fn five_second_test_counts_clear_answers() {
        let test: FiveSecondTest = serde_json::from_str(
            r#"{
                "what_they_do": "clear",
                "who_its_for": "partial",
                "whats_different": "unclear",
                "what_to_do_next": "clear",
                "passed": false,
                "notes": "Headline is a pun"
            }"#,
        )
        .unwrap();
        assert_eq!(test.clear_count(), 2);
        assert!(!test.passed);
    }

    #[test]
    fn hero_scores_are_range_checked() {
        let json = r#"{
            "headline": "Acme",
            "subheadline": null,
            "cta_text": "Book a demo",
            "social_proof_present": false,
            "headline_clarity_score": 30,
            "cta_clarity_score": 200
        }"#;
        assert!(serde_json::from_str::<HeroSection>(json).is_err());
    }
}
