//! Positioning records, following the positioning canvas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Score;

/// What the product is positioned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeType {
    DirectCompetitor,
    ManualProcess,
    StatusQuo,
    Homegrown,
    Spreadsheets,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompetitiveAlternative {
    pub alternative_type: AlternativeType,
    /// Name of the competitive alternative
    pub name: String,
    /// Why the alternative falls short
    pub pain_points: Vec<String>,
    /// Explicitly stated in the asset, or inferred
    pub is_explicit: bool,
}

/// Who the positioning is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TargetCustomer {
    pub role_title: Option<String>,
    /// B2B SaaS, agency, ...
    pub company_type: Option<String>,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    /// What triggers them to buy
    pub situation_trigger: Option<String>,
    /// How narrow the targeting is
    pub specificity_score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Differentiation {
    pub unique_approach: Option<String>,
    pub key_capability: Option<String>,
    pub is_defensible: bool,
    pub is_meaningful: bool,
    pub could_competitor_say_same: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    CategoryBased,
    UseCaseBased,
    Unclear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PositioningStrategy {
    pub strategy_type: StrategyType,
    pub category_or_use_case: Option<String>,
    pub competitive_frame_score: Score,
    pub target_audience_score: Score,
    pub differentiation_score: Score,
    pub problem_clarity_score: Score,
}

/// Complete positioning assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PositioningAnalysis {
    pub target_customer: TargetCustomer,
    pub competitive_alternative: Option<CompetitiveAlternative>,
    pub differentiation: Differentiation,
    pub strategy: PositioningStrategy,

    pub overall_score: Score,

    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,

    // Anti-patterns
    #[serde(default)]
    pub refusing_to_pigeonhole: bool,
    #[serde(default)]
    pub positioning_on_outcomes_only: bool,
    #[serde(default)]
    pub platform_before_point_solution: bool,
    #[serde(default)]
    pub no_competitive_frame: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn analysis_json(overall: i64) -> serde_json::Value {
        json!({
            "target_customer": {
                "role_title": "RevOps lead",
                "company_type": "B2B SaaS",
                "specificity_score": 70
            },
            "competitive_alternative": {
                "alternative_type": "spreadsheets",
                "name": "Excel forecasting",
                "pain_points": ["manual", "error-prone"],
                "is_explicit": false
            },
            "differentiation": {
                "unique_approach": "pipeline-native forecasting",
                "is_defensible": true,
                "is_meaningful": true,
                "could_competitor_say_same": false
            },
            "strategy": {
                "strategy_type": "use_case_based",
                "competitive_frame_score": 40,
                "target_audience_score": 70,
                "differentiation_score": 55,
                "problem_clarity_score": 60
            },
            "overall_score": overall
        })
    }

    #[test]
    fn parses_with_defaults() {
        let analysis: PositioningAnalysis = serde_json::from_value(analysis_json(58)).unwrap();
        assert_eq!(analysis.overall_score.value(), 58);
        assert!(analysis.strengths.is_empty());
        assert!(!analysis.no_competitive_frame);
        assert_eq!(analysis.target_customer.industry, None);
        let alt = analysis.competitive_alternative.unwrap();
        assert_eq!(alt.alternative_type, AlternativeType::Spreadsheets);
        assert_eq!(analysis.strategy.strategy_type, StrategyType::UseCaseBased);
    }

    #[test]
    fn rejects_out_of_range_overall_score() {
        assert!(serde_json::from_value::<PositioningAnalysis>(analysis_json(101)).is_err());
    }

    #[test]
    fn rejects_unknown_alternative_type() {
        let mut value = analysis_json(50);
        value["competitive_alternative"]["alternative_type"] = json!("vibes");
        assert!(serde_json::from_value::<PositioningAnalysis>(value).is_err());
    }
}
