//! Positioning canvas: the shape produced by the canvas creation template.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::AlternativeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PositioningApproach {
    CategoryBased,
    UseCaseBased,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PositioningCanvas {
    // 1. Target customer
    pub role_title: String,
    pub company_type: String,
    pub company_size: String,
    pub industry: String,
    pub situation_trigger: String,

    // 2. Competitive alternative
    pub primary_alternative: String,
    pub alternative_type: AlternativeType,

    // 3. Why that falls short
    pub pain_point_1: String,
    pub pain_point_2: String,
    pub pain_point_3: String,

    // 4. Unique approach
    pub key_differentiator: String,
    pub methodology: String,
    pub unique_capability: String,

    // 5. Why that's better
    pub primary_benefit: String,
    pub supporting_benefit: String,
    pub proof_point: String,

    // 6. Strategy
    pub positioning_approach: PositioningApproach,
    pub category_or_use_case: String,

    // 7. Statements
    pub internal_positioning_statement: String,
    pub differentiation_summary: String,
    pub homepage_one_liner: String,

    #[serde(default)]
    pub is_validated: bool,
    #[serde(default)]
    pub validation_notes: Option<String>,
}

impl PositioningCanvas {
    pub fn pain_points(&self) -> [&str; 3] {
        [
            self.pain_point_1.as_str(),
            self.pain_point_2.as_str(),
            self.pain_point_3.as_str(),
        ]
    }
}
