//! Evaluation data model.
//!
//! Records are passive values created per request and never mutated. They
//! constrain what a model response must contain; validation is limited to
//! types and score ranges.

pub mod canvas;
pub mod homepage;
pub mod issue;
pub mod messaging;
pub mod positioning;

pub use canvas::{PositioningApproach, PositioningCanvas};
pub use homepage::{Clarity, FiveSecondTest, HeroSection, HomepageAnalysis, SocialProof};
pub use issue::{EvaluatedAssetType, IssueCategory, PmmEvaluationResult, PmmIssue};
pub use messaging::{MessagingAnalysis, MessagingHouse, MessagingLayer, MessagingLayerName};
pub use positioning::{
    AlternativeType, CompetitiveAlternative, Differentiation, PositioningAnalysis,
    PositioningStrategy, StrategyType, TargetCustomer,
};

/// JSON Schema for [`PmmEvaluationResult`].
pub fn evaluation_result_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(PmmEvaluationResult))
        .unwrap_or(serde_json::Value::Null)
}

/// JSON Schema for [`PositioningCanvas`].
pub fn positioning_canvas_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(PositioningCanvas))
        .unwrap_or(serde_json::Value::Null)
}
