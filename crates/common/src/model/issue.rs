//! Issues and the top-level audit result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{HomepageAnalysis, MessagingAnalysis, PositioningAnalysis};
use crate::{Result, Score, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Positioning,
    Messaging,
    Homepage,
    Icp,
    Gtm,
}

/// A specific problem found during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PmmIssue {
    pub category: IssueCategory,
    pub severity: Severity,
    /// What's wrong
    pub issue: String,
    /// Impact of this issue
    pub why_it_matters: String,
    /// How to fix it
    pub recommendation: String,
    /// Suggested new copy, for copy issues
    pub suggested_rewrite: Option<String>,
    /// Where in the asset this appears
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatedAssetType {
    Homepage,
    LandingPage,
    SalesDeck,
    Email,
    Ad,
    Other,
}

/// Complete audit result.
///
/// The four issue buckets are filled by the model. Bucket membership is
/// not checked against each issue's `severity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PmmEvaluationResult {
    pub asset_type: EvaluatedAssetType,
    #[serde(default)]
    pub asset_url: Option<String>,

    pub positioning: PositioningAnalysis,
    pub messaging: MessagingAnalysis,
    #[serde(default)]
    pub homepage: Option<HomepageAnalysis>,

    #[serde(default)]
    pub critical_issues: Vec<PmmIssue>,
    #[serde(default)]
    pub high_priority_issues: Vec<PmmIssue>,
    #[serde(default)]
    pub medium_issues: Vec<PmmIssue>,
    #[serde(default)]
    pub low_issues: Vec<PmmIssue>,

    #[serde(default)]
    pub strengths: Vec<String>,

    pub overall_score: Score,
    #[serde(default)]
    pub ready_to_ship: bool,
    /// 2-3 sentence summary
    pub executive_summary: String,

    #[serde(default)]
    pub anti_patterns_detected: Vec<String>,
}

impl PmmEvaluationResult {
    /// Parse a model response. Only types and score ranges are checked.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Buckets in priority order, critical first, as stored.
    pub fn issues_by_severity(&self) -> impl Iterator<Item = (Severity, &[PmmIssue])> {
        [
            (Severity::Critical, self.critical_issues.as_slice()),
            (Severity::High, self.high_priority_issues.as_slice()),
            (Severity::Medium, self.medium_issues.as_slice()),
            (Severity::Low, self.low_issues.as_slice()),
        ]
        .into_iter()
    }

    pub fn issue_count(&self) -> usize {
        self.issues_by_severity().map(|(_, issues)| issues.len()).sum()
    }
}
