//! Compile-time catalogue of every template, plus name-based dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use pmm_common::{PmmError, Result};

use crate::creation::{
    DifferentiationInput, HomepageWireframeInput, MessagingFrameworkInput,
    PositioningCanvasInput,
};
use crate::envelope::{envelope_turn, Template};
use crate::evaluation::{
    AntiPatternScanInput, CompetitiveFrameInput, CompleteAuditInput, FiveSecondTestInput,
    HomepageStructureInput, IcpInput, MessagingInput, PositioningInput, RewriteInput,
};
use crate::web::{
    CompetitorHomepageInput, FetchHomepageInput, LandingPageInput, SocialProofInput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolGroup {
    Evaluation,
    Web,
    Creation,
}

impl ToolGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolGroup::Evaluation => "evaluation",
            ToolGroup::Web => "web",
            ToolGroup::Creation => "creation",
        }
    }

    pub fn tools(self) -> impl Iterator<Item = ToolKind> {
        ToolKind::ALL.into_iter().filter(move |kind| kind.group() == self)
    }
}

impl fmt::Display for ToolGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    RunFiveSecondTest,
    AnalyzePositioning,
    AnalyzeMessaging,
    AnalyzeHomepageStructure,
    DetectAntiPatterns,
    GenerateRewrite,
    BuildCompetitiveFrame,
    AnalyzeIcp,
    RunCompletePmmAudit,
    FetchHomepage,
    FetchCompetitorHomepage,
    AnalyzeLandingPage,
    ScrapeSocialProof,
    CreatePositioningCanvas,
    CreateMessagingFramework,
    CreateHomepageWireframe,
    GenerateDifferentiationStatements,
}

impl ToolKind {
    /// Registry order: evaluation, web, creation.
    pub const ALL: [ToolKind; 17] = [
        ToolKind::RunFiveSecondTest,
        ToolKind::AnalyzePositioning,
        ToolKind::AnalyzeMessaging,
        ToolKind::AnalyzeHomepageStructure,
        ToolKind::DetectAntiPatterns,
        ToolKind::GenerateRewrite,
        ToolKind::BuildCompetitiveFrame,
        ToolKind::AnalyzeIcp,
        ToolKind::RunCompletePmmAudit,
        ToolKind::FetchHomepage,
        ToolKind::FetchCompetitorHomepage,
        ToolKind::AnalyzeLandingPage,
        ToolKind::ScrapeSocialProof,
        ToolKind::CreatePositioningCanvas,
        ToolKind::CreateMessagingFramework,
        ToolKind::CreateHomepageWireframe,
        ToolKind::GenerateDifferentiationStatements,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::RunFiveSecondTest => "run_five_second_test",
            ToolKind::AnalyzePositioning => "analyze_positioning",
            ToolKind::AnalyzeMessaging => "analyze_messaging",
            ToolKind::AnalyzeHomepageStructure => "analyze_homepage_structure",
            ToolKind::DetectAntiPatterns => "detect_anti_patterns",
            ToolKind::GenerateRewrite => "generate_rewrite",
            ToolKind::BuildCompetitiveFrame => "build_competitive_frame",
            ToolKind::AnalyzeIcp => "analyze_icp",
            ToolKind::RunCompletePmmAudit => "run_complete_pmm_audit",
            ToolKind::FetchHomepage => "fetch_homepage",
            ToolKind::FetchCompetitorHomepage => "fetch_competitor_homepage",
            ToolKind::AnalyzeLandingPage => "analyze_landing_page",
            ToolKind::ScrapeSocialProof => "scrape_social_proof",
            ToolKind::CreatePositioningCanvas => "create_positioning_canvas",
            ToolKind::CreateMessagingFramework => "create_messaging_framework",
            ToolKind::CreateHomepageWireframe => "create_homepage_wireframe",
            ToolKind::GenerateDifferentiationStatements => "generate_differentiation_statements",
        }
    }

    /// Tag written to the envelope's `task` field.
    pub fn task(self) -> &'static str {
        match self {
            ToolKind::RunFiveSecondTest => "five_second_test",
            ToolKind::AnalyzePositioning => "positioning_analysis",
            ToolKind::AnalyzeMessaging => "messaging_analysis",
            ToolKind::AnalyzeHomepageStructure => "homepage_structure_analysis",
            ToolKind::DetectAntiPatterns => "anti_pattern_detection",
            ToolKind::GenerateRewrite => "copy_rewrite",
            ToolKind::BuildCompetitiveFrame => "competitive_frame_building",
            ToolKind::AnalyzeIcp => "icp_analysis",
            ToolKind::RunCompletePmmAudit => "complete_pmm_audit",
            ToolKind::FetchHomepage => "fetch_homepage",
            ToolKind::FetchCompetitorHomepage => "competitor_analysis",
            ToolKind::AnalyzeLandingPage => "landing_page_analysis",
            ToolKind::ScrapeSocialProof => "social_proof_inventory",
            ToolKind::CreatePositioningCanvas => "create_positioning_canvas",
            ToolKind::CreateMessagingFramework => "create_messaging_framework",
            ToolKind::CreateHomepageWireframe => "create_homepage_wireframe",
            ToolKind::GenerateDifferentiationStatements => "generate_differentiation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolKind::RunFiveSecondTest => {
                "Check whether a visitor grasps what, who, why different and what next within five seconds"
            }
            ToolKind::AnalyzePositioning => {
                "Score target customer, competitive frame, differentiation and problem clarity"
            }
            ToolKind::AnalyzeMessaging => "Assess the five-layer messaging hierarchy",
            ToolKind::AnalyzeHomepageStructure => {
                "Review hero, information hierarchy, CTA strategy and social proof"
            }
            ToolKind::DetectAntiPatterns => "Scan for common PMM anti-patterns by priority",
            ToolKind::GenerateRewrite => "Rewrite copy to fix a specific issue type",
            ToolKind::BuildCompetitiveFrame => {
                "Identify what the product should be positioned against"
            }
            ToolKind::AnalyzeIcp => "Judge how specifically an asset targets its ideal customer",
            ToolKind::RunCompletePmmAudit => {
                "Full audit with every analysis and severity-bucketed issues"
            }
            ToolKind::FetchHomepage => "Extract a homepage's content structured for PMM analysis",
            ToolKind::FetchCompetitorHomepage => {
                "Analyze a competitor homepage for positioning gaps"
            }
            ToolKind::AnalyzeLandingPage => "Review a landing page for conversion",
            ToolKind::ScrapeSocialProof => "Inventory and assess all social proof on a page",
            ToolKind::CreatePositioningCanvas => "Build a complete positioning canvas",
            ToolKind::CreateMessagingFramework => {
                "Turn a positioning canvas into a messaging house"
            }
            ToolKind::CreateHomepageWireframe => {
                "Translate a messaging framework into section-by-section homepage copy"
            }
            ToolKind::GenerateDifferentiationStatements => {
                "Write \"Unlike X, we Y\" statements and positioning angles"
            }
        }
    }

    pub fn group(self) -> ToolGroup {
        match self {
            ToolKind::RunFiveSecondTest
            | ToolKind::AnalyzePositioning
            | ToolKind::AnalyzeMessaging
            | ToolKind::AnalyzeHomepageStructure
            | ToolKind::DetectAntiPatterns
            | ToolKind::GenerateRewrite
            | ToolKind::BuildCompetitiveFrame
            | ToolKind::AnalyzeIcp
            | ToolKind::RunCompletePmmAudit => ToolGroup::Evaluation,
            ToolKind::FetchHomepage
            | ToolKind::FetchCompetitorHomepage
            | ToolKind::AnalyzeLandingPage
            | ToolKind::ScrapeSocialProof => ToolGroup::Web,
            ToolKind::CreatePositioningCanvas
            | ToolKind::CreateMessagingFramework
            | ToolKind::CreateHomepageWireframe
            | ToolKind::GenerateDifferentiationStatements => ToolGroup::Creation,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders the named template from JSON arguments.
pub fn render(name: &str, args: Value) -> Result<Value> {
    let kind = ToolKind::from_name(name).ok_or_else(|| PmmError::UnknownTool(name.to_string()))?;
    render_kind(kind, args)
}

pub fn render_kind(kind: ToolKind, args: Value) -> Result<Value> {
    match kind {
        ToolKind::RunFiveSecondTest => render_as::<FiveSecondTestInput>(args),
        ToolKind::AnalyzePositioning => render_as::<PositioningInput>(args),
        ToolKind::AnalyzeMessaging => render_as::<MessagingInput>(args),
        ToolKind::AnalyzeHomepageStructure => render_as::<HomepageStructureInput>(args),
        ToolKind::DetectAntiPatterns => render_as::<AntiPatternScanInput>(args),
        ToolKind::GenerateRewrite => render_as::<RewriteInput>(args),
        ToolKind::BuildCompetitiveFrame => render_as::<CompetitiveFrameInput>(args),
        ToolKind::AnalyzeIcp => render_as::<IcpInput>(args),
        ToolKind::RunCompletePmmAudit => render_as::<CompleteAuditInput>(args),
        ToolKind::FetchHomepage => render_as::<FetchHomepageInput>(args),
        ToolKind::FetchCompetitorHomepage => render_as::<CompetitorHomepageInput>(args),
        ToolKind::AnalyzeLandingPage => render_as::<LandingPageInput>(args),
        ToolKind::ScrapeSocialProof => render_as::<SocialProofInput>(args),
        ToolKind::CreatePositioningCanvas => render_as::<PositioningCanvasInput>(args),
        ToolKind::CreateMessagingFramework => render_as::<MessagingFrameworkInput>(args),
        ToolKind::CreateHomepageWireframe => render_as::<HomepageWireframeInput>(args),
        ToolKind::GenerateDifferentiationStatements => render_as::<DifferentiationInput>(args),
    }
}

/// Renders a template and formats the envelope as a model turn.
pub fn render_turn(kind: ToolKind, args: Value) -> Result<String> {
    envelope_turn(&render_kind(kind, args)?)
}

fn render_as<T: Template>(args: Value) -> Result<Value> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    let input: T = serde_json::from_value(args).map_err(argument_error)?;
    input.render().to_value()
}

/// Maps serde's "missing field `x`" onto [`PmmError::MissingInput`].
fn argument_error(err: serde_json::Error) -> PmmError {
    let message = err.to_string();
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
        .map(|field| PmmError::MissingInput(field.to_string()))
        .unwrap_or(PmmError::Serialization(err))
}
