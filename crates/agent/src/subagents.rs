//! Static specialist records the evaluator can delegate to.

use serde::Serialize;

use pmm_tools::ToolKind;

use crate::prompts::{
    ANTI_PATTERN_DETECTOR_PROMPT, COMPETITIVE_ANALYST_PROMPT, HOMEPAGE_ANALYST_PROMPT,
    ICP_ANALYST_PROMPT, MESSAGING_ANALYST_PROMPT, POSITIONING_ANALYST_PROMPT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubagentSpec {
    pub name: &'static str,
    /// When to delegate to this specialist.
    pub description: &'static str,
    #[serde(skip)]
    pub system_prompt: &'static str,
    pub tools: &'static [ToolKind],
}

pub const POSITIONING_ANALYST: SubagentSpec = SubagentSpec {
    name: "positioning-analyst",
    description: "Deep analysis of positioning strategy: positioning canvas, competitive frame, \
                  target customer specificity, and whether differentiation is meaningful and defensible.",
    system_prompt: POSITIONING_ANALYST_PROMPT,
    tools: &[
        ToolKind::AnalyzePositioning,
        ToolKind::BuildCompetitiveFrame,
        ToolKind::CreatePositioningCanvas,
        ToolKind::GenerateDifferentiationStatements,
        ToolKind::FetchCompetitorHomepage,
    ],
};

pub const MESSAGING_ANALYST: SubagentSpec = SubagentSpec {
    name: "messaging-analyst",
    description: "Deep analysis of messaging: the five-layer hierarchy, messaging house structure, \
                  clarity and specificity, feature-to-benefit translation and rewrites.",
    system_prompt: MESSAGING_ANALYST_PROMPT,
    tools: &[
        ToolKind::AnalyzeMessaging,
        ToolKind::GenerateRewrite,
        ToolKind::DetectAntiPatterns,
    ],
};

pub const HOMEPAGE_ANALYST: SubagentSpec = SubagentSpec {
    name: "homepage-analyst",
    description: "Homepage structure and UX: five-second test, hero effectiveness, \
                  information hierarchy, CTA strategy and social proof.",
    system_prompt: HOMEPAGE_ANALYST_PROMPT,
    tools: &[
        ToolKind::FetchHomepage,
        ToolKind::DetectAntiPatterns,
        ToolKind::GenerateRewrite,
    ],
};

pub const ANTI_PATTERN_DETECTOR: SubagentSpec = SubagentSpec {
    name: "anti-pattern-detector",
    description: "Scans an asset for positioning, messaging, homepage, ICP and GTM anti-patterns.",
    system_prompt: ANTI_PATTERN_DETECTOR_PROMPT,
    tools: &[ToolKind::DetectAntiPatterns, ToolKind::GenerateRewrite],
};

pub const ICP_ANALYST: SubagentSpec = SubagentSpec {
    name: "icp-analyst",
    description: "Ideal customer profile analysis: specificity, personas, situation and trigger, \
                  firmographics, buyer versus user.",
    system_prompt: ICP_ANALYST_PROMPT,
    tools: &[ToolKind::AnalyzeIcp, ToolKind::DetectAntiPatterns],
};

pub const COMPETITIVE_ANALYST: SubagentSpec = SubagentSpec {
    name: "competitive-analyst",
    description: "Competitive analysis: competitor homepages, positioning gaps, differentiation \
                  opportunities and \"Unlike X, we Y\" statements.",
    system_prompt: COMPETITIVE_ANALYST_PROMPT,
    tools: &[
        ToolKind::FetchCompetitorHomepage,
        ToolKind::BuildCompetitiveFrame,
        ToolKind::GenerateDifferentiationStatements,
        ToolKind::AnalyzePositioning,
    ],
};

pub static SPECIALISTS: [SubagentSpec; 6] = [
    POSITIONING_ANALYST,
    MESSAGING_ANALYST,
    HOMEPAGE_ANALYST,
    ANTI_PATTERN_DETECTOR,
    ICP_ANALYST,
    COMPETITIVE_ANALYST,
];

pub fn find(name: &str) -> Option<&'static SubagentSpec> {
    SPECIALISTS.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_specialists_with_unique_names() {
        let mut names: Vec<_> = SPECIALISTS.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn every_specialist_has_prompt_and_tools() {
        for spec in &SPECIALISTS {
            assert!(!spec.system_prompt.is_empty(), "{}", spec.name);
            assert!(!spec.tools.is_empty(), "{}", spec.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        let icp = find("icp-analyst").unwrap();
        assert_eq!(icp.tools, &[ToolKind::AnalyzeIcp, ToolKind::DetectAntiPatterns]);
        assert!(find("pricing-analyst").is_none());
    }
}
