//! Web templates. These only describe what to pull from a page; fetching
//! is left to whatever tooling the model has.

use serde::{Deserialize, Serialize};

use crate::envelope::Template;
use crate::params::ExtractMode;
use crate::registry::ToolKind;

const FETCH_HOMEPAGE: &str = r#"Extract and structure:

## HERO SECTION
- Headline (exact text)
- Subheadline (exact text)
- Primary CTA (button text)
- Secondary CTA (if present)
- Logo/brand name
- Navigation items
- Social proof in hero (logos, stats)

## ABOVE THE FOLD
- All visible text without scrolling
- Visual elements described
- Layout structure

## FULL PAGE SECTIONS (in order)
For each section:
- Section name/purpose
- Headline
- Key copy
- CTAs
- Social proof elements

## SOCIAL PROOF INVENTORY
- Logo bar: [list companies]
- Testimonials: [quote, name, title, company]
- Metrics: [specific numbers claimed]
- Case studies: [titles/summaries]
- Awards/badges: [list]

## CTA INVENTORY
List every CTA on the page:
- Text | Location | Primary/Secondary

## META INFORMATION
- Page title
- Meta description
- Open Graph tags (if visible)"#;

const COMPETITOR: &str = r#"## COMPETITOR POSITIONING
- What do they claim to do?
- Who do they target?
- What's their key differentiator?
- What category do they claim?

## COMPETITOR MESSAGING
- Value proposition (hero)
- Key message pillars
- Proof points used
- CTA strategy

## COMPETITOR WEAKNESSES
- What's unclear?
- What's missing?
- What's overpromised?
- Where are they vulnerable?

## DIFFERENTIATION OPPORTUNITIES
Based on their positioning, you could:
1. Own a different segment
2. Solve a different problem
3. Use a different approach
4. Claim a different attribute

## COMPETITIVE FRAME SUGGESTIONS
"Unlike [competitor], we..."
1.
2.
3."#;

const LANDING_PAGE: &str = r#"## MESSAGE MATCH
- Does the headline match the likely ad/source?
- Is there message continuity?
- Score (0-100):

## SINGLE FOCUS
- Is there ONE clear offer?
- Are there distracting navigation/links?
- Score (0-100):

## VALUE PROPOSITION
- Is the value clear above the fold?
- Is it specific to this offer?
- Score (0-100):

## FORM ANALYSIS (if present)
- Number of fields:
- Friction level:
- Value exchange clear?

## TRUST ELEMENTS
- Social proof present?
- Security indicators?
- Testimonials specific to the offer?

## CTA ANALYSIS
- Primary CTA text:
- Is it benefit-oriented?
- Is there urgency/scarcity?
- Contrast and visibility?

## MOBILE CONSIDERATIONS
- Likely mobile-friendly?
- Key content above the fold on mobile?

## CONVERSION BLOCKERS
List anything that might prevent conversion:
1.
2.
3.

## RECOMMENDATIONS
Priority fixes:
1.
2.
3."#;

const SOCIAL_PROOF: &str = r#"## LOGO BAR
- Companies shown: [list all]
- Recognizable to target? (yes/partial/no)
- Placement on page:

## TESTIMONIALS
For each testimonial:
| Quote | Name | Title | Company | Specific Result? |
|-------|------|-------|---------|------------------|
| | | | | |

## METRICS/STATS
| Claim | Specific? | Believable? |
|-------|-----------|-------------|
| | | |

## CASE STUDIES
- Titles:
- Specific outcomes mentioned:
- Named companies:

## AWARDS/RECOGNITION
- Badges shown:
- Publications mentioned:
- Certifications:

## SOCIAL PROOF ASSESSMENT

### Strengths
- What's working well?

### Gaps
- What's missing?
- What would strengthen trust?

### Recommendations
1.
2.
3.

## SOCIAL PROOF SCORE (0-100)
- Quantity:
- Quality:
- Specificity:
- Relevance:
- **Overall:**"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchHomepageInput {
    pub url: String,
    #[serde(default)]
    pub extract_mode: ExtractMode,
}

impl FetchHomepageInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            extract_mode: ExtractMode::default(),
        }
    }

    pub fn with_extract_mode(mut self, mode: impl Into<ExtractMode>) -> Self {
        self.extract_mode = mode.into();
        self
    }
}

impl Template for FetchHomepageInput {
    const KIND: ToolKind = ToolKind::FetchHomepage;

    fn instructions(&self) -> String {
        format!(
            "Fetch and analyze the homepage at: {url}\n\n{FETCH_HOMEPAGE}\n\n\
             Extract mode: {mode} ({focus})",
            url = self.url,
            mode = self.extract_mode,
            focus = self.extract_mode.focus(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorHomepageInput {
    pub competitor_url: String,
    #[serde(default)]
    pub your_url: Option<String>,
}

impl CompetitorHomepageInput {
    pub fn new(competitor_url: impl Into<String>) -> Self {
        Self {
            competitor_url: competitor_url.into(),
            your_url: None,
        }
    }

    pub fn with_your_url(mut self, url: impl Into<String>) -> Self {
        self.your_url = Some(url.into());
        self
    }
}

impl Template for CompetitorHomepageInput {
    const KIND: ToolKind = ToolKind::FetchCompetitorHomepage;

    fn instructions(&self) -> String {
        let mut text = format!(
            "Analyze competitor homepage: {}\n\n{COMPETITOR}",
            self.competitor_url
        );
        if let Some(yours) = &self.your_url {
            text.push_str(&format!("\n\nCompare against your site: {yours}"));
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingPageInput {
    pub url: String,
    #[serde(default)]
    pub campaign_context: Option<String>,
}

impl LandingPageInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            campaign_context: None,
        }
    }

    pub fn with_campaign_context(mut self, context: impl Into<String>) -> Self {
        self.campaign_context = Some(context.into());
        self
    }
}

impl Template for LandingPageInput {
    const KIND: ToolKind = ToolKind::AnalyzeLandingPage;

    fn instructions(&self) -> String {
        let mut text = format!("Analyze landing page: {}\n\n{LANDING_PAGE}", self.url);
        if let Some(campaign) = &self.campaign_context {
            text.push_str(&format!("\n\nCampaign context: {campaign}"));
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialProofInput {
    pub url: String,
}

impl SocialProofInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Template for SocialProofInput {
    const KIND: ToolKind = ToolKind::ScrapeSocialProof;

    fn instructions(&self) -> String {
        format!("Extract all social proof from: {}\n\n{SOCIAL_PROOF}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_homepage_names_url_and_mode() {
        let envelope = FetchHomepageInput::new("https://acme.example")
            .with_extract_mode("hero_only")
            .render();
        assert_eq!(envelope.task, "fetch_homepage");
        assert!(envelope.instructions.contains("https://acme.example"));
        assert!(envelope.instructions.contains("Just the hero section"));
    }

    #[test]
    fn unknown_extract_mode_falls_back_to_full_page() {
        let envelope = FetchHomepageInput::new("https://acme.example")
            .with_extract_mode("below_fold")
            .render();
        assert!(envelope.instructions.contains("Extract mode: below_fold"));
        assert!(envelope.instructions.contains("unrecognised extract mode"));
        assert_eq!(envelope.to_value().unwrap()["extract_mode"], "below_fold");
    }

    #[test]
    fn competitor_comparison_is_optional() {
        let alone = CompetitorHomepageInput::new("https://rival.example")
            .render();
        assert_eq!(alone.task, "competitor_analysis");
        assert!(!alone.instructions.contains("Compare against your site"));

        let compared = CompetitorHomepageInput::new("https://rival.example")
            .with_your_url("https://acme.example")
            .render();
        assert!(compared
            .instructions
            .contains("Compare against your site: https://acme.example"));
    }

    #[test]
    fn empty_url_still_renders() {
        let envelope = SocialProofInput::new("").render();
        assert_eq!(envelope.task, "social_proof_inventory");
        assert!(envelope.instructions.starts_with("Extract all social proof from: \n"));
    }
}
