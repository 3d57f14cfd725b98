//! Evaluation templates: score an existing marketing asset.

use serde::{Deserialize, Serialize};

use crate::envelope::{provided_list, with_context, Template};
use crate::params::{AssetType, IssueType, ScanScope};
use crate::registry::ToolKind;

const FIVE_SECOND_TEST: &str = r#"Analyze this asset and answer:

1. **What do they do?** (clear/partial/unclear)
   - Can you tell what the product/service is within 5 seconds?
   - Quote the text that tells you (or note its absence)

2. **Who is it for?** (clear/partial/unclear)
   - Is the target audience specific or generic?
   - Quote any persona/audience indicators

3. **What makes it different?** (clear/partial/unclear)
   - Is there a unique value proposition?
   - What's the competitive alternative?

4. **What to do next?** (clear/partial/unclear)
   - Is there a clear call-to-action?
   - Is there only ONE primary action?

**Final verdict:** PASS (3-4 clear), PARTIAL (1-2 clear), FAIL (0 clear)

Provide specific evidence for each answer."#;

const POSITIONING: &str = r#"Analyze positioning using the Positioning Canvas:

## 1. TARGET CUSTOMER
- Role/Title: (identified or missing?)
- Company Type: (B2B, B2C, size, stage?)
- Industry: (specific or "everyone"?)
- Situation/Trigger: (what makes them buy now?)
- **Specificity Score (0-100):** How narrow is the targeting?

## 2. COMPETITIVE ALTERNATIVE
- Type: (direct competitor / manual process / status quo / homegrown / spreadsheets)
- Named Alternative: (explicit or implied?)
- Is there a "unlike X" or "instead of Y"?
- **Frame Score (0-100):** How clear is what they replace?

## 3. DIFFERENTIATION
- Unique Approach: (what do they do differently?)
- Key Capability: (what can they do that others can't?)
- Is it defensible? (hard to copy)
- Is it meaningful? (customers care)
- Could a competitor say the same thing?
- **Differentiation Score (0-100)**

## 4. PROBLEM/PAIN
- Is there a specific problem stated?
- Is it the customer's problem or the company's narrative?
- Is it specific or generic ("increase revenue")?
- **Problem Clarity Score (0-100)**

## ANTI-PATTERNS DETECTED
- [ ] Refusing to Pigeonhole (serving everyone)
- [ ] Positioning on Outcomes Only (grow revenue)
- [ ] Platform Before Point Solution
- [ ] No Competitive Frame

## OVERALL POSITIONING SCORE (0-100)
- Weighted average of components
- List top 3 strengths
- List top 3 weaknesses"#;

const MESSAGING: &str = r#"Analyze messaging using the 5-layer hierarchy:

## LAYER 1: POSITIONING STATEMENT
- Can you infer: "For [target] who [situation], [product] is a [category] that [benefit]. Unlike [alternative], we [differentiator]"?
- Score (0-100):

## LAYER 2: VALUE PROPOSITION
- Is there a clear value prop in the hero?
- Components present: Capability / Audience / Benefit / Differentiator
- Quote the value proposition if present
- Score (0-100):

## LAYER 3: KEY MESSAGES (Pillars)
- How many key messages/pillars?
- Are they benefit-oriented or feature lists?
- Quote each pillar
- Score (0-100):

## LAYER 4: PROOF POINTS
- Customer quotes present?
- Metrics/results with numbers?
- Logos present?
- Awards/recognition?
- Score (0-100):

## LAYER 5: MICRO-COPY
- CTA button text (benefit-oriented?)
- Headlines (clear or clever?)
- Consistent terminology?
- Score (0-100):

## MESSAGING HOUSE ASSESSMENT
```
Value Prop: [quote]
├── Pillar 1: [quote]
├── Pillar 2: [quote]
├── Pillar 3: [quote]
└── Foundation: [target audience]
```

## CLARITY TESTS
- **5-Second Clarity (0-100):** Immediate understanding?
- **Specificity (0-100):** Numbers, metrics, concrete outcomes?
- **Benefit-Orientation (0-100):** Features → benefits?

## ANTI-PATTERNS DETECTED
- [ ] Feature Dumping
- [ ] Jargon/Buzzwords (list them)
- [ ] Clever Over Clear
- [ ] Saying Everything
- [ ] No Specificity

## OVERALL MESSAGING SCORE (0-100)"#;

const HOMEPAGE_STRUCTURE: &str = r#"Analyze homepage structure:

## HERO SECTION
- **Headline:** Quote it. Is it clear or clever?
- **Subheadline:** Does it support or repeat?
- **Primary CTA:** Text and placement
- **Social Proof in Hero:** Logos visible?
- **Headline Clarity Score (0-100)**
- **CTA Clarity Score (0-100)**

## INFORMATION HIERARCHY
- What's above the fold?
- Is the most important info first?
- Is the page scannable?
- Score (0-100):

## CTA STRATEGY
- Count of CTAs above the fold:
- Primary CTA obvious? (yes/no)
- Secondary path for not-ready visitors?
- **Too many CTAs?** (>3 = problem)

## SOCIAL PROOF
- Logos present? Recognizable?
- Testimonials present? Names/titles included?
- Metrics present? Specific results?
- Score (0-100):

## ANTI-PATTERNS DETECTED
- [ ] Unclear Hero
- [ ] Too Many CTAs
- [ ] Missing Social Proof
- [ ] Wall of Text
- [ ] Stock Photos

## SECTION-BY-SECTION BREAKDOWN
List each section with:
- Purpose
- Effectiveness (0-100)
- Issues

## OVERALL HOMEPAGE SCORE (0-100)"#;

const ANTI_PATTERNS: &str = r#"Scan for PMM anti-patterns:

## CRITICAL (Must Fix Immediately)

### 1. Refusing to Pigeonhole
- [ ] DETECTED? Evidence:
- Specific text:
- Impact:
- Fix:

### 2. Positioning on Outcomes Only
- [ ] DETECTED? Evidence:
- Specific text:
- Impact:
- Fix:

### 3. No Competitive Frame
- [ ] DETECTED? Evidence:
- Missing elements:
- Fix:

### 4. Unclear Hero (if homepage)
- [ ] DETECTED? Evidence:
- Specific text:
- Fix:

## HIGH PRIORITY (Should Fix)

### 5. Feature Dumping
- [ ] DETECTED?
- Feature list without benefits:
- Fix: "So what?" translation

### 6. Jargon/Buzzwords
- [ ] DETECTED?
- List all buzzwords found:
- Plain English alternatives:

### 7. Clever Over Clear
- [ ] DETECTED?
- Clever phrase:
- Clear alternative:

### 8. Too Many CTAs (if homepage)
- [ ] DETECTED?
- Count:
- Primary should be:

### 9. Missing Social Proof
- [ ] DETECTED?
- What's missing:
- Recommendation:

### 10. No Specificity
- [ ] DETECTED?
- Generic claims:
- Specific alternatives:

## MEDIUM PRIORITY

### 11. Platform Before Point Solution
- [ ] DETECTED?

### 12. Saying Everything
- [ ] DETECTED?
- Count of use cases/features:

### 13. Too Broad ICP
- [ ] DETECTED?

### 14. Wall of Text
- [ ] DETECTED?

## SUMMARY
- Critical issues: [count]
- High priority: [count]
- Medium: [count]
- Top 3 to fix first:"#;

const REWRITE_DELIVERABLES: &str = r#"Provide:
1. **Analysis:** Why the original fails
2. **Rewrite Option 1:** Conservative improvement
3. **Rewrite Option 2:** Bold improvement
4. **Rewrite Option 3:** If a persona is specified, a persona-specific version
5. **Why these work:** Explanation of the improvements"#;

const COMPETITIVE_FRAME: &str = r#"Build competitive frame:

## COMPETITIVE ALTERNATIVES ANALYSIS

### Option 1: Direct Competitor
- Who is the most obvious competitor?
- What's their weakness?
- Frame: "Unlike [competitor], we..."

### Option 2: Manual Process
- What do people do without this product?
- What's painful about it?
- Frame: "Instead of [manual process], you can..."

### Option 3: Status Quo
- What happens if they do nothing?
- What's the cost of inaction?
- Frame: "Stop [painful status quo]. Start..."

### Option 4: Homegrown Solution
- Do teams build this internally?
- Why does that fail?
- Frame: "Replace your [homegrown solution] with..."

## RECOMMENDED FRAME
- Primary alternative:
- Why this frame:
- Positioning statement using this frame:

## DIFFERENTIATION STATEMENTS
Generate 3 "Unlike X, we Y" statements:
1.
2.
3.

## VALIDATION QUESTIONS
To validate this frame, ask customers:
1.
2.
3."#;

const ICP: &str = r#"Analyze ICP definition:

## FIRMOGRAPHICS IDENTIFIED
- Company Size: (specific or "all sizes"?)
- Industry: (specific or "any industry"?)
- Geography: (specific or global?)
- Tech Stack: (mentioned or not?)
- Specificity Score (0-100):

## SITUATION/TRIGGER
- What triggers the buy? (identified or missing?)
- Is there urgency? (why now?)
- Score (0-100):

## PAIN POINTS
- Specific pain identified?
- Cost of not solving?
- Score (0-100):

## PERSONA CLARITY
- Role/title specific?
- Buyer vs. user distinction?
- How many personas implied?
- Score (0-100):

## ANTI-PATTERNS
- [ ] Too Broad ICP
- [ ] Aspirational ICP (dream vs. actual customers)
- [ ] Demographic-Only (no situation/trigger)
- [ ] Too Many Personas

## INFERRED ICP
Based on the asset, the implied ICP is:
- Role:
- Company:
- Situation:
- Pain:

## RECOMMENDATIONS
- Is this specific enough to execute?
- What should be narrowed?
- What's missing?

## ICP CLARITY SCORE (0-100)"#;

const COMPLETE_AUDIT: &str = r#"Run complete PMM audit:

# PMM AUDIT REPORT

## EXECUTIVE SUMMARY
(2-3 sentences on overall state)

## 1. 5-SECOND TEST
- What they do: clear/partial/unclear
- Who it's for: clear/partial/unclear
- What's different: clear/partial/unclear
- What to do next: clear/partial/unclear
- **VERDICT:** PASS/PARTIAL/FAIL

## 2. POSITIONING ANALYSIS
| Element | Score | Notes |
|---------|-------|-------|
| Competitive Frame | /100 | |
| Target Audience | /100 | |
| Differentiation | /100 | |
| Problem Clarity | /100 | |
| **OVERALL** | /100 | |

## 3. MESSAGING ANALYSIS
| Layer | Present | Score | Issues |
|-------|---------|-------|--------|
| Positioning Statement | Y/N | /100 | |
| Value Proposition | Y/N | /100 | |
| Key Messages | Y/N | /100 | |
| Proof Points | Y/N | /100 | |
| Micro-Copy | Y/N | /100 | |
| **OVERALL** | | /100 | |

## 4. HOMEPAGE STRUCTURE (if applicable)
| Element | Score | Issues |
|---------|-------|--------|
| Hero Clarity | /100 | |
| CTA Strategy | /100 | |
| Social Proof | /100 | |
| Information Hierarchy | /100 | |
| **OVERALL** | /100 | |

## 5. ANTI-PATTERNS DETECTED
### Critical (Must Fix)
1.
2.

### High Priority (Should Fix)
1.
2.

### Medium (Consider)
1.

## 6. ICP CLARITY
- Specificity Score: /100
- Issues:

## PRIORITIZED ISSUES

### Critical (Fix This Week)
| Issue | Location | Impact | Recommendation |
|-------|----------|--------|----------------|
| | | | |

### High Priority (Fix This Month)
| Issue | Location | Impact | Recommendation |
|-------|----------|--------|----------------|
| | | | |

### Nice to Have
| Issue | Location | Impact | Recommendation |
|-------|----------|--------|----------------|
| | | | |

## WHAT'S WORKING
1.
2.
3.

## KEY REWRITES NEEDED

**Current:** "..."
**Suggested:** "..."
**Why:** ...

(Repeat for the top 3 copy issues)

## OVERALL SCORES
| Dimension | Score |
|-----------|-------|
| Positioning | /100 |
| Messaging | /100 |
| Homepage UX | /100 |
| ICP Clarity | /100 |
| **OVERALL PMM SCORE** | /100 |

## READY TO SHIP?
[ ] YES - Minor polish only
[ ] NEEDS WORK - Significant improvements needed
[ ] NO - Critical issues must be addressed

## NEXT STEPS
1.
2.
3."#;

/// Four-question comprehension check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiveSecondTestInput {
    pub asset_content: String,
    #[serde(default)]
    pub asset_type: AssetType,
}

impl FiveSecondTestInput {
    pub fn new(asset_content: impl Into<String>) -> Self {
        Self {
            asset_content: asset_content.into(),
            asset_type: AssetType::default(),
        }
    }

    pub fn with_asset_type(mut self, asset_type: impl Into<AssetType>) -> Self {
        self.asset_type = asset_type.into();
        self
    }
}

impl Template for FiveSecondTestInput {
    const KIND: ToolKind = ToolKind::RunFiveSecondTest;

    fn instructions(&self) -> String {
        format!("{}\n\n{FIVE_SECOND_TEST}", self.asset_type.guidance())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositioningInput {
    pub asset_content: String,
    #[serde(default)]
    pub company_context: Option<String>,
}

impl PositioningInput {
    pub fn new(asset_content: impl Into<String>) -> Self {
        Self {
            asset_content: asset_content.into(),
            company_context: None,
        }
    }

    pub fn with_company_context(mut self, context: impl Into<String>) -> Self {
        self.company_context = Some(context.into());
        self
    }
}

impl Template for PositioningInput {
    const KIND: ToolKind = ToolKind::AnalyzePositioning;

    fn instructions(&self) -> String {
        with_context(
            POSITIONING,
            &[("Company context", self.company_context.clone())],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagingInput {
    pub asset_content: String,
    #[serde(default)]
    pub target_persona: Option<String>,
}

impl MessagingInput {
    pub fn new(asset_content: impl Into<String>) -> Self {
        Self {
            asset_content: asset_content.into(),
            target_persona: None,
        }
    }

    pub fn with_target_persona(mut self, persona: impl Into<String>) -> Self {
        self.target_persona = Some(persona.into());
        self
    }
}

impl Template for MessagingInput {
    const KIND: ToolKind = ToolKind::AnalyzeMessaging;

    fn instructions(&self) -> String {
        with_context(
            MESSAGING,
            &[("Evaluate for persona", self.target_persona.clone())],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomepageStructureInput {
    pub asset_content: String,
    #[serde(default)]
    pub include_screenshots: bool,
}

impl HomepageStructureInput {
    pub fn new(asset_content: impl Into<String>) -> Self {
        Self {
            asset_content: asset_content.into(),
            include_screenshots: false,
        }
    }
}

impl Template for HomepageStructureInput {
    const KIND: ToolKind = ToolKind::AnalyzeHomepageStructure;

    fn instructions(&self) -> String {
        if self.include_screenshots {
            format!(
                "{HOMEPAGE_STRUCTURE}\n\nScreenshots are included: also assess visual hierarchy, imagery and whitespace."
            )
        } else {
            HOMEPAGE_STRUCTURE.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntiPatternScanInput {
    pub asset_content: String,
    #[serde(default)]
    pub asset_type: ScanScope,
}

impl AntiPatternScanInput {
    pub fn new(asset_content: impl Into<String>) -> Self {
        Self {
            asset_content: asset_content.into(),
            asset_type: ScanScope::default(),
        }
    }

    pub fn with_asset_type(mut self, asset_type: impl Into<ScanScope>) -> Self {
        self.asset_type = asset_type.into();
        self
    }
}

impl Template for AntiPatternScanInput {
    const KIND: ToolKind = ToolKind::DetectAntiPatterns;

    fn instructions(&self) -> String {
        format!("{}\n\n{ANTI_PATTERNS}", self.asset_type.guidance())
    }
}

/// Targeted rewrite of a piece of copy for one issue type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteInput {
    pub original_copy: String,
    pub issue_type: IssueType,
    #[serde(default)]
    pub target_persona: Option<String>,
    #[serde(default)]
    pub competitive_alternative: Option<String>,
}

impl RewriteInput {
    pub fn new(original_copy: impl Into<String>, issue_type: impl Into<IssueType>) -> Self {
        Self {
            original_copy: original_copy.into(),
            issue_type: issue_type.into(),
            target_persona: None,
            competitive_alternative: None,
        }
    }

    pub fn with_target_persona(mut self, persona: impl Into<String>) -> Self {
        self.target_persona = Some(persona.into());
        self
    }

    pub fn with_competitive_alternative(mut self, alternative: impl Into<String>) -> Self {
        self.competitive_alternative = Some(alternative.into());
        self
    }
}

impl Template for RewriteInput {
    const KIND: ToolKind = ToolKind::GenerateRewrite;

    fn instructions(&self) -> String {
        let issue = &self.issue_type;
        let persona = self.target_persona.as_deref().unwrap_or("Not specified");
        let alternative = self
            .competitive_alternative
            .as_deref()
            .unwrap_or("Not specified");

        format!(
            "Rewrite this copy to fix: {issue}\n\n\
             **Original:**\n{original}\n\n\
             **Issue:** {issue}\n\
             **Fix approach:** {fix}\n\n\
             **Target persona:** {persona}\n\
             **Competitive alternative:** {alternative}\n\n\
             {REWRITE_DELIVERABLES}",
            original = self.original_copy,
            fix = issue.fix_approach(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveFrameInput {
    pub product_description: String,
    #[serde(default)]
    pub known_competitors: Option<Vec<String>>,
    #[serde(default)]
    pub current_positioning: Option<String>,
}

impl CompetitiveFrameInput {
    pub fn new(product_description: impl Into<String>) -> Self {
        Self {
            product_description: product_description.into(),
            known_competitors: None,
            current_positioning: None,
        }
    }

    pub fn with_known_competitors(mut self, competitors: Vec<String>) -> Self {
        self.known_competitors = Some(competitors);
        self
    }

    pub fn with_current_positioning(mut self, positioning: impl Into<String>) -> Self {
        self.current_positioning = Some(positioning.into());
        self
    }
}

impl Template for CompetitiveFrameInput {
    const KIND: ToolKind = ToolKind::BuildCompetitiveFrame;

    fn instructions(&self) -> String {
        with_context(
            COMPETITIVE_FRAME,
            &[
                ("Known competitors", provided_list(&self.known_competitors)),
                ("Current positioning", self.current_positioning.clone()),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcpInput {
    pub asset_content: String,
    #[serde(default)]
    pub additional_context: Option<String>,
}

impl IcpInput {
    pub fn new(asset_content: impl Into<String>) -> Self {
        Self {
            asset_content: asset_content.into(),
            additional_context: None,
        }
    }

    pub fn with_additional_context(mut self, context: impl Into<String>) -> Self {
        self.additional_context = Some(context.into());
        self
    }
}

impl Template for IcpInput {
    const KIND: ToolKind = ToolKind::AnalyzeIcp;

    fn instructions(&self) -> String {
        with_context(ICP, &[("Additional context", self.additional_context.clone())])
    }
}

/// Every sub-analysis in one pass, with issues bucketed by severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteAuditInput {
    pub asset_content: String,
    #[serde(default)]
    pub asset_type: AssetType,
    #[serde(default)]
    pub asset_url: Option<String>,
    #[serde(default)]
    pub company_context: Option<String>,
}

impl CompleteAuditInput {
    pub fn new(asset_content: impl Into<String>) -> Self {
        Self {
            asset_content: asset_content.into(),
            asset_type: AssetType::default(),
            asset_url: None,
            company_context: None,
        }
    }

    pub fn with_asset_type(mut self, asset_type: impl Into<AssetType>) -> Self {
        self.asset_type = asset_type.into();
        self
    }

    pub fn with_asset_url(mut self, url: impl Into<String>) -> Self {
        self.asset_url = Some(url.into());
        self
    }

    pub fn with_company_context(mut self, context: impl Into<String>) -> Self {
        self.company_context = Some(context.into());
        self
    }
}

impl Template for CompleteAuditInput {
    const KIND: ToolKind = ToolKind::RunCompletePmmAudit;

    fn instructions(&self) -> String {
        let mut body = format!("{}\n\n{COMPLETE_AUDIT}", self.asset_type.guidance());
        if !self.asset_type.is_homepage() {
            body.push_str("\n\nSkip section 4 unless the asset has a homepage-like structure.");
        }
        with_context(
            &body,
            &[
                ("Asset URL", self.asset_url.clone()),
                ("Company context", self.company_context.clone()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_second_test_asks_the_four_questions() {
        let envelope = FiveSecondTestInput::new("Acme: project management for remote teams")
            .render();
        assert_eq!(envelope.task, "five_second_test");
        for question in [
            "What do they do?",
            "Who is it for?",
            "What makes it different?",
            "What to do next?",
        ] {
            assert!(envelope.instructions.contains(question), "{question}");
        }
        assert_eq!(envelope.input.asset_type, AssetType::Homepage);
    }

    #[test]
    fn blank_asset_content_is_accepted() {
        let envelope = PositioningInput::new("  ").render();
        assert_eq!(envelope.input.asset_content, "  ");
        assert!(!envelope.instructions.is_empty());
    }

    #[test]
    fn positioning_includes_company_context() {
        let envelope = PositioningInput::new("We help teams ship")
            .with_company_context("Series A, 40 employees")
            .render();
        assert_eq!(envelope.task, "positioning_analysis");
        assert!(envelope.instructions.contains("Series A, 40 employees"));
    }

    #[test]
    fn rewrite_uses_issue_specific_fix() {
        let envelope = RewriteInput::new("Synergize your workflows", "jargon_buzzwords")
            .with_target_persona("VP Engineering")
            .render();
        assert_eq!(envelope.task, "copy_rewrite");
        assert!(envelope
            .instructions
            .contains("Replace all jargon with customer language"));
        assert!(envelope.instructions.contains("VP Engineering"));
        assert!(envelope
            .instructions
            .contains("**Competitive alternative:** Not specified"));
    }

    #[test]
    fn rewrite_with_unknown_issue_falls_back() {
        let envelope = RewriteInput::new("Buy now", "too_salesy").render();
        assert!(envelope
            .instructions
            .contains("**Fix approach:** Improve clarity and specificity"));
        let echoed = envelope.to_value().unwrap();
        assert_eq!(echoed["issue_type"], "too_salesy");
    }

    #[test]
    fn competitive_frame_lists_competitors() {
        let envelope = CompetitiveFrameInput::new("Invoice automation")
            .with_known_competitors(vec!["Bill.com".into(), "spreadsheets".into()])
            .render();
        assert!(envelope.instructions.contains("Bill.com"));
        assert!(envelope.instructions.contains("spreadsheets"));
    }

    #[test]
    fn audit_buckets_issues_by_severity() {
        let envelope = CompleteAuditInput::new("<h1>Acme</h1>")
            .with_asset_url("https://acme.example")
            .render();
        let text = &envelope.instructions;
        assert!(text.contains("### Critical (Fix This Week)"));
        assert!(text.contains("### High Priority (Fix This Month)"));
        assert!(text.contains("### Nice to Have"));
        assert!(text.contains("https://acme.example"));
    }

    #[test]
    fn absent_optionals_echo_as_null() {
        let value = IcpInput::new("For finance teams").render().to_value().unwrap();
        assert_eq!(value["task"], "icp_analysis");
        assert!(value["additional_context"].is_null());
        assert_eq!(value["asset_content"], "For finance teams");
    }
}
