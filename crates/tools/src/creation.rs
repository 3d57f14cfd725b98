//! Creation templates: build positioning and messaging assets from scratch.

use serde::{Deserialize, Serialize};

use crate::envelope::{provided_list, Template};
use crate::params::WireframeStyle;
use crate::registry::ToolKind;

const POSITIONING_CANVAS: &str = r#"Create positioning canvas:

# POSITIONING CANVAS

## 1. TARGET CUSTOMER

**Role/Title:**
(Be specific - "Marketing Directors at B2B SaaS companies" not "marketers")

**Company Type:**
(B2B/B2C, size, stage, characteristics)

**Industry:**
(Specific vertical or "horizontal with focus on X")

**Situation/Trigger:**
(What event makes them look for this solution?)

**Validation:** Is this specific enough that you could build a target list?

---

## 2. COMPETITIVE ALTERNATIVE

**Primary Alternative:**
(What do they do today without your product?)

**Type:**
[ ] Direct Competitor: ___
[ ] Manual Process: ___
[ ] Status Quo: ___
[ ] Homegrown Solution: ___
[ ] Spreadsheets: ___

---

## 3. WHY THAT SUCKS

**Pain Point 1:**
(Most urgent pain)

**Pain Point 2:**
(Second most important)

**Pain Point 3:**
(Supporting pain)

---

## 4. YOUR UNIQUE APPROACH

**Key Differentiator:**
(What do you do fundamentally differently?)

**Methodology/Approach:**
(How do you solve it differently?)

**Unique Capability:**
(What can you do that alternatives can't?)

---

## 5. WHY THAT'S BETTER

**Primary Benefit:**
(The main outcome customers get)

**Supporting Benefit:**
(Secondary value)

**Proof Point:**
(Evidence this is true)

---

## 6. POSITIONING STRATEGY

**Approach:**
[ ] Category-Based: Competing within ___
[ ] Use-Case-Based: Best for ___

---

## 7. POSITIONING STATEMENTS

**Internal Positioning Statement:**
"For [target customer] who [situation], [product] is a [category] that [key benefit]. Unlike [competitive alternative], we [key differentiator]."

**Differentiation Summary:**
"Unlike [competitive alternative], which [problem with alternative], [product] [unique approach] so that [target customer] can [key benefit]."

**Homepage One-Liner:**
"[Product]: The [category/approach] for [audience]"

---

## VALIDATION CHECKLIST

- [ ] Competitive alternative is clearly defined
- [ ] Target customer is specific (not "everyone")
- [ ] Differentiation is meaningful (customers care)
- [ ] Differentiation is defensible (hard to copy)
- [ ] Problem/pain is explicit
- [ ] Could NOT be said by any competitor"#;

const MESSAGING_HOUSE: &str = r#"Create messaging framework:

# MESSAGING FRAMEWORK

## VALUE PROPOSITION
(Top of the messaging house - what you do + why it matters)

**Format:** [Product] helps [audience] [achieve outcome] by [unique approach].

**Value Prop:**


---

## MESSAGING HOUSE

```
┌─────────────────────────────────────────────────────┐
│              VALUE PROPOSITION                       │
│  [Write the value prop here]                        │
├─────────────────┬─────────────────┬─────────────────┤
│    PILLAR 1     │    PILLAR 2     │    PILLAR 3     │
│  [Main diff]    │  [Core benefit] │  [Trust/ease]   │
├─────────────────┼─────────────────┼─────────────────┤
│  • Proof 1      │  • Proof 1      │  • Proof 1      │
│  • Proof 2      │  • Proof 2      │  • Proof 2      │
│  • Proof 3      │  • Proof 3      │  • Proof 3      │
├─────────────────┴─────────────────┴─────────────────┤
│  FOUNDATION: [Target audience] + [Competitive alt]  │
└─────────────────────────────────────────────────────┘
```

---

## PILLAR 1: [Primary Differentiation]

**Key Message:**
(Benefit-oriented statement about your main differentiator)

**Supporting Points:**
1.
2.
3.

**Proof Points:**
- Metric:
- Testimonial:
- Case study:

---

## PILLAR 2: [Core Capability Benefit]

**Key Message:**


**Supporting Points:**
1.
2.
3.

**Proof Points:**
- Metric:
- Testimonial:
- Case study:

---

## PILLAR 3: [Trust/Ease/Speed]

**Key Message:**


**Supporting Points:**
1.
2.
3.

**Proof Points:**
- Metric:
- Testimonial:
- Case study:

---

## PERSONA-SPECIFIC MESSAGING"#;

const PERSONA_TABLE: &str = r#"| Aspect | Message |
|--------|---------|
| Pain Point | |
| Desired Outcome | |
| Key Message | |
| Proof Point | |
| Likely Objection | |
| Objection Response | |"#;

const MESSAGING_TAIL: &str = r#"---

## HEADLINE OPTIONS

**Problem-led:**
1.
2.

**Solution-led:**
1.
2.

**Outcome-led:**
1.
2.

**Differentiation-led:**
1.
2.

---

## CTA OPTIONS

**Primary CTA (high intent):**
1.
2.

**Secondary CTA (low intent):**
1.
2.

---

## ELEVATOR PITCH

**30-second version:**


**10-second version:**"#;

const WIREFRAME: &str = r#"Create homepage wireframe:

# HOMEPAGE WIREFRAME

## SECTION 1: HERO

**Headline:**
(Clear, not clever. What you do + who for.)

**Subheadline:**
(Supports headline. Adds context, doesn't repeat.)

**Primary CTA:**
(Benefit-oriented. What happens when they click?)

**Secondary CTA:**
(For not-ready visitors. Lower commitment.)

**Social Proof in Hero:**
(Logo bar or key metric)

---

## SECTION 2: SOCIAL PROOF BAR

**Logos to include:**
(5-7 recognizable logos for target audience)

**Alternative if no logos:**
(Key metric or testimonial snippet)

---

## SECTION 3: PROBLEM/PAIN

**Headline:**
(Agitate the problem they have)

**Pain points:**
1.
2.
3.

---

## SECTION 4: SOLUTION/HOW IT WORKS

**Headline:**
(How you solve it)

**3 Steps or Features:**

| Step | Headline | Description |
|------|----------|-------------|
| 1 | | |
| 2 | | |
| 3 | | |

---

## SECTION 5: KEY BENEFITS (Pillars)

**Section Headline:**

**Benefit 1:**
- Headline:
- Description:
- Proof point:

**Benefit 2:**
- Headline:
- Description:
- Proof point:

**Benefit 3:**
- Headline:
- Description:
- Proof point:

---

## SECTION 6: SOCIAL PROOF DEEP

**Testimonial 1:**
- Quote:
- Name, Title, Company:
- Specific result:

**Testimonial 2:**
- Quote:
- Name, Title, Company:
- Specific result:

**Case Study Preview:**
- Company:
- Result:
- CTA to full case study:

---

## SECTION 7: DIFFERENTIATION

**Headline:**
(Why choose us over alternatives)

**Comparison or unique points:**

---

## SECTION 8: CTA SECTION

**Headline:**
(Final push - urgency or benefit)

**Primary CTA:**

**Friction reducers:**
(Free trial, no credit card, etc.)

---

## SECTION 9: FAQ (Optional)

**Q1:**
**A1:**

**Q2:**
**A2:**

**Q3:**
**A3:**

---

## SECTION 10: FOOTER CTA

**Headline:**

**CTA:**

---

## COPY CHECKLIST

- [ ] Hero passes 5-second test
- [ ] Only ONE primary CTA per section
- [ ] All features translated to benefits
- [ ] Social proof includes names and specifics
- [ ] No jargon or buzzwords
- [ ] Scannable structure"#;

const DIFFERENTIATION: &str = r#"# DIFFERENTIATION STATEMENTS

## "UNLIKE X, WE Y" STATEMENTS

**Statement 1 (Primary):**
"Unlike [alternative], which [problem], [product] [unique approach] so you can [benefit]."

**Statement 2:**


**Statement 3:**


**Statement 4:**


**Statement 5:**


---

## POSITIONING ANGLES

### Angle 1: Problem-Focused
"Stop [painful thing]. Start [better outcome]."

### Angle 2: Audience-Focused
"The [category] built for [specific audience]."

### Angle 3: Approach-Focused
"The only [category] that [unique approach]."

### Angle 4: Outcome-Focused
"[Achieve outcome] in [timeframe/easier way]."

### Angle 5: Anti-Alternative
"[Alternative] wasn't built for [your use case]. We were."

---

## CATEGORY OPTIONS

**Option 1: Existing Category**
"The [existing category] for [your segment]"
Example:

**Option 2: New Category**
"[New category name] - [definition]"
Example:

**Option 3: Use Case**
"The best way to [specific job-to-be-done]"
Example:

---

## HEADLINE OPTIONS

**Clear and Direct:**
1.
2.
3.

**Problem-Agitation:**
1.
2.
3.

**Differentiation-Led:**
1.
2.
3."#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositioningCanvasInput {
    pub product_description: String,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub known_competitors: Option<Vec<String>>,
    #[serde(default)]
    pub unique_capabilities: Option<Vec<String>>,
}

impl PositioningCanvasInput {
    pub fn new(product_description: impl Into<String>) -> Self {
        Self {
            product_description: product_description.into(),
            target_audience: None,
            known_competitors: None,
            unique_capabilities: None,
        }
    }

    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }

    pub fn with_known_competitors(mut self, competitors: Vec<String>) -> Self {
        self.known_competitors = Some(competitors);
        self
    }

    pub fn with_unique_capabilities(mut self, capabilities: Vec<String>) -> Self {
        self.unique_capabilities = Some(capabilities);
        self
    }
}

impl Template for PositioningCanvasInput {
    const KIND: ToolKind = ToolKind::CreatePositioningCanvas;

    fn instructions(&self) -> String {
        let mut text = format!(
            "{POSITIONING_CANVAS}\n\nProduct: {}",
            self.product_description
        );
        if let Some(audience) = &self.target_audience {
            text.push_str(&format!("\nTarget: {audience}"));
        }
        if let Some(competitors) = provided_list(&self.known_competitors) {
            text.push_str(&format!("\nCompetitors: {competitors}"));
        }
        if let Some(capabilities) = provided_list(&self.unique_capabilities) {
            text.push_str(&format!("\nUnique capabilities: {capabilities}"));
        }
        text
    }
}

/// Messaging house built on a finished positioning canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagingFrameworkInput {
    pub positioning_canvas: String,
    #[serde(default)]
    pub primary_persona: Option<String>,
    #[serde(default)]
    pub secondary_personas: Option<Vec<String>>,
}

impl MessagingFrameworkInput {
    pub fn new(positioning_canvas: impl Into<String>) -> Self {
        Self {
            positioning_canvas: positioning_canvas.into(),
            primary_persona: None,
            secondary_personas: None,
        }
    }

    pub fn with_primary_persona(mut self, persona: impl Into<String>) -> Self {
        self.primary_persona = Some(persona.into());
        self
    }

    pub fn with_secondary_personas(mut self, personas: Vec<String>) -> Self {
        self.secondary_personas = Some(personas);
        self
    }
}

impl Template for MessagingFrameworkInput {
    const KIND: ToolKind = ToolKind::CreateMessagingFramework;

    fn instructions(&self) -> String {
        let primary = match &self.primary_persona {
            Some(persona) => format!("### Primary Persona: {persona}"),
            None => "### Primary Persona".to_string(),
        };
        let mut text = format!("{MESSAGING_HOUSE}\n\n{primary}\n\n{PERSONA_TABLE}\n\n");
        if let Some(secondary) = provided_list(&self.secondary_personas) {
            text.push_str(&format!("### Secondary Personas: {secondary}\n\n"));
        }
        text.push_str(MESSAGING_TAIL);
        text.push_str(&format!("\n\nPositioning: {}", self.positioning_canvas));
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomepageWireframeInput {
    pub messaging_framework: String,
    #[serde(default)]
    pub style: WireframeStyle,
}

impl HomepageWireframeInput {
    pub fn new(messaging_framework: impl Into<String>) -> Self {
        Self {
            messaging_framework: messaging_framework.into(),
            style: WireframeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: impl Into<WireframeStyle>) -> Self {
        self.style = style.into();
        self
    }
}

impl Template for HomepageWireframeInput {
    const KIND: ToolKind = ToolKind::CreateHomepageWireframe;

    fn instructions(&self) -> String {
        format!(
            "{WIREFRAME}\n\nStyle: {style} ({guidance})\nMessaging: {messaging}",
            style = self.style,
            guidance = self.style.guidance(),
            messaging = self.messaging_framework,
        )
    }
}

/// "Unlike X, we Y" statements against one named alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferentiationInput {
    pub product_description: String,
    pub competitive_alternative: String,
    pub unique_capabilities: Vec<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
}

impl DifferentiationInput {
    pub fn new(
        product_description: impl Into<String>,
        competitive_alternative: impl Into<String>,
        unique_capabilities: Vec<String>,
    ) -> Self {
        Self {
            product_description: product_description.into(),
            competitive_alternative: competitive_alternative.into(),
            unique_capabilities,
            target_audience: None,
        }
    }

    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }
}

impl Template for DifferentiationInput {
    const KIND: ToolKind = ToolKind::GenerateDifferentiationStatements;

    fn instructions(&self) -> String {
        let alternative = &self.competitive_alternative;
        let mut text = format!(
            "Generate differentiation statements against: {alternative}\n\n\
             {DIFFERENTIATION}\n\n\
             ---\n\n\
             ## VALIDATION QUESTIONS\n\n\
             To test these with customers, ask:\n\
             1. \"Does this describe a problem you have?\"\n\
             2. \"Does this sound different from {alternative}?\"\n\
             3. \"Would this make you want to learn more?\"\n\n\
             Product: {product}\n\
             Alternative: {alternative}\n\
             Capabilities: {capabilities}",
            product = self.product_description,
            capabilities = self.unique_capabilities.join(", "),
        );
        if let Some(audience) = &self.target_audience {
            text.push_str(&format!("\nAudience: {audience}"));
        }
        text
    }
}
