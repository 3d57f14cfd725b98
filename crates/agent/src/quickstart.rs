//! One-shot flows for the common jobs: audit a homepage, build positioning,
//! compare against competitors.

use std::sync::Arc;

use pmm_common::{PmmError, Result};
use pmm_llm::LlmClient;
use pmm_tools::{
    AssetType, CompetitorHomepageInput, CompleteAuditInput, PositioningCanvasInput, Template,
};

use crate::agent::{create_pmm_agent, Conversation};
use crate::selector::{AgentOptions, Mode};

/// Complete-audit turn for the homepage at `url`.
pub fn evaluate_homepage_prompt(url: &str) -> Result<String> {
    if url.trim().is_empty() {
        return Err(PmmError::MissingInput("url".into()));
    }
    CompleteAuditInput::new(url)
        .with_asset_type(AssetType::Homepage)
        .with_asset_url(url)
        .render()
        .to_turn()
}

/// Positioning-canvas turn, followed by a request for the messaging
/// framework built on it.
pub fn create_positioning_prompt(
    product_description: &str,
    target_audience: Option<&str>,
    competitors: &[String],
) -> Result<String> {
    if product_description.trim().is_empty() {
        return Err(PmmError::MissingInput("product_description".into()));
    }

    let mut input = PositioningCanvasInput::new(product_description);
    if let Some(audience) = target_audience.filter(|a| !a.trim().is_empty()) {
        input = input.with_target_audience(audience);
    }
    if !competitors.is_empty() {
        input = input.with_known_competitors(competitors.to_vec());
    }

    let mut prompt = input.render().to_turn()?;
    prompt.push_str(
        "\n\nAfter the positioning canvas, also create a messaging framework \
         (`create_messaging_framework`) built on it.",
    );
    Ok(prompt)
}

/// One competitor-analysis turn per competitor, then the landscape summary.
pub fn compare_competitors_prompt(your_url: &str, competitor_urls: &[String]) -> Result<String> {
    if your_url.trim().is_empty() {
        return Err(PmmError::MissingInput("your_url".into()));
    }
    if competitor_urls.is_empty() {
        return Err(PmmError::MissingInput("competitor_urls".into()));
    }

    let sections = competitor_urls
        .iter()
        .map(|url| {
            CompetitorHomepageInput::new(url.as_str())
                .with_your_url(your_url)
                .render()
                .to_turn()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!(
        "{}\n\n---\n\n\
         Then provide:\n\
         - Overall competitive landscape summary\n\
         - My unique positioning opportunities\n\
         - \"Unlike X, we Y\" statements for each competitor\n\
         - Recommended positioning angle",
        sections.join("\n\n---\n\n")
    ))
}

pub async fn evaluate_homepage(client: Arc<dyn LlmClient>, url: &str) -> Result<String> {
    let prompt = evaluate_homepage_prompt(url)?;
    create_pmm_agent(client, &AgentOptions::for_mode(Mode::Evaluate))
        .invoke(&prompt)
        .await
}

pub async fn create_positioning(
    client: Arc<dyn LlmClient>,
    product_description: &str,
    target_audience: Option<&str>,
    competitors: &[String],
) -> Result<String> {
    let prompt = create_positioning_prompt(product_description, target_audience, competitors)?;
    create_pmm_agent(client, &AgentOptions::for_mode(Mode::Create))
        .invoke(&prompt)
        .await
}

pub async fn compare_competitors(
    client: Arc<dyn LlmClient>,
    your_url: &str,
    competitor_urls: &[String],
) -> Result<String> {
    let prompt = compare_competitors_prompt(your_url, competitor_urls)?;
    create_pmm_agent(client, &AgentOptions::for_mode(Mode::Evaluate))
        .invoke(&prompt)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homepage_prompt_renders_the_audit() {
        let prompt = evaluate_homepage_prompt("https://acme.example").unwrap();
        assert!(prompt.starts_with("## TASK: complete_pmm_audit\n"));
        assert!(prompt.contains("### Critical (Fix This Week)"));
        assert!(prompt.contains("- **Asset URL:** https://acme.example"));
        assert!(evaluate_homepage_prompt(" ").is_err());
    }

    #[test]
    fn positioning_prompt_skips_absent_context() {
        let bare = create_positioning_prompt("Expense tool", None, &[]).unwrap();
        assert!(bare.starts_with("## TASK: create_positioning_canvas\n"));
        assert!(bare.contains("Product: Expense tool"));
        assert!(!bare.contains("\nCompetitors: "));
        assert!(bare.ends_with("built on it."));

        let full = create_positioning_prompt(
            "Expense tool",
            Some("Finance teams"),
            &["Expensify".into(), "spreadsheets".into()],
        )
        .unwrap();
        assert!(full.contains("\nTarget: Finance teams"));
        assert!(full.contains("\nCompetitors: Expensify, spreadsheets"));
    }

    #[test]
    fn compare_prompt_renders_each_competitor() {
        let prompt = compare_competitors_prompt(
            "https://mine.example",
            &["https://a.example".into(), "https://b.example".into()],
        )
        .unwrap();
        assert_eq!(prompt.matches("## TASK: competitor_analysis").count(), 2);
        assert!(prompt.contains("Analyze competitor homepage: https://a.example"));
        assert!(prompt.contains("Analyze competitor homepage: https://b.example"));
        assert!(prompt.contains("Compare against your site: https://mine.example"));
        assert!(prompt.ends_with("Recommended positioning angle"));
        assert!(matches!(
            compare_competitors_prompt("https://mine.example", &[]),
            Err(PmmError::MissingInput(field)) if field == "competitor_urls"
        ));
    }
}
