use pmm_common::PmmError;
use pmm_tools::{
    render, render_turn, DifferentiationInput, FiveSecondTestInput, Template, ToolKind,
};
use serde_json::{json, Value};

/// Arguments with every optional input supplied, plus the strings each
/// rendered instruction text must contain.
fn full_args(kind: ToolKind) -> (Value, Vec<&'static str>) {
    match kind {
        ToolKind::RunFiveSecondTest => (
            json!({ "asset_content": "copy", "asset_type": "landing_page" }),
            vec!["landing_page"],
        ),
        ToolKind::AnalyzePositioning => (
            json!({ "asset_content": "copy", "company_context": "ctx-7f3a" }),
            vec!["ctx-7f3a"],
        ),
        ToolKind::AnalyzeMessaging => (
            json!({ "asset_content": "copy", "target_persona": "persona-91c2" }),
            vec!["persona-91c2"],
        ),
        ToolKind::AnalyzeHomepageStructure => (
            json!({ "asset_content": "copy", "include_screenshots": true }),
            vec!["Screenshots are included"],
        ),
        ToolKind::DetectAntiPatterns => (
            json!({ "asset_content": "copy", "asset_type": "email" }),
            vec!["email"],
        ),
        ToolKind::GenerateRewrite => (
            json!({
                "original_copy": "orig-55d1",
                "issue_type": "weak_cta",
                "target_persona": "persona-0b7e",
                "competitive_alternative": "alt-c4d9",
            }),
            vec!["orig-55d1", "weak_cta", "persona-0b7e", "alt-c4d9"],
        ),
        ToolKind::BuildCompetitiveFrame => (
            json!({
                "product_description": "product",
                "known_competitors": ["comp-a1", "comp-b2"],
                "current_positioning": "pos-e8f0",
            }),
            vec!["comp-a1", "comp-b2", "pos-e8f0"],
        ),
        ToolKind::AnalyzeIcp => (
            json!({ "asset_content": "copy", "additional_context": "extra-3d2b" }),
            vec!["extra-3d2b"],
        ),
        ToolKind::RunCompletePmmAudit => (
            json!({
                "asset_content": "copy",
                "asset_type": "sales_deck",
                "asset_url": "https://audit.example/a9",
                "company_context": "ctx-66aa",
            }),
            vec!["sales_deck", "https://audit.example/a9", "ctx-66aa"],
        ),
        ToolKind::FetchHomepage => (
            json!({ "url": "https://home.example/1", "extract_mode": "above_fold" }),
            vec!["https://home.example/1", "above_fold"],
        ),
        ToolKind::FetchCompetitorHomepage => (
            json!({
                "competitor_url": "https://rival.example/2",
                "your_url": "https://mine.example/3",
            }),
            vec!["https://rival.example/2", "https://mine.example/3"],
        ),
        ToolKind::AnalyzeLandingPage => (
            json!({ "url": "https://lp.example/4", "campaign_context": "camp-12ef" }),
            vec!["https://lp.example/4", "camp-12ef"],
        ),
        ToolKind::ScrapeSocialProof => (
            json!({ "url": "https://proof.example/5" }),
            vec!["https://proof.example/5"],
        ),
        ToolKind::CreatePositioningCanvas => (
            json!({
                "product_description": "prod-4411",
                "target_audience": "aud-9a9a",
                "known_competitors": ["comp-x"],
                "unique_capabilities": ["cap-y", "cap-z"],
            }),
            vec!["prod-4411", "aud-9a9a", "comp-x", "cap-y", "cap-z"],
        ),
        ToolKind::CreateMessagingFramework => (
            json!({
                "positioning_canvas": "canvas-0f0f",
                "primary_persona": "primary-7",
                "secondary_personas": ["second-8", "third-9"],
            }),
            vec!["canvas-0f0f", "primary-7", "second-8", "third-9"],
        ),
        ToolKind::CreateHomepageWireframe => (
            json!({ "messaging_framework": "mf-2c2c", "style": "minimal" }),
            vec!["mf-2c2c", "minimal"],
        ),
        ToolKind::GenerateDifferentiationStatements => (
            json!({
                "product_description": "prod-5b5b",
                "competitive_alternative": "alt-6c6c",
                "unique_capabilities": ["cap-7d7d"],
                "target_audience": "aud-8e8e",
            }),
            vec!["prod-5b5b", "alt-6c6c", "cap-7d7d", "aud-8e8e"],
        ),
    }
}

#[test]
fn every_tool_echoes_optional_inputs_into_instructions() {
    for kind in ToolKind::ALL {
        let (args, expected) = full_args(kind);
        let rendered = render(kind.name(), args.clone()).unwrap();

        assert_eq!(rendered["task"], kind.task(), "{kind}");
        let instructions = rendered["instructions"].as_str().unwrap();
        for needle in expected {
            assert!(instructions.contains(needle), "{kind}: missing {needle}");
        }
        for (field, value) in args.as_object().unwrap() {
            assert_eq!(&rendered[field], value, "{kind}: {field} not echoed");
        }
    }
}

fn required_fields(kind: ToolKind) -> &'static [&'static str] {
    match kind {
        ToolKind::GenerateRewrite => &["original_copy", "issue_type"],
        ToolKind::BuildCompetitiveFrame | ToolKind::CreatePositioningCanvas => {
            &["product_description"]
        }
        ToolKind::FetchHomepage | ToolKind::AnalyzeLandingPage | ToolKind::ScrapeSocialProof => {
            &["url"]
        }
        ToolKind::FetchCompetitorHomepage => &["competitor_url"],
        ToolKind::CreateMessagingFramework => &["positioning_canvas"],
        ToolKind::CreateHomepageWireframe => &["messaging_framework"],
        ToolKind::GenerateDifferentiationStatements => &[
            "product_description",
            "competitive_alternative",
            "unique_capabilities",
        ],
        _ => &["asset_content"],
    }
}

#[test]
fn required_only_inputs_render_non_empty_envelopes() {
    for kind in ToolKind::ALL {
        let (full, _) = full_args(kind);
        let required: serde_json::Map<String, Value> = full
            .as_object()
            .unwrap()
            .iter()
            .filter(|(field, _)| required_fields(kind).contains(&field.as_str()))
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect();
        assert_eq!(required.len(), required_fields(kind).len(), "{kind}");

        let rendered = render(kind.name(), Value::Object(required)).unwrap();
        assert!(!rendered["task"].as_str().unwrap().is_empty());
        assert!(!rendered["instructions"].as_str().unwrap().is_empty());
    }

    let minimal = render("analyze_messaging", json!({ "asset_content": "copy" })).unwrap();
    assert!(minimal["target_persona"].is_null());
}

#[test]
fn dropping_a_required_field_names_it() {
    for kind in ToolKind::ALL {
        let (full, _) = full_args(kind);
        for field in required_fields(kind) {
            let mut args = full.clone();
            args.as_object_mut().unwrap().remove(*field);
            let err = render(kind.name(), args).unwrap_err();
            assert!(
                matches!(&err, PmmError::MissingInput(missing) if missing == field),
                "{kind}: {err}"
            );
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    for kind in ToolKind::ALL {
        let (args, _) = full_args(kind);
        let first = render(kind.name(), args.clone()).unwrap();
        let second = render(kind.name(), args).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn five_second_test_scenario() {
    let value = render(
        "run_five_second_test",
        json!({ "asset_content": "<h1>Acme</h1>", "asset_type": "homepage" }),
    )
    .unwrap();

    assert_eq!(value["task"], "five_second_test");
    assert_eq!(value["asset_type"], "homepage");
    assert_eq!(value["asset_content"], "<h1>Acme</h1>");
    let instructions = value["instructions"].as_str().unwrap();
    assert!(instructions.contains("What do they do?"));
    assert!(instructions.contains("Who is it for?"));
    assert!(instructions.contains("What makes it different?"));
    assert!(instructions.contains("What to do next?"));
}

#[test]
fn differentiation_scenario() {
    let envelope = DifferentiationInput::new(
        "Expense automation for SMBs",
        "manual spreadsheets",
        vec!["receipt OCR".into(), "card sync".into()],
    )
    .render();

    assert_eq!(envelope.task, "generate_differentiation");
    assert!(envelope.instructions.contains("manual spreadsheets"));
    assert!(envelope.to_value().unwrap()["target_audience"].is_null());
}

#[test]
fn typed_and_named_turns_agree() {
    let typed = FiveSecondTestInput::new("<h1>Acme</h1>")
        .render()
        .to_turn()
        .unwrap();
    let named = render_turn(
        ToolKind::RunFiveSecondTest,
        json!({ "asset_content": "<h1>Acme</h1>" }),
    )
    .unwrap();
    assert_eq!(typed, named);
    assert!(typed.contains("\"asset_content\": \"<h1>Acme</h1>\""));
}

#[test]
fn unknown_closed_set_values_fall_back_and_echo() {
    let rendered = render(
        "run_five_second_test",
        json!({ "asset_content": "copy", "asset_type": "billboard" }),
    )
    .unwrap();
    assert_eq!(rendered["asset_type"], "billboard");
    assert!(rendered["instructions"]
        .as_str()
        .unwrap()
        .contains("billboard (not a recognised asset type"));

    let rendered = render(
        "create_homepage_wireframe",
        json!({ "messaging_framework": "mf", "style": "baroque" }),
    )
    .unwrap();
    assert_eq!(rendered["style"], "baroque");
    assert!(rendered["instructions"]
        .as_str()
        .unwrap()
        .contains("Unrecognised style"));
}

#[test]
fn blank_required_inputs_are_accepted_when_present() {
    let rendered = render(
        "generate_differentiation_statements",
        json!({
            "product_description": "p",
            "competitive_alternative": "   ",
            "unique_capabilities": [],
        }),
    )
    .unwrap();
    assert_eq!(rendered["competitive_alternative"], "   ");
    assert_eq!(rendered["unique_capabilities"], json!([]));
}
