//! Messaging hierarchy records: the five layers and the messaging house.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Score;

/// The five messaging layers, from internal positioning down to button copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessagingLayerName {
    PositioningStatement,
    ValueProposition,
    KeyMessages,
    ProofPoints,
    MicroCopy,
}

impl MessagingLayerName {
    pub const ALL: [MessagingLayerName; 5] = [
        MessagingLayerName::PositioningStatement,
        MessagingLayerName::ValueProposition,
        MessagingLayerName::KeyMessages,
        MessagingLayerName::ProofPoints,
        MessagingLayerName::MicroCopy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessagingLayerName::PositioningStatement => "positioning_statement",
            MessagingLayerName::ValueProposition => "value_proposition",
            MessagingLayerName::KeyMessages => "key_messages",
            MessagingLayerName::ProofPoints => "proof_points",
            MessagingLayerName::MicroCopy => "micro_copy",
        }
    }
}

impl fmt::Display for MessagingLayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MessagingLayer {
    pub layer_name: MessagingLayerName,
    pub present: bool,
    pub quality_score: Score,
    pub content_found: Option<String>,
    #[serde(default)]
    pub issues: Vec<String>,
}

/// Value proposition on top, pillars in the middle, audience as foundation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MessagingHouse {
    pub value_proposition: Option<String>,
    #[serde(default)]
    pub pillars: Vec<String>,
    #[serde(default)]
    pub proof_points_per_pillar: BTreeMap<String, Vec<String>>,
    /// Is the target audience clear?
    pub foundation_defined: bool,
    pub structure_score: Score,
}

/// Complete messaging assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MessagingAnalysis {
    pub layers: Vec<MessagingLayer>,
    pub messaging_house: MessagingHouse,

    /// Can someone understand it in 5 seconds?
    pub clarity_score: Score,
    /// Numbers, metrics, concrete outcomes?
    pub specificity_score: Score,
    /// Features translated to benefits?
    pub benefit_orientation_score: Score,

    // Anti-patterns
    #[serde(default)]
    pub feature_dumping: bool,
    #[serde(default)]
    pub jargon_buzzwords: Vec<String>,
    #[serde(default)]
    pub clever_over_clear: bool,
    #[serde(default)]
    pub saying_everything: bool,
    #[serde(default)]
    pub no_specificity: bool,

    pub overall_score: Score,
}

impl MessagingAnalysis {
    pub fn layer(&self, name: MessagingLayerName) -> Option<&MessagingLayer> {
        self.layers.iter().find(|l| l.layer_name == name)
    }

    /// True when `layers` holds exactly one entry per layer, in hierarchy order.
    ///
    /// Reporting only: duplicates and omissions are accepted at parse time.
    pub fn has_canonical_layers(&self) -> bool {
        self.layers
            .iter()
            .map(|l| l.layer_name)
            .eq(MessagingLayerName::ALL.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(name: MessagingLayerName) -> MessagingLayer {
        MessagingLayer {
            layer_name: name,
            present: true,
            quality_score: Score::new(60).unwrap(),
            content_found: None,
            issues: vec![],
        }
    }

    fn analysis(layers: Vec<MessagingLayer>) -> MessagingAnalysis {
        MessagingAnalysis {
            layers,
            messaging_house: MessagingHouse {
                value_proposition: Some("Forecasts your team trusts".into()),
                pillars: vec!["Accuracy".into()],
                proof_points_per_pillar: BTreeMap::from([(
                    "Accuracy".to_string(),
                    vec!["98% forecast accuracy".to_string()],
                )]),
                foundation_defined: true,
                structure_score: Score::new(70).unwrap(),
            },
            clarity_score: Score::new(80).unwrap(),
            specificity_score: Score::new(40).unwrap(),
            benefit_orientation_score: Score::new(55).unwrap(),
            feature_dumping: false,
            jargon_buzzwords: vec!["synergy".into()],
            clever_over_clear: false,
            saying_everything: false,
            no_specificity: true,
            overall_score: Score::new(62).unwrap(),
        }
    }

    #[test]
    fn layer_names_are_in_hierarchy_order() {
        let names: Vec<&str> = MessagingLayerName::ALL.iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "positioning_statement",
                "value_proposition",
                "key_messages",
                "proof_points",
                "micro_copy"
            ]
        );
    }

    #[test]
    fn layer_name_serialization_matches_as_str() {
        for name in MessagingLayerName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
    }

    #[test]
    fn canonical_layers_detected() {
        let full = analysis(MessagingLayerName::ALL.iter().copied().map(layer).collect());
        assert!(full.has_canonical_layers());
        assert!(full.layer(MessagingLayerName::MicroCopy).is_some());
    }

    #[test]
    fn missing_or_duplicate_layers_are_accepted_but_reported() {
        let partial = analysis(vec![layer(MessagingLayerName::ValueProposition)]);
        assert!(!partial.has_canonical_layers());
        assert!(partial.layer(MessagingLayerName::ProofPoints).is_none());

        let mut dup: Vec<_> = MessagingLayerName::ALL.iter().copied().map(layer).collect();
        dup.push(layer(MessagingLayerName::MicroCopy));
        assert!(!analysis(dup).has_canonical_layers());
    }

    #[test]
    fn house_score_is_range_checked() {
        let json = r#"{"foundation_defined": true, "structure_score": 120}"#;
        assert!(serde_json::from_str::<MessagingHouse>(json).is_err());
        let json = r#"{"foundation_defined": false, "structure_score": 20}"#;
        let house: MessagingHouse = serde_json::from_str(json).unwrap();
        assert!(house.pillars.is_empty());
        assert!(house.value_proposition.is_none());
    }
}
