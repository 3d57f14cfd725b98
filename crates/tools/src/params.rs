//! Closed-set tool parameters.
//!
//! Each set keeps values outside the enumeration verbatim in an `Other`
//! variant. Templates render a fallback line for those instead of failing,
//! and the envelope echoes the caller's original string.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident $(, default = $default:ident)? {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value outside the closed set, kept as given.
            Other(String),
        }

        impl $name {
            /// Wire names of the known members, in declaration order.
            pub const KNOWN: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(value) => value,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        $(
            impl Default for $name {
                fn default() -> Self {
                    Self::$default
                }
            }
        )?

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)+
                    _ => {
                        tracing::debug!(
                            parameter = stringify!($name),
                            value = %value,
                            "Value outside closed set, using fallback"
                        );
                        Self::Other(value)
                    }
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_set! {
    /// Kind of marketing asset under evaluation.
    AssetType, default = Homepage {
        Homepage => "homepage",
        LandingPage => "landing_page",
        SalesDeck => "sales_deck",
        Email => "email",
        Ad => "ad",
    }
}

closed_set! {
    /// Asset types accepted by the anti-pattern scan; `all` applies every check.
    ScanScope, default = All {
        Homepage => "homepage",
        LandingPage => "landing_page",
        SalesDeck => "sales_deck",
        Email => "email",
        Ad => "ad",
        All => "all",
    }
}

closed_set! {
    /// Copy problem a rewrite should fix.
    IssueType {
        UnclearHeadline => "unclear_headline",
        JargonBuzzwords => "jargon_buzzwords",
        FeatureDump => "feature_dump",
        NoSpecificity => "no_specificity",
        CleverOverClear => "clever_over_clear",
        WeakCta => "weak_cta",
        GenericValueProp => "generic_value_prop",
        NoCompetitiveFrame => "no_competitive_frame",
    }
}

closed_set! {
    /// Portion of a fetched page to focus on.
    ExtractMode, default = Full {
        Full => "full",
        AboveFold => "above_fold",
        HeroOnly => "hero_only",
    }
}

closed_set! {
    /// Level of detail for a generated homepage wireframe.
    WireframeStyle, default = Standard {
        Minimal => "minimal",
        Standard => "standard",
        Comprehensive => "comprehensive",
    }
}

pub(crate) const FALLBACK_FIX_APPROACH: &str = "Improve clarity and specificity";

impl AssetType {
    /// Line telling the model how to treat the asset.
    pub fn guidance(&self) -> String {
        match self {
            AssetType::Other(value) => format!(
                "Asset type: {value} (not a recognised asset type; evaluate it as a general marketing asset)"
            ),
            known => format!("Asset type: {known}"),
        }
    }

    pub fn is_homepage(&self) -> bool {
        matches!(self, AssetType::Homepage)
    }
}

impl ScanScope {
    pub fn guidance(&self) -> String {
        match self {
            ScanScope::Other(value) => format!(
                "Asset type: {value} (not a recognised asset type; apply every check)"
            ),
            ScanScope::All => "Asset type: all (apply every check)".to_string(),
            known => format!("Asset type: {known} (skip checks marked for other asset types)"),
        }
    }
}

impl IssueType {
    pub fn fix_approach(&self) -> &'static str {
        match self {
            IssueType::UnclearHeadline => "Rewrite to clearly state WHAT + WHO. No cleverness.",
            IssueType::JargonBuzzwords => "Replace all jargon with customer language. Be specific.",
            IssueType::FeatureDump => "Apply 'So what?' to each feature until you reach benefit.",
            IssueType::NoSpecificity => "Add numbers, timeframes, concrete outcomes.",
            IssueType::CleverOverClear => "Make it boring and clear. State exactly what it does.",
            IssueType::WeakCta => "Make CTA benefit-oriented. What happens when they click?",
            IssueType::GenericValueProp => "Add problem + specific solution + for whom.",
            IssueType::NoCompetitiveFrame => "Add 'Unlike X' or 'Instead of Y' framing.",
            IssueType::Other(_) => FALLBACK_FIX_APPROACH,
        }
    }
}

impl ExtractMode {
    pub fn focus(&self) -> &'static str {
        match self {
            ExtractMode::Full => "Entire page",
            ExtractMode::AboveFold => "Estimated above-fold content only",
            ExtractMode::HeroOnly => "Just the hero section",
            ExtractMode::Other(_) => "Entire page (unrecognised extract mode)",
        }
    }
}

impl WireframeStyle {
    pub fn guidance(&self) -> &'static str {
        match self {
            WireframeStyle::Minimal => {
                "Keep only the hero, social proof bar, key benefits and final CTA sections."
            }
            WireframeStyle::Standard => "Fill every section; the FAQ section is optional.",
            WireframeStyle::Comprehensive => {
                "Fill every section with full copy, including FAQ and alternate headlines."
            }
            WireframeStyle::Other(_) => {
                "Unrecognised style; fill every section, the FAQ section is optional."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_round_trip_through_strings() {
        for wire in IssueType::KNOWN {
            let parsed = IssueType::from(*wire);
            assert!(parsed.is_known(), "{wire}");
            assert_eq!(String::from(parsed), *wire);
        }
    }

    #[test]
    fn unknown_values_are_kept_verbatim() {
        let parsed: IssueType = serde_json::from_str("\"too_long\"").unwrap();
        assert_eq!(parsed, IssueType::Other("too_long".into()));
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"too_long\"");
    }

    #[test]
    fn defaults_match_tool_signatures() {
        assert_eq!(AssetType::default(), AssetType::Homepage);
        assert_eq!(ScanScope::default(), ScanScope::All);
        assert_eq!(ExtractMode::default(), ExtractMode::Full);
        assert_eq!(WireframeStyle::default(), WireframeStyle::Standard);
    }

    #[test]
    fn closed_set_sizes() {
        assert_eq!(AssetType::KNOWN.len(), 5);
        assert_eq!(ScanScope::KNOWN.len(), 6);
        assert_eq!(IssueType::KNOWN.len(), 8);
        assert_eq!(ExtractMode::KNOWN.len(), 3);
        assert_eq!(WireframeStyle::KNOWN.len(), 3);
    }

    #[test]
    fn unknown_issue_type_uses_fallback_fix() {
        assert_eq!(
            IssueType::from("tone_deaf").fix_approach(),
            FALLBACK_FIX_APPROACH
        );
        assert_ne!(IssueType::WeakCta.fix_approach(), FALLBACK_FIX_APPROACH);
    }

    #[test]
    fn unknown_asset_type_guidance_names_the_value() {
        let guidance = AssetType::from("podcast").guidance();
        assert!(guidance.contains("podcast"));
        assert!(guidance.contains("not a recognised"));
        assert_eq!(AssetType::Email.guidance(), "Asset type: email");
    }
}
