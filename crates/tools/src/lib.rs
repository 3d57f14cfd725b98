//! Instruction templates for PMM evaluation and creation.
//!
//! Every template takes a typed input record and renders a [`ToolEnvelope`]:
//! a task tag, markdown instructions for the model, and the inputs echoed
//! back. Rendering is pure.

pub mod creation;
pub mod envelope;
pub mod evaluation;
pub mod params;
pub mod registry;
pub mod web;

pub use creation::{
    DifferentiationInput, HomepageWireframeInput, MessagingFrameworkInput,
    PositioningCanvasInput,
};
pub use envelope::{envelope_turn, Template, ToolEnvelope};
pub use evaluation::{
    AntiPatternScanInput, CompetitiveFrameInput, CompleteAuditInput, FiveSecondTestInput,
    HomepageStructureInput, IcpInput, MessagingInput, PositioningInput, RewriteInput,
};
pub use params::{AssetType, ExtractMode, IssueType, ScanScope, WireframeStyle};
pub use registry::{render, render_kind, render_turn, ToolGroup, ToolKind};
pub use web::{CompetitorHomepageInput, FetchHomepageInput, LandingPageInput, SocialProofInput};
