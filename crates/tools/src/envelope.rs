use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use pmm_common::Result;

use crate::registry::ToolKind;

/// Rendered output of a template: task tag, model instructions and the
/// caller's inputs echoed alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolEnvelope<I> {
    pub task: &'static str,
    pub instructions: String,
    #[serde(flatten)]
    pub input: I,
}

impl<I: Serialize> ToolEnvelope<I> {
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_turn(&self) -> Result<String> {
        envelope_turn(&self.to_value()?)
    }
}

/// An instruction template keyed by its input record.
///
/// Required inputs are enforced by the record's type (and by serde when
/// arguments arrive as JSON), so rendering itself cannot fail.
pub trait Template: Serialize + DeserializeOwned + Clone {
    const KIND: ToolKind;

    fn instructions(&self) -> String;

    fn render(&self) -> ToolEnvelope<Self> {
        debug!(tool = Self::KIND.name(), task = Self::KIND.task(), "Rendering template");
        ToolEnvelope {
            task: Self::KIND.task(),
            instructions: self.instructions(),
            input: self.clone(),
        }
    }
}

/// Formats a rendered envelope as the user turn handed to the model: the
/// task tag, the instructions verbatim, then the echoed inputs as JSON.
pub fn envelope_turn(envelope: &Value) -> Result<String> {
    let task = envelope.get("task").and_then(Value::as_str).unwrap_or_default();
    let instructions = envelope
        .get("instructions")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let mut inputs = envelope.as_object().cloned().unwrap_or_default();
    inputs.remove("task");
    inputs.remove("instructions");
    let inputs = serde_json::to_string_pretty(&Value::Object(inputs))?;

    Ok(format!(
        "## TASK: {task}\n\n{instructions}\n\n## INPUTS\n```json\n{inputs}\n```"
    ))
}

pub(crate) fn provided_list(values: &Option<Vec<String>>) -> Option<String> {
    values
        .as_ref()
        .filter(|list| !list.is_empty())
        .map(|list| list.join(", "))
}

/// Appends a `## CONTEXT` block listing the supplied optional inputs.
pub(crate) fn with_context(body: &str, context: &[(&str, Option<String>)]) -> String {
    let lines: Vec<String> = context
        .iter()
        .filter_map(|(label, value)| value.as_ref().map(|v| format!("- **{label}:** {v}")))
        .collect();

    if lines.is_empty() {
        return body.to_string();
    }
    format!("{body}\n\n## CONTEXT\n{}", lines.join("\n"))
}
