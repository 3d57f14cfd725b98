//! Integration tests for the client trait objects used by the agent.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use pmm_common::{PmmError, Result};
use pmm_llm::{ChatMessage, LlmClient, LlmRequest, LlmResponse};

/// Records every request and answers with a fixed reply.
struct RecordingClient {
    seen: Mutex<Vec<LlmRequest>>,
    fail: bool,
}

#[async_trait]
impl LlmClient for RecordingClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        self.seen.lock().unwrap().push(request);
        if self.fail {
            return Err(PmmError::Llm("Anthropic API error 529: overloaded".into()));
        }
        Ok(LlmResponse {
            content: "VERDICT: FAIL".into(),
            model: "mock".into(),
            usage: None,
            finish_reason: Some("end_turn".into()),
        })
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[tokio::test]
async fn arc_and_box_delegate_to_inner_client() {
    let inner = Arc::new(RecordingClient {
        seen: Mutex::new(Vec::new()),
        fail: false,
    });

    let as_arc: Arc<dyn LlmClient> = inner.clone();
    let boxed: Box<dyn LlmClient> = Box::new(as_arc.clone());

    let request = LlmRequest::conversation("system", vec![ChatMessage::user("five-second test")]);
    let response = boxed.complete(request).await.unwrap();

    assert_eq!(response.content, "VERDICT: FAIL");
    assert_eq!(boxed.model_name(), "mock");
    assert_eq!(inner.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn forwarded_errors_surface_after_a_single_attempt() {
    let inner = Arc::new(RecordingClient {
        seen: Mutex::new(Vec::new()),
        fail: true,
    });

    let as_arc: Arc<dyn LlmClient> = inner.clone();
    let boxed: Box<dyn LlmClient> = Box::new(as_arc);

    let request = LlmRequest::conversation("system", vec![ChatMessage::user("audit")])
        .with_max_tokens(512);
    let err = boxed.complete(request).await.unwrap_err();

    assert!(matches!(err, PmmError::Llm(ref msg) if msg.contains("529")));
    let seen = inner.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].max_tokens, Some(512));
    assert_eq!(seen[0].messages[0].content, "audit");
}
