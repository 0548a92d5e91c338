//! Shared test harness for E2E integration tests.
//!
//! Runs the real router with the real OpenAI and Aptos adapters, pointed at
//! two wiremock servers standing in for the text-generation API and the
//! ledger fullnode.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sb_api::config::ApiConfig;
use sb_api::routes::build_router;
use sb_api::state::AppState;
use sb_assistant::{AssistantConfig, OpenAiConfig};
use sb_ledger::LedgerConfig;

/// Contract address the harness configures.
pub const CONTRACT: &str = "0xcafe";

/// End-to-end test harness: router + mock generation API + mock ledger node.
pub struct TestHarness {
    pub router: Router,
    pub openai: MockServer,
    pub node: MockServer,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self::with_assistant_config(AssistantConfig::default()).await
    }

    pub async fn with_assistant_config(assistant: AssistantConfig) -> Self {
        let openai = MockServer::start().await;
        let node = MockServer::start().await;

        let config = ApiConfig {
            openai: OpenAiConfig {
                api_base: format!("{}/v1", openai.uri()),
                api_key: Some("sk-test".into()),
                model: "gpt-3.5-turbo".into(),
                timeout_secs: 2,
            },
            ledger: LedgerConfig {
                node_url: format!("{}/v1", node.uri()),
                contract_address: CONTRACT.into(),
                module_name: "message_board".into(),
                timeout_secs: 2,
            },
            assistant,
            ..ApiConfig::default()
        };

        let state = AppState::from_config(&config).unwrap();
        Self {
            router: build_router(state),
            openai,
            node,
        }
    }

    /// Every classification call answers with `content`.
    pub async fn classifier_replies(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
            .mount(&self.openai)
            .await;
    }

    /// Classification calls whose user message is `question` answer with `content`.
    pub async fn classifier_replies_to(&self, question: &str, content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains(format!(
                "{{\"role\":\"user\",\"content\":\"{question}\"}}"
            )))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion(content))
                    .set_delay(std::time::Duration::from_millis(30)),
            )
            .mount(&self.openai)
            .await;
    }

    /// The generation API is down.
    pub async fn classifier_fails(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&self.openai)
            .await;
    }

    /// View function `function` returns `value` as its single result.
    pub async fn view_returns(&self, function: &str, value: Value) {
        Mock::given(method("POST"))
            .and(path("/v1/view"))
            .and(body_partial_json(json!({
                "function": format!("{CONTRACT}::message_board::{function}")
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([value])))
            .mount(&self.node)
            .await;
    }

    /// Every view call fails on the node.
    pub async fn node_fails(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/view"))
            .respond_with(ResponseTemplate::new(500).set_body_string("node unavailable"))
            .mount(&self.node)
            .await;
    }

    /// POST a JSON body and return (status, JSON body).
    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    /// Ask the assistant via `POST /api/v1/assistant`.
    pub async fn ask(&self, prompt: &str) -> (StatusCode, Value) {
        self.post("/api/v1/assistant", json!({ "prompt": prompt })).await
    }

    /// Functions called on the ledger node, in order.
    pub async fn view_calls(&self) -> Vec<String> {
        self.node
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| {
                let body: Value = req.body_json().unwrap();
                body["function"].as_str().unwrap_or_default().to_string()
            })
            .collect()
    }

    pub async fn classifier_call_count(&self) -> usize {
        self.openai.received_requests().await.unwrap_or_default().len()
    }
}

/// Chat completions response body with the given content.
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-e2e",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
