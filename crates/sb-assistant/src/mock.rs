//! Mock text generator for testing.
//!
//! Responds through a caller-supplied function and records every request,
//! so tests can assert on prompts and call counts without a network.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::generator::{GenerationError, GenerationRequest, TextGenerator};

type Responder = dyn Fn(&GenerationRequest) -> Result<String, GenerationError> + Send + Sync;

/// Mock generator with scripted responses and request recording.
pub struct MockGenerator {
    responder: Arc<Responder>,
    /// Artificial latency applied before responding.
    delay: Option<Duration>,
    /// All requests passed to `generate` (for test assertions).
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGenerator {
    /// Respond to every request through `f`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&GenerationRequest) -> Result<String, GenerationError> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(f),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::from_fn(move |_| Ok(text.clone()))
    }

    /// Always fail as an unreachable service would.
    pub fn failing() -> Self {
        Self::from_fn(|_| Err(GenerationError::Transport("mock: connection refused".into())))
    }

    /// Delay every response by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get copies of all requests received.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.responder)(request)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
