//! Intent classifier: question in, `Intent` out.
//!
//! Sends the question with a fixed instruction set to the text generator.
//! The generator either emits one of the four command tokens verbatim or
//! answers the question itself; `Intent::from_classifier_output` decides
//! which.

use std::sync::Arc;

use sb_protocol::Intent;

use crate::config::SamplingConfig;
use crate::error::{AssistantError, AssistantResult};
use crate::generator::{GenerationRequest, TextGenerator};

/// Instruction set for classification. Tokens must stay in sync with `CommandToken::as_str`.
pub const SYSTEM_PROMPT: &str = r#"You are an AI assistant for a blockchain betting platform built on Aptos.

If the user asks who has deposited into the existing pool, respond ONLY with: "get depositors"

If the user asks how many people have deposited into the pool, respond ONLY with: "get depositor count"

If the user asks about the percent return on the pool so far, respond ONLY with: "get percent return"

If the user asks about the total amount in the current pool, respond ONLY with: "get vault total"

For any other question, give a helpful, concise answer about blockchain betting, Aptos, or general platform usage."#;

/// Classifies questions through an external text generator.
pub struct IntentClassifier {
    generator: Arc<dyn TextGenerator>,
    sampling: SamplingConfig,
}

impl IntentClassifier {
    pub fn new(generator: Arc<dyn TextGenerator>, sampling: SamplingConfig) -> Self {
        Self {
            generator,
            sampling,
        }
    }

    /// Classify a question.
    ///
    /// Blank questions are rejected before the generator is called.
    pub async fn classify(&self, question: &str) -> AssistantResult<Intent> {
        if question.trim().is_empty() {
            return Err(AssistantError::InvalidInput("prompt is required".into()));
        }

        let request = GenerationRequest::new(SYSTEM_PROMPT, self.sampling).with_user(question);
        let output = self.generator.generate(&request).await.map_err(|e| {
            tracing::warn!(backend = self.generator.name(), error = %e, "classification failed");
            AssistantError::from(e)
        })?;

        let intent = Intent::from_classifier_output(&output);
        tracing::debug!(command = ?intent.command(), "question classified");
        Ok(intent)
    }
}
