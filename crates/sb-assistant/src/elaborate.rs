//! Conversational rephrasing of ledger readings.
//!
//! Uses the generator at a higher temperature to turn a reading into a
//! friendly sentence. Falls back to a plain sentence when generation fails.

use std::sync::Arc;

use crate::config::SamplingConfig;
use crate::dispatcher::LedgerReading;
use crate::generator::{GenerationRequest, TextGenerator};

/// Rephrases ledger readings through a text generator.
pub struct Elaborator {
    generator: Arc<dyn TextGenerator>,
    sampling: SamplingConfig,
}

impl Elaborator {
    pub fn new(generator: Arc<dyn TextGenerator>, sampling: SamplingConfig) -> Self {
        Self {
            generator,
            sampling,
        }
    }

    pub async fn elaborate(&self, question: &str, reading: &LedgerReading) -> String {
        let request = GenerationRequest::new(build_prompt(question, reading), self.sampling);
        match self.generator.generate(&request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    data_type = reading.data_type(),
                    error = %e,
                    "elaboration failed, using plain answer"
                );
                format!("Here's the information you requested: {}", reading.value())
            }
        }
    }
}

fn build_prompt(question: &str, reading: &LedgerReading) -> String {
    format!(
        "You are an AI assistant for a blockchain betting platform.\n\
         The user asked: \"{question}\"\n\n\
         Respond in a natural, conversational way about the following data:\n\
         Data type: {data_type}\n\
         Value: {value}\n\n\
         For depositors, explain how many distinct people have deposited into the pool.\n\
         For depositor_count, explain how many deposits the pool has received.\n\
         For return_percentage, explain what the percent return is.\n\
         For vault_balance, explain the total amount in the pool.\n\n\
         Keep your response concise, friendly, and informative.",
        data_type = reading.data_type(),
        value = reading.value(),
    )
}
