//! Assistant behaviour configuration.

use serde::Deserialize;

/// Sampling parameters for one generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f64,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl SamplingConfig {
    /// Low randomness, so command tokens come back verbatim.
    pub const CLASSIFY: SamplingConfig = SamplingConfig {
        temperature: 0.3,
        max_tokens: 150,
    };

    /// Higher randomness for conversational rephrasing of ledger readings.
    pub const ELABORATE: SamplingConfig = SamplingConfig {
        temperature: 0.7,
        max_tokens: 150,
    };
}

fn default_classify() -> SamplingConfig {
    SamplingConfig::CLASSIFY
}

fn default_elaborate() -> SamplingConfig {
    SamplingConfig::ELABORATE
}

/// Top-level assistant configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Sampling for the classification call.
    #[serde(default = "default_classify")]
    pub classify: SamplingConfig,
    /// Sampling for the elaboration call.
    #[serde(default = "default_elaborate")]
    pub elaborate: SamplingConfig,
    /// Rephrase ledger readings through the generator instead of the fixed
    /// templates. Off by default.
    #[serde(default)]
    pub elaborate_ledger_answers: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            classify: default_classify(),
            elaborate: default_elaborate(),
            elaborate_ledger_answers: false,
        }
    }
}

impl AssistantConfig {
    /// Load config from environment variables (`SB_ELABORATE`).
    pub fn from_env() -> Self {
        let elaborate_ledger_answers = std::env::var("SB_ELABORATE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);
        Self {
            elaborate_ledger_answers,
            ..Self::default()
        }
    }
}
