//! Betting assistant core.
//!
//! Turns a free-text question into either a fresh ledger reading rendered as
//! a sentence, or a conversational answer from the text-generation service:
//!
//! - **Classifier**: asks the generator to emit one of four command tokens or
//!   answer directly, then maps that text into an `Intent`.
//! - **Dispatcher**: runs the ledger query for a command intent and renders
//!   its template, degrading to an apology when the ledger is unavailable.

pub mod assistant;
pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod elaborate;
pub mod error;
pub mod generator;
pub mod mock;
pub mod openai;

pub use assistant::Assistant;
pub use classifier::IntentClassifier;
pub use config::{AssistantConfig, SamplingConfig};
pub use dispatcher::{CommandDispatcher, Dispatched, LedgerReading};
pub use elaborate::Elaborator;
pub use error::{AssistantError, AssistantResult};
pub use generator::{GenerationError, GenerationRequest, TextGenerator};
pub use mock::MockGenerator;
pub use openai::{OpenAiClient, OpenAiConfig};
