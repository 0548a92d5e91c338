//! Assistant facade: the single entry point used by the HTTP layer.

use std::sync::Arc;
use std::time::Instant;

use sb_ledger::LedgerClient;
use sb_protocol::Answer;

use crate::classifier::IntentClassifier;
use crate::config::AssistantConfig;
use crate::dispatcher::CommandDispatcher;
use crate::elaborate::Elaborator;
use crate::error::AssistantResult;
use crate::generator::TextGenerator;

/// Classifies a question, then dispatches it.
///
/// Holds no per-request state, so one instance serves concurrent requests.
pub struct Assistant {
    classifier: IntentClassifier,
    dispatcher: CommandDispatcher,
}

impl Assistant {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        ledger: Arc<dyn LedgerClient>,
        config: &AssistantConfig,
    ) -> Self {
        let classifier = IntentClassifier::new(generator.clone(), config.classify);
        let mut dispatcher = CommandDispatcher::new(ledger);
        if config.elaborate_ledger_answers {
            dispatcher = dispatcher.with_elaborator(Elaborator::new(generator, config.elaborate));
        }
        Self {
            classifier,
            dispatcher,
        }
    }

    /// Answer a question.
    ///
    /// Fails only for a blank question or when classification itself fails;
    /// ledger trouble degrades to an apology inside the answer.
    pub async fn submit(&self, question: &str) -> AssistantResult<Answer> {
        let start = Instant::now();

        let intent = self.classifier.classify(question).await?;
        let dispatched = self.dispatcher.dispatch(question, intent).await;

        let latency_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            source = ?dispatched.source,
            command = ?dispatched.command,
            latency_ms,
            "question answered"
        );

        Ok(Answer::new(
            dispatched.text,
            dispatched.source,
            dispatched.command,
            latency_ms,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssistantError;
    use crate::generator::GenerationRequest;
    use crate::mock::MockGenerator;
    use sb_ledger::{LedgerQuery, MockLedger};
    use sb_protocol::{AnswerSource, CommandToken};
    use std::time::Duration;

    fn assistant(generator: &Arc<MockGenerator>, ledger: &Arc<MockLedger>) -> Assistant {
        Assistant::new(generator.clone(), ledger.clone(), &AssistantConfig::default())
    }

    #[tokio::test]
    async fn each_token_runs_one_matching_query() {
        let cases = [
            ("get depositors", LedgerQuery::Depositors, "There are 2 unique depositors in the pool."),
            ("get depositor count", LedgerQuery::DepositCount, "The pool has received 3 deposits so far."),
            ("get percent return", LedgerQuery::ReturnPercentage, "The current return percentage is 12%."),
            ("get vault total", LedgerQuery::VaultBalance, "The vault currently contains 1.50 APT."),
        ];

        for (token_text, query, expected) in cases {
            let generator = Arc::new(MockGenerator::replying(token_text));
            let ledger = Arc::new(MockLedger::with_sample_data());

            let answer = assistant(&generator, &ledger).submit("question").await.unwrap();
            assert_eq!(answer.response, expected);
            assert_eq!(answer.source, AnswerSource::Ledger);
            assert_eq!(ledger.calls(), vec![query]);
            assert_eq!(generator.call_count(), 1);
        }
    }

    #[tokio::test]
    async fn messy_token_still_matches() {
        let generator = Arc::new(MockGenerator::replying("Get Depositors "));
        let ledger = Arc::new(MockLedger::with_sample_data());

        let answer = assistant(&generator, &ledger).submit("who bet?").await.unwrap();
        assert_eq!(answer.command, Some(CommandToken::Depositors));
        assert_eq!(answer.response, "There are 2 unique depositors in the pool.");
    }

    #[tokio::test]
    async fn free_text_returned_unchanged() {
        let reply = "You can stake APT from the panel under the stream.";
        let generator = Arc::new(MockGenerator::replying(reply));
        let ledger = Arc::new(MockLedger::with_sample_data());

        let answer = assistant(&generator, &ledger).submit("how do I bet?").await.unwrap();
        assert_eq!(answer.response, reply);
        assert_eq!(answer.source, AnswerSource::Conversational);
        assert!(answer.command.is_none());
        assert!(ledger.calls().is_empty());
    }

    #[tokio::test]
    async fn ledger_failure_is_absorbed() {
        let generator = Arc::new(MockGenerator::replying("get vault total"));
        let ledger = Arc::new(MockLedger::new());

        let answer = assistant(&generator, &ledger).submit("pool size?").await.unwrap();
        assert_eq!(answer.response, "I couldn't retrieve the vault balance at the moment.");
        assert_eq!(answer.source, AnswerSource::Fallback);
    }

    #[tokio::test]
    async fn empty_question_makes_no_external_calls() {
        let generator = Arc::new(MockGenerator::replying("get vault total"));
        let ledger = Arc::new(MockLedger::with_sample_data());

        let err = assistant(&generator, &ledger).submit("").await.unwrap_err();
        assert!(matches!(err, AssistantError::InvalidInput(_)));
        assert_eq!(generator.call_count(), 0);
        assert!(ledger.calls().is_empty());
    }

    #[tokio::test]
    async fn classification_failure_surfaces() {
        let generator = Arc::new(MockGenerator::failing());
        let ledger = Arc::new(MockLedger::with_sample_data());

        let err = assistant(&generator, &ledger).submit("pool size?").await.unwrap_err();
        assert!(matches!(err, AssistantError::ExternalService(_)));
        assert!(ledger.calls().is_empty());
    }

    #[tokio::test]
    async fn elaboration_is_opt_in() {
        let generator = Arc::new(MockGenerator::from_fn(|req: &GenerationRequest| {
            if req.user.is_some() {
                Ok("get depositor count".into())
            } else {
                Ok("Three deposits have landed so far!".into())
            }
        }));
        let ledger = Arc::new(MockLedger::with_sample_data());
        let config = AssistantConfig {
            elaborate_ledger_answers: true,
            ..AssistantConfig::default()
        };

        let answer = Assistant::new(generator.clone(), ledger.clone(), &config)
            .submit("how many deposits?")
            .await
            .unwrap();
        assert_eq!(answer.response, "Three deposits have landed so far!");
        assert_eq!(answer.source, AnswerSource::Ledger);
        assert_eq!(generator.call_count(), 2);
        assert_eq!(ledger.calls(), vec![LedgerQuery::DepositCount]);
    }

    #[tokio::test]
    async fn concurrent_questions_do_not_cross_talk() {
        let generator = Arc::new(
            MockGenerator::from_fn(|req: &GenerationRequest| {
                let question = req.user.as_deref().unwrap_or_default();
                Ok(match question {
                    "vault" => "get vault total".to_string(),
                    "count" => "get depositor count".to_string(),
                    other => format!("echo: {other}"),
                })
            })
            .with_delay(Duration::from_millis(20)),
        );
        let ledger = Arc::new(MockLedger::with_sample_data());
        let assistant = Arc::new(assistant(&generator, &ledger));

        let questions = ["vault", "count", "hello", "vault", "bye"];
        let handles: Vec<_> = questions
            .iter()
            .map(|q| {
                let assistant = assistant.clone();
                let q = q.to_string();
                tokio::spawn(async move { (q.clone(), assistant.submit(&q).await.unwrap()) })
            })
            .collect();

        for handle in handles {
            let (question, answer) = handle.await.unwrap();
            let expected = match question.as_str() {
                "vault" => "The vault currently contains 1.50 APT.".to_string(),
                "count" => "The pool has received 3 deposits so far.".to_string(),
                other => format!("echo: {other}"),
            };
            assert_eq!(answer.response, expected, "answer for {question:?}");
        }
        assert_eq!(generator.call_count(), questions.len());
        assert_eq!(ledger.call_count(LedgerQuery::VaultBalance), 2);
        assert_eq!(ledger.call_count(LedgerQuery::DepositCount), 1);
    }
}
