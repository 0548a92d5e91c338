//! Command dispatcher: turns an `Intent` into the final response text.
//!
//! Routes by intent:
//! - `Command` runs the matching ledger query and renders its template
//! - `Reply` passes the classifier's text through untouched
//!
//! Each ledger query is guarded on its own. A failed read is logged and
//! answered with an apology specific to that data, never an error.

use std::collections::HashSet;
use std::sync::Arc;

use sb_ledger::{LedgerClient, LedgerQuery, LedgerResult};
use sb_protocol::{AnswerSource, CommandToken, Intent, format_apt};

use crate::elaborate::Elaborator;

/// A fresh reading from the ledger, one variant per command.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerReading {
    /// Number of distinct depositor addresses.
    UniqueDepositors(usize),
    DepositCount(u64),
    ReturnPercentage(f64),
    /// Vault balance in octas.
    VaultBalance(u64),
}

impl LedgerReading {
    /// Fixed sentence for this reading.
    pub fn sentence(&self) -> String {
        match self {
            LedgerReading::UniqueDepositors(n) => {
                format!("There are {n} unique depositors in the pool.")
            }
            LedgerReading::DepositCount(n) => format!("The pool has received {n} deposits so far."),
            LedgerReading::ReturnPercentage(pct) => {
                format!("The current return percentage is {pct}%.")
            }
            LedgerReading::VaultBalance(octas) => {
                format!("The vault currently contains {} APT.", format_apt(*octas))
            }
        }
    }

    /// Short label describing the data, used when elaborating.
    pub fn data_type(&self) -> &'static str {
        match self {
            LedgerReading::UniqueDepositors(_) => "depositors",
            LedgerReading::DepositCount(_) => "depositor_count",
            LedgerReading::ReturnPercentage(_) => "return_percentage",
            LedgerReading::VaultBalance(_) => "vault_balance",
        }
    }

    /// The bare value, in display units.
    pub fn value(&self) -> String {
        match self {
            LedgerReading::UniqueDepositors(n) => n.to_string(),
            LedgerReading::DepositCount(n) => n.to_string(),
            LedgerReading::ReturnPercentage(pct) => format!("{pct}%"),
            LedgerReading::VaultBalance(octas) => format!("{} APT", format_apt(*octas)),
        }
    }
}

/// Apology returned when the ledger query for `token` fails.
pub fn apology(token: CommandToken) -> &'static str {
    match token {
        CommandToken::Depositors => "I couldn't retrieve the depositor information at the moment.",
        CommandToken::DepositorCount => "I couldn't retrieve the depositor count at the moment.",
        CommandToken::PercentReturn => "I couldn't retrieve the return percentage at the moment.",
        CommandToken::VaultTotal => "I couldn't retrieve the vault balance at the moment.",
    }
}

/// Outcome of dispatching one intent.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub text: String,
    pub source: AnswerSource,
    pub command: Option<CommandToken>,
}

/// Dispatches intents against the ledger.
pub struct CommandDispatcher {
    ledger: Arc<dyn LedgerClient>,
    elaborator: Option<Elaborator>,
}

impl CommandDispatcher {
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self {
            ledger,
            elaborator: None,
        }
    }

    /// Rephrase ledger readings through `elaborator` instead of the fixed templates.
    pub fn with_elaborator(mut self, elaborator: Elaborator) -> Self {
        self.elaborator = Some(elaborator);
        self
    }

    /// Produce the response for `intent`. Never fails.
    ///
    /// `question` is only used when elaborating.
    pub async fn dispatch(&self, question: &str, intent: Intent) -> Dispatched {
        let token = match intent {
            Intent::Reply(text) => {
                return Dispatched {
                    text,
                    source: AnswerSource::Conversational,
                    command: None,
                };
            }
            Intent::Command(token) => token,
        };

        match self.read(token).await {
            Ok(reading) => {
                tracing::info!(command = %token, value = %reading.value(), "ledger query answered");
                let text = match &self.elaborator {
                    Some(elaborator) => elaborator.elaborate(question, &reading).await,
                    None => reading.sentence(),
                };
                Dispatched {
                    text,
                    source: AnswerSource::Ledger,
                    command: Some(token),
                }
            }
            Err(e) => {
                tracing::error!(
                    command = %token,
                    function = ledger_function(token),
                    error = %e,
                    "ledger query failed"
                );
                Dispatched {
                    text: apology(token).to_string(),
                    source: AnswerSource::Fallback,
                    command: Some(token),
                }
            }
        }
    }

    /// Run exactly one ledger query for `token`.
    async fn read(&self, token: CommandToken) -> LedgerResult<LedgerReading> {
        let reading = match token {
            CommandToken::Depositors => {
                let depositors = self.ledger.list_depositors().await?;
                let unique: HashSet<&str> = depositors.iter().map(String::as_str).collect();
                LedgerReading::UniqueDepositors(unique.len())
            }
            CommandToken::DepositorCount => {
                LedgerReading::DepositCount(self.ledger.count_deposits().await?)
            }
            CommandToken::PercentReturn => {
                LedgerReading::ReturnPercentage(self.ledger.get_return_percentage().await?)
            }
            CommandToken::VaultTotal => {
                LedgerReading::VaultBalance(self.ledger.get_vault_balance().await?)
            }
        };
        Ok(reading)
    }
}

fn ledger_function(token: CommandToken) -> &'static str {
    let query = match token {
        CommandToken::Depositors => LedgerQuery::Depositors,
        CommandToken::DepositorCount => LedgerQuery::DepositCount,
        CommandToken::PercentReturn => LedgerQuery::ReturnPercentage,
        CommandToken::VaultTotal => LedgerQuery::VaultBalance,
    };
    query.function_name()
}
