use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four fixed strings the classifier emits to request a ledger read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandToken {
    /// `get depositors`: distinct addresses that deposited into the pool.
    Depositors,
    /// `get depositor count`: number of deposits received.
    DepositorCount,
    /// `get percent return`: current gambler return percentage.
    PercentReturn,
    /// `get vault total`: vault balance.
    VaultTotal,
}

impl CommandToken {
    /// Every recognised token, in the order the classifier prompt lists them.
    pub const ALL: [CommandToken; 4] = [
        CommandToken::Depositors,
        CommandToken::DepositorCount,
        CommandToken::PercentReturn,
        CommandToken::VaultTotal,
    ];

    /// The exact text the classifier must produce for this token.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandToken::Depositors => "get depositors",
            CommandToken::DepositorCount => "get depositor count",
            CommandToken::PercentReturn => "get percent return",
            CommandToken::VaultTotal => "get vault total",
        }
    }
}

impl fmt::Display for CommandToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text is not exactly one of the command tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a command token: {0:?}")]
pub struct UnknownToken(pub String);

impl FromStr for CommandToken {
    type Err = UnknownToken;

    /// Trims and lowercases, then requires an exact match. No partial matching.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        CommandToken::ALL
            .into_iter()
            .find(|token| token.as_str() == normalized)
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}

/// What the classifier asked for, decided once at the classifier boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Intent {
    /// Run the matching ledger query and render its template.
    Command(CommandToken),
    /// Free-form answer, returned to the caller verbatim.
    Reply(String),
}

impl Intent {
    /// Map raw classifier text into an intent.
    ///
    /// This is the only place string matching happens; anything that is not
    /// exactly a token (after trim + lowercase) becomes an untouched `Reply`.
    pub fn from_classifier_output(raw: &str) -> Self {
        match raw.parse::<CommandToken>() {
            Ok(token) => Intent::Command(token),
            Err(_) => Intent::Reply(raw.to_string()),
        }
    }

    pub fn command(&self) -> Option<CommandToken> {
        match self {
            Intent::Command(token) => Some(*token),
            Intent::Reply(_) => None,
        }
    }
}
