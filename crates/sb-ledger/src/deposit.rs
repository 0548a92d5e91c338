//! Unsigned `deposit` payload for the wallet to sign and submit.

use sb_protocol::{EntryFunctionPayload, apt_to_octas};

use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};

/// Entry function that stakes into the vault.
const DEPOSIT_FUNCTION: &str = "deposit";

/// Build the payload staking `amount_apt` into the vault (floored to whole octas).
pub fn deposit_payload(config: &LedgerConfig, amount_apt: f64) -> LedgerResult<EntryFunctionPayload> {
    let octas = apt_to_octas(amount_apt).ok_or(LedgerError::InvalidAmount(amount_apt))?;
    tracing::debug!(amount_apt, octas, "built deposit payload");
    Ok(EntryFunctionPayload::new(
        config.function_id(DEPOSIT_FUNCTION),
        vec![octas.to_string()],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_targets_deposit_function() {
        let config = LedgerConfig {
            contract_address: "0xcafe".into(),
            ..LedgerConfig::default()
        };
        let payload = deposit_payload(&config, 1.5).unwrap();
        assert_eq!(payload.function, "0xcafe::message_board::deposit");
        assert_eq!(payload.arguments, vec!["150000000".to_string()]);
        assert!(payload.type_arguments.is_empty());
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let config = LedgerConfig::default();
        assert!(matches!(
            deposit_payload(&config, 0.0),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(deposit_payload(&config, -2.0).is_err());
        assert!(deposit_payload(&config, f64::NAN).is_err());
    }
}
