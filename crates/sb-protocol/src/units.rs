//! APT / octa unit conversion.
//!
//! The ledger stores balances in octas; 1 APT = 10^8 octas.

/// Octas per APT.
pub const OCTAS_PER_APT: u64 = 100_000_000;

/// Render an octa amount as APT with exactly two decimals (half-up).
pub fn format_apt(octas: u64) -> String {
    let hundredths_divisor = u128::from(OCTAS_PER_APT / 100);
    let hundredths = (u128::from(octas) + hundredths_divisor / 2) / hundredths_divisor;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Convert a user-entered APT amount to octas, flooring any sub-octa remainder.
///
/// Returns `None` for non-finite, non-positive, or out-of-range amounts, and
/// for amounts too small to be worth one octa.
pub fn apt_to_octas(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    let octas = (amount * OCTAS_PER_APT as f64).floor();
    if octas < 1.0 || octas > u64::MAX as f64 {
        return None;
    }
    Some(octas as u64)
}
