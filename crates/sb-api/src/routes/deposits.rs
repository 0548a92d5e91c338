//! Deposit payload endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use sb_ledger::deposit_payload;
use sb_protocol::{DepositRequest, EntryFunctionPayload};

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/v1/deposits/payload: build the unsigned `deposit` payload for the wallet.
pub async fn build_deposit_payload(
    State(state): State<AppState>,
    body: Result<Json<DepositRequest>, JsonRejection>,
) -> ApiResult<Json<EntryFunctionPayload>> {
    let Json(req) = body?;
    let payload = deposit_payload(&state.ledger, req.amount_apt)?;
    tracing::info!(
        amount_apt = req.amount_apt,
        function = %payload.function,
        "deposit payload built"
    );
    Ok(Json(payload))
}
