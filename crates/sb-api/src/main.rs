//! StreamBet API: assistant HTTP server.
//!
//! Serves the assistant shortcut of the livestream betting page and builds
//! unsigned deposit payloads for the wallet.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use sb_api::config::ApiConfig;
use sb_api::routes;
use sb_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "sb-api starting");

    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(path = %path, "loading config file");
            ApiConfig::from_file(&path)?
        }
        None => ApiConfig::from_env(),
    };

    if config.openai.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set, classification requests will be unauthenticated");
    }
    tracing::info!(
        node_url = %config.ledger.node_url,
        contract = %config.ledger.contract_address,
        module = %config.ledger.module_name,
        model = %config.openai.model,
        elaborate = config.assistant.elaborate_ledger_answers,
        "config loaded"
    );

    let state = AppState::from_config(&config)?;
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
