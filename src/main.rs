use anyhow::{Context, Result};
use ask_llm_board::provider::FAST_MODEL_ALIAS;
use ask_llm_board::{build_app, run_server, AppConfig, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting ask-llm-board v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env();
    if config.openai_api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set; primary provider calls will fail");
    }
    if config.anthropic_api_key.is_empty() {
        warn!("ANTHROPIC_API_KEY is not set; {FAST_MODEL_ALIAS} requests will fail");
    }

    let app = build_app(AppState::from_config(&config));

    run_server(app, config.port)
        .await
        .with_context(|| format!("server on port {} failed", config.port))
}
