pub mod api;
pub mod config;
pub mod extract;
pub mod pages;
pub mod provider;

use std::sync::Arc;

use axum::Router;

pub use config::AppConfig;
use provider::{AnthropicProvider, ChatProvider, OpenAiProvider, Route};

#[derive(Clone)]
pub struct AppState {
    pub primary: Arc<dyn ChatProvider>,
    pub secondary: Arc<dyn ChatProvider>,
}

impl AppState {
    pub fn new(primary: Arc<dyn ChatProvider>, secondary: Arc<dyn ChatProvider>) -> Self {
        Self { primary, secondary }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(OpenAiProvider::new(
                config.openai_api_key.clone(),
                config.openai_base_url.clone(),
            )),
            Arc::new(AnthropicProvider::new(
                config.anthropic_api_key.clone(),
                config.anthropic_base_url.clone(),
            )),
        )
    }

    pub fn provider(&self, route: Route) -> &dyn ChatProvider {
        match route {
            Route::Primary => self.primary.as_ref(),
            Route::Secondary => self.secondary.as_ref(),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
