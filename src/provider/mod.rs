mod anthropic;
mod openai;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use thiserror::Error;

pub const FAST_MODEL_ALIAS: &str = "claude-3.5-sonnet";

pub const FAST_UPSTREAM_MODEL: &str = "claude-3-5-sonnet-20240620";

pub const FAST_MAX_TOKENS: u32 = 2000;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} returned {status}: {body}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed response from {provider}: {reason}")]
    Malformed {
        provider: &'static str,
        reason: String,
    },

    #[error("invalid {provider} credential: {source}")]
    Credential {
        provider: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: Option<u32>,
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Primary,
    Secondary,
}

pub fn select_route(model: &str, prompt: &str) -> (Route, CompletionRequest) {
    if model == FAST_MODEL_ALIAS {
        (
            Route::Secondary,
            CompletionRequest {
                model: FAST_UPSTREAM_MODEL.to_string(),
                prompt: prompt.to_string(),
                max_tokens: Some(FAST_MAX_TOKENS),
            },
        )
    } else {
        (
            Route::Primary,
            CompletionRequest {
                model: model.to_string(),
                prompt: prompt.to_string(),
                max_tokens: None,
            },
        )
    }
}
