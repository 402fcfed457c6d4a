use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ChatProvider, CompletionRequest, ProviderError, FAST_MAX_TOKENS};

const PROVIDER: &str = "Anthropic";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

impl AnthropicProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(self.api_key.trim()).map_err(|source| {
                ProviderError::Credential {
                    provider: PROVIDER,
                    source,
                }
            })?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        // the messages API rejects requests without a ceiling
        let body = MessagesRequest {
            model: &request.model,
            max_tokens: request.max_tokens.unwrap_or(FAST_MAX_TOKENS),
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
        };

        let resp = self
            .client
            .post(format!("{}/messages", self.base_url))
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status,
                body,
            });
        }

        let parsed: MessagesResponse = resp.json().await?;
        match parsed.content.into_iter().next() {
            Some(ContentBlock::Text { text }) => Ok(text),
            // a non-text first block carries no reply text
            Some(ContentBlock::Other) => Ok(String::new()),
            None => Err(ProviderError::Malformed {
                provider: PROVIDER,
                reason: "empty content array".to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_model_ceiling_and_user_turn() {
        let body = MessagesRequest {
            model: "claude-3-5-sonnet-20240620",
            max_tokens: 2000,
            messages: vec![Message {
                role: "user",
                content: "hello",
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "model": "claude-3-5-sonnet-20240620",
                "max_tokens": 2000,
                "messages": [{ "role": "user", "content": "hello" }]
            })
        );
    }

    #[test]
    fn non_text_blocks_are_tolerated_while_parsing() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"tool_use","id":"x"},{"type":"text","text":"hi"}]}"#,
        )
        .unwrap();
        assert!(matches!(parsed.content[0], ContentBlock::Other));
        assert!(matches!(&parsed.content[1], ContentBlock::Text { text } if text == "hi"));
    }
}
