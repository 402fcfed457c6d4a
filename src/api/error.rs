use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::provider::ProviderError;

use super::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum AskError {
    #[error("Message is required")]
    MissingMessage,

    #[error("Model is required")]
    MissingModel,

    #[error("Failed to get response from API")]
    EmptyReply,

    #[error("unreadable request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AskError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingMessage | Self::MissingModel => StatusCode::BAD_REQUEST,
            Self::EmptyReply | Self::InvalidBody(_) | Self::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn into_response_with(self, time_taken: &str) -> Response {
        let body = match &self {
            Self::MissingMessage | Self::MissingModel | Self::EmptyReply => {
                ErrorResponse::new(self.to_string())
            }
            Self::InvalidBody(_) | Self::Provider(_) => {
                ErrorResponse::new("Internal Server Error").with_time_taken(time_taken)
            }
        };
        (self.status(), Json(body)).into_response()
    }
}
