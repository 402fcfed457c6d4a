use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};

use crate::extract::Sections;
use crate::provider::select_route;
use crate::AppState;

use super::error::AskError;
use super::models::{AskRequest, AskResponse, ErrorResponse};

pub const TIME_TAKEN_HEADER: &str = "x-time-taken";

pub async fn ask_llm(State(state): State<AppState>, body: Bytes) -> Response {
    let started = Instant::now();
    info!("received POST /api/ask-llm");

    let outcome = answer(&state, &body).await;
    let time_taken = seconds_since(started);

    let mut response = match outcome {
        Ok(sections) => {
            info!(time_taken = %time_taken, "sending successful response");
            Json(AskResponse::new(sections, time_taken.clone())).into_response()
        }
        Err(err) => {
            match &err {
                AskError::MissingMessage | AskError::MissingModel => {
                    warn!(time_taken = %time_taken, "request rejected: {err}");
                }
                AskError::EmptyReply => {
                    error!(time_taken = %time_taken, "API response did not contain a message");
                }
                AskError::InvalidBody(_) | AskError::Provider(_) => {
                    error!(time_taken = %time_taken, error = %err, "error processing request");
                }
            }
            err.into_response_with(&time_taken)
        }
    };

    if let Ok(value) = HeaderValue::from_str(&time_taken) {
        response.headers_mut().insert(TIME_TAKEN_HEADER, value);
    }
    response
}

async fn answer(state: &AppState, body: &[u8]) -> Result<Sections, AskError> {
    // content-type is not checked, only the bytes
    let request: AskRequest = serde_json::from_slice(body)?;

    let message = request
        .message
        .filter(|m| !m.is_empty())
        .ok_or(AskError::MissingMessage)?;
    let model = request
        .model
        .filter(|m| !m.is_empty())
        .ok_or(AskError::MissingModel)?;

    let (route, completion) = select_route(&model, &message);
    let provider = state.provider(route);

    info!(provider = provider.name(), model = %completion.model, "sending request");
    let reply = provider.complete(&completion).await?;
    info!(provider = provider.name(), requested_model = %model, "received response");

    if reply.is_empty() {
        return Err(AskError::EmptyReply);
    }

    Ok(Sections::from_reply(&reply))
}

fn seconds_since(started: Instant) -> String {
    format!("{:.1}", started.elapsed().as_secs_f64())
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found"))).into_response()
}
