mod error;
mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{pages, AppState};

pub use error::AskError;
pub use handlers::{ask_llm, not_found, TIME_TAKEN_HEADER};
pub use models::{AskRequest, AskResponse, ErrorResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::board))
        .route("/ask", get(pages::ask))
        .route("/api/ask-llm", post(ask_llm))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
