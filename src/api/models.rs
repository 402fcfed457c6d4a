use serde::{Deserialize, Serialize};

use crate::extract::Sections;

#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    pub result: String,
    pub tldr: String,
    pub details: String,
    pub errors: String,
    pub suggestions: String,
    pub time_taken: String,
}

impl AskResponse {
    pub fn new(sections: Sections, time_taken: String) -> Self {
        Self {
            result: sections.result,
            tldr: sections.tldr,
            details: sections.details,
            errors: sections.errors,
            suggestions: sections.suggestions,
            time_taken,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            time_taken: None,
        }
    }

    pub fn with_time_taken(mut self, time_taken: impl Into<String>) -> Self {
        self.time_taken = Some(time_taken.into());
        self
    }
}
