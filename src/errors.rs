// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("source text must not be empty")]
    EmptySourceText,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("Received empty text response from model")]
    EmptyResponse,

    #[error("Malformed quiz payload: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider '{0}' not found")]
    ProviderNotFound(String),
}

impl QuizError {
    /// Failure class reported to the caller. Timeouts and auth rejections
    /// count as `upstream_unavailable`; a response that arrived but failed
    /// shape validation counts as `malformed_response`.
    pub fn kind(&self) -> &'static str {
        match self {
            QuizError::EmptySourceText
            | QuizError::Config(_)
            | QuizError::ProviderNotFound(_) => "invalid_input",
            QuizError::Request(_) | QuizError::ApiStatus { .. } => "upstream_unavailable",
            QuizError::EmptyResponse | QuizError::MalformedResponse(_) => "malformed_response",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
