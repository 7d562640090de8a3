use crate::config::ConfigError;

/// Everything that can end an invocation without a result.
#[derive(Debug, thiserror::Error)]
pub enum ValyuError {
    #[error("Invalid search type: {given}. Valid types: {valid}")]
    InvalidSearchType { given: String, valid: String },

    #[error("Invalid maxResults: {0}. Expected a positive integer")]
    InvalidMaxResults(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
