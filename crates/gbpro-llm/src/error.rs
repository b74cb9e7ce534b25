use gbpro_audit::UpstreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("completion response parse error: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("completion response had no content")]
    EmptyCompletion,

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl From<LlmError> for UpstreamError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Deserialize(_) | LlmError::EmptyCompletion => {
                UpstreamError::InvalidResponse(e.to_string())
            }
            _ => UpstreamError::Unavailable(e.to_string()),
        }
    }
}
