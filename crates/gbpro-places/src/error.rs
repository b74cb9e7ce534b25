use gbpro_audit::UpstreamError;
use thiserror::Error;

/// Errors returned by the places client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Places API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl From<PlacesError> for UpstreamError {
    fn from(e: PlacesError) -> Self {
        match e {
            PlacesError::Deserialize { .. } => UpstreamError::InvalidResponse(e.to_string()),
            _ => UpstreamError::Unavailable(e.to_string()),
        }
    }
}
