use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result type for responder operations.
pub type Result<T> = std::result::Result<T, ResponderError>;

/// Errors surfaced by the responder core.
#[derive(Error, Debug)]
pub enum ResponderError {
    /// A static dataset could not be read or parsed
    #[error("failed to load {}: {source}", path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A dataset parsed but its content is unusable
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The generative fallback could not produce a reply
    #[error("generation unavailable: {0}")]
    Generation(#[from] GenerationError),
}

impl ResponderError {
    pub fn data_load(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::DataLoad {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Generation backend errors.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Connection failed or the request could not be sent
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response from the backend
    #[error("API error: {0}")]
    Api(String),

    /// Unexpected response body
    #[error("parse error: {0}")]
    Parse(String),

    /// Backend answered without any generated text
    #[error("backend returned no completion")]
    Empty,

    /// Backend did not answer within the configured limit
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}
