use thiserror::Error;

use medifusion_export::error::ExportError;
use medifusion_export::presenter::GENERIC_FAILURE;

/// Why a submission produced no results. The `Display` text is what the
/// error card shows.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid media type {media_type} for {file}")]
    MediaType { file: String, media_type: String },

    #[error("HTTP client setup failed: {0}")]
    Setup(String),

    /// The request never got an HTTP answer.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx answer. The body is not inspected.
    #[error("Server error: {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Payload(String),

    /// The backend answered with a non-success status.
    #[error("{}", .0.as_deref().unwrap_or(GENERIC_FAILURE))]
    Application(Option<String>),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("results area update failed: {0}")]
    Render(#[from] ExportError),
}
