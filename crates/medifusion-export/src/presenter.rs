//! Transient and error states of the results area.

use crate::render::ResultsView;

/// Shown under every error message.
pub const ERROR_HINT: &str =
    "Check the log output for details and ensure the analysis server is running.";

/// Fallback when the backend reports a failure without a message.
pub const GENERIC_FAILURE: &str = "Analysis failed";

/// The single error card that replaces whatever the results area held.
pub fn error_view(message: impl Into<String>) -> ResultsView {
    ResultsView::Error {
        message: message.into(),
        hint: ERROR_HINT.to_string(),
    }
}

/// The "analysis in progress" card shown while a request is outstanding.
pub fn placeholder_view() -> ResultsView {
    ResultsView::Placeholder
}
