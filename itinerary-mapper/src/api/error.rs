//! Payload loading error types.

/// Errors from reading an itinerary payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was not a valid itinerary document
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        PayloadError::Json {
            message: err.to_string(),
        }
    }
}
