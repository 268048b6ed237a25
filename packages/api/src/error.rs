use thiserror::Error;

/// Failure of a remote auth call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service was reached and answered with an error payload.
    #[error("{message}")]
    Rejected { message: String },
    /// The request never completed (network, DNS, malformed response body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Message for the UI: the server's own words when it rejected the call,
    /// a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message } => message.clone(),
            ApiError::Transport(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}
