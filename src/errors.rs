use thiserror::Error;

/// Generic message returned to callers for failures that carry no public detail.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// Fallback used when a failed upstream reply carries no `error.message`.
pub const GENERIC_OPENAI_ERROR: &str = "OpenAI API error";

#[derive(Debug, Error)]
pub enum AiqError {
    #[error("Only POST allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    BadRequest(String),

    #[error("Missing {0}")]
    MissingConfig(String),

    #[error("OpenAI API error (status {status}): {}", .message.as_deref().unwrap_or("<no message>"))]
    OpenAIError {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid JSON from OpenAI: {0}")]
    InvalidJson(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Unexpected error: {0}")]
    Internal(String),
}

impl AiqError {
    /// HTTP status code this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::BadRequest(_) => 400,
            Self::MissingConfig(_)
            | Self::OpenAIError { .. }
            | Self::InvalidJson(_)
            | Self::HttpError(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Text placed in the `error` field of the response body.
    ///
    /// Unlike `Display`, this never leaks transport details or raw model output.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::MethodNotAllowed | Self::BadRequest(_) | Self::MissingConfig(_) => {
                self.to_string()
            }
            Self::OpenAIError { message, .. } => message
                .clone()
                .unwrap_or_else(|| GENERIC_OPENAI_ERROR.to_string()),
            Self::InvalidJson(_) => "Invalid JSON from OpenAI".to_string(),
            Self::HttpError(_) | Self::Internal(_) => GENERIC_SERVER_ERROR.to_string(),
        }
    }
}

impl From<reqwest::Error> for AiqError {
    fn from(error: reqwest::Error) -> Self {
        AiqError::HttpError(error.to_string())
    }
}
