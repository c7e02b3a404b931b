/// TextMorph error types
#[derive(Debug, thiserror::Error)]
pub enum TextMorphError {
    /// Configuration error (missing credential, unknown model key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input (empty text, bad variant count)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backend cold start (HTTP 503), caller may retry after a delay
    #[error("Model is loading: {0}")]
    ModelWarming(String),

    /// Non-success backend status or network-level failure
    #[error("Transport error: {message}")]
    Transport {
        /// HTTP status when the backend answered; None for network failures
        status: Option<u16>,
        message: String,
    },

    /// 2xx response with an unexpected body shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Parseable response that yields zero usable output lines
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextMorphError {
    /// Create configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create model warming error
    pub fn model_warming<S: Into<String>>(msg: S) -> Self {
        Self::ModelWarming(msg.into())
    }

    /// Create transport error for a network-level failure
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport {
            status: None,
            message: msg.into(),
        }
    }

    /// Create transport error for a non-success HTTP status
    pub fn transport_status<S: Into<String>>(status: u16, msg: S) -> Self {
        Self::Transport {
            status: Some(status),
            message: msg.into(),
        }
    }

    /// Create malformed response error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create empty result error
    pub fn empty_result<S: Into<String>>(msg: S) -> Self {
        Self::EmptyResult(msg.into())
    }

    /// Whether the caller may retry the same request unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ModelWarming(_) | Self::Transport { .. })
    }
}

// HTTP response conversion (for actix-web)
impl TextMorphError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Config(_) => 500,
            Self::ModelWarming(_) => 503,
            Self::Transport { .. } => 502,
            Self::MalformedResponse(_) => 502,
            Self::EmptyResult(_) => 502,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(TextMorphError::invalid_input("empty").status_code(), 400);
        assert_eq!(TextMorphError::config("no key").status_code(), 500);
        assert_eq!(TextMorphError::model_warming("503").status_code(), 503);
        assert_eq!(TextMorphError::transport("reset").status_code(), 502);
        assert_eq!(TextMorphError::malformed("shape").status_code(), 502);
        assert_eq!(TextMorphError::empty_result("none").status_code(), 502);
    }

    #[test]
    fn test_transport_carries_status() {
        let err = TextMorphError::transport_status(429, "rate limited");
        match err {
            TextMorphError::Transport { status, message } => {
                assert_eq!(status, Some(429));
                assert_eq!(message, "rate limited");
            }
            _ => panic!("expected transport error"),
        }
    }

    #[test]
    fn test_retryable() {
        assert!(TextMorphError::model_warming("cold").is_retryable());
        assert!(TextMorphError::transport("timeout").is_retryable());
        assert!(!TextMorphError::invalid_input("empty").is_retryable());
        assert!(!TextMorphError::malformed("shape").is_retryable());
    }
}
