//! Errors raised while talking to the Genius API.

/// Errors that can occur while calling Genius or reading its responses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeniusError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Access token rejected: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected API response format: {0}")]
    Parse(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl GeniusError {
    /// True for failures caused by the response shape rather than transport
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<serde_json::Error> for GeniusError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = GeniusError::Parse("missing field `hits`".to_string());
        assert!(err.to_string().starts_with("Unexpected API response format"));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_status_display() {
        let err = GeniusError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
        assert!(!err.is_format_error());
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<u64>("\"nope\"").unwrap_err();
        let err: GeniusError = serde_err.into();
        assert!(matches!(err, GeniusError::Parse(_)));
    }
}
