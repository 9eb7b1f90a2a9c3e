use thiserror::Error;

/// Generic message used when the server reports failure without a usable message.
pub const API_FAILURE_FALLBACK: &str = "Failed to fetch assets";

/// Generic message used when a transport error carries no text of its own.
pub const UNKNOWN_FAILURE_FALLBACK: &str = "An unknown error occurred while fetching assets";

/// Terminal failure of one fetch attempt.
///
/// `Display` is the exact string surfaced to the user through
/// [`FetchState::error`](crate::fetch::FetchState::error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network failure or non-2xx HTTP status
    #[error("{0}")]
    Transport(String),

    /// The server answered `success: false`
    #[error("{0}")]
    ApiReported(String),

    /// Payload shape was not recognized
    #[error("Invalid response format")]
    InvalidFormat,
}

impl FetchError {
    pub fn http_status(code: u16) -> Self {
        Self::Transport(format!("HTTP error! status: {}", code))
    }

    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport(UNKNOWN_FAILURE_FALLBACK.to_string())
        } else {
            Self::Transport(message)
        }
    }

    pub fn api_reported(message: Option<&str>) -> Self {
        Self::ApiReported(message.unwrap_or(API_FAILURE_FALLBACK).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message() {
        assert_eq!(
            FetchError::http_status(404).to_string(),
            "HTTP error! status: 404"
        );
    }

    #[test]
    fn network_message_falls_back_when_blank() {
        assert_eq!(FetchError::network("Network error").to_string(), "Network error");
        assert_eq!(FetchError::network("  ").to_string(), UNKNOWN_FAILURE_FALLBACK);
    }

    #[test]
    fn api_reported_message() {
        assert_eq!(FetchError::api_reported(Some("db down")).to_string(), "db down");
        assert_eq!(FetchError::api_reported(None).to_string(), API_FAILURE_FALLBACK);
    }

    #[test]
    fn invalid_format_message() {
        assert_eq!(FetchError::InvalidFormat.to_string(), "Invalid response format");
    }
}
