use std::fmt;

/// Errors surfaced by the API client.
///
/// Three kinds, matching how call sites react: transport failures get a
/// generic toast plus a log line, non-2xx statuses get an action-specific
/// toast, and undecodable bodies are reported like transport failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (DNS, connection, timeout).
    Transport(String),
    /// The backend answered with a non-success status.
    Status { code: u16, message: String },
    /// The response body could not be decoded as the expected JSON.
    Decode(String),
}

impl ApiError {
    pub fn status(code: u16, message: impl Into<String>) -> Self {
        ApiError::Status {
            code,
            message: message.into(),
        }
    }

    /// True when the backend itself rejected the request, as opposed to
    /// the request never arriving.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "request failed: {msg}"),
            ApiError::Status { code, message } => {
                if message.is_empty() {
                    write!(f, "server responded with status {code}")
                } else {
                    write!(f, "server responded with status {code}: {message}")
                }
            }
            ApiError::Decode(msg) => write!(f, "unexpected response body: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_rejections() {
        assert!(ApiError::status(404, "not found").is_rejection());
        assert!(!ApiError::Transport("connection refused".into()).is_rejection());
        assert!(!ApiError::Decode("expected array".into()).is_rejection());
    }

    #[test]
    fn display_includes_status_code() {
        let err = ApiError::status(422, "missing slot");
        assert_eq!(
            err.to_string(),
            "server responded with status 422: missing slot"
        );
        let bare = ApiError::status(500, "");
        assert_eq!(bare.to_string(), "server responded with status 500");
    }
}
