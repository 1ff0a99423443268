//! Transport-level error types
//!
//! Every failure an API call can produce: bad configuration, a network
//! fault, a non-success HTTP status, or an undecodable response body. The
//! remote service defines no richer error contract, so nothing is
//! translated into domain-specific kinds.

use thiserror::Error;

/// Errors surfaced by API operations
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("{url} returned status {status}: {body}")]
    Status { status: u16, url: String, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the server actually answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened before a response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accessor_only_set_for_status_errors() {
        let err = ApiError::Status {
            status: 404,
            url: "http://localhost/chat".to_string(),
            body: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(ApiError::Network("refused".to_string()).status(), None);
    }

    #[test]
    fn status_display_carries_url_status_and_body() {
        let err = ApiError::Status {
            status: 500,
            url: "http://localhost/chat".to_string(),
            body: "boom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("http://localhost/chat"));
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn transport_predicate() {
        assert!(ApiError::Network("reset".to_string()).is_transport());
        assert!(!ApiError::Decode("eof".to_string()).is_transport());
    }
}
