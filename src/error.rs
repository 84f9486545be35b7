use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by API client operations.
///
/// The client recovers nothing on its own: every failure propagates to the
/// calling view, which owns user-visible messaging.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request completed but the backend answered with a non-success
    /// status. Carries the status code and the raw response body.
    #[error("backend returned HTTP {status}: {body}")]
    Transport { status: StatusCode, body: String },

    /// The request could not complete at all (DNS failure, connection
    /// refused, timeout).
    #[error("could not reach the analytics backend: {0}")]
    Connectivity(#[from] reqwest::Error),

    /// The backend answered with a success status but the body did not parse
    /// as the expected JSON shape.
    #[error("failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Status code of the failed response, when the request completed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Transport { status, .. } => Some(*status),
            ApiError::Connectivity(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Connectivity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_carries_status_and_body() {
        let err = ApiError::Transport {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: r#"{"error":"boom"}"#.to_string(),
        };

        assert!(err.is_transport());
        assert!(!err.is_connectivity());
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope }").unwrap_err();
        let err: ApiError = json_err.into();

        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_transport());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("failed to decode"));
    }

    #[test]
    fn test_error_is_send_sync() {
        // Required for sharing failures across async tasks.
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiError>();
    }
}
