use serde::{Deserialize, Serialize};

/// Unified error type for all collection endpoint operations.
///
/// Each variant carries the `endpoint` path that produced the error plus
/// variant-specific context. All variants are serializable for structured
/// error reporting.
///
/// No variant is retried automatically: every fetch is a single network
/// call, and the only retry path is a new user action (page change,
/// refresh, new search).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// The token provider had no bearer token to attach.
    ///
    /// Raised before any network dispatch.
    MissingToken {
        /// Endpoint path the request was aimed at.
        endpoint: String,
    },

    /// The backend rejected the bearer token (HTTP 401/403).
    AuthRejected {
        /// Endpoint path that produced the error.
        endpoint: String,
        /// HTTP status code returned.
        status: u16,
        /// Response body, truncated for safety.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    Network {
        /// Endpoint path that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// Timeout durations are a property of the injected transport.
    Timeout {
        /// Endpoint path that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The backend answered with a non-2xx status other than 401/403.
    Server {
        /// Endpoint path that produced the error.
        endpoint: String,
        /// HTTP status code returned.
        status: u16,
        /// Response body, truncated for safety.
        body: String,
    },

    /// The response body matched neither recognized list shape.
    ///
    /// List fetches recover from this silently (empty result set); only
    /// single-record operations surface it to callers.
    Shape {
        /// Endpoint path that produced the error.
        endpoint: String,
        /// Details about what failed to parse.
        detail: String,
    },
}

impl ApiError {
    /// Whether the error is expected behavior (bad or missing credentials,
    /// minor backend shape drift), used for log leveling.
    ///
    /// `true` means log at `warn`, `false` at `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MissingToken { .. } | Self::AuthRejected { .. } | Self::Shape { .. }
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingToken { endpoint } => {
                write!(f, "[{endpoint}] No authentication token available")
            }
            Self::AuthRejected {
                endpoint, status, ..
            } => {
                write!(f, "[{endpoint}] Authentication rejected (HTTP {status})")
            }
            Self::Network { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::Server {
                endpoint, status, ..
            } => {
                write!(f, "[{endpoint}] Server error (HTTP {status})")
            }
            Self::Shape { endpoint, detail } => {
                write!(f, "[{endpoint}] Unrecognized response shape: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_token() {
        let e = ApiError::MissingToken {
            endpoint: "/exams".to_string(),
        };
        assert_eq!(e.to_string(), "[/exams] No authentication token available");
    }

    #[test]
    fn display_auth_rejected() {
        let e = ApiError::AuthRejected {
            endpoint: "/students".to_string(),
            status: 401,
            detail: "token expired".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[/students] Authentication rejected (HTTP 401)"
        );
    }

    #[test]
    fn display_network_error() {
        let e = ApiError::Network {
            endpoint: "/events".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[/events] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ApiError::Timeout {
            endpoint: "/results".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[/results] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_server_error() {
        let e = ApiError::Server {
            endpoint: "/teachers".to_string(),
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(e.to_string(), "[/teachers] Server error (HTTP 500)");
    }

    #[test]
    fn display_shape_error() {
        let e = ApiError::Shape {
            endpoint: "/subjects".to_string(),
            detail: "expected envelope or array".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[/subjects] Unrecognized response shape: expected envelope or array"
        );
    }

    #[test]
    fn expected_variants() {
        assert!(
            ApiError::MissingToken {
                endpoint: "/x".into()
            }
            .is_expected()
        );
        assert!(
            ApiError::AuthRejected {
                endpoint: "/x".into(),
                status: 403,
                detail: String::new()
            }
            .is_expected()
        );
        assert!(
            ApiError::Shape {
                endpoint: "/x".into(),
                detail: String::new()
            }
            .is_expected()
        );
        assert!(
            !ApiError::Network {
                endpoint: "/x".into(),
                detail: String::new()
            }
            .is_expected()
        );
        assert!(
            !ApiError::Server {
                endpoint: "/x".into(),
                status: 500,
                body: String::new()
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_json_round_trip() {
        let e = ApiError::Server {
            endpoint: "/exams".to_string(),
            status: 503,
            body: "unavailable".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Server\""));
        assert!(json.contains("\"status\":503"));
        let back: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }

    #[test]
    fn deserialize_all_variants() {
        let variants: Vec<ApiError> = vec![
            ApiError::MissingToken {
                endpoint: "/a".into(),
            },
            ApiError::AuthRejected {
                endpoint: "/a".into(),
                status: 401,
                detail: "d".into(),
            },
            ApiError::Network {
                endpoint: "/a".into(),
                detail: "d".into(),
            },
            ApiError::Timeout {
                endpoint: "/a".into(),
                detail: "d".into(),
            },
            ApiError::Server {
                endpoint: "/a".into(),
                status: 500,
                body: "b".into(),
            },
            ApiError::Shape {
                endpoint: "/a".into(),
                detail: "d".into(),
            },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: ApiError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}
