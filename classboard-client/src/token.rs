//! Bearer token injection.
//!
//! The dashboard's authentication layer (login flow, token refresh,
//! persistence) is an external collaborator. The client only needs the
//! current token at request time, supplied synchronously through this
//! trait so no ambient storage leaks into the data layer.

/// Supplies the current bearer token for outgoing requests.
///
/// Returning `None` fails the request with
/// [`ApiError::MissingToken`](crate::ApiError::MissingToken) before any
/// network dispatch. The client never refreshes or validates tokens.
pub trait TokenProvider: Send + Sync {
    /// The bearer token to attach, if one is available.
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token, handed over at construction time.
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads the token from an environment variable on every request.
///
/// Used by the env-gated live-backend tests; empty values count as absent.
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TokenProvider for EnvToken {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_token_returns_value() {
        let provider = StaticToken::new("abc123");
        assert_eq!(provider.bearer_token().as_deref(), Some("abc123"));
    }

    #[test]
    fn env_token_missing_var() {
        let provider = EnvToken::new("CLASSBOARD_TEST_TOKEN_DOES_NOT_EXIST");
        assert_eq!(provider.bearer_token(), None);
    }
}
