//! Shared helpers for live-backend tests.

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use classboard_client::{CollectionClient, EnvToken};

/// Skip the test when the named environment variables are missing.
#[macro_export]
macro_rules! skip_if_no_backend {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert a `Result` is `Ok` and unwrap it (failing the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Build a client against the backend named by `CLASSBOARD_BASE_URL`,
/// authenticating with `CLASSBOARD_API_TOKEN`.
pub fn live_client() -> Option<CollectionClient> {
    let base_url = env::var("CLASSBOARD_BASE_URL").ok()?;
    Some(CollectionClient::new(
        base_url,
        Arc::new(EnvToken::new("CLASSBOARD_API_TOKEN")),
    ))
}

/// Generate a unique name for records created by tests.
pub fn generate_test_title() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}
