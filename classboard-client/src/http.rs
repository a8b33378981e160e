//! Request execution.
//!
//! One place for the shared HTTP flow: dispatch, logging, status-to-error
//! mapping, body reading. Callers build the `RequestBuilder` themselves
//! (URL, query string, auth header) and parse the body themselves.
//!
//! There is deliberately no retry helper here: every invocation is exactly
//! one network call, and a failed call is retried only by a new user
//! action.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Map a response status to its error, `None` for 2xx.
///
/// 401/403 mean the token was rejected; every other non-2xx status is a
/// server error with the (truncated) body attached.
pub(crate) fn status_error(status: u16, body: &str, endpoint: &str) -> Option<ApiError> {
    if matches!(status, 401 | 403) {
        return Some(ApiError::AuthRejected {
            endpoint: endpoint.to_string(),
            status,
            detail: truncate_for_log(body),
        });
    }
    if (200..300).contains(&status) {
        return None;
    }
    Some(ApiError::Server {
        endpoint: endpoint.to_string(),
        status,
        body: truncate_for_log(body),
    })
}

/// Perform an HTTP request and return `(status, body)`.
///
/// Transport failures become [`ApiError::Network`] or [`ApiError::Timeout`];
/// non-2xx statuses are mapped through [`status_error`].
pub(crate) async fn execute_request(
    request_builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<(u16, String)> {
    log::debug!("[{endpoint}] {method}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        } else {
            ApiError::Network {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("[{endpoint}] Response Status: {status}");

    let body = response.text().await.map_err(|e| ApiError::Network {
        endpoint: endpoint.to_string(),
        detail: format!("Failed to read response body: {e}"),
    })?;

    if let Some(error) = status_error(status, &body, endpoint) {
        if error.is_expected() {
            log::warn!("[{endpoint}] {error}");
        } else {
            log::error!("[{endpoint}] {error}");
        }
        return Err(error);
    }

    log::debug!("[{endpoint}] Response Body: {}", truncate_for_log(&body));

    Ok((status, body))
}

/// Parse a JSON response body into `T`.
///
/// Used by single-record operations, where a malformed body is a hard
/// [`ApiError::Shape`] error. List fetches go through
/// [`FetchedPage::from_body`](crate::FetchedPage::from_body) instead,
/// which recovers silently.
pub(crate) fn parse_json<T>(body: &str, endpoint: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::warn!(
            "[{endpoint}] JSON parse failed: {e} (body: {})",
            truncate_for_log(body)
        );
        ApiError::Shape {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        }
    })
}
