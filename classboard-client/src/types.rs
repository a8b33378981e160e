use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::truncate_for_log;

// ============ Pagination ============

/// Query parameters for list operations.
///
/// All list endpoints accept these parameters. Pages are 1-indexed, and the
/// search term is transmitted only when present and non-empty.
///
/// # Default
///
/// The default is `page = 1, page_size = 10`, with no search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Optional free-text search term, matched server-side across the
    /// whole collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: None,
        }
    }
}

impl PageQuery {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    /// - `search` is preserved as-is
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size),
            search: self.search.clone(),
        }
    }

    /// The search term, treating `Some("")` the same as `None`.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

// ============ Response Shapes ============

/// The paginated envelope shape exposed by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    /// Total number of items across all pages.
    pub count: u32,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// Items in the current page.
    pub results: Vec<T>,
}

/// The two list payload shapes a collection endpoint may answer with.
///
/// Deserialized untagged: an object with `count`/`results` is the paginated
/// envelope, a bare JSON array is a complete unpaginated result set.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Paginated envelope.
    Envelope(PageEnvelope<T>),
    /// Flat array: the whole collection at once, no further paging possible.
    Flat(Vec<T>),
}

/// One fetched page, normalized from either payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedPage<T> {
    /// Items returned for this request.
    pub items: Vec<T>,
    /// Authoritative total across all pages (envelope), or the array
    /// length (flat).
    pub total_count: u32,
    /// Whether the backend paginated this collection. `false` means the
    /// items are the complete result set and no other page exists.
    pub server_paginated: bool,
}

impl<T> FetchedPage<T> {
    /// An empty paginated page. Used when recovering from shape errors.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            server_paginated: true,
        }
    }

    /// Normalize a parsed payload into the single internal shape.
    #[must_use]
    pub fn from_payload(payload: ListPayload<T>) -> Self {
        match payload {
            ListPayload::Envelope(envelope) => Self {
                total_count: envelope.count,
                items: envelope.results,
                server_paginated: true,
            },
            ListPayload::Flat(items) => Self {
                total_count: u32::try_from(items.len()).unwrap_or(u32::MAX),
                items,
                server_paginated: false,
            },
        }
    }
}

impl<T: DeserializeOwned> FetchedPage<T> {
    /// Parse a response body, recovering unrecognized shapes as an empty
    /// result set.
    ///
    /// Keeps list views usable against minor backend variations: a body
    /// that is neither the envelope nor a flat array renders as an empty
    /// state instead of failing the whole screen.
    #[must_use]
    pub fn from_body(body: &str, endpoint: &str) -> Self {
        match serde_json::from_str::<ListPayload<T>>(body) {
            Ok(payload) => Self::from_payload(payload),
            Err(e) => {
                log::warn!(
                    "[{endpoint}] Unrecognized list payload, rendering empty: {e} (body: {})",
                    truncate_for_log(body)
                );
                Self::empty()
            }
        }
    }
}
