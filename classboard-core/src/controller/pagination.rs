use serde::Serialize;

/// Pagination summary derived from the last successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// Total number of items across all pages.
    pub count: u32,
    /// Current page (1-indexed, always within `1..=total_pages`).
    pub current_page: u32,
    /// Total number of pages (at least 1, even for an empty collection).
    pub total_pages: u32,
}

impl PageSummary {
    /// Derive the summary for a server-paginated response.
    ///
    /// `total_pages = ceil(count / page_size)` when the collection is
    /// non-empty, 1 otherwise; the requested page is clamped into range.
    /// Pure; called once per successful fetch.
    #[must_use]
    pub fn recompute(count: u32, page_size: u32, requested_page: u32) -> Self {
        let page_size = page_size.max(1);
        let total_pages = if count > 0 { count.div_ceil(page_size) } else { 1 };
        Self {
            count,
            current_page: requested_page.clamp(1, total_pages),
            total_pages,
        }
    }

    /// Summary for a flat (unpaginated) response: the whole result set is
    /// one page, whatever its size.
    #[must_use]
    pub fn unpaginated(count: u32) -> Self {
        Self {
            count,
            current_page: 1,
            total_pages: 1,
        }
    }

    /// Whether a page exists after the current one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}
