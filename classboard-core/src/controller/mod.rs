//! Hybrid list-retrieval controller.
//!
//! Serves paginated collections to list views while reconciling two
//! competing retrieval strategies: live in-memory filtering of the loaded
//! page, and explicit full-dataset server-side search. One controller
//! instance per list view; nothing survives the view.
//!
//! Every caller action goes through an explicit handler
//! ([`set_search_term`](ListController::set_search_term),
//! [`submit_search`](ListController::submit_search),
//! [`request_page`](ListController::request_page),
//! [`refresh`](ListController::refresh)). A handler that requires a server
//! round trip hands back a [`FetchPlan`]; the caller drives it (usually via
//! [`run`](ListController::run)) and the result is applied through
//! [`settle`](ListController::settle). Plans are generation-stamped:
//! issuing a new plan supersedes any in-flight one, and a superseded
//! plan's settlement is discarded, so out-of-order responses can never
//! clobber fresher state.

mod filter;
mod mode;
mod pagination;

pub use filter::filter_items;
pub use mode::SearchMode;
pub use pagination::PageSummary;

use std::sync::Arc;

use classboard_client::{ApiError, FetchedPage, PageQuery, Searchable};

use crate::fetch::PageFetcher;

/// One scheduled server round trip: an effective `(page, term)` pair plus
/// the generation stamp that decides whether its result is still wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    generation: u64,
    page: u32,
    search: Option<String>,
}

impl FetchPlan {
    /// The page this plan retrieves.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The committed search term this plan carries, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// The wire query for this plan.
    #[must_use]
    pub fn to_query(&self, page_size: u32) -> PageQuery {
        PageQuery {
            page: self.page,
            page_size,
            search: self.search.clone(),
        }
    }
}

/// Controller state for one list view.
///
/// See the [module docs](self) for the event/settle protocol.
pub struct ListController<T> {
    fetcher: Arc<dyn PageFetcher<T>>,
    page_size: u32,
    live_term: String,
    committed_term: Option<String>,
    mode: SearchMode,
    loaded_page: Vec<T>,
    summary: PageSummary,
    error: Option<String>,
    loading: bool,
    generation: u64,
}

impl<T> ListController<T> {
    /// Create a controller over a fetcher with a fixed page size.
    ///
    /// The page size is immutable for the controller's lifetime; zero is
    /// treated as one.
    pub fn new(fetcher: Arc<dyn PageFetcher<T>>, page_size: u32) -> Self {
        Self {
            fetcher,
            page_size: page_size.max(1),
            live_term: String::new(),
            committed_term: None,
            mode: SearchMode::Client,
            loaded_page: Vec::new(),
            summary: PageSummary::unpaginated(0),
            error: None,
            loading: false,
            generation: 0,
        }
    }

    /// Stamp a new plan, superseding whatever is in flight.
    fn plan(&mut self, page: u32, search: Option<String>) -> FetchPlan {
        self.generation += 1;
        self.loading = true;
        FetchPlan {
            generation: self.generation,
            page,
            search,
        }
    }

    // ---- Event handlers ----

    /// Record a keystroke in the search box.
    ///
    /// While in client mode this never fetches: the live term only drives
    /// the in-memory filter. Clearing the term while a server search is in
    /// force reverts to client mode and plans a fresh unfiltered page-1
    /// fetch, because leaving server mode invalidates the previously
    /// filtered result set.
    pub fn set_search_term(&mut self, term: &str) -> Option<FetchPlan> {
        self.live_term = term.to_string();
        if self.mode == SearchMode::Server && term.is_empty() {
            self.mode = SearchMode::Client;
            self.committed_term = None;
            return Some(self.plan(1, None));
        }
        None
    }

    /// Commit the live term as a full-dataset server search.
    ///
    /// A non-empty term enters server mode from page 1. An empty term is
    /// the client-mode fallback with a page-1 refresh. Either way a submit
    /// is an explicit user action, so it always authorizes a round trip.
    pub fn submit_search(&mut self) -> FetchPlan {
        if self.live_term.is_empty() {
            self.mode = SearchMode::Client;
            self.committed_term = None;
            self.plan(1, None)
        } else {
            self.committed_term = Some(self.live_term.clone());
            self.mode = SearchMode::Server;
            let term = self.committed_term.clone();
            self.plan(1, term)
        }
    }

    /// Navigate to a page, carrying the committed term (if any).
    ///
    /// Out-of-range pages are rejected as a no-op.
    pub fn request_page(&mut self, page: u32) -> Option<FetchPlan> {
        if page < 1 || page > self.summary.total_pages {
            return None;
        }
        let term = self.committed_term.clone();
        Some(self.plan(page, term))
    }

    /// Re-fetch the current effective `(page, term)` pair.
    pub fn refresh(&mut self) -> FetchPlan {
        let page = self.summary.current_page;
        let term = self.committed_term.clone();
        self.plan(page, term)
    }

    /// Caller-initiated reset: drop both terms, leave server mode, and
    /// plan an unfiltered page-1 fetch.
    pub fn reset_search(&mut self) -> FetchPlan {
        self.live_term.clear();
        self.committed_term = None;
        self.mode = SearchMode::Client;
        self.plan(1, None)
    }

    // ---- Settlement ----

    /// Apply a finished fetch.
    ///
    /// A plan that has been superseded by a newer one is discarded without
    /// touching any state. Otherwise a success replaces the loaded page
    /// and recomputes the pagination summary; a failure stores the
    /// user-facing error message and leaves the stale page visible.
    pub fn settle(&mut self, plan: &FetchPlan, result: Result<FetchedPage<T>, ApiError>) {
        if plan.generation != self.generation {
            log::debug!(
                "Discarding stale fetch result (generation {} superseded by {})",
                plan.generation,
                self.generation
            );
            return;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.summary = if page.server_paginated {
                    PageSummary::recompute(page.total_count, self.page_size, plan.page)
                } else {
                    PageSummary::unpaginated(page.total_count)
                };
                self.loaded_page = page.items;
                self.error = None;
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("List fetch failed: {e}");
                } else {
                    log::error!("List fetch failed: {e}");
                }
                self.error = Some(e.to_string());
            }
        }
    }

    /// Dispatch a plan through the fetcher and settle its result.
    pub async fn run(&mut self, plan: FetchPlan) {
        let fetcher = Arc::clone(&self.fetcher);
        let query = plan.to_query(self.page_size);
        let result = fetcher.fetch_page(&query).await;
        self.settle(&plan, result);
    }

    /// First load after the view mounts: unfiltered page 1.
    pub async fn load_initial(&mut self) {
        let plan = self.refresh();
        self.run(plan).await;
    }

    // ---- Caller-facing surface ----

    /// The pagination summary from the last successful fetch.
    #[must_use]
    pub fn pagination(&self) -> &PageSummary {
        &self.summary
    }

    /// The raw loaded page, unfiltered.
    #[must_use]
    pub fn loaded_page(&self) -> &[T] {
        &self.loaded_page
    }

    /// Whether a planned fetch has not settled yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The user-facing message of the last failed fetch, if the most
    /// recent settlement was a failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The live (uncommitted) search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.live_term
    }

    /// The committed term; `Some` exactly while in server mode.
    #[must_use]
    pub fn committed_term(&self) -> Option<&str> {
        self.committed_term.as_deref()
    }

    /// The current retrieval mode.
    #[must_use]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Whether the search box currently filters client-side only. UIs use
    /// this for hinting ("press Enter to search everything").
    #[must_use]
    pub fn is_client_side_search(&self) -> bool {
        self.mode == SearchMode::Client
    }

    /// The fixed page size.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl<T: Searchable> ListController<T> {
    /// The sequence to render: the live-term-filtered view of the loaded
    /// page in client mode, the raw loaded page in server mode.
    #[must_use]
    pub fn items(&self) -> Vec<&T> {
        match self.mode {
            SearchMode::Client => filter_items(&self.loaded_page, &self.live_term),
            SearchMode::Server => self.loaded_page.iter().collect(),
        }
    }
}
