//! Test helpers.
//!
//! A scripted [`PageFetcher`] mock plus factories for the item shapes the
//! controller tests use.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;

use classboard_client::{ApiError, FetchedPage, PageQuery, Searchable};

use crate::fetch::PageFetcher;

/// Minimal searchable item for controller tests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestItem {
    pub title: String,
}

impl Searchable for TestItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

/// A server-paginated page with the given titles and total count.
pub fn envelope_page(titles: &[&str], total_count: u32) -> FetchedPage<TestItem> {
    FetchedPage {
        items: titles
            .iter()
            .map(|t| TestItem {
                title: (*t).to_string(),
            })
            .collect(),
        total_count,
        server_paginated: true,
    }
}

/// A flat (unpaginated) result set with the given titles.
pub fn flat_page(titles: &[&str]) -> FetchedPage<TestItem> {
    let items: Vec<TestItem> = titles
        .iter()
        .map(|t| TestItem {
            title: (*t).to_string(),
        })
        .collect();
    FetchedPage {
        total_count: u32::try_from(items.len()).unwrap_or(u32::MAX),
        items,
        server_paginated: false,
    }
}

/// Scripted fetcher: responses are popped in push order, and every query
/// is recorded for assertions. Runs dry as empty pages.
pub struct MockFetcher<T> {
    responses: Mutex<VecDeque<Result<FetchedPage<T>, ApiError>>>,
    queries: Mutex<Vec<PageQuery>>,
}

impl<T> MockFetcher<T> {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn push_page(&self, page: FetchedPage<T>) {
        self.responses.lock().unwrap().push_back(Ok(page));
    }

    pub fn push_error(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Every query issued so far, in order.
    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl<T: Send + Sync> PageFetcher<T> for MockFetcher<T> {
    async fn fetch_page(&self, query: &PageQuery) -> Result<FetchedPage<T>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(FetchedPage::empty()))
    }
}
