//! Classboard Core Library
//!
//! Business logic for the classboard school dashboard's data layer:
//! - Hybrid list retrieval (List Controller): one state machine per list
//!   view reconciling in-memory filtering with committed server search
//! - Collection services: typed CRUD over the REST client with unified
//!   errors and batch deletion
//!
//! The library is platform-independent: the transport is abstracted behind
//! the [`PageFetcher`] trait, so it serves native shells and web backends
//! alike.
//!
//! ## Retrieval model
//!
//! Typing in a list view's search box never leaves the machine — the live
//! term narrows the already-loaded page in memory. Submitting the term
//! commits it and switches to server-side search across the whole
//! dataset; clearing the box falls back to client mode. Every handler
//! that needs the network returns a [`FetchPlan`], and results are applied
//! through [`ListController::settle`], which discards superseded plans so
//! out-of-order responses never corrupt pagination state.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use classboard_client::{CollectionClient, Exam, StaticToken};
//! use classboard_core::CollectionService;
//!
//! # async fn example() {
//! let client = Arc::new(CollectionClient::new(
//!     "https://api.school.example/v1",
//!     Arc::new(StaticToken::new("token")),
//! ));
//! let service = CollectionService::new(client);
//!
//! let mut exams = service.controller::<Exam>(10);
//! exams.load_initial().await;
//!
//! // Live filtering: no network traffic.
//! exams.set_search_term("alg");
//! let visible = exams.items();
//!
//! // Committed search: one round trip, page 1.
//! let plan = exams.submit_search();
//! exams.run(plan).await;
//! # }
//! ```

pub mod controller;
pub mod error;
pub mod fetch;
pub mod services;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use controller::{FetchPlan, ListController, PageSummary, SearchMode, filter_items};
pub use error::{ApiError, CoreError, CoreResult};
pub use fetch::{CollectionFetcher, PageFetcher};
pub use services::{BatchRemoveFailure, BatchRemoveResult, CollectionService};
