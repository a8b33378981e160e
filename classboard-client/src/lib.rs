//! # classboard-client
//!
//! REST collection client for the classboard school dashboard: typed
//! entity collections, page-based retrieval with free-text search, bearer
//! token injection, and normalization of the two payload shapes the
//! backend answers with.
//!
//! ## Payload Shapes
//!
//! | Shape | Example | Normalized as |
//! |-------|---------|---------------|
//! | Envelope | `{ "count": 25, "next": …, "previous": …, "results": [...] }` | one page, `count` authoritative |
//! | Flat array | `[ {...}, {...} ]` | complete result set, single page |
//!
//! Payloads matching neither shape are recovered as an empty result set so
//! that list views stay usable against minor backend variations.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use classboard_client::{CollectionClient, Exam, PageQuery, Resource, StaticToken};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CollectionClient::new(
//!         "https://api.school.example/v1",
//!         Arc::new(StaticToken::new("your-token")),
//!     );
//!
//!     let query = PageQuery {
//!         page: 1,
//!         page_size: 10,
//!         search: Some("algebra".to_string()),
//!     };
//!     let page = client.fetch_page::<Exam>(Exam::PATH, &query).await?;
//!     for exam in &page.items {
//!         println!("{} ({})", exam.title, exam.subject_name);
//!     }
//!     println!("{} exams total", page.total_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError):
//!
//! - [`ApiError::MissingToken`] / [`ApiError::AuthRejected`] — authentication
//! - [`ApiError::Network`] / [`ApiError::Timeout`] — transport failures
//! - [`ApiError::Server`] — non-2xx backend answers
//! - [`ApiError::Shape`] — unparseable single-record responses
//!
//! Nothing is retried automatically; a new user action (page change,
//! refresh, new search) is the only retry path.

mod collection;
mod entities;
mod error;
mod http;
mod token;
mod types;
mod utils;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the client and its configuration
pub use collection::{ClientConfig, CollectionClient, list_url};

// Re-export the token collaborator
pub use token::{EnvToken, StaticToken, TokenProvider};

// Re-export wire types
pub use types::{FetchedPage, ListPayload, PageEnvelope, PageQuery};

// Re-export entity collections and their traits
pub use entities::{
    Announcement, ClassGroup, Event, Exam, ExamResult, Parent, Resource, Searchable, Student,
    Subject, Teacher,
};

// Re-export utils module
pub use utils::datetime;
