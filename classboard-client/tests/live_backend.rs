//! Live-backend integration tests.
//!
//! Run with:
//! ```bash
//! CLASSBOARD_BASE_URL=https://api.school.example/v1 CLASSBOARD_API_TOKEN=xxx \
//!     cargo test -p classboard-client --test live_backend -- --ignored --nocapture
//! ```
//!
//! Each test also skips itself when the environment variables are missing.

mod common;

use classboard_client::{Announcement, Exam, PageQuery, Resource};
use common::live_client;

#[tokio::test]
#[ignore = "integration test: requires CLASSBOARD_BASE_URL and CLASSBOARD_API_TOKEN"]
async fn list_exams_first_page() {
    skip_if_no_backend!("CLASSBOARD_BASE_URL", "CLASSBOARD_API_TOKEN");
    let Some(client) = live_client() else {
        return;
    };

    let page = require_ok!(
        client
            .fetch_page::<Exam>(Exam::PATH, &PageQuery::default())
            .await
    );
    assert!(page.items.len() <= 10);
}

#[tokio::test]
#[ignore = "integration test: requires CLASSBOARD_BASE_URL and CLASSBOARD_API_TOKEN"]
async fn search_constrains_results() {
    skip_if_no_backend!("CLASSBOARD_BASE_URL", "CLASSBOARD_API_TOKEN");
    let Some(client) = live_client() else {
        return;
    };

    let everything = require_ok!(
        client
            .fetch_page::<Exam>(Exam::PATH, &PageQuery::default())
            .await
    );

    let query = PageQuery {
        search: Some("zzz-no-such-exam".to_string()),
        ..PageQuery::default()
    };
    let filtered = require_ok!(client.fetch_page::<Exam>(Exam::PATH, &query).await);
    assert!(filtered.total_count <= everything.total_count);
}

#[tokio::test]
#[ignore = "integration test: requires CLASSBOARD_BASE_URL and CLASSBOARD_API_TOKEN"]
async fn create_and_delete_announcement() {
    skip_if_no_backend!("CLASSBOARD_BASE_URL", "CLASSBOARD_API_TOKEN");
    let Some(client) = live_client() else {
        return;
    };

    let title = common::generate_test_title();
    let body = serde_json::json!({
        "title": title,
        "description": "integration test",
    });

    let created: Announcement =
        require_ok!(client.create(Announcement::PATH, &body).await, "create");
    assert_eq!(created.title, title);

    require_ok!(
        client.remove(Announcement::PATH, &created.id).await,
        "cleanup"
    );
}
