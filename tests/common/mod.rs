//! Common test utilities for integration tests.

#![allow(dead_code)]

use booklist::adapters::ReqwestHttpClient;
use booklist::gateway::HttpGateway;
use booklist::repository::HttpBookRepository;
use wiremock::MockServer;

/// User id used in every test URL.
pub const TEST_USER: &str = "alice";

/// Path prefix the API serves the test user under.
pub fn user_path(suffix: &str) -> String {
    format!("/v1/books/{}{}", TEST_USER, suffix)
}

/// A real HTTP repository pointed at the mock server.
pub fn repository_for(server: &MockServer) -> HttpBookRepository<ReqwestHttpClient> {
    let base_url = format!("{}{}", server.uri(), user_path(""));
    HttpBookRepository::new(HttpGateway::new(ReqwestHttpClient::new(), base_url))
}

/// JSON array of `count` books named `"{prefix} i"`.
pub fn books_json(prefix: &str, count: usize) -> serde_json::Value {
    serde_json::Value::Array(
        (1..=count)
            .map(|i| {
                serde_json::json!({
                    "id": i,
                    "name": format!("{} {}", prefix, i),
                    "author": format!("Author {}", i),
                })
            })
            .collect(),
    )
}
