//! HTTP repository against a real server.
//!
//! Exercises the full stack below the state container: reqwest adapter,
//! gateway decoding and repository mapping.

mod common;

use booklist::adapters::ReqwestHttpClient;
use booklist::error::GatewayError;
use booklist::gateway::HttpGateway;
use booklist::models::Book;
use booklist::repository::{BookRepository, HttpBookRepository};
use booklist::state::{BookStore, ViewMode};
use common::{books_json, repository_for, user_path};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[tokio::test]
async fn test_fetch_all_hits_user_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(user_path("/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_json("Book", 4)))
        .expect(1)
        .mount(&server)
        .await;

    let books = repository_for(&server).fetch_all().await.unwrap();

    assert_eq!(books.len(), 4);
    assert_eq!(books[0], Book::new("Book 1", "Author 1").with_id(1));
}

#[tokio::test]
async fn test_fetch_private_hits_private_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(user_path("/private")))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_json("Secret", 3)))
        .expect(1)
        .mount(&server)
        .await;

    let books = repository_for(&server).fetch_private().await.unwrap();
    assert_eq!(books.len(), 3);
}

#[tokio::test]
async fn test_non_array_body_is_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(user_path("/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"books": []})))
        .mount(&server)
        .await;

    let books = repository_for(&server).fetch_all().await.unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_status_error_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(user_path("/")))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"message": "Maintenance window"})),
        )
        .mount(&server)
        .await;

    let err = repository_for(&server).fetch_all().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "Maintenance window");
}

#[tokio::test]
async fn test_status_error_without_body_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(user_path("/")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = repository_for(&server).fetch_all().await.unwrap_err();
    assert!(matches!(err, GatewayError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn test_fetch_private_swallows_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(user_path("/private")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let books = repository_for(&server).fetch_private().await.unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_add_book_posts_json_with_generated_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(user_path("/")))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({"name": "Dune", "author": "Herbert"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let accepted = repository_for(&server)
        .add_book("Dune", "Herbert")
        .await
        .unwrap();
    assert!(accepted);

    let requests: Vec<Request> = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["id"].as_u64().is_some_and(|id| id > 0));
}

#[tokio::test]
async fn test_add_book_other_status_is_not_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(user_path("/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "duplicate"})))
        .mount(&server)
        .await;

    let accepted = repository_for(&server)
        .add_book("Dune", "Herbert")
        .await
        .unwrap();
    assert!(!accepted);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1
    let gateway = HttpGateway::new(ReqwestHttpClient::new(), "http://127.0.0.1:1/v1/books/alice");
    let repo = HttpBookRepository::new(gateway);

    let err = repo.fetch_all().await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
}

#[tokio::test]
async fn test_store_end_to_end_add_then_reload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(user_path("/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(user_path("/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_json("Book", 5)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(user_path("/private")))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_json("Secret", 3)))
        .mount(&server)
        .await;

    let store = BookStore::with_view_mode(repository_for(&server), ViewMode::All);
    assert!(store.add_book("Dune", "Herbert").await);

    let state = store.snapshot();
    assert_eq!(state.books.len(), 5);
    assert_eq!(state.private_count, 3);
    assert_eq!(state.error, None);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_store_load_failure_sets_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(user_path("/")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "Boom"})))
        .mount(&server)
        .await;

    let store = BookStore::new(repository_for(&server));
    store.load_books().await;

    let state = store.snapshot();
    assert!(state.books.is_empty());
    assert_eq!(state.error.as_deref(), Some("Boom"));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_store_keeps_good_entries_when_one_is_bad() {
    let server = MockServer::start().await;
    let body = json!([
        {"id": 1, "name": "Dune", "author": "Herbert"},
        {"id": 2, "name": "Emma", "author": null}
    ]);
    Mock::given(method("GET"))
        .and(path(user_path("/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let store = BookStore::new(repository_for(&server));
    store.load_books().await;

    let state = store.snapshot();
    assert_eq!(state.books, vec![Book::new("Dune", "Herbert").with_id(1)]);
    assert_eq!(state.error, None);
}
