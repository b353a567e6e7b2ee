use async_trait::async_trait;
use serde_json::Value;

use super::{generate_book_id, BookRepository};
use crate::error::ApiResult;
use crate::gateway::HttpGateway;
use crate::models::{AddBookResponse, Book, NewBook};
use crate::traits::HttpClient;

const ALL_PATH: &str = "/";
const PRIVATE_PATH: &str = "/private";

/// [`BookRepository`] backed by the books HTTP API.
#[derive(Debug, Clone)]
pub struct HttpBookRepository<C> {
    gateway: HttpGateway<C>,
}

impl<C: HttpClient> HttpBookRepository<C> {
    pub fn new(gateway: HttpGateway<C>) -> Self {
        Self { gateway }
    }

    /// Fetch `path` and decode it as a list; non-array bodies become empty.
    ///
    /// Entries that do not decode as a [`Book`] are skipped.
    async fn fetch_list(&self, path: &str) -> ApiResult<Vec<Book>> {
        match self.gateway.get::<Value>(path).await? {
            Some(Value::Array(entries)) => Ok(decode_books(path, entries)),
            Some(other) => {
                tracing::debug!(
                    "GET {} returned non-array body ({}), using empty list",
                    path,
                    kind(&other)
                );
                Ok(Vec::new())
            }
            None => Ok(Vec::new()),
        }
    }
}

fn decode_books(path: &str, entries: Vec<Value>) -> Vec<Book> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Book>(entry) {
            Ok(book) => Some(book),
            Err(e) => {
                tracing::warn!("Skipping entry {} from GET {}: {}", index, path, e);
                None
            }
        })
        .collect()
}

#[async_trait]
impl<C: HttpClient> BookRepository for HttpBookRepository<C> {
    async fn fetch_all(&self) -> ApiResult<Vec<Book>> {
        self.fetch_list(ALL_PATH).await
    }

    async fn fetch_private(&self) -> ApiResult<Vec<Book>> {
        match self.fetch_list(PRIVATE_PATH).await {
            Ok(books) => Ok(books),
            Err(e) => {
                tracing::warn!("Failed to fetch private books, using empty list: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn add_book(&self, name: &str, author: &str) -> ApiResult<bool> {
        let payload = NewBook {
            id: generate_book_id(),
            name: name.to_string(),
            author: author.to_string(),
        };
        tracing::info!("Adding book id={} name={:?}", payload.id, payload.name);

        let response = self.gateway.post::<Value, _>(ALL_PATH, &payload).await?;
        let accepted = response
            .and_then(|body| serde_json::from_value::<AddBookResponse>(body).ok())
            .is_some_and(|body| body.is_ok());

        if !accepted {
            tracing::warn!("API did not accept book id={}", payload.id);
        }
        Ok(accepted)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
