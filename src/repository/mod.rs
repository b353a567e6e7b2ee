//! Book repository.
//!
//! [`BookRepository`] is the seam the state container talks to. The
//! production implementation, [`HttpBookRepository`], maps each operation
//! onto the gateway:
//!
//! | Operation       | Request        | Success                          |
//! |-----------------|----------------|----------------------------------|
//! | `fetch_all`     | `GET /`        | body is an array, else empty     |
//! | `fetch_private` | `GET /private` | body is an array, else empty; errors swallowed |
//! | `add_book`      | `POST /`       | body is `{"status": "ok"}`       |

mod http;
mod id;

pub use http::HttpBookRepository;
pub use id::generate_book_id;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::Book;

/// Domain operations on the remote book list.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every book the user can see.
    async fn fetch_all(&self) -> ApiResult<Vec<Book>>;

    /// The user's private books.
    async fn fetch_private(&self) -> ApiResult<Vec<Book>>;

    /// Submit a new book. `Ok(false)` means the API declined it.
    async fn add_book(&self, name: &str, author: &str) -> ApiResult<bool>;
}

#[async_trait]
impl<R: BookRepository + ?Sized> BookRepository for Arc<R> {
    async fn fetch_all(&self) -> ApiResult<Vec<Book>> {
        (**self).fetch_all().await
    }

    async fn fetch_private(&self) -> ApiResult<Vec<Book>> {
        (**self).fetch_private().await
    }

    async fn add_book(&self, name: &str, author: &str) -> ApiResult<bool> {
        (**self).add_book(name, author).await
    }
}
