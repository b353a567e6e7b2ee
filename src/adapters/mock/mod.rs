//! Test doubles for the HTTP seam and the repository seam.
//!
//! Both are public so integration tests and benches can use them.

pub mod http;
pub mod repository;

pub use http::{MockHttpClient, MockReply};
pub use repository::{sample_books, MockBookRepository, RepositoryCall};
