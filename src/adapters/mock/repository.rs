//! Scriptable in-memory [`BookRepository`] for testing the state container.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{ApiResult, GatewayError};
use crate::models::Book;
use crate::repository::BookRepository;

/// One repository call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    FetchAll,
    FetchPrivate,
    AddBook { name: String, author: String },
}

/// Scripted outcome. `Err` carries the failure message.
pub type Scripted<T> = Result<T, String>;

#[derive(Debug, Clone)]
struct Step<T> {
    result: Scripted<T>,
    delay: Option<Duration>,
}

#[derive(Debug)]
struct Script<T> {
    queued: VecDeque<Step<T>>,
    fallback: Scripted<T>,
}

impl<T: Clone> Script<T> {
    fn new(fallback: Scripted<T>) -> Self {
        Self {
            queued: VecDeque::new(),
            fallback,
        }
    }

    fn next(&mut self) -> Step<T> {
        self.queued.pop_front().unwrap_or_else(|| Step {
            result: self.fallback.clone(),
            delay: None,
        })
    }
}

#[derive(Debug)]
struct Inner {
    all: Script<Vec<Book>>,
    private: Script<Vec<Book>>,
    add: Script<bool>,
    calls: Vec<RepositoryCall>,
}

/// In-memory repository whose answers are set up front.
///
/// Each operation answers from its queue first (see `queue_*`), then from
/// its fallback (see `set_*`). Errors become [`GatewayError::Status`] with
/// status 500 so that `to_string()` yields exactly the scripted message.
/// Clones share state.
#[derive(Debug, Clone)]
pub struct MockBookRepository {
    inner: Arc<Mutex<Inner>>,
}

impl MockBookRepository {
    /// Empty lists for both fetches; adds are accepted.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                all: Script::new(Ok(Vec::new())),
                private: Script::new(Ok(Vec::new())),
                add: Script::new(Ok(true)),
                calls: Vec::new(),
            })),
        }
    }

    pub fn set_all(&self, result: Scripted<Vec<Book>>) {
        self.inner.lock().unwrap().all.fallback = result;
    }

    pub fn set_private(&self, result: Scripted<Vec<Book>>) {
        self.inner.lock().unwrap().private.fallback = result;
    }

    pub fn set_add(&self, result: Scripted<bool>) {
        self.inner.lock().unwrap().add.fallback = result;
    }

    pub fn queue_all(&self, result: Scripted<Vec<Book>>, delay: Option<Duration>) {
        self.inner
            .lock()
            .unwrap()
            .all
            .queued
            .push_back(Step { result, delay });
    }

    pub fn queue_private(&self, result: Scripted<Vec<Book>>, delay: Option<Duration>) {
        self.inner
            .lock()
            .unwrap()
            .private
            .queued
            .push_back(Step { result, delay });
    }

    /// Every call made so far.
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    async fn play<T>(step: Step<T>) -> ApiResult<T> {
        if let Some(delay) = step.delay {
            tokio::time::sleep(delay).await;
        }
        step.result.map_err(|message| GatewayError::Status {
            status: 500,
            message,
        })
    }
}

impl Default for MockBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// `count` generated books named `"{prefix} 1"`, `"{prefix} 2"`, ...
pub fn sample_books(prefix: &str, count: usize) -> Vec<Book> {
    (1..=count)
        .map(|i| Book::new(format!("{} {}", prefix, i), format!("Author {}", i)).with_id(i as u64))
        .collect()
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn fetch_all(&self) -> ApiResult<Vec<Book>> {
        let step = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(RepositoryCall::FetchAll);
            inner.all.next()
        };
        Self::play(step).await
    }

    async fn fetch_private(&self) -> ApiResult<Vec<Book>> {
        let step = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(RepositoryCall::FetchPrivate);
            inner.private.next()
        };
        Self::play(step).await
    }

    async fn add_book(&self, name: &str, author: &str) -> ApiResult<bool> {
        let step = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(RepositoryCall::AddBook {
                name: name.to_string(),
                author: author.to_string(),
            });
            inner.add.next()
        };
        Self::play(step).await
    }
}
