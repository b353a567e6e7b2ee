//! The books state container.
//!
//! [`BookStore`] is the only writer of [`ViewState`]. The state lives in a
//! `tokio::sync::watch` channel, so every mutation notifies subscribers and
//! views re-render from the latest snapshot.
//!
//! Operations issued concurrently are not ordered: whichever response
//! resolves last overwrites `books` / `private_count`, even if its request
//! was sent first. Switching view mode twice quickly can therefore briefly
//! show the list for the mode that is no longer selected.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::view_state::{ViewMode, ViewState};
use crate::error::GatewayError;
use crate::repository::BookRepository;

/// Shown when a load fails without a usable message.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load books";
/// Shown when the API declines an add, or fails without a usable message.
pub const ADD_FAILED_MESSAGE: &str = "Failed to add book";
/// Shown when the add form is submitted with an empty field.
pub const VALIDATION_MESSAGE: &str = "Name and author are required";

struct Inner<R> {
    repository: R,
    state: watch::Sender<ViewState>,
}

/// Owner of the view state and mediator of all repository access.
///
/// Clones share the same state.
pub struct BookStore<R> {
    inner: Arc<Inner<R>>,
}

impl<R> Clone for BookStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Tasks spawned by [`BookStore::set_view_mode`].
///
/// Dropping this detaches the tasks; they keep running.
#[derive(Debug)]
pub struct ReloadHandles {
    pub books: JoinHandle<()>,
    pub private_count: JoinHandle<()>,
}

impl ReloadHandles {
    /// Wait for both reloads to finish.
    pub async fn join(self) {
        if let Err(e) = self.books.await {
            tracing::error!("Book reload task failed: {}", e);
        }
        if let Err(e) = self.private_count.await {
            tracing::error!("Private count reload task failed: {}", e);
        }
    }
}

/// Resets `is_loading` when dropped, so a failed, panicked or cancelled
/// operation cannot leave the loading indicator on.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<ViewState>,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a watch::Sender<ViewState>) -> Self {
        state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
        });
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.is_loading = false);
    }
}

fn failure_message(err: &GatewayError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

impl<R: BookRepository + 'static> BookStore<R> {
    /// Create a store starting in [`ViewMode::All`].
    pub fn new(repository: R) -> Self {
        Self::with_view_mode(repository, ViewMode::default())
    }

    pub fn with_view_mode(repository: R, view_mode: ViewMode) -> Self {
        let (state, _) = watch::channel(ViewState::with_view_mode(view_mode));
        Self {
            inner: Arc::new(Inner { repository, state }),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.inner.state.borrow().clone()
    }

    /// A receiver notified after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.inner.state.subscribe()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.inner.state.borrow().view_mode
    }

    /// Initial load: the list for the current mode, then the private count.
    pub async fn init(&self) {
        tracing::info!("Initializing book store in {} mode", self.view_mode());
        self.load_books().await;
        self.load_private_count().await;
    }

    /// Reload `books` from the repository call matching the current mode.
    ///
    /// On failure the list is cleared and the message lands in `error`.
    pub async fn load_books(&self) {
        let _loading = LoadingGuard::start(&self.inner.state);
        let mode = self.view_mode();

        let result = match mode {
            ViewMode::All => self.inner.repository.fetch_all().await,
            ViewMode::Private => self.inner.repository.fetch_private().await,
        };

        match result {
            Ok(books) => {
                tracing::debug!("Loaded {} books ({} mode)", books.len(), mode);
                self.inner.state.send_modify(|s| s.books = books);
            }
            Err(e) => {
                tracing::warn!("Failed to load books ({} mode): {}", mode, e);
                let message = failure_message(&e, LOAD_FAILED_MESSAGE);
                self.inner.state.send_modify(|s| {
                    s.books.clear();
                    s.error = Some(message);
                });
            }
        }
    }

    /// Refresh the header count. Failures read as zero and are not reported.
    pub async fn load_private_count(&self) {
        let count = match self.inner.repository.fetch_private().await {
            Ok(books) => books.len(),
            Err(e) => {
                tracing::warn!("Failed to load private count: {}", e);
                0
            }
        };
        self.inner.state.send_modify(|s| s.private_count = count);
    }

    /// Submit a new book, then reload the list and the count.
    ///
    /// Fields are sent as typed. An empty one sets [`VALIDATION_MESSAGE`]
    /// without touching the network. Returns whether the API accepted it.
    pub async fn add_book(&self, name: &str, author: &str) -> bool {
        if name.is_empty() || author.is_empty() {
            self.inner
                .state
                .send_modify(|s| s.error = Some(VALIDATION_MESSAGE.to_string()));
            return false;
        }

        let _loading = LoadingGuard::start(&self.inner.state);

        match self.inner.repository.add_book(name, author).await {
            Ok(true) => {
                tracing::info!("Added book {:?} by {:?}", name, author);
                self.load_books().await;
                self.load_private_count().await;
                true
            }
            Ok(false) => {
                self.inner
                    .state
                    .send_modify(|s| s.error = Some(ADD_FAILED_MESSAGE.to_string()));
                false
            }
            Err(e) => {
                tracing::warn!("Failed to add book: {}", e);
                let message = failure_message(&e, ADD_FAILED_MESSAGE);
                self.inner.state.send_modify(|s| s.error = Some(message));
                false
            }
        }
    }

    /// Switch the list to `mode` and reload in the background.
    ///
    /// Returns `None` without doing anything when `mode` is already active.
    /// Must be called from within a tokio runtime.
    pub fn set_view_mode(&self, mode: ViewMode) -> Option<ReloadHandles> {
        let changed = self.inner.state.send_if_modified(|s| {
            if s.view_mode == mode {
                false
            } else {
                s.view_mode = mode;
                true
            }
        });
        if !changed {
            return None;
        }

        tracing::debug!("View mode changed to {}", mode);

        let store = self.clone();
        let books = tokio::spawn(async move { store.load_books().await });
        let store = self.clone();
        let private_count = tokio::spawn(async move { store.load_private_count().await });

        Some(ReloadHandles {
            books,
            private_count,
        })
    }

    /// [`set_view_mode`](Self::set_view_mode) from a label such as `"private"`.
    ///
    /// Unknown labels leave the mode unchanged.
    pub fn select_view_mode(&self, label: &str) -> Option<ReloadHandles> {
        match label.parse::<ViewMode>() {
            Ok(mode) => self.set_view_mode(mode),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{sample_books, MockBookRepository, RepositoryCall};
    use std::time::Duration;

    fn store() -> (BookStore<MockBookRepository>, MockBookRepository) {
        let repo = MockBookRepository::new();
        (BookStore::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_load_books_all_mode_uses_fetch_all() {
        let (store, repo) = store();
        repo.set_all(Ok(sample_books("All", 3)));
        repo.set_private(Ok(sample_books("Private", 1)));

        store.load_books().await;

        let state = store.snapshot();
        assert_eq!(state.books.len(), 3);
        assert_eq!(state.books[0].name, "All 1");
        assert_eq!(repo.calls(), vec![RepositoryCall::FetchAll]);
    }

    #[tokio::test]
    async fn test_load_books_private_mode_uses_fetch_private() {
        let repo = MockBookRepository::new();
        repo.set_all(Ok(sample_books("All", 3)));
        repo.set_private(Ok(sample_books("Private", 2)));
        let store = BookStore::with_view_mode(repo.clone(), ViewMode::Private);

        store.load_books().await;

        assert_eq!(store.snapshot().books.len(), 2);
        assert_eq!(repo.calls(), vec![RepositoryCall::FetchPrivate]);
    }

    #[tokio::test]
    async fn test_load_books_failure_clears_books_and_sets_error() {
        let (store, repo) = store();
        repo.set_all(Ok(sample_books("All", 2)));
        store.load_books().await;
        assert_eq!(store.snapshot().books.len(), 2);

        repo.set_all(Err("Network down".to_string()));
        store.load_books().await;

        let state = store.snapshot();
        assert!(state.books.is_empty());
        assert_eq!(state.error.as_deref(), Some("Network down"));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_load_books_empty_message_uses_fallback() {
        let (store, repo) = store();
        repo.set_all(Err(String::new()));

        store.load_books().await;

        assert_eq!(store.snapshot().error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_load_books_clears_previous_error() {
        let (store, repo) = store();
        repo.queue_all(Err("first".to_string()), None);
        store.load_books().await;
        assert!(store.snapshot().error.is_some());

        store.load_books().await;
        assert!(store.snapshot().error.is_none());
    }

    #[tokio::test]
    async fn test_is_loading_true_while_in_flight() {
        let (store, repo) = store();
        repo.queue_all(Ok(sample_books("All", 1)), Some(Duration::from_millis(50)));

        let task = {
            let store = store.clone();
            tokio::spawn(async move { store.load_books().await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(store.snapshot().is_loading);

        task.await.unwrap();
        assert!(!store.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_load_private_count_failure_is_zero_and_silent() {
        let (store, repo) = store();
        repo.set_private(Ok(sample_books("Private", 4)));
        store.load_private_count().await;
        assert_eq!(store.snapshot().private_count, 4);

        repo.set_all(Ok(sample_books("All", 2)));
        store.load_books().await;
        repo.set_private(Err("boom".to_string()));
        store.load_private_count().await;

        let state = store.snapshot();
        assert_eq!(state.private_count, 0);
        assert!(state.error.is_none());
        assert_eq!(state.books.len(), 2);
    }

    #[tokio::test]
    async fn test_add_book_validation() {
        let (store, repo) = store();

        assert!(!store.add_book("", "x").await);
        assert_eq!(store.snapshot().error.as_deref(), Some(VALIDATION_MESSAGE));
        assert!(!store.add_book("x", "").await);
        assert_eq!(store.snapshot().error.as_deref(), Some(VALIDATION_MESSAGE));

        assert!(repo.calls().is_empty());
        assert!(!store.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_add_book_sends_fields_as_typed() {
        let (store, repo) = store();

        assert!(store.add_book("   ", "x").await);
        assert!(store.add_book("  Dune ", " Herbert").await);

        let adds: Vec<_> = repo
            .calls()
            .into_iter()
            .filter(|call| matches!(call, RepositoryCall::AddBook { .. }))
            .collect();
        assert_eq!(
            adds,
            vec![
                RepositoryCall::AddBook {
                    name: "   ".to_string(),
                    author: "x".to_string()
                },
                RepositoryCall::AddBook {
                    name: "  Dune ".to_string(),
                    author: " Herbert".to_string()
                },
            ]
        );
        assert!(store.snapshot().error.is_none());
    }

    #[tokio::test]
    async fn test_add_book_success_reloads_in_order() {
        let (store, repo) = store();
        repo.set_all(Ok(sample_books("All", 5)));
        repo.set_private(Ok(sample_books("Private", 3)));

        assert!(store.add_book("Dune", "Herbert").await);

        assert_eq!(
            repo.calls(),
            vec![
                RepositoryCall::AddBook {
                    name: "Dune".to_string(),
                    author: "Herbert".to_string()
                },
                RepositoryCall::FetchAll,
                RepositoryCall::FetchPrivate,
            ]
        );
        let state = store.snapshot();
        assert_eq!(state.books.len(), 5);
        assert_eq!(state.private_count, 3);
        assert!(state.error.is_none());
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_add_book_rejected_sets_error_without_reload() {
        let (store, repo) = store();
        repo.set_add(Ok(false));

        assert!(!store.add_book("Dune", "Herbert").await);

        assert_eq!(store.snapshot().error.as_deref(), Some(ADD_FAILED_MESSAGE));
        assert_eq!(repo.calls().len(), 1);
        assert!(!store.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_add_book_error_surfaces_message() {
        let (store, repo) = store();
        repo.set_add(Err("Server exploded".to_string()));

        assert!(!store.add_book("Dune", "Herbert").await);

        assert_eq!(store.snapshot().error.as_deref(), Some("Server exploded"));
        assert_eq!(repo.calls().len(), 1);
        assert!(!store.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_set_same_view_mode_is_noop() {
        let (store, repo) = store();
        let rx = store.subscribe();

        assert!(store.set_view_mode(ViewMode::All).is_none());

        assert!(!rx.has_changed().unwrap());
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_set_view_mode_reloads_both() {
        let (store, repo) = store();
        repo.set_private(Ok(sample_books("Private", 2)));

        let handles = store.set_view_mode(ViewMode::Private).unwrap();
        assert_eq!(store.view_mode(), ViewMode::Private);
        handles.join().await;

        assert_eq!(
            repo.calls(),
            vec![RepositoryCall::FetchPrivate, RepositoryCall::FetchPrivate]
        );
        let state = store.snapshot();
        assert_eq!(state.books.len(), 2);
        assert_eq!(state.private_count, 2);
    }

    #[tokio::test]
    async fn test_select_invalid_view_mode_is_ignored() {
        let (store, repo) = store();

        assert!(store.select_view_mode("everything").is_none());

        assert_eq!(store.view_mode(), ViewMode::All);
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_init_loads_books_then_count() {
        let (store, repo) = store();
        repo.set_all(Ok(sample_books("All", 4)));
        repo.set_private(Ok(sample_books("Private", 4)));

        store.init().await;

        assert_eq!(
            repo.calls(),
            vec![RepositoryCall::FetchAll, RepositoryCall::FetchPrivate]
        );
        let state = store.snapshot();
        assert_eq!(state.books.len(), 4);
        assert_eq!(state.private_count, 4);
        assert!(state.error.is_none());
        assert!(!state.is_loading);
    }
}
