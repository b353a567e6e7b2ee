//! Application state and logic for the TUI.
//!
//! [`App`] is the composition point between the [`BookStore`] and the views:
//! it holds the latest [`ViewState`] snapshot for rendering, the transient
//! add-form text, and which component has focus.
//!
//! - [`Focus`] - Which UI component has focus
//! - [`AppMessage`] - Messages from background tasks

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Focus;

use tokio::sync::{mpsc, watch};

use crate::repository::BookRepository;
use crate::state::{BookStore, ViewMode, ViewState};

/// Main application state
pub struct App<R> {
    /// The state container; the only writer of `view`'s source
    pub store: BookStore<R>,
    /// Latest snapshot of the store's state, what the views render
    pub view: ViewState,
    /// Change notifications from the store
    pub state_rx: watch::Receiver<ViewState>,
    /// User id shown in the header
    pub user_id: String,
    /// Current focus
    pub focus: Focus,
    /// Add form name text
    pub name_input: String,
    /// Add form author text
    pub author_input: String,
    /// True while an add submission is running
    pub submitting: bool,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for background task messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl<R: BookRepository + 'static> App<R> {
    pub fn new(store: BookStore<R>, user_id: impl Into<String>) -> Self {
        let mut state_rx = store.subscribe();
        let view = state_rx.borrow_and_update().clone();
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            store,
            view,
            state_rx,
            user_id: user_id.into(),
            focus: Focus::default(),
            name_input: String::new(),
            author_input: String::new(),
            submitting: false,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Copy the store's latest state into `view` when it changed.
    ///
    /// Returns whether anything was copied.
    pub fn sync_state(&mut self) -> bool {
        match self.state_rx.has_changed() {
            Ok(true) => {
                self.view = self.state_rx.borrow_and_update().clone();
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.view.is_loading || self.submitting {
            self.mark_dirty();
        }
    }

    /// Switch the list to `mode`. Reloads run in the background.
    pub fn select_mode(&mut self, mode: ViewMode) {
        // Handles dropped on purpose: reloads report through the store.
        let _ = self.store.set_view_mode(mode);
        self.sync_state();
    }

    /// Reload the list and the private count for the current mode.
    pub fn reload(&mut self) {
        let store = self.store.clone();
        tokio::spawn(async move {
            store.load_books().await;
            store.load_private_count().await;
        });
    }

    /// Submit the add form on a background task.
    ///
    /// A second submission while one is running is ignored.
    pub fn submit_add(&mut self) {
        if self.submitting {
            return;
        }
        self.submitting = true;

        let store = self.store.clone();
        let tx = self.message_tx.clone();
        let name = self.name_input.clone();
        let author = self.author_input.clone();
        tokio::spawn(async move {
            let accepted = store.add_book(&name, &author).await;
            let _ = tx.send(AppMessage::AddFinished { accepted });
        });
    }

    /// Apply a message from a background task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::AddFinished { accepted } => {
                self.submitting = false;
                if accepted {
                    self.name_input.clear();
                    self.author_input.clear();
                    self.focus = Focus::Name;
                }
            }
        }
        self.sync_state();
        self.mark_dirty();
    }

    /// Text of the focused form field, if a field is focused.
    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Name => Some(&mut self.name_input),
            Focus::Author => Some(&mut self.author_input),
            Focus::List => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{sample_books, MockBookRepository};

    fn app() -> (App<MockBookRepository>, MockBookRepository) {
        let repo = MockBookRepository::new();
        let store = BookStore::new(repo.clone());
        (App::new(store, "demo"), repo)
    }

    #[tokio::test]
    async fn test_new_app_defaults() {
        let (app, _) = app();
        assert_eq!(app.focus, Focus::List);
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
        assert_eq!(app.view, ViewState::default());
    }

    #[tokio::test]
    async fn test_sync_state_picks_up_store_changes() {
        let (mut app, repo) = app();
        repo.set_all(Ok(sample_books("All", 2)));
        app.needs_redraw = false;

        app.store.load_books().await;

        assert!(app.sync_state());
        assert_eq!(app.view.books.len(), 2);
        assert!(app.needs_redraw);
        assert!(!app.sync_state());
    }

    #[tokio::test]
    async fn test_add_finished_clears_inputs_only_when_accepted() {
        let (mut app, _) = app();
        app.name_input = "Dune".to_string();
        app.author_input = "Herbert".to_string();
        app.submitting = true;

        app.handle_message(AppMessage::AddFinished { accepted: false });
        assert!(!app.submitting);
        assert_eq!(app.name_input, "Dune");

        app.handle_message(AppMessage::AddFinished { accepted: true });
        assert!(app.name_input.is_empty());
        assert!(app.author_input.is_empty());
        assert_eq!(app.focus, Focus::Name);
    }

    #[tokio::test]
    async fn test_submit_add_reports_back() {
        let (mut app, repo) = app();
        repo.set_all(Ok(sample_books("All", 1)));
        app.name_input = "Dune".to_string();
        app.author_input = "Herbert".to_string();
        let mut rx = app.message_rx.take().unwrap();

        app.submit_add();
        // Ignored while the first submission runs
        app.submit_add();

        let message = rx.recv().await.unwrap();
        assert_eq!(message, AppMessage::AddFinished { accepted: true });
        app.handle_message(message);
        assert_eq!(app.view.books.len(), 1);
        assert_eq!(repo.calls().len(), 3);
    }
}
