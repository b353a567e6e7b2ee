//! Render context for the views
//!
//! Everything a frame needs, borrowed from the app. Views never touch the
//! store; they read this and nothing else.

use crate::app::Focus;
use crate::state::ViewState;

/// Borrowed, read-only input to [`super::render`].
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Latest store snapshot
    pub state: &'a ViewState,
    /// User id shown in the header
    pub user_id: &'a str,
    /// Focused component
    pub focus: Focus,
    /// Add form name text
    pub name_input: &'a str,
    /// Add form author text
    pub author_input: &'a str,
    /// An add submission is running
    pub submitting: bool,
    /// Animation tick
    pub tick: u64,
}

impl<'a> RenderContext<'a> {
    /// Context with empty inputs and list focus, for a bare state.
    pub fn for_state(state: &'a ViewState, user_id: &'a str) -> Self {
        Self {
            state,
            user_id,
            focus: Focus::List,
            name_input: "",
            author_input: "",
            submitting: false,
            tick: 0,
        }
    }

    /// Spinner frame derived from the tick (advances every 4 ticks).
    pub fn spinner_frame(&self) -> usize {
        (self.tick / 4) as usize
    }
}

impl<R> crate::app::App<R> {
    /// Borrow the parts of the app the views render.
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            state: &self.view,
            user_id: &self.user_id,
            focus: self.focus,
            name_input: &self.name_input,
            author_input: &self.author_input,
            submitting: self.submitting,
            tick: self.tick_count,
        }
    }
}
