//! UI rendering for the book list
//!
//! The screen is a vertical stack:
//! - Header with title, user and private count
//! - Tab selector for the view mode
//! - Book list
//! - Add-book form
//! - Status line with errors or key hints
//!
//! ## Responsive Layout System
//!
//! Every render function receives a [`LayoutContext`] so it can shorten labels
//! and drop borders on small terminals. Views read a [`RenderContext`] and
//! never mutate application state.

mod add_form;
mod book_list;
pub mod components;
mod context;
mod header;
mod layout;
mod status_line;
mod theme;

pub use book_list::{book_line, list_lines};
pub use context::RenderContext;
pub use header::private_count_label;
pub use layout::{breakpoints, screen_areas, LayoutContext, ScreenAreas, FORM_HEIGHT};
pub use status_line::{key_hints, status_indicator};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INPUT_BG,
    COLOR_LOADING, COLOR_PRIVATE,
};

use ratatui::{widgets::Paragraph, Frame};

use crate::app::Focus;
use crate::state::ViewMode;
use components::{render_tab_selector, TabItem};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen
pub fn render(frame: &mut Frame, ctx: &RenderContext) {
    let layout = LayoutContext::from_rect(frame.area());
    let areas = screen_areas(frame.area(), &layout);

    header::render(frame, areas.header, ctx, &layout);

    let tabs: Vec<TabItem<'static>> = ViewMode::ALL_MODES
        .iter()
        .map(|mode| TabItem::for_mode(*mode))
        .collect();
    let tab_line = render_tab_selector(
        &tabs,
        ctx.state.view_mode.index(),
        ctx.focus == Focus::List,
        &layout,
    );
    frame.render_widget(Paragraph::new(tab_line), areas.tabs);

    book_list::render(frame, areas.list, ctx);
    add_form::render(frame, areas.form, ctx);
    status_line::render(frame, areas.status, ctx, &layout);
}
