//! Book list panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::context::RenderContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::app::Focus;
use crate::models::Book;
use crate::state::ViewMode;

/// One list row: `  Dune  by Frank Herbert  #12`.
pub fn book_line(book: &Book) -> Line<'static> {
    let mut spans = vec![
        Span::raw("  "),
        Span::styled(
            book.name.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  by {}", book.author), Style::default()),
    ];
    if let Some(id) = book.id {
        spans.push(Span::styled(format!("  #{}", id), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

fn empty_hint(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::All => "No books yet. Press Tab to add one.",
        ViewMode::Private => "No private books.",
    }
}

/// Lines for the list body, without the border.
pub fn list_lines(ctx: &RenderContext) -> Vec<Line<'static>> {
    let state = ctx.state;
    if state.books.is_empty() {
        let indicator = if state.is_loading {
            StatusIndicatorType::spinner("Loading books...", ctx.spinner_frame())
        } else if state.error.is_some() {
            StatusIndicatorType::info("Nothing to show. Press r to retry.")
        } else {
            StatusIndicatorType::info(empty_hint(state.view_mode))
        };
        return vec![render_status_indicator(&indicator)];
    }

    state.books.iter().map(book_line).collect()
}

/// Render the list panel
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let border_color = if ctx.focus == Focus::List {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let title = format!(" {} ({}) ", ctx.state.view_mode.title(), ctx.state.books.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(COLOR_DIM)));

    frame.render_widget(Paragraph::new(list_lines(ctx)).block(block), area);
}
