//! Header: title and user on the left, private count on the right.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::context::RenderContext;
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PRIVATE};

const TITLE: &str = "Book List";

/// Text of the private-count badge, e.g. `"3 private books"`.
pub fn private_count_label(count: usize) -> String {
    match count {
        1 => "1 private book".to_string(),
        n => format!("{} private books", n),
    }
}

/// Render the header
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, layout: &LayoutContext) {
    let left = Line::from(vec![
        Span::styled(
            format!(" {}", TITLE),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  @{}", ctx.user_id), Style::default().fg(COLOR_DIM)),
    ]);
    let right = Line::from(Span::styled(
        format!("{} ", private_count_label(ctx.state.private_count)),
        Style::default()
            .fg(COLOR_PRIVATE)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);

    let inner = if layout.is_short() {
        area
    } else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    };

    frame.render_widget(Paragraph::new(left), inner);
    frame.render_widget(Paragraph::new(right), inner);
}
