//! Bottom status line: the current error, or contextual key hints.

use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::context::RenderContext;
use super::layout::LayoutContext;
use crate::app::Focus;

/// Key hints for the focused component.
pub fn key_hints(focus: Focus, layout: &LayoutContext) -> &'static str {
    match (focus, layout.is_compact()) {
        (Focus::List, false) => {
            "a/p: all/private  \u{2190}\u{2192}: switch  r: reload  Tab: add book  q: quit"
        }
        (Focus::List, true) => "a/p  r  Tab  q",
        (_, false) => "Enter: add book  Tab: next field  Esc: back to list  Ctrl+C: quit",
        (_, true) => "Enter  Tab  Esc",
    }
}

/// The indicator the status line shows.
pub fn status_indicator(ctx: &RenderContext, layout: &LayoutContext) -> StatusIndicatorType {
    if let Some(error) = &ctx.state.error {
        StatusIndicatorType::error(error.clone())
    } else if ctx.submitting {
        StatusIndicatorType::spinner("Adding book...", ctx.spinner_frame())
    } else {
        StatusIndicatorType::info(key_hints(ctx.focus, layout))
    }
}

/// Render the status line
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, layout: &LayoutContext) {
    let line = render_status_indicator(&status_indicator(ctx, layout));
    frame.render_widget(Paragraph::new(line), area);
}
