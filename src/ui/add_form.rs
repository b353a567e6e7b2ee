//! Add-book form: name and author inputs.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::components::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
use super::context::RenderContext;
use crate::app::Focus;

/// Render the form
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_FIELD_HEIGHT),
            Constraint::Length(INPUT_FIELD_HEIGHT),
        ])
        .split(area);

    let name = InputFieldConfig::new("Name", ctx.name_input)
        .focused(ctx.focus == Focus::Name)
        .placeholder("Book title");
    render_input_field(frame, rows[0], &name);

    let author = InputFieldConfig::new("Author", ctx.author_input)
        .focused(ctx.focus == Focus::Author)
        .placeholder("Who wrote it");
    render_input_field(frame, rows[1], &author);
}
