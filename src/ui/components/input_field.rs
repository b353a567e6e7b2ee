//! Input Field Component
//!
//! A labelled single-line text input with focus handling and placeholder
//! text, drawn with rounded borders.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Rows used by one input field: label (1) + bordered box (3).
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Keep the tail of `value` that fits in `width` columns, so the cursor
/// end stays visible while typing.
pub fn visible_tail(value: &str, width: usize) -> &str {
    if value.width() <= width {
        return value;
    }
    let mut start = value.len();
    let mut used = 0;
    for (idx, ch) in value.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

/// Render an input field with label and input box
///
/// Returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    if area.height < INPUT_FIELD_HEIGHT || area.width < 6 {
        return 0;
    }

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let input_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 3,
    };
    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let showing_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let (text, text_style) = match config.placeholder {
        Some(placeholder) if config.value.is_empty() => {
            (placeholder.to_string(), Style::default().fg(COLOR_DIM))
        }
        _ => {
            // Borders take 2 columns, the cursor 1
            let width = input_area.width.saturating_sub(3) as usize;
            let style = if config.focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            (visible_tail(config.value, width).to_string(), style)
        }
    };

    let mut spans = Vec::new();
    if config.focused && showing_placeholder {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
        spans.push(Span::styled(text, text_style));
    } else {
        spans.push(Span::styled(text, text_style));
        if config.focused {
            spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White))); // Block cursor
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    INPUT_FIELD_HEIGHT
}
