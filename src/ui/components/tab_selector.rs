//! Tab Selector Component
//!
//! A horizontal tab selector. Uses `▶` marker for the selected item with
//! responsive label sizing.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::state::ViewMode;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
    /// Key that selects this tab, shown after the label
    pub hotkey: Option<char>,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str, short_label: &'a str) -> Self {
        Self {
            label,
            short_label,
            hotkey: None,
        }
    }

    pub fn with_hotkey(mut self, hotkey: char) -> Self {
        self.hotkey = Some(hotkey);
        self
    }

    /// Tab item for a view mode, e.g. `All books [a]`.
    pub fn for_mode(mode: ViewMode) -> TabItem<'static> {
        let (short, hotkey) = match mode {
            ViewMode::All => ("All", 'a'),
            ViewMode::Private => ("Private", 'p'),
        };
        TabItem::new(mode.title(), short).with_hotkey(hotkey)
    }
}

/// Render a horizontal tab selector
///
/// # Arguments
/// * `items` - The tab items to display
/// * `selected` - Index of the currently selected tab
/// * `focused` - Whether the tab selector is currently focused
/// * `ctx` - Layout context for responsive sizing
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    focused: bool,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };
        let label = match item.hotkey {
            Some(key) if !ctx.is_extra_small() => format!("{} [{}]", label, key),
            _ => label.to_string(),
        };

        if idx == selected {
            let marker_style = if focused {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            let text_style = if focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            spans.push(Span::styled("▶ ", marker_style));
            spans.push(Span::styled(label, text_style));
        } else {
            let text_style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", text_style));
            spans.push(Span::styled(label, text_style));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
