//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the few sizing
//! questions the views ask.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Short terminal (< 20 rows)
    pub const SHORT_HEIGHT: u16 = 20;
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Narrower than 60 columns.
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Narrower than 80 columns: short labels, tighter spacing.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Fewer than 20 rows: the header drops its border.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SHORT_HEIGHT
    }
}

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub tabs: Rect,
    pub list: Rect,
    pub form: Rect,
    pub status: Rect,
}

/// Rows used by the add form: two input fields of 4 rows each.
pub const FORM_HEIGHT: u16 = 8;

/// Split the frame into header, tabs, list, form and status line.
pub fn screen_areas(area: Rect, ctx: &LayoutContext) -> ScreenAreas {
    let header_height = if ctx.is_short() { 1 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        list: chunks[2],
        form: chunks[3],
        status: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_queries() {
        let ctx = LayoutContext::new(50, 15);
        assert!(ctx.is_extra_small());
        assert!(ctx.is_compact());
        assert!(ctx.is_short());

        let ctx = LayoutContext::new(120, 40);
        assert!(!ctx.is_extra_small());
        assert!(!ctx.is_compact());
        assert!(!ctx.is_short());
    }

    #[test]
    fn test_screen_areas_fill_height() {
        let area = Rect::new(0, 0, 100, 40);
        let areas = screen_areas(area, &LayoutContext::from_rect(area));

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.tabs.height, 1);
        assert_eq!(areas.form.height, FORM_HEIGHT);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.list.height, 40 - 3 - 1 - FORM_HEIGHT - 1);
        assert_eq!(areas.status.y + areas.status.height, 40);
    }

    #[test]
    fn test_short_terminal_uses_single_line_header() {
        let area = Rect::new(0, 0, 100, 18);
        let areas = screen_areas(area, &LayoutContext::from_rect(area));
        assert_eq!(areas.header.height, 1);
    }
}
