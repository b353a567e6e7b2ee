//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus};
use crate::repository::BookRepository;
use crate::state::ViewMode;

impl<R: BookRepository + 'static> App<R> {
    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        if self.focus.is_form() {
            self.handle_form_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('a') => self.select_mode(ViewMode::All),
            KeyCode::Char('p') => self.select_mode(ViewMode::Private),
            KeyCode::Left | KeyCode::Right => {
                let mode = self.view.view_mode.toggled();
                self.select_mode(mode);
            }
            KeyCode::Char('r') => self.reload(),
            KeyCode::Enter => self.focus = Focus::Name,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Enter => self.submit_add(),
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(input) = self.focused_input_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }
}
