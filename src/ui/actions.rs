use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::App;
use super::state::PickOutcome;

impl App {
    /// Dispatch one key press. Returns an outcome when the interaction is
    /// over, `None` while it continues.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<PickOutcome> {
        match key.code {
            KeyCode::Esc => {
                return Some(self.outcome(false));
            }
            KeyCode::Enter => {
                return Some(self.outcome(true));
            }
            KeyCode::Tab => {
                return self.toggle_and_maybe_close();
            }
            // Space toggles while the query is empty; once the user is
            // typing it belongs to the query text.
            KeyCode::Char(' ') if self.search_input.text().is_empty() => {
                return self.toggle_and_maybe_close();
            }
            KeyCode::Up => {
                self.move_cursor_up();
            }
            KeyCode::Down => {
                self.move_cursor_down();
            }
            _ => {
                if self.search_input.input(key) {
                    self.refilter();
                }
            }
        }
        None
    }

    fn toggle_and_maybe_close(&mut self) -> Option<PickOutcome> {
        let toggled_on = self.toggle_cursor_selection();
        if toggled_on && self.close_on_select {
            return Some(self.outcome(true));
        }
        None
    }

    fn move_cursor_up(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    fn move_cursor_down(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            let len = self.filtered_len();
            if selected + 1 < len {
                self.table_state.select(Some(selected + 1));
            }
        }
    }
}
