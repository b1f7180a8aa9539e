//! Core state container for the picker's front-end.
//!
//! The [`App`] owns the choice list, the query input, the cursor, and the
//! selection set, plus the receiver the background fetch reports through.

use std::sync::mpsc::Receiver;

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::input::SearchInput;
use super::theme::Theme;
use crate::catalog::{Choice, FetchOutcome};
use crate::matching;

/// Final result of an interactive run.
///
/// `accepted` distinguishes submit (Enter) from cancel (Esc); the selection
/// is forwarded verbatim either way, empty included — no validation happens
/// at this stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOutcome {
    pub accepted: bool,
    pub query: String,
    pub selection: Vec<Choice>,
}

/// Aggregate state shared across the terminal UI.
pub struct App {
    pub choices: Vec<Choice>,
    pub search_input: SearchInput,
    pub table_state: TableState,
    pub theme: Theme,
    pub(crate) filtered: Vec<usize>,
    pub(crate) selected: Vec<u64>,
    pub(crate) input_title: Option<String>,
    pub(crate) placeholder: String,
    pub(crate) close_on_select: bool,
    pub(crate) fetch_failed: bool,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) fetch_updates: Option<Receiver<FetchOutcome>>,
}

impl App {
    /// Construct an [`App`] over an already-known choice list.
    pub fn new(choices: Vec<Choice>) -> Self {
        crate::logging::initialize();
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        let mut app = Self {
            choices,
            search_input: SearchInput::default(),
            table_state,
            theme: Theme::default(),
            filtered: Vec::new(),
            selected: Vec::new(),
            input_title: None,
            placeholder: "Type to filter".to_string(),
            close_on_select: false,
            fetch_failed: false,
            throbber_state: ThrobberState::default(),
            fetch_updates: None,
        };
        app.refilter();
        app
    }

    /// Apply a new theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Replace the query text and recompute the filtered view.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_input = SearchInput::new(query);
        self.refilter();
    }

    /// Hand over the channel the background fetch reports on.
    pub(crate) fn set_fetch_updates(&mut self, updates: Receiver<FetchOutcome>) {
        self.fetch_updates = Some(updates);
    }

    /// Whether the one-shot fetch is still in flight.
    pub(crate) fn is_loading(&self) -> bool {
        self.fetch_updates.is_some()
    }

    /// Recompute the filtered view for the current query and clamp the
    /// cursor back onto it.
    pub(crate) fn refilter(&mut self) {
        self.filtered = matching::filter_indices(&self.choices, self.search_input.text());
        self.ensure_cursor();
    }

    /// Number of currently visible choices.
    pub(crate) fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Keep the cursor on a valid row of the filtered view.
    pub(crate) fn ensure_cursor(&mut self) {
        if self.filtered.is_empty() {
            self.table_state.select(None);
        } else if let Some(selected) = self.table_state.selected() {
            if selected >= self.filtered.len() {
                self.table_state
                    .select(Some(self.filtered.len().saturating_sub(1)));
            }
        } else {
            self.table_state.select(Some(0));
        }
    }

    /// The choice currently under the cursor, if any.
    pub(crate) fn cursor_choice(&self) -> Option<&Choice> {
        let row = self.table_state.selected()?;
        let index = *self.filtered.get(row)?;
        self.choices.get(index)
    }

    /// Toggle selection of the choice under the cursor. Returns `true` when
    /// the toggle turned the choice on.
    pub(crate) fn toggle_cursor_selection(&mut self) -> bool {
        let Some(value) = self.cursor_choice().map(|choice| choice.value) else {
            return false;
        };
        if let Some(position) = self.selected.iter().position(|&id| id == value) {
            self.selected.remove(position);
            false
        } else {
            self.selected.push(value);
            true
        }
    }

    /// Whether the given choice is in the selection set.
    pub(crate) fn is_selected(&self, choice: &Choice) -> bool {
        self.selected.contains(&choice.value)
    }

    /// The selection set in toggle order, materialized as choices.
    pub(crate) fn selection_choices(&self) -> Vec<Choice> {
        self.selected
            .iter()
            .filter_map(|&value| {
                self.choices
                    .iter()
                    .find(|choice| choice.value == value)
                    .cloned()
            })
            .collect()
    }

    /// Build the outcome forwarded to the caller.
    pub(crate) fn outcome(&self, accepted: bool) -> PickOutcome {
        PickOutcome {
            accepted,
            query: self.search_input.text().to_string(),
            selection: self.selection_choices(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_choices() -> Vec<Choice> {
        vec![
            Choice {
                value: 1,
                label: "Rick Sanchez".to_string(),
                image: "https://example.test/1.jpeg".to_string(),
            },
            Choice {
                value: 2,
                label: "Morty Smith".to_string(),
                image: "https://example.test/2.jpeg".to_string(),
            },
        ]
    }

    #[test]
    fn new_app_shows_the_full_list() {
        let app = App::new(sample_choices());
        assert_eq!(app.filtered_len(), 2);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn query_narrows_the_view_and_clamps_the_cursor() {
        let mut app = App::new(sample_choices());
        app.table_state.select(Some(1));
        app.set_query("ric");
        assert_eq!(app.filtered, vec![0]);
        assert_eq!(app.table_state.selected(), Some(0));
        app.set_query("zzz");
        assert_eq!(app.filtered_len(), 0);
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn toggle_round_trip_restores_prior_selection() {
        let mut app = App::new(sample_choices());
        assert!(app.toggle_cursor_selection());
        assert_eq!(app.selection_choices().len(), 1);
        assert!(!app.toggle_cursor_selection());
        assert!(app.selection_choices().is_empty());
    }

    #[test]
    fn selection_keeps_toggle_order() {
        let mut app = App::new(sample_choices());
        app.table_state.select(Some(1));
        app.toggle_cursor_selection();
        app.table_state.select(Some(0));
        app.toggle_cursor_selection();
        let selection = app.selection_choices();
        let labels: Vec<&str> = selection.iter().map(|choice| choice.label.as_str()).collect();
        assert_eq!(labels, vec!["Morty Smith", "Rick Sanchez"]);
    }

    #[test]
    fn selection_survives_filtering() {
        let mut app = App::new(sample_choices());
        app.toggle_cursor_selection();
        app.set_query("morty");
        assert_eq!(app.filtered, vec![1]);
        let outcome = app.outcome(true);
        assert!(outcome.accepted);
        assert_eq!(outcome.query, "morty");
        assert_eq!(outcome.selection[0].label, "Rick Sanchez");
    }

    #[test]
    fn empty_selection_is_forwarded_verbatim() {
        let app = App::new(Vec::new());
        let outcome = app.outcome(true);
        assert!(outcome.accepted);
        assert!(outcome.selection.is_empty());
    }
}
