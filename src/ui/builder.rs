use std::sync::mpsc::Receiver;

use anyhow::Result;

use super::App;
use super::state::PickOutcome;
use super::theme::Theme;
use crate::catalog::{self, Choice, FetchOutcome};

/// Builder for configuring the interactive picker.
///
/// Presents an fzf-like API for setting the prompt, the record source, and
/// presentation flags before running the picker to completion.
pub struct PickerUi {
    choices: Vec<Choice>,
    fetch_updates: Option<Receiver<FetchOutcome>>,
    input_title: Option<String>,
    placeholder: Option<String>,
    initial_query: Option<String>,
    theme: Option<Theme>,
    close_on_select: bool,
}

impl PickerUi {
    /// Create a picker over an already-known choice list.
    pub fn new(choices: Vec<Choice>) -> Self {
        Self {
            choices,
            fetch_updates: None,
            input_title: None,
            placeholder: None,
            initial_query: None,
            theme: None,
            close_on_select: false,
        }
    }

    /// Create a picker that fetches its choices from `url` in the
    /// background. The list starts empty and fills in (or stays empty on
    /// failure) while the UI is already interactive.
    pub fn remote(url: impl Into<String>) -> Self {
        let mut ui = Self::new(Vec::new());
        ui.fetch_updates = Some(catalog::spawn(url.into()));
        ui
    }

    pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
        self.input_title = Some(title.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = Some(query.into());
        self
    }

    pub fn with_theme_name(mut self, name: &str) -> Self {
        if let Some(theme) = super::theme::by_name(name) {
            self.theme = Some(theme);
        }
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// When enabled, the first selection submits immediately instead of
    /// keeping the list open for further toggles. Off by default, matching
    /// the always-open multi-select behaviour.
    pub fn close_on_select(mut self, enabled: bool) -> Self {
        self.close_on_select = enabled;
        self
    }

    /// Run the interactive picker with the configured options.
    pub fn run(self) -> Result<PickOutcome> {
        let mut app = self.into_app();
        app.run()
    }

    /// Build the [`App`] without entering the event loop. Exposed for tests
    /// and embedders that drive the state machine themselves.
    pub fn into_app(self) -> App {
        let mut app = App::new(self.choices);
        app.input_title = self.input_title;
        if let Some(placeholder) = self.placeholder {
            app.placeholder = placeholder;
        }
        if let Some(query) = self.initial_query {
            app.set_query(query);
        }
        if let Some(theme) = self.theme {
            app.set_theme(theme);
        }
        app.close_on_select = self.close_on_select;
        if let Some(updates) = self.fetch_updates {
            app.set_fetch_updates(updates);
        }
        app
    }
}
