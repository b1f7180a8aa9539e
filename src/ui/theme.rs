//! Colour palettes for the picker.

use ratatui::style::{Color, Modifier, Style};

/// Styles used by the rendering pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub prompt: Style,
    pub header: Style,
    pub row_highlight: Style,
    pub highlight: Style,
    pub marker: Style,
    pub empty: Style,
}

impl Theme {
    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    /// Style applied to the matched substring inside a label.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }

    /// Style of the selection marker column.
    #[must_use]
    pub fn marker_style(&self) -> Style {
        self.marker
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }
}

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
struct ThemeDefinition {
    name: &'static str,
    theme: Theme,
}

const SLATE: Theme = Theme {
    prompt: Style::new().fg(Color::Cyan),
    header: Style::new()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD),
    row_highlight: Style::new().bg(Color::DarkGray),
    highlight: Style::new()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    marker: Style::new().fg(Color::Green),
    empty: Style::new().fg(Color::DarkGray),
};

const LIGHT: Theme = Theme {
    prompt: Style::new().fg(Color::Blue),
    header: Style::new()
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD),
    row_highlight: Style::new().bg(Color::Gray),
    highlight: Style::new()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD),
    marker: Style::new().fg(Color::Blue),
    empty: Style::new().fg(Color::Gray),
};

const SOLARIZED: Theme = Theme {
    prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
    header: Style::new()
        .fg(Color::Rgb(147, 161, 161))
        .add_modifier(Modifier::BOLD),
    row_highlight: Style::new().bg(Color::Rgb(7, 54, 66)),
    highlight: Style::new()
        .fg(Color::Rgb(181, 137, 0))
        .add_modifier(Modifier::BOLD),
    marker: Style::new().fg(Color::Rgb(133, 153, 0)),
    empty: Style::new().fg(Color::Rgb(88, 110, 117)),
};

const BUILTINS: &[ThemeDefinition] = &[
    ThemeDefinition {
        name: "slate",
        theme: SLATE,
    },
    ThemeDefinition {
        name: "light",
        theme: LIGHT,
    },
    ThemeDefinition {
        name: "solarized",
        theme: SOLARIZED,
    },
];

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
    SLATE
}

/// Names of all built-in themes, in presentation order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILTINS.iter().map(|definition| definition.name).collect()
}

/// Look up a built-in theme by name, case-insensitively.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    BUILTINS
        .iter()
        .find(|definition| definition.name.eq_ignore_ascii_case(name))
        .map(|definition| definition.theme)
}
