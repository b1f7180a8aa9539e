//! Interactive terminal UI for the picker.
//!
//! The [`builder`] module exposes the public-facing [`PickerUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, state
//! management, and the highlight/input widgets that power the terminal
//! application.

mod actions;
mod builder;
mod highlight;
pub mod input;
mod loader;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use builder::PickerUi;
pub use state::{App, PickOutcome};
pub use theme::Theme;
