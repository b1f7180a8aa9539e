//! Core crate exports for building and running the `multipick` terminal
//! picker.
//!
//! The root module re-exports the types embedders need so they can fetch,
//! filter, and collect a selection without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod matching;
pub mod ui;

pub use catalog::{Choice, FetchError, Record};
pub use ui::{PickOutcome, PickerUi, Theme};
