//! Diagnostic logging for the terminal application.
//!
//! Stderr belongs to the terminal UI while the picker runs, so log output is
//! directed at a file under the data directory instead. The level is read
//! from `MULTIPICK_LOG` (default `warn`); when the data directory cannot be
//! created logging is disabled rather than corrupting the screen.

use std::fs::{self, OpenOptions};
use std::sync::Once;

use env_logger::{Builder, Env, Target};

use crate::app_dirs;

const LOG_ENV: &str = "MULTIPICK_LOG";
const LOG_FILE: &str = "multipick.log";

static INIT: Once = Once::new();

/// Install the global logger. Safe to call more than once; only the first
/// call has an effect.
pub fn initialize() {
    INIT.call_once(|| {
        let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"));
        match log_file() {
            Some(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            None => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
        // Ignore a second global logger installed by an embedding test.
        let _ = builder.try_init();
    });
}

fn log_file() -> Option<std::fs::File> {
    let dir = app_dirs::get_data_dir().ok()?;
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}
