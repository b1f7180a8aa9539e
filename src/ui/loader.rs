//! Applies background fetch results to the UI state.

use std::sync::mpsc::TryRecvError;

use log::{info, warn};

use super::App;

impl App {
    /// Drain the fetch channel. The fetch delivers at most one outcome; once
    /// it arrives (or the sender is gone) the receiver is dropped so the
    /// loading indicator stops.
    pub(crate) fn pump_fetch_updates(&mut self) {
        let Some(rx) = self.fetch_updates.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(choices)) => {
                info!("catalog fetch returned {} records", choices.len());
                self.choices = choices;
                self.refilter();
            }
            Ok(Err(err)) => {
                // Degrade to an empty list; the user sees "No matches"
                // instead of a crashed view.
                warn!("catalog fetch failed: {err}");
                self.fetch_failed = true;
            }
            Err(TryRecvError::Empty) => {
                self.fetch_updates = Some(rx);
            }
            Err(TryRecvError::Disconnected) => {
                warn!("catalog fetch thread exited without a result");
                self.fetch_failed = true;
            }
        }
    }
}
