//! One-shot catalog fetch delivered over an mpsc channel.
//!
//! The picker issues exactly one outbound request. It runs on its own thread
//! so the UI can keep accepting keystrokes while the request is in flight;
//! the result arrives through a channel the event loop drains each tick. If
//! the UI exits before the response lands, the send fails and the thread
//! simply ends, which is all the teardown this design needs.

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use super::{Choice, FetchError, parse_catalog};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of the background fetch, delivered exactly once.
pub type FetchOutcome = Result<Vec<Choice>, FetchError>;

/// Perform the blocking GET and project the payload into choices.
pub fn fetch_choices(url: &str) -> FetchOutcome {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
    let response = client
        .get(url)
        .send()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response.text().map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;
    parse_catalog(&body)
}

/// Spawn the fetch on a background thread and return the receiving end.
pub fn spawn(url: String) -> Receiver<FetchOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = fetch_choices(&url);
        // The receiver may already be gone; nothing to do then.
        let _ = tx.send(outcome);
    });
    rx
}
