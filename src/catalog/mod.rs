//! Record and choice types for the remote catalog.
//!
//! The remote endpoint returns a JSON body with a top-level `results` array
//! of records. Each record is projected into a [`Choice`], the UI-facing
//! shape carried through filtering, selection, and the final outcome.

mod fetch;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use fetch::{FetchOutcome, fetch_choices, spawn};

/// Entity as it appears in the remote payload. Immutable once fetched; the
/// `episode` list is metadata the picker carries but never consults.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
}

/// UI-facing projection of a [`Record`]: identifier, label, thumbnail URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: u64,
    pub label: String,
    pub image: String,
}

impl From<Record> for Choice {
    fn from(record: Record) -> Self {
        Self {
            value: record.id,
            label: record.name,
            image: record.image,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogPage {
    results: Vec<Record>,
}

/// Failure modes of the one outbound request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("malformed catalog payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Parse a catalog page body and project every record into a [`Choice`].
pub fn parse_catalog(body: &str) -> Result<Vec<Choice>, FetchError> {
    let page: CatalogPage = serde_json::from_str(body)?;
    Ok(page.results.into_iter().map(Choice::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_project_into_choices() {
        let body = r#"{
            "results": [
                {"id": 1, "name": "Rick Sanchez", "image": "https://example.test/1.jpeg", "episode": ["e1", "e2"]},
                {"id": 2, "name": "Morty Smith", "image": "https://example.test/2.jpeg", "episode": []}
            ]
        }"#;
        let choices = parse_catalog(body).expect("payload parses");
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].value, 1);
        assert_eq!(choices[0].label, "Rick Sanchez");
        assert_eq!(choices[1].image, "https://example.test/2.jpeg");
    }

    #[test]
    fn episode_list_is_optional() {
        let body = r#"{"results": [{"id": 7, "name": "Birdperson", "image": "u"}]}"#;
        let choices = parse_catalog(body).expect("payload parses");
        assert_eq!(choices[0].value, 7);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(parse_catalog("{}").is_err());
        assert!(parse_catalog("not json").is_err());
        assert!(parse_catalog(r#"{"results": [{"name": "missing id"}]}"#).is_err());
    }
}
