//! Refusals raised before a request is started.
//!
//! None of these change orchestrator state: the action simply does not run.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("catalog is not loaded yet")]
    CatalogNotReady,
    #[error("a request is already in flight")]
    Busy,
    #[error("aircraft and legs must both be valid JSON arrays")]
    ScenarioIncomplete,
    #[error("export is only available after a successful quote")]
    NoQuote,
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        SessionError::Encode(e.to_string())
    }
}
