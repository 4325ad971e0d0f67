//! Error types for page actions and control binding.

use crate::page::ControlId;

/// Failure of a request made on behalf of a page action.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// An endpoint could not be built from the configured base URL.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The server answered with a non-2xx status.
    #[error("POST {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    /// Curl could not complete the transfer (connect, timeout, ...).
    #[error("POST {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Response body was not UTF-8.
    #[error("response from {url} is not valid UTF-8")]
    Body { url: String },
}

/// Errors from binding controls to a page or dispatching clicks.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("page is already initialized")]
    AlreadyInitialized,
    #[error("control {0} is bound more than once")]
    DuplicateControl(ControlId),
    #[error("no action bound to control {0}")]
    UnknownControl(ControlId),
    #[error(transparent)]
    Action(#[from] ActionError),
}
