// src/error.rs
use thiserror::Error;

/// Everything that can go wrong between a nickname and a frozen record.
#[derive(Debug, Error)]
pub enum Error {
    /// Nickname shape rejected before any request is made.
    #[error("invalid nickname '{0}': expected 2 to 15 letters, digits or underscores")]
    Validation(String),

    /// Page could not be fetched, or the server does not know the player.
    #[error("request failed: {0}")]
    Request(String),

    #[error("property '{0}' is read only")]
    ReadOnly(String),

    #[error("property '{0}' does not exist")]
    NotFound(String),

    /// The markup lacks a node, attribute or pattern the extractors rely on.
    #[error("unexpected markup: {0}")]
    Structure(String),

    #[error("malformed persisted record: {0}")]
    Persist(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn unable_to_fetch() -> Self {
        Error::Request(s!("unable to fetch data from server"))
    }

    pub fn no_such_player() -> Self {
        Error::Request(s!("no such player"))
    }

    pub(crate) fn structure(what: impl Into<String>) -> Self {
        Error::Structure(what.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
