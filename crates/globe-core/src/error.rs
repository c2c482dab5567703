// crates/globe-core/src/error.rs
use crate::model::GeonameId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the engine. Nothing here is logged or retried by the
/// engine itself; callers decide how to report them.
#[derive(Debug, Error)]
pub enum GlobeError {
    /// The ingestion source does not exist or is not a regular file.
    #[error("path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The source is missing and could not be fetched.
    #[error("dataset unavailable: {0}")]
    SourceUnavailable(String),

    /// A row of the table does not have the expected column count.
    #[error("line {line}: expected 19 fields, found {found}")]
    MalformedRow { line: usize, found: usize },

    /// A row has the right shape but a field fails validation.
    #[error("line {line}: invalid `{field}`: {reason}")]
    RecordInvalid {
        line: usize,
        field: &'static str,
        reason: String,
    },

    #[error("duplicate city id: {0}")]
    DuplicateId(GeonameId),

    #[error("cannot find city with ID: {0}")]
    CityNotFound(GeonameId),

    /// The lexical query contains something other than letters, digits,
    /// whitespace and `*`.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("search query is empty")]
    EmptyQuery,

    /// A boundary parameter (`k`, `countryCode`) failed validation.
    #[error("invalid value for parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GlobeError {
    /// `true` for lookups of ids that are not in the store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GlobeError::CityNotFound(_))
    }

    /// `true` when the caller sent a bad query rather than the engine failing.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GlobeError::InvalidCharacter { .. }
                | GlobeError::EmptyQuery
                | GlobeError::InvalidParameter { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GlobeError>;
