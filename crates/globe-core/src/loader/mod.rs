// crates/globe-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file access, decompression, optional
//! download) and the one-time population of a [`CityStore`].
//!
//! Ingestion is all-or-nothing: rows are parsed and inserted into a staging
//! store, and the caller's store is only replaced once every row has been
//! accepted. A bad row, a duplicate id or an I/O error leaves the caller's
//! store exactly as it was (empty).

use crate::config::IngestOptions;
use crate::error::{GlobeError, Result};
use crate::model::{CityRecord, CityStore};
use crate::parser;
use std::path::Path;

pub mod common_io;
#[cfg(feature = "fetch")]
pub mod fetch;

/// What [`load_if_empty`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store already held data; nothing was read.
    AlreadyPopulated { count: usize },
    /// The store was empty and now holds `count` records.
    Loaded { count: usize },
}

impl LoadOutcome {
    pub fn count(&self) -> usize {
        match *self {
            LoadOutcome::AlreadyPopulated { count } | LoadOutcome::Loaded { count } => count,
        }
    }
}

/// Populates `store` from `options.source_path` unless it already has data.
///
/// Calling this repeatedly is safe: only the first call against an empty
/// store reads anything. When the source is missing and
/// `options.dataset_url` is set (and the `fetch` feature is on), the archive
/// is downloaded first.
pub fn load_if_empty(store: &mut CityStore, options: &IngestOptions) -> Result<LoadOutcome> {
    if !store.is_empty() {
        tracing::debug!(count = store.count(), "store already populated, skipping ingestion");
        return Ok(LoadOutcome::AlreadyPopulated {
            count: store.count(),
        });
    }

    let path = options.source_path.as_path();
    if !path.exists() {
        ensure_source(options)?;
    }

    let staged = CityStore::from_table(path, options.delimiter).inspect_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "ingestion aborted");
    })?;
    let count = staged.count();
    *store = staged;

    tracing::info!(path = %path.display(), count, "ingestion complete");
    Ok(LoadOutcome::Loaded { count })
}

/// Makes sure the source exists, downloading it when allowed.
fn ensure_source(options: &IngestOptions) -> Result<()> {
    let path = options.source_path.as_path();
    match options.dataset_url.as_deref() {
        #[cfg(feature = "fetch")]
        Some(url) => fetch::fetch_dataset(url, path, options.fetch_timeout)?,
        #[cfg(not(feature = "fetch"))]
        Some(_) => {
            return Err(GlobeError::SourceUnavailable(
                "downloading requires the 'fetch' feature".into(),
            ))
        }
        None => {
            return Err(GlobeError::SourceUnavailable(format!(
                "{} does not exist and no download was requested",
                path.display()
            )))
        }
    }

    if !path.exists() {
        return Err(GlobeError::SourceUnavailable(format!(
            "{} still missing after download",
            path.display()
        )));
    }
    Ok(())
}

impl CityStore {
    /// Builds a fresh store from a table file, in file order.
    ///
    /// The first malformed row, invalid field or duplicate id aborts the
    /// build and is returned as the error.
    pub fn from_table(path: &Path, delimiter: char) -> Result<Self> {
        let mut staged = CityStore::new();
        for row in parser::open_table(path, delimiter)? {
            let row = row?;
            staged.insert(CityRecord::from_row(&row)?)?;
        }
        Ok(staged)
    }
}
