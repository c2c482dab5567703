// crates/globe-core/src/config.rs

//! Constants and ingestion options.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public GeoNames dump with every city above 1000 inhabitants.
pub const DATA_SET_URL: &str = "http://download.geonames.org/export/dump/cities1000.zip";

/// File name of the table inside [`DATA_SET_URL`].
pub const DEFAULT_SOURCE_FILE: &str = "cities1000.txt";

/// Number of neighbours returned by a proximity query when `k` is not given.
pub const DEFAULT_PROXIMITY_LIMIT: usize = 5;

/// Mean radius of the earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const DEFAULT_DELIMITER: char = '\t';

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Where and how the ingestion pipeline reads its table.
///
/// `dataset_url` is `None` by default: a missing source is an error unless
/// the caller opts into downloading it.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub source_path: PathBuf,
    pub delimiter: char,
    pub dataset_url: Option<String>,
    pub fetch_timeout: Duration,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("data").join(DEFAULT_SOURCE_FILE),
            delimiter: DEFAULT_DELIMITER,
            dataset_url: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl IngestOptions {
    pub fn new(source_path: impl AsRef<Path>) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable downloading the archive at `url` when the source is missing.
    pub fn with_fetch(mut self, url: impl Into<String>) -> Self {
        self.dataset_url = Some(url.into());
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }
}
