// crates/globe-core/src/loader/common_io.rs
use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Returns `true` when `path` names a gzip file (`*.gz`).
pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps `*.gz` files in a Gzip decoder.
/// Returns a generic reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(BufReader::new(GzDecoder::new(BufReader::new(
                file,
            )))));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(crate::error::GlobeError::SourceUnavailable(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(BufReader::new(file)))
}
