// crates/globe-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

//! Download of the public GeoNames archive.
//!
//! Only used at startup when the source table is missing. Every failure,
//! including a timeout, is reported as [`GlobeError::SourceUnavailable`].

use crate::error::{GlobeError, Result};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, BufWriter, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn unavailable(context: &str, err: impl std::fmt::Display) -> GlobeError {
    GlobeError::SourceUnavailable(format!("{context}: {err}"))
}

/// Downloads `url` and writes the table it contains to `dest`.
///
/// `.zip` archives must contain an entry named like `dest`'s file name
/// (`cities1000.zip` holds `cities1000.txt`); `.gz` payloads are inflated;
/// anything else is written as-is. The table is written to a temporary file
/// next to `dest` and renamed into place, so a failed fetch never leaves a
/// truncated table behind.
pub fn fetch_dataset(url: &str, dest: &Path, timeout: Duration) -> Result<()> {
    tracing::info!(%url, dest = %dest.display(), ?timeout, "downloading dataset");

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| unavailable("cannot build HTTP client", e))?;
    let bytes = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.bytes())
        .map_err(|e| unavailable(url, e))?;

    tracing::info!(bytes = bytes.len(), "download finished");

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| unavailable(&format!("cannot create {}", parent.display()), e))?;
    }

    let partial = partial_path(dest);
    let written = if url.ends_with(".zip") {
        extract_zip(&bytes, dest, &partial)
    } else if url.ends_with(".gz") {
        write_stream(GzDecoder::new(Cursor::new(&bytes[..])), &partial)
    } else {
        write_stream(Cursor::new(&bytes[..]), &partial)
    };

    if let Err(e) = written {
        let _ = fs::remove_file(&partial);
        return Err(e);
    }
    fs::rename(&partial, dest).map_err(|e| unavailable("cannot move table into place", e))
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}

fn extract_zip(bytes: &[u8], dest: &Path, out: &Path) -> Result<()> {
    let entry_name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| unavailable("invalid destination", dest.display()))?;

    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| unavailable("bad zip archive", e))?;
    let entry = archive
        .by_name(entry_name)
        .map_err(|e| unavailable(&format!("archive entry {entry_name}"), e))?;
    write_stream(entry, out)
}

fn write_stream(mut reader: impl Read, out: &Path) -> Result<()> {
    let file = File::create(out).map_err(|e| unavailable("cannot write dataset", e))?;
    let mut writer = BufWriter::new(file);
    io::copy(&mut reader, &mut writer).map_err(|e| unavailable("cannot unpack dataset", e))?;
    writer
        .flush()
        .map_err(|e| unavailable("cannot write dataset", e))
}
