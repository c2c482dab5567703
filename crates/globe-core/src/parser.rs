// crates/globe-core/src/parser.rs

//! # Geoname Table Parser
//!
//! Reads the tab-separated GeoNames dump (`cities1000.txt` and friends) into
//! [`RawRow`]s. Fields are taken literally: there is no quoting and no
//! escaping, so a `"` inside a name stays a `"`.
//!
//! The parser only checks the shape of a row (19 columns). Turning the text
//! into typed values is [`CityRecord::from_row`](crate::model::CityRecord::from_row)'s job.

use crate::error::{GlobeError, Result};
use crate::loader::common_io;
use std::io::BufRead;
use std::path::Path;

/// Column names of the dump, in file order.
pub const GEONAME_TABLE_HEADERS: [&str; 19] = [
    "geonameid",
    "name",
    "asciiname",
    "alternatenames",
    "latitude",
    "longitude",
    "feature_class",
    "feature_code",
    "country_code",
    "cc2",
    "admin1_code",
    "admin2_code",
    "admin3_code",
    "admin4_code",
    "population",
    "elevation",
    "dem",
    "timezone",
    "modification_date",
];

pub const COLUMN_COUNT: usize = GEONAME_TABLE_HEADERS.len();

/// Index into a [`RawRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    GeonameId = 0,
    Name,
    AsciiName,
    AlternateNames,
    Latitude,
    Longitude,
    FeatureClass,
    FeatureCode,
    CountryCode,
    Cc2,
    Admin1Code,
    Admin2Code,
    Admin3Code,
    Admin4Code,
    Population,
    Elevation,
    Dem,
    Timezone,
    ModificationDate,
}

impl Column {
    /// Header name as it appears in [`GEONAME_TABLE_HEADERS`].
    pub fn header(self) -> &'static str {
        GEONAME_TABLE_HEADERS[self as usize]
    }
}

/// One line of the table, split but not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source.
    pub line: usize,
    fields: Vec<String>,
}

impl RawRow {
    /// Builds a row from already-split fields, checking the column count.
    pub fn new(line: usize, fields: Vec<String>) -> Result<Self> {
        if fields.len() != COLUMN_COUNT {
            return Err(GlobeError::MalformedRow {
                line,
                found: fields.len(),
            });
        }
        Ok(Self { line, fields })
    }

    pub fn get(&self, column: Column) -> &str {
        &self.fields[column as usize]
    }

    /// Pairs of `(header, value)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        GEONAME_TABLE_HEADERS
            .iter()
            .copied()
            .zip(self.fields.iter().map(String::as_str))
    }
}

/// Streaming reader over a delimited table.
///
/// Yields one [`RawRow`] per non-blank line, in file order.
pub struct TableReader<R> {
    reader: R,
    delimiter: char,
    line: usize,
    buf: String,
}

impl<R: BufRead> TableReader<R> {
    pub fn new(reader: R, delimiter: char) -> Self {
        Self {
            reader,
            delimiter,
            line: 0,
            buf: String::new(),
        }
    }

    fn split_line(&self, text: &str) -> Result<RawRow> {
        let fields = text.split(self.delimiter).map(str::to_owned).collect();
        RawRow::new(self.line, fields)
    }
}

impl<R: BufRead> Iterator for TableReader<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(GlobeError::Io(e))),
            }
            self.line += 1;

            let text = self.buf.trim_end_matches(['\n', '\r']);
            if text.is_empty() {
                continue;
            }
            return Some(self.split_line(text));
        }
    }
}

/// Opens `path` and returns a streaming reader over its rows.
///
/// Fails with [`GlobeError::NotAFile`] unless `path` is a regular file.
/// With the `compact` feature, `*.gz` files are decompressed on the fly.
pub fn open_table(path: &Path, delimiter: char) -> Result<TableReader<Box<dyn BufRead>>> {
    if !path.is_file() {
        return Err(GlobeError::NotAFile(path.to_path_buf()));
    }
    let stream = common_io::open_stream(path)?;
    Ok(TableReader::new(stream, delimiter))
}

/// Parses the whole table at `path` into memory, preserving row order.
pub fn parse_table_file(path: &Path, delimiter: char) -> Result<Vec<RawRow>> {
    open_table(path, delimiter)?.collect()
}
