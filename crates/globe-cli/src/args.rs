use clap::{Parser, Subcommand};
use globe_core::config::{DATA_SET_URL, DEFAULT_DELIMITER, DEFAULT_FETCH_TIMEOUT};
use globe_core::IngestOptions;
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments for globe-cli
#[derive(Debug, Parser)]
#[command(
    name = "globe-cli",
    version,
    about = "Query the GeoNames city table by id, name or proximity"
)]
pub struct CliArgs {
    /// Path to the city table (default: data/cities1000.txt, `.gz` accepted)
    #[arg(short = 'i', long = "input", env = "GLOBE_INDEXER_INPUT", global = true)]
    pub input: Option<PathBuf>,

    /// Download the archive when the table is missing
    #[arg(long, global = true)]
    pub fetch: bool,

    /// Archive to download with --fetch
    #[arg(long, env = "GLOBE_INDEXER_URL", default_value = DATA_SET_URL, global = true)]
    pub url: String,

    /// Download timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs(), global = true)]
    pub timeout_secs: u64,

    /// Field separator of the table
    #[arg(long, default_value_t = DEFAULT_DELIMITER, hide_default_value = true, global = true)]
    pub delimiter: char,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn ingest_options(&self) -> IngestOptions {
        let mut opts = match &self.input {
            Some(path) => IngestOptions::new(path),
            None => IngestOptions::default(),
        }
        .with_delimiter(self.delimiter)
        .with_fetch_timeout(Duration::from_secs(self.timeout_secs));
        if self.fetch {
            opts = opts.with_fetch(self.url.clone());
        }
        opts
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how many cities and countries are loaded
    Stats,

    /// List the distinct country codes
    Countries,

    /// Show the full record of a city
    City {
        /// GeoNames id (e.g. 3039163)
        id: u32,
    },

    /// Find cities whose name contains the words in order (`*` is a wildcard)
    Lexical {
        /// Query words, e.g. `sant julia` or `can*llo`
        query: Vec<String>,

        /// Also match ascii and alternate names
        #[arg(long)]
        all_names: bool,
    },

    /// Rank cities by great-circle distance from a city
    Proximity {
        /// GeoNames id of the center city
        id: u32,

        /// Number of neighbours to show (default 5)
        #[arg(short = 'k')]
        k: Option<String>,

        /// Only consider cities of this ISO2 country
        #[arg(long = "country")]
        country: Option<String>,
    },
}
