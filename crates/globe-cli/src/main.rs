//! globe-cli: load the GeoNames city table once and answer one query.
//!
//! See the library docs for usage examples.

use anyhow::Context;
use clap::Parser;
use globe_cli::args::CliArgs;
use globe_core::api::ErrorPayload;
use globe_core::{load_if_empty, CityStore};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // stdout carries the JSON result, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = args.ingest_options();
    let mut store = CityStore::new();
    load_if_empty(&mut store, &options).with_context(|| {
        format!("failed to load {}", options.source_path.display())
    })?;
    let store = Arc::new(store);

    match globe_cli::execute(&store, &args.command) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(err) => {
            tracing::debug!(error = %err, "query rejected");
            println!("{}", serde_json::to_string_pretty(&ErrorPayload::from(&err))?);
            std::process::exit(1);
        }
    }

    Ok(())
}
