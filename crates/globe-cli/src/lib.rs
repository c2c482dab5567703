//! globe-cli
//! ==========
//!
//! Command-line front end for the `globe-core` city index.
//!
//! The binary loads the table once, runs a single query and prints the
//! result as JSON on stdout. Logs go to stderr (`RUST_LOG`, default `info`).
//!
//! ```text
//! globe-cli -i data/cities1000.txt stats
//! globe-cli --fetch countries
//! globe-cli city 3039163
//! globe-cli lexical sant julia
//! globe-cli lexical --all-names macana
//! globe-cli proximity 3039163 -k 3 --country AD
//! ```
//!
//! Failed queries print `{"error": {"message": ..., "type": ...}}` and exit
//! with status 1.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::Commands;
use globe_core::api::{country_list, LexicalResponse, ProximityQuery, ProximityResponse};
use globe_core::text::{tokenize, validate_query};
use globe_core::{CitySearch, CityStore, GlobeError, LexicalScope, Result};
use serde_json::Value;

/// Runs one query against a loaded store.
pub fn execute(store: &CityStore, command: &Commands) -> Result<Value> {
    let value = match command {
        Commands::Stats => serde_json::to_value(store.stats())?,

        Commands::Countries => serde_json::to_value(country_list(store))?,

        Commands::City { id } => {
            let city = store.get_by_id(*id).ok_or(GlobeError::CityNotFound(*id))?;
            serde_json::to_value(city)?
        }

        Commands::Lexical { query, all_names } => {
            let raw = query.join(" ");
            validate_query(&raw)?;
            let scope = if *all_names {
                LexicalScope::AllNames
            } else {
                LexicalScope::Name
            };
            let hits = store.lexical_search_in(&tokenize(&raw), scope)?;
            serde_json::to_value(LexicalResponse::new(hits))?
        }

        Commands::Proximity { id, k, country } => {
            let query = ProximityQuery::parse(k.as_deref(), country.as_deref())?;
            let ranking = store.k_nearest(*id, query.country_code.as_deref())?;
            serde_json::to_value(ProximityResponse::build(store, &ranking, query.limit))?
        }
    };
    Ok(value)
}
