// crates/globe-core/src/lib.rs

//! # globe-core
//!
//! In-memory index of the GeoNames city dump with three queries:
//! lookup by id, lexical name matching and proximity ranking by
//! great-circle distance.
//!
//! ```no_run
//! use globe_core::{load_if_empty, CitySearch, CityStore, IngestOptions};
//!
//! let mut store = CityStore::new();
//! load_if_empty(&mut store, &IngestOptions::new("data/cities1000.txt"))?;
//!
//! let ranking = store.k_nearest(3039163, None)?;
//! for n in ranking.iter().take(5) {
//!     println!("{:>8.2} km  {}", n.distance_km, n.id);
//! }
//! # Ok::<(), globe_core::GlobeError>(())
//! ```

pub mod api; // JSON views for callers
pub mod common;
pub mod config;
pub mod distance;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::StoreStats;
pub use crate::config::IngestOptions;
pub use crate::distance::{haversine_km, GeoPoint};
pub use crate::error::{GlobeError, Result};
pub use crate::loader::{load_if_empty, LoadOutcome};
pub use crate::model::{CityRecord, CityStore, GeonameId};
pub use crate::text::{LexicalPattern, LexicalScope};
// The search trait must be in scope to query a store.
pub use crate::traits::{CitySearch, Neighbor};
