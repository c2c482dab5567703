// crates/globe-core/src/common.rs
use serde::Serialize;

/// Simple aggregate statistics for the store.
///
/// Returned by [`CityStore::stats`](crate::model::CityStore::stats), these
/// counts reflect the store after ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub cities: usize,
    pub countries: usize,
}
