// crates/globe-core/src/model/mod.rs
pub mod record;
pub mod search;
pub mod store;

pub use record::{CityRecord, GeonameId};
pub use store::CityStore;
