// crates/globe-core/src/model/store.rs
use super::record::{CityRecord, GeonameId};
use crate::common::StoreStats;
use crate::error::{GlobeError, Result};
use once_cell::sync::OnceCell;
use std::collections::{BTreeSet, HashMap};

/// The in-memory city collection.
///
/// Records live in one contiguous `Vec` in insertion order; `by_id` maps a
/// geoname id to its slot. Once ingestion is done the store is only read,
/// so it can be shared between threads behind an `Arc` without locks.
#[derive(Clone, Debug, Default)]
pub struct CityStore {
    cities: Vec<CityRecord>,
    by_id: HashMap<GeonameId, usize>,
    /// Sorted distinct country codes, computed on first use.
    country_codes: OnceCell<Vec<String>>,
}

impl CityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cities: Vec::with_capacity(capacity),
            by_id: HashMap::with_capacity(capacity),
            country_codes: OnceCell::new(),
        }
    }

    /// Appends a record. Fails with [`GlobeError::DuplicateId`] if the id is taken.
    pub fn insert(&mut self, record: CityRecord) -> Result<()> {
        let id = record.id();
        if self.by_id.contains_key(&id) {
            return Err(GlobeError::DuplicateId(id));
        }
        self.by_id.insert(id, self.cities.len());
        self.cities.push(record);
        self.country_codes = OnceCell::new();
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.cities.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get_by_id(&self, id: GeonameId) -> Option<&CityRecord> {
        self.by_id.get(&id).map(|&slot| &self.cities[slot])
    }

    /// Every record, in insertion order.
    pub fn all(&self) -> &[CityRecord] {
        &self.cities
    }

    /// Records whose country code equals `code` exactly, in insertion order.
    pub fn filter_by_country<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Iterator<Item = &'a CityRecord> + 'a {
        self.cities.iter().filter(move |c| c.country_code() == code)
    }

    /// Every country code present, sorted ascending.
    pub fn distinct_country_codes(&self) -> &[String] {
        self.country_codes.get_or_init(|| {
            self.cities
                .iter()
                .map(|c| c.country_code())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_owned)
                .collect()
        })
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            cities: self.count(),
            countries: self.distinct_country_codes().len(),
        }
    }
}
