// crates/globe-core/src/api.rs

//! JSON views and parameter handling for callers that expose the store over
//! a boundary (CLI, HTTP, bindings).
//!
//! The engine itself never truncates, defaults or formats anything. These
//! helpers implement the caller side of that contract: `k` defaults to
//! [`DEFAULT_PROXIMITY_LIMIT`], country codes are uppercased, rankings are
//! cut to `k` while `total_available` reports the full length.

use crate::config::DEFAULT_PROXIMITY_LIMIT;
use crate::error::{GlobeError, Result};
use crate::model::{CityRecord, CityStore, GeonameId};
use crate::traits::Neighbor;
use serde::Serialize;

/// Compact view of a city, used in result lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityView<'a> {
    pub id: GeonameId,
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: &'a str,
}

impl<'a> From<&'a CityRecord> for CityView<'a> {
    fn from(city: &'a CityRecord) -> Self {
        Self {
            id: city.id(),
            name: city.name(),
            latitude: city.latitude(),
            longitude: city.longitude(),
            country_code: city.country_code(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LexicalResponse<'a> {
    pub cities: Vec<CityView<'a>>,
    pub total: usize,
}

impl<'a> LexicalResponse<'a> {
    pub fn new(hits: Vec<&'a CityRecord>) -> Self {
        let cities: Vec<_> = hits.into_iter().map(CityView::from).collect();
        Self {
            total: cities.len(),
            cities,
        }
    }
}

/// Validated parameters of a proximity request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProximityQuery {
    pub limit: usize,
    pub country_code: Option<String>,
}

impl Default for ProximityQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PROXIMITY_LIMIT,
            country_code: None,
        }
    }
}

impl ProximityQuery {
    /// Parses the raw `k` and `countryCode` values of a request.
    ///
    /// `k` must be a positive integer and defaults to 5. The country code is
    /// uppercased and must be two ASCII letters; blank means "no filter".
    pub fn parse(k: Option<&str>, country_code: Option<&str>) -> Result<Self> {
        let limit = match k.map(str::trim) {
            None => DEFAULT_PROXIMITY_LIMIT,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(GlobeError::InvalidParameter {
                        name: "k",
                        value: raw.to_owned(),
                    })
                }
            },
        };

        let country_code = match country_code.map(str::trim) {
            None | Some("") => None,
            Some(raw) if raw.len() == 2 && raw.bytes().all(|b| b.is_ascii_alphabetic()) => {
                Some(raw.to_ascii_uppercase())
            }
            Some(raw) => {
                return Err(GlobeError::InvalidParameter {
                    name: "countryCode",
                    value: raw.to_owned(),
                })
            }
        };

        Ok(Self {
            limit,
            country_code,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct NeighborView<'a> {
    pub city: CityView<'a>,
    pub distance: f64,
}

#[derive(Debug, Serialize)]
pub struct ProximityResponse<'a> {
    pub cities: Vec<NeighborView<'a>>,
    pub limit: usize,
    pub total_available: usize,
}

impl<'a> ProximityResponse<'a> {
    /// Cuts a full ranking down to `limit` entries.
    ///
    /// `ranking` must come from [`CitySearch::k_nearest`] on this same
    /// `store`. Ids the store does not know are skipped, so a foreign ranking
    /// can yield fewer than `min(limit, total_available)` cities.
    ///
    /// [`CitySearch::k_nearest`]: crate::traits::CitySearch::k_nearest
    pub fn build(store: &'a CityStore, ranking: &[Neighbor], limit: usize) -> Self {
        let cities = ranking
            .iter()
            .take(limit)
            .filter_map(|n| {
                store.get_by_id(n.id).map(|city| NeighborView {
                    city: CityView::from(city),
                    distance: n.distance_km,
                })
            })
            .collect();
        Self {
            cities,
            limit,
            total_available: ranking.len(),
        }
    }
}

/// A country code with its ISO 3166 name, when the code is a known one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry<'a> {
    pub code: &'a str,
    pub name: Option<&'static str>,
    /// `"AD - Andorra"`, or the bare code for unknown codes.
    pub label: String,
}

impl<'a> CountryEntry<'a> {
    pub fn new(code: &'a str) -> Self {
        let name = country_name(code);
        let label = match name {
            Some(name) => format!("{code} - {name}"),
            None => code.to_owned(),
        };
        Self { code, name, label }
    }
}

/// ISO 3166-1 name of an alpha-2 code.
pub fn country_name(code: &str) -> Option<&'static str> {
    isocountry::CountryCode::for_alpha2(code)
        .ok()
        .map(|c| c.name())
}

pub fn country_list(store: &CityStore) -> Vec<CountryEntry<'_>> {
    store
        .distinct_country_codes()
        .iter()
        .map(|code| CountryEntry::new(code))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// `{"error": {"message": ..., "type": ...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: ErrorDetail,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>, kind: &'static str) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                kind,
            },
        }
    }
}

impl From<&GlobeError> for ErrorPayload {
    fn from(err: &GlobeError) -> Self {
        let kind = if err.is_not_found() {
            "INVALID_PATH"
        } else if err.is_client_error() {
            "VALIDATION_ERROR"
        } else {
            "INTERNAL_ERROR"
        };
        Self::new(err.to_string(), kind)
    }
}
