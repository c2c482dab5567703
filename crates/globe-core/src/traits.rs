// crates/globe-core/src/traits.rs
use crate::error::Result;
use crate::model::{CityRecord, GeonameId};
use crate::text::LexicalScope;
use serde::Serialize;

/// One entry of a proximity ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub distance_km: f64,
    pub id: GeonameId,
}

/// Query operations over a populated city collection.
///
/// All methods take `&self` and touch no shared mutable state, so any number
/// of callers may run them at once against the same collection.
pub trait CitySearch {
    /// Cities whose display name matches the ordered `tokens`, by id ascending.
    ///
    /// Tokens are lowercase words of the user's query; `*` inside a token is
    /// a wildcard. Fails with [`GlobeError::EmptyQuery`] or
    /// [`GlobeError::InvalidCharacter`] before scanning anything.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use globe_core::{CitySearch, CityStore};
    ///
    /// let store = CityStore::new();
    /// for city in store.lexical_search(&["el", "tarter"]).unwrap() {
    ///     println!("{} {}", city.id(), city.name());
    /// }
    /// ```
    ///
    /// [`GlobeError::EmptyQuery`]: crate::GlobeError::EmptyQuery
    /// [`GlobeError::InvalidCharacter`]: crate::GlobeError::InvalidCharacter
    fn lexical_search<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<&CityRecord>> {
        self.lexical_search_in(tokens, LexicalScope::Name)
    }

    /// Like [`CitySearch::lexical_search`] with a choice of which names to test.
    fn lexical_search_in<S: AsRef<str>>(
        &self,
        tokens: &[S],
        scope: LexicalScope,
    ) -> Result<Vec<&CityRecord>>;

    /// Every other city ranked by great-circle distance from `center`.
    ///
    /// With `country_code`, only cities of that country are candidates. The
    /// ranking is complete: truncating to `k` and reporting the total are up
    /// to the caller (see [`ProximityResponse`](crate::api::ProximityResponse)).
    /// Ties on distance are broken by ascending id.
    ///
    /// Fails with [`GlobeError::CityNotFound`](crate::GlobeError::CityNotFound)
    /// when `center` is unknown.
    fn k_nearest(&self, center: GeonameId, country_code: Option<&str>) -> Result<Vec<Neighbor>>;
}
