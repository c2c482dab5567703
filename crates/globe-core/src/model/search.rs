// crates/globe-core/src/model/search.rs
use super::{CityRecord, CityStore, GeonameId};
use crate::error::{GlobeError, Result};
use crate::text::{LexicalPattern, LexicalScope};
use crate::traits::{CitySearch, Neighbor};

impl CitySearch for CityStore {
    fn lexical_search_in<S: AsRef<str>>(
        &self,
        tokens: &[S],
        scope: LexicalScope,
    ) -> Result<Vec<&CityRecord>> {
        let pattern = LexicalPattern::new(tokens)?;

        let mut out: Vec<&CityRecord> = self
            .all()
            .iter()
            .filter(|city| match scope {
                LexicalScope::Name => pattern.matches(city.name()),
                LexicalScope::AllNames => {
                    pattern.matches(city.name())
                        || pattern.matches(city.ascii_name())
                        || city.alternate_names().iter().any(|a| pattern.matches(a))
                }
            })
            .collect();
        out.sort_by_key(|city| city.id());
        Ok(out)
    }

    fn k_nearest(&self, center: GeonameId, country_code: Option<&str>) -> Result<Vec<Neighbor>> {
        let origin = self
            .get_by_id(center)
            .ok_or(GlobeError::CityNotFound(center))?
            .point();

        // Linear scan over the candidates.
        let candidates: Box<dyn Iterator<Item = &CityRecord> + '_> = match country_code {
            Some(code) => Box::new(self.filter_by_country(code)),
            None => Box::new(self.all().iter()),
        };

        let mut ranked: Vec<Neighbor> = candidates
            .filter(|city| city.id() != center)
            .map(|city| Neighbor {
                distance_km: origin.distance_km(&city.point()),
                id: city.id(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then(a.id.cmp(&b.id))
        });
        Ok(ranked)
    }
}
