mod common;

use common::loaded_store;
use globe_core::api::{ProximityQuery, ProximityResponse};
use globe_core::text::{tokenize, validate_query};
use globe_core::{CitySearch, GlobeError, LexicalPattern, LexicalScope};
use std::sync::Arc;
use std::thread;

const SANT_JULIA: u32 = 3039163;
const ORDINO: u32 = 3039678;

fn ids<'a>(cities: impl IntoIterator<Item = &'a globe_core::CityRecord>) -> Vec<u32> {
    cities.into_iter().map(|c| c.id()).collect()
}

#[test]
fn city_by_id() {
    let store = loaded_store();
    let city = store.get_by_id(3040132).expect("la Massana");
    assert_eq!(city.country_code(), "AD");
    assert_eq!(city.name(), "la Massana");
    assert!(store.get_by_id(0).is_none());
}

#[test]
fn end_to_end_proximity() {
    let store = loaded_store();

    let ranking = store.k_nearest(SANT_JULIA, None).unwrap();
    let query = ProximityQuery::parse(Some("5"), None).unwrap();
    let resp = ProximityResponse::build(&store, &ranking, query.limit);
    assert_eq!(resp.total_available, 8);
    assert_eq!(resp.cities.len(), 5);
    assert!(resp
        .cities
        .windows(2)
        .all(|w| w[0].distance <= w[1].distance));

    // Andorra la Vella is the closest town to Sant Julià
    assert_eq!(resp.cities[0].city.id, 3041563);

    let query = ProximityQuery::parse(None, Some("id")).unwrap();
    let ranking = store
        .k_nearest(SANT_JULIA, query.country_code.as_deref())
        .unwrap();
    let resp = ProximityResponse::build(&store, &ranking, query.limit);
    assert_eq!(resp.total_available, 0);
    assert!(resp.cities.is_empty());
}

#[test]
fn proximity_totality_and_filter() {
    let store = loaded_store();
    for city in store.all() {
        let ranking = store.k_nearest(city.id(), None).unwrap();
        assert_eq!(ranking.len(), store.count() - 1);
        assert!(ranking.iter().all(|n| n.id != city.id()));
        assert!(ranking
            .windows(2)
            .all(|w| w[0].distance_km <= w[1].distance_km));
    }

    let ranking = store.k_nearest(ORDINO, Some("AD")).unwrap();
    assert_eq!(ranking.len(), 8);
    assert!(ranking
        .iter()
        .all(|n| store.get_by_id(n.id).unwrap().country_code() == "AD"));
}

#[test]
fn k_does_not_change_the_total() {
    let store = loaded_store();
    let ranking = store.k_nearest(ORDINO, None).unwrap();
    for k in ["1", "2", "8", "50"] {
        let query = ProximityQuery::parse(Some(k), None).unwrap();
        let resp = ProximityResponse::build(&store, &ranking, query.limit);
        assert_eq!(resp.total_available, 8);
        assert_eq!(resp.cities.len(), query.limit.min(8));
    }
}

#[test]
fn proximity_unknown_center() {
    let store = loaded_store();
    let err = store.k_nearest(1, None).unwrap_err();
    assert!(matches!(err, GlobeError::CityNotFound(1)));
}

#[test]
fn lexical_token_order() {
    let store = loaded_store();
    let hits = store.lexical_search(&tokenize("El Tarter")).unwrap();
    assert_eq!(ids(hits), [3039154]);

    let hits = store.lexical_search(&["tarter", "el"]).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn lexical_single_token_is_substring_by_id() {
    let store = loaded_store();
    let hits = store.lexical_search(&["el"]).unwrap();
    assert_eq!(ids(hits), [3039154, 3041563]);

    let hits = store.lexical_search(&["encamp"]).unwrap();
    assert_eq!(ids(hits), [3040686]);

    assert!(store.lexical_search(&["nowhere"]).unwrap().is_empty());
}

#[test]
fn lexical_is_deterministic() {
    let store = loaded_store();
    let first = ids(store.lexical_search(&["a"]).unwrap());
    for _ in 0..3 {
        assert_eq!(ids(store.lexical_search(&["a"]).unwrap()), first);
    }
    assert!(first.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn lexical_wildcards_and_unicode() {
    let store = loaded_store();
    let raw = "Sant Julià de Lòria";
    validate_query(raw).unwrap();
    assert_eq!(ids(store.lexical_search(&tokenize(raw)).unwrap()), [SANT_JULIA]);

    assert_eq!(ids(store.lexical_search(&["can*llo"]).unwrap()), [3041204]);
    assert_eq!(ids(store.lexical_search(&["*massana"]).unwrap()), [3040132]);
}

#[test]
fn lexical_all_names_scope() {
    let store = loaded_store();
    assert!(store.lexical_search(&["macana"]).unwrap().is_empty());
    let hits = store
        .lexical_search_in(&["macana"], LexicalScope::AllNames)
        .unwrap();
    assert_eq!(ids(hits), [3040132]);

    let hits = store
        .lexical_search_in(&["julia", "loria"], LexicalScope::AllNames)
        .unwrap();
    assert_eq!(ids(hits), [SANT_JULIA]);
}

#[test]
fn invalid_characters_are_rejected() {
    for raw in ["../..", "123.*123"] {
        assert!(matches!(
            LexicalPattern::parse(raw),
            Err(GlobeError::InvalidCharacter { .. })
        ));
    }
    for raw in ["Jak*", "*Foo", "Julià"] {
        assert!(LexicalPattern::parse(raw).is_ok(), "{raw}");
    }
}

#[test]
fn country_codes() {
    let store = loaded_store();
    assert_eq!(store.distinct_country_codes(), ["AD"]);
    let stats = store.stats();
    assert_eq!(stats.cities, 9);
    assert_eq!(stats.countries, 1);
}

#[test]
fn concurrent_readers_see_the_same_results() {
    let store = Arc::new(loaded_store());
    let expected = store.k_nearest(SANT_JULIA, None).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let ranking = store.k_nearest(SANT_JULIA, None).unwrap();
                let names = ids(store.lexical_search(&["la"]).unwrap());
                (ranking, names, store.distinct_country_codes().to_vec())
            })
        })
        .collect();

    for handle in handles {
        let (ranking, names, codes) = handle.join().unwrap();
        assert_eq!(ranking, expected);
        assert!(!names.is_empty());
        assert_eq!(codes, ["AD"]);
    }
}
