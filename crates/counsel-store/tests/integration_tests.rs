//! Integration tests for counsel-store
//!
//! These tests cover insert, lookup, filtered search and statistics.

use counsel_domain::traits::AttorneyStore;
use counsel_domain::{AttorneyDraft, AttorneyId, Filter, DEFAULT_SEARCH_LIMIT};
use counsel_store::SqliteStore;

fn draft(name: &str, city: &str, state: &str, zip: &str, practice: &str) -> AttorneyDraft {
    AttorneyDraft {
        name: Some(name.to_string()),
        phone: Some("(510) 555-0100".to_string()),
        city: Some(city.to_string()),
        state: Some(state.to_string()),
        zip_code: Some(zip.to_string()),
        practice_areas: Some(practice.to_string()),
        ..AttorneyDraft::new(format!("https://directory.test/{}", name.replace(' ', "-")))
    }
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_insert_and_get_round_trip() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let original = AttorneyDraft {
        name: Some("Jane Doe".to_string()),
        phone: Some("(510) 555-0123, (510) 555-0199".to_string()),
        email: Some("jane@doelaw.com".to_string()),
        website: Some("https://doelaw.com/".to_string()),
        address: Some("1 Broadway, Oakland CA 94607".to_string()),
        city: Some("Oakland".to_string()),
        state: Some("CA".to_string()),
        zip_code: Some("94607".to_string()),
        practice_areas: Some("Family, Divorce".to_string()),
        source_url: "https://directory.test/jane-doe".to_string(),
    };

    let id = store.insert(original.clone()).unwrap();
    let stored = store.get_by_id(id).unwrap().expect("record should exist");

    assert_eq!(stored.id, id);
    assert_eq!(stored.to_draft(), original);
    assert_eq!(stored.created_at, stored.updated_at);
}

#[test]
fn test_optional_fields_survive_as_none() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let mut phone_only = AttorneyDraft::new("https://directory.test/anon");
    phone_only.phone = Some("(212) 555-0147".to_string());

    let id = store.insert(phone_only.clone()).unwrap();
    let stored = store.get_by_id(id).unwrap().unwrap();

    assert_eq!(stored.name, None);
    assert_eq!(stored.email, None);
    assert_eq!(stored.to_draft(), phone_only);
}

#[test]
fn test_get_missing_id_is_none() {
    let store = SqliteStore::new(":memory:").unwrap();
    let result = store.get_by_id(AttorneyId::from_value(9999)).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_ids_are_unique_and_duplicates_are_kept() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let record = draft("Jane Doe", "Oakland", "CA", "94621", "Family");
    let first = store.insert(record.clone()).unwrap();
    let second = store.insert(record).unwrap();

    assert_ne!(first, second);
    assert_eq!(store.stats().unwrap().total_attorneys, 2);
}

#[test]
fn test_search_by_city_is_case_insensitive_substring() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    store.insert(draft("A", "Oakland", "CA", "94621", "Family")).unwrap();
    store.insert(draft("B", "West Oakland", "CA", "94607", "Tax")).unwrap();
    store.insert(draft("C", "Berkeley", "CA", "94704", "Family")).unwrap();

    let filter = Filter {
        city: Some("OAKLAND".to_string()),
        ..Default::default()
    };
    let results = store.search(&filter, DEFAULT_SEARCH_LIMIT).unwrap();

    assert_eq!(results.len(), 2);
    for attorney in &results {
        let city = attorney.city.as_deref().unwrap().to_lowercase();
        assert!(city.contains("oakland"));
    }
}

#[test]
fn test_search_results_are_newest_first() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let mut ids = Vec::new();
    for i in 0..5 {
        let record = draft(&format!("Attorney {}", i), "Oakland", "CA", "94621", "Family");
        ids.push(store.insert(record).unwrap());
    }

    let filter = Filter {
        city: Some("oakland".to_string()),
        ..Default::default()
    };
    let results = store.search(&filter, DEFAULT_SEARCH_LIMIT).unwrap();
    let returned: Vec<AttorneyId> = results.iter().map(|a| a.id).collect();

    ids.reverse();
    assert_eq!(returned, ids);
    for pair in results.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[test]
fn test_search_respects_limit() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    for i in 0..60 {
        store
            .insert(draft(&format!("Attorney {}", i), "Oakland", "CA", "94621", "Family"))
            .unwrap();
    }

    let results = store.search(&Filter::default(), DEFAULT_SEARCH_LIMIT).unwrap();
    assert_eq!(results.len(), 50);

    let results = store.search(&Filter::default(), 3).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].name.as_deref(), Some("Attorney 59"));
}

#[test]
fn test_search_folds_non_ascii_case() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    store.insert(draft("A", "Évry", "FR", "91000", "Family")).unwrap();
    store.insert(draft("B", "ÖREBRO", "SE", "70210", "Tax")).unwrap();
    store.insert(draft("C", "Oakland", "CA", "94621", "Family")).unwrap();

    for term in ["Évry", "évry", "ÉVRY"] {
        let filter = Filter {
            city: Some(term.to_string()),
            ..Default::default()
        };
        let results = store.search(&filter, DEFAULT_SEARCH_LIMIT).unwrap();
        assert_eq!(results.len(), 1, "city term {:?}", term);
        assert_eq!(results[0].name.as_deref(), Some("A"));
    }

    let filter = Filter {
        city: Some("örebro".to_string()),
        ..Default::default()
    };
    let results = store.search(&filter, DEFAULT_SEARCH_LIMIT).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name.as_deref(), Some("B"));
}

#[test]
fn test_search_partial_zip_code() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    store.insert(draft("A", "Oakland", "CA", "94621", "Family")).unwrap();
    store.insert(draft("B", "Oakland", "CA", "94607-1234", "Family")).unwrap();
    store.insert(draft("C", "Brooklyn", "NY", "11201", "Family")).unwrap();

    let filter = Filter {
        zip_code: Some("946".to_string()),
        ..Default::default()
    };
    assert_eq!(store.search(&filter, DEFAULT_SEARCH_LIMIT).unwrap().len(), 2);

    let filter = Filter {
        zip_code: Some("94607".to_string()),
        ..Default::default()
    };
    let results = store.search(&filter, DEFAULT_SEARCH_LIMIT).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name.as_deref(), Some("B"));
}

#[test]
fn test_search_combines_fields_with_and() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    store.insert(draft("A", "Oakland", "CA", "94621", "Family, Divorce")).unwrap();
    store.insert(draft("B", "Oakland", "CA", "94621", "Tax")).unwrap();
    store.insert(draft("C", "Fremont", "CA", "94536", "Family")).unwrap();

    let filter = Filter {
        zip_code: Some("94621".to_string()),
        practice_area: Some("family".to_string()),
        city: Some("oakland".to_string()),
    };
    let results = store.search(&filter, DEFAULT_SEARCH_LIMIT).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name.as_deref(), Some("A"));
}

#[test]
fn test_search_treats_wildcards_literally() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    store.insert(draft("A", "Oakland", "CA", "94621", "Family")).unwrap();

    let filter = Filter {
        city: Some("%".to_string()),
        ..Default::default()
    };
    assert!(store.search(&filter, DEFAULT_SEARCH_LIMIT).unwrap().is_empty());
}

#[test]
fn test_records_without_city_do_not_match_city_filter() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let mut no_city = AttorneyDraft::new("https://directory.test/nocity");
    no_city.name = Some("No City".to_string());
    store.insert(no_city).unwrap();

    let filter = Filter {
        city: Some("o".to_string()),
        ..Default::default()
    };
    assert!(store.search(&filter, DEFAULT_SEARCH_LIMIT).unwrap().is_empty());
    assert_eq!(store.search(&Filter::default(), DEFAULT_SEARCH_LIMIT).unwrap().len(), 1);
}

#[test]
fn test_stats_counts_distinct_non_empty_values() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    store.insert(draft("A", "Oakland", "CA", "94621", "Family")).unwrap();
    store.insert(draft("B", "Oakland", "CA", "94607", "Tax")).unwrap();
    store.insert(draft("C", "Berkeley", "CA", "94704", "Tax")).unwrap();
    store.insert(draft("D", "Brooklyn", "NY", "11201", "Tax")).unwrap();

    let mut blank = AttorneyDraft::new("https://directory.test/blank");
    blank.name = Some("Blank".to_string());
    blank.city = Some(String::new());
    blank.state = Some("  ".to_string());
    store.insert(blank).unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.total_attorneys, 5);
    assert_eq!(stats.unique_cities, 3);
    assert_eq!(stats.unique_states, 2);
}

#[test]
fn test_stats_on_empty_store() {
    let store = SqliteStore::new(":memory:").unwrap();
    let stats = store.stats().unwrap();
    assert_eq!(stats.total_attorneys, 0);
    assert_eq!(stats.unique_cities, 0);
    assert_eq!(stats.unique_states, 0);
}

#[test]
fn test_file_backed_store_persists_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attorneys.db");

    let id = {
        let mut store = SqliteStore::new(&path).unwrap();
        store.insert(draft("Jane Doe", "Oakland", "CA", "94621", "Family")).unwrap()
    };

    let store = SqliteStore::new(&path).unwrap();
    let stored = store.get_by_id(id).unwrap().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Jane Doe"));
}
