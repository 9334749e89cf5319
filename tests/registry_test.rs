use horologist::registry::{City, CityRegistry, DEFAULT_CITIES};

#[test]
fn test_default_catalog_has_twenty_entries() {
    let registry = CityRegistry::new();
    assert_eq!(registry.cities().len(), 20);
    assert_eq!(DEFAULT_CITIES.len(), 20);
}

#[test]
fn test_lookup_first_row_wins() {
    let registry = CityRegistry::new();
    // Providence, New York, and Boston all share America/New_York;
    // the first catalog row carries the display name
    assert_eq!(registry.lookup("America/New_York"), Some("Providence"));
    assert_eq!(registry.lookup("Asia/Kathmandu"), Some("Kathmandu"));
}

#[test]
fn test_lookup_unknown_identifier() {
    let registry = CityRegistry::new();
    assert_eq!(registry.lookup("Mars/Olympus_Mons"), None);
}

#[test]
fn test_search_is_case_insensitive() {
    let registry = CityRegistry::new();
    let names: Vec<&str> = registry.search("tok").map(|city| city.name.as_str()).collect();
    assert_eq!(names, vec!["Tokyo"]);

    let upper: Vec<&str> = registry.search("TOK").map(|city| city.name.as_str()).collect();
    assert_eq!(upper, vec!["Tokyo"]);
}

#[test]
fn test_search_preserves_catalog_order() {
    let registry = CityRegistry::new();
    let expected: Vec<&str> = registry
        .cities()
        .iter()
        .filter(|city| city.name.to_lowercase().contains("an"))
        .map(|city| city.name.as_str())
        .collect();

    let found: Vec<&str> = registry.search("an").map(|city| city.name.as_str()).collect();
    assert_eq!(found, expected);
    assert!(found.len() > 1);
}

#[test]
fn test_search_empty_query_yields_whole_catalog() {
    let registry = CityRegistry::new();
    assert_eq!(registry.search("").count(), registry.cities().len());
}

#[test]
fn test_search_is_restartable() {
    let registry = CityRegistry::new();
    let first: Vec<String> = registry.search("on").map(|city| city.name.clone()).collect();
    let second: Vec<String> = registry.search("on").map(|city| city.name.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_search_no_matches() {
    let registry = CityRegistry::new();
    assert_eq!(registry.search("zzzz").count(), 0);
}

#[test]
fn test_add_and_remove_city() {
    let mut registry = CityRegistry::new();
    registry.add_city("Reykjavik", "Atlantic/Reykjavik");
    assert_eq!(registry.cities().len(), 21);
    assert_eq!(registry.lookup("Atlantic/Reykjavik"), Some("Reykjavik"));

    // Adding the identical row again is a no-op
    registry.add_city("Reykjavik", "Atlantic/Reykjavik");
    assert_eq!(registry.cities().len(), 21);

    registry.remove_city("Reykjavik");
    assert_eq!(registry.cities().len(), 20);
    assert_eq!(registry.lookup("Atlantic/Reykjavik"), None);
}

#[test]
fn test_with_cities_constructor() {
    let registry = CityRegistry::with_cities(vec![City {
        name: "Testville".to_string(),
        timezone: "Etc/UTC".to_string(),
    }]);
    assert_eq!(registry.cities().len(), 1);
    assert_eq!(registry.lookup("Etc/UTC"), Some("Testville"));
}
