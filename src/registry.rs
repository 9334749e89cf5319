//! City catalog
//!
//! Read-only reference data mapping user-facing city names to IANA timezone
//! identifiers. Several cities may share one identifier ("New York" and
//! "Boston" are both `America/New_York`); a display name is an alias, not a
//! key. The picker edits this presentation list at runtime, nothing else
//! depends on its contents.

/// A single catalog row: user-facing name plus IANA timezone identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub timezone: String,
}

/// Default catalog shipped with the application.
pub const DEFAULT_CITIES: &[(&str, &str)] = &[
    ("Providence", "America/New_York"),
    ("Moscow", "Europe/Moscow"),
    ("Manila", "Asia/Manila"),
    ("Tokyo", "Asia/Tokyo"),
    ("Hong Kong", "Asia/Hong_Kong"),
    ("Beirut", "Asia/Beirut"),
    ("Kathmandu", "Asia/Kathmandu"),
    ("New York", "America/New_York"),
    ("London", "Europe/London"),
    ("Paris", "Europe/Paris"),
    ("Berlin", "Europe/Berlin"),
    ("Sydney", "Australia/Sydney"),
    ("Los Angeles", "America/Los_Angeles"),
    ("San Francisco", "America/Los_Angeles"),
    ("Chicago", "America/Chicago"),
    ("Boston", "America/New_York"),
    ("Bangkok", "Asia/Bangkok"),
    ("Mumbai", "Asia/Kolkata"),
    ("Shanghai", "Asia/Shanghai"),
    ("Singapore", "Asia/Singapore"),
];

/// City registry with lookup and search over the catalog.
#[derive(Debug, Clone)]
pub struct CityRegistry {
    cities: Vec<City>,
}

impl CityRegistry {
    /// Create a registry populated with the default catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cities: DEFAULT_CITIES
                .iter()
                .map(|(name, timezone)| City {
                    name: (*name).to_string(),
                    timezone: (*timezone).to_string(),
                })
                .collect(),
        }
    }

    /// Create a registry from explicit rows (mostly useful in tests).
    #[must_use]
    pub fn with_cities(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// All catalog rows, in original order.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Display name for a timezone identifier. The first catalog row
    /// carrying the identifier wins, so aliases further down the list
    /// ("Boston") never shadow the primary name.
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&str> {
        self.cities
            .iter()
            .find(|city| city.timezone == identifier)
            .map(|city| city.name.as_str())
    }

    /// Lazily filter the catalog by case-insensitive substring match on the
    /// display name, preserving original order. An empty query yields the
    /// whole catalog.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a City> + 'a {
        let query = query.to_lowercase();
        self.cities
            .iter()
            .filter(move |city| query.is_empty() || city.name.to_lowercase().contains(&query))
    }

    /// Add a city to the catalog. No-op when the same (name, identifier)
    /// row already exists.
    pub fn add_city(&mut self, name: &str, timezone: &str) {
        let exists = self.cities.iter().any(|city| city.name == name && city.timezone == timezone);
        if !exists {
            self.cities.push(City {
                name: name.to_string(),
                timezone: timezone.to_string(),
            });
        }
    }

    /// Remove every catalog row with the given display name.
    pub fn remove_city(&mut self, name: &str) {
        self.cities.retain(|city| city.name != name);
    }
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
