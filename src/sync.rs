//! Time synchronization engine
//!
//! Owns the map from timezone identifier to selected instant and the 12/24-hour
//! display preference. Editing one city's wall-clock reading re-expresses that
//! reading as a single shared moment and assigns it to every entry, so all rows
//! render the same moment in their own timezones.
//!
//! Reads never fail and never mutate: a missing entry displays "now", and an
//! identifier that is not in the IANA database falls back to the process local
//! timezone.

use crate::constants::{TIME_FORMAT_12H, TIME_FORMAT_24H};
use chrono::{DateTime, Duration, Local, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;

/// Engine state: selected instants keyed by timezone identifier, plus the
/// display format preference. Iteration order is alphabetical by identifier.
#[derive(Debug, Clone)]
pub struct TimeSyncEngine {
    times: BTreeMap<String, DateTime<Utc>>,
    use_24_hour: bool,
}

impl TimeSyncEngine {
    /// Create an empty engine.
    #[must_use]
    pub fn new(use_24_hour: bool) -> Self {
        Self {
            times: BTreeMap::new(),
            use_24_hour,
        }
    }

    /// Whether times render in 24-hour format.
    #[must_use]
    pub fn use_24_hour(&self) -> bool {
        self.use_24_hour
    }

    /// Flip between 12-hour and 24-hour rendering. Stored instants are
    /// untouched; only subsequent [`format_time`](Self::format_time) calls
    /// change shape.
    pub fn toggle_format(&mut self) {
        self.use_24_hour = !self.use_24_hour;
        log::debug!("display format toggled, use_24_hour={}", self.use_24_hour);
    }

    /// Add a city keyed by timezone identifier, defaulting its instant to
    /// "now". Adding an identifier that is already present keeps the stored
    /// instant, so aliases sharing a timezone collapse into one entry.
    pub fn add_city(&mut self, identifier: &str) {
        self.times.entry(identifier.to_string()).or_insert_with(Utc::now);
    }

    /// Remove a city's entry. Removing an absent identifier is a no-op.
    pub fn remove_city(&mut self, identifier: &str) {
        self.times.remove(identifier);
    }

    /// Whether an identifier currently has an entry.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.times.contains_key(identifier)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Selected identifiers in alphabetical order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.times.keys().map(String::as_str)
    }

    /// The instant stored for an identifier, defaulting to "now" when
    /// absent. Never mutates the map.
    #[must_use]
    pub fn time(&self, identifier: &str) -> DateTime<Utc> {
        self.times.get(identifier).copied().unwrap_or_else(Utc::now)
    }

    /// The stored-or-now instant expressed as the identifier's local
    /// wall-clock reading. Used to prefill the time editor.
    #[must_use]
    pub fn wall_clock(&self, identifier: &str) -> NaiveDateTime {
        let instant = self.time(identifier);
        match identifier.parse::<Tz>() {
            Ok(tz) => instant.with_timezone(&tz).naive_local(),
            Err(_) => instant.with_timezone(&Local).naive_local(),
        }
    }

    /// Render the stored-or-now instant under the identifier's timezone
    /// rules, honoring the 12/24-hour preference. Side-effect-free; an
    /// unresolvable identifier renders in the process local timezone.
    #[must_use]
    pub fn format_time(&self, identifier: &str) -> String {
        let instant = self.time(identifier);
        let pattern = if self.use_24_hour { TIME_FORMAT_24H } else { TIME_FORMAT_12H };

        match identifier.parse::<Tz>() {
            Ok(tz) => instant.with_timezone(&tz).format(pattern).to_string(),
            Err(_) => instant.with_timezone(&Local).format(pattern).to_string(),
        }
    }

    /// Set a new wall-clock reading for one city and propagate the same
    /// moment to every entry.
    ///
    /// `wall_clock` is what the editor shows for `identifier`: a naive local
    /// reading in that city's timezone. Subtracting the zone's UTC offset
    /// yields the shared absolute moment, which is assigned to all entries
    /// (and to `identifier` itself, inserting it if needed); each row then
    /// renders that moment in its own zone.
    ///
    /// The offset is evaluated at the edited reading, not at the shifted
    /// instant, so an edit landing next to a DST transition can be off by
    /// the transition amount.
    pub fn update_time(&mut self, identifier: &str, wall_clock: NaiveDateTime) {
        let pivot = Utc.from_utc_datetime(&wall_clock);
        let offset = self.offset_seconds(identifier, pivot);
        let shared = pivot - Duration::seconds(i64::from(offset));

        for instant in self.times.values_mut() {
            *instant = shared;
        }
        self.times.insert(identifier.to_string(), shared);

        log::debug!(
            "time updated via {identifier} to {wall_clock} (offset {offset}s, shared moment {shared})"
        );
    }

    /// Signed seconds-from-UTC the identifier's timezone observes at the
    /// given instant, daylight-saving rules included. Falls back to the
    /// process local timezone when the identifier does not resolve.
    fn offset_seconds(&self, identifier: &str, instant: DateTime<Utc>) -> i32 {
        match identifier.parse::<Tz>() {
            Ok(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix().local_minus_utc(),
            Err(_) => Local.offset_from_utc_datetime(&instant.naive_utc()).fix().local_minus_utc(),
        }
    }
}
