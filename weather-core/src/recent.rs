use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{error::StorageError, storage::KeyValueStore};

/// Storage key holding the JSON-encoded list.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

/// Maximum number of remembered cities.
pub const RECENT_SEARCHES_CAPACITY: usize = 5;

/// Most-recent-first list of searched city names.
///
/// Names are compared case-insensitively; re-searching a city moves it to
/// the front with the newest spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches(Vec<String>);

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, city: &str) {
        let needle = city.to_lowercase();
        self.0.retain(|c| c.to_lowercase() != needle);
        self.0.insert(0, city.to_string());
        self.0.truncate(RECENT_SEARCHES_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read the persisted list. A missing or unreadable value, or a
    /// corrupt store, yields an empty list; I/O failures are errors.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let raw = match store.get(RECENT_SEARCHES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Self::new()),
            Err(e @ StorageError::Corrupt { .. }) => {
                warn!(error = %e, "ignoring corrupt storage");
                return Ok(Self::new());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(mut cities) => {
                cities.truncate(RECENT_SEARCHES_CAPACITY);
                Ok(Self(cities))
            }
            Err(e) => {
                warn!(error = %e, "ignoring unreadable recent searches");
                Ok(Self::new())
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.0).map_err(|source| StorageError::Encode {
            key: RECENT_SEARCHES_KEY.to_string(),
            source,
        })?;
        store.set(RECENT_SEARCHES_KEY, &raw)
    }

    pub fn forget(store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        store.remove(RECENT_SEARCHES_KEY)
    }
}

impl From<Vec<String>> for RecentSearches {
    fn from(mut cities: Vec<String>) -> Self {
        cities.truncate(RECENT_SEARCHES_CAPACITY);
        Self(cities)
    }
}
