//! The weather lookup view: query input, lookup trigger, result state,
//! recent-search shortcuts and the clear action.
//!
//! The view owns all state; a front end drives it and renders it with
//! [`crate::render::render_view`].

use tracing::{debug, info, warn};

use crate::{
    error::{LookupError, StorageError},
    model::WeatherSnapshot,
    provider::WeatherProvider,
    recent::RecentSearches,
    storage::KeyValueStore,
};

/// A lookup that has been started but not yet settled.
///
/// Holds the city captured when the lookup began, so the recent-search
/// update is unaffected by the query being cleared or edited meanwhile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    city: String,
    seq: u64,
}

impl PendingLookup {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What a call to [`WeatherView::lookup`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The query was empty; nothing changed.
    Skipped,
    Found(WeatherSnapshot),
    Failed(LookupError),
}

#[derive(Debug)]
pub struct WeatherView<P, S> {
    provider: P,
    store: S,
    query: String,
    snapshot: Option<WeatherSnapshot>,
    loading: bool,
    error: String,
    recent: RecentSearches,
    last_seq: u64,
    discard_stale: bool,
}

impl<P, S> WeatherView<P, S>
where
    P: WeatherProvider,
    S: KeyValueStore,
{
    /// Build the view, reading the persisted recent searches once.
    pub fn new(provider: P, store: S) -> Result<Self, StorageError> {
        let recent = RecentSearches::load(&store)?;
        debug!(count = recent.len(), "loaded recent searches");

        Ok(Self {
            provider,
            store,
            query: String::new(),
            snapshot: None,
            loading: false,
            error: String::new(),
            recent,
            last_seq: 0,
            discard_stale: false,
        })
    }

    /// Ignore results of lookups that were overtaken by a newer one.
    pub fn discard_stale_responses(mut self, enabled: bool) -> Self {
        self.discard_stale = enabled;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current error text; empty when there is none.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Copy a recent search into the query. Does not start a lookup.
    pub fn select_recent(&mut self, index: usize) -> Option<&str> {
        let city = self.recent.get(index)?.to_string();
        self.query = city;
        Some(&self.query)
    }

    /// Start a lookup for the current query.
    ///
    /// Returns `None` and touches nothing when the query is empty.
    pub fn begin_lookup(&mut self) -> Option<PendingLookup> {
        if self.query.is_empty() {
            return None;
        }

        self.last_seq += 1;
        let pending = PendingLookup {
            city: self.query.clone(),
            seq: self.last_seq,
        };

        self.loading = true;
        self.error.clear();
        self.snapshot = None;

        debug!(city = %pending.city, seq = pending.seq, "lookup started");
        Some(pending)
    }

    /// Apply the result of a lookup started with [`Self::begin_lookup`].
    ///
    /// Lookups may settle in any order. Without the stale guard the last
    /// one to settle decides what is displayed.
    pub fn finish_lookup(
        &mut self,
        pending: PendingLookup,
        result: Result<WeatherSnapshot, LookupError>,
    ) -> Result<(), StorageError> {
        let stale = self.discard_stale && pending.seq != self.last_seq;

        if stale {
            debug!(
                city = %pending.city,
                seq = pending.seq,
                latest = self.last_seq,
                "discarding stale lookup result"
            );
        } else {
            match result {
                Ok(snapshot) => {
                    debug!(city = %pending.city, location = %snapshot.name, "lookup succeeded");
                    self.snapshot = Some(snapshot);
                }
                Err(e) => {
                    warn!(city = %pending.city, error = %e, "lookup failed");
                    self.error = e.to_string();
                }
            }
            self.loading = false;
        }

        self.query.clear();

        self.recent.push(&pending.city);
        self.recent.save(&mut self.store)
    }

    /// Run a complete lookup for the current query.
    pub async fn lookup(&mut self) -> Result<LookupOutcome, StorageError> {
        let Some(pending) = self.begin_lookup() else {
            return Ok(LookupOutcome::Skipped);
        };

        let result = self.provider.current_by_city(pending.city()).await;
        let outcome = match &result {
            Ok(snapshot) => LookupOutcome::Found(snapshot.clone()),
            Err(e) => LookupOutcome::Failed(e.clone()),
        };

        self.finish_lookup(pending, result)?;
        Ok(outcome)
    }

    /// Forget the snapshot, the query and every recent search.
    ///
    /// The loading flag and error text are left as they are.
    // TODO: decide whether clear should also reset `error`; a stale error
    // banner currently survives it.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.snapshot = None;
        self.query.clear();
        self.recent.clear();
        RecentSearches::forget(&mut self.store)?;
        info!("cleared weather view and recent searches");
        Ok(())
    }
}
