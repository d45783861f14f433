use std::future::Future;

use fxhash::FxHashMap;
use kairos_core::{route_candidate::RouteCandidate, travel_mode::TravelMode};
use parking_lot::Mutex;
use tracing::debug;

/// The exact inputs of a route lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteQueryKey {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
}

impl RouteQueryKey {
    pub fn new(origin: &str, destination: &str, mode: TravelMode) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode,
        }
    }
}

/// In-memory memo of route lookups, kept for the lifetime of the process.
/// Entries are never evicted.
#[derive(Default)]
pub struct RouteCache {
    entries: Mutex<FxHashMap<RouteQueryKey, Vec<RouteCandidate>>>,
}

impl RouteCache {
    pub fn get(&self, key: &RouteQueryKey) -> Option<Vec<RouteCandidate>> {
        self.entries.lock().get(key).cloned()
    }

    pub fn insert(&self, key: RouteQueryKey, routes: Vec<RouteCandidate>) {
        self.entries.lock().insert(key, routes);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns the memoized routes for `key`, or runs `fetch` and memoizes
    /// its result. Failures are not memoized.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: RouteQueryKey,
        fetch: F,
    ) -> Result<Vec<RouteCandidate>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<RouteCandidate>, E>>,
    {
        if let Some(routes) = self.get(&key) {
            debug!("[CACHE HIT] {} -> {} ({})", key.origin, key.destination, key.mode);
            return Ok(routes);
        }

        let routes = fetch().await?;
        self.insert(key, routes.clone());

        Ok(routes)
    }
}
