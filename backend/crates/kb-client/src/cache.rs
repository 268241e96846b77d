use crate::ClientError;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use futures::future::{BoxFuture, FutureExt, Shared, TryFutureExt};
use log::debug;

pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, Arc<ClientError>>>>;

struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

struct CacheState<V> {
    entries: HashMap<String, CacheEntry<V>>,
    in_flight: HashMap<String, SharedFetch<V>>,
}

/// TTL cache for reads that also collapses identical concurrent requests into one.
///
/// Failures are never cached. Invalidation drops matching in-flight requests too,
/// so a read racing a write cannot repopulate the cache with the old value.
pub struct RequestCache<V> {
    ttl: Duration,
    state: Mutex<CacheState<V>>,
}

impl<V> Default for RequestCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<V> RequestCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                in_flight: HashMap::new(),
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh cached value for `key`, if any. Expired entries are evicted.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut state = self.lock();
        match state.entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                debug!("[Cache] HIT for {key}");
                Some(entry.value.clone())
            }
            Some(_) => {
                state.entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn set(&self, key: &str, value: V) {
        if self.ttl.is_zero() {
            return;
        }
        debug!("[Cache] SET for {key}");
        self.lock().entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.lock().in_flight.contains_key(key)
    }

    /// Cached value, else join an identical in-flight request, else run `fetch`.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<V, ClientError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ClientError>> + Send + 'static,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let request = {
            let mut state = self.lock();
            match state.in_flight.get(key) {
                Some(pending) => {
                    debug!("[Cache] Waiting for in-progress request: {key}");
                    pending.clone()
                }
                None => {
                    debug!("[Cache] Request in progress for {key}");
                    let request = fetch().map_err(Arc::new).boxed().shared();
                    state.in_flight.insert(key.to_string(), request.clone());
                    request
                }
            }
        };

        let result = request.clone().await;

        let still_current = {
            let mut state = self.lock();
            let current = state
                .in_flight
                .get(key)
                .is_some_and(|pending| pending.ptr_eq(&request));
            if current {
                state.in_flight.remove(key);
            }
            current
        };

        match result {
            Ok(value) => {
                if still_current {
                    self.set(key, value.clone());
                }
                Ok(value)
            }
            Err(error) => Err(ClientError::Shared(error)),
        }
    }

    pub fn invalidate(&self, key: &str) {
        debug!("[Cache] INVALIDATE {key}");
        let mut state = self.lock();
        state.entries.remove(key);
        state.in_flight.remove(key);
    }

    /// Invalidate every key containing `pattern`.
    pub fn invalidate_pattern(&self, pattern: &str) {
        let mut state = self.lock();
        state.entries.retain(|key, _| !key.contains(pattern));
        state.in_flight.retain(|key, _| !key.contains(pattern));
        debug!("[Cache] INVALIDATE keys matching {pattern}");
    }

    pub fn clear(&self) {
        debug!("[Cache] CLEAR ALL");
        let mut state = self.lock();
        state.entries.clear();
        state.in_flight.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cache key from a URL and its query parameters, e.g. `"/api/tasks/1:{}"`.
pub fn cache_key(url: &str, params: &[(&str, &str)]) -> String {
    let params: serde_json::Map<String, serde_json::Value> = params
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
        .collect();
    format!("{url}:{}", serde_json::Value::Object(params))
}
