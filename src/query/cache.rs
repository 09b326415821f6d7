use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::time::Instant;

use super::{Fetcher, QueryError, QueryResult, RetryPolicy};

/// Cache-wide query options, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    /// Retries after the first failed attempt.
    pub retry: u32,
    /// Age after which cached data is refetched on subscribe.
    pub stale_time: Duration,
    /// Backoff before the first retry, doubled for each further retry.
    pub retry_delay_base: Duration,
    /// Upper bound for the retry backoff.
    pub retry_delay_max: Duration,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            retry: 2,
            stale_time: Duration::from_secs(5 * 60),
            retry_delay_base: Duration::from_millis(1000),
            retry_delay_max: Duration::from_secs(30),
        }
    }
}

impl QueryConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            retries: self.retry,
            base: self.retry_delay_base,
            max: self.retry_delay_max,
        }
    }
}

struct Entry<T, E> {
    fetcher: Arc<dyn Fetcher<T, E>>,
    state: Arc<watch::Sender<QueryResult<T, E>>>,
    invalidated: bool,
}

/// Keyed cache of asynchronous fetches.
///
/// Each key owns one fetcher (the first one registered wins) and one
/// observable [`QueryResult`]. Fetch cycles run on spawned tasks, so every
/// method that may start one must be called inside a Tokio runtime. A cycle
/// always runs to completion even if nobody awaits it.
pub struct QueryCache<T, E> {
    config: QueryConfig,
    entries: Mutex<HashMap<String, Entry<T, E>>>,
}

impl<T, E> QueryCache<T, E>
where
    T: Send + Sync + 'static,
    E: fmt::Display + Send + Sync + 'static,
{
    pub fn new(config: QueryConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Register interest in `key`.
    ///
    /// Starts a fetch cycle when there is no cached data, when the data is
    /// stale or invalidated, unless one is already in flight. The returned
    /// subscription sees every later state change.
    pub fn subscribe(
        &self,
        key: &str,
        fetcher: Arc<dyn Fetcher<T, E>>,
    ) -> QuerySubscription<T, E> {
        let mut entries = self.entries.lock();
        let entry = entries.entry(key.to_string()).or_insert_with(|| {
            tracing::debug!(key, "Registering query");
            let (state, _) = watch::channel(QueryResult::default());
            Entry {
                fetcher,
                state: Arc::new(state),
                invalidated: false,
            }
        });

        let should_fetch = entry.invalidated
            || entry
                .state
                .borrow()
                .is_stale_at(Instant::now(), self.config.stale_time);
        if should_fetch {
            self.start_cycle(key, entry);
        }

        QuerySubscription {
            receiver: entry.state.subscribe(),
        }
    }

    /// Force a new fetch cycle for `key` and wait for it to finish.
    ///
    /// Joins the in-flight cycle instead when there is one. Cached data
    /// stays in place until the cycle resolves. Returns the snapshot taken
    /// right after the cycle finished, whether it succeeded or not.
    pub async fn refetch(&self, key: &str) -> Result<QueryResult<T, E>, QueryError> {
        let mut receiver = {
            let mut entries = self.entries.lock();
            let entry = entries.get_mut(key).ok_or_else(|| QueryError::UnknownKey {
                key: key.to_string(),
            })?;
            if !self.start_cycle(key, entry) {
                tracing::debug!(key, "Joining in-flight fetch");
            }
            entry.state.subscribe()
        };

        let result = receiver
            .wait_for(|state| !state.is_fetching)
            .await
            .map_err(|_| QueryError::Closed {
                key: key.to_string(),
            })?;
        Ok(result.clone())
    }

    /// Current state of `key`, if registered.
    pub fn snapshot(&self, key: &str) -> Option<QueryResult<T, E>> {
        self.entries
            .lock()
            .get(key)
            .map(|entry| entry.state.borrow().clone())
    }

    /// Whether `key` would be refetched by the next subscriber.
    pub fn is_stale(&self, key: &str) -> bool {
        match self.entries.lock().get(key) {
            Some(entry) => {
                entry.invalidated
                    || entry
                        .state
                        .borrow()
                        .is_stale_at(Instant::now(), self.config.stale_time)
            }
            None => true,
        }
    }

    /// Mark cached data of `key` as stale. Returns false for unknown keys.
    pub fn invalidate(&self, key: &str) -> bool {
        match self.entries.lock().get_mut(key) {
            Some(entry) => {
                entry.invalidated = true;
                true
            }
            None => false,
        }
    }

    /// Start a cycle unless one is in flight. Returns whether one started.
    fn start_cycle(&self, key: &str, entry: &mut Entry<T, E>) -> bool {
        let started = entry.state.send_if_modified(|state| {
            if state.is_fetching {
                return false;
            }
            state.is_fetching = true;
            state.failure_count = 0;
            if state.data.is_none() {
                state.is_loading = true;
                state.error = None;
            }
            true
        });

        if started {
            entry.invalidated = false;
            tokio::spawn(run_cycle(
                key.to_string(),
                Arc::clone(&entry.fetcher),
                Arc::clone(&entry.state),
                self.config.retry_policy(),
            ));
        }
        started
    }
}

impl<T, E> Default for QueryCache<T, E>
where
    T: Send + Sync + 'static,
    E: fmt::Display + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(QueryConfig::default())
    }
}

/// One fetch cycle: attempts serialized, each retry after its backoff.
async fn run_cycle<T, E>(
    key: String,
    fetcher: Arc<dyn Fetcher<T, E>>,
    state: Arc<watch::Sender<QueryResult<T, E>>>,
    policy: RetryPolicy,
) where
    T: Send + Sync + 'static,
    E: fmt::Display + Send + Sync + 'static,
{
    let mut failures = 0u32;
    loop {
        tracing::debug!(key = %key, attempt = failures + 1, "Fetch attempt");
        match fetcher.fetch().await {
            Ok(value) => {
                let data = Arc::new(value);
                state.send_modify(|s| {
                    s.data = Some(data);
                    s.error = None;
                    s.is_loading = false;
                    s.is_fetching = false;
                    s.failure_count = 0;
                    s.data_updated_at = Some(Instant::now());
                });
                tracing::info!(key = %key, "Query resolved");
                return;
            }
            Err(err) => {
                failures += 1;
                if policy.should_retry(failures) {
                    let delay = policy.delay_for(failures);
                    tracing::warn!(
                        key = %key,
                        failures,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Fetch failed, retrying"
                    );
                    drop(err);
                    state.send_modify(|s| s.failure_count = failures);
                    tokio::time::sleep(delay).await;
                    continue;
                }

                tracing::warn!(key = %key, failures, error = %err, "Fetch failed, giving up");
                let error = Arc::new(err);
                state.send_modify(|s| {
                    s.error = Some(error);
                    s.is_loading = false;
                    s.is_fetching = false;
                    s.failure_count = failures;
                });
                return;
            }
        }
    }
}

/// Observer handle returned by [`QueryCache::subscribe`].
pub struct QuerySubscription<T, E> {
    receiver: watch::Receiver<QueryResult<T, E>>,
}

impl<T, E> QuerySubscription<T, E> {
    /// Latest state, without waiting.
    pub fn current(&self) -> QueryResult<T, E> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next state change. `None` once the cache is gone.
    pub async fn changed(&mut self) -> Option<QueryResult<T, E>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
