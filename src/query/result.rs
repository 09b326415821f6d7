use std::fmt;
use std::sync::Arc;

use tokio::time::Instant;

/// Snapshot of one query's state.
///
/// `data` and `error` are shared so snapshots are cheap to clone and hand
/// out to every observer.
pub struct QueryResult<T, E> {
    /// Last successfully fetched value. Kept while a refetch is running.
    pub data: Option<Arc<T>>,
    /// Error of the last finished cycle, if it failed.
    pub error: Option<Arc<E>>,
    /// A cycle is in flight and there is no cached data yet.
    pub is_loading: bool,
    /// A cycle is in flight.
    pub is_fetching: bool,
    /// Failed attempts in the current (or last) cycle.
    pub failure_count: u32,
    /// When `data` was last replaced.
    pub data_updated_at: Option<Instant>,
}

impl<T, E> QueryResult<T, E> {
    pub fn is_success(&self) -> bool {
        self.data.is_some() && self.error.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// True when there is no data or it is at least `stale_time` old.
    pub fn is_stale_at(&self, now: Instant, stale_time: std::time::Duration) -> bool {
        match self.data_updated_at {
            Some(updated) if self.data.is_some() => now.duration_since(updated) >= stale_time,
            _ => true,
        }
    }
}

impl<T, E> Default for QueryResult<T, E> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
            is_fetching: false,
            failure_count: 0,
            data_updated_at: None,
        }
    }
}

impl<T, E> Clone for QueryResult<T, E> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            error: self.error.clone(),
            is_loading: self.is_loading,
            is_fetching: self.is_fetching,
            failure_count: self.failure_count,
            data_updated_at: self.data_updated_at,
        }
    }
}

impl<T, E: fmt::Display> fmt::Debug for QueryResult<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryResult")
            .field("has_data", &self.data.is_some())
            .field("error", &self.error.as_ref().map(|e| e.to_string()))
            .field("is_loading", &self.is_loading)
            .field("is_fetching", &self.is_fetching)
            .field("failure_count", &self.failure_count)
            .finish()
    }
}
