use thiserror::Error;

/// Errors raised by the cache itself, never by a fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// `refetch` was called for a key nobody subscribed to.
    #[error("Query '{key}' is not registered")]
    UnknownKey { key: String },

    /// The cache entry was torn down while waiting on it.
    #[error("Query '{key}' was closed")]
    Closed { key: String },
}
