use async_trait::async_trait;

/// Source of data for one query key.
///
/// Implementations must be re-entrant: the cache may call `fetch` again
/// for a retry or a later refetch, but never concurrently for the same key.
#[async_trait]
pub trait Fetcher<T, E>: Send + Sync {
    async fn fetch(&self) -> Result<T, E>;
}
