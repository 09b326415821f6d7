//! In-memory query cache.
//!
//! A [`QueryCache`] owns the lifecycle of keyed asynchronous fetches:
//!
//! ```text
//! subscribe ──→ loading ──→ success (data)
//!    │             │
//!    │             └──→ retry (backoff) ──→ … ──→ error
//!    └── refetch joins the in-flight cycle or starts a new one
//! ```
//!
//! - At most one fetch cycle is in flight per key.
//! - Failed attempts are retried up to [`QueryConfig::retry`] times.
//! - Cached data stays visible while a refetch is running.
//! - Cached data older than [`QueryConfig::stale_time`] is refetched on subscribe.

mod cache;
mod error;
mod fetcher;
mod result;
mod retry;

pub use cache::{QueryCache, QueryConfig, QuerySubscription};
pub use error::QueryError;
pub use fetcher::Fetcher;
pub use result::QueryResult;
pub use retry::RetryPolicy;
