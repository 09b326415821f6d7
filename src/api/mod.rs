//! HTTP boundary: the users fetch function handed to the query cache.

mod client;
mod error;

pub use client::UsersClient;
pub use error::FetchError;
