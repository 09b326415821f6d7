//! Configuration loaded once at startup.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiSettings, Config, QuerySettings, UiSettings};
