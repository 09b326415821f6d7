//! Single-screen user directory.
//!
//! Fetches a list of users from a REST endpoint through an in-memory
//! [`query::QueryCache`] and derives one [`ui::users::RenderMode`] from the
//! query result plus two local UI flags. Two presentation adapters consume
//! that render mode: an interactive terminal UI and a plain text writer.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod ui;
