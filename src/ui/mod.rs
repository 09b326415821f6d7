//! View layer: the user list controller and its two presentation adapters.

pub mod app;
pub mod copy;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod presenter;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod text;
pub mod theme;
pub mod users;

pub use presenter::Presenter;
