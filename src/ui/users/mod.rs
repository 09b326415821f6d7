//! The user list screen: local flags, render-mode derivation and the
//! controller that ties them to the query cache.

mod controller;
mod intent;
mod reducer;
mod render_mode;
mod state;
mod timer;

pub use controller::{
    ListenerId, UserListController, UsersQueryCache, UsersQueryResult, USERS_QUERY_KEY,
};
pub use intent::UserListIntent;
pub use reducer::UserListReducer;
pub use render_mode::{derive_render_mode, RenderAction, RenderMode};
pub use state::UserListState;
pub use timer::ScopedTimer;
