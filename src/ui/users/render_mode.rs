use std::fmt;
use std::sync::Arc;

use crate::model::User;
use crate::query::QueryResult;
use crate::ui::users::state::UserListState;

/// What the screen shows. Exactly one mode holds at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderMode {
    /// Synthetic error from "Testar Erro". Masks everything else.
    SimulatedError { message: String },
    /// The last fetch cycle failed.
    RealError { message: String },
    /// First fetch in flight, nothing cached yet.
    Loading,
    /// Fetch resolved with no users.
    Empty,
    Success {
        users: Arc<Vec<User>>,
        show_success_banner: bool,
        /// A background refetch is running over the cached list.
        is_refreshing: bool,
    },
}

/// User actions a render mode offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderAction {
    Refresh,
    SimulateError,
    DismissSimulatedError,
}

impl RenderMode {
    pub fn actions(&self) -> &'static [RenderAction] {
        match self {
            RenderMode::SimulatedError { .. } => &[RenderAction::DismissSimulatedError],
            RenderMode::RealError { .. } => &[RenderAction::Refresh],
            RenderMode::Loading | RenderMode::Empty => &[],
            RenderMode::Success { .. } => &[RenderAction::SimulateError, RenderAction::Refresh],
        }
    }

    pub fn allows(&self, action: RenderAction) -> bool {
        self.actions().contains(&action)
    }

    /// Any mode but `Loading`.
    pub fn is_settled(&self) -> bool {
        !matches!(self, RenderMode::Loading)
    }

    pub fn users(&self) -> &[User] {
        match self {
            RenderMode::Success { users, .. } => users.as_slice(),
            _ => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::SimulatedError { .. } => "simulated_error",
            RenderMode::RealError { .. } => "real_error",
            RenderMode::Loading => "loading",
            RenderMode::Empty => "empty",
            RenderMode::Success { .. } => "success",
        }
    }
}

/// Map query state plus local flags to a render mode. First match wins:
/// simulated error, real error, loading, empty, success.
pub fn derive_render_mode<E: fmt::Display>(
    query: &QueryResult<Vec<User>, E>,
    local: &UserListState,
) -> RenderMode {
    if let Some(message) = local.active_simulated_error() {
        return RenderMode::SimulatedError {
            message: message.to_string(),
        };
    }

    if let Some(error) = &query.error {
        return RenderMode::RealError {
            message: error.to_string(),
        };
    }

    if query.is_loading {
        return RenderMode::Loading;
    }

    match &query.data {
        Some(users) if !users.is_empty() => RenderMode::Success {
            users: Arc::clone(users),
            show_success_banner: local.show_success_message,
            is_refreshing: query.is_fetching,
        },
        _ => RenderMode::Empty,
    }
}
