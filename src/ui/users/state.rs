use crate::ui::mvi::UiState;

/// Local flags layered over the query result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserListState {
    /// Synthetic error message. Masks every other render mode while set.
    pub simulated_error: Option<String>,
    /// Transient "loaded successfully" banner.
    pub show_success_message: bool,
    /// Bumped on every completed refresh so a stale banner timer can
    /// recognize it has been superseded.
    pub banner_generation: u64,
}

impl UiState for UserListState {}

impl UserListState {
    /// Synthetic error, if one is set. An empty message does not count.
    pub fn active_simulated_error(&self) -> Option<&str> {
        self.simulated_error.as_deref().filter(|msg| !msg.is_empty())
    }
}
