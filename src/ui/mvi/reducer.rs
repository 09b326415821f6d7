use super::intent::Intent;
use super::state::UiState;

/// The only place local UI state transitions happen.
///
/// `reduce` must be pure: timers, fetches and notifications belong to the
/// caller that dispatches the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
