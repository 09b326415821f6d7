use crate::ui::mvi::Reducer;
use crate::ui::users::intent::UserListIntent;
use crate::ui::users::state::UserListState;

pub struct UserListReducer;

impl Reducer for UserListReducer {
    type State = UserListState;
    type Intent = UserListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UserListIntent::SimulateError { message } => UserListState {
                simulated_error: Some(message),
                ..state
            },
            UserListIntent::DismissSimulatedError | UserListIntent::RefreshRequested => {
                UserListState {
                    simulated_error: None,
                    ..state
                }
            }
            // Set even when the refetch failed; RealError outranks Success
            // so the banner stays hidden behind the error view.
            UserListIntent::RefreshCompleted => UserListState {
                show_success_message: true,
                banner_generation: state.banner_generation.wrapping_add(1),
                ..state
            },
            UserListIntent::HideSuccessBanner { generation } => {
                if generation == state.banner_generation {
                    UserListState {
                        show_success_message: false,
                        ..state
                    }
                } else {
                    state
                }
            }
        }
    }
}
