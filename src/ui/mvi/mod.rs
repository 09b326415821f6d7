//! Model-View-Intent (MVI) primitives.
//!
//! Local UI state only changes through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ RenderMode ──→ Presenter
//!    ↑                                               │
//!    └───────────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain data, cloned to produce the next state
//! - **Intent**: user actions or timer events
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
