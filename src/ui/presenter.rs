use std::io;

use crate::ui::users::RenderMode;

/// A presentation target for render modes.
///
/// The controller is platform-agnostic; each adapter decides how a mode
/// looks. Adapters are interchangeable: anything that implements this
/// trait can follow a [`crate::ui::users::UserListController`].
pub trait Presenter {
    fn present(&mut self, mode: &RenderMode) -> io::Result<()>;
}
