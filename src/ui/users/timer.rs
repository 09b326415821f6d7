use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Owns at most one pending deferred task.
///
/// Installing a new task aborts the one it replaces; dropping the timer
/// aborts whatever is still pending.
#[derive(Default)]
pub struct ScopedTimer {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl ScopedTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, handle: JoinHandle<()>) {
        if let Some(previous) = self.handle.lock().replace(handle) {
            previous.abort();
        }
    }

    pub fn cancel(&self) {
        if let Some(previous) = self.handle.lock().take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.get_mut().take() {
            handle.abort();
        }
    }
}
