//! View-state controller for the user list.
//!
//! Owns the local flags, follows the `"users"` query in the injected
//! [`QueryCache`], and notifies listeners whenever the derived
//! [`RenderMode`] changes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::api::FetchError;
use crate::model::User;
use crate::query::{Fetcher, QueryCache, QueryResult};
use crate::ui::copy;
use crate::ui::mvi::Reducer;
use crate::ui::users::intent::UserListIntent;
use crate::ui::users::reducer::UserListReducer;
use crate::ui::users::render_mode::{derive_render_mode, RenderMode};
use crate::ui::users::state::UserListState;
use crate::ui::users::timer::ScopedTimer;

/// Cache key of the users query.
pub const USERS_QUERY_KEY: &str = "users";

pub type UsersQueryCache = QueryCache<Vec<User>, FetchError>;
pub type UsersQueryResult = QueryResult<Vec<User>, FetchError>;

type Listener = Arc<dyn Fn(&RenderMode) + Send + Sync>;

/// Handle for [`UserListController::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Cheap to clone; all clones drive the same screen.
///
/// Methods that touch the query (`mount`, `refresh`) spawn tasks and must
/// run inside a Tokio runtime.
#[derive(Clone)]
pub struct UserListController {
    inner: Arc<Inner>,
}

struct Inner {
    cache: Arc<UsersQueryCache>,
    fetcher: Arc<dyn Fetcher<Vec<User>, FetchError>>,
    banner_delay: Duration,
    state: Mutex<ViewState>,
    /// Serializes mode computation with listener delivery so listeners
    /// observe modes in the order they were derived.
    notify_lock: Mutex<()>,
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_listener: AtomicU64,
    banner_timer: ScopedTimer,
    /// Held across the generation bump and the timer swap of one refresh.
    banner_lock: Mutex<()>,
    watcher: Mutex<Option<JoinHandle<()>>>,
}

struct ViewState {
    local: UserListState,
    query: UsersQueryResult,
    mode: RenderMode,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(watcher) = self.watcher.get_mut().take() {
            watcher.abort();
        }
    }
}

impl UserListController {
    pub fn new(
        cache: Arc<UsersQueryCache>,
        fetcher: Arc<dyn Fetcher<Vec<User>, FetchError>>,
        banner_delay: Duration,
    ) -> Self {
        let local = UserListState::default();
        let query = UsersQueryResult::default();
        let mode = derive_render_mode(&query, &local);
        Self {
            inner: Arc::new(Inner {
                cache,
                fetcher,
                banner_delay,
                state: Mutex::new(ViewState { local, query, mode }),
                notify_lock: Mutex::new(()),
                listeners: Mutex::new(Vec::new()),
                next_listener: AtomicU64::new(0),
                banner_timer: ScopedTimer::new(),
                banner_lock: Mutex::new(()),
                watcher: Mutex::new(None),
            }),
        }
    }

    /// Subscribe to the users query and start following it. Idempotent.
    pub fn mount(&self) {
        let mut watcher = self.inner.watcher.lock();
        if watcher.is_some() {
            return;
        }

        let mut subscription = self
            .inner
            .cache
            .subscribe(USERS_QUERY_KEY, Arc::clone(&self.inner.fetcher));
        let weak = Arc::downgrade(&self.inner);
        *watcher = Some(tokio::spawn(async move {
            while subscription.changed().await.is_some() {
                let Some(controller) = Self::upgrade(&weak) else {
                    break;
                };
                controller.sync_query();
            }
        }));
        drop(watcher);

        tracing::debug!("User list mounted");
        self.sync_query();
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.watcher.lock().is_some()
    }

    /// Clear the simulated error, refetch, then show the success banner.
    ///
    /// The banner is raised once the refetch finishes whatever its outcome,
    /// and hidden again after the banner delay. A later refresh replaces
    /// the pending hide.
    pub async fn refresh(&self) {
        self.mount();
        self.dispatch(UserListIntent::RefreshRequested);

        tracing::info!("Refreshing users");
        if let Err(err) = self.inner.cache.refetch(USERS_QUERY_KEY).await {
            tracing::error!(error = %err, "Refetch did not run");
        }
        self.sync_query();

        // Concurrent refreshes must install their timers in generation
        // order, or an older timer replaces the only one that can match.
        let _banner = self.inner.banner_lock.lock();
        let local = self.dispatch(UserListIntent::RefreshCompleted);
        self.schedule_banner_reset(local.banner_generation);
    }

    pub fn simulate_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(message = %message, "Simulating error");
        self.dispatch(UserListIntent::SimulateError { message });
    }

    /// Simulate an error with the stock test message.
    pub fn simulate_default_error(&self) {
        self.simulate_error(copy::SIMULATED_ERROR_MESSAGE);
    }

    /// Back to whatever the query says. Never refetches.
    pub fn dismiss_simulated_error(&self) {
        self.dispatch(UserListIntent::DismissSimulatedError);
    }

    pub fn render_mode(&self) -> RenderMode {
        self.inner.state.lock().mode.clone()
    }

    pub fn local_state(&self) -> UserListState {
        self.inner.state.lock().local.clone()
    }

    pub fn query_result(&self) -> UsersQueryResult {
        self.inner.state.lock().query.clone()
    }

    pub fn banner_reset_pending(&self) -> bool {
        self.inner.banner_timer.is_pending()
    }

    /// Register a listener called with every new render mode.
    ///
    /// Listeners run on whichever task changed the state. They may read the
    /// controller but must not call its mutating methods synchronously.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&RenderMode) + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_listener.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn upgrade(weak: &Weak<Inner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn dispatch(&self, intent: UserListIntent) -> UserListState {
        let mut reduced = UserListState::default();
        self.update(|state| {
            state.local = UserListReducer::reduce(std::mem::take(&mut state.local), intent);
            reduced = state.local.clone();
        });
        reduced
    }

    fn sync_query(&self) {
        let cache = Arc::clone(&self.inner.cache);
        self.update(|state| {
            if let Some(query) = cache.snapshot(USERS_QUERY_KEY) {
                state.query = query;
            }
        });
    }

    fn update<F: FnOnce(&mut ViewState)>(&self, apply: F) {
        let _ordered = self.inner.notify_lock.lock();
        let changed = {
            let mut state = self.inner.state.lock();
            apply(&mut state);
            let mode = derive_render_mode(&state.query, &state.local);
            if mode == state.mode {
                None
            } else {
                tracing::debug!(from = state.mode.name(), to = mode.name(), "Render mode changed");
                state.mode = mode.clone();
                Some(mode)
            }
        };

        if let Some(mode) = changed {
            let listeners: Vec<Listener> = self
                .inner
                .listeners
                .lock()
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            for listener in listeners {
                listener(&mode);
            }
        }
    }

    fn schedule_banner_reset(&self, generation: u64) {
        let weak = Arc::downgrade(&self.inner);
        let delay = self.inner.banner_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(controller) = Self::upgrade(&weak) {
                controller.dispatch(UserListIntent::HideSuccessBanner { generation });
            }
        });
        self.inner.banner_timer.replace(handle);
    }
}
