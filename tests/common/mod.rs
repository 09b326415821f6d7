//! Shared test utilities and fakes.

#![allow(dead_code)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use userlist::api::FetchError;
use userlist::model::{Address, User};
use userlist::query::{Fetcher, QueryCache, QueryConfig};
use userlist::ui::users::{UserListController, UsersQueryCache};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

// -- Fixtures -----------------------------------------------------------------

pub fn user(id: u64, name: &str, email: &str, city: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: None,
        email: email.to_string(),
        address: Address {
            city: city.to_string(),
            street: None,
            suite: None,
            zipcode: None,
        },
        phone: None,
        website: None,
    }
}

pub fn leanne() -> User {
    user(1, "Leanne Graham", "Sincere@april.biz", "Gwenborough")
}

pub fn ervin() -> User {
    user(2, "Ervin Howell", "Shanna@melissa.tv", "Wisokyburgh")
}

pub const LEANNE_JSON: &str = r#"[{
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz",
    "address": {"street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough", "zipcode": "92998-3874"},
    "phone": "1-770-736-8031 x56442",
    "website": "hildegard.org"
}]"#;

// -- Scripted fetcher ---------------------------------------------------------

pub const FETCH_DELAY: Duration = Duration::from_millis(100);
pub const BANNER_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
pub enum Step {
    Users(Vec<User>),
    Fail(u16),
}

/// Fetcher that replays a script of outcomes, one per call, after
/// `delay`. An exhausted script yields an empty list.
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
    delay: Duration,
}

impl ScriptedFetcher {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Self::with_delay(steps, FETCH_DELAY)
    }

    pub fn with_delay(steps: Vec<Step>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
            delay,
        })
    }

    pub fn push(&self, step: Step) {
        self.script.lock().push_back(step);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher<Vec<User>, FetchError> for ScriptedFetcher {
    async fn fetch(&self) -> Result<Vec<User>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.script.lock().pop_front();
        tokio::time::sleep(self.delay).await;
        match step {
            Some(Step::Users(users)) => Ok(users),
            Some(Step::Fail(status)) => Err(FetchError::HttpStatus { status }),
            None => Ok(Vec::new()),
        }
    }
}

/// Retry 2 with short backoff so retry chains stay well under a second.
pub fn fast_query_config() -> QueryConfig {
    QueryConfig {
        retry: 2,
        stale_time: Duration::from_secs(300),
        retry_delay_base: Duration::from_millis(10),
        retry_delay_max: Duration::from_millis(40),
    }
}

pub fn make_cache() -> Arc<UsersQueryCache> {
    Arc::new(QueryCache::new(fast_query_config()))
}

pub fn make_controller(fetcher: &Arc<ScriptedFetcher>) -> UserListController {
    let fetcher: Arc<dyn Fetcher<Vec<User>, FetchError>> = fetcher.clone();
    UserListController::new(make_cache(), fetcher, BANNER_DELAY)
}
