//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use catalog_sync::{ApiConfig, Notifications, Resource};

use crate::api::{self, Client};

/// App-wide config and notification queue
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ApiConfig>,
    /// Visible success/error notices
    pub notices: RwSignal<Notifications>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            notices: RwSignal::new(Notifications::new()),
        }
    }

    /// Fresh client for one resource collection
    pub fn client<R: Resource>(&self) -> Client<R> {
        self.config.with_value(api::client::<R>)
    }

    pub fn notice_ttl_ms(&self) -> u32 {
        self.config.with_value(|c| c.notice_ttl_ms)
    }

    /// Runs `f` against the notification queue. `None` once the app is gone.
    pub fn notify<T>(&self, f: impl FnOnce(&mut Notifications) -> T) -> Option<T> {
        self.notices.try_update(f)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
