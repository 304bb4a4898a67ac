//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use food_api::ApiClient;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// REST client; browser fetch handles are not `Send`, so it lives in local storage
    api: StoredValue<ApiClient, LocalStorage>,
}

impl AppContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: StoredValue::new_local(api),
        }
    }

    /// Handle for one request; clones share the underlying connection pool
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }
}

/// Get the app context, which `App` always provides
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
