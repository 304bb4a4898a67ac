//! Food Admin App
//!
//! Root component: wires the REST client and the dish store into context.

use leptos::prelude::*;
use reactive_stores::Store;

use food_api::{ApiClient, ApiConfig};

use crate::context::AppContext;
use crate::pages::Dashboard;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let client = ApiClient::new(ApiConfig::from_env());
    log::info!("[APP] Food service at {}", client.config().base_url);

    // Provide context to all children
    provide_context(AppContext::new(client));
    provide_context(Store::new(AppState::default()));

    view! {
        <Dashboard />
    }
}
