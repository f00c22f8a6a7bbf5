//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_remote_resource::FetchState;
use reactive_stores::Store;

use crate::api;
use crate::models::Profile;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Owner profile, fetched once per page load and shared by the About
    /// section and the footer
    pub profile: FetchState<Profile>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Fetch the profile into the store. Idempotent: a second call while a
/// fetch is running or after one finished is a no-op, so every subscriber
/// shares the single page-load fetch.
pub fn store_load_profile(store: AppStore) {
    if !matches!(store.profile().get_untracked(), FetchState::Idle) {
        return;
    }
    store.profile().set(FetchState::Loading);
    spawn_local(async move {
        let next = match api::get_profile().await {
            Ok(profile) => FetchState::Success(profile),
            Err(message) => {
                web_sys::console::error_1(
                    &format!("[Store] Error loading profile: {}", message).into(),
                );
                FetchState::Error(message)
            }
        };
        store.profile().set(next);
    });
}
