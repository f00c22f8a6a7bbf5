//! Portfolio Frontend App
//!
//! Root component: hash routing, shared profile store, toasts.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Footer, Home, ProjectView, ToastContainer};
use crate::context::{AppContext, Toast};
use crate::routes::{create_router, Route};
use crate::store::{store_load_profile, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (toast, set_toast) = signal(None::<Toast>);
    let (toast_seq, set_toast_seq) = signal(0u32);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(AppContext::new((toast, set_toast), (toast_seq, set_toast_seq)));
    provide_context(store);

    // Load the shared profile on mount
    Effect::new(move |_| {
        store_load_profile(store);
    });

    let route = create_router();
    let on_project_page = Memo::new(move |_| matches!(route.get(), Route::Project(_)));
    // Keeps the last id while leaving the page, so the unmounting project
    // view never sees a transient id change.
    let project_id = Memo::new(move |prev: Option<&String>| match route.get() {
        Route::Project(id) => id,
        Route::Home => prev.cloned().unwrap_or_default(),
    });

    view! {
        <style>{leptos_carousel::carousel_css()}</style>

        // Routed page
        <Show
            when=move || on_project_page.get()
            fallback=|| view! { <Home/> }
        >
            <ProjectView id=project_id.into()/>
        </Show>

        <Footer/>

        // Overlay
        <ToastContainer/>
    }
}
