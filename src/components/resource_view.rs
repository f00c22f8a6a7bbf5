//! Resource View Component
//!
//! Shared rendering contract for list resources: spinner while pending,
//! error banner with a retry, informational copy for an empty result,
//! and the caller's view for data.

use leptos::prelude::*;
use leptos_remote_resource::{FetchState, RemoteResource};

/// Renders one list resource through its whole lifecycle. `label` is the
/// plural noun for the error and empty-state copy ("skills", "projects").
#[component]
pub fn ResourceView<T, IV, R>(
    resource: RemoteResource<Vec<T>>,
    label: &'static str,
    render: R,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
    R: Fn(Vec<T>) -> IV + Send + Sync + 'static,
{
    view! {
        {move || match resource.get() {
            FetchState::Idle | FetchState::Loading => view! {
                <div class="loading-spinner"></div>
            }
                .into_any(),
            FetchState::Error(message) => view! {
                <div class="resource-error">
                    <p>{format!("Failed to load {}", label)}</p>
                    <p class="resource-error-detail">{message}</p>
                    <button on:click=move |_| resource.refetch()>"Try Again"</button>
                </div>
            }
                .into_any(),
            // An empty result is a valid answer, not a failure.
            FetchState::Success(items) if items.is_empty() => view! {
                <p class="resource-empty">{format!("No {} found", label)}</p>
            }
                .into_any(),
            FetchState::Success(items) => render(items).into_any(),
        }}
    }
}
