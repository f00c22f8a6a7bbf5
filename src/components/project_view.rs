//! Project Page
//!
//! Detail view for one project. The resource is keyed by the route id, so
//! navigating between projects refetches without remounting the page.

use leptos::prelude::*;
use leptos_remote_resource::{create_remote_resource, FetchState};

use crate::api;
use crate::context::use_app_context;
use crate::models::Project;
use crate::routes::{navigate, Route};

#[component]
pub fn ProjectView(id: Signal<String>) -> impl IntoView {
    let ctx = use_app_context();
    let project = create_remote_resource(
        move || id.get(),
        |id: String| async move { api::get_project(&id).await },
    );

    // Toast each failed load once, not on every rerender of the error
    Effect::new(move |prev: Option<Option<String>>| {
        let message = project
            .state
            .with(|state| state.error_detail().map(str::to_string));
        if let Some(text) = &message {
            if prev.flatten().as_deref() != Some(text) {
                ctx.notify_error(text.clone());
            }
        }
        message
    });

    view! {
        <div class="project-page">
            {move || match project.get() {
                FetchState::Idle | FetchState::Loading => view! {
                    <div class="loading-spinner"></div>
                }
                    .into_any(),
                FetchState::Error(_) => view! {
                    <div class="project-error">
                        <p>"Failed to load project details"</p>
                        <button on:click=move |_| navigate(&Route::Home)>
                            "Return to Portfolio"
                        </button>
                    </div>
                }
                    .into_any(),
                FetchState::Success(project) => project_detail(project).into_any(),
            }}
        </div>
    }
}

fn project_detail(project: Project) -> impl IntoView {
    let image = project
        .image
        .clone()
        .unwrap_or_else(|| "/avatarHolder.jpg".to_string());
    let live_url = project
        .deployed
        .is_live()
        .then(|| project.project_url.clone())
        .flatten();

    view! {
        <div class="project-detail">
            <div class="project-detail-head">
                <button on:click=move |_| navigate(&Route::Home)>"Back to Portfolio"</button>
                <span class=project.deployed.badge_class()>
                    {project.deployed.status_label()}
                </span>
            </div>

            <h1>{project.title.clone()}</h1>
            <img class="project-banner" src=image alt=project.title.clone()/>

            <div class="project-detail-grid">
                <div>
                    <h2>"About this project"</h2>
                    <p>{project.description.clone()}</p>
                </div>

                <div>
                    <h3>"Project Details"</h3>
                    <div class="project-facts">
                        <div>
                            <h4>"STATUS"</h4>
                            <p>{project.deployed.label()}</p>
                        </div>
                        <div>
                            <h4>"TECH STACK"</h4>
                            <p>{project.stack.clone()}</p>
                        </div>
                    </div>

                    <h3>"Project Links"</h3>
                    <div class="project-links">
                        {project.git_repo_url.clone().map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                "View Source Code"
                            </a>
                        })}
                        {live_url.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                "View Live Project"
                            </a>
                        })}
                    </div>

                    <button class="back-button" on:click=move |_| navigate(&Route::Home)>
                        "Back to All Projects"
                    </button>
                </div>
            </div>
        </div>
    }
}
