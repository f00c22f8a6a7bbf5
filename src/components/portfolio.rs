//! Portfolio Section
//!
//! Featured-project carousel plus the full project grid with a
//! Show More toggle.

use leptos::prelude::*;
use leptos_carousel::{Carousel, CarouselConfig};
use leptos_remote_resource::create_remote_resource;

use crate::api;
use crate::components::ResourceView;
use crate::models::{featured_projects, Project};
use crate::routes::Route;

/// Grid cards shown before Show More
const GRID_CAP: usize = 9;

#[component]
pub fn Portfolio() -> impl IntoView {
    let projects = create_remote_resource(|| (), |_| async { api::list_projects().await });
    let (view_all, set_view_all) = signal(false);

    view! {
        <section class="portfolio-section">
            <h1>"MY " <span class="accent">"PROJECTS"</span></h1>
            <ResourceView resource=projects label="projects" render=move |projects: Vec<Project>| {
                let featured = featured_projects(&projects);
                let total = projects.len();
                let visible = move || -> Vec<Project> {
                    if view_all.get() {
                        projects.clone()
                    } else {
                        projects.iter().take(GRID_CAP).cloned().collect()
                    }
                };
                view! {
                    <h2>"Featured Projects"</h2>
                    <Carousel items=featured config=CarouselConfig::new(25.0) render=project_card/>
                    <p class="carousel-hint">"← Scroll horizontally to explore more →"</p>

                    <h2>"All Projects"</h2>
                    <div class="project-grid">
                        <For
                            each=visible
                            key=|project| project.id.clone()
                            children=grid_card
                        />
                    </div>

                    {(total > GRID_CAP).then(|| view! {
                        <div class="view-toggle-row">
                            <button on:click=move |_| set_view_all.update(|v| *v = !*v)>
                                {move || if view_all.get() { "Show Less" } else { "Show More" }}
                            </button>
                        </div>
                    })}
                }
            }/>
        </section>
    }
}

/// Compact card for the featured carousel
fn project_card(project: &Project) -> impl IntoView {
    let href = Route::Project(project.id.clone()).to_hash();
    view! {
        <a class="gallery-card project-card" href=href>
            <img src=project.image.clone().unwrap_or_default() alt=project.title.clone()/>
            <div class="project-card-body">
                <h3>{project.title.clone()}</h3>
                <span class=project.deployed.badge_class()>{project.deployed.label()}</span>
                <p class="project-stack">{project.stack.clone()}</p>
            </div>
        </a>
    }
}

/// Full card for the All Projects grid
fn grid_card(project: Project) -> impl IntoView {
    let href = Route::Project(project.id.clone()).to_hash();
    let live_url = project
        .deployed
        .is_live()
        .then(|| project.project_url.clone())
        .flatten();
    view! {
        <div class="project-grid-card">
            <a href=href.clone()>
                <img src=project.image.clone().unwrap_or_default() alt=project.title.clone()/>
            </a>
            <div class="project-grid-body">
                <div class="project-grid-head">
                    <h3><a href=href>{project.title.clone()}</a></h3>
                    <span class=project.deployed.badge_class()>{project.deployed.label()}</span>
                </div>
                <p class="project-stack">{project.stack.clone()}</p>
                <div class="project-links">
                    {project.git_repo_url.clone().map(|url| view! {
                        <a class="link-button" href=url target="_blank" rel="noopener noreferrer">
                            "Github"
                        </a>
                    })}
                    {live_url.map(|url| view! {
                        <a class="link-button" href=url target="_blank" rel="noopener noreferrer">
                            "Visit"
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}
