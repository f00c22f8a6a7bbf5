//! Software Apps Gallery
//!
//! Scrolling gallery of the applications the owner works with.

use leptos::prelude::*;
use leptos_carousel::{Carousel, CarouselConfig};
use leptos_remote_resource::create_remote_resource;

use crate::api;
use crate::components::ResourceView;
use crate::models::SoftwareApp;

/// A second, reversed track appears above this many items
const REVERSE_TRACK_THRESHOLD: usize = 5;

#[component]
pub fn Apps() -> impl IntoView {
    let apps = create_remote_resource(|| (), |_| async { api::list_apps().await });

    view! {
        <section class="apps-section">
            <h1>"MY APPS"</h1>
            <ResourceView resource=apps label="apps" render=|apps: Vec<SoftwareApp>| {
                let reversed: Vec<SoftwareApp> = apps.iter().rev().cloned().collect();
                let second_track = apps.len() > REVERSE_TRACK_THRESHOLD;
                view! {
                    <Carousel items=apps config=CarouselConfig::new(25.0) render=app_card/>
                    {second_track.then(|| view! {
                        <Carousel
                            items=reversed
                            config=CarouselConfig::new(30.0).reversed()
                            render=app_card
                        />
                    })}
                }
            }/>
        </section>
    }
}

fn app_card(app: &SoftwareApp) -> impl IntoView {
    view! {
        <div class="gallery-card">
            <img src=app.svg.clone() alt=app.name.clone()/>
            <p>{app.name.clone()}</p>
        </div>
    }
}
