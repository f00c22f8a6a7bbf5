//! Skills Gallery
//!
//! Scrolling gallery of skill cards fetched from the backend.

use leptos::prelude::*;
use leptos_carousel::{Carousel, CarouselConfig};
use leptos_remote_resource::create_remote_resource;

use crate::api;
use crate::components::ResourceView;
use crate::models::Skill;

/// A second, reversed track appears above this many items
const REVERSE_TRACK_THRESHOLD: usize = 5;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = create_remote_resource(|| (), |_| async { api::list_skills().await });

    view! {
        <section class="skills-section">
            <h1>"SKILLS"</h1>
            <ResourceView resource=skills label="skills" render=|skills: Vec<Skill>| {
                let reversed: Vec<Skill> = skills.iter().rev().cloned().collect();
                let second_track = skills.len() > REVERSE_TRACK_THRESHOLD;
                view! {
                    <Carousel items=skills config=CarouselConfig::new(25.0) render=skill_card/>
                    {second_track.then(|| view! {
                        <Carousel
                            items=reversed
                            config=CarouselConfig::new(30.0).reversed()
                            render=skill_card
                        />
                    })}
                }
            }/>
        </section>
    }
}

fn skill_card(skill: &Skill) -> impl IntoView {
    view! {
        <div class="gallery-card">
            <img src=skill.svg.clone() alt=skill.title.clone()/>
            <p>{skill.title.clone()}</p>
        </div>
    }
}
