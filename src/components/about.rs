//! About Section
//!
//! Introduction copy plus the owner's avatar from the cached profile.

use leptos::prelude::*;
use leptos_remote_resource::FetchState;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn About() -> impl IntoView {
    let store = use_app_store();

    let avatar = move || match store.profile().get() {
        FetchState::Success(profile) => profile.avatar,
        _ => None,
    };

    view! {
        <section class="about-section">
            <h1>"ABOUT " <span class="accent">"ME"</span></h1>
            <p class="section-subtitle">"Allow me to introduce myself."</p>

            <div class="about-grid">
                <div class="about-avatar">
                    {move || avatar().map(|url| view! { <img src=url alt="avatar"/> })}
                </div>
                <div class="about-copy">
                    <p>
                        "Hi, I'm Ali Tayyab, a passionate Web Developer and Freelancer with \
                         a strong foundation in Computer Science. I'm currently pursuing my \
                         degree at Bahria University, expecting to graduate in 2026. With a \
                         deep enthusiasm for technology, problem-solving, and clean code, I \
                         specialize in building scalable, efficient, and visually appealing \
                         web applications. I take pride in my ability to meet deadlines, \
                         ensuring high-quality deliverables with precision and dedication."
                    </p>
                    <p>
                        "Beyond coding, I have a keen interest in movies, series, video \
                         games, Cricket and Table Tennis. My ability to stay focused and \
                         tackle challenges head-on allows me to continuously grow and \
                         refine my skills."
                    </p>
                </div>
            </div>

            <p class="about-outro">
                "I'm always open to collaboration and new opportunities. Let's build \
                 something great together!"
            </p>
        </section>
    }
}
