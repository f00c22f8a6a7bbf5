//! Home Page
//!
//! Composes the portfolio sections in display order.

use leptos::prelude::*;

use crate::components::{About, Apps, Contact, Portfolio, Skills};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <About/>
            <Skills/>
            <Portfolio/>
            <Apps/>
            <Contact/>
        </div>
    }
}
