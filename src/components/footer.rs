//! Footer
//!
//! Contact and connect links from the cached profile, plus copyright.
//! Shows skeleton rows until the shared profile fetch settles; a failed
//! fetch just leaves the optional links out.

use leptos::prelude::*;
use leptos_remote_resource::FetchState;

use crate::models::Profile;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_app_store();
    let year = js_sys::Date::new_0().get_full_year();

    let owner_name = move || match store.profile().get() {
        FetchState::Success(profile) => profile.display_name().to_string(),
        _ => Profile::default().display_name().to_string(),
    };

    view! {
        <footer class="footer">
            <hr/>
            <div class="footer-grid">
                <div class="footer-contact">
                    <h3>"Contact Me"</h3>
                    {move || {
                        let state = store.profile().get();
                        if state.is_pending() {
                            return view! {
                                <div class="skeleton-row"></div>
                                <div class="skeleton-row"></div>
                            }
                                .into_any();
                        }
                        let profile = state.success().cloned().unwrap_or_default();
                        view! {
                            {profile.email.clone().map(|email| view! {
                                <a class="footer-link" href=format!("mailto:{}", email)>
                                    {email.clone()}
                                </a>
                            })}
                            {match (profile.phone.clone(), profile.tel_href()) {
                                (Some(phone), Some(href)) => view! {
                                    <a class="footer-link" href=href>{phone}</a>
                                }
                                    .into_any(),
                                _ => view! {
                                    <p class="footer-muted">"No phone number available"</p>
                                }
                                    .into_any(),
                            }}
                        }
                            .into_any()
                    }}
                </div>

                <div class="footer-connect">
                    <h3>"Connect"</h3>
                    {move || {
                        let state = store.profile().get();
                        let profile = state.success().cloned().unwrap_or_default();
                        (!state.is_pending()).then(|| view! {
                            <div class="footer-social">
                                {profile.whatsapp_url().map(|url| view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="WhatsApp"
                                    >
                                        "WhatsApp"
                                    </a>
                                })}
                                {profile.github_url.clone().map(|url| view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="GitHub"
                                    >
                                        "GitHub"
                                    </a>
                                })}
                                {profile.linkedin_url.clone().map(|url| view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="LinkedIn"
                                    >
                                        "LinkedIn"
                                    </a>
                                })}
                            </div>
                        })
                    }}
                </div>
            </div>

            <div class="footer-bottom">
                <h2>"Thanks For Scrolling"</h2>
                <p>{move || format!("© {} {}. All rights reserved.", year, owner_name())}</p>
            </div>
        </footer>
    }
}
