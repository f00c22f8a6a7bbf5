//! Toast Container Component
//!
//! Bottom-right notification fed by AppContext. Click to dismiss.

use leptos::prelude::*;

use crate::context::{use_app_context, ToastKind};

#[component]
pub fn ToastContainer() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-container">
            {move || ctx.toast.get().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                };
                view! {
                    <div class=class on:click=move |_| ctx.dismiss()>
                        {toast.text.clone()}
                    </div>
                }
            })}
        </div>
    }
}
