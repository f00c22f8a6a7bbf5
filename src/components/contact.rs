//! Contact Section
//!
//! Controlled contact form posting to the messages endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::ContactMessage;

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_app_context();

    let (sender_name, set_sender_name) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }

        let payload = ContactMessage {
            sender_name: sender_name.get(),
            subject: subject.get(),
            message: message.get(),
        };
        if let Err(gap) = payload.validate() {
            ctx.notify_error(gap);
            return;
        }

        set_sending.set(true);
        spawn_local(async move {
            match api::send_message(&payload).await {
                Ok(ack) => {
                    ctx.notify_success(ack.message);
                    set_sender_name.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                }
                Err(error) => ctx.notify_error(error),
            }
            set_sending.set(false);
        });
    };

    view! {
        <section class="contact-section">
            <h1>"CONTACT " <span class="accent">"ME"</span></h1>

            <form class="contact-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="senderName">"Your Name"</label>
                    <input
                        id="senderName"
                        type="text"
                        placeholder="Your Name"
                        prop:value=move || sender_name.get()
                        on:input=move |ev| set_sender_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label for="subject">"Subject"</label>
                    <input
                        id="subject"
                        type="text"
                        placeholder="Subject"
                        prop:value=move || subject.get()
                        on:input=move |ev| set_subject.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        placeholder="Your Message"
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-actions">
                    <button type="submit" disabled=move || sending.get()>
                        {move || if sending.get() { "SENDING..." } else { "SEND MESSAGE" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
