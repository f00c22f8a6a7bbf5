//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toast lifetime before auto-dismiss
const TOAST_DISMISS_MS: u32 = 5000;

/// Toast flavor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One visible notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    /// Sequence number; a late auto-dismiss must not clear a newer toast
    pub seq: u32,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently visible toast - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Currently visible toast - write
    set_toast: WriteSignal<Option<Toast>>,
    /// Latest toast sequence number - read
    toast_seq: ReadSignal<u32>,
    /// Latest toast sequence number - write
    set_toast_seq: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
        toast_seq: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            toast: toast.0,
            set_toast: toast.1,
            toast_seq: toast_seq.0,
            set_toast_seq: toast_seq.1,
        }
    }

    pub fn notify_success(&self, text: impl Into<String>) {
        self.notify(ToastKind::Success, text.into());
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.notify(ToastKind::Error, text.into());
    }

    /// Clear the visible toast
    pub fn dismiss(&self) {
        self.set_toast.set(None);
    }

    fn notify(&self, kind: ToastKind, text: String) {
        let seq = self.toast_seq.get_untracked() + 1;
        self.set_toast_seq.set(seq);
        self.set_toast.set(Some(Toast { kind, text, seq }));

        // Auto-dismiss, unless a newer toast replaced this one meanwhile
        let toast = self.toast;
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            match toast.try_get_untracked() {
                Some(Some(current)) if current.seq == seq => {
                    set_toast.try_set(None);
                }
                _ => {}
            }
        });
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
