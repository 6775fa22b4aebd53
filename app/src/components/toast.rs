//! Transient notifications for failed fetches and other user-facing errors.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Info,
    /// Stays a little longer.
    Error,
}

impl ToastSeverity {
    fn duration_ms(self) -> u32 {
        match self {
            ToastSeverity::Info => 3000,
            ToastSeverity::Error => 5000,
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
}

/// Access via `use_toast()` from any component.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(vec![]),
            next_id: Signal::new(0),
        }
    }

    /// Show `message`; it dismisses itself after the severity's duration.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= MAX_TOASTS {
                toasts.remove(0);
            }
            toasts.push(Toast {
                id,
                message: message.into(),
                severity,
            });
        }

        let mut toasts_signal = self.toasts;
        spawn(async move {
            TimeoutFuture::new(severity.duration_ms()).await;
            let _ = toasts_signal.try_write().map(|mut t| t.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Call once in the root component before any children that use toasts.
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-container",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        ToastSeverity::Info => "toast",
                        ToastSeverity::Error => "toast toast-error",
                    },
                    role: "status",
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        aria_label: "×",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
