//! Transient notifications. The provider sits above the router so a toast raised
//! just before navigating stays visible on the next page.

use super::alert::{Alert, AlertKind};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use users_client::Notification;

/// How long a toast stays up.
const TOAST_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct Toasts {
    current: RwSignal<Option<(u64, Notification)>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    /// Replaces the visible toast and schedules its dismissal.
    pub fn push(&self, notification: Notification) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.current.set(Some((id, notification)));

        let current = self.current;
        Timeout::new(TOAST_MS, move || {
            // A newer toast owns the slot; leave it alone.
            let _ = current.try_update(|slot| {
                if slot.as_ref().is_some_and(|(shown, _)| *shown == id) {
                    *slot = None;
                }
            });
        })
        .forget();
    }

    pub fn maybe_push(&self, notification: Option<Notification>) {
        if let Some(notification) = notification {
            self.push(notification);
        }
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

/// Provides the toast context and renders the active toast.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        {children()}
        <div class="fixed top-4 right-4 z-50 w-80 max-w-full" aria-live="assertive">
            {move || {
                toasts
                    .current
                    .get()
                    .map(|(_, notification)| {
                        view! {
                            <Alert
                                kind=AlertKind::from(notification.kind)
                                message=notification.message
                            >
                                <button
                                    type="button"
                                    class="font-semibold opacity-70 hover:opacity-100"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.dismiss()
                                >
                                    "×"
                                </button>
                            </Alert>
                        }
                    })
            }}
        </div>
    }
}

/// Returns the toast context, or a detached one outside the provider.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(Toasts::new)
}
