//! 404 page for paths outside the route table.

use crate::{app_lib::theme::Theme, components::AppShell};
use leptos::prelude::*;
use leptos_router::components::A;
use users_client::routes::HOME;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <div class="relative">
                    <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">
                        "404"
                    </h1>
                    <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 dark:text-white whitespace-nowrap">
                        "Page not found"
                    </p>
                </div>

                <div class="mt-4 space-y-6">
                    <p class="text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                        "There is nothing at this address."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A href={HOME} {..} class=Theme::BUTTON_PRIMARY>
                            "Go Home"
                        </A>
                        <button
                            type="button"
                            class=Theme::BUTTON_SECONDARY
                            on:click=move |_| {
                                if let Ok(history) = window().history() {
                                    let _ = history.back();
                                }
                            }
                        >
                            "Go Back"
                        </button>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
