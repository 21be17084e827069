//! Landing page pointing at the users console.

use crate::{app_lib::theme::Theme, components::AppShell};
use leptos::prelude::*;
use leptos_router::components::A;
use users_client::routes::USERS;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-xl mx-auto">
                <div class=format!("{} p-8 space-y-4 text-center", Theme::CARD)>
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Welcome to Userdesk"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Browse, create, edit, and remove user records."
                    </p>
                    <A href={USERS} {..} class=Theme::BUTTON_PRIMARY>
                        "Go to User Management"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
