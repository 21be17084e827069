//! Users table with single-row selection and New / Edit / Delete actions.

use crate::{
    app_lib::{theme::Theme, users_api},
    components::{AppShell, Button, ButtonKind, Spinner},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use users_client::{views::COLUMNS, Action, ListView, Route, User, UsersApi};

/// Renders the users list and fetches it on mount.
#[component]
pub fn UsersListPage() -> impl IntoView {
    let list = RwSignal::new(ListView::new());
    let target = RwSignal::new(None::<Route>);

    list.update(ListView::begin_load);
    spawn_local(async move {
        let result = match users_api() {
            Ok(api) => api.list_users().await,
            Err(err) => Err(err),
        };
        let _ = list.try_update(|view| view.finish_load(result));
    });

    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(route) = target.get() {
            navigate(&route.to_path(), Default::default());
        }
    });

    let go = move |action: Action| {
        if let Some(route) = list.with_untracked(|view| view.navigate(action)) {
            target.set(Some(route));
        }
    };
    let disabled =
        move |action: Action| Signal::derive(move || !list.with(|view| view.is_enabled(action)));

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "User Management"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Select a row to edit or delete it."
                        </p>
                    </div>
                    <div class="flex gap-2">
                        <Button {..} on:click=move |_| go(Action::New)>
                            "New"
                        </Button>
                        <Button kind=ButtonKind::Secondary disabled={disabled(Action::Edit)} {..} on:click=move |_| go(Action::Edit)>
                            "Edit"
                        </Button>
                        <Button kind=ButtonKind::Danger disabled={disabled(Action::Delete)} {..} on:click=move |_| go(Action::Delete)>
                            "Delete"
                        </Button>
                    </div>
                </div>

                <div class=Theme::CARD>
                    <Show
                        when=move || !list.with(ListView::is_loading)
                        fallback=|| view! { <div class="px-6 py-12"><Spinner label="Loading users" /></div> }
                    >
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                <tr>
                                    {COLUMNS
                                        .iter()
                                        .map(|column| view! { <th scope="col" class=Theme::TABLE_HEADER>{*column}</th> })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                <Show
                                    when=move || list.with(|view| !view.users().is_empty())
                                    fallback=|| view! {
                                        <tr>
                                            <td colspan=COLUMNS.len().to_string() class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No users found."
                                            </td>
                                        </tr>
                                    }
                                >
                                    <For
                                        each=move || list.with(|view| view.users().to_vec())
                                        key=|user| user.id
                                        children=move |user| view! { <UserRow user=user list=list /> }
                                    />
                                </Show>
                            </tbody>
                        </table>
                    </Show>
                </div>
            </div>
        </AppShell>
    }
}

#[component]
fn UserRow(user: User, list: RwSignal<ListView>) -> impl IntoView {
    let id = user.id;
    let selected = move || list.with(|view| view.is_selected(id));

    view! {
        <tr
            class=move || {
                if selected() {
                    format!("{} {}", Theme::ROW, Theme::ROW_SELECTED)
                } else {
                    Theme::ROW.to_string()
                }
            }
            aria-selected=move || selected().to_string()
            on:click=move |_| list.update(|view| view.toggle_select(id))
        >
            <td class=Theme::CELL>{user.id}</td>
            <td class=Theme::CELL>{user.name}</td>
            <td class=Theme::CELL>{user.email}</td>
        </tr>
    }
}
