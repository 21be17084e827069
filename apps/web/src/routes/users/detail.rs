//! Create / edit / delete form for a single user. The id comes from the path and
//! the action from the `action` query parameter.

use crate::{
    app_lib::{theme::Theme, users_api},
    components::{use_toasts, AppShell, Button, ButtonKind, Spinner},
};
use leptos::{
    ev::SubmitEvent,
    prelude::{Action as LeptosAction, *},
    task::spawn_local,
};
use leptos_router::{
    hooks::{use_navigate, use_params_map, use_query_map},
    NavigateOptions,
};
use users_client::{
    Action, ApiError, DetailParams, DetailView, MutationReceipt, Route, Submission, UsersApi,
};

/// Asks the browser to confirm a destructive submission.
fn confirm(prompt: &str) -> bool {
    window().confirm_with_message(prompt).unwrap_or(false)
}

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let toasts = use_toasts();
    let detail = RwSignal::new(DetailView::default());
    let target = RwSignal::new(None::<(Route, bool)>);
    let generation = StoredValue::new(0_u64);

    // Rebuild the form whenever the id or action changes.
    Effect::new(move |_| {
        let id = params.with(|params| params.get("id"));
        let action = query.with(|query| query.get("action"));
        let mut view = DetailView::new(DetailParams::from_parts(id.as_deref(), action.as_deref()));
        let fetch = view.begin_fetch();
        generation.update_value(|current| *current += 1);
        let started = generation.get_value();
        detail.set(view);

        if let Some(id) = fetch {
            spawn_local(async move {
                let result = match users_api() {
                    Ok(api) => api.get_user(id).await,
                    Err(err) => Err(err),
                };
                // The route moved on while the request was out.
                if generation.try_get_value() != Some(started) {
                    return;
                }
                let notification = detail
                    .try_update(|view| {
                        view.finish_fetch(id, result);
                        view.take_notification()
                    })
                    .flatten();
                toasts.maybe_push(notification);
            });
        }
    });

    let submit = LeptosAction::new_local(move |submission: &Submission| {
        let submission = submission.clone();
        async move {
            let result: Result<MutationReceipt, ApiError> = match users_api() {
                Ok(api) => submission.dispatch(&api).await,
                Err(err) => Err(err),
            };
            (submission, result)
        }
    });

    Effect::new(move |_| {
        if let Some((submission, result)) = submit.value().get() {
            let outcome = detail.try_update(|view| {
                let route = view.finish_submit(&submission, result);
                (route, view.take_notification())
            });
            if let Some((route, notification)) = outcome {
                toasts.maybe_push(notification);
                if let Some(route) = route {
                    target.set(Some((route, true)));
                }
            }
        }
    });

    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some((route, replace)) = target.get() {
            navigate(
                &route.to_path(),
                NavigateOptions {
                    replace,
                    ..Default::default()
                },
            );
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let prepared = detail.try_update(|view| {
            let prepared = view.prepare_submit(confirm);
            (prepared, view.take_notification())
        });
        if let Some((prepared, notification)) = prepared {
            toasts.maybe_push(notification);
            if let Ok(submission) = prepared {
                submit.dispatch(submission);
            }
        }
    };
    let on_cancel = move |_| {
        let route = detail.with_untracked(DetailView::cancel);
        target.set(Some((route, false)));
    };

    let busy = Signal::derive(move || detail.with(DetailView::is_submitting));
    let submit_kind = move || {
        if detail.with(DetailView::action) == Action::Delete {
            ButtonKind::Danger
        } else {
            ButtonKind::Primary
        }
    };

    view! {
        <AppShell>
            <div class=format!("{} max-w-xl mx-auto p-6 space-y-6", Theme::CARD)>
                <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                    {move || detail.with(DetailView::title)}
                </h1>
                <Show
                    when=move || !detail.with(DetailView::is_loading)
                    fallback=|| view! { <Spinner label="Loading user" /> }
                >
                    <form class="space-y-5" on:submit=on_submit>
                        <Show
                            when=move || detail.with(DetailView::is_read_only)
                            fallback=move || view! { <EditableFields detail=detail busy=busy /> }
                        >
                            <div>
                                <label for="user-id" class=Theme::LABEL>"ID"</label>
                                <input
                                    id="user-id"
                                    type="text"
                                    class=Theme::INPUT
                                    readonly=true
                                    prop:value=move || {
                                        detail
                                            .with(|view| view.draft().id)
                                            .map(|id| id.to_string())
                                            .unwrap_or_default()
                                    }
                                />
                            </div>
                        </Show>
                        <div class="flex gap-3">
                            {move || {
                                view! {
                                    <Button button_type="submit" kind=submit_kind() disabled=busy>
                                        {move || detail.with(DetailView::submit_label)}
                                    </Button>
                                }
                            }}
                            <Button kind=ButtonKind::Secondary disabled={busy} {..} on:click=on_cancel>
                                "Cancel"
                            </Button>
                        </div>
                    </form>
                </Show>
            </div>
        </AppShell>
    }
}

#[component]
fn EditableFields(detail: RwSignal<DetailView>, busy: Signal<bool>) -> impl IntoView {
    view! {
        <div>
            <label for="user-name" class=Theme::LABEL>"Name"</label>
            <input
                id="user-name"
                type="text"
                class=Theme::INPUT
                placeholder="Jane Smith"
                disabled=move || busy.get()
                prop:value=move || detail.with(|view| view.draft().name.clone())
                on:input=move |ev| detail.update(|view| view.set_name(event_target_value(&ev)))
            />
        </div>
        <div>
            <label for="user-email" class=Theme::LABEL>"Email"</label>
            <input
                id="user-email"
                type="email"
                class=Theme::INPUT
                placeholder="jane.smith@example.com"
                disabled=move || busy.get()
                prop:value=move || detail.with(|view| view.draft().email.clone())
                on:input=move |ev| detail.update(|view| view.set_email(event_target_value(&ev)))
            />
        </div>
    }
}
